//! Reference-point resolution and history collection.
//!
//! Every git failure in this module degrades to a conservative default
//! instead of propagating: a missing tag means "full history", a failed
//! log query yields a single placeholder commit, a failed diff yields the
//! project manifest as the only changed file. The tool is a best-effort
//! reporter and must still produce a document from a hostile repository.

use crate::domain::CommitRecord;
use crate::git::History;

/// Subject of the synthetic commit used when the log query fails outright.
pub const PLACEHOLDER_SUBJECT: &str = "Initial release";

/// Everything read from history in one pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistorySnapshot {
    /// Tag used as the comparison baseline; `None` covers full history.
    pub reference: Option<String>,
    pub commits: Vec<CommitRecord>,
    pub changed_files: Vec<String>,
}

/// Find the tag to compare against.
///
/// If HEAD is exactly tagged, the tag before it is used, so regenerating
/// notes right after tagging a release still covers that release's commits.
/// Otherwise the nearest ancestor tag wins. No tag, or any lookup failure,
/// means full history.
pub fn resolve_reference_point<H: History>(history: &H) -> Option<String> {
    match history.exact_head_tag() {
        Ok(Some(_)) => history.nearest_tag(true).ok().flatten(),
        Ok(None) => history.nearest_tag(false).ok().flatten(),
        Err(_) => None,
    }
}

/// Commits since the reference tag, oldest first.
///
/// A failed query yields one placeholder record; an empty range stays
/// empty.
pub fn collect_commits<H: History>(history: &H, tag: Option<&str>) -> Vec<CommitRecord> {
    match history.commits_since(tag) {
        Ok(commits) => commits,
        Err(_) => vec![CommitRecord::new(PLACEHOLDER_SUBJECT, None)],
    }
}

/// Paths changed since the reference tag, sorted.
///
/// A failed query yields the single `fallback` path.
pub fn collect_changed_files<H: History>(
    history: &H,
    tag: Option<&str>,
    fallback: &str,
) -> Vec<String> {
    match history.changed_files_since(tag) {
        Ok(mut files) => {
            files.sort();
            files
        }
        Err(_) => vec![fallback.to_string()],
    }
}

/// Run all three collectors against a repository, or synthesize the full
/// fallback snapshot when no repository could be opened at all.
pub fn snapshot<H: History>(history: Option<&H>, fallback_file: &str) -> HistorySnapshot {
    match history {
        Some(history) => {
            let reference = resolve_reference_point(history);
            let commits = collect_commits(history, reference.as_deref());
            let changed_files = collect_changed_files(history, reference.as_deref(), fallback_file);
            HistorySnapshot {
                reference,
                commits,
                changed_files,
            }
        }
        None => HistorySnapshot {
            reference: None,
            commits: vec![CommitRecord::new(PLACEHOLDER_SUBJECT, None)],
            changed_files: vec![fallback_file.to_string()],
        },
    }
}
