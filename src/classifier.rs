use semver::Version;

use crate::config::AttributionConfig;
use crate::domain::release::is_full_major;
use crate::domain::{CommitRecord, ParsedCommit, ReleaseType};

/// Commits bucketed by conventional-commit type, each entry pre-formatted
/// as a Markdown list line.
///
/// The three buckets partition the input: every commit lands in exactly
/// one of them.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CommitGroups {
    pub feat: Vec<String>,
    pub fix: Vec<String>,
    pub misc: Vec<String>,
}

impl CommitGroups {
    /// Infer the release type from version shape and bucket contents.
    ///
    /// Version shape wins: an x.0.0 version is a major release regardless
    /// of what the commits say. Otherwise features make a minor release,
    /// fixes a patch, and anything else is miscellaneous.
    pub fn release_type(&self, version: &Version) -> ReleaseType {
        if is_full_major(version) {
            ReleaseType::Major
        } else if !self.feat.is_empty() {
            ReleaseType::Minor
        } else if !self.fix.is_empty() {
            ReleaseType::Patch
        } else {
            ReleaseType::Misc
        }
    }
}

/// Partition commits into feat/fix/misc buckets.
///
/// Only the `feat` and `fix` types get their own bucket; every other type,
/// and every subject without a conventional prefix, is miscellaneous.
pub fn group_commits(commits: &[CommitRecord], attribution: &AttributionConfig) -> CommitGroups {
    let mut groups = CommitGroups::default();

    for commit in commits {
        let line = format_line(commit, attribution);

        match ParsedCommit::parse(&commit.message) {
            Some(parsed) if parsed.r#type == "feat" => groups.feat.push(line),
            Some(parsed) if parsed.r#type == "fix" => groups.fix.push(line),
            _ => groups.misc.push(line),
        }
    }

    groups
}

/// Render one commit as a Markdown list line, crediting the author unless
/// the name is empty or belongs to a configured bot identity.
fn format_line(commit: &CommitRecord, attribution: &AttributionConfig) -> String {
    match commit.author.as_deref() {
        Some(author) if !author.is_empty() && !attribution.is_bot(author) => {
            format!("- {} _(by {})_", commit.message, author)
        }
        _ => format!("- {}", commit.message),
    }
}
