use git2::{Oid, Repository, TreeWalkMode, TreeWalkResult};
use std::collections::HashMap;
use std::path::Path;

use crate::domain::CommitRecord;
use crate::error::{RelnotesError, Result};
use crate::git::History;

/// Wrapper around git2::Repository with our trait interface
pub struct GitHistory {
    repo: Repository,
}

impl GitHistory {
    /// Open or discover a git repository starting from `path`.
    ///
    /// # Returns
    /// * `Ok(GitHistory)` - Successfully initialized repository wrapper
    /// * `Err` - If `path` is not inside a git repository
    pub fn discover<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::discover(path.as_ref())?;
        Ok(GitHistory { repo })
    }

    fn head_oid(&self) -> Result<Oid> {
        let head = self.repo.head()?;
        head.target()
            .ok_or_else(|| RelnotesError::Git(git2::Error::from_str("HEAD has no target commit")))
    }

    /// Map of peeled tag target OIDs to tag names.
    ///
    /// Handles both lightweight and annotated tags. When several tags point
    /// at the same commit, one of them wins.
    fn tag_targets(&self) -> Result<HashMap<Oid, String>> {
        let mut targets = HashMap::new();
        let tags = self.repo.tag_names(None)?;

        for tag_name in tags.iter().flatten() {
            if let Ok(reference) = self.repo.find_reference(&format!("refs/tags/{}", tag_name)) {
                if let Ok(object) = reference.peel(git2::ObjectType::Commit) {
                    targets.insert(object.id(), tag_name.to_string());
                }
            }
        }

        Ok(targets)
    }

    /// OID of the commit a tag points at, peeling annotated tags.
    fn tag_oid(&self, tag_name: &str) -> Result<Option<Oid>> {
        match self
            .repo
            .find_reference(&format!("refs/tags/{}", tag_name))
        {
            Ok(reference) => {
                let object = reference.peel(git2::ObjectType::Commit)?;
                Ok(Some(object.id()))
            }
            Err(e) if e.code() == git2::ErrorCode::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Every blob path in a tree, sorted.
    fn tracked_files(&self, tree: &git2::Tree) -> Result<Vec<String>> {
        let mut files = Vec::new();

        tree.walk(TreeWalkMode::PreOrder, |dir, entry| {
            if entry.kind() == Some(git2::ObjectType::Blob) {
                if let Some(name) = entry.name() {
                    files.push(format!("{}{}", dir, name));
                }
            }
            TreeWalkResult::Ok
        })?;

        files.sort();
        Ok(files)
    }
}

impl History for GitHistory {
    fn exact_head_tag(&self) -> Result<Option<String>> {
        let head = self.head_oid()?;
        Ok(self.tag_targets()?.get(&head).cloned())
    }

    fn nearest_tag(&self, exclude_head: bool) -> Result<Option<String>> {
        let head = self.head_oid()?;
        let targets = self.tag_targets()?;

        // Walk the commit history backwards from HEAD until a tagged
        // commit shows up
        let mut revwalk = self.repo.revwalk()?;
        revwalk.push(head)?;

        for oid in revwalk {
            let oid = oid?;
            if exclude_head && oid == head {
                continue;
            }
            if let Some(tag) = targets.get(&oid) {
                return Ok(Some(tag.clone()));
            }
        }

        Ok(None)
    }

    fn commits_since(&self, tag: Option<&str>) -> Result<Vec<CommitRecord>> {
        let head = self.head_oid()?;
        let stop = match tag {
            Some(name) => self.tag_oid(name)?,
            None => None,
        };

        let mut revwalk = self.repo.revwalk()?;
        revwalk.push(head)?;

        let mut commits = Vec::new();
        for oid in revwalk {
            let oid = oid?;

            // Stop once the reference tag is reached; it belongs to the
            // previous release
            if stop == Some(oid) {
                break;
            }

            let commit = self.repo.find_commit(oid)?;
            let message = commit.summary().unwrap_or("(empty message)").to_string();
            let author = commit.author().name().map(|name| name.to_string());

            commits.push(CommitRecord { message, author });
        }

        // Reverse to get chronological order (oldest first)
        commits.reverse();
        Ok(commits)
    }

    fn changed_files_since(&self, tag: Option<&str>) -> Result<Vec<String>> {
        let head_tree = self.repo.find_commit(self.head_oid()?)?.tree()?;

        let tag_name = match tag {
            Some(name) => name,
            None => return self.tracked_files(&head_tree),
        };

        let tag_oid = self.tag_oid(tag_name)?.ok_or_else(|| {
            RelnotesError::Git(git2::Error::from_str(&format!(
                "tag '{}' not found",
                tag_name
            )))
        })?;
        let tag_tree = self.repo.find_commit(tag_oid)?.tree()?;

        let diff = self
            .repo
            .diff_tree_to_tree(Some(&tag_tree), Some(&head_tree), None)?;

        let mut files = Vec::new();
        for delta in diff.deltas() {
            if let Some(path) = delta.new_file().path().or_else(|| delta.old_file().path()) {
                files.push(path.to_string_lossy().into_owned());
            }
        }

        files.sort();
        files.dedup();
        Ok(files)
    }
}
