use crate::domain::CommitRecord;
use crate::error::{RelnotesError, Result};
use crate::git::History;

/// Mock history for testing without actual git operations
///
/// Built with the `with_*` methods; `failing()` simulates a repository
/// whose every query errors, exercising the degradation paths.
#[derive(Debug, Default)]
pub struct MockHistory {
    head_tag: Option<String>,
    ancestor_tag: Option<String>,
    commits: Vec<CommitRecord>,
    changed_files: Vec<String>,
    fail: bool,
}

impl MockHistory {
    /// Create a new empty mock history
    pub fn new() -> Self {
        MockHistory::default()
    }

    /// Create a mock whose every query fails
    pub fn failing() -> Self {
        MockHistory {
            fail: true,
            ..MockHistory::default()
        }
    }

    /// Tag pointing exactly at HEAD
    pub fn with_head_tag(mut self, tag: impl Into<String>) -> Self {
        self.head_tag = Some(tag.into());
        self
    }

    /// Tag on an ancestor commit of HEAD
    pub fn with_ancestor_tag(mut self, tag: impl Into<String>) -> Self {
        self.ancestor_tag = Some(tag.into());
        self
    }

    /// Append a commit (oldest first, like the log)
    pub fn with_commit(mut self, message: &str, author: Option<&str>) -> Self {
        self.commits
            .push(CommitRecord::new(message, author.map(|a| a.to_string())));
        self
    }

    /// Append a changed file path
    pub fn with_changed_file(mut self, path: &str) -> Self {
        self.changed_files.push(path.to_string());
        self
    }

    fn guard(&self) -> Result<()> {
        if self.fail {
            Err(RelnotesError::Git(git2::Error::from_str(
                "simulated git failure",
            )))
        } else {
            Ok(())
        }
    }
}

impl History for MockHistory {
    fn exact_head_tag(&self) -> Result<Option<String>> {
        self.guard()?;
        Ok(self.head_tag.clone())
    }

    fn nearest_tag(&self, exclude_head: bool) -> Result<Option<String>> {
        self.guard()?;
        if exclude_head {
            Ok(self.ancestor_tag.clone())
        } else {
            Ok(self.head_tag.clone().or_else(|| self.ancestor_tag.clone()))
        }
    }

    fn commits_since(&self, _tag: Option<&str>) -> Result<Vec<CommitRecord>> {
        self.guard()?;
        Ok(self.commits.clone())
    }

    fn changed_files_since(&self, _tag: Option<&str>) -> Result<Vec<String>> {
        self.guard()?;
        Ok(self.changed_files.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_history_basic() {
        let history = MockHistory::new()
            .with_head_tag("v1.1.0")
            .with_ancestor_tag("v1.0.0")
            .with_commit("feat: add thing", Some("Alice"));

        assert_eq!(history.exact_head_tag().unwrap(), Some("v1.1.0".to_string()));
        assert_eq!(
            history.nearest_tag(true).unwrap(),
            Some("v1.0.0".to_string())
        );
        assert_eq!(
            history.nearest_tag(false).unwrap(),
            Some("v1.1.0".to_string())
        );
        assert_eq!(history.commits_since(None).unwrap().len(), 1);
    }

    #[test]
    fn test_mock_history_failing() {
        let history = MockHistory::failing();

        assert!(history.exact_head_tag().is_err());
        assert!(history.nearest_tag(false).is_err());
        assert!(history.commits_since(None).is_err());
        assert!(history.changed_files_since(None).is_err());
    }

    #[test]
    fn test_untagged_mock_has_no_reference() {
        let history = MockHistory::new().with_commit("fix: patch it", Some("Bob"));
        assert_eq!(history.exact_head_tag().unwrap(), None);
        assert_eq!(history.nearest_tag(false).unwrap(), None);
    }
}
