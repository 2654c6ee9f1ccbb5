//! Git history access layer
//!
//! This module provides a trait-based abstraction over the read-only git
//! queries the tool issues, allowing for multiple implementations including
//! real repositories and mock implementations for testing.
//!
//! # Overview
//!
//! The primary abstraction is the [History] trait, which defines the four
//! queries release-notes generation needs. The concrete implementations
//! include:
//!
//! - [repository::GitHistory]: A real implementation using the `git2` crate
//! - [mock::MockHistory]: A mock implementation for testing
//!
//! Most code should depend on the [History] trait rather than concrete
//! implementations to enable easy testing and flexibility.

pub mod mock;
pub mod repository;

pub use mock::MockHistory;
pub use repository::GitHistory;

use crate::domain::CommitRecord;
use crate::error::Result;

/// Read-only git queries for release-notes generation
///
/// Every method must treat "not found" as a regular outcome: a repository
/// with no tags, an unborn HEAD, or an empty commit range are all expected
/// states, not errors.
///
/// Implementors must be `Send`; `git2::Repository` is not `Sync`, so a
/// stronger bound would rule out the real implementation.
pub trait History: Send {
    /// Tag pointing exactly at HEAD, if any.
    ///
    /// # Returns
    /// * `Ok(Some(tag))` - A tag whose target commit is HEAD
    /// * `Ok(None)` - HEAD is not tagged
    /// * `Err` - If repository state cannot be read
    fn exact_head_tag(&self) -> Result<Option<String>>;

    /// Nearest ancestor tag of HEAD.
    ///
    /// With `exclude_head` set, tags pointing at HEAD itself are skipped so
    /// the tag before the current release is returned instead.
    ///
    /// # Returns
    /// * `Ok(Some(tag))` - The closest tagged ancestor
    /// * `Ok(None)` - No tag is reachable from HEAD
    /// * `Err` - If repository state cannot be read
    fn nearest_tag(&self, exclude_head: bool) -> Result<Option<String>>;

    /// Commit subject and author pairs from `tag` (exclusive) to HEAD
    /// (inclusive), oldest first. `None` walks the entire history.
    fn commits_since(&self, tag: Option<&str>) -> Result<Vec<CommitRecord>>;

    /// Relative paths changed between `tag` and HEAD, or every tracked path
    /// at HEAD when `tag` is `None`. Sorted, without duplicates.
    fn changed_files_since(&self, tag: Option<&str>) -> Result<Vec<String>>;
}
