use thiserror::Error;

/// Unified error type for git-relnotes operations
#[derive(Error, Debug)]
pub enum RelnotesError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Project metadata error: {0}")]
    Metadata(String),

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-relnotes
pub type Result<T> = std::result::Result<T, RelnotesError>;

impl RelnotesError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        RelnotesError::Config(msg.into())
    }

    /// Create a metadata error with context
    pub fn metadata(msg: impl Into<String>) -> Self {
        RelnotesError::Metadata(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        RelnotesError::Version(msg.into())
    }
}
