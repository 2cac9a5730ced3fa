use thiserror::Error;

/// Unified error type for verbump operations
#[derive(Error, Debug)]
pub enum VerbumpError {
    #[error("Invalid version format: {0}")]
    InvalidVersionFormat(String),

    #[error("Invalid bump kind: {0}")]
    InvalidBumpKind(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Changelog write failed: {0}")]
    ChangelogWrite(String),

    #[error("Staging changes failed: {0}")]
    AddFailed(String),

    #[error("Commit failed: {0}")]
    CommitFailed(String),

    #[error("Tag creation failed: {0}")]
    TagFailed(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenience type alias for Results in verbump
pub type Result<T> = std::result::Result<T, VerbumpError>;

impl VerbumpError {
    /// Create a version format error with context
    pub fn version(msg: impl Into<String>) -> Self {
        VerbumpError::InvalidVersionFormat(msg.into())
    }

    /// Create a bump kind error with context
    pub fn bump_kind(msg: impl Into<String>) -> Self {
        VerbumpError::InvalidBumpKind(msg.into())
    }

    /// Create a changelog write error with context
    pub fn changelog(msg: impl Into<String>) -> Self {
        VerbumpError::ChangelogWrite(msg.into())
    }

    /// Create a staging error with context
    pub fn add(msg: impl Into<String>) -> Self {
        VerbumpError::AddFailed(msg.into())
    }

    /// Create a commit error with context
    pub fn commit(msg: impl Into<String>) -> Self {
        VerbumpError::CommitFailed(msg.into())
    }

    /// Create a tag error with context
    pub fn tag(msg: impl Into<String>) -> Self {
        VerbumpError::TagFailed(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        VerbumpError::Config(msg.into())
    }
}
