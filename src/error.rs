use thiserror::Error;

/// Unified error type for release operations
///
/// Every failure propagates to the top of the process unchanged; there is no
/// retry or rollback. The operator fixes the underlying issue and re-runs.
#[derive(Error, Debug)]
pub enum ReleaseError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Changelog has no releasable items: {0}")]
    EmptyChangelog(String),

    #[error("Repository is not clean:\n{0}")]
    DirtyRepository(String),

    #[error("Tag parsing error: {0}")]
    TagParse(String),

    #[error("External tool failed: {0}")]
    ExternalTool(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Manifest error: {0}")]
    Manifest(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in tandem-release
pub type Result<T> = std::result::Result<T, ReleaseError>;

impl ReleaseError {
    /// Create an invalid-argument error with context
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        ReleaseError::InvalidArgument(msg.into())
    }

    /// Create an empty-changelog error with context
    pub fn empty_changelog(msg: impl Into<String>) -> Self {
        ReleaseError::EmptyChangelog(msg.into())
    }

    /// Create a dirty-repository error carrying the raw status output
    pub fn dirty_repository(status: impl Into<String>) -> Self {
        ReleaseError::DirtyRepository(status.into())
    }

    /// Create a tag-parse error with context
    pub fn tag_parse(msg: impl Into<String>) -> Self {
        ReleaseError::TagParse(msg.into())
    }

    /// Create an external-tool error with context
    pub fn external_tool(msg: impl Into<String>) -> Self {
        ReleaseError::ExternalTool(msg.into())
    }

    /// Create a manifest error with context
    pub fn manifest(msg: impl Into<String>) -> Self {
        ReleaseError::Manifest(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseError::Config(msg.into())
    }
}
