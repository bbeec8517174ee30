use thiserror::Error;

/// Unified error type for release automation operations
#[derive(Error, Debug)]
pub enum ReleaseError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Tag parsing error: {0}")]
    TagParse(String),

    #[error("Event payload error: {0}")]
    Event(String),

    #[error("Hosting platform error: {0}")]
    Host(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in auto-release
pub type Result<T> = std::result::Result<T, ReleaseError>;

impl ReleaseError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseError::Config(msg.into())
    }

    /// Create a tag parsing error with context
    pub fn tag_parse(msg: impl Into<String>) -> Self {
        ReleaseError::TagParse(msg.into())
    }

    /// Create an event payload error with context
    pub fn event(msg: impl Into<String>) -> Self {
        ReleaseError::Event(msg.into())
    }

    /// Create a hosting platform error with context
    pub fn host(msg: impl Into<String>) -> Self {
        ReleaseError::Host(msg.into())
    }
}
