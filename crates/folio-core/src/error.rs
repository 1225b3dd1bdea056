//! Error types for folio-core

use thiserror::Error;

/// Errors from loading configuration and content
#[derive(Debug, Error)]
pub enum FolioError {
    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML could not be parsed
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// TOML could not be produced
    #[error("serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Portfolio content failed validation
    #[error("invalid content: {0}")]
    InvalidContent(String),

    /// Configuration value out of range
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

/// Errors from the progress line controller lifecycle
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimelineError {
    /// attach() called on a controller that already holds a subscription
    #[error("controller is already attached")]
    AlreadyAttached,

    /// The controller was detached; a torn-down view is never revived
    #[error("controller has been disposed")]
    Disposed,
}

pub type Result<T> = std::result::Result<T, FolioError>;
