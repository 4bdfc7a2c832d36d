//! Unified error types for dockd.
//!
//! Each collaborator reports failures through the base [`Error`] type. The
//! docked-app manager absorbs these at its public boundary; they only reach
//! the user through the CLI.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Base error type for all dockd errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Settings backend errors.
    #[error("Settings error: {0}")]
    Settings(String),

    /// Legacy configuration store errors.
    #[error("Legacy config error: {0}")]
    Legacy(String),

    /// Key file syntax errors.
    #[error("Key file error on line {line}: {reason}")]
    KeyFile { line: usize, reason: String },

    /// Application registry errors.
    #[error("Registry error: {0}")]
    Registry(String),

    /// IO errors.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for uncategorized failures.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Creates a settings error.
    pub fn settings(msg: impl Into<String>) -> Self { Self::Settings(msg.into()) }

    /// Creates a legacy config error.
    pub fn legacy(msg: impl Into<String>) -> Self { Self::Legacy(msg.into()) }

    /// Creates a key file syntax error for the given 1-based line.
    pub fn key_file(line: usize, reason: impl Into<String>) -> Self {
        Self::KeyFile { line, reason: reason.into() }
    }

    /// Creates a registry error.
    pub fn registry(msg: impl Into<String>) -> Self { Self::Registry(msg.into()) }

    /// Creates a generic error.
    pub fn other(msg: impl Into<String>) -> Self { Self::Other(msg.into()) }
}

impl From<tempfile::PersistError> for Error {
    fn from(err: tempfile::PersistError) -> Self { Self::Io(err.error) }
}

impl From<crate::config::ConfigError> for Error {
    fn from(err: crate::config::ConfigError) -> Self { Self::Config(err.to_string()) }
}
