//! Custom error types for Leftover
//!
//! Budget operations never fail; these errors cover the infrastructure
//! around them (configuration files, settings I/O).

use thiserror::Error;

/// The main error type for Leftover operations
#[derive(Error, Debug)]
pub enum LeftoverError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Unknown locale tag in settings or on the command line
    #[error("Unsupported locale: {0}")]
    UnsupportedLocale(String),
}

impl LeftoverError {
    /// Check if this is a configuration error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_) | Self::UnsupportedLocale(_))
    }
}

impl From<std::io::Error> for LeftoverError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LeftoverError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Leftover operations
pub type LeftoverResult<T> = Result<T, LeftoverError>;
