//! Error types for loading game data and tool configuration.
//!
//! Schema violations are never errors; they are collected as
//! [`Defect`](crate::defect::Defect)s. These variants cover the cases where
//! there is nothing to validate at all.

use thiserror::Error;

/// Result type alias using [`DataError`].
pub type Result<T> = std::result::Result<T, DataError>;

/// Top-level error type for data loading.
#[derive(Debug, Error)]
pub enum DataError {
    /// Failed to read a data file.
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Data file is not well-formed JSON.
    #[error("{0}")]
    Json(#[from] serde_json::Error),

    /// Failed to read a layout configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    ConfigRead {
        /// Path to the config file.
        path: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a layout configuration file.
    #[error("Failed to parse config file '{path}': {source}")]
    ConfigParse {
        /// Path to the config file.
        path: String,
        /// Underlying RON error.
        #[source]
        source: ron::error::SpannedError,
    },
}
