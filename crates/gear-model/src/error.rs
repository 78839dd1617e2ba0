//! Error types for the inventory model.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;

/// Errors raised while loading or saving inventory data.
#[derive(Debug, Error)]
pub enum ModelError {
    /// I/O error during file read.
    #[error("failed to read inventory file '{path}': {source}")]
    ReadError {
        /// The path that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// I/O error during file write.
    #[error("failed to write inventory file '{path}': {source}")]
    WriteError {
        /// The path that failed to write.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A tag name that is not one of the known tags.
    #[error("unknown tag: {0}")]
    UnknownTag(String),
}
