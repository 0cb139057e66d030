//! Error types for the nota-core library.

use thiserror::Error;

/// Main error type for the nota library.
///
/// Extraction itself never produces an error: a field that cannot be found
/// resolves to an absent candidate plus a warning. These variants cover the
/// surrounding concerns only (loading registries and configuration).
#[derive(Error, Debug)]
pub enum NotaError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type for the nota library.
pub type Result<T> = std::result::Result<T, NotaError>;
