//! Error types for the distmat-prune library.

use thiserror::Error;

/// Main error type for the library.
#[derive(Error, Debug)]
pub enum PruneError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Ragged row {row}: expected {expected} distance cells, got {actual}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Empty data: {0}")]
    EmptyData(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, PruneError>;
