//! Error types for wg-output.

use thiserror::Error;

use wg_core::CoreError;

/// Errors that can occur when writing or reading results.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid result row: {0}")]
    Row(#[from] CoreError),

    #[error("checkpoint line {line} is corrupt: {source}")]
    Checkpoint {
        line:   usize,
        source: serde_json::Error,
    },
}

/// Alias for `Result<T, OutputError>`.
pub type OutputResult<T> = Result<T, OutputError>;
