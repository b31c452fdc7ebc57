//! Error types for JSONL export.

use thiserror::Error;

/// Errors that can occur while writing a JSONL file.
#[derive(Error, Debug)]
pub enum JsonlExportError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
