//! Error types for pdf-outline.

use std::io;
use thiserror::Error;

/// Result type alias for pdf-outline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised around the analysis pipeline.
///
/// The pipeline itself never fails; these cover reading layout dumps,
/// writing results and running batches.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The layout dump could not be decoded.
    #[error("Layout parsing error: {0}")]
    LayoutParse(String),

    /// Error while serializing a result.
    #[error("Rendering error: {0}")]
    Render(String),

    /// The caller passed something unusable (e.g. a file where a directory is expected).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The worker pool for batch processing could not be built.
    #[error("Worker pool error: {0}")]
    WorkerPool(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            Error::Io(err.into())
        } else {
            Error::LayoutParse(err.to_string())
        }
    }
}
