//! Error types for c2s-output.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when writing SUMO documents.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("cannot create {}: {source}", path.display())]
    Create {
        path:   PathBuf,
        source: std::io::Error,
    },

    #[error("cannot move {} into place: {source}", path.display())]
    Replace {
        path:   PathBuf,
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Alias for `Result<T, OutputError>`.
pub type OutputResult<T> = Result<T, OutputError>;
