//! Error types for the ILS solver.

use std::path::PathBuf;
use thiserror::Error;

/// Unified error type for loading instances and running the search.
#[derive(Error, Debug)]
pub enum IlsError {
    /// I/O errors (reading instances, writing reports)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed instance content. Line 0 means the error is not tied to a line.
    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// The matrix has dimension zero, so no initial solution can be sampled
    #[error("Matrix has dimension 0: cannot sample an initial solution")]
    EmptyMatrix,

    /// Instance discovery found nothing to run
    #[error("No files ending in '{suffix}' found in {}", dir.display())]
    NoInstances { dir: PathBuf, suffix: String },

    /// Configuration validation errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl IlsError {
    /// Creates a parse error for the given line.
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        IlsError::Parse {
            line,
            message: message.into(),
        }
    }

    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        IlsError::Config(message.into())
    }
}

/// Result type alias for solver operations.
pub type Result<T> = std::result::Result<T, IlsError>;
