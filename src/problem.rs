//! Problem instances: a named sparse weight matrix.

use crate::error::Result;
use crate::matrix::SparseMatrix;
use log::info;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A subset-selection instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Problem {
    pub name: String,
    pub matrix: SparseMatrix,
}

impl Problem {
    /// Create a new problem from a matrix.
    pub fn new(name: impl Into<String>, matrix: SparseMatrix) -> Self {
        Problem {
            name: name.into(),
            matrix,
        }
    }

    /// Number of candidate indices.
    pub fn dimension(&self) -> usize {
        self.matrix.dimension()
    }

    /// Load a problem from a file. The instance is named after the file name.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Reading file: {}", path.display());

        let matrix = SparseMatrix::from_file(path)?;
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        info!(
            "Loaded {}: dimension {}, {} nonzeros",
            name,
            matrix.dimension(),
            matrix.nnz()
        );

        Ok(Problem::new(name, matrix))
    }
}
