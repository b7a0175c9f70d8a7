//! JSON interchange for SMTX matrices
//!
//! The map-keyed storage does not serialize directly, so documents are
//! mirrored as a dimension pair plus an entry list. Imported documents
//! pass every entry back through the bounds-checked setter, which also
//! drops explicit zeros and resolves duplicate coordinates.

use serde::{Deserialize, Serialize};

use crate::file_io::FileError;
use smtx_core::{Entry, SmtxError, SparseMatrix};

/// JSON mirror of a matrix document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixDocument {
    /// Number of rows
    pub rows: usize,
    /// Number of columns
    pub cols: usize,
    /// Non-zero entries, sorted by row and then column
    pub entries: Vec<Entry>,
}

impl From<&SparseMatrix> for MatrixDocument {
    fn from(matrix: &SparseMatrix) -> Self {
        Self {
            rows: matrix.nrows(),
            cols: matrix.ncols(),
            entries: matrix.entries().collect(),
        }
    }
}

impl TryFrom<MatrixDocument> for SparseMatrix {
    type Error = SmtxError;

    fn try_from(document: MatrixDocument) -> Result<Self, Self::Error> {
        let mut matrix = SparseMatrix::new(document.rows, document.cols);
        for entry in document.entries {
            matrix.set_element(entry.row, entry.col, entry.value)?;
        }

        Ok(matrix)
    }
}

/// Serialize a matrix to pretty-printed JSON
pub fn to_json(matrix: &SparseMatrix) -> Result<String, FileError> {
    Ok(serde_json::to_string_pretty(&MatrixDocument::from(matrix))?)
}

/// Deserialize a matrix from JSON, re-validating every entry
pub fn from_json(text: &str) -> Result<SparseMatrix, FileError> {
    let document: MatrixDocument = serde_json::from_str(text)?;

    Ok(SparseMatrix::try_from(document)?)
}
