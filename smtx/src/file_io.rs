//! File access for SMTX documents
//!
//! Reads and writes whole documents through the core codec. The core
//! crate never touches the filesystem; these helpers are the only place
//! paths appear.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use smtx_core::{format, SmtxError, SparseMatrix};

/// Errors from loading or saving a document
#[derive(Debug)]
pub enum FileError {
    /// Filesystem access failed
    Io(io::Error),
    /// The document text was rejected by the codec
    Format(SmtxError),
    /// JSON interchange failed
    #[cfg(feature = "serde")]
    Json(serde_json::Error),
}

impl fmt::Display for FileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileError::Io(err) => write!(f, "i/o error: {err}"),
            FileError::Format(err) => write!(f, "{err}"),
            #[cfg(feature = "serde")]
            FileError::Json(err) => write!(f, "json error: {err}"),
        }
    }
}

impl std::error::Error for FileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FileError::Io(err) => Some(err),
            FileError::Format(_) => None,
            #[cfg(feature = "serde")]
            FileError::Json(err) => Some(err),
        }
    }
}

impl From<io::Error> for FileError {
    fn from(err: io::Error) -> Self {
        FileError::Io(err)
    }
}

impl From<SmtxError> for FileError {
    fn from(err: SmtxError) -> Self {
        FileError::Format(err)
    }
}

#[cfg(feature = "serde")]
impl From<serde_json::Error> for FileError {
    fn from(err: serde_json::Error) -> Self {
        FileError::Json(err)
    }
}

/// Load a matrix from a document file
pub fn load_matrix<P: AsRef<Path>>(path: P) -> Result<SparseMatrix, FileError> {
    let text = fs::read_to_string(path)?;

    Ok(format::parse(&text)?)
}

/// Save a matrix to a document file in canonical rendering
pub fn save_matrix<P: AsRef<Path>>(path: P, matrix: &SparseMatrix) -> Result<(), FileError> {
    fs::write(path, format::render(matrix))?;

    Ok(())
}
