//! SMTX - Text Sparse Matrix Toolkit
//!
//! This library provides file access, JSON interchange, and a parallel
//! multiplication path for the SMTX text sparse matrix format.
//!
//! ## Architecture
//!
//! SMTX follows a clean specification/implementation separation:
//!
//! - **smtx-core**: Storage, text codec, validation, and arithmetic (no I/O)
//! - **smtx**: File access, JSON interchange, parallelism, and the CLI
//!
//! ## Quick Start
//!
//! ```rust
//! use smtx::{ops, parse, render};
//!
//! fn example() -> smtx::Result<()> {
//!     let a = parse("rows=2\ncols=2\n(0, 0, 1)\n")?;
//!     let b = parse("rows=2\ncols=2\n(0, 0, 2)\n(1, 1, 7)\n")?;
//!
//!     let sum = ops::add(&a, &b)?;
//!     assert_eq!(render(&sum), "rows=2\ncols=2\n(0, 0, 3)\n(1, 1, 7)\n");
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! ## Features
//!
//! - **Whole-document I/O**: Load and save matrices as plain text files
//! - **JSON interchange**: Mirror documents as entry lists for other tools
//! - **Parallel multiplication**: Row-partitioned work via rayon
//! - **Bounds safety**: Every imported entry re-validated by smtx-core

// Re-export core format definitions and operations
pub use smtx_core::{
    // Storage
    SparseMatrix, Entry,
    // Text codec
    parse, render, ROWS_PREFIX, COLS_PREFIX,
    // Error handling
    SmtxError, ParseErrorKind, Result,
    // Validation utilities
    check_bounds, check_inner_dimension, check_same_dimensions,
    // Arithmetic
    ops,
};

// Implementation modules
#[cfg(feature = "serde")]
pub mod export;
pub mod file_io;
pub mod par;

// Public exports
pub use file_io::{load_matrix, save_matrix, FileError};

// JSON interchange features
#[cfg(feature = "serde")]
pub use export::{from_json, to_json, MatrixDocument};
