#![no_std]

//! SMTX Core - Text Sparse Matrix Format Definitions
//!
//! This crate provides the storage type, text codec, validation, and
//! arithmetic for the SMTX sparse matrix format. No I/O: documents come
//! in and go out as text.

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod error;
#[cfg(feature = "alloc")]
pub mod format;
#[cfg(feature = "alloc")]
pub mod matrix;
#[cfg(feature = "alloc")]
pub mod ops;
pub mod validation;

pub use error::*;
#[cfg(feature = "alloc")]
pub use format::*;
#[cfg(feature = "alloc")]
pub use matrix::*;
pub use validation::*;
