//! Coordinate and dimension validation for SMTX operations
//!
//! This module provides pure precondition checks shared by the storage
//! type, the codec, and the arithmetic operations. No I/O.

use crate::SmtxError;

/// Validate that a coordinate lies inside the given dimensions
///
/// Coordinates are zero-based, so `row` must be strictly below `nrows`
/// and `col` strictly below `ncols`. A matrix with a zero dimension has
/// no valid coordinates at all.
pub const fn check_bounds(
    row: usize,
    col: usize,
    nrows: usize,
    ncols: usize,
) -> Result<(), SmtxError> {
    if row >= nrows || col >= ncols {
        return Err(SmtxError::IndexOutOfBounds {
            row,
            col,
            nrows,
            ncols,
        });
    }

    Ok(())
}

/// Validate that two operands have identical dimensions
///
/// Entry-wise operations (addition, subtraction) require this. Matrices
/// that differ in either dimension are rejected, even when both hold the
/// same number of entries.
pub const fn check_same_dimensions(
    left: (usize, usize),
    right: (usize, usize),
) -> Result<(), SmtxError> {
    if left.0 != right.0 || left.1 != right.1 {
        return Err(SmtxError::DimensionMismatch { left, right });
    }

    Ok(())
}

/// Validate the inner dimension of a multiplication
///
/// The left operand's column count must equal the right operand's row
/// count. The outer dimensions are unconstrained.
pub const fn check_inner_dimension(
    left: (usize, usize),
    right: (usize, usize),
) -> Result<(), SmtxError> {
    if left.1 != right.0 {
        return Err(SmtxError::DimensionMismatch { left, right });
    }

    Ok(())
}
