//! Arithmetic over sparse matrices
//!
//! Operations take both operands by reference and produce a fresh
//! matrix; operands are never mutated. Results are written through the
//! bounds-checked setter, so values that combine to zero leave no
//! stored entry behind.

use alloc::collections::{BTreeMap, BTreeSet};
use alloc::vec::Vec;

use crate::matrix::SparseMatrix;
use crate::validation::{check_inner_dimension, check_same_dimensions};
use crate::{Result, SmtxError};

/// Add two matrices of identical dimensions
///
/// Visits only coordinates stored in at least one operand, so the cost
/// tracks the combined entry count rather than the dense size.
pub fn add(a: &SparseMatrix, b: &SparseMatrix) -> Result<SparseMatrix> {
    combine(a, b, i64::checked_add)
}

/// Subtract the second matrix from the first
pub fn subtract(a: &SparseMatrix, b: &SparseMatrix) -> Result<SparseMatrix> {
    combine(a, b, i64::checked_sub)
}

/// Entry-wise combination over the union of stored coordinates
fn combine(
    a: &SparseMatrix,
    b: &SparseMatrix,
    op: fn(i64, i64) -> Option<i64>,
) -> Result<SparseMatrix> {
    check_same_dimensions(a.dimensions(), b.dimensions())?;

    let mut coordinates: BTreeSet<(usize, usize)> = BTreeSet::new();
    coordinates.extend(a.entries().map(|e| (e.row, e.col)));
    coordinates.extend(b.entries().map(|e| (e.row, e.col)));

    let (nrows, ncols) = a.dimensions();
    let mut result = SparseMatrix::new(nrows, ncols);

    for (row, col) in coordinates {
        let value = op(a.get_element(row, col), b.get_element(row, col))
            .ok_or(SmtxError::ValueOverflow { row, col })?;
        result.set_element(row, col, value)?;
    }

    Ok(result)
}

/// Multiply two matrices with a matching inner dimension
///
/// The right operand is first indexed by row, so each entry of the left
/// operand joins only against entries that share its middle index.
/// Products accumulate per output coordinate; sums that cancel to zero
/// produce no entry.
pub fn multiply(a: &SparseMatrix, b: &SparseMatrix) -> Result<SparseMatrix> {
    check_inner_dimension(a.dimensions(), b.dimensions())?;

    let b_rows = group_by_row(b);
    let mut accumulator: BTreeMap<(usize, usize), i64> = BTreeMap::new();

    for lhs in a.entries() {
        if let Some(row_entries) = b_rows.get(&lhs.col) {
            for &(col, rhs_value) in row_entries {
                let product = lhs
                    .value
                    .checked_mul(rhs_value)
                    .ok_or(SmtxError::ValueOverflow { row: lhs.row, col })?;

                let slot = accumulator.entry((lhs.row, col)).or_insert(0);
                *slot = slot
                    .checked_add(product)
                    .ok_or(SmtxError::ValueOverflow { row: lhs.row, col })?;
            }
        }
    }

    let mut result = SparseMatrix::new(a.nrows(), b.ncols());
    for ((row, col), value) in accumulator {
        result.set_element(row, col, value)?;
    }

    Ok(result)
}

/// Index a matrix's entries by row
///
/// This is the access pattern of the multiplication join: given a
/// middle index, fetch every (col, value) pair of the matching row
/// without scanning the whole entry set.
pub fn group_by_row(matrix: &SparseMatrix) -> BTreeMap<usize, Vec<(usize, i64)>> {
    let mut rows: BTreeMap<usize, Vec<(usize, i64)>> = BTreeMap::new();

    for entry in matrix.entries() {
        rows.entry(entry.row)
            .or_default()
            .push((entry.col, entry.value));
    }

    rows
}
