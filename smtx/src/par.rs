//! Row-partitioned parallel multiplication
//!
//! Each output row of the product depends only on one row of the left
//! operand, so rows make natural work units: partial results never
//! overlap and merge without locks.

use std::collections::BTreeMap;

use rayon::prelude::*;

use smtx_core::ops::group_by_row;
use smtx_core::{check_inner_dimension, Result, SmtxError, SparseMatrix};

/// Multiply two matrices, spreading rows of the left operand across threads
///
/// Produces exactly the same result, and the same errors, as
/// [`smtx_core::ops::multiply`]. Worth reaching for when the left
/// operand carries entries in many distinct rows.
pub fn multiply(a: &SparseMatrix, b: &SparseMatrix) -> Result<SparseMatrix> {
    check_inner_dimension(a.dimensions(), b.dimensions())?;

    let a_rows = group_by_row(a);
    let b_rows = group_by_row(b);

    // Every partition finishes before any failure surfaces; the merge
    // walks rows in ascending order, so the reported coordinate is the
    // one the serial path reports.
    let computed: Vec<(usize, Result<BTreeMap<usize, i64>>)> = a_rows
        .par_iter()
        .map(|(&row, lhs_entries)| (row, multiply_row(row, lhs_entries, &b_rows)))
        .collect();

    let mut result = SparseMatrix::new(a.nrows(), b.ncols());
    for (row, columns) in computed {
        for (col, value) in columns? {
            result.set_element(row, col, value)?;
        }
    }

    Ok(result)
}

/// Compute one output row of the product, keyed by column
fn multiply_row(
    row: usize,
    lhs_entries: &[(usize, i64)],
    b_rows: &BTreeMap<usize, Vec<(usize, i64)>>,
) -> Result<BTreeMap<usize, i64>> {
    let mut columns: BTreeMap<usize, i64> = BTreeMap::new();

    for &(middle, lhs_value) in lhs_entries {
        if let Some(rhs_entries) = b_rows.get(&middle) {
            for &(col, rhs_value) in rhs_entries {
                let product = lhs_value
                    .checked_mul(rhs_value)
                    .ok_or(SmtxError::ValueOverflow { row, col })?;

                let slot = columns.entry(col).or_insert(0);
                *slot = slot
                    .checked_add(product)
                    .ok_or(SmtxError::ValueOverflow { row, col })?;
            }
        }
    }

    Ok(columns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use smtx_core::ops;

    fn patterned_matrix(nrows: usize, ncols: usize, nnz: usize) -> SparseMatrix {
        let mut matrix = SparseMatrix::new(nrows, ncols);
        for i in 0..nnz {
            let row = (i * 31) % nrows;
            let col = (i * 37) % ncols;
            let value = (i % 19) as i64 - 9;
            matrix.set_element(row, col, value).unwrap();
        }
        matrix
    }

    #[test]
    fn test_parallel_matches_serial() {
        let a = patterned_matrix(40, 60, 500);
        let b = patterned_matrix(60, 30, 500);

        assert_eq!(multiply(&a, &b), ops::multiply(&a, &b));
    }

    #[test]
    fn test_parallel_small_product() {
        let mut a = SparseMatrix::new(2, 2);
        a.set_element(0, 0, 1).unwrap();
        a.set_element(1, 1, 2).unwrap();
        let mut b = SparseMatrix::new(2, 2);
        b.set_element(0, 0, 3).unwrap();
        b.set_element(0, 1, 4).unwrap();

        let product = multiply(&a, &b).unwrap();
        assert_eq!(product.get_element(0, 0), 3);
        assert_eq!(product.get_element(0, 1), 4);
        assert_eq!(product.nnz(), 2);
    }

    #[test]
    fn test_parallel_dimension_mismatch() {
        let a = SparseMatrix::new(2, 3);
        let b = SparseMatrix::new(2, 3);

        assert_eq!(
            multiply(&a, &b),
            Err(SmtxError::DimensionMismatch {
                left: (2, 3),
                right: (2, 3),
            })
        );
    }

    #[test]
    fn test_parallel_overflow_reported() {
        let mut a = SparseMatrix::new(1, 1);
        a.set_element(0, 0, i64::MAX).unwrap();
        let mut b = SparseMatrix::new(1, 1);
        b.set_element(0, 0, 2).unwrap();

        assert_eq!(
            multiply(&a, &b),
            Err(SmtxError::ValueOverflow { row: 0, col: 0 })
        );
    }

    #[test]
    fn test_parallel_overflow_agrees_with_serial() {
        // Every output row overflows; both paths must report row 0
        let mut a = SparseMatrix::new(64, 1);
        for row in 0..64 {
            a.set_element(row, 0, i64::MAX).unwrap();
        }
        let mut b = SparseMatrix::new(1, 2);
        b.set_element(0, 0, 2).unwrap();
        b.set_element(0, 1, 2).unwrap();

        assert_eq!(multiply(&a, &b), ops::multiply(&a, &b));
        assert_eq!(
            multiply(&a, &b),
            Err(SmtxError::ValueOverflow { row: 0, col: 0 })
        );
    }
}
