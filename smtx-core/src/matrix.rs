//! Sparse matrix storage keyed by coordinate pairs
//!
//! Only non-zero values are stored. Every coordinate without a stored
//! entry reads as zero, so the memory footprint tracks the entry count
//! rather than the nominal dimensions.

use alloc::collections::BTreeMap;

use crate::validation::check_bounds;
use crate::Result;

/// A single stored entry as a (row, col, value) triplet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entry {
    /// Row index, zero-based
    pub row: usize,
    /// Column index, zero-based
    pub col: usize,
    /// Stored value, never zero
    pub value: i64,
}

/// Sparse matrix with 64-bit integer entries
///
/// Entries live in an ordered map keyed by (row, col), so iteration is
/// always sorted by row and then column. Reads are total: any coordinate
/// without a stored entry yields zero, including coordinates outside the
/// dimensions. Writes are checked, making [`set_element`](Self::set_element)
/// the one place the declared dimensions are enforced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SparseMatrix {
    nrows: usize,
    ncols: usize,
    data: BTreeMap<(usize, usize), i64>,
}

impl SparseMatrix {
    /// Create an empty matrix with the given dimensions
    pub fn new(nrows: usize, ncols: usize) -> Self {
        Self {
            nrows,
            ncols,
            data: BTreeMap::new(),
        }
    }

    /// Get matrix dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// Get the number of rows
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Get the number of columns
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Get the number of stored (non-zero) entries
    pub fn nnz(&self) -> usize {
        self.data.len()
    }

    /// Check whether no entries are stored
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the value at a coordinate, or zero when no entry is stored
    ///
    /// Total over all coordinates: an out-of-bounds read cannot find a
    /// stored entry and yields zero rather than an error.
    pub fn get_element(&self, row: usize, col: usize) -> i64 {
        self.data.get(&(row, col)).copied().unwrap_or(0)
    }

    /// Set the value at a coordinate
    ///
    /// Writing zero removes any stored entry, keeping the map free of
    /// explicit zeros. Fails with `IndexOutOfBounds` when the coordinate
    /// lies outside the dimensions, leaving the matrix unmodified.
    pub fn set_element(&mut self, row: usize, col: usize, value: i64) -> Result<()> {
        check_bounds(row, col, self.nrows, self.ncols)?;

        if value == 0 {
            self.data.remove(&(row, col));
        } else {
            self.data.insert((row, col), value);
        }

        Ok(())
    }

    /// Iterate over stored entries, ascending by row and then column
    pub fn entries(&self) -> impl Iterator<Item = Entry> + '_ {
        self.data
            .iter()
            .map(|(&(row, col), &value)| Entry { row, col, value })
    }
}
