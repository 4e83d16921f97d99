// src/matrix/mod.rs

use crate::error::{MatrixOpsError, Result};
use log::debug;

// --- Implementation modules ---
mod accessors;
pub mod create;
mod traits;

pub use create::identity;

/// A dense two-dimensional matrix of `f64` values.
///
/// Elements are stored contiguously in row-major order: element `(i, j)`
/// lives at offset `i * cols + j` of the backing buffer.
///
/// Invariants held by every live `Matrix`:
/// - `rows >= 1` and `cols >= 1`;
/// - `data.len() == rows * cols`.
///
/// Each `Matrix` owns its buffer outright. `clone()` copies the elements, so
/// writing through one copy is never visible through another.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    pub(crate) rows: usize,
    pub(crate) cols: usize,
    pub(crate) data: Vec<f64>,
}

impl Matrix {
    /// Creates a `rows x cols` matrix filled with `0.0`.
    ///
    /// Fails with [`MatrixOpsError::InvalidArgument`] if either dimension is zero
    /// or `rows * cols` overflows `usize`.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        Self::full(rows, cols, 0.0)
    }

    /// Creates a `rows x cols` matrix with every element set to `init`.
    ///
    /// Fails with [`MatrixOpsError::InvalidArgument`] if either dimension is zero
    /// or `rows * cols` overflows `usize`.
    pub fn full(rows: usize, cols: usize, init: f64) -> Result<Self> {
        let numel = check_dims(rows, cols, "Matrix::full")?;
        Ok(Matrix::from_raw(rows, cols, vec![init; numel]))
    }

    /// Creates a matrix from a row-major buffer.
    ///
    /// The buffer length must equal `rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        let numel = check_dims(rows, cols, "Matrix::from_vec")?;
        if data.len() != numel {
            debug!(
                "Matrix::from_vec rejected: buffer of {} elements for {}x{}",
                data.len(),
                rows,
                cols
            );
            return Err(MatrixOpsError::invalid_argument(
                "Matrix::from_vec",
                format!(
                    "data length {} does not match shape {}x{}",
                    data.len(),
                    rows,
                    cols
                ),
            ));
        }
        Ok(Matrix::from_raw(rows, cols, data))
    }

    /// Creates a matrix from a slice of rows. All rows must share the length
    /// of the first one, which must be non-empty.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        let numel = check_dims(n_rows, n_cols, "Matrix::from_rows")?;

        let mut data = Vec::with_capacity(numel);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n_cols {
                debug!(
                    "Matrix::from_rows rejected: row {} has {} elements, expected {}",
                    i,
                    row.len(),
                    n_cols
                );
                return Err(MatrixOpsError::invalid_argument(
                    "Matrix::from_rows",
                    format!("row {} has length {}, expected {}", i, row.len(), n_cols),
                ));
            }
            data.extend_from_slice(row);
        }
        Ok(Matrix::from_raw(n_rows, n_cols, data))
    }

    /// Builds a matrix from parts that are already known to be consistent.
    /// Used by operations whose output shape derives from validated inputs.
    pub(crate) fn from_raw(rows: usize, cols: usize, data: Vec<f64>) -> Self {
        debug_assert!(rows >= 1 && cols >= 1);
        debug_assert_eq!(Some(data.len()), rows.checked_mul(cols));
        Matrix { rows, cols, data }
    }

    /// Row-major offset of `(i, j)`, or `OutOfRange` if the index is outside the matrix.
    #[inline]
    pub(crate) fn offset(&self, i: usize, j: usize) -> Result<usize> {
        if i >= self.rows || j >= self.cols {
            return Err(MatrixOpsError::OutOfRange {
                index: (i, j),
                shape: (self.rows, self.cols),
            });
        }
        Ok(i * self.cols + j)
    }
}

/// Rejects a zero row or column count (either one alone is enough) and a
/// `rows * cols` that does not fit in `usize`. Returns the element count.
pub(crate) fn check_dims(rows: usize, cols: usize, operation: &str) -> Result<usize> {
    if rows == 0 || cols == 0 {
        debug!("{} rejected: dimensions {}x{}", operation, rows, cols);
        return Err(MatrixOpsError::invalid_argument(
            operation,
            format!("matrix dimensions must be positive, got {}x{}", rows, cols),
        ));
    }
    rows.checked_mul(cols).ok_or_else(|| {
        debug!("{} rejected: dimensions {}x{} overflow", operation, rows, cols);
        MatrixOpsError::invalid_argument(
            operation,
            format!("matrix dimensions overflow: {}x{}", rows, cols),
        )
    })
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
