// src/matrix/accessors.rs
use crate::error::{MatrixOpsError, Result};
use crate::matrix::Matrix;

impl Matrix {
    /// Returns the number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the total number of elements.
    pub fn numel(&self) -> usize {
        self.data.len()
    }

    /// `true` iff `rows == cols`.
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Row-major view of the elements.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Consumes the matrix and returns its row-major buffer.
    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    /// Returns row `i` as a slice.
    pub fn row(&self, i: usize) -> Result<&[f64]> {
        if i >= self.rows {
            return Err(MatrixOpsError::OutOfRange {
                index: (i, 0),
                shape: self.shape(),
            });
        }
        let start = i * self.cols;
        Ok(&self.data[start..start + self.cols])
    }

    /// Reads element `(i, j)`.
    ///
    /// Fails with [`MatrixOpsError::OutOfRange`] if `i >= rows` or `j >= cols`.
    pub fn get(&self, i: usize, j: usize) -> Result<f64> {
        let offset = self.offset(i, j)?;
        Ok(self.data[offset])
    }

    /// Writes `value` at `(i, j)`.
    ///
    /// The bounds check happens before the write, so a failed call leaves the
    /// matrix unchanged.
    pub fn set(&mut self, i: usize, j: usize, value: f64) -> Result<()> {
        let offset = self.offset(i, j)?;
        self.data[offset] = value;
        Ok(())
    }

    /// Mutable reference to element `(i, j)`, with the same bounds check as [`Matrix::get`].
    pub fn get_mut(&mut self, i: usize, j: usize) -> Result<&mut f64> {
        let offset = self.offset(i, j)?;
        Ok(&mut self.data[offset])
    }
}

#[cfg(test)]
#[path = "accessors_test.rs"]
mod tests;
