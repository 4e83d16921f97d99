// matrixops-core/src/ops/arithmetic/add.rs

use crate::error::{MatrixOpsError, Result};
use crate::matrix::Matrix;
use log::debug;

/// Performs element-wise addition of two matrices of identical shape.
///
/// Returns a new `Matrix`; neither input is modified. Fails with
/// [`MatrixOpsError::InvalidArgument`] if the row or column counts differ.
pub fn add_op(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    debug!("add_op: {:?} + {:?}", a.shape(), b.shape());
    if a.shape() != b.shape() {
        debug!("add_op rejected: shapes {:?} and {:?} differ", a.shape(), b.shape());
        return Err(MatrixOpsError::invalid_argument(
            "add",
            format!(
                "matrix dimensions must match: {:?} vs {:?}",
                a.shape(),
                b.shape()
            ),
        ));
    }

    let result_data: Vec<f64> = a
        .data
        .iter()
        .zip(&b.data)
        .map(|(x, y)| x + y)
        .collect();

    Ok(Matrix::from_raw(a.rows, a.cols, result_data))
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
