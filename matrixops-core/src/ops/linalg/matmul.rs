// Linear-algebra product of two matrices.

use crate::error::{MatrixOpsError, Result};
use crate::matrix::{check_dims, Matrix};
use log::debug;
use num_traits::Zero;

/// Performs matrix multiplication C = A @ B.
/// A: [M, K], B: [K, N] -> C: [M, N]
///
/// Each output entry is accumulated into a zero-initialized sum in ascending
/// `k` order (naive triple loop), so results are bit-reproducible.
///
/// Fails with [`MatrixOpsError::InvalidArgument`] if `a.cols() != b.rows()`.
pub fn matmul_op(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    debug!("matmul_op: {:?} @ {:?}", a.shape(), b.shape());
    if a.cols != b.rows {
        debug!(
            "matmul_op rejected: inner dimensions {} and {} differ",
            a.cols, b.rows
        );
        return Err(MatrixOpsError::invalid_argument(
            "matmul",
            format!(
                "inner dimensions incompatible: {:?} @ {:?} ({} != {})",
                a.shape(),
                b.shape(),
                a.cols,
                b.rows
            ),
        ));
    }

    let m = a.rows;
    let k = a.cols; // == b.rows
    let n = b.cols;

    let a_data = &a.data;
    let b_data = &b.data;
    let numel = check_dims(m, n, "matmul")?;
    let mut output_data = vec![f64::zero(); numel];

    for i in 0..m {
        for j in 0..n {
            let mut sum = f64::zero();
            for l in 0..k {
                sum += a_data[i * k + l] * b_data[l * n + j];
            }
            output_data[i * n + j] = sum;
        }
    }

    Ok(Matrix::from_raw(m, n, output_data))
}

#[cfg(test)]
#[path = "matmul_test.rs"]
mod tests;
