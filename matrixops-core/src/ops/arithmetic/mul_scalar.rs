use crate::matrix::Matrix;
use log::trace;

/// Multiplies every element of `a` by `scalar`, returning a new matrix of the
/// same shape. Non-finite scalars propagate per IEEE 754.
pub fn mul_scalar_op(a: &Matrix, scalar: f64) -> Matrix {
    trace!("mul_scalar_op: {:?} * {}", a.shape(), scalar);
    let result_data: Vec<f64> = a.data.iter().map(|x| x * scalar).collect();
    Matrix::from_raw(a.rows, a.cols, result_data)
}

#[cfg(test)]
#[path = "mul_scalar_test.rs"]
mod tests;
