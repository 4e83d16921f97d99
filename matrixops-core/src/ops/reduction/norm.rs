use crate::matrix::Matrix;
use log::trace;
use num_traits::{Float, Zero};

/// Computes the Frobenius norm: the square root of the sum of squares of all
/// elements, accumulated in storage order.
pub fn norm_op(a: &Matrix) -> f64 {
    let sum_sq = a.data.iter().fold(f64::zero(), |acc, &x| acc + x * x);
    let norm = Float::sqrt(sum_sq);
    trace!("norm_op: {:?} -> {}", a.shape(), norm);
    norm
}

#[cfg(test)]
#[path = "norm_test.rs"]
mod tests;
