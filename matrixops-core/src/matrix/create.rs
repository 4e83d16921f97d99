// src/matrix/create.rs

use crate::error::{MatrixOpsError, Result};
use crate::matrix::{check_dims, Matrix};
use log::debug;
use num_traits::{One, Zero};
use rand::distributions::Uniform;
use rand::Rng;
use rand_distr::Normal;

/// Creates an `n x n` identity matrix.
///
/// `identity(0)` fails with the same error as a zero-dimension constructor.
pub fn identity(n: usize) -> Result<Matrix> {
    let mut result = Matrix::zeros(n, n)?;
    for i in 0..n {
        result.data[i * n + i] = f64::one();
    }
    Ok(result)
}

// Implementation block for Matrix creation methods (zeros, ones, random, etc.)
impl Matrix {
    /// Creates a new `Matrix` filled with zeros.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        Self::full(rows, cols, f64::zero())
    }

    /// Creates a new `Matrix` filled with ones.
    pub fn ones(rows: usize, cols: usize) -> Result<Self> {
        Self::full(rows, cols, f64::one())
    }

    /// Same as the free function [`identity`].
    pub fn identity(n: usize) -> Result<Self> {
        identity(n)
    }

    /// Creates a matrix of samples drawn uniformly from `[low, high)` using the
    /// thread-local generator.
    pub fn rand_uniform(rows: usize, cols: usize, low: f64, high: f64) -> Result<Self> {
        Self::rand_uniform_with_rng(rows, cols, low, high, &mut rand::thread_rng())
    }

    /// Like [`Matrix::rand_uniform`] but draws from the supplied generator, which
    /// makes the result reproducible with a seeded RNG.
    pub fn rand_uniform_with_rng<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        low: f64,
        high: f64,
        rng: &mut R,
    ) -> Result<Self> {
        let numel = check_dims(rows, cols, "Matrix::rand_uniform")?;
        // Uniform::new panics on an empty or non-finite range.
        if !(low < high && (high - low).is_finite()) {
            debug!("Matrix::rand_uniform rejected: range [{}, {})", low, high);
            return Err(MatrixOpsError::invalid_argument(
                "Matrix::rand_uniform",
                format!("invalid range [{}, {})", low, high),
            ));
        }
        let dist = Uniform::new(low, high);
        let data: Vec<f64> = rng.sample_iter(dist).take(numel).collect();
        Ok(Matrix::from_raw(rows, cols, data))
    }

    /// Creates a matrix of samples drawn from a normal distribution with the
    /// given mean and standard deviation, using the thread-local generator.
    pub fn randn(rows: usize, cols: usize, mean: f64, std_dev: f64) -> Result<Self> {
        Self::randn_with_rng(rows, cols, mean, std_dev, &mut rand::thread_rng())
    }

    /// Like [`Matrix::randn`] but draws from the supplied generator.
    pub fn randn_with_rng<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        mean: f64,
        std_dev: f64,
        rng: &mut R,
    ) -> Result<Self> {
        let numel = check_dims(rows, cols, "Matrix::randn")?;
        let dist = Normal::new(mean, std_dev).map_err(|e| {
            debug!("Matrix::randn rejected: mean {}, std {}: {}", mean, std_dev, e);
            MatrixOpsError::invalid_argument(
                "Matrix::randn",
                format!("invalid normal parameters (mean {}, std {}): {}", mean, std_dev, e),
            )
        })?;
        let data: Vec<f64> = rng.sample_iter(dist).take(numel).collect();
        Ok(Matrix::from_raw(rows, cols, data))
    }
}

#[cfg(test)]
#[path = "create_test.rs"]
mod tests;
