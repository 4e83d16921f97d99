// src/ops/methods.rs
// Method forms of the operations, delegating to the `_op` functions.

use crate::error::Result;
use crate::matrix::Matrix;
use crate::ops::arithmetic::{add_op, mul_scalar_op};
use crate::ops::linalg::{matmul_op, transpose_op};
use crate::ops::reduction::norm_op;

impl Matrix {
    /// Element-wise sum. See [`add_op`].
    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, other: &Matrix) -> Result<Matrix> {
        add_op(self, other)
    }

    /// Matrix product `self @ other`. See [`matmul_op`].
    pub fn matmul(&self, other: &Matrix) -> Result<Matrix> {
        matmul_op(self, other)
    }

    /// Every element times `scalar`. See [`mul_scalar_op`].
    pub fn mul_scalar(&self, scalar: f64) -> Matrix {
        mul_scalar_op(self, scalar)
    }

    /// New matrix with rows and columns swapped. See [`transpose_op`].
    pub fn transpose(&self) -> Matrix {
        transpose_op(self)
    }

    /// Frobenius norm. See [`norm_op`].
    pub fn norm(&self) -> f64 {
        norm_op(self)
    }
}
