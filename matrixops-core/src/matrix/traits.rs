// src/matrix/traits.rs

use crate::error::Result;
use crate::matrix::Matrix;
use crate::ops::arithmetic::{add_op, mul_scalar_op};
use crate::ops::linalg::matmul_op;
use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use std::fmt;
use std::ops::{Add, Index, IndexMut, Mul};

// --- Indexing ---

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    /// Panics on an out-of-range index, like slice indexing. Use
    /// [`Matrix::get`] for the checked form.
    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        match self.offset(i, j) {
            Ok(offset) => &self.data[offset],
            Err(e) => panic!("{}", e),
        }
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f64 {
        match self.offset(i, j) {
            Ok(offset) => &mut self.data[offset],
            Err(e) => panic!("{}", e),
        }
    }
}

// --- Display ---

impl fmt::Display for Matrix {
    /// One bracketed row per line: `[[1, 2],\n [3, 4]]`.
    /// A precision (`{:.2}`) is applied to every element.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, row) in self.data.chunks(self.cols).enumerate() {
            if i > 0 {
                write!(f, ",\n ")?;
            }
            write!(f, "[")?;
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                match f.precision() {
                    Some(p) => write!(f, "{:.*}", p, value)?,
                    None => write!(f, "{}", value)?,
                }
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}

// --- Approximate equality ---

impl AbsDiffEq for Matrix {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl RelativeEq for Matrix {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl UlpsEq for Matrix {
    fn default_max_ulps() -> u32 {
        f64::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: f64, max_ulps: u32) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}

// --- Operator overloads ---
// Shape-checked operators return a Result, scalar scaling cannot fail.

impl Add<&Matrix> for &Matrix {
    type Output = Result<Matrix>;

    fn add(self, rhs: &Matrix) -> Result<Matrix> {
        add_op(self, rhs)
    }
}

impl Mul<&Matrix> for &Matrix {
    type Output = Result<Matrix>;

    fn mul(self, rhs: &Matrix) -> Result<Matrix> {
        matmul_op(self, rhs)
    }
}

impl Mul<f64> for &Matrix {
    type Output = Matrix;

    fn mul(self, scalar: f64) -> Matrix {
        mul_scalar_op(self, scalar)
    }
}

impl Mul<f64> for Matrix {
    type Output = Matrix;

    /// Scales the owned buffer in place and returns it.
    fn mul(mut self, scalar: f64) -> Matrix {
        self.data.iter_mut().for_each(|x| *x *= scalar);
        self
    }
}

#[cfg(test)]
#[path = "traits_test.rs"]
mod tests;
