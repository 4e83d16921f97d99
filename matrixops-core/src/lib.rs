//! # matrixops-core
//!
//! A dense, row-major matrix of `f64` values with bounds-checked element
//! access and a handful of arithmetic and structural operations.
//!
//! Every fallible operation returns a [`Result`] carrying a [`MatrixOpsError`];
//! nothing in the crate panics on bad input except the `Index`/`IndexMut`
//! sugar, which mirrors slice indexing.
//!
//! ```
//! use matrixops_core::{identity, Matrix};
//!
//! let a = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
//! let i = identity(2).unwrap();
//! assert_eq!(a.matmul(&i).unwrap(), a);
//! assert_eq!(a.transpose().get(0, 1).unwrap(), 3.0);
//! ```

pub mod error;
pub mod matrix;
pub mod ops;
pub mod utils;

// Re-export the main types so they are reachable as `matrixops_core::Matrix`
pub use error::{ErrorKind, MatrixOpsError, Result};
pub use matrix::{identity, Matrix};
// Re-export traits required by public trait impls
pub use approx;
pub use num_traits;
