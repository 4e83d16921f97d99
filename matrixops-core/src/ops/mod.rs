//! # Matrix Operations Module (`ops`)
//!
//! Operations on [`Matrix`](crate::Matrix) values, grouped by category.
//!
//! ## Structure:
//!
//! - **Submodules:** Operations are grouped logically (`arithmetic`, `linalg`, `reduction`).
//! - **`_op` Functions:** Each operation has a core function named `xxx_op` that validates
//!   its operands and computes a freshly allocated result. The same operations are
//!   available as methods on `Matrix` (`a.add(&b)`, `a.matmul(&b)`, `a.transpose()`, ...),
//!   which simply delegate here.
//! - Inputs are never mutated. A rejected operation returns its error before any
//!   output buffer is allocated.
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: Element-wise addition and scalar multiplication.
//! - [`linalg`]: Matrix product and transpose.
//! - [`reduction`]: Reductions to a scalar (Frobenius norm).

pub mod arithmetic;
pub mod linalg;
pub mod reduction;

mod methods;
