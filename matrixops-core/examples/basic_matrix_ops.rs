// examples/basic_matrix_ops.rs
//
// Builds a few matrices, runs every operation and prints the results.
// Run with `RUST_LOG=debug cargo run --example basic_matrix_ops` to see
// the operation tracing.

use log::{error, info};
use matrixops_core::{identity, Matrix, MatrixOpsError};

fn main() -> Result<(), MatrixOpsError> {
    env_logger::init();

    let a = Matrix::from_rows(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]])?;
    let b = Matrix::from_rows(&[vec![7.0, 8.0], vec![9.0, 10.0], vec![11.0, 12.0]])?;
    info!("Created a {:?} and b {:?}", a.shape(), b.shape());

    println!("a =\n{}", a);
    println!("b =\n{}", b);
    println!("a @ b =\n{}", a.matmul(&b)?);
    println!("a + a =\n{}", a.add(&a)?);
    println!("a * 0.5 =\n{:.2}", a.mul_scalar(0.5));
    println!("a^T =\n{}", a.transpose());
    println!("||a||_F = {:.4}", a.norm());

    let eye = identity(3)?;
    println!("I(3) =\n{}", eye);
    println!("a @ I(3) == a: {}", a.matmul(&eye)? == a);

    let mut c = Matrix::full(2, 2, 3.0)?;
    c.set(0, 1, -1.0)?;
    c[(1, 0)] = 2.5;
    println!("c =\n{}", c);

    // Shape errors are reported, not fatal.
    match a.add(&b) {
        Ok(_) => unreachable!("2x3 + 3x2 must be rejected"),
        Err(e) => error!("Expected failure: {}", e),
    }
    if let Err(e) = c.get(2, 0) {
        error!("Expected failure: {}", e);
    }

    let r = Matrix::rand_uniform(2, 3, -1.0, 1.0)?;
    println!("random 2x3 =\n{:.3}", r);

    Ok(())
}
