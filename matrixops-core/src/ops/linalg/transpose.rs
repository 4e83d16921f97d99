use crate::matrix::Matrix;
use log::trace;

/// Returns the transpose of `a`: shape `(cols, rows)` with `result(j, i) == a(i, j)`.
///
/// Unlike a strided view, this always copies into a new contiguous buffer.
pub fn transpose_op(a: &Matrix) -> Matrix {
    trace!("transpose_op: {:?}", a.shape());
    let (rows, cols) = a.shape();
    let mut output_data = Vec::with_capacity(rows * cols);
    // Walk the output in row-major order: output row j is input column j.
    for j in 0..cols {
        for i in 0..rows {
            output_data.push(a.data[i * cols + j]);
        }
    }
    Matrix::from_raw(cols, rows, output_data)
}

#[cfg(test)]
#[path = "transpose_test.rs"]
mod tests;
