use crate::matrix::Matrix;

/// Checks if a matrix has the expected shape and data within tolerance.
/// Panics with the first mismatching element otherwise.
pub fn check_matrix_near(
    actual: &Matrix,
    expected_shape: (usize, usize),
    expected_data: &[f64],
    tolerance: f64,
) {
    assert_eq!(actual.shape(), expected_shape, "Shape mismatch");

    let actual_data = actual.as_slice();
    assert_eq!(
        actual_data.len(),
        expected_data.len(),
        "Data length mismatch"
    );

    for (i, (a, e)) in actual_data.iter().zip(expected_data.iter()).enumerate() {
        let diff = (a - e).abs();
        if diff > tolerance {
            panic!(
                "Data mismatch at index {} (row {}, col {}): actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i,
                i / expected_shape.1,
                i % expected_shape.1,
                a,
                e,
                diff,
                tolerance
            );
        }
    }
}

/// Helper to create a matrix from a row-major literal for testing purposes.
#[cfg(test)]
pub(crate) fn create_test_matrix(rows: usize, cols: usize, data: Vec<f64>) -> Matrix {
    Matrix::from_vec(rows, cols, data).expect("Failed to create test matrix")
}
