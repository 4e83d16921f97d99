use matrixops_core::Matrix;

// Helper function to create a matrix from nested row literals for testing.
// Added allow(dead_code) because usage across different test crates isn't detected easily.
#[allow(dead_code)]
pub(crate) fn create_test_matrix(rows: &[Vec<f64>]) -> Matrix {
    Matrix::from_rows(rows).expect("Test matrix creation failed")
}

// Asserts every element of `m` equals `value`.
#[allow(dead_code)]
pub(crate) fn assert_all_eq(m: &Matrix, value: f64) {
    for i in 0..m.rows() {
        for j in 0..m.cols() {
            assert_eq!(m.get(i, j).unwrap(), value, "element ({}, {})", i, j);
        }
    }
}
