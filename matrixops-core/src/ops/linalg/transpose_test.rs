use crate::matrix::Matrix;
use crate::ops::linalg::transpose_op;
use crate::utils::testing::{check_matrix_near, create_test_matrix};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_transpose_literal() {
    let m = create_test_matrix(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    let t = transpose_op(&m);
    check_matrix_near(&t, (3, 2), &[1.0, 4.0, 2.0, 5.0, 3.0, 6.0], 0.0);
    assert_eq!(t.get(2, 0).unwrap(), 3.0);
    assert_eq!(t.get(0, 1).unwrap(), 4.0);
}

#[test]
fn test_transpose_involution() {
    let mut rng = StdRng::seed_from_u64(3);
    for (rows, cols) in [(1, 1), (1, 7), (5, 2), (4, 4)] {
        let a = Matrix::rand_uniform_with_rng(rows, cols, -10.0, 10.0, &mut rng).unwrap();
        let t = a.transpose();
        assert_eq!(t.rows(), a.cols());
        assert_eq!(t.cols(), a.rows());
        for i in 0..rows {
            for j in 0..cols {
                assert_eq!(t.get(j, i).unwrap(), a.get(i, j).unwrap());
            }
        }
        assert_eq!(t.transpose(), a);
    }
}

#[test]
fn test_transpose_leaves_input() {
    let m = create_test_matrix(1, 2, vec![1.0, 2.0]);
    let _t = m.transpose();
    assert_eq!(m.shape(), (1, 2));
}
