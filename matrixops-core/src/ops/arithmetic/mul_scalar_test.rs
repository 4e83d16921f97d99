use crate::matrix::Matrix;
use crate::ops::arithmetic::mul_scalar_op;
use crate::utils::testing::create_test_matrix;

#[test]
fn test_mul_scalar_literal() {
    let m = Matrix::full(2, 2, 3.0).unwrap();
    let result = mul_scalar_op(&m, 2.0);
    assert_eq!(result.shape(), (2, 2));
    assert!(result.as_slice().iter().all(|&x| x == 6.0));
}

#[test]
fn test_mul_scalar_elementwise() {
    let a = create_test_matrix(2, 3, vec![1.0, -2.0, 0.5, 0.0, 7.0, -3.25]);
    let s = -1.5;
    let result = a.mul_scalar(s);
    for i in 0..2 {
        for j in 0..3 {
            assert_eq!(result.get(i, j).unwrap(), a.get(i, j).unwrap() * s);
        }
    }
}

#[test]
fn test_mul_scalar_non_finite() {
    let a = create_test_matrix(1, 2, vec![1.0, 0.0]);
    let inf = mul_scalar_op(&a, f64::INFINITY);
    assert_eq!(inf.get(0, 0).unwrap(), f64::INFINITY);
    // 0 * inf is NaN
    assert!(inf.get(0, 1).unwrap().is_nan());

    let nan = mul_scalar_op(&a, f64::NAN);
    assert!(nan.as_slice().iter().all(|x| x.is_nan()));
}
