//! End-to-end scenarios exercising the public API as a consumer would.

use matriz::prelude::*;

#[test]
fn arithmetic_scenario() {
    let a = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).expect("rectangular");
    let b = Matrix::from_rows(&[vec![5.0, 6.0], vec![7.0, 8.0]]).expect("rectangular");

    let sum = a.add(&b).expect("same shape");
    assert_eq!(sum, Matrix::from_rows(&[vec![6.0, 8.0], vec![10.0, 12.0]]).expect("rectangular"));

    let product = a.matmul(&b).expect("compatible inner dimensions");
    assert_eq!(
        product,
        Matrix::from_rows(&[vec![19.0, 22.0], vec![43.0, 50.0]]).expect("rectangular")
    );

    assert_eq!(det_cofactor(&a).expect("square"), -2.0);

    let transposed = a.transpose();
    assert_eq!(
        transposed,
        Matrix::from_rows(&[vec![1.0, 3.0], vec![2.0, 4.0]]).expect("rectangular")
    );
}

#[test]
fn identity_scenario() {
    let eye = Matrix::eye(3);
    assert!((det_gauss(&eye).expect("square") - 1.0).abs() < 1e-12);
    assert!(eye.is_identity().expect("populated"));
    assert!(eye.is_diagonal().expect("populated"));
    assert!(eye.is_permutation().expect("populated"));
    assert!((eye.trace().expect("square") - 3.0).abs() < 1e-12);
}

#[test]
fn out_of_range_scenario() {
    let m = Matrix::zeros(3, 3);
    let err = m.try_get(5, 0).unwrap_err();
    assert_eq!(err.code(), "index-out-of-range");
    assert_eq!(err.to_string(), "row index 5 out of range (bound=3)");
}

#[test]
fn uninitialized_inputs_are_refused() {
    let empty = Matrix::<f64>::empty();
    let populated = Matrix::ones(2, 2);
    assert_eq!(empty.add(&populated).unwrap_err().code(), "null-matrix");
    assert_eq!(populated.matmul(&empty).unwrap_err().code(), "null-matrix");
    assert_eq!(empty.trace().unwrap_err().code(), "null-matrix");
    assert_eq!(empty.is_identity().unwrap_err().code(), "null-matrix");
}

#[test]
fn failure_policy_at_the_boundary() {
    let policy = FailurePolicy::default();
    let a = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).expect("rectangular");
    let b = Matrix::zeros(3, 3);

    // Propagate hands the typed failure back to the caller.
    let err = policy.enforce(a.add(&b)).unwrap_err();
    assert_eq!(err.code(), "dimension-mismatch");
}

#[test]
fn display_renders_nested_rows() {
    let m = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).expect("rectangular");
    assert_eq!(m.to_string(), "[[1, 2], [3, 4]]");
    assert_eq!(m.format_row(0).expect("in bounds"), "[1, 2]");
}

#[test]
fn serde_round_trip() {
    let m = Matrix::from_rows(&[vec![1.0, 2.5], vec![-3.0, 4.0]]).expect("rectangular");
    let json = serde_json::to_string(&m).expect("matrix serializes");
    let back: Matrix<f64> = serde_json::from_str(&json).expect("matrix deserializes");
    assert_eq!(back, m);
}

#[test]
fn determinants_agree_after_a_pipeline() {
    // Build a matrix through the public ops, then check both algorithms
    // on the result.
    let a = Matrix::from_rows(&[
        vec![2.0, -1.0, 0.0],
        vec![1.0, 3.0, 1.0],
        vec![0.0, 1.0, 4.0],
    ])
    .expect("rectangular");
    let scaled = a.mul_scalar(2.0).expect("populated");
    let shifted = scaled.add(&Matrix::eye(3)).expect("same shape");

    let cofactor = det_cofactor(&shifted).expect("square");
    let gauss = det_gauss(&shifted).expect("square");
    assert!((cofactor - gauss).abs() < 1e-9 * cofactor.abs().max(1.0));
}
