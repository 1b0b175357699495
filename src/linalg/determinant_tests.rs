pub(crate) use super::*;

fn assert_close(actual: f64, expected: f64) {
    let scale = expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() < 1e-9 * scale,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_det_1x1_is_sole_cell() {
    let m = Matrix::from_rows(&[vec![7.5]]).expect("rectangular");
    assert_close(det_cofactor(&m).expect("square"), 7.5);
    assert_close(det_gauss(&m).expect("square"), 7.5);
}

#[test]
fn test_det_2x2() {
    let m = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).expect("rectangular");
    assert_close(det_cofactor(&m).expect("square"), -2.0);
    assert_close(det_gauss(&m).expect("square"), -2.0);
}

#[test]
fn test_det_3x3() {
    // det = 6(-14-40) - 1(28-10) + 1(32+4) = -306
    let m = Matrix::from_rows(&[
        vec![6.0, 1.0, 1.0],
        vec![4.0, -2.0, 5.0],
        vec![2.0, 8.0, 7.0],
    ])
    .expect("rectangular");
    assert_close(det_cofactor(&m).expect("square"), -306.0);
    assert_close(det_gauss(&m).expect("square"), -306.0);
}

#[test]
fn test_det_needs_pivot_swap() {
    // Leading zero forces a row swap; the swap flips the sign.
    let m = Matrix::from_rows(&[vec![0.0, 1.0], vec![1.0, 0.0]]).expect("rectangular");
    assert_close(det_cofactor(&m).expect("square"), -1.0);
    assert_close(det_gauss(&m).expect("square"), -1.0);
}

#[test]
fn test_det_identity_is_one() {
    for n in 0..6 {
        let eye = Matrix::eye(n);
        assert_close(det_cofactor(&eye).expect("square"), 1.0);
        assert_close(det_gauss(&eye).expect("square"), 1.0);
    }
}

#[test]
fn test_det_empty_is_empty_product() {
    let empty = Matrix::<f64>::empty();
    assert_close(det_cofactor(&empty).expect("0x0 yields the empty product"), 1.0);
    assert_close(det_gauss(&empty).expect("0x0 yields the empty product"), 1.0);
}

#[test]
fn test_det_zero_row_is_zero() {
    let m = Matrix::from_rows(&[
        vec![1.0, 2.0, 3.0],
        vec![0.0, 0.0, 0.0],
        vec![4.0, 5.0, 6.0],
    ])
    .expect("rectangular");
    assert_close(det_cofactor(&m).expect("square"), 0.0);
    assert_close(det_gauss(&m).expect("square"), 0.0);
}

#[test]
fn test_det_identical_rows_is_zero() {
    let m = Matrix::from_rows(&[
        vec![1.0, 2.0, 3.0],
        vec![2.0, 4.0, 6.0],
        vec![1.0, 0.0, 1.0],
    ])
    .expect("rectangular");
    assert_close(det_cofactor(&m).expect("square"), 0.0);
    // Singular input is a normal 0.0 result for elimination too.
    assert_close(det_gauss(&m).expect("square"), 0.0);
}

#[test]
fn test_det_triangular_is_diagonal_product() {
    let m = Matrix::from_rows(&[
        vec![2.0, 7.0, 1.0],
        vec![0.0, 3.0, 5.0],
        vec![0.0, 0.0, 4.0],
    ])
    .expect("rectangular");
    assert_close(det_cofactor(&m).expect("square"), 24.0);
    assert_close(det_gauss(&m).expect("square"), 24.0);
}

#[test]
fn test_det_non_square_error() {
    let m = Matrix::zeros(2, 3);
    assert_eq!(det_cofactor(&m).unwrap_err().code(), "dimension-mismatch");
    assert_eq!(det_gauss(&m).unwrap_err().code(), "dimension-mismatch");
}

#[test]
fn test_det_gauss_does_not_mutate_input() {
    let m = Matrix::from_rows(&[vec![0.0, 1.0], vec![2.0, 3.0]]).expect("rectangular");
    let before = m.clone();
    let _ = det_gauss(&m).expect("square");
    assert_eq!(m, before);
}

#[test]
fn test_det_grid_entry_points() {
    let grid = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
    assert_close(det_cofactor_grid(&grid).expect("square grid"), -2.0);
    assert_close(det_gauss_grid(&grid).expect("square grid"), -2.0);
}

#[test]
fn test_det_grid_rejects_bad_input() {
    let ragged = vec![vec![1.0, 2.0], vec![3.0]];
    assert_eq!(
        det_cofactor_grid(&ragged).unwrap_err().code(),
        "dimension-mismatch"
    );
    let none: Vec<Vec<f64>> = vec![];
    assert_eq!(det_gauss_grid(&none).unwrap_err().code(), "null-matrix");
}

#[test]
fn test_det_algorithms_agree_on_4x4() {
    let m = Matrix::from_rows(&[
        vec![4.0, 3.0, 2.0, 1.0],
        vec![1.0, -2.0, 3.0, 4.0],
        vec![3.0, 3.0, -1.0, 2.0],
        vec![2.0, 1.0, 4.0, -3.0],
    ])
    .expect("rectangular");
    let cofactor = det_cofactor(&m).expect("square");
    let gauss = det_gauss(&m).expect("square");
    assert_close(gauss, cofactor);
}
