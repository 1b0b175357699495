// =========================================================================
// Determinant contract tests.
//
// The two algorithms are interchangeable: whatever cofactor expansion
// computes, elimination must reproduce within floating-point tolerance,
// and both must respect the classical determinant identities.
//
// References:
//   - Golub & Van Loan (2013) "Matrix Computations"
// =========================================================================

use super::*;

fn seeded(n: usize, seed: u32) -> Matrix<f64> {
    let data: Vec<f64> = (0..n * n)
        .map(|i| ((i as f64 + f64::from(seed)) * 0.37).sin() * 10.0)
        .collect();
    Matrix::from_vec(n, n, data).expect("seeded data length matches n * n")
}

mod determinant_proptest {
    use super::*;
    use proptest::prelude::*;

    /// Cofactor expansion and Gaussian elimination agree up to n = 6.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(40))]

        #[test]
        fn prop_cofactor_gauss_agree(
            n in 1..=6usize,
            seed in 0..500u32,
        ) {
            let m = seeded(n, seed);
            let cofactor = det_cofactor(&m).expect("square");
            let gauss = det_gauss(&m).expect("square");
            let scale = cofactor.abs().max(1.0);

            prop_assert!(
                (cofactor - gauss).abs() < 1e-9 * scale,
                "cofactor={} gauss={}",
                cofactor, gauss
            );
        }
    }

    /// Transposition preserves the determinant: det(A^T) = det(A)
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(30))]

        #[test]
        fn prop_det_of_transpose(
            n in 1..=5usize,
            seed in 0..500u32,
        ) {
            let m = seeded(n, seed);
            let det = det_cofactor(&m).expect("square");
            let det_t = det_cofactor(&m.transpose()).expect("square");
            let scale = det.abs().max(1.0);

            prop_assert!(
                (det - det_t).abs() < 1e-9 * scale,
                "det={} det_of_transpose={}",
                det, det_t
            );
        }
    }

    /// Swapping two rows flips the sign: det(swap(A)) = -det(A)
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(30))]

        #[test]
        fn prop_row_swap_flips_sign(
            n in 2..=5usize,
            seed in 0..500u32,
        ) {
            let m = seeded(n, seed);
            let mut swapped_rows: Vec<Vec<f64>> =
                (0..n).map(|i| m.row(i).expect("in bounds")).collect();
            swapped_rows.swap(0, 1);
            let swapped = Matrix::from_rows(&swapped_rows).expect("rectangular");

            let det = det_gauss(&m).expect("square");
            let det_swapped = det_gauss(&swapped).expect("square");
            let scale = det.abs().max(1.0);

            prop_assert!(
                (det + det_swapped).abs() < 1e-9 * scale,
                "det={} det_swapped={}",
                det, det_swapped
            );
        }
    }
}
