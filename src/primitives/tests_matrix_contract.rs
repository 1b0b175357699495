// =========================================================================
// Matrix algebra contract tests.
//
// Each property pins one algebraic law of the dense matrix type against
// randomized shapes and entries.
//
// References:
//   - Golub & Van Loan (2013) "Matrix Computations"
// =========================================================================

use super::*;

fn seeded(rows: usize, cols: usize, seed: u32) -> Matrix<f64> {
    let data: Vec<f64> = (0..rows * cols)
        .map(|i| ((i as f64 + f64::from(seed)) * 0.37).sin() * 10.0)
        .collect();
    Matrix::from_vec(rows, cols, data).expect("seeded data length matches rows * cols")
}

mod matrix_proptest {
    use super::*;
    use proptest::prelude::*;

    /// Transpose involution: (A^T)^T = A
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(30))]

        #[test]
        fn prop_transpose_involution(
            rows in 1..=8usize,
            cols in 1..=8usize,
            seed in 0..500u32,
        ) {
            let a = seeded(rows, cols, seed);
            let att = a.transpose().transpose();

            prop_assert_eq!(att.shape(), a.shape());
            for i in 0..rows {
                for j in 0..cols {
                    prop_assert!(
                        (att.get(i, j) - a.get(i, j)).abs() < 1e-12,
                        "(A^T)^T[{},{}] != A[{},{}]",
                        i, j, i, j
                    );
                }
            }
        }
    }

    /// Transpose swaps shape: (m x n)^T = (n x m)
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(30))]

        #[test]
        fn prop_transpose_swaps_shape(
            rows in 1..=8usize,
            cols in 1..=8usize,
        ) {
            let a = Matrix::zeros(rows, cols);
            prop_assert_eq!(a.transpose().shape(), (cols, rows));
        }
    }

    /// Add then subtract round-trips: (A + B) - B = A
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(30))]

        #[test]
        fn prop_add_sub_round_trip(
            rows in 1..=8usize,
            cols in 1..=8usize,
            seed in 0..500u32,
        ) {
            let a = seeded(rows, cols, seed);
            let b = seeded(rows, cols, seed.wrapping_add(17));
            let round_trip = a
                .add(&b)
                .expect("same shape by construction")
                .sub(&b)
                .expect("same shape by construction");

            for i in 0..rows {
                for j in 0..cols {
                    prop_assert!(
                        (round_trip.get(i, j) - a.get(i, j)).abs() < 1e-9,
                        "((A+B)-B)[{},{}] != A[{},{}]",
                        i, j, i, j
                    );
                }
            }
        }
    }

    /// Matmul shape: (m x k) * (k x n) = (m x n)
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(30))]

        #[test]
        fn prop_matmul_shape(
            m in 1..=6usize,
            k in 1..=6usize,
            n in 1..=6usize,
            seed in 0..500u32,
        ) {
            let a = seeded(m, k, seed);
            let b = seeded(k, n, seed.wrapping_add(3));
            let c = a.matmul(&b).expect("inner dimensions match by construction");
            prop_assert_eq!(c.shape(), (m, n));
        }
    }

    /// Identity matmul: I * A = A
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(20))]

        #[test]
        fn prop_identity_matmul(
            rows in 1..=6usize,
            cols in 1..=6usize,
            seed in 0..500u32,
        ) {
            let a = seeded(rows, cols, seed);
            let eye = Matrix::eye(rows);
            let result = eye.matmul(&a).expect("inner dimensions match by construction");

            for i in 0..rows {
                for j in 0..cols {
                    prop_assert!(
                        (result.get(i, j) - a.get(i, j)).abs() < 1e-9,
                        "(I*A)[{},{}] != A[{},{}]",
                        i, j, i, j
                    );
                }
            }
        }
    }

    /// Scalar multiplication distributes over addition: k(A + B) = kA + kB
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(20))]

        #[test]
        fn prop_scalar_distributes(
            rows in 1..=6usize,
            cols in 1..=6usize,
            seed in 0..500u32,
            k in -5.0..5.0f64,
        ) {
            let a = seeded(rows, cols, seed);
            let b = seeded(rows, cols, seed.wrapping_add(29));
            let left = a
                .add(&b)
                .expect("same shape by construction")
                .mul_scalar(k)
                .expect("populated");
            let right = a
                .mul_scalar(k)
                .expect("populated")
                .add(&b.mul_scalar(k).expect("populated"))
                .expect("same shape by construction");

            for i in 0..rows {
                for j in 0..cols {
                    prop_assert!(
                        (left.get(i, j) - right.get(i, j)).abs() < 1e-9,
                        "k(A+B)[{},{}] != (kA+kB)[{},{}]",
                        i, j, i, j
                    );
                }
            }
        }
    }
}
