//! Determinants of square matrices.
//!
//! Two interchangeable algorithms: recursive cofactor (Laplace) expansion,
//! exponential-time and meant for small matrices (n up to ~6), and Gaussian
//! elimination with partial pivoting, cubic-time for larger ones. Both
//! agree within floating-point tolerance on the same input, and neither
//! ever mutates the caller's matrix.
//!
//! A singular matrix is a normal `0.0` result, not an error. Near-singular
//! input is subject to ordinary floating-point cancellation.

use crate::error::Result;
use crate::primitives::Matrix;
use crate::validate;

/// Determinant by recursive cofactor expansion along the first row.
///
/// The `0x0` determinant is the empty product, `1.0`. Exponential time;
/// intended for small matrices.
///
/// # Examples
///
/// ```
/// use matriz::linalg::det_cofactor;
/// use matriz::Matrix;
///
/// let a = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
/// assert_eq!(det_cofactor(&a).unwrap(), -2.0);
/// ```
///
/// # Errors
///
/// Returns [`crate::MatrizError::DimensionMismatch`] if the matrix is not
/// square.
pub fn det_cofactor(m: &Matrix<f64>) -> Result<f64> {
    if m.is_empty() {
        return Ok(1.0);
    }
    validate::require_square(m, "det_cofactor")?;
    cofactor_expand(m)
}

fn cofactor_expand(m: &Matrix<f64>) -> Result<f64> {
    let n = m.rows();
    if n == 1 {
        return Ok(m.get(0, 0));
    }
    let mut det = 0.0;
    for j in 0..n {
        // Exact integer sign alternation, not a floating-point power.
        let sign = if j % 2 == 0 { 1.0 } else { -1.0 };
        det += sign * m.get(0, j) * cofactor_expand(&m.minor(0, j)?)?;
    }
    Ok(det)
}

/// Determinant by Gaussian elimination with partial pivoting.
///
/// The `0x0` determinant is the empty product, `1.0`; the identity
/// short-circuits to `1.0`. Elimination runs on a scratch copy of the
/// entries — the caller's matrix is never touched. A column with no
/// nonzero pivot candidate means the matrix is singular and the result is
/// `0.0`.
///
/// # Examples
///
/// ```
/// use matriz::linalg::det_gauss;
/// use matriz::Matrix;
///
/// assert_eq!(det_gauss(&Matrix::eye(3)).unwrap(), 1.0);
/// ```
///
/// # Errors
///
/// Returns [`crate::MatrizError::DimensionMismatch`] if the matrix is not
/// square.
pub fn det_gauss(m: &Matrix<f64>) -> Result<f64> {
    if m.is_empty() {
        return Ok(1.0);
    }
    validate::require_square(m, "det_gauss")?;
    if m.is_identity()? {
        return Ok(1.0);
    }

    let n = m.rows();
    let mut a: Vec<f64> = m.as_slice().to_vec();
    let mut det = 1.0;

    for col in 0..n {
        // Partial pivoting: take the row with the largest magnitude in
        // this column.
        let mut pivot_row = col;
        let mut pivot_mag = a[col * n + col].abs();
        for row in (col + 1)..n {
            let mag = a[row * n + col].abs();
            if mag > pivot_mag {
                pivot_mag = mag;
                pivot_row = row;
            }
        }

        if a[pivot_row * n + col] == 0.0 {
            // No usable pivot anywhere in the column: singular.
            return Ok(0.0);
        }

        if pivot_row != col {
            for j in 0..n {
                a.swap(col * n + j, pivot_row * n + j);
            }
            det = -det;
        }

        let pivot = a[col * n + col];
        det *= pivot;

        for row in (col + 1)..n {
            let factor = a[row * n + col] / pivot;
            for j in col..n {
                a[row * n + j] -= factor * a[col * n + j];
            }
        }
    }

    Ok(det)
}

/// Cofactor-expansion determinant of a nested grid.
///
/// Wraps the grid in a [`Matrix`] first.
///
/// # Errors
///
/// Returns an error if the grid is empty, ragged, or not square.
pub fn det_cofactor_grid(grid: &[Vec<f64>]) -> Result<f64> {
    det_cofactor(&Matrix::from_rows(grid)?)
}

/// Gaussian-elimination determinant of a nested grid.
///
/// Wraps the grid in a [`Matrix`] first.
///
/// # Errors
///
/// Returns an error if the grid is empty, ragged, or not square.
pub fn det_gauss_grid(grid: &[Vec<f64>]) -> Result<f64> {
    det_gauss(&Matrix::from_rows(grid)?)
}

#[cfg(test)]
#[path = "determinant_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "tests_determinant_contract.rs"]
mod tests_contract;
