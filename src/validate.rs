//! Boundary validation for matrix operations.
//!
//! Every engine entry point goes through these gates before touching data:
//! the gates either return `Ok(())` or a typed [`MatrizError`], and no
//! partial computation happens before they pass. Null-checks always run
//! before dimension checks, and multiplication verifies inner-dimension
//! compatibility explicitly.

use serde::{Deserialize, Serialize};

use crate::error::{MatrizError, Result};
use crate::primitives::Matrix;

/// Require a populated (non-empty) matrix.
///
/// # Errors
///
/// Returns [`MatrizError::NullMatrix`] when the matrix has no rows.
pub fn require_populated<T: Copy>(m: &Matrix<T>, context: &str) -> Result<()> {
    if m.is_empty() {
        return Err(MatrizError::null_matrix(context));
    }
    Ok(())
}

/// Require a populated square matrix.
///
/// # Errors
///
/// Returns [`MatrizError::NullMatrix`] when the matrix is empty, and
/// [`MatrizError::DimensionMismatch`] when `rows != cols`.
pub fn require_square<T: Copy>(m: &Matrix<T>, context: &str) -> Result<()> {
    require_populated(m, context)?;
    if m.rows() != m.cols() {
        return Err(MatrizError::DimensionMismatch {
            expected: format!("{context}: square matrix"),
            actual: format!("{}x{}", m.rows(), m.cols()),
        });
    }
    Ok(())
}

/// Require two populated matrices of identical shape.
///
/// # Errors
///
/// Returns [`MatrizError::NullMatrix`] when either matrix is empty, and
/// [`MatrizError::DimensionMismatch`] when the shapes differ.
pub fn require_same_shape<T: Copy>(a: &Matrix<T>, b: &Matrix<T>, context: &str) -> Result<()> {
    require_populated(a, context)?;
    require_populated(b, context)?;
    if a.shape() != b.shape() {
        return Err(MatrizError::shape_mismatch(context, a.shape(), b.shape()));
    }
    Ok(())
}

/// Require a diagonal matrix (square, zero off-diagonal).
///
/// # Errors
///
/// Returns [`MatrizError::NullMatrix`] when the matrix is empty, and
/// [`MatrizError::DimensionMismatch`] when it is non-square or has a
/// nonzero off-diagonal entry.
pub fn require_diagonal(m: &Matrix<f64>, context: &str) -> Result<()> {
    require_square(m, context)?;
    if !m.is_diagonal()? {
        return Err(MatrizError::DimensionMismatch {
            expected: format!("{context}: diagonal matrix"),
            actual: format!("{}x{} with nonzero off-diagonal entries", m.rows(), m.cols()),
        });
    }
    Ok(())
}

/// Require an identity matrix.
///
/// # Errors
///
/// Returns [`MatrizError::NullMatrix`] when the matrix is empty, and
/// [`MatrizError::DimensionMismatch`] when it is non-square or differs
/// from the identity.
pub fn require_identity(m: &Matrix<f64>, context: &str) -> Result<()> {
    require_square(m, context)?;
    if !m.is_identity()? {
        return Err(MatrizError::DimensionMismatch {
            expected: format!("{context}: identity matrix"),
            actual: format!("{}x{} non-identity", m.rows(), m.cols()),
        });
    }
    Ok(())
}

/// Require a non-empty rectangular nested grid.
///
/// This is the one place ragged input can appear; the flat-storage
/// [`Matrix`] cannot represent it.
///
/// # Errors
///
/// Returns [`MatrizError::NullMatrix`] when the grid has no rows, and
/// [`MatrizError::DimensionMismatch`] when any row's length differs from
/// the first row's.
pub fn require_rectangular<T>(grid: &[Vec<T>], context: &str) -> Result<()> {
    if grid.is_empty() {
        return Err(MatrizError::null_matrix(context));
    }
    let width = grid[0].len();
    for (i, row) in grid.iter().enumerate() {
        if row.len() != width {
            return Err(MatrizError::DimensionMismatch {
                expected: format!("{context}: {width} entries in every row"),
                actual: format!("{} entries in row {i}", row.len()),
            });
        }
    }
    Ok(())
}

/// What to do when a validation gate fails at an operation boundary.
///
/// Supplied explicitly by the caller; never read from the environment.
/// The default propagates errors to the caller as ordinary `Result`s.
///
/// # Examples
///
/// ```
/// use matriz::prelude::*;
///
/// let policy = FailurePolicy::default();
/// let a = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
/// let b = Matrix::<f64>::eye(2);
/// let sum = policy.enforce(a.add(&b)).unwrap();
/// assert_eq!(sum.get(0, 0), 2.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailurePolicy {
    /// Return failures to the caller as `Err` values.
    #[default]
    Propagate,
    /// Print the failure to stderr and terminate the process.
    Terminate,
}

impl FailurePolicy {
    /// Apply this policy to an operation outcome.
    ///
    /// Under [`FailurePolicy::Propagate`] the result is returned unchanged.
    /// Under [`FailurePolicy::Terminate`] an `Err` outcome ends the process
    /// with a nonzero status and this function does not return.
    ///
    /// # Errors
    ///
    /// Returns the original error under [`FailurePolicy::Propagate`].
    pub fn enforce<V>(self, result: Result<V>) -> Result<V> {
        match (self, result) {
            (FailurePolicy::Terminate, Err(err)) => {
                eprintln!("matriz: {err}");
                std::process::exit(2);
            }
            (_, result) => result,
        }
    }
}
