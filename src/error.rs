//! Error types for matriz operations.
//!
//! Provides rich failure context for library consumers.

use std::fmt;

/// Main error type for matriz operations.
///
/// Every fallible operation in the crate reports one of three kinds:
/// a missing or uninitialized matrix, a violated dimensional precondition,
/// or an out-of-range index. Each kind carries a human-readable message and
/// a stable machine-readable [`code`](MatrizError::code).
///
/// # Examples
///
/// ```
/// use matriz::error::MatrizError;
///
/// let err = MatrizError::shape_mismatch("add", (2, 2), (3, 2));
/// assert!(err.to_string().contains("dimension mismatch"));
/// assert_eq!(err.code(), "dimension-mismatch");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrizError {
    /// Matrix or grid was absent or uninitialized where a populated one
    /// was required.
    NullMatrix {
        /// Operation that required a populated matrix
        context: String,
    },

    /// Dimensional precondition violated (non-square where square required,
    /// mismatched shapes, incompatible inner dimensions, or a structural
    /// requirement like diagonality that did not hold).
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// Row or column index outside the valid bounds.
    IndexOutOfRange {
        /// Axis the index addresses ("row" or "column")
        axis: &'static str,
        /// Offending index
        index: usize,
        /// Exclusive upper bound for the axis
        bound: usize,
    },
}

impl fmt::Display for MatrizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrizError::NullMatrix { context } => {
                write!(f, "{context}: matrix is uninitialized (no rows)")
            }
            MatrizError::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "Matrix dimension mismatch: expected {expected}, got {actual}"
                )
            }
            MatrizError::IndexOutOfRange { axis, index, bound } => {
                write!(f, "{axis} index {index} out of range (bound={bound})")
            }
        }
    }
}

impl std::error::Error for MatrizError {}

impl MatrizError {
    /// Stable machine-readable code for this error kind.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            MatrizError::NullMatrix { .. } => "null-matrix",
            MatrizError::DimensionMismatch { .. } => "dimension-mismatch",
            MatrizError::IndexOutOfRange { .. } => "index-out-of-range",
        }
    }

    /// Create a null-matrix error naming the operation that was refused.
    #[must_use]
    pub fn null_matrix(context: &str) -> Self {
        Self::NullMatrix {
            context: context.to_string(),
        }
    }

    /// Create a dimension mismatch error from two shapes.
    #[must_use]
    pub fn shape_mismatch(context: &str, expected: (usize, usize), actual: (usize, usize)) -> Self {
        Self::DimensionMismatch {
            expected: format!("{context}: {}x{}", expected.0, expected.1),
            actual: format!("{}x{}", actual.0, actual.1),
        }
    }

    /// Create an index out of range error for a row or column axis.
    #[must_use]
    pub fn index_out_of_range(axis: &'static str, index: usize, bound: usize) -> Self {
        Self::IndexOutOfRange { axis, index, bound }
    }
}

#[allow(clippy::cmp_owned)]
impl PartialEq<&str> for MatrizError {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, MatrizError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_matrix_display() {
        let err = MatrizError::null_matrix("determinant");
        let msg = err.to_string();
        assert!(msg.contains("determinant"));
        assert!(msg.contains("uninitialized"));
    }

    #[test]
    fn test_dimension_mismatch_display() {
        let err = MatrizError::shape_mismatch("add", (2, 3), (3, 3));
        let msg = err.to_string();
        assert!(msg.contains("dimension mismatch"));
        assert!(msg.contains("add: 2x3"));
        assert!(msg.contains("3x3"));
    }

    #[test]
    fn test_index_out_of_range_display() {
        let err = MatrizError::index_out_of_range("row", 5, 3);
        let msg = err.to_string();
        assert!(msg.contains("row index 5"));
        assert!(msg.contains("bound=3"));
    }

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(MatrizError::null_matrix("x").code(), "null-matrix");
        assert_eq!(
            MatrizError::shape_mismatch("x", (1, 1), (2, 2)).code(),
            "dimension-mismatch"
        );
        assert_eq!(
            MatrizError::index_out_of_range("column", 1, 1).code(),
            "index-out-of-range"
        );
    }

    #[test]
    fn test_error_eq_str() {
        let err = MatrizError::index_out_of_range("row", 5, 3);
        assert!(err == "row index 5 out of range (bound=3)");
    }

    #[test]
    fn test_error_debug_impl() {
        let err = MatrizError::null_matrix("trace");
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("NullMatrix"));
    }

    #[test]
    fn test_error_send_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}
        assert_send::<MatrizError>();
        assert_sync::<MatrizError>();
    }
}
