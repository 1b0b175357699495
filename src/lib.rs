//! Matriz: educational dense-matrix library in pure Rust.
//!
//! Matriz provides a dense, in-memory matrix of `f64` values with
//! elementwise arithmetic, multiplication, transposition, trace,
//! structural predicates, and two interchangeable determinant algorithms.
//! Every operation validates its input up front and reports typed,
//! machine-readable failures; correctness is the bar, not speed.
//!
//! # Quick Start
//!
//! ```
//! use matriz::prelude::*;
//!
//! let a = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
//! let b = Matrix::from_rows(&[vec![5.0, 6.0], vec![7.0, 8.0]]).unwrap();
//!
//! let sum = a.add(&b).unwrap();
//! assert_eq!(sum.get(1, 1), 12.0);
//!
//! let product = a.matmul(&b).unwrap();
//! assert_eq!(product.get(0, 0), 19.0);
//!
//! assert_eq!(det_cofactor(&a).unwrap(), -2.0);
//! assert!(Matrix::eye(3).is_identity().unwrap());
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: the core [`Matrix`] type — construction, access,
//!   predicates, elementwise arithmetic, multiplication, transposition
//! - [`linalg`]: determinant algorithms (cofactor expansion and Gaussian
//!   elimination with partial pivoting)
//! - [`validate`]: boundary validation gates and the explicit
//!   [`validate::FailurePolicy`]
//! - [`error`]: typed failures with stable error codes

pub mod error;
pub mod linalg;
pub mod prelude;
pub mod primitives;
pub mod validate;

pub use error::{MatrizError, Result};
pub use primitives::Matrix;
