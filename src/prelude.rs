//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use matriz::prelude::*;
//! ```

pub use crate::error::{MatrizError, Result};
pub use crate::linalg::{det_cofactor, det_cofactor_grid, det_gauss, det_gauss_grid};
pub use crate::primitives::Matrix;
pub use crate::validate::FailurePolicy;
