//! Linear-algebra routines over dense matrices.

mod determinant;

pub use determinant::{det_cofactor, det_cofactor_grid, det_gauss, det_gauss_grid};
