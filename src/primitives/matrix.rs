//! Matrix type for 2D numeric data.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{MatrizError, Result};
use crate::validate;

/// A dense 2D matrix of floating-point values (row-major storage).
///
/// A matrix is either *populated* (`rows > 0` and `cols > 0`, with
/// `rows * cols` backing entries) or *empty* (no backing storage,
/// `rows == cols == 0`). The empty state stands in for an uninitialized
/// matrix and is refused by every arithmetic operation; it is distinct
/// from a populated all-zero matrix. Constructors given a zero dimension
/// normalize to the empty state.
///
/// # Examples
///
/// ```
/// use matriz::primitives::Matrix;
///
/// let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).expect("data length matches rows * cols");
/// assert_eq!(m.shape(), (2, 3));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Copy> Matrix<T> {
    /// Creates the empty (uninitialized) matrix.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            data: Vec::new(),
            rows: 0,
            cols: 0,
        }
    }

    /// Creates a new matrix from a flat row-major vector of data.
    ///
    /// A zero `rows` or `cols` with empty data yields the empty matrix.
    ///
    /// # Errors
    ///
    /// Returns an error if data length doesn't match rows * cols.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(MatrizError::DimensionMismatch {
                expected: format!("from_vec: {rows}x{cols} = {} entries", rows * cols),
                actual: format!("{} entries", data.len()),
            });
        }
        if rows == 0 || cols == 0 {
            return Ok(Self::empty());
        }
        Ok(Self { data, rows, cols })
    }

    /// Creates a new matrix by deep-copying a nested grid of rows.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::NullMatrix`] when the grid has no rows and
    /// [`MatrizError::DimensionMismatch`] when the rows are ragged.
    pub fn from_rows(grid: &[Vec<T>]) -> Result<Self> {
        validate::require_rectangular(grid, "from_rows")?;
        let cols = grid[0].len();
        if cols == 0 {
            return Ok(Self::empty());
        }
        let mut data = Vec::with_capacity(grid.len() * cols);
        for row in grid {
            data.extend_from_slice(row);
        }
        Ok(Self {
            data,
            rows: grid.len(),
            cols,
        })
    }

    /// Creates a matrix with every entry set to `value`.
    #[must_use]
    pub fn filled(rows: usize, cols: usize, value: T) -> Self {
        if rows == 0 || cols == 0 {
            return Self::empty();
        }
        Self {
            data: vec![value; rows * cols],
            rows,
            cols,
        }
    }

    /// Returns the shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether this is the empty (uninitialized) matrix.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Whether the matrix is populated and has as many rows as columns.
    ///
    /// The empty matrix is not square; squareness is meaningless without
    /// entries.
    #[must_use]
    pub fn is_square(&self) -> bool {
        !self.is_empty() && self.rows == self.cols
    }

    /// Gets element at (row, col).
    ///
    /// Unchecked fast path for validated loops; see [`Matrix::try_get`]
    /// for the fallible accessor.
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> T {
        debug_assert!(row < self.rows && col < self.cols);
        self.data[row * self.cols + col]
    }

    /// Sets element at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        debug_assert!(row < self.rows && col < self.cols);
        self.data[row * self.cols + col] = value;
    }

    /// Gets element at (row, col), checking bounds.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::IndexOutOfRange`] when either index is out
    /// of bounds.
    pub fn try_get(&self, row: usize, col: usize) -> Result<T> {
        if row >= self.rows {
            return Err(MatrizError::index_out_of_range("row", row, self.rows));
        }
        if col >= self.cols {
            return Err(MatrizError::index_out_of_range("column", col, self.cols));
        }
        Ok(self.data[row * self.cols + col])
    }

    /// Sets element at (row, col), checking bounds.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::IndexOutOfRange`] when either index is out
    /// of bounds.
    pub fn try_set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        if row >= self.rows {
            return Err(MatrizError::index_out_of_range("row", row, self.rows));
        }
        if col >= self.cols {
            return Err(MatrizError::index_out_of_range("column", col, self.cols));
        }
        self.data[row * self.cols + col] = value;
        Ok(())
    }

    /// Returns a copy of a row.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::IndexOutOfRange`] when the row index is out
    /// of bounds.
    pub fn row(&self, row: usize) -> Result<Vec<T>> {
        if row >= self.rows {
            return Err(MatrizError::index_out_of_range("row", row, self.rows));
        }
        let start = row * self.cols;
        Ok(self.data[start..start + self.cols].to_vec())
    }

    /// Returns a copy of a column.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::IndexOutOfRange`] when the column index is
    /// out of bounds.
    pub fn column(&self, col: usize) -> Result<Vec<T>> {
        if col >= self.cols {
            return Err(MatrizError::index_out_of_range("column", col, self.cols));
        }
        Ok((0..self.rows)
            .map(|row| self.data[row * self.cols + col])
            .collect())
    }

    /// Returns the underlying row-major data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns the minor: a copy with one row and one column removed.
    ///
    /// Remaining rows and columns keep their relative order. The minor of
    /// a single-row or single-column matrix is the empty matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::NullMatrix`] on the empty matrix and
    /// [`MatrizError::IndexOutOfRange`] when either index is out of
    /// bounds.
    pub fn minor(&self, drop_row: usize, drop_col: usize) -> Result<Self> {
        validate::require_populated(self, "minor")?;
        if drop_row >= self.rows {
            return Err(MatrizError::index_out_of_range("row", drop_row, self.rows));
        }
        if drop_col >= self.cols {
            return Err(MatrizError::index_out_of_range("column", drop_col, self.cols));
        }
        if self.rows == 1 || self.cols == 1 {
            return Ok(Self::empty());
        }
        let mut data = Vec::with_capacity((self.rows - 1) * (self.cols - 1));
        for r in 0..self.rows {
            if r == drop_row {
                continue;
            }
            for c in 0..self.cols {
                if c == drop_col {
                    continue;
                }
                data.push(self.data[r * self.cols + c]);
            }
        }
        Ok(Self {
            data,
            rows: self.rows - 1,
            cols: self.cols - 1,
        })
    }
}

impl Matrix<f64> {
    /// Creates a matrix of zeros.
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::filled(rows, cols, 0.0)
    }

    /// Creates a matrix of ones.
    #[must_use]
    pub fn ones(rows: usize, cols: usize) -> Self {
        Self::filled(rows, cols, 1.0)
    }

    /// Creates an identity matrix.
    #[must_use]
    pub fn eye(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.data[i * n + i] = 1.0;
        }
        m
    }

    /// Whether every off-diagonal entry is exactly `0.0`.
    ///
    /// Populated non-square matrices are not diagonal.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::NullMatrix`] on the empty matrix; an
    /// uninitialized input here is a programmer error, not a `false`.
    pub fn is_diagonal(&self) -> Result<bool> {
        validate::require_populated(self, "is_diagonal")?;
        if !self.is_square() {
            return Ok(false);
        }
        for i in 0..self.rows {
            for j in 0..self.cols {
                if i != j && self.get(i, j) != 0.0 {
                    return Ok(false);
                }
            }
        }
        Ok(true)
    }

    /// Whether the diagonal is exactly `1.0` and everything else `0.0`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::NullMatrix`] on the empty matrix.
    pub fn is_identity(&self) -> Result<bool> {
        validate::require_populated(self, "is_identity")?;
        if !self.is_square() {
            return Ok(false);
        }
        for i in 0..self.rows {
            for j in 0..self.cols {
                let expected = if i == j { 1.0 } else { 0.0 };
                if self.get(i, j) != expected {
                    return Ok(false);
                }
            }
        }
        Ok(true)
    }

    /// Whether every entry strictly below the diagonal is `0.0`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::NullMatrix`] on the empty matrix.
    pub fn is_upper_triangular(&self) -> Result<bool> {
        validate::require_populated(self, "is_upper_triangular")?;
        if !self.is_square() {
            return Ok(false);
        }
        for i in 1..self.rows {
            for j in 0..i {
                if self.get(i, j) != 0.0 {
                    return Ok(false);
                }
            }
        }
        Ok(true)
    }

    /// Whether every entry strictly above the diagonal is `0.0`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::NullMatrix`] on the empty matrix.
    pub fn is_lower_triangular(&self) -> Result<bool> {
        validate::require_populated(self, "is_lower_triangular")?;
        if !self.is_square() {
            return Ok(false);
        }
        for i in 0..self.rows {
            for j in (i + 1)..self.cols {
                if self.get(i, j) != 0.0 {
                    return Ok(false);
                }
            }
        }
        Ok(true)
    }

    /// Whether every row and every column has exactly one `1.0` and the
    /// rest `0.0`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::NullMatrix`] on the empty matrix.
    pub fn is_permutation(&self) -> Result<bool> {
        validate::require_populated(self, "is_permutation")?;
        if !self.is_square() {
            return Ok(false);
        }
        let n = self.rows;
        let mut col_ones = vec![0usize; n];
        for i in 0..n {
            let mut row_ones = 0usize;
            for j in 0..n {
                let v = self.get(i, j);
                if v == 1.0 {
                    row_ones += 1;
                    col_ones[j] += 1;
                } else if v != 0.0 {
                    return Ok(false);
                }
            }
            if row_ones != 1 {
                return Ok(false);
            }
        }
        Ok(col_ones.iter().all(|&c| c == 1))
    }

    /// Sum of the main diagonal.
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix is empty or not square.
    pub fn trace(&self) -> Result<f64> {
        validate::require_square(self, "trace")?;
        Ok((0..self.rows).map(|i| self.get(i, i)).sum())
    }

    /// Adds another matrix element-wise.
    ///
    /// # Errors
    ///
    /// Returns an error if either matrix is empty or dimensions don't
    /// match.
    pub fn add(&self, other: &Self) -> Result<Self> {
        validate::require_same_shape(self, other, "add")?;
        let data: Vec<f64> = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a + b)
            .collect();
        Ok(Self {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Subtracts another matrix element-wise.
    ///
    /// # Errors
    ///
    /// Returns an error if either matrix is empty or dimensions don't
    /// match.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        validate::require_same_shape(self, other, "sub")?;
        let data: Vec<f64> = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a - b)
            .collect();
        Ok(Self {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Multiplies each element by a scalar.
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix is empty.
    pub fn mul_scalar(&self, scalar: f64) -> Result<Self> {
        validate::require_populated(self, "mul_scalar")?;
        Ok(Self {
            data: self.data.iter().map(|x| x * scalar).collect(),
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Matrix-matrix multiplication.
    ///
    /// # Errors
    ///
    /// Returns an error if either matrix is empty or the left columns
    /// don't match the right rows.
    pub fn matmul(&self, other: &Self) -> Result<Self> {
        validate::require_populated(self, "matmul")?;
        validate::require_populated(other, "matmul")?;
        if self.cols != other.rows {
            return Err(MatrizError::shape_mismatch(
                "matmul",
                (self.cols, other.cols),
                other.shape(),
            ));
        }

        let mut result = vec![0.0; self.rows * other.cols];
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut sum = 0.0;
                for k in 0..self.cols {
                    sum += self.get(i, k) * other.get(k, j);
                }
                result[i * other.cols + j] = sum;
            }
        }

        Ok(Self {
            data: result,
            rows: self.rows,
            cols: other.cols,
        })
    }

    /// Transposes the matrix.
    ///
    /// Defined for every matrix; the empty matrix transposes to itself.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut data = vec![0.0; self.rows * self.cols];
        for i in 0..self.rows {
            for j in 0..self.cols {
                data[j * self.rows + i] = self.data[i * self.cols + j];
            }
        }
        Self {
            data,
            rows: self.cols,
            cols: self.rows,
        }
    }

    /// Adds another matrix element-wise, replacing this matrix's storage.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Matrix::add`]; on error this matrix is left
    /// unchanged.
    pub fn add_in_place(&mut self, other: &Self) -> Result<()> {
        *self = self.add(other)?;
        Ok(())
    }

    /// Subtracts another matrix element-wise, replacing this matrix's
    /// storage.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Matrix::sub`]; on error this matrix is left
    /// unchanged.
    pub fn sub_in_place(&mut self, other: &Self) -> Result<()> {
        *self = self.sub(other)?;
        Ok(())
    }

    /// Multiplies each element by a scalar in place.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Matrix::mul_scalar`].
    pub fn mul_scalar_in_place(&mut self, scalar: f64) -> Result<()> {
        *self = self.mul_scalar(scalar)?;
        Ok(())
    }

    /// Transposes the matrix in place.
    ///
    /// Square matrices swap entries within the existing storage; anything
    /// else swaps `rows`/`cols` and replaces the storage with the freshly
    /// computed transpose.
    pub fn transpose_in_place(&mut self) {
        if self.is_square() {
            let n = self.rows;
            for i in 0..n {
                for j in (i + 1)..n {
                    self.data.swap(i * n + j, j * n + i);
                }
            }
        } else {
            *self = self.transpose();
        }
    }

    /// Renders a single row as `[a, b, c]`.
    ///
    /// Diagnostic output only, not a parseable format.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::IndexOutOfRange`] when the row index is out
    /// of bounds.
    pub fn format_row(&self, row: usize) -> Result<String> {
        if row >= self.rows {
            return Err(MatrizError::index_out_of_range("row", row, self.rows));
        }
        let cells: Vec<String> = (0..self.cols).map(|j| self.get(row, j).to_string()).collect();
        Ok(format!("[{}]", cells.join(", ")))
    }
}

/// Renders the grid as nested bracketed rows, `[[1, 2], [3, 4]]`.
///
/// Diagnostic output only, not a parseable format. The empty matrix
/// renders as `[]`.
impl<T: Copy + fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for r in 0..self.rows {
            if r > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[")?;
            for c in 0..self.cols {
                if c > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", self.data[r * self.cols + c])?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "tests_matrix_contract.rs"]
mod tests_contract;
