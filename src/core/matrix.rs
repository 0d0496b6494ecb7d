//! Dense row-major matrix used for every lattice output.
//!
//! Lattices, weight vectors, sampled subsets and neighbour tables all share the
//! same shape: a fixed number of rows, each holding the same number of columns.
//! [`LatticeMatrix`] stores them contiguously in row-major order so a row is
//! always available as a plain slice.

#![forbid(unsafe_code)]

use num_traits::Zero;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when a [`LatticeMatrix`] is assembled from raw data.
///
/// # Examples
///
/// ```rust
/// use simplex_lattice::core::matrix::{LatticeMatrix, MatrixError};
///
/// let err = LatticeMatrix::from_rows(vec![vec![1, 2], vec![3]]).unwrap_err();
/// assert_eq!(err, MatrixError::RaggedRows { row: 1, expected: 2, found: 1 });
/// ```
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MatrixError {
    /// A row has a different length than the first row.
    #[error("Ragged rows: row {row} has {found} columns, expected {expected}")]
    RaggedRows {
        /// Index of the offending row.
        row: usize,
        /// Column count taken from the first row.
        expected: usize,
        /// Column count of the offending row.
        found: usize,
    },
    /// The flat buffer length does not equal `rows * cols`.
    #[error("Buffer of length {len} cannot be shaped as {rows}x{cols}")]
    ShapeMismatch {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
        /// Actual buffer length.
        len: usize,
    },
    /// A row index passed to [`LatticeMatrix::select_rows`] is out of range.
    #[error("Row index {index} out of range for matrix with {rows} rows")]
    RowOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of rows in the matrix.
        rows: usize,
    },
}

/// A dense, row-major matrix of lattice coordinates or indices.
///
/// # Examples
///
/// ```rust
/// use simplex_lattice::core::matrix::LatticeMatrix;
///
/// let m = LatticeMatrix::from_rows(vec![vec![0, 2], vec![1, 1], vec![2, 0]]).unwrap();
/// assert_eq!(m.rows(), 3);
/// assert_eq!(m.cols(), 2);
/// assert_eq!(m.row(1), &[1, 1]);
/// assert_eq!(m.get(2, 0), Some(&2));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawLatticeMatrix<T>")]
pub struct LatticeMatrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

/// Unvalidated wire form; deserialisation goes through [`LatticeMatrix::from_vec`].
#[derive(Deserialize)]
struct RawLatticeMatrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T> TryFrom<RawLatticeMatrix<T>> for LatticeMatrix<T> {
    type Error = MatrixError;

    fn try_from(raw: RawLatticeMatrix<T>) -> Result<Self, Self::Error> {
        Self::from_vec(raw.rows, raw.cols, raw.data)
    }
}

impl<T> LatticeMatrix<T> {
    /// Builds a matrix from a flat row-major buffer.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::ShapeMismatch`] if `data.len() != rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, MatrixError> {
        if rows.checked_mul(cols) != Some(data.len()) {
            return Err(MatrixError::ShapeMismatch {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Builds a matrix from a list of rows.
    ///
    /// An empty list yields a `0 x 0` matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::RaggedRows`] if the rows differ in length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, MatrixError> {
        let cols = rows.first().map_or(0, Vec::len);
        let row_count = rows.len();
        let mut data = Vec::with_capacity(row_count * cols);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != cols {
                return Err(MatrixError::RaggedRows {
                    row,
                    expected: cols,
                    found: values.len(),
                });
            }
            data.extend(values);
        }
        Ok(Self {
            rows: row_count,
            cols,
            data,
        })
    }

    /// Number of rows (points).
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (coordinates per point).
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `true` if the matrix has no rows.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Row `index` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.rows()`.
    #[must_use]
    pub fn row(&self, index: usize) -> &[T] {
        assert!(
            index < self.rows,
            "row index {index} out of range for {} rows",
            self.rows
        );
        &self.data[index * self.cols..(index + 1) * self.cols]
    }

    /// Entry at `(row, col)`, or `None` when out of range.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            self.data.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Iterates over rows in order.
    pub fn iter_rows(&self) -> impl ExactSizeIterator<Item = &[T]> + '_ {
        (0..self.rows).map(move |i| self.row(i))
    }

    /// The underlying row-major buffer.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consumes the matrix and returns its row-major buffer.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Applies `f` to every entry, preserving the shape.
    #[must_use]
    pub fn map<U, F>(&self, f: F) -> LatticeMatrix<U>
    where
        F: FnMut(&T) -> U,
    {
        LatticeMatrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(f).collect(),
        }
    }

    pub(crate) fn row_mut(&mut self, index: usize) -> &mut [T] {
        let cols = self.cols;
        &mut self.data[index * cols..(index + 1) * cols]
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, value: T) {
        let cols = self.cols;
        self.data[row * cols + col] = value;
    }
}

impl<T: Clone> LatticeMatrix<T> {
    /// Copies the given rows, in the given order, into a new matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::RowOutOfRange`] if any index is `>= self.rows()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use simplex_lattice::core::matrix::LatticeMatrix;
    ///
    /// let m = LatticeMatrix::from_rows(vec![vec![0, 2], vec![1, 1], vec![2, 0]]).unwrap();
    /// let picked = m.select_rows(&[2, 0]).unwrap();
    /// assert_eq!(picked.row(0), &[2, 0]);
    /// assert_eq!(picked.row(1), &[0, 2]);
    /// ```
    pub fn select_rows(&self, indices: &[usize]) -> Result<Self, MatrixError> {
        let mut data = Vec::with_capacity(indices.len() * self.cols);
        for &index in indices {
            if index >= self.rows {
                return Err(MatrixError::RowOutOfRange {
                    index,
                    rows: self.rows,
                });
            }
            data.extend_from_slice(self.row(index));
        }
        Ok(Self {
            rows: indices.len(),
            cols: self.cols,
            data,
        })
    }

    /// Copies the matrix into a list of rows.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.iter_rows().map(<[T]>::to_vec).collect()
    }
}

impl<T: Clone + Zero> LatticeMatrix<T> {
    /// A `rows x cols` matrix filled with zeros.
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![T::zero(); rows * cols],
        }
    }
}
