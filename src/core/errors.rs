//! Error type shared by every lattice operation.

#![forbid(unsafe_code)]

use thiserror::Error;

use crate::core::matrix::MatrixError;

/// Errors that can occur while generating, sampling or indexing a simplex lattice.
///
/// Every check happens before any iteration begins, so an `Err` never comes
/// with a partially built matrix.
///
/// # Examples
///
/// ```rust
/// use simplex_lattice::core::errors::LatticeError;
/// use simplex_lattice::geometry::weights::weight_lattice;
///
/// assert_eq!(weight_lattice(3, 0), Err(LatticeError::ZeroTicks));
/// ```
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum LatticeError {
    /// The dimension must be at least 1.
    #[error("Invalid dimension: lattice dimension must be at least 1, but got {dimension}")]
    InvalidDimension {
        /// The rejected dimension.
        dimension: usize,
    },
    /// Normalising a lattice with zero ticks would divide by zero.
    #[error("Cannot normalize a lattice with zero ticks (division by zero)")]
    ZeroTicks,
    /// More neighbours were requested than there are rows.
    #[error("Requested {requested} neighbors but the lattice only has {rows} points")]
    NeighborCountExceedsLattice {
        /// Requested neighbourhood size `k`.
        requested: usize,
        /// Number of rows in the matrix.
        rows: usize,
    },
    /// Corner preservation needs more rows than the requested sample size.
    #[error("Cannot keep {corners} corners in a sample of {requested} points")]
    TooManyCorners {
        /// Number of corner rows found.
        corners: usize,
        /// Requested sample size.
        requested: usize,
    },
    /// The number of lattice points does not fit in `usize`.
    #[error("Lattice point count overflows usize for dimension {dimension} and {ticks} ticks")]
    CountOverflow {
        /// Lattice dimension.
        dimension: usize,
        /// Tick count (or the tick counter reached while solving).
        ticks: usize,
    },
    /// The recursive fill and the closed-form count disagree.
    #[error("Lattice enumeration filled {filled} rows but the closed form predicts {expected}")]
    EnumerationMismatch {
        /// Closed-form row count.
        expected: usize,
        /// Rows produced by the recursive fill.
        filled: usize,
    },
    /// The lattice would exceed the configured allocation cap.
    #[error("Lattice requires {requested_bytes} bytes (> cap {cap_bytes})")]
    AllocationTooLarge {
        /// Bytes needed for the requested lattice.
        requested_bytes: usize,
        /// Active safety cap in bytes.
        cap_bytes: usize,
    },
    /// A matrix entry could not be represented as `f64`.
    #[error("Matrix entry at ({row}, {col}) cannot be converted to f64")]
    NonNumericEntry {
        /// Row of the entry.
        row: usize,
        /// Column of the entry.
        col: usize,
    },
    /// A matrix could not be assembled.
    #[error(transparent)]
    Matrix(#[from] MatrixError),
}
