//! Weight vectors on the unit simplex and their unit-sphere projections.
//!
//! A weight lattice is the integer lattice divided by its tick count, so every
//! row is non-negative and sums to one. Dividing each weight row by its
//! Euclidean norm instead places the points on the positive orthant of the
//! unit sphere, which is the form reference-direction methods usually want.

#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

use crate::core::enumeration::{check_allocation, enumerate_lattice};
use crate::core::errors::LatticeError;
use crate::core::matrix::LatticeMatrix;
use crate::geometry::norms::hypot;

/// Where the normalised lattice points live.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LatticeProjection {
    /// Rows sum to one (see [`weight_lattice`]).
    #[default]
    Simplex,
    /// Rows have unit Euclidean length (see [`unit_vectors_on_lattice`]).
    UnitSphere,
}

impl LatticeProjection {
    /// Builds the lattice for `n` dimensions and `sum` ticks in this projection.
    ///
    /// # Errors
    ///
    /// Same as [`weight_lattice`].
    pub fn build(self, n: usize, sum: usize) -> Result<LatticeMatrix<f64>, LatticeError> {
        match self {
            Self::Simplex => weight_lattice(n, sum),
            Self::UnitSphere => unit_vectors_on_lattice(n, sum),
        }
    }
}

/// Returns a set of evenly spaced `n`-dimensional points on the unit simplex.
///
/// Every row of the integer lattice is divided by `sum`, so rows are
/// non-negative and sum to one. Row order follows
/// [`enumerate_lattice`].
///
/// # Errors
///
/// * [`LatticeError::ZeroTicks`] if `sum == 0`
/// * any error of [`enumerate_lattice`]
///
/// # Examples
///
/// ```rust
/// use simplex_lattice::geometry::weights::weight_lattice;
///
/// let weights = weight_lattice(3, 2).unwrap();
/// assert_eq!(weights.rows(), 6);
/// assert_eq!(weights.row(1), &[0.0, 0.5, 0.5]);
/// assert_eq!(weights.row(5), &[1.0, 0.0, 0.0]);
/// ```
#[expect(
    clippy::cast_precision_loss,
    reason = "Entries are at most `sum`; any lattice that fits the allocation cap is exact in f64"
)]
pub fn weight_lattice(n: usize, sum: usize) -> Result<LatticeMatrix<f64>, LatticeError> {
    if n == 0 {
        return Err(LatticeError::InvalidDimension { dimension: n });
    }
    if sum == 0 {
        return Err(LatticeError::ZeroTicks);
    }
    let points = enumerate_lattice(n, sum)?;
    check_allocation(points.rows(), n, std::mem::size_of::<f64>())?;

    let divisor = sum as f64;
    Ok(points.map(|&x| x as f64 / divisor))
}

/// Returns a set of evenly spaced `n`-dimensional points on the unit sphere.
///
/// Computes [`weight_lattice`] and rescales each row to unit Euclidean norm.
/// No row can have zero norm because every weight row sums to one.
///
/// # Errors
///
/// Same as [`weight_lattice`].
///
/// # Examples
///
/// ```rust
/// use simplex_lattice::geometry::weights::unit_vectors_on_lattice;
///
/// let dirs = unit_vectors_on_lattice(2, 2).unwrap();
/// let h = 0.5_f64.sqrt();
/// assert_eq!(dirs.row(0), &[0.0, 1.0]);
/// assert!((dirs.row(1)[0] - h).abs() < 1e-15);
/// assert!((dirs.row(1)[1] - h).abs() < 1e-15);
/// ```
pub fn unit_vectors_on_lattice(n: usize, sum: usize) -> Result<LatticeMatrix<f64>, LatticeError> {
    let mut weights = weight_lattice(n, sum)?;
    for i in 0..weights.rows() {
        let row = weights.row_mut(i);
        let norm = hypot(row);
        for x in row.iter_mut() {
            *x /= norm;
        }
    }
    Ok(weights)
}
