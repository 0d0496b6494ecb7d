//! All-pairs nearest-neighbour tables for lattice points.
//!
//! Decomposition-based optimizers pair each reference point with the `k`
//! reference points closest to it. The lattices involved are small to moderate
//! (hundreds to low thousands of rows), so a full pairwise distance matrix
//! followed by one sort per row is adequate.
//!
//! # Complexity
//!
//! O(m² · d + m² log m) for `m` rows of dimension `d`.

#![forbid(unsafe_code)]

use num_traits::ToPrimitive;
use ordered_float::OrderedFloat;

use crate::core::enumeration::check_allocation;
use crate::core::errors::LatticeError;
use crate::core::matrix::LatticeMatrix;
use crate::geometry::norms::squared_distance;

/// Converts every entry to `f64`, reporting the first entry that cannot be.
fn to_f64_matrix<T>(matrix: &LatticeMatrix<T>) -> Result<LatticeMatrix<f64>, LatticeError>
where
    T: ToPrimitive,
{
    let mut data = Vec::with_capacity(matrix.rows() * matrix.cols());
    for (row, values) in matrix.iter_rows().enumerate() {
        for (col, value) in values.iter().enumerate() {
            let converted = value
                .to_f64()
                .ok_or(LatticeError::NonNumericEntry { row, col })?;
            data.push(converted);
        }
    }
    Ok(LatticeMatrix::from_vec(matrix.rows(), matrix.cols(), data)?)
}

/// Squared Euclidean distances between all pairs of rows.
///
/// The result is symmetric with a zero diagonal. Distances are accumulated
/// from exact coordinate differences, so identical rows are at distance
/// exactly zero.
///
/// # Errors
///
/// * [`LatticeError::AllocationTooLarge`] if the `m x m` result would exceed
///   the safety cap
/// * [`LatticeError::NonNumericEntry`] if an entry cannot be represented as `f64`
///
/// # Examples
///
/// ```rust
/// use simplex_lattice::core::enumeration::enumerate_lattice;
/// use simplex_lattice::geometry::neighbors::pairwise_squared_distances;
///
/// let lattice = enumerate_lattice(2, 2).unwrap(); // (0,2) (1,1) (2,0)
/// let d = pairwise_squared_distances(&lattice).unwrap();
/// assert_eq!(d.row(0), &[0.0, 2.0, 8.0]);
/// assert_eq!(d.get(2, 0), Some(&8.0));
/// ```
pub fn pairwise_squared_distances<T>(
    matrix: &LatticeMatrix<T>,
) -> Result<LatticeMatrix<f64>, LatticeError>
where
    T: ToPrimitive,
{
    let m = matrix.rows();
    check_allocation(m, m, std::mem::size_of::<f64>())?;
    let points = to_f64_matrix(matrix)?;
    let mut distances: LatticeMatrix<f64> = LatticeMatrix::zeros(m, m);
    for i in 0..m {
        for j in (i + 1)..m {
            let d = squared_distance(points.row(i), points.row(j));
            distances.set(i, j, d);
            distances.set(j, i, d);
        }
    }
    Ok(distances)
}

/// For each row, the indices of the `k` closest rows (itself included).
///
/// Row `i` of the result lists row indices sorted by ascending squared
/// distance to row `i`. The sort is stable, so rows at equal distance keep
/// their original index order; in particular a row is its own first
/// neighbour unless an earlier row duplicates it.
///
/// # Errors
///
/// * [`LatticeError::NeighborCountExceedsLattice`] if `k > matrix.rows()`
/// * [`LatticeError::AllocationTooLarge`] if the distance matrix or the table
///   would exceed the safety cap
/// * [`LatticeError::NonNumericEntry`] if an entry cannot be represented as `f64`
///
/// # Examples
///
/// ```rust
/// use simplex_lattice::geometry::neighbors::closest_neighbor_indices;
/// use simplex_lattice::geometry::weights::weight_lattice;
///
/// let weights = weight_lattice(2, 4).unwrap(); // 5 points on a line
/// let table = closest_neighbor_indices(&weights, 3).unwrap();
/// assert_eq!(table.row(0), &[0, 1, 2]);
/// assert_eq!(table.row(2), &[2, 1, 3]);
/// assert_eq!(table.row(4), &[4, 3, 2]);
/// ```
pub fn closest_neighbor_indices<T>(
    matrix: &LatticeMatrix<T>,
    k: usize,
) -> Result<LatticeMatrix<usize>, LatticeError>
where
    T: ToPrimitive,
{
    let m = matrix.rows();
    if k > m {
        return Err(LatticeError::NeighborCountExceedsLattice {
            requested: k,
            rows: m,
        });
    }

    check_allocation(m, k, std::mem::size_of::<usize>())?;
    let distances = pairwise_squared_distances(matrix)?;
    let mut table: LatticeMatrix<usize> = LatticeMatrix::zeros(m, k);
    let mut indices: Vec<usize> = Vec::with_capacity(m);
    for i in 0..m {
        let my_dists = distances.row(i);
        indices.clear();
        indices.extend(0..m);
        indices.sort_by_key(|&j| OrderedFloat(my_dists[j]));
        table.row_mut(i).copy_from_slice(&indices[..k]);
    }

    tracing::debug!("computed neighbor table: points={m} k={k}");
    Ok(table)
}
