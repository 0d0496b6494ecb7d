//! Uniform subsampling of lattice points.
//!
//! The closed-form lattice size rarely matches a requested population size
//! exactly, so the lattice is built one tick too fine and then trimmed back.
//! The sampler keeps every corner of the simplex (unless told otherwise) and
//! fills the rest with rows drawn uniformly without replacement.

#![forbid(unsafe_code)]

use std::collections::BTreeSet;

use num_traits::Zero;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::core::corners::is_lattice_corner;
use crate::core::errors::LatticeError;
use crate::core::matrix::LatticeMatrix;

/// Selects `n` distinct row indices of `matrix`, in ascending order.
///
/// If the matrix has at most `n` rows every index is returned. Otherwise, when
/// `keep_corners` is set, all corner rows are selected first; the remainder is
/// filled by drawing indices uniformly from `0..rows` with `rng` until exactly
/// `n` distinct indices have been collected. Repeated draws are no-ops, and
/// the loop always terminates because `rows > n`.
///
/// # Errors
///
/// * [`LatticeError::TooManyCorners`] if `keep_corners` is set and the matrix
///   has more corner rows than `n`
///
/// # Examples
///
/// ```rust
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use simplex_lattice::core::enumeration::enumerate_lattice;
/// use simplex_lattice::core::sampling::sample_lattice_indices;
///
/// let lattice = enumerate_lattice(3, 2).unwrap();
/// let mut rng = StdRng::seed_from_u64(7);
/// // Exactly the three corners.
/// let picked = sample_lattice_indices(&mut rng, &lattice, 3, true).unwrap();
/// assert_eq!(picked, vec![0, 2, 5]);
/// ```
pub fn sample_lattice_indices<T, R>(
    rng: &mut R,
    matrix: &LatticeMatrix<T>,
    n: usize,
    keep_corners: bool,
) -> Result<Vec<usize>, LatticeError>
where
    T: Zero + PartialOrd,
    R: Rng + ?Sized,
{
    let rows = matrix.rows();
    // No need to draw anything if we're going to take it all anyway.
    if rows <= n {
        return Ok((0..rows).collect());
    }

    let mut added_rows: BTreeSet<usize> = BTreeSet::new();
    if keep_corners {
        added_rows.extend(
            matrix
                .iter_rows()
                .enumerate()
                .filter_map(|(i, row)| is_lattice_corner(row).then_some(i)),
        );
        if added_rows.len() > n {
            return Err(LatticeError::TooManyCorners {
                corners: added_rows.len(),
                requested: n,
            });
        }
    }
    let corners = added_rows.len();

    while added_rows.len() < n {
        added_rows.insert(rng.random_range(0..rows));
    }

    tracing::debug!("sampled lattice rows: total={rows} kept={n} corners={corners}");
    Ok(added_rows.into_iter().collect())
}

/// Samples `n` rows uniformly and uniquely from a lattice matrix.
///
/// Corners are always included unless `keep_corners` is `false`. The returned
/// matrix has `min(n, matrix.rows())` rows, copied in ascending index order;
/// a matrix with at most `n` rows is returned unchanged.
///
/// # Errors
///
/// Same as [`sample_lattice_indices`].
///
/// # Examples
///
/// ```rust
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use simplex_lattice::core::corners::corner_indices;
/// use simplex_lattice::core::sampling::sample_lattice_uniformly;
/// use simplex_lattice::geometry::weights::weight_lattice;
///
/// let weights = weight_lattice(3, 12).unwrap(); // 91 points
/// let mut rng = StdRng::seed_from_u64(42);
/// let sampled = sample_lattice_uniformly(&mut rng, &weights, 50, true).unwrap();
/// assert_eq!(sampled.rows(), 50);
/// assert_eq!(corner_indices(&sampled).len(), 3);
/// ```
pub fn sample_lattice_uniformly<T, R>(
    rng: &mut R,
    matrix: &LatticeMatrix<T>,
    n: usize,
    keep_corners: bool,
) -> Result<LatticeMatrix<T>, LatticeError>
where
    T: Clone + Zero + PartialOrd,
    R: Rng + ?Sized,
{
    if matrix.rows() <= n {
        return Ok(matrix.clone());
    }
    let indices = sample_lattice_indices(rng, matrix, n, keep_corners)?;
    Ok(matrix.select_rows(&indices)?)
}

/// [`sample_lattice_uniformly`] with a seeded RNG for reproducible results.
///
/// # Errors
///
/// Same as [`sample_lattice_indices`].
///
/// # Examples
///
/// ```rust
/// use simplex_lattice::core::enumeration::enumerate_lattice;
/// use simplex_lattice::core::sampling::sample_lattice_uniformly_seeded;
///
/// let lattice = enumerate_lattice(4, 4).unwrap();
/// let a = sample_lattice_uniformly_seeded(&lattice, 20, true, 42).unwrap();
/// let b = sample_lattice_uniformly_seeded(&lattice, 20, true, 42).unwrap();
/// assert_eq!(a, b);
/// ```
pub fn sample_lattice_uniformly_seeded<T>(
    matrix: &LatticeMatrix<T>,
    n: usize,
    keep_corners: bool,
    seed: u64,
) -> Result<LatticeMatrix<T>, LatticeError>
where
    T: Clone + Zero + PartialOrd,
{
    let mut rng = StdRng::seed_from_u64(seed);
    sample_lattice_uniformly(&mut rng, matrix, n, keep_corners)
}

/// [`sample_lattice_uniformly`] using the thread-local RNG.
///
/// Prefer [`sample_lattice_uniformly`] or [`sample_lattice_uniformly_seeded`]
/// when results must be reproducible.
///
/// # Errors
///
/// Same as [`sample_lattice_indices`].
pub fn sample_lattice_uniformly_default<T>(
    matrix: &LatticeMatrix<T>,
    n: usize,
    keep_corners: bool,
) -> Result<LatticeMatrix<T>, LatticeError>
where
    T: Clone + Zero + PartialOrd,
{
    let mut rng = rand::rng();
    sample_lattice_uniformly(&mut rng, matrix, n, keep_corners)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::corners::corner_indices;
    use crate::core::enumeration::enumerate_lattice;

    #[test]
    fn test_small_matrix_returned_unchanged() {
        let lattice = enumerate_lattice(3, 2).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let same = sample_lattice_uniformly(&mut rng, &lattice, 6, true).unwrap();
        assert_eq!(same, lattice);
        let same = sample_lattice_uniformly(&mut rng, &lattice, 100, false).unwrap();
        assert_eq!(same, lattice);
        let all = sample_lattice_indices(&mut rng, &lattice, 10, true).unwrap();
        assert_eq!(all, (0..6).collect::<Vec<_>>());
    }

    #[test]
    fn test_exactly_corners_selected() {
        let lattice = enumerate_lattice(3, 2).unwrap();
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let sampled = sample_lattice_uniformly(&mut rng, &lattice, 3, true).unwrap();
            assert_eq!(
                sampled.to_rows(),
                vec![vec![0, 0, 2], vec![0, 2, 0], vec![2, 0, 0]]
            );
        }
    }

    #[test]
    fn test_too_many_corners_rejected() {
        let lattice = enumerate_lattice(5, 2).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(
            sample_lattice_indices(&mut rng, &lattice, 4, true),
            Err(LatticeError::TooManyCorners {
                corners: 5,
                requested: 4
            })
        );
        // Without corner preservation any size works.
        let picked = sample_lattice_indices(&mut rng, &lattice, 4, false).unwrap();
        assert_eq!(picked.len(), 4);
    }

    #[test]
    fn test_zero_sample_size() {
        let lattice = enumerate_lattice(3, 3).unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        let picked = sample_lattice_indices(&mut rng, &lattice, 0, false).unwrap();
        assert!(picked.is_empty());
        let sampled = sample_lattice_uniformly(&mut rng, &lattice, 0, false).unwrap();
        assert_eq!(sampled.rows(), 0);
        assert_eq!(sampled.cols(), 3);
    }

    #[test]
    fn test_indices_sorted_unique_and_keep_corners() {
        let lattice = enumerate_lattice(4, 6).unwrap();
        let corners = corner_indices(&lattice);
        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            let picked = sample_lattice_indices(&mut rng, &lattice, 30, true).unwrap();
            assert_eq!(picked.len(), 30);
            assert!(picked.windows(2).all(|w| w[0] < w[1]));
            for c in &corners {
                assert!(picked.contains(c), "corner {c} missing for seed {seed}");
            }
        }
    }

    #[test]
    fn test_seeded_reproducibility() {
        let lattice = enumerate_lattice(3, 10).unwrap();
        let a = sample_lattice_uniformly_seeded(&lattice, 20, false, 42).unwrap();
        let b = sample_lattice_uniformly_seeded(&lattice, 20, false, 42).unwrap();
        let c = sample_lattice_uniformly_seeded(&lattice, 20, false, 123).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_default_rng_sample_size() {
        let lattice = enumerate_lattice(3, 10).unwrap();
        let sampled = sample_lattice_uniformly_default(&lattice, 25, true).unwrap();
        assert_eq!(sampled.rows(), 25);
        assert_eq!(corner_indices(&sampled).len(), 3);
    }
}
