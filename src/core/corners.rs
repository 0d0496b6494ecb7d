//! Corner detection on lattice rows.

#![forbid(unsafe_code)]

use num_traits::Zero;

use crate::core::matrix::LatticeMatrix;

/// A corner is a point where exactly one coordinate is non-zero.
///
/// Corners are the extreme points of the simplex; for a lattice with `s > 0`
/// there is exactly one per dimension.
///
/// # Examples
///
/// ```rust
/// use simplex_lattice::core::corners::is_lattice_corner;
///
/// assert!(is_lattice_corner(&[0, 3, 0]));
/// assert!(!is_lattice_corner(&[1, 2, 0]));
/// assert!(!is_lattice_corner(&[0, 0, 0]));
/// assert!(is_lattice_corner(&[0.0, 1.0]));
/// ```
pub fn is_lattice_corner<T>(row: &[T]) -> bool
where
    T: Zero + PartialOrd,
{
    let zero = T::zero();
    let mut nonzero = 0usize;
    for value in row {
        if *value > zero {
            nonzero += 1;
            if nonzero > 1 {
                return false;
            }
        }
    }
    nonzero == 1
}

/// Indices of all corner rows, in ascending order.
///
/// # Examples
///
/// ```rust
/// use simplex_lattice::core::corners::corner_indices;
/// use simplex_lattice::core::enumeration::enumerate_lattice;
///
/// let lattice = enumerate_lattice(3, 2).unwrap();
/// // (0,0,2), (0,2,0), (2,0,0)
/// assert_eq!(corner_indices(&lattice), vec![0, 2, 5]);
/// ```
#[must_use]
pub fn corner_indices<T>(matrix: &LatticeMatrix<T>) -> Vec<usize>
where
    T: Zero + PartialOrd,
{
    matrix
        .iter_rows()
        .enumerate()
        .filter_map(|(i, row)| is_lattice_corner(row).then_some(i))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::enumeration::enumerate_lattice;

    #[test]
    fn test_empty_row_is_not_corner() {
        let row: [usize; 0] = [];
        assert!(!is_lattice_corner(&row));
    }

    #[test]
    fn test_single_coordinate_corner() {
        assert!(is_lattice_corner(&[5]));
        assert!(!is_lattice_corner(&[0]));
    }

    #[test]
    fn test_negative_entries_do_not_count() {
        // Only strictly positive coordinates count as non-zero.
        assert!(is_lattice_corner(&[-1.0, 2.0, 0.0]));
    }

    #[test]
    fn test_corner_count_equals_dimension() {
        for n in 1..=6 {
            let lattice = enumerate_lattice(n, 4).unwrap();
            let corners = corner_indices(&lattice);
            assert_eq!(corners.len(), n, "expected one corner per axis for n={n}");
            for &i in &corners {
                assert_eq!(lattice.row(i).iter().max(), Some(&4));
            }
        }
    }

    #[test]
    fn test_zero_tick_lattice_has_no_corners() {
        let lattice = enumerate_lattice(3, 0).unwrap();
        assert!(corner_indices(&lattice).is_empty());
    }
}
