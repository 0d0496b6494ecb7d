//! Vector norm and distance computations.
//!
//! This module provides numerically stable norms and distances for vectors of
//! runtime length, i.e. single lattice rows.

/// Sum of squared coordinates.
///
/// # Examples
///
/// ```
/// use simplex_lattice::geometry::norms::squared_norm;
///
/// assert_eq!(squared_norm(&[3.0, 4.0]), 25.0);
/// assert_eq!(squared_norm(&[1.0, 2.0, 2.0]), 9.0);
/// assert_eq!(squared_norm(&[]), 0.0);
/// ```
#[must_use]
pub fn squared_norm(coords: &[f64]) -> f64 {
    coords.iter().fold(0.0, |acc, &x| x.mul_add(x, acc))
}

/// Compute the Euclidean norm of a vector.
///
/// # Numerical Stability
///
/// The 2D case uses `f64::hypot`. For higher dimensions every coordinate is
/// scaled by the largest absolute value before squaring, which avoids
/// overflow and underflow for extreme magnitudes.
///
/// # Examples
///
/// ```
/// use simplex_lattice::geometry::norms::hypot;
///
/// assert_eq!(hypot(&[3.0, 4.0]), 5.0);
/// assert_eq!(hypot(&[1.0, 2.0, 2.0]), 3.0);
/// assert_eq!(hypot(&[1.0, 1.0, 1.0, 1.0]), 2.0);
/// ```
#[must_use]
pub fn hypot(coords: &[f64]) -> f64 {
    match coords {
        [] => 0.0,
        [x] => x.abs(),
        [x, y] => x.hypot(*y),
        _ => {
            let max_abs = coords.iter().fold(0.0_f64, |acc, &x| acc.max(x.abs()));
            if max_abs == 0.0 {
                return 0.0;
            }

            let sum_of_scaled_squares = coords.iter().fold(0.0, |acc, &x| {
                let scaled = x / max_abs;
                scaled.mul_add(scaled, acc)
            });

            max_abs * sum_of_scaled_squares.sqrt()
        }
    }
}

/// Squared Euclidean distance between two equally long vectors.
///
/// Extra coordinates of the longer slice are ignored; callers pass rows of
/// the same matrix.
///
/// # Examples
///
/// ```
/// use simplex_lattice::geometry::norms::squared_distance;
///
/// assert_eq!(squared_distance(&[0.0, 0.0, 2.0], &[0.0, 1.0, 1.0]), 2.0);
/// ```
#[must_use]
pub fn squared_distance(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len(), "squared_distance: length mismatch");
    a.iter().zip(b).fold(0.0, |acc, (&x, &y)| {
        let diff = x - y;
        diff.mul_add(diff, acc)
    })
}
