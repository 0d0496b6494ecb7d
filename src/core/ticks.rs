//! Tick solving: the inverse of lattice point counting.

#![forbid(unsafe_code)]

use crate::core::counting::binomial;
use crate::core::errors::LatticeError;

/// Computes the least number of ticks for a lattice of at least `target_count` points.
///
/// Returns the smallest `s` such that
/// [`lattice_point_count(n, s)`](crate::core::counting::lattice_point_count)
/// is at least `target_count`. For example, the points of a two-dimensional
/// lattice (a line) with `s` ticks are `(0, s), (1, s - 1), …, (s, 0)`, so
/// five points need four ticks.
///
/// For `n >= 3` the search walks `s = 0, 1, …` accumulating `C(s + n - 2, n - 2)`;
/// the running total after step `s` is exactly the size of the `n`-dimensional
/// lattice with `s` ticks.
///
/// A one-dimensional lattice always has a single point, so there is nothing
/// to invert: `n == 1` returns `target_count` unchanged.
///
/// # Errors
///
/// * [`LatticeError::InvalidDimension`] if `n == 0`
/// * [`LatticeError::CountOverflow`] if the running count overflows `usize`
///   before reaching the target
///
/// # Examples
///
/// ```rust
/// use simplex_lattice::core::ticks::optimal_lattice_ticks;
///
/// assert_eq!(optimal_lattice_ticks(2, 5).unwrap(), 4);
/// // count(3, 2) = 6, count(3, 3) = 10
/// assert_eq!(optimal_lattice_ticks(3, 6).unwrap(), 2);
/// assert_eq!(optimal_lattice_ticks(3, 7).unwrap(), 3);
/// assert_eq!(optimal_lattice_ticks(1, 12).unwrap(), 12);
/// ```
pub fn optimal_lattice_ticks(n: usize, target_count: usize) -> Result<usize, LatticeError> {
    match n {
        0 => Err(LatticeError::InvalidDimension { dimension: n }),
        1 => Ok(target_count),
        2 => Ok(target_count.saturating_sub(1)),
        _ => {
            let d = n - 2;
            let overflow = |ticks| LatticeError::CountOverflow { dimension: n, ticks };
            let mut ticks = 0usize;
            // C(d, d): the single all-zero point.
            let mut cumulative = 1usize;
            while cumulative < target_count {
                ticks = ticks.checked_add(1).ok_or_else(|| overflow(ticks))?;
                let top = ticks.checked_add(d).ok_or_else(|| overflow(ticks))?;
                let layer = binomial(top, d).ok_or_else(|| overflow(ticks))?;
                cumulative = cumulative
                    .checked_add(layer)
                    .ok_or_else(|| overflow(ticks))?;
            }
            tracing::debug!(
                "solved lattice ticks: dimension={n} target={target_count} ticks={ticks} points={cumulative}"
            );
            Ok(ticks)
        }
    }
}
