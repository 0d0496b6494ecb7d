//! Exact lattice point counting.
//!
//! An n-dimensional point sums to `s` when its coordinates add up to `s`. The
//! number of such points with non-negative integer coordinates is the binomial
//! coefficient `C(n - 1 + s, s)`. It is evaluated here in exact integer
//! arithmetic; a floating-point factorial would overflow long before the
//! lattice sizes used in practice.

#![forbid(unsafe_code)]

use crate::core::errors::LatticeError;

const fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// Computes the binomial coefficient `C(n, k)` exactly.
///
/// Returns `None` if the result does not fit in `usize`. `C(n, k)` is `0`
/// for `k > n`.
///
/// # Examples
///
/// ```rust
/// use simplex_lattice::core::counting::binomial;
///
/// assert_eq!(binomial(4, 2), Some(6));
/// assert_eq!(binomial(10, 0), Some(1));
/// assert_eq!(binomial(3, 5), Some(0));
/// assert_eq!(binomial(200, 100), None);
/// ```
#[must_use]
pub fn binomial(n: usize, k: usize) -> Option<usize> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let n = n as u128;
    let mut result: u128 = 1;
    for i in 1..=k as u128 {
        // result * (n - k + i) / i, reduced first so the product stays small;
        // result * numerator is always divisible by i.
        let numerator = n - k as u128 + i;
        let g = gcd(result, i);
        let reduced_result = result / g;
        let reduced_i = i / g;
        result = reduced_result.checked_mul(numerator / reduced_i)?;
    }
    usize::try_from(result).ok()
}

/// Number of non-negative integer `n`-tuples whose coordinates sum to `sum`.
///
/// This is the row count of the lattice produced by
/// [`enumerate_lattice`](crate::core::enumeration::enumerate_lattice).
///
/// # Errors
///
/// * [`LatticeError::InvalidDimension`] if `n == 0`
/// * [`LatticeError::CountOverflow`] if the count does not fit in `usize`
///
/// # Examples
///
/// ```rust
/// use simplex_lattice::core::counting::lattice_point_count;
///
/// // (0,0,2) (0,1,1) (0,2,0) (1,0,1) (1,1,0) (2,0,0)
/// assert_eq!(lattice_point_count(3, 2).unwrap(), 6);
/// // A line of 2-tuples with s ticks has s + 1 points.
/// assert_eq!(lattice_point_count(2, 4).unwrap(), 5);
/// // A single coordinate can only hold the sum itself.
/// assert_eq!(lattice_point_count(1, 7).unwrap(), 1);
/// ```
pub fn lattice_point_count(n: usize, sum: usize) -> Result<usize, LatticeError> {
    if n == 0 {
        return Err(LatticeError::InvalidDimension { dimension: n });
    }
    let overflow = || LatticeError::CountOverflow {
        dimension: n,
        ticks: sum,
    };
    let top = (n - 1).checked_add(sum).ok_or_else(overflow)?;
    binomial(top, sum).ok_or_else(overflow)
}
