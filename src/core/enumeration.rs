//! Recursive enumeration of simplex lattice points.
//!
//! The lattice for dimension `n` and sum `s` is filled column by column. For the
//! first free column every value `i` in `0..=s` owns a contiguous block of
//! `count(n - 1, s - i)` rows; the block gets `i` in that column and the
//! remaining columns are filled recursively with sum `s - i`. The last column
//! simply receives whatever is left of the sum.
//!
//! The resulting order is canonical: rows are grouped by the value of the
//! first column (ascending), then by the second column within each group, and
//! so on.

#![forbid(unsafe_code)]

use crate::core::counting::lattice_point_count;
use crate::core::errors::LatticeError;
use crate::core::matrix::LatticeMatrix;

/// Default maximum bytes allowed for a single lattice allocation.
///
/// The count grows combinatorially in both dimension and ticks, so a
/// careless `(n, s)` pair can request terabytes. The cap can be overridden
/// via the `MAX_LATTICE_BYTES_SAFETY_CAP` environment variable.
const MAX_LATTICE_BYTES_SAFETY_CAP_DEFAULT: usize = 4_294_967_296; // 4 GiB

/// Maximum bytes allowed for a lattice allocation.
///
/// Reads `MAX_LATTICE_BYTES_SAFETY_CAP` if set and parseable, otherwise
/// returns the 4 GiB default.
pub(crate) fn max_lattice_bytes_safety_cap() -> usize {
    if let Ok(v) = std::env::var("MAX_LATTICE_BYTES_SAFETY_CAP")
        && let Ok(n) = v.parse::<usize>()
    {
        return n;
    }
    MAX_LATTICE_BYTES_SAFETY_CAP_DEFAULT
}

/// Format bytes with binary prefixes for log messages (e.g. "4.0 GiB").
pub(crate) fn format_bytes(bytes: usize) -> String {
    const UNITS: &[&str] = &["B", "KiB", "MiB", "GiB", "TiB"];

    let Some(mut size) = num_traits::cast::<usize, f64>(bytes) else {
        return format!("{bytes} B");
    };
    let mut unit_index = 0;
    while size >= 1024.0 && unit_index < UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        format!("{:.1} {}", size, UNITS[unit_index])
    }
}

/// Rejects lattices whose backing buffer would exceed the safety cap.
pub(crate) fn check_allocation(rows: usize, cols: usize, elem_size: usize) -> Result<(), LatticeError> {
    let requested_bytes = rows.saturating_mul(cols).saturating_mul(elem_size);
    let cap_bytes = max_lattice_bytes_safety_cap();
    if requested_bytes > cap_bytes {
        tracing::warn!(
            "lattice of {rows}x{cols} requires {} (> cap {})",
            format_bytes(requested_bytes),
            format_bytes(cap_bytes)
        );
        return Err(LatticeError::AllocationTooLarge {
            requested_bytes,
            cap_bytes,
        });
    }
    Ok(())
}

/// Fills the rows starting at `row_start`, columns `col..`, so that each row's
/// remaining columns sum to `remaining`. Returns the number of rows written.
fn fill_block(
    matrix: &mut LatticeMatrix<usize>,
    row_start: usize,
    col: usize,
    remaining: usize,
) -> Result<usize, LatticeError> {
    let n_remaining = matrix.cols() - col;
    if n_remaining == 1 {
        matrix.set(row_start, col, remaining);
        return Ok(1);
    }

    let mut filled = 0;
    for i in 0..=remaining {
        let block_height = lattice_point_count(n_remaining - 1, remaining - i)?;
        let block_start = row_start + filled;
        if block_start + block_height > matrix.rows() {
            return Err(LatticeError::EnumerationMismatch {
                expected: matrix.rows(),
                filled: block_start + block_height,
            });
        }
        for row in block_start..block_start + block_height {
            matrix.set(row, col, i);
        }
        let written = fill_block(matrix, block_start, col + 1, remaining - i)?;
        if written != block_height {
            return Err(LatticeError::EnumerationMismatch {
                expected: block_height,
                filled: written,
            });
        }
        filled += block_height;
    }
    Ok(filled)
}

/// Enumerates every non-negative integer `n`-tuple summing to `sum`.
///
/// The result has exactly [`lattice_point_count(n, sum)`](lattice_point_count)
/// rows and `n` columns, in canonical order (first column varying slowest).
///
/// # Errors
///
/// * [`LatticeError::InvalidDimension`] if `n == 0`
/// * [`LatticeError::CountOverflow`] if the point count does not fit in `usize`
/// * [`LatticeError::AllocationTooLarge`] if the matrix would exceed the safety cap
/// * [`LatticeError::EnumerationMismatch`] if the recursive fill disagrees with
///   the closed-form count
///
/// # Examples
///
/// ```rust
/// use simplex_lattice::core::enumeration::enumerate_lattice;
///
/// let lattice = enumerate_lattice(3, 2).unwrap();
/// assert_eq!(
///     lattice.to_rows(),
///     vec![
///         vec![0, 0, 2],
///         vec![0, 1, 1],
///         vec![0, 2, 0],
///         vec![1, 0, 1],
///         vec![1, 1, 0],
///         vec![2, 0, 0],
///     ]
/// );
/// ```
pub fn enumerate_lattice(n: usize, sum: usize) -> Result<LatticeMatrix<usize>, LatticeError> {
    let expected = lattice_point_count(n, sum)?;
    check_allocation(expected, n, std::mem::size_of::<usize>())?;

    let mut matrix = LatticeMatrix::zeros(expected, n);
    let filled = fill_block(&mut matrix, 0, 0, sum)?;
    if filled != expected {
        return Err(LatticeError::EnumerationMismatch { expected, filled });
    }

    tracing::debug!("enumerated simplex lattice: dimension={n} ticks={sum} points={expected}");
    Ok(matrix)
}
