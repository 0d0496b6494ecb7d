//! # simplex-lattice
//!
//! Evenly spaced reference points on the n-dimensional unit simplex, the
//! backbone of decomposition-based multi-objective optimizers (MOEA/D,
//! NSGA-III style reference-vector methods).
//!
//! # Features
//!
//! - Exact lattice point counting, `C(n - 1 + s, s)`
//! - Recursive enumeration of all integer `n`-tuples summing to `s`, in a
//!   canonical order
//! - Weight vectors on the simplex and their unit-sphere projections
//! - Tick solving: the smallest lattice holding at least `N` points
//! - Corner-preserving uniform subsampling with an injectable RNG
//! - All-pairs `k`-nearest-neighbour tables with deterministic tie-breaking
//! - Serialization/Deserialization with [serde](https://serde.rs)
//!
//! # Basic Usage
//!
//! ```rust
//! use simplex_lattice::prelude::*;
//!
//! // Three objectives, two ticks: six weight vectors.
//! let weights = weight_lattice(3, 2).unwrap();
//! assert_eq!(weights.rows(), 6);
//! assert_eq!(weights.row(0), &[0.0, 0.0, 1.0]);
//! assert_eq!(weights.row(4), &[0.5, 0.5, 0.0]);
//!
//! // Every point is its own nearest neighbour.
//! let table = closest_neighbor_indices(&weights, 3).unwrap();
//! assert_eq!(table.row(4)[0], 4);
//! ```
//!
//! # Sizing a lattice to a population
//!
//! The lattice size jumps combinatorially with the tick count, so a requested
//! population size is usually met by building the smallest lattice that is
//! large enough and trimming it back:
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use simplex_lattice::prelude::*;
//!
//! let ticks = optimal_lattice_ticks(3, 100).unwrap();
//! assert_eq!(ticks, 13);
//! assert_eq!(lattice_point_count(3, ticks).unwrap(), 105);
//!
//! let full = weight_lattice(3, ticks).unwrap();
//! let mut rng = StdRng::seed_from_u64(42);
//! let population = sample_lattice_uniformly(&mut rng, &full, 100, true).unwrap();
//! assert_eq!(population.rows(), 100);
//! assert_eq!(corner_indices(&population).len(), 3);
//! ```
//!
//! [`ReferenceLattice`](core::builder::ReferenceLattice) bundles those steps
//! behind [`LatticeOptions`](core::builder::LatticeOptions).
//!
//! # Invariants
//!
//! - **Count** – [`enumerate_lattice(n, s)`](core::enumeration::enumerate_lattice)
//!   has exactly [`lattice_point_count(n, s)`](core::counting::lattice_point_count) rows;
//!   the recursive fill is checked against the closed form.
//! - **Sum** – every integer row sums to `s`; every weight row sums to one.
//! - **Uniqueness** – no two lattice rows are equal.
//! - **Corners** – sampling never drops a corner while corner preservation is on.
//! - **Determinism** – neighbour ties are broken by row index; sampling is
//!   reproducible for a given RNG state.
//!
//! ## Error handling
//!
//! All operations return [`LatticeError`](core::errors::LatticeError).
//! Preconditions are checked up front, so an error never comes with a
//! partially built matrix:
//!
//! ```rust
//! use simplex_lattice::prelude::*;
//!
//! assert_eq!(weight_lattice(3, 0), Err(LatticeError::ZeroTicks));
//! assert!(matches!(
//!     closest_neighbor_indices(&enumerate_lattice(2, 1).unwrap(), 3),
//!     Err(LatticeError::NeighborCountExceedsLattice { requested: 3, rows: 2 })
//! ));
//! ```
//!
//! ## Logging
//!
//! Operations emit `tracing` events at `debug` level (and `warn` when the
//! allocation cap is hit). Install any `tracing` subscriber to see them.
//!
//! ## Configuration
//!
//! The environment variable `MAX_LATTICE_BYTES_SAFETY_CAP` overrides the
//! default 4 GiB limit on a single lattice allocation.

// Forbid unsafe code throughout the entire crate
#![forbid(unsafe_code)]

#[macro_use]
extern crate derive_builder;

/// The `core` module contains lattice counting, enumeration, sampling and the
/// dense matrix type shared by every output.
pub mod core {
    pub mod builder;
    pub mod corners;
    pub mod counting;
    pub mod enumeration;
    pub mod errors;
    pub mod matrix;
    pub mod sampling;
    pub mod ticks;
    // Re-export the `core` modules.
    pub use builder::*;
    pub use corners::*;
    pub use counting::*;
    pub use enumeration::*;
    pub use errors::*;
    pub use matrix::*;
    pub use sampling::*;
    pub use ticks::*;
}

/// Contains the real-valued views of a lattice: weight vectors, unit-sphere
/// directions, norms and nearest-neighbour tables.
pub mod geometry {
    /// All-pairs nearest-neighbour tables
    pub mod neighbors;
    /// Vector norms for runtime-length rows
    pub mod norms;
    /// Simplex weights and unit-sphere projections
    pub mod weights;
    pub use neighbors::*;
    pub use norms::*;
    pub use weights::*;
}

/// A prelude module that re-exports commonly used types and functions.
pub mod prelude {
    pub use crate::core::{
        builder::*, corners::*, counting::*, enumeration::*, errors::*, matrix::*, sampling::*,
        ticks::*,
    };
    pub use crate::geometry::{neighbors::*, norms::*, weights::*};
}

/// The function `is_normal` checks that structs implement `auto` traits.
/// Traits are checked at compile time, so this function is only used for
/// testing.
#[must_use]
pub const fn is_normal<T: Sized + Send + Sync + Unpin>() -> bool {
    true
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::{
        core::{
            builder::{LatticeOptions, ReferenceLattice},
            errors::LatticeError,
            matrix::LatticeMatrix,
        },
        geometry::weights::LatticeProjection,
        is_normal,
    };

    // =============================================================================
    // TYPE SAFETY TESTS
    // =============================================================================

    #[test]
    fn normal_types() {
        assert!(is_normal::<LatticeMatrix<f64>>());
        assert!(is_normal::<LatticeMatrix<usize>>());
        assert!(is_normal::<LatticeError>());
        assert!(is_normal::<LatticeOptions>());
        assert!(is_normal::<LatticeProjection>());
        assert!(is_normal::<ReferenceLattice>());
    }

    #[test]
    fn test_prelude_exports() {
        use crate::prelude::*;

        let lattice = enumerate_lattice(3, 2).unwrap();
        assert_eq!(lattice.rows(), lattice_point_count(3, 2).unwrap());
        assert_eq!(corner_indices(&lattice), vec![0, 2, 5]);
        assert_eq!(optimal_lattice_ticks(2, 5).unwrap(), 4);

        let dirs = unit_vectors_on_lattice(3, 2).unwrap();
        assert!((hypot(dirs.row(1)) - 1.0).abs() < 1e-12);

        let sampled = sample_lattice_uniformly_seeded(&lattice, 3, true, 1).unwrap();
        assert_eq!(sampled.rows(), 3);
    }
}
