//! Configurable construction of reference-point sets.
//!
//! Optimizers rarely want "the lattice with `s` ticks"; they want "about `N`
//! well-spread reference points in `n` objectives". [`ReferenceLattice`]
//! chains the pieces of this crate to get there:
//!
//! 1. [`optimal_lattice_ticks`] finds the smallest tick count whose lattice
//!    has at least `N` points.
//! 2. The lattice is built in the requested [`LatticeProjection`].
//! 3. If the closed-form count overshoots, [`sample_lattice_uniformly`] trims
//!    it back to exactly `N` points, keeping the simplex corners.
//! 4. Optionally, a `k`-nearest-neighbour table is attached.
//!
//! # Examples
//!
//! ```rust
//! use simplex_lattice::core::builder::{LatticeOptionsBuilder, ReferenceLattice};
//! use simplex_lattice::geometry::weights::LatticeProjection;
//!
//! let options = LatticeOptionsBuilder::default()
//!     .dimension(3)
//!     .target_count(100)
//!     .projection(LatticeProjection::UnitSphere)
//!     .neighborhood_size(10_usize)
//!     .seed(7_u64)
//!     .build()
//!     .unwrap();
//!
//! let reference = ReferenceLattice::generate(&options).unwrap();
//! assert_eq!(reference.ticks(), 13); // count(3, 13) = 105
//! assert_eq!(reference.len(), 100);
//! assert_eq!(reference.neighbors().unwrap().cols(), 10);
//! ```

#![forbid(unsafe_code)]

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::core::errors::LatticeError;
use crate::core::matrix::LatticeMatrix;
use crate::core::sampling::sample_lattice_uniformly;
use crate::core::ticks::optimal_lattice_ticks;
use crate::geometry::neighbors::closest_neighbor_indices;
use crate::geometry::weights::LatticeProjection;

/// Options controlling [`ReferenceLattice::generate`].
///
/// Use [`LatticeOptionsBuilder`] to construct; `dimension` and `target_count`
/// are required and must be non-zero.
///
/// # Examples
///
/// ```rust
/// use simplex_lattice::core::builder::LatticeOptionsBuilder;
///
/// let options = LatticeOptionsBuilder::default()
///     .dimension(5)
///     .target_count(210)
///     .build()
///     .unwrap();
/// assert!(options.keep_corners);
/// assert!(options.trim_to_target);
/// assert_eq!(options.neighborhood_size, None);
///
/// assert!(LatticeOptionsBuilder::default().dimension(0).target_count(10).build().is_err());
/// assert!(LatticeOptionsBuilder::default().dimension(3).build().is_err());
/// ```
#[derive(Builder, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[builder(build_fn(validate = "Self::validate"))]
pub struct LatticeOptions {
    /// Number of objectives (simplex coordinates).
    pub dimension: usize,
    /// Desired number of reference points.
    pub target_count: usize,
    /// Simplex weights or unit-sphere directions.
    #[builder(default)]
    #[serde(default)]
    pub projection: LatticeProjection,
    /// Always keep the simplex corners when trimming.
    #[builder(default = "true")]
    #[serde(default = "default_true")]
    pub keep_corners: bool,
    /// Trim an overshooting lattice back to exactly `target_count` points.
    #[builder(default = "true")]
    #[serde(default = "default_true")]
    pub trim_to_target: bool,
    /// Attach a table of this many nearest neighbours per point.
    #[builder(setter(into, strip_option), default)]
    #[serde(default)]
    pub neighborhood_size: Option<usize>,
    /// Seed for the trimming RNG; the thread RNG is used when absent.
    #[builder(setter(into, strip_option), default)]
    #[serde(default)]
    pub seed: Option<u64>,
}

const fn default_true() -> bool {
    true
}

impl LatticeOptionsBuilder {
    fn validate(&self) -> Result<(), String> {
        if self.dimension == Some(0) {
            return Err("dimension must be at least 1".to_string());
        }
        if self.target_count == Some(0) {
            return Err("target_count must be at least 1".to_string());
        }
        Ok(())
    }
}

/// A sized set of reference points, optionally with its neighbour table.
#[derive(Clone, Debug, PartialEq)]
pub struct ReferenceLattice {
    ticks: usize,
    projection: LatticeProjection,
    points: LatticeMatrix<f64>,
    neighbors: Option<LatticeMatrix<usize>>,
}

impl ReferenceLattice {
    /// Generates reference points according to `options`.
    ///
    /// Uses a `StdRng` seeded from `options.seed` when present, otherwise the
    /// thread RNG.
    ///
    /// # Errors
    ///
    /// See [`ReferenceLattice::generate_with_rng`].
    pub fn generate(options: &LatticeOptions) -> Result<Self, LatticeError> {
        match options.seed {
            Some(seed) => Self::generate_with_rng(options, &mut StdRng::seed_from_u64(seed)),
            None => Self::generate_with_rng(options, &mut rand::rng()),
        }
    }

    /// Generates reference points, drawing trimming randomness from `rng`.
    ///
    /// The tick count is at least 1 so the weights are always defined.
    ///
    /// # Errors
    ///
    /// * [`LatticeError::InvalidDimension`] if `options.dimension == 0`
    /// * [`LatticeError::TooManyCorners`] if corners are kept and
    ///   `target_count < dimension`
    /// * [`LatticeError::NeighborCountExceedsLattice`] if the neighbourhood is
    ///   larger than the final point set
    /// * any error from lattice enumeration (overflow, allocation cap)
    pub fn generate_with_rng<R>(options: &LatticeOptions, rng: &mut R) -> Result<Self, LatticeError>
    where
        R: Rng + ?Sized,
    {
        let ticks = optimal_lattice_ticks(options.dimension, options.target_count)?.max(1);
        let full = options.projection.build(options.dimension, ticks)?;
        let full_len = full.rows();

        let points = if options.trim_to_target {
            sample_lattice_uniformly(rng, &full, options.target_count, options.keep_corners)?
        } else {
            full
        };

        let neighbors = options
            .neighborhood_size
            .map(|k| closest_neighbor_indices(&points, k))
            .transpose()?;

        tracing::debug!(
            "generated reference lattice: dimension={} ticks={ticks} full={full_len} kept={}",
            options.dimension,
            points.rows()
        );

        Ok(Self {
            ticks,
            projection: options.projection,
            points,
            neighbors,
        })
    }

    /// Tick count of the underlying lattice.
    #[must_use]
    pub const fn ticks(&self) -> usize {
        self.ticks
    }

    /// Projection the points were generated in.
    #[must_use]
    pub const fn projection(&self) -> LatticeProjection {
        self.projection
    }

    /// Number of coordinates per point.
    #[must_use]
    pub const fn dimension(&self) -> usize {
        self.points.cols()
    }

    /// Number of reference points.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.points.rows()
    }

    /// Returns `true` if there are no reference points.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The reference points, one per row.
    #[must_use]
    pub const fn points(&self) -> &LatticeMatrix<f64> {
        &self.points
    }

    /// Neighbour table, if one was requested.
    #[must_use]
    pub const fn neighbors(&self) -> Option<&LatticeMatrix<usize>> {
        self.neighbors.as_ref()
    }

    /// Consumes `self`, returning the points and the optional neighbour table.
    #[must_use]
    pub fn into_parts(self) -> (LatticeMatrix<f64>, Option<LatticeMatrix<usize>>) {
        (self.points, self.neighbors)
    }
}
