//! Integration tests for lattice counting, enumeration and normalisation.
//!
//! These exercise the public API end to end through the prelude:
//! - Closed-form counts against the recursive fill
//! - Canonical row order and uniqueness
//! - Weight and unit-sphere normalisation
//! - Tick solving for the documented reference cases
//! - Error paths (zero dimension, zero ticks, overflow, oversized `k`)

use approx::assert_relative_eq;
use simplex_lattice::prelude::*;
use std::collections::HashSet;

// =============================================================================
// COUNTING AND ENUMERATION
// =============================================================================

#[test]
fn test_enumeration_matches_closed_form_count() {
    for n in [1, 2, 3, 5] {
        for s in [0, 1, 2, 5, 10] {
            let lattice = enumerate_lattice(n, s).unwrap();
            let expected = lattice_point_count(n, s).unwrap();
            assert_eq!(lattice.rows(), expected, "n={n} s={s}");
            assert_eq!(lattice.cols(), n);
            for row in lattice.iter_rows() {
                assert_eq!(row.iter().sum::<usize>(), s);
            }
        }
    }
}

#[test]
fn test_known_counts() {
    assert_eq!(lattice_point_count(3, 12).unwrap(), 91);
    assert_eq!(lattice_point_count(3, 13).unwrap(), 105);
    assert_eq!(lattice_point_count(5, 6).unwrap(), 210);
    assert_eq!(lattice_point_count(10, 3).unwrap(), 220);
    assert_eq!(lattice_point_count(1, 1_000_000).unwrap(), 1);
}

#[test]
fn test_lattice_rows_are_unique() {
    for (n, s) in [(3, 7), (4, 5), (6, 3)] {
        let lattice = enumerate_lattice(n, s).unwrap();
        let rows: HashSet<Vec<usize>> = lattice.to_rows().into_iter().collect();
        assert_eq!(rows.len(), lattice.rows());
    }
}

#[test]
fn test_three_dimensional_two_tick_order() {
    let lattice = enumerate_lattice(3, 2).unwrap();
    assert_eq!(
        lattice.to_rows(),
        vec![
            vec![0, 0, 2],
            vec![0, 1, 1],
            vec![0, 2, 0],
            vec![1, 0, 1],
            vec![1, 1, 0],
            vec![2, 0, 0],
        ]
    );
}

#[test]
fn test_corners_of_enumerated_lattice() {
    // One corner per axis.
    let lattice = enumerate_lattice(3, 4).unwrap();
    let corners = corner_indices(&lattice);
    assert_eq!(corners.len(), 3);
    for &i in &corners {
        assert_eq!(lattice.row(i).iter().filter(|&&x| x == 4).count(), 1);
    }
    // Zero ticks: the only point is the origin, which is not a corner.
    assert!(corner_indices(&enumerate_lattice(3, 0).unwrap()).is_empty());
}

// =============================================================================
// NORMALISATION
// =============================================================================

#[test]
fn test_weight_rows_sum_to_one() {
    for n in 1..=6 {
        for s in 1..=8 {
            let weights = weight_lattice(n, s).unwrap();
            for row in weights.iter_rows() {
                assert_relative_eq!(row.iter().sum::<f64>(), 1.0, epsilon = 1e-12);
            }
        }
    }
}

#[test]
fn test_unit_vectors_have_unit_norm() {
    for n in 1..=6 {
        for s in 1..=6 {
            let dirs = unit_vectors_on_lattice(n, s).unwrap();
            assert_eq!(dirs.rows(), lattice_point_count(n, s).unwrap());
            for row in dirs.iter_rows() {
                assert_relative_eq!(hypot(row), 1.0, epsilon = 1e-10);
            }
        }
    }
}

#[test]
fn test_unit_vectors_preserve_row_order() {
    let weights = weight_lattice(4, 3).unwrap();
    let dirs = unit_vectors_on_lattice(4, 3).unwrap();
    for (w, u) in weights.iter_rows().zip(dirs.iter_rows()) {
        let norm = hypot(w);
        for (a, b) in w.iter().zip(u) {
            assert_relative_eq!(a / norm, *b, epsilon = 1e-15);
        }
    }
}

// =============================================================================
// TICK SOLVING
// =============================================================================

#[test]
fn test_reference_tick_cases() {
    assert_eq!(optimal_lattice_ticks(2, 5).unwrap(), 4);
    assert_eq!(optimal_lattice_ticks(3, 91).unwrap(), 12);
    assert_eq!(optimal_lattice_ticks(3, 92).unwrap(), 13);
    assert_eq!(optimal_lattice_ticks(5, 210).unwrap(), 6);
    assert_eq!(optimal_lattice_ticks(1, 17).unwrap(), 17);
}

#[test]
fn test_solved_ticks_build_large_enough_lattice() {
    for n in 2..=6 {
        for target in [1, 2, 10, 50, 100, 300] {
            let ticks = optimal_lattice_ticks(n, target).unwrap();
            assert!(lattice_point_count(n, ticks).unwrap() >= target);
            if ticks > 0 {
                assert!(lattice_point_count(n, ticks - 1).unwrap() < target);
            }
        }
    }
}

// =============================================================================
// ERROR PATHS
// =============================================================================

#[test]
fn test_zero_dimension_rejected_everywhere() {
    let err = LatticeError::InvalidDimension { dimension: 0 };
    assert_eq!(lattice_point_count(0, 3), Err(err.clone()));
    assert_eq!(enumerate_lattice(0, 3), Err(err.clone()));
    assert_eq!(weight_lattice(0, 3), Err(err.clone()));
    assert_eq!(unit_vectors_on_lattice(0, 3), Err(err.clone()));
    assert_eq!(optimal_lattice_ticks(0, 3), Err(err));
}

#[test]
fn test_zero_ticks_cannot_be_normalised() {
    assert_eq!(weight_lattice(4, 0), Err(LatticeError::ZeroTicks));
    assert_eq!(unit_vectors_on_lattice(4, 0), Err(LatticeError::ZeroTicks));
    // The integer lattice itself is fine.
    assert_eq!(enumerate_lattice(4, 0).unwrap().rows(), 1);
}

#[test]
fn test_count_overflow_reported() {
    assert!(matches!(
        lattice_point_count(200, 200),
        Err(LatticeError::CountOverflow {
            dimension: 200,
            ticks: 200
        })
    ));
    assert!(matches!(
        enumerate_lattice(200, 200),
        Err(LatticeError::CountOverflow { .. })
    ));
}

#[test]
fn test_oversized_lattice_hits_allocation_cap() {
    // C(59, 29) points fit in usize but not in memory.
    if std::env::var_os("MAX_LATTICE_BYTES_SAFETY_CAP").is_none() {
        assert!(matches!(
            enumerate_lattice(31, 29),
            Err(LatticeError::AllocationTooLarge { .. })
        ));
    }
}

#[test]
fn test_oversized_distance_matrix_hits_allocation_cap() {
    // 23220 rows fit easily, but 23220^2 f64 distances exceed 4 GiB.
    if std::env::var_os("MAX_LATTICE_BYTES_SAFETY_CAP").is_none() {
        let lattice = enumerate_lattice(3, 214).unwrap();
        assert_eq!(lattice.rows(), 23_220);
        assert!(matches!(
            pairwise_squared_distances(&lattice),
            Err(LatticeError::AllocationTooLarge { .. })
        ));
        assert!(matches!(
            closest_neighbor_indices(&lattice, 5),
            Err(LatticeError::AllocationTooLarge { .. })
        ));

        let options = LatticeOptionsBuilder::default()
            .dimension(3)
            .target_count(23_220)
            .neighborhood_size(5_usize)
            .seed(1_u64)
            .build()
            .unwrap();
        assert!(matches!(
            ReferenceLattice::generate(&options),
            Err(LatticeError::AllocationTooLarge { .. })
        ));
    }
}

#[test]
fn test_error_messages_are_descriptive() {
    let err = closest_neighbor_indices(&enumerate_lattice(2, 1).unwrap(), 5).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Requested 5 neighbors but the lattice only has 2 points"
    );
    assert!(LatticeError::ZeroTicks.to_string().contains("zero ticks"));
}
