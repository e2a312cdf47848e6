//! # Tests for Config Constants
//!
//! Unit tests verifying the relationships between configuration constants.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_hull_epsilon_is_positive() {
    assert!(HULL_EPSILON > 0.0, "HULL_EPSILON must be positive");
}

#[test]
fn test_hull_epsilon_below_integer_grid() {
    // Integer inputs are one unit apart, the tolerance must be far below that
    assert!(HULL_EPSILON < 1e-6, "HULL_EPSILON should be far below 1.0");
}

// =============================================================================
// LIMIT TESTS
// =============================================================================

#[test]
fn test_min_hull_points_is_tetrahedron() {
    assert_eq!(MIN_HULL_POINTS, 4);
}

#[test]
fn test_vertex_floor_above_tetrahedron() {
    assert!(MIN_DECIMATED_VERTICES >= MIN_HULL_POINTS);
}

#[test]
fn test_repair_passes_nonzero() {
    assert!(MAX_REPAIR_PASSES > 0);
}

// =============================================================================
// DEFAULT TESTS
// =============================================================================

#[test]
fn test_default_buffer_above_floor() {
    assert!(DEFAULT_BUFFER_SIZE >= MIN_DECIMATED_VERTICES);
}

#[test]
fn test_default_error_is_positive() {
    assert!(DEFAULT_MAX_GEOMETRIC_ERROR > 0.0);
}
