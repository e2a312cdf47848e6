//! Property-based tests for hull construction and decimation.
//!
//! Random integer clouds are hulled and reduced; the invariants below must
//! hold for every cloud that is not degenerate.
//!
//! Run with: cargo test -p cull-hull -- proptest

mod common;

use common::as_dvec3;
use config::constants::{HULL_EPSILON, MIN_DECIMATED_VERTICES};
use cull_hull::validate::{closed_manifold, containment, convexity};
use cull_hull::{build, decimate_with_report, reduce_points, CullParams, DecimateParams, HullError};
use glam::IVec3;
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

/// A point with coordinates in a small box, so duplicates and coplanar
/// subsets show up often.
fn arb_point() -> impl Strategy<Value = IVec3> {
    prop::array::uniform3(-50..=50i32).prop_map(IVec3::from_array)
}

fn arb_cloud(min: usize, max: usize) -> impl Strategy<Value = Vec<IVec3>> {
    prop::collection::vec(arb_point(), min..=max)
}

// =============================================================================
// Hull construction
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn hull_never_panics(points in arb_cloud(0, 40)) {
        match build(&points) {
            Ok(hull) => prop_assert!(hull.vertex_count() >= 4),
            Err(err) => prop_assert!(err.is_degenerate_input()),
        }
    }

    #[test]
    fn hull_contains_every_point(points in arb_cloud(4, 40)) {
        let hull = build(&points);
        prop_assume!(hull.is_ok());
        let hull = hull.unwrap();

        prop_assert!(containment(&hull, &as_dvec3(&points), 1e-6).is_ok());
        prop_assert!(convexity(&hull, 1e-6).is_ok());
        prop_assert!(closed_manifold(&hull).is_ok());
    }

    #[test]
    fn hull_vertices_come_from_input(points in arb_cloud(4, 40)) {
        let hull = build(&points);
        prop_assume!(hull.is_ok());
        let hull = hull.unwrap();

        prop_assert!(hull.points().iter().all(|p| points.contains(p)));
        prop_assert_eq!(hull.face_count(), 2 * hull.vertex_count() - 4);
    }

    #[test]
    fn hull_is_deterministic(points in arb_cloud(4, 40)) {
        let first = build(&points);
        let second = build(&points);
        prop_assert_eq!(first, second);
    }
}

// =============================================================================
// Decimation
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn decimation_keeps_points_inside(
        points in arb_cloud(12, 40),
        buffer_size in 8usize..20,
        max_error in 0.0..40.0f64,
    ) {
        let hull = build(&points);
        prop_assume!(hull.is_ok());
        let hull = hull.unwrap();

        let result = decimate_with_report(&hull, &points, &DecimateParams::new(buffer_size, max_error));

        prop_assert!(result.final_vertices <= hull.vertex_count());
        prop_assert_eq!(
            result.final_vertices + result.removals_performed,
            hull.vertex_count()
        );
        prop_assert!(
            result.final_vertices >= MIN_DECIMATED_VERTICES.min(hull.vertex_count())
        );
        if hull.vertex_count() <= buffer_size {
            // No buffer pressure: every accepted removal is within budget
            prop_assert!(result.max_accepted_cost <= max_error + HULL_EPSILON);
        }
        prop_assert!(containment(&result.hull, &as_dvec3(&points), HULL_EPSILON).is_ok());
        prop_assert!(closed_manifold(&result.hull).is_ok());

        // The integer points alone still enclose every input point
        let rebuilt = build(&result.points());
        prop_assume!(rebuilt.is_ok());
        prop_assert!(containment(&rebuilt.unwrap(), &as_dvec3(&points), HULL_EPSILON).is_ok());
    }

    #[test]
    fn reduce_points_respects_buffer(points in arb_cloud(0, 40), buffer_size in 8usize..24) {
        let params = CullParams::new(buffer_size, 25.0);
        match reduce_points(&points, &params) {
            Ok(reduced) => {
                prop_assert!(reduced.len() <= buffer_size);
            }
            Err(HullError::BufferOverflow { count, max }) => {
                prop_assert_eq!(max, buffer_size);
                prop_assert!(count > buffer_size);
            }
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }
}
