//! # Hull Decimation
//!
//! Greedy vertex removal that keeps every original point inside the hull.
//!
//! ## Algorithm
//!
//! 1. Cost every vertex: the distance it sticks out of a fan over its ring
//! 2. Pop the cheapest vertex from a min-heap keyed by original index
//! 3. Replace its star with the fan and delete it
//! 4. Push faces outward until no original point escapes
//! 5. Re-cost the ring, the moved vertices and their rings
//!
//! Removal stops at the vertex floor, when the cheapest cost is over budget
//! and the hull already fits the buffer, or when nothing is removable.
//! Past the error budget removal continues only while the hull is larger
//! than the buffer.

mod params;
mod queue;
mod result;
mod working;


pub use params::{DecimateParams, StaleEntryPolicy};
pub use result::DecimationResult;

use crate::hull::Hull;
use config::constants::{HULL_EPSILON, MIN_DECIMATED_VERTICES};
use glam::{DVec3, IVec3};
use queue::RemovalQueue;
use std::collections::BTreeSet;
use tracing::{debug, info, warn};
use working::WorkingHull;

/// Decimate a hull and return its reduced integer points.
///
/// # Arguments
///
/// * `hull` - Hull produced by [`build`](crate::build)
/// * `original_points` - The points the hull was built from
/// * `buffer_size` - Target maximum vertex count
/// * `max_error` - Maximum geometric error per removal (`<= 0` disables)
///
/// # Example
///
/// ```rust
/// use cull_hull::{build, decimate};
/// use glam::IVec3;
///
/// let points: Vec<IVec3> = (0..8)
///     .map(|i| IVec3::new(i & 1, (i >> 1) & 1, (i >> 2) & 1))
///     .collect();
/// let hull = build(&points).unwrap();
///
/// // A cube is already at the vertex floor
/// assert_eq!(decimate(&hull, &points, 4, 1.0).len(), 8);
/// ```
#[must_use]
pub fn decimate(
    hull: &Hull,
    original_points: &[IVec3],
    buffer_size: usize,
    max_error: f64,
) -> Vec<IVec3> {
    decimate_with_report(
        hull,
        original_points,
        &DecimateParams::new(buffer_size, max_error),
    )
    .points()
}

/// Decimate a hull and return the reduced hull with statistics.
#[must_use]
pub fn decimate_with_report(
    hull: &Hull,
    original_points: &[IVec3],
    params: &DecimateParams,
) -> DecimationResult {
    let original_vertices = hull.vertex_count();

    if !params.is_enabled() || original_vertices <= MIN_DECIMATED_VERTICES {
        return DecimationResult::unchanged(hull);
    }

    info!(
        vertices = original_vertices,
        buffer_size = params.buffer_size,
        max_error = params.max_error,
        "Starting hull decimation"
    );

    let originals: Vec<DVec3> = original_points.iter().map(|p| p.as_dvec3()).collect();
    let mut work = WorkingHull::from_hull(hull);
    let mut queue = RemovalQueue::new(original_vertices, params.stale_policy);
    for slot in 0..work.vertex_count() {
        queue.push(work.id(slot), work.removal_cost(slot));
    }

    let mut removals_performed = 0;
    let mut removals_rejected = 0;
    let mut repair_passes = 0;
    let mut max_accepted_cost = 0.0_f64;

    while work.vertex_count() > MIN_DECIMATED_VERTICES {
        let Some(candidate) = queue.pop() else {
            break;
        };
        if candidate.cost.is_infinite() {
            debug!("No removable vertices left");
            break;
        }
        if candidate.cost > params.max_error && work.vertex_count() <= params.buffer_size {
            break;
        }
        let Some(slot) = work.slot_of(candidate.id) else {
            continue;
        };

        let snapshot = work.clone();
        let removal = match work.remove_vertex(slot) {
            Ok(removal) => removal,
            Err(err) => {
                debug!(vertex = candidate.id, %err, "Skipping vertex");
                removals_rejected += 1;
                continue;
            }
        };

        // Costs outside the re-costed neighbourhood can drift; never accept a
        // removal dearer than the entry it was popped with
        if removal.cost > candidate.cost + HULL_EPSILON {
            debug!(
                vertex = candidate.id,
                queued = candidate.cost,
                actual = removal.cost,
                "Removal cost grew since queued, re-queueing"
            );
            work = snapshot;
            queue.push(candidate.id, removal.cost);
            continue;
        }

        let repair = work.repair(&originals, params.max_repair_passes);
        if !repair.converged {
            warn!(
                vertex = candidate.id,
                passes = repair.passes,
                "Containment repair did not converge, restoring vertex"
            );
            work = snapshot;
            removals_rejected += 1;
            queue.push(candidate.id, f64::INFINITY);
            continue;
        }

        queue.retire(candidate.id);
        removals_performed += 1;
        repair_passes += repair.passes;
        max_accepted_cost = max_accepted_cost.max(removal.cost);

        debug!(
            vertex = candidate.id,
            cost = removal.cost,
            moved = repair.moved.len(),
            remaining = work.vertex_count(),
            "Removed hull vertex"
        );

        // Re-cost the ring, moved vertices, and the rings of moved vertices
        let mut dirty: BTreeSet<usize> = removal.ring.into_iter().collect();
        for &id in &repair.moved {
            dirty.insert(id);
            if let Some(ring) = work.slot_of(id).and_then(|s| work.ring(s).ok()) {
                dirty.extend(ring.into_iter().map(|s| work.id(s)));
            }
        }
        for id in dirty {
            if let Some(slot) = work.slot_of(id) {
                queue.push(id, work.removal_cost(slot));
            }
        }
    }

    let final_hull = work.into_hull();

    info!(
        final_vertices = final_hull.vertex_count(),
        removals = removals_performed,
        rejected = removals_rejected,
        "Hull decimation complete"
    );

    DecimationResult {
        original_vertices,
        final_vertices: final_hull.vertex_count(),
        hull: final_hull,
        removals_performed,
        removals_rejected,
        repair_passes,
        max_accepted_cost,
    }
}
