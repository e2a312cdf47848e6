//! Result types for decimation operations.

use crate::hull::Hull;
use glam::IVec3;
use std::collections::HashSet;

/// Result of hull decimation.
#[derive(Debug, Clone)]
pub struct DecimationResult {
    /// The decimated hull (float positions include repair offsets).
    pub hull: Hull,

    /// Number of vertices in the input hull.
    pub original_vertices: usize,

    /// Number of vertices in the decimated hull.
    pub final_vertices: usize,

    /// Number of vertex removals performed.
    pub removals_performed: usize,

    /// Number of removals abandoned (non-manifold ring, repair did not converge).
    pub removals_rejected: usize,

    /// Total containment repair passes that moved vertices.
    pub repair_passes: usize,

    /// Largest cost among accepted removals.
    pub max_accepted_cost: f64,
}

impl DecimationResult {
    /// Result for a hull that was left untouched.
    pub(crate) fn unchanged(hull: &Hull) -> Self {
        Self {
            hull: hull.clone(),
            original_vertices: hull.vertex_count(),
            final_vertices: hull.vertex_count(),
            removals_performed: 0,
            removals_rejected: 0,
            repair_passes: 0,
            max_accepted_cost: 0.0,
        }
    }

    /// Get the reduction ratio (final / original).
    #[must_use]
    pub fn reduction_ratio(&self) -> f64 {
        if self.original_vertices == 0 {
            1.0
        } else {
            self.final_vertices as f64 / self.original_vertices as f64
        }
    }

    /// Check if any decimation occurred.
    #[must_use]
    pub const fn was_decimated(&self) -> bool {
        self.removals_performed > 0
    }

    /// Integer vertices with exact duplicates removed, first occurrence kept.
    #[must_use]
    pub fn points(&self) -> Vec<IVec3> {
        dedup_points(self.hull.points())
    }
}

impl std::fmt::Display for DecimationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Decimation: {} → {} vertices ({} removals, {} rejected, max error {:.3})",
            self.original_vertices,
            self.final_vertices,
            self.removals_performed,
            self.removals_rejected,
            self.max_accepted_cost
        )
    }
}

/// Removes exact duplicates while keeping order.
pub(crate) fn dedup_points(points: &[IVec3]) -> Vec<IVec3> {
    let mut seen = HashSet::with_capacity(points.len());
    points.iter().copied().filter(|p| seen.insert(*p)).collect()
}
