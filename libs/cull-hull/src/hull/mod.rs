//! # Convex Hull
//!
//! Exact incremental QuickHull over integer points.
//!
//! ## Algorithm Overview
//!
//! 1. Seed a tetrahedron from extreme points
//! 2. Assign every other point to the face it is farthest outside of
//! 3. Pop a face with outside points, take its farthest point as the eye
//! 4. Flood visible faces, stitch the horizon to the eye, reassign orphans
//! 5. Repeat until no face has outside points, then compact the vertices
//!
//! Integer coordinates are authoritative; predicates run on the exact `f64`
//! cast of each point with a single tolerance (`HULL_EPSILON`).

mod face;
mod quickhull;

#[cfg(test)]
mod tests;

pub use face::Plane;
pub(crate) use face::{edge_key, triangle_edges};

use crate::error::HullResult;
use glam::{DVec3, IVec3};
use quickhull::HullBuilder;
use tracing::info;

/// Computes the convex hull of a set of integer points.
///
/// # Arguments
///
/// * `points` - Points to compute the hull of (at least 4, not all coplanar)
///
/// # Returns
///
/// The hull, or `InsufficientPoints` / `Degenerate` when no tetrahedron can be
/// seeded. Callers are expected to fall back to the raw points on failure.
///
/// # Example
///
/// ```rust
/// use cull_hull::build;
/// use glam::IVec3;
///
/// let points = vec![
///     IVec3::new(0, 0, 0),
///     IVec3::new(4, 0, 0),
///     IVec3::new(0, 4, 0),
///     IVec3::new(0, 0, 4),
///     IVec3::new(1, 1, 1),
/// ];
/// let hull = build(&points).unwrap();
/// assert_eq!(hull.vertex_count(), 4);
/// assert_eq!(hull.face_count(), 4);
/// ```
pub fn build(points: &[IVec3]) -> HullResult<Hull> {
    let mut builder = HullBuilder::new(points)?;
    builder.expand();
    let hull = builder.finish();

    info!(
        input = points.len(),
        vertices = hull.vertex_count(),
        faces = hull.face_count(),
        "Convex hull built"
    );

    Ok(hull)
}

/// A closed triangulated convex hull.
///
/// Vertices are stored twice: the integer form handed back to callers and
/// the floating form used for every geometric test. Containment repair only
/// moves vertices to integer positions, so both forms always agree.
#[derive(Debug, Clone, PartialEq)]
pub struct Hull {
    points: Vec<IVec3>,
    positions: Vec<DVec3>,
    faces: Vec<[usize; 3]>,
}

impl Hull {
    /// Assembles a hull from already-compacted parts.
    pub(crate) fn from_parts(
        points: Vec<IVec3>,
        positions: Vec<DVec3>,
        faces: Vec<[usize; 3]>,
    ) -> Self {
        debug_assert_eq!(points.len(), positions.len());
        Self {
            points,
            positions,
            faces,
        }
    }

    /// Returns the number of hull vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    /// Returns the number of triangular faces.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns the integer vertex positions.
    #[inline]
    pub fn points(&self) -> &[IVec3] {
        &self.points
    }

    /// Returns the floating vertex positions.
    #[inline]
    pub fn positions(&self) -> &[DVec3] {
        &self.positions
    }

    /// Returns the faces as index triples into the vertex arrays.
    #[inline]
    pub fn faces(&self) -> &[[usize; 3]] {
        &self.faces
    }

    /// Computes the plane of every face, `None` for zero-area faces.
    pub fn planes(&self) -> Vec<Option<Plane>> {
        self.faces
            .iter()
            .map(|&[a, b, c]| {
                Plane::from_triangle(self.positions[a], self.positions[b], self.positions[c])
            })
            .collect()
    }

    /// Returns the mean of all vertex positions.
    pub fn centroid(&self) -> DVec3 {
        centroid(&self.positions)
    }

    /// Returns true if the point is on or behind every valid face plane.
    pub fn contains(&self, point: DVec3, tolerance: f64) -> bool {
        self.planes()
            .iter()
            .flatten()
            .all(|plane| plane.signed_distance(point) <= tolerance)
    }

    /// Consumes the hull and returns its integer vertices.
    pub fn into_points(self) -> Vec<IVec3> {
        self.points
    }
}

/// Mean of a set of positions, origin when empty.
pub(crate) fn centroid(positions: &[DVec3]) -> DVec3 {
    if positions.is_empty() {
        return DVec3::ZERO;
    }
    positions.iter().copied().sum::<DVec3>() / positions.len() as f64
}
