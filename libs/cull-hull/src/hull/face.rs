//! # Hull Faces
//!
//! Plane equations and the arena face record used during construction.

use config::constants::HULL_EPSILON;
use glam::DVec3;

/// An oriented plane `normal·x + offset = 0` with a unit normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Unit outward normal
    pub normal: DVec3,
    /// Plane offset `d` in `normal·x + d = 0`
    pub offset: f64,
}

impl Plane {
    /// Builds the plane of a counter-clockwise triangle.
    ///
    /// Returns `None` when the triangle has near-zero area (un-normalised
    /// normal shorter than `HULL_EPSILON`).
    pub fn from_triangle(a: DVec3, b: DVec3, c: DVec3) -> Option<Self> {
        let normal = (b - a).cross(c - a);
        let length = normal.length();
        if length < HULL_EPSILON {
            return None;
        }
        let normal = normal / length;
        Some(Self {
            normal,
            offset: -normal.dot(a),
        })
    }

    /// Returns the signed distance from a point to this plane.
    #[inline]
    pub fn signed_distance(&self, point: DVec3) -> f64 {
        self.normal.dot(point) + self.offset
    }

    /// Returns true if the point is beyond the plane by more than tolerance.
    #[inline]
    pub fn is_outside(&self, point: DVec3) -> bool {
        self.signed_distance(point) > HULL_EPSILON
    }
}

/// Sorted vertex pair identifying an undirected edge.
#[inline]
pub(crate) fn edge_key(a: usize, b: usize) -> (usize, usize) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Directed edges of a triangle in winding order.
#[inline]
pub(crate) fn triangle_edges(v: [usize; 3]) -> [(usize, usize); 3] {
    [(v[0], v[1]), (v[1], v[2]), (v[2], v[0])]
}

/// A face of the hull under construction.
///
/// Faces live in an arena and are never moved; a superseded face keeps its
/// slot with `alive` cleared so stale work-queue entries can be recognised.
#[derive(Debug, Clone)]
pub(crate) struct Face {
    /// Indices of the three vertices (counter-clockwise seen from outside)
    pub vertices: [usize; 3],
    /// Cached plane, `None` for a zero-area face
    pub plane: Option<Plane>,
    /// Points beyond this face not yet on the hull
    pub outside: Vec<usize>,
    /// Cleared once the face is removed from the hull
    pub alive: bool,
}

impl Face {
    /// Creates a new face from three vertex indices.
    pub fn new(vertices: [usize; 3], positions: &[DVec3]) -> Self {
        let [a, b, c] = vertices;
        Self {
            vertices,
            plane: Plane::from_triangle(positions[a], positions[b], positions[c]),
            outside: Vec::new(),
            alive: true,
        }
    }

    /// Creates the face with reversed winding.
    pub fn flipped(&self, positions: &[DVec3]) -> Self {
        let [a, b, c] = self.vertices;
        Self::new([a, c, b], positions)
    }

    /// Signed distance to the face plane; invalid faces see nothing.
    #[inline]
    pub fn signed_distance(&self, point: DVec3) -> f64 {
        self.plane
            .map_or(f64::NEG_INFINITY, |plane| plane.signed_distance(point))
    }

    /// Returns the mean of the three corners.
    pub fn centroid(&self, positions: &[DVec3]) -> DVec3 {
        let [a, b, c] = self.vertices;
        (positions[a] + positions[b] + positions[c]) / 3.0
    }

    /// Returns the vertex that is not on the given edge.
    pub fn opposite(&self, a: usize, b: usize) -> Option<usize> {
        self.vertices.iter().copied().find(|&v| v != a && v != b)
    }

    /// Finds the outside point farthest from the plane.
    ///
    /// Ties keep the earliest entry so results follow outside-set order.
    pub fn farthest_point(&self, positions: &[DVec3]) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for &idx in &self.outside {
            let distance = self.signed_distance(positions[idx]);
            if best.map_or(true, |(_, d)| distance > d) {
                best = Some((idx, distance));
            }
        }
        best.map(|(idx, _)| idx)
    }
}
