//! # Hull Validation
//!
//! Checks for the structural guarantees of a hull: containment of the
//! original points, convexity, and a closed consistently wound 2-manifold.

use crate::error::{HullError, HullResult};
use crate::hull::{edge_key, triangle_edges, Hull};
use glam::DVec3;
use std::collections::{BTreeMap, HashSet};

impl Hull {
    /// Runs the manifold and convexity checks with the given tolerance.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cull_hull::build;
    /// use glam::IVec3;
    ///
    /// let points: Vec<IVec3> = (0..8)
    ///     .map(|i| IVec3::new(i & 1, (i >> 1) & 1, (i >> 2) & 1))
    ///     .collect();
    /// let hull = build(&points).unwrap();
    /// hull.validate(1e-8).unwrap();
    /// ```
    pub fn validate(&self, tolerance: f64) -> HullResult<()> {
        closed_manifold(self)?;
        convexity(self, tolerance)
    }
}

/// Checks that every point is on or behind every valid face plane.
pub fn containment(hull: &Hull, points: &[DVec3], tolerance: f64) -> HullResult<()> {
    let planes = hull.planes();
    for (pi, point) in points.iter().enumerate() {
        for (fi, plane) in planes.iter().enumerate() {
            let Some(plane) = plane else {
                continue;
            };
            let distance = plane.signed_distance(*point);
            if distance > tolerance {
                return Err(HullError::validation(format!(
                    "point {pi} is {distance} outside face {fi}"
                )));
            }
        }
    }
    Ok(())
}

/// Checks that no hull vertex lies outside any face plane.
pub fn convexity(hull: &Hull, tolerance: f64) -> HullResult<()> {
    containment(hull, hull.positions(), tolerance)
}

/// Checks the faces form a closed, consistently wound 2-manifold of genus 0.
///
/// Every undirected edge must be used by exactly two faces, once in each
/// direction, every vertex must be referenced, and `V - E + F = 2`.
pub fn closed_manifold(hull: &Hull) -> HullResult<()> {
    let mut edge_uses: BTreeMap<(usize, usize), usize> = BTreeMap::new();
    let mut directed: HashSet<(usize, usize)> = HashSet::new();
    let mut referenced = vec![false; hull.vertex_count()];

    for (fi, face) in hull.faces().iter().enumerate() {
        for &v in face {
            if v >= hull.vertex_count() {
                return Err(HullError::validation(format!(
                    "face {fi} references missing vertex {v}"
                )));
            }
            referenced[v] = true;
        }
        for (a, b) in triangle_edges(*face) {
            if a == b {
                return Err(HullError::validation(format!("face {fi} is collapsed")));
            }
            if !directed.insert((a, b)) {
                return Err(HullError::validation(format!(
                    "directed edge ({a}, {b}) used twice"
                )));
            }
            *edge_uses.entry(edge_key(a, b)).or_insert(0) += 1;
        }
    }

    if let Some(v) = referenced.iter().position(|&r| !r) {
        return Err(HullError::validation(format!("vertex {v} is isolated")));
    }

    if let Some((edge, count)) = edge_uses.iter().find(|(_, count)| **count != 2) {
        return Err(HullError::validation(format!(
            "edge {edge:?} shared by {count} faces"
        )));
    }

    let v = hull.vertex_count() as i64;
    let e = edge_uses.len() as i64;
    let f = hull.face_count() as i64;
    if v - e + f != 2 {
        return Err(HullError::validation(format!(
            "Euler characteristic {} (V={v}, E={e}, F={f})",
            v - e + f
        )));
    }

    Ok(())
}
