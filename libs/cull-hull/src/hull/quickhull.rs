//! # QuickHull Algorithm
//!
//! Incremental 3D convex hull construction.
//! Based on the algorithm by Barber, Dobkin, and Huhdanpaa.
//!
//! ## Algorithm Steps
//!
//! 1. Pick the extreme pair on the widest axis, the point farthest from their
//!    line and the point farthest from that plane
//! 2. Build the tetrahedron, oriented away from its centroid
//! 3. Assign remaining points to the face they are farthest outside of
//! 4. For each queued face with outside points:
//!    a. Take the farthest point as the eye
//!    b. Flood visible faces over edge adjacency
//!    c. Replace them with a fan from the horizon edges to the eye
//!    d. Reassign orphaned outside points to the new faces
//! 5. Compact used vertices and fix orientation
//!
//! ## Determinism
//!
//! Every selection uses strict `>` and iterates a canonically ordered
//! sequence, so identical input always produces identical output.

use super::face::{edge_key, triangle_edges, Face};
use super::{centroid, Hull};
use crate::error::{HullError, HullResult};
use config::constants::{HULL_EPSILON, MIN_HULL_POINTS};
use glam::{DVec3, IVec3};
use std::collections::{HashMap, HashSet, VecDeque};
use tracing::debug;

/// Working state for one hull construction.
///
/// Faces are stored in an arena and addressed by slot; the edge map always
/// reflects the live faces only.
pub(crate) struct HullBuilder<'a> {
    /// Integer input points
    points: &'a [IVec3],
    /// Exact float casts of the input points
    positions: Vec<DVec3>,
    /// Face arena (dead faces keep their slot)
    faces: Vec<Face>,
    /// Undirected edge → live faces using it
    edges: HashMap<(usize, usize), Vec<usize>>,
    /// Faces waiting to be expanded
    queue: VecDeque<usize>,
}

impl<'a> HullBuilder<'a> {
    /// Seeds the hull with the initial tetrahedron and assigns all points.
    pub fn new(points: &'a [IVec3]) -> HullResult<Self> {
        if points.len() < MIN_HULL_POINTS {
            return Err(HullError::InsufficientPoints {
                count: points.len(),
                required: MIN_HULL_POINTS,
            });
        }

        let mut builder = Self {
            points,
            positions: points.iter().map(|p| p.as_dvec3()).collect(),
            faces: Vec::new(),
            edges: HashMap::new(),
            queue: VecDeque::new(),
        };

        let simplex = builder.initial_simplex()?;
        builder.seed_faces(simplex);

        Ok(builder)
    }

    /// Runs the main loop until no face has outside points.
    pub fn expand(&mut self) {
        let mut iterations = 0usize;

        while let Some(face_id) = self.queue.pop_front() {
            let face = &self.faces[face_id];
            if !face.alive || face.outside.is_empty() {
                continue;
            }
            let Some(eye) = face.farthest_point(&self.positions) else {
                continue;
            };

            self.add_point(face_id, eye);
            iterations += 1;
        }

        debug!(iterations, faces = self.faces.len(), "QuickHull expansion done");
    }

    /// Compacts the hull vertices and returns the finished hull.
    pub fn finish(self) -> Hull {
        let live: Vec<&Face> = self
            .faces
            .iter()
            .filter(|f| f.alive && f.plane.is_some())
            .collect();

        // Keep used vertices in ascending input order
        let mut used = vec![false; self.points.len()];
        for face in &live {
            for &v in &face.vertices {
                used[v] = true;
            }
        }

        let mut remap = vec![usize::MAX; self.points.len()];
        let mut points = Vec::new();
        let mut positions = Vec::new();
        for idx in (0..self.points.len()).filter(|&i| used[i]) {
            remap[idx] = points.len();
            points.push(self.points[idx]);
            positions.push(self.positions[idx]);
        }

        let mut faces: Vec<[usize; 3]> = live
            .iter()
            .map(|f| f.vertices.map(|v| remap[v]))
            .collect();
        orient_outward(&mut faces, &positions);

        Hull::from_parts(points, positions, faces)
    }

    // =========================================================================
    // INITIAL SIMPLEX
    // =========================================================================

    /// Chooses four affinely independent points.
    fn initial_simplex(&self) -> HullResult<[usize; 4]> {
        let (p0, p1) = self.extreme_pair();
        if (self.positions[p1] - self.positions[p0]).length() <= HULL_EPSILON {
            return Err(HullError::degenerate("All points are coincident"));
        }

        let p2 = self.farthest_from_line(p0, p1)?;
        let p3 = self.farthest_from_plane(p0, p1, p2)?;
        debug!(p0, p1, p2, p3, "Initial simplex");

        Ok([p0, p1, p2, p3])
    }

    /// Finds the min/max points along the axis with the largest extent.
    fn extreme_pair(&self) -> (usize, usize) {
        let mut best = (0, 0);
        let mut best_extent = f64::NEG_INFINITY;

        for axis in 0..3 {
            let mut min = 0;
            let mut max = 0;
            for (i, p) in self.positions.iter().enumerate() {
                if p[axis] < self.positions[min][axis] {
                    min = i;
                }
                if p[axis] > self.positions[max][axis] {
                    max = i;
                }
            }
            let extent = self.positions[max][axis] - self.positions[min][axis];
            if extent > best_extent {
                best_extent = extent;
                best = (min, max);
            }
        }

        best
    }

    /// Finds the point farthest from the line through two points.
    fn farthest_from_line(&self, p0: usize, p1: usize) -> HullResult<usize> {
        let origin = self.positions[p0];
        let direction = (self.positions[p1] - origin).normalize();
        let mut max_dist = HULL_EPSILON;
        let mut best = None;

        for (i, p) in self.positions.iter().enumerate() {
            if i == p0 || i == p1 {
                continue;
            }
            let dist = (*p - origin).cross(direction).length();
            if dist > max_dist {
                max_dist = dist;
                best = Some(i);
            }
        }

        best.ok_or_else(|| HullError::degenerate("All points are collinear"))
    }

    /// Finds the point farthest from the plane through three points.
    fn farthest_from_plane(&self, p0: usize, p1: usize, p2: usize) -> HullResult<usize> {
        let origin = self.positions[p0];
        let normal = (self.positions[p1] - origin).cross(self.positions[p2] - origin);
        if normal.length() < HULL_EPSILON {
            return Err(HullError::degenerate("Seed triangle has zero area"));
        }
        let normal = normal.normalize();

        let mut max_dist = HULL_EPSILON;
        let mut best = None;

        for (i, p) in self.positions.iter().enumerate() {
            if i == p0 || i == p1 || i == p2 {
                continue;
            }
            let dist = normal.dot(*p - origin).abs();
            if dist > max_dist {
                max_dist = dist;
                best = Some(i);
            }
        }

        best.ok_or_else(|| HullError::degenerate("All points are coplanar"))
    }

    /// Builds the tetrahedron faces and performs the initial assignment.
    fn seed_faces(&mut self, simplex: [usize; 4]) {
        let [p0, p1, p2, p3] = simplex;
        let center = centroid(&simplex.map(|i| self.positions[i]));

        let mut seeds: Vec<Face> = [[p0, p1, p2], [p0, p2, p3], [p0, p3, p1], [p1, p3, p2]]
            .into_iter()
            .map(|vertices| {
                let face = Face::new(vertices, &self.positions);
                if face.signed_distance(center) > 0.0 {
                    face.flipped(&self.positions)
                } else {
                    face
                }
            })
            .collect();

        // Canonical face order: ascending centroid coordinates
        seeds.sort_by(|a, b| {
            let ca = a.centroid(&self.positions);
            let cb = b.centroid(&self.positions);
            ca.x.total_cmp(&cb.x)
                .then(ca.y.total_cmp(&cb.y))
                .then(ca.z.total_cmp(&cb.z))
        });

        let face_ids: Vec<usize> = seeds.into_iter().map(|f| self.insert_face(f)).collect();

        let candidates: Vec<usize> = (0..self.points.len())
            .filter(|i| !simplex.contains(i))
            .collect();
        self.assign(&candidates, &face_ids);

        for id in face_ids {
            if !self.faces[id].outside.is_empty() {
                self.queue.push_back(id);
            }
        }
    }

    // =========================================================================
    // FACE ARENA
    // =========================================================================

    /// Stores a face and registers its edges.
    fn insert_face(&mut self, face: Face) -> usize {
        let id = self.faces.len();
        for (a, b) in triangle_edges(face.vertices) {
            self.edges.entry(edge_key(a, b)).or_default().push(id);
        }
        self.faces.push(face);
        id
    }

    /// Marks a face dead and unregisters its edges.
    fn remove_face(&mut self, id: usize) {
        let face = &mut self.faces[id];
        face.alive = false;
        for (a, b) in triangle_edges(face.vertices) {
            let key = edge_key(a, b);
            if let Some(users) = self.edges.get_mut(&key) {
                users.retain(|&f| f != id);
                if users.is_empty() {
                    self.edges.remove(&key);
                }
            }
        }
    }

    /// Returns the other live face across an edge.
    fn neighbour(&self, face: usize, a: usize, b: usize) -> Option<usize> {
        self.edges
            .get(&edge_key(a, b))
            .and_then(|users| users.iter().copied().find(|&f| f != face))
    }

    /// Assigns each candidate to the face it is farthest outside of.
    ///
    /// Points inside every face are dropped for good.
    fn assign(&mut self, candidates: &[usize], face_ids: &[usize]) {
        for &idx in candidates {
            let point = self.positions[idx];
            let mut best: Option<usize> = None;
            let mut best_dist = HULL_EPSILON;

            for &id in face_ids {
                let dist = self.faces[id].signed_distance(point);
                if dist > best_dist {
                    best_dist = dist;
                    best = Some(id);
                }
            }

            if let Some(id) = best {
                self.faces[id].outside.push(idx);
            }
        }
    }

    // =========================================================================
    // HORIZON UPDATE
    // =========================================================================

    /// Adds the eye point to the hull.
    fn add_point(&mut self, start: usize, eye: usize) {
        let eye_pos = self.positions[eye];
        let visible = self.visible_faces(start, eye_pos);
        let visible_set: HashSet<usize> = visible.iter().copied().collect();

        // Horizon edges keep the winding of the visible face they came from.
        // The opposite vertex of the surviving neighbour is the orientation
        // reference for the replacement face.
        let mut horizon: Vec<(usize, usize, Option<usize>)> = Vec::new();
        for &id in &visible {
            for (a, b) in triangle_edges(self.faces[id].vertices) {
                match self.neighbour(id, a, b) {
                    Some(n) if visible_set.contains(&n) => {}
                    Some(n) => horizon.push((a, b, self.faces[n].opposite(a, b))),
                    None => horizon.push((a, b, None)),
                }
            }
        }

        let mut orphans: Vec<usize> = Vec::new();
        for &id in &visible {
            orphans.append(&mut self.faces[id].outside);
            self.remove_face(id);
        }
        orphans.retain(|&p| p != eye);
        orphans.sort_unstable();

        let mut new_faces = Vec::with_capacity(horizon.len());
        for (a, b, reference) in horizon {
            let mut face = Face::new([a, b, eye], &self.positions);
            if let Some(r) = reference {
                if face.signed_distance(self.positions[r]) > HULL_EPSILON {
                    face = face.flipped(&self.positions);
                }
            }
            new_faces.push(self.insert_face(face));
        }

        self.assign(&orphans, &new_faces);

        for id in new_faces {
            if !self.faces[id].outside.is_empty() {
                self.queue.push_back(id);
            }
        }

        debug!(eye, removed = visible.len(), "Added hull vertex");
    }

    /// Breadth-first flood of faces visible from a point.
    fn visible_faces(&self, start: usize, eye: DVec3) -> Vec<usize> {
        let mut visible = vec![start];
        let mut seen: HashSet<usize> = HashSet::from([start]);
        let mut frontier = VecDeque::from([start]);

        while let Some(id) = frontier.pop_front() {
            for (a, b) in triangle_edges(self.faces[id].vertices) {
                let Some(n) = self.neighbour(id, a, b) else {
                    continue;
                };
                if seen.insert(n) && self.faces[n].signed_distance(eye) > HULL_EPSILON {
                    visible.push(n);
                    frontier.push_back(n);
                }
            }
        }

        visible
    }
}

/// Flips any face whose plane is positive at the hull centroid.
///
/// Idempotent: an already outward hull is left untouched.
pub(crate) fn orient_outward(faces: &mut [[usize; 3]], positions: &[DVec3]) {
    let center = centroid(positions);
    for face in faces.iter_mut() {
        let [a, b, c] = *face;
        let normal = (positions[b] - positions[a]).cross(positions[c] - positions[a]);
        if normal.dot(center - positions[a]) > 0.0 {
            face.swap(1, 2);
        }
    }
}
