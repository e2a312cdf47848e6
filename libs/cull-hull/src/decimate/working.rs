//! Mutable hull used during decimation.
//!
//! Holds the shrinking vertex arrays, the face list, the map from current
//! slots back to original vertex indices, and the memoised face planes.

use crate::hull::{centroid, edge_key, triangle_edges, Hull, Plane};
use config::constants::HULL_EPSILON;
use glam::{DVec3, IVec3};
use std::collections::{BTreeMap, BTreeSet, HashSet};
use thiserror::Error;

/// Reasons a vertex cannot be removed. Never surfaced to callers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum RingError {
    /// Fewer than three ring vertices
    #[error("vertex {vertex} has {count} ring neighbours")]
    TooFewNeighbors { vertex: usize, count: usize },

    /// Ring is not a single simple cycle
    #[error("non-manifold neighbourhood around vertex {vertex}")]
    NonManifold { vertex: usize },

    /// No fan over the ring is valid
    #[error("no valid fan triangulation for vertex {vertex}")]
    Degenerate { vertex: usize },
}

/// Outcome of containment repair after a removal.
#[derive(Debug, Clone, Default)]
pub(crate) struct RepairOutcome {
    /// Original ids of vertices that were pushed outward
    pub moved: BTreeSet<usize>,
    /// Number of passes that moved something
    pub passes: usize,
    /// True when no original point is left outside
    pub converged: bool,
}

/// A vertex removal that was applied.
#[derive(Debug, Clone)]
pub(crate) struct Removal {
    /// Original ids of the former neighbour ring
    pub ring: Vec<usize>,
    /// Error of the fan that replaced the vertex
    pub cost: f64,
}

/// Fan triangulation of a ring with its error.
struct Fan {
    triangles: Vec<[usize; 3]>,
    cost: f64,
}

#[derive(Debug, Clone)]
pub(crate) struct WorkingHull {
    points: Vec<IVec3>,
    /// Float casts of `points`, kept equal through repair
    positions: Vec<DVec3>,
    /// Original vertex index per slot, strictly ascending
    ids: Vec<usize>,
    faces: Vec<[usize; 3]>,
    /// Memoised face planes, cleared on every structural change
    planes: Option<Vec<Option<Plane>>>,
}

impl WorkingHull {
    pub fn from_hull(hull: &Hull) -> Self {
        Self {
            points: hull.points().to_vec(),
            positions: hull.positions().to_vec(),
            ids: (0..hull.vertex_count()).collect(),
            faces: hull.faces().to_vec(),
            planes: None,
        }
    }

    pub fn into_hull(self) -> Hull {
        Hull::from_parts(self.points, self.positions, self.faces)
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn id(&self, slot: usize) -> usize {
        self.ids[slot]
    }

    /// Current slot of an original vertex, `None` once removed.
    #[inline]
    pub fn slot_of(&self, id: usize) -> Option<usize> {
        self.ids.binary_search(&id).ok()
    }

    #[cfg(test)]
    pub fn faces(&self) -> &[[usize; 3]] {
        &self.faces
    }

    #[cfg(test)]
    pub fn position(&self, slot: usize) -> DVec3 {
        self.positions[slot]
    }

    fn invalidate_planes(&mut self) {
        self.planes = None;
    }

    /// Face planes, recomputed only after a structural change.
    pub fn planes(&mut self) -> &[Option<Plane>] {
        let positions = &self.positions;
        let faces = &self.faces;
        self.planes.get_or_insert_with(|| {
            faces
                .iter()
                .map(|&[a, b, c]| Plane::from_triangle(positions[a], positions[b], positions[c]))
                .collect()
        })
    }

    // =========================================================================
    // NEIGHBOUR RING
    // =========================================================================

    /// Ordered cycle of vertices around a vertex, in face winding order.
    ///
    /// Built from the edges opposite `v` in each incident face. The ring must
    /// be a single cycle where every node has degree two.
    pub fn ring(&self, v: usize) -> Result<Vec<usize>, RingError> {
        let mut next: BTreeMap<usize, usize> = BTreeMap::new();
        let mut degree: BTreeMap<usize, usize> = BTreeMap::new();
        let mut start = None;

        for face in &self.faces {
            let Some(k) = face.iter().position(|&x| x == v) else {
                continue;
            };
            let a = face[(k + 1) % 3];
            let b = face[(k + 2) % 3];
            if next.insert(a, b).is_some() {
                return Err(RingError::NonManifold { vertex: v });
            }
            *degree.entry(a).or_insert(0) += 1;
            *degree.entry(b).or_insert(0) += 1;
            start.get_or_insert(a);
        }

        if degree.len() < 3 {
            return Err(RingError::TooFewNeighbors {
                vertex: v,
                count: degree.len(),
            });
        }
        if degree.values().any(|&d| d != 2) {
            return Err(RingError::NonManifold { vertex: v });
        }
        let Some(start) = start else {
            return Err(RingError::TooFewNeighbors { vertex: v, count: 0 });
        };

        let mut ring = Vec::with_capacity(degree.len());
        let mut current = start;
        loop {
            ring.push(current);
            let Some(&following) = next.get(&current) else {
                return Err(RingError::NonManifold { vertex: v });
            };
            if following == start {
                break;
            }
            if ring.len() >= degree.len() {
                return Err(RingError::NonManifold { vertex: v });
            }
            current = following;
        }

        // Two disjoint cycles pass the degree test but not the walk
        if ring.len() != degree.len() {
            return Err(RingError::NonManifold { vertex: v });
        }

        Ok(ring)
    }

    /// Fan-triangulates the ring and measures how far `v` sticks out of it.
    ///
    /// The fan starts at the first ring vertex; if that fan would duplicate
    /// an existing edge, contain a zero-area triangle or face the centroid,
    /// the next ring vertex is tried as apex.
    fn fan(&self, v: usize, ring: &[usize]) -> Result<Fan, RingError> {
        let n = ring.len();
        let kept_edges: HashSet<(usize, usize)> = self
            .faces
            .iter()
            .filter(|f| !f.contains(&v))
            .flat_map(|f| triangle_edges(*f))
            .map(|(a, b)| edge_key(a, b))
            .collect();

        let others: Vec<DVec3> = self
            .positions
            .iter()
            .enumerate()
            .filter(|&(slot, _)| slot != v)
            .map(|(_, p)| *p)
            .collect();
        let center = centroid(&others);
        let removed = self.positions[v];

        'apex: for shift in 0..n {
            let order: Vec<usize> = (0..n).map(|i| ring[(shift + i) % n]).collect();
            let apex = order[0];

            for &diagonal in &order[2..n - 1] {
                if kept_edges.contains(&edge_key(apex, diagonal)) {
                    continue 'apex;
                }
            }

            let mut triangles = Vec::with_capacity(n - 2);
            let mut cost = 0.0_f64;
            for i in 1..n - 1 {
                let triangle = [apex, order[i], order[i + 1]];
                let Some(plane) = Plane::from_triangle(
                    self.positions[triangle[0]],
                    self.positions[triangle[1]],
                    self.positions[triangle[2]],
                ) else {
                    continue 'apex;
                };
                if plane.signed_distance(center) > HULL_EPSILON {
                    continue 'apex;
                }
                cost = cost.max(plane.signed_distance(removed));
                triangles.push(triangle);
            }

            return Ok(Fan { triangles, cost });
        }

        Err(RingError::Degenerate { vertex: v })
    }

    /// Removal cost of the vertex in `slot`, `+inf` if it cannot be removed.
    pub fn removal_cost(&self, slot: usize) -> f64 {
        self.ring(slot)
            .and_then(|ring| self.fan(slot, &ring))
            .map_or(f64::INFINITY, |fan| fan.cost)
    }

    /// Replaces the star of a vertex with a fan and deletes the vertex.
    pub fn remove_vertex(&mut self, v: usize) -> Result<Removal, RingError> {
        let ring = self.ring(v)?;
        let fan = self.fan(v, &ring)?;
        let ring_ids = ring.iter().map(|&slot| self.ids[slot]).collect();

        self.faces.retain(|f| !f.contains(&v));
        self.faces.extend(fan.triangles);

        self.points.remove(v);
        self.positions.remove(v);
        self.ids.remove(v);
        for face in &mut self.faces {
            for idx in face.iter_mut() {
                if *idx > v {
                    *idx -= 1;
                }
            }
        }
        self.invalidate_planes();

        Ok(Removal {
            ring: ring_ids,
            cost: fan.cost,
        })
    }

    // =========================================================================
    // CONTAINMENT REPAIR
    // =========================================================================

    /// Pushes faces outward until every original point is contained.
    ///
    /// For each escaped point, every vertex of the offending face moves along
    /// the face normal by the violation plus tolerance, then snaps outward to
    /// the integer grid. A vertex moves at most once per pass; passes repeat
    /// until nothing escapes or `max_passes` is hit.
    pub fn repair(&mut self, originals: &[DVec3], max_passes: usize) -> RepairOutcome {
        let mut outcome = RepairOutcome::default();

        for _ in 0..max_passes {
            let planes = self.planes().to_vec();
            let mut visited = vec![false; self.positions.len()];
            let mut pushed = false;

            for point in originals {
                for (fi, plane) in planes.iter().enumerate() {
                    let Some(plane) = plane else {
                        continue;
                    };
                    let violation = plane.signed_distance(*point);
                    if violation <= HULL_EPSILON {
                        continue;
                    }
                    for &v in &self.faces[fi] {
                        if visited[v] {
                            continue;
                        }
                        visited[v] = true;
                        let target = self.positions[v] + plane.normal * (violation + HULL_EPSILON);
                        self.points[v] = snap_outward(target, plane.normal);
                        self.positions[v] = self.points[v].as_dvec3();
                        outcome.moved.insert(self.ids[v]);
                        pushed = true;
                    }
                }
            }

            if !pushed {
                outcome.converged = true;
                return outcome;
            }
            outcome.passes += 1;
            self.invalidate_planes();
        }

        outcome.converged = self.escaped(originals) == 0;
        outcome
    }

    /// Counts original points outside at least one valid face.
    pub fn escaped(&mut self, originals: &[DVec3]) -> usize {
        let planes = self.planes();
        originals
            .iter()
            .filter(|&&p| planes.iter().flatten().any(|plane| plane.is_outside(p)))
            .count()
    }
}

/// Rounds a pushed position onto the integer grid without undoing the push.
///
/// Coordinates round up along a positive push component and down along a
/// negative one. Twice the push tolerance is given back first so a vertex
/// landing exactly on an integer plane stays there.
fn snap_outward(position: DVec3, direction: DVec3) -> IVec3 {
    let slack = 2.0 * HULL_EPSILON;
    let snap = |x: f64, d: f64| {
        if d > HULL_EPSILON {
            (x - slack).ceil()
        } else if d < -HULL_EPSILON {
            (x + slack).floor()
        } else {
            x.round()
        }
    };
    DVec3::new(
        snap(position.x, direction.x),
        snap(position.y, direction.y),
        snap(position.z, direction.z),
    )
    .as_ivec3()
}
