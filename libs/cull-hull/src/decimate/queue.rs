//! Min-priority queue of vertex removal candidates with lazy deletion.

use super::params::StaleEntryPolicy;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A vertex removal candidate in the priority queue.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RemovalCandidate {
    /// Removal cost (geometric error), `+inf` if not removable
    pub cost: f64,
    /// Vertex index in the hull before any removal
    pub id: usize,
    /// Vertex generation when this entry was pushed
    generation: u32,
}

impl PartialEq for RemovalCandidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for RemovalCandidate {}

impl PartialOrd for RemovalCandidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RemovalCandidate {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for min-heap behaviour; equal costs pop the lower id first
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.id.cmp(&self.id))
            .then_with(|| other.generation.cmp(&self.generation))
    }
}

/// Removal queue keyed by original vertex index.
///
/// Entries are never updated in place. Removed vertices are tracked in a
/// liveness map and skipped on pop; `StaleEntryPolicy` decides whether an
/// older entry of a live vertex is still honoured.
#[derive(Debug)]
pub(crate) struct RemovalQueue {
    heap: BinaryHeap<RemovalCandidate>,
    live: Vec<bool>,
    generations: Vec<u32>,
    policy: StaleEntryPolicy,
}

impl RemovalQueue {
    /// Creates an empty queue for `vertex_count` original vertices.
    pub fn new(vertex_count: usize, policy: StaleEntryPolicy) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(vertex_count),
            live: vec![true; vertex_count],
            generations: vec![0; vertex_count],
            policy,
        }
    }

    /// Pushes a (re)computed cost for a vertex.
    pub fn push(&mut self, id: usize, cost: f64) {
        if self.policy == StaleEntryPolicy::Generation {
            self.generations[id] += 1;
        }
        self.heap.push(RemovalCandidate {
            cost,
            id,
            generation: self.generations[id],
        });
    }

    /// Pops the cheapest entry that is still honoured.
    pub fn pop(&mut self) -> Option<RemovalCandidate> {
        while let Some(candidate) = self.heap.pop() {
            if !self.live[candidate.id] {
                continue;
            }
            if self.policy == StaleEntryPolicy::Generation
                && candidate.generation != self.generations[candidate.id]
            {
                continue;
            }
            return Some(candidate);
        }
        None
    }

    /// Marks a vertex as removed so its remaining entries are skipped.
    pub fn retire(&mut self, id: usize) {
        self.live[id] = false;
    }

    /// Number of entries in the heap, stale ones included.
    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.heap.len()
    }
}
