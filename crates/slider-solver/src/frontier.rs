//! Min-ordered priority queue of search nodes.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::board::Heuristic;
use crate::error::{SolverError, SolverResult};
use crate::node::SearchNode;

/// Heap entry; the ordering is reversed so `BinaryHeap` pops the smallest
/// key, and among equal keys the earliest insert.
#[derive(Debug)]
struct Entry {
    key: u32,
    sequence: u64,
    node: SearchNode,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.sequence == other.sequence
    }
}

impl Eq for Entry {}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .key
            .cmp(&self.key)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Nodes waiting to be expanded, keyed by a [`Heuristic`] score.
#[derive(Debug)]
pub struct PriorityFrontier {
    heuristic: Heuristic,
    heap: BinaryHeap<Entry>,
    inserted: u64,
}

impl PriorityFrontier {
    pub fn new(heuristic: Heuristic) -> Self {
        Self {
            heuristic,
            heap: BinaryHeap::new(),
            inserted: 0,
        }
    }

    pub fn heuristic(&self) -> Heuristic {
        self.heuristic
    }

    pub fn insert(&mut self, node: SearchNode) {
        let key = self.heuristic.score(&node.board);
        self.heap.push(Entry {
            key,
            sequence: self.inserted,
            node,
        });
        self.inserted += 1;
    }

    /// Remove the node with the smallest key.
    ///
    /// # Errors
    ///
    /// [`SolverError::EmptyFrontier`] when nothing is queued.
    pub fn extract_min(&mut self) -> SolverResult<SearchNode> {
        self.heap
            .pop()
            .map(|entry| entry.node)
            .ok_or(SolverError::EmptyFrontier)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Total inserts since construction
    pub fn inserted(&self) -> u64 {
        self.inserted
    }
}
