//! Iterator-based graph traversals driven by explicit containers.
//!
//! Both traversals use the same skeleton: pop a frontier entry, skip it if a
//! previous pop already visited it, otherwise mark it, yield it, and push
//! every neighbor in adjacency order. Depth-first runs the frontier through a
//! [`Stack`], breadth-first through a [`Queue`]; neither ever recurses, so
//! traversal depth is bounded by heap capacity, not the call stack.
//!
//! Because depth-first pushes all neighbors before processing any of them,
//! the *last*-pushed neighbor is explored first. The resulting order differs
//! from a recursive DFS (which would descend into the first neighbor
//! immediately); this reverse-adjacency-order bias is deliberate and fixed.
//!
//! Visited state is traversal-local (see [`super::visited`]): a second
//! traversal over the same graph starts from a clean slate, and a start id
//! that is out of bounds or vacated yields an empty traversal.

use crate::collections::{Queue, Stack};
use crate::graph::arena::{Graph, VertexId};
use crate::graph::visited::VisitedSet;

#[cfg(feature = "tracing")]
use tracing::trace;

/// Depth-first traversal yielding vertex ids in discovery order.
pub struct DepthFirst<'g, V> {
    graph: &'g Graph<V>,
    frontier: Stack<VertexId>,
    visited: VisitedSet,
}

impl<'g, V> DepthFirst<'g, V> {
    /// Creates a traversal rooted at `start`.
    pub fn new(graph: &'g Graph<V>, start: VertexId) -> Self {
        let mut frontier = Stack::new();
        if graph.contains(start) {
            frontier.push(start);
        }
        #[cfg(feature = "tracing")]
        trace!(start = start.index(), "depth-first traversal started");
        Self {
            graph,
            frontier,
            visited: VisitedSet::new(graph.slot_count()),
        }
    }
}

impl<V> Iterator for DepthFirst<'_, V> {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(id) = self.frontier.pop() {
            // An id can sit on the frontier once per incoming edge; only the
            // first pop visits it.
            if !self.visited.try_visit(id.index()) {
                continue;
            }
            for neighbor in self.graph.neighbors(id) {
                self.frontier.push(neighbor);
            }
            return Some(id);
        }
        None
    }
}

/// Breadth-first traversal yielding vertex ids in discovery order.
pub struct BreadthFirst<'g, V> {
    graph: &'g Graph<V>,
    frontier: Queue<VertexId>,
    visited: VisitedSet,
}

impl<'g, V> BreadthFirst<'g, V> {
    /// Creates a traversal rooted at `start`.
    pub fn new(graph: &'g Graph<V>, start: VertexId) -> Self {
        let mut frontier = Queue::new();
        if graph.contains(start) {
            frontier.enqueue(start);
        }
        #[cfg(feature = "tracing")]
        trace!(start = start.index(), "breadth-first traversal started");
        Self {
            graph,
            frontier,
            visited: VisitedSet::new(graph.slot_count()),
        }
    }
}

impl<V> Iterator for BreadthFirst<'_, V> {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(id) = self.frontier.dequeue() {
            if !self.visited.try_visit(id.index()) {
                continue;
            }
            for neighbor in self.graph.neighbors(id) {
                self.frontier.enqueue(neighbor);
            }
            return Some(id);
        }
        None
    }
}

impl<V> Graph<V> {
    /// Iterates over every vertex reachable from `start`, depth first.
    ///
    /// Each reachable vertex is yielded exactly once; unreachable vertices
    /// are never yielded. The order is deterministic given a deterministic
    /// adjacency order.
    pub fn depth_first(&self, start: VertexId) -> DepthFirst<'_, V> {
        DepthFirst::new(self, start)
    }

    /// Iterates over every vertex reachable from `start`, breadth first.
    pub fn breadth_first(&self, start: VertexId) -> BreadthFirst<'_, V> {
        BreadthFirst::new(self, start)
    }
}
