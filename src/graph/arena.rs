//! An arena-backed adjacency-list graph.
//!
//! Vertices live in a single owned arena inside the [`Graph`]; every adjacency
//! entry is a [`VertexId`] index into that arena rather than a reference. The
//! graph exclusively owns its vertices, so dropping the graph drops every
//! payload and every adjacency list, while adjacency entries are plain indices
//! that own nothing. Removal vacates a slot (tombstone) instead of shifting,
//! so outstanding ids are never silently re-pointed at a different vertex.
//!
//! Edges are directed and deliberately unchecked for duplicates: the adjacency
//! list keeps whatever the caller inserts, including parallel edges and
//! self-loops. Callers model an undirected edge by mirroring the insertion,
//! or use [`Graph::add_undirected_edge`].
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `add_vertex` | O(1) amortized | Appends to the arena |
//! | `remove_vertex` | O(n + m) | Purges the id from every adjacency list |
//! | `add_edge` | O(1) amortized | Appends, no duplicate check |
//! | `remove_edge` | O(degree) | Compacting removal of first occurrence |
//! | `is_adjacent` | O(degree) | Linear scan |
//! | `neighbors` | O(1) | Returns an iterator over the list |

use serde::{Deserialize, Serialize};

#[cfg(feature = "tracing")]
use tracing::trace;

/// Capacity a graph's vertex arena starts with before the first growth event.
pub const INITIAL_CAPACITY: usize = 5;

/// Multiplier applied to the arena capacity when it is full.
pub const GROWTH_FACTOR: usize = 2;

/// A stable index naming a vertex inside its owning [`Graph`].
///
/// Ids are assigned in insertion order and stay valid until the vertex they
/// name is removed; they are never reused for a different vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VertexId(usize);

impl VertexId {
    /// The raw arena index.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A vertex: an owned payload plus an ordered adjacency list of arena indices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct Vertex<V> {
    value: V,
    neighbors: Vec<VertexId>,
}

/// An adjacency-list graph that exclusively owns its vertices.
///
/// ```
/// use trellis::graph::Graph;
///
/// let mut graph = Graph::new();
/// let a = graph.add_vertex("a");
/// let b = graph.add_vertex("b");
/// graph.add_edge(a, b);
///
/// assert!(graph.is_adjacent(a, b));
/// assert!(!graph.is_adjacent(b, a));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph<V> {
    slots: Vec<Option<Vertex<V>>>,
    live: usize,
}

impl<V> Graph<V> {
    /// Creates an empty graph with `INITIAL_CAPACITY` arena slots preallocated.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    /// Creates an empty graph sized for at least `capacity` vertices.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            live: 0,
        }
    }

    /// Adds a vertex holding `value` and returns its id.
    ///
    /// Arena capacity doubles when exhausted, so n insertions perform
    /// O(log n) reallocations total.
    pub fn add_vertex(&mut self, value: V) -> VertexId {
        let capacity = self.slots.capacity();
        if self.slots.len() == capacity {
            let target = if capacity == 0 {
                INITIAL_CAPACITY
            } else {
                capacity * GROWTH_FACTOR
            };
            self.slots.reserve_exact(target - self.slots.len());
        }

        let id = VertexId(self.slots.len());
        self.slots.push(Some(Vertex {
            value,
            neighbors: Vec::new(),
        }));
        self.live += 1;
        id
    }

    /// Removes the vertex named by `id`, returning its payload.
    ///
    /// The slot is vacated, not shifted, so all other ids stay valid. Every
    /// adjacency entry in the remaining vertices that referenced `id` is
    /// purged as well; no stale index survives the removal.
    ///
    /// Returns `None` if `id` is out of bounds or already removed.
    pub fn remove_vertex(&mut self, id: VertexId) -> Option<V> {
        let vertex = self.slots.get_mut(id.0)?.take()?;
        self.live -= 1;

        let mut purged = 0usize;
        for slot in self.slots.iter_mut().flatten() {
            let before = slot.neighbors.len();
            slot.neighbors.retain(|&n| n != id);
            purged += before - slot.neighbors.len();
        }

        #[cfg(feature = "tracing")]
        trace!(vertex = id.index(), purged, "removed vertex");
        let _ = purged;

        Some(vertex.value)
    }

    /// Returns `true` if `id` names a live vertex in this graph.
    #[must_use]
    pub fn contains(&self, id: VertexId) -> bool {
        self.slot(id).is_some()
    }

    /// Returns a reference to the payload of `id`, or `None` if vacated.
    #[must_use]
    pub fn value(&self, id: VertexId) -> Option<&V> {
        self.slot(id).map(|v| &v.value)
    }

    /// Returns a mutable reference to the payload of `id`, or `None` if vacated.
    pub fn value_mut(&mut self, id: VertexId) -> Option<&mut V> {
        self.slots.get_mut(id.0)?.as_mut().map(|v| &mut v.value)
    }

    /// Appends a directed edge `from -> to` onto `from`'s adjacency list.
    ///
    /// No direction is implied for `to`: callers mirror the call (or use
    /// [`Graph::add_undirected_edge`]) to model an undirected edge. Parallel
    /// edges and self-loops are kept as inserted.
    ///
    /// # Panics
    /// Panics if either endpoint is out of bounds or removed.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId) {
        assert!(self.contains(to), "vertex {} out of bounds", to.index());
        let slot = self
            .slots
            .get_mut(from.0)
            .and_then(Option::as_mut)
            .unwrap_or_else(|| panic!("vertex {} out of bounds", from.index()));
        slot.neighbors.push(to);
    }

    /// Appends the mirrored pair of directed edges `a -> b` and `b -> a`.
    ///
    /// # Panics
    /// Panics if either endpoint is out of bounds or removed.
    pub fn add_undirected_edge(&mut self, a: VertexId, b: VertexId) {
        self.add_edge(a, b);
        self.add_edge(b, a);
    }

    /// Removes the first occurrence of `to` from `from`'s adjacency list,
    /// compacting the list. O(degree).
    ///
    /// Returns `true` if an edge was removed.
    pub fn remove_edge(&mut self, from: VertexId, to: VertexId) -> bool {
        let Some(slot) = self.slots.get_mut(from.0).and_then(Option::as_mut) else {
            return false;
        };
        match slot.neighbors.iter().position(|&n| n == to) {
            Some(pos) => {
                slot.neighbors.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Removes every occurrence of `to` from `from`'s adjacency list.
    ///
    /// Returns how many entries were removed.
    pub fn remove_edge_all(&mut self, from: VertexId, to: VertexId) -> usize {
        let Some(slot) = self.slots.get_mut(from.0).and_then(Option::as_mut) else {
            return 0;
        };
        let before = slot.neighbors.len();
        slot.neighbors.retain(|&n| n != to);
        before - slot.neighbors.len()
    }

    /// Returns `true` if `from`'s adjacency list contains `to`. O(degree).
    #[must_use]
    pub fn is_adjacent(&self, from: VertexId, to: VertexId) -> bool {
        self.neighbors(from).any(|n| n == to)
    }

    /// Iterates over `from`'s adjacency list in insertion order.
    ///
    /// Empty for an out-of-bounds or removed id.
    pub fn neighbors(&self, from: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.slot(from)
            .map_or(&[] as &[VertexId], |v| v.neighbors.as_slice())
            .iter()
            .copied()
    }

    /// Out-degree of `from`. O(1); zero for an invalid id.
    #[must_use]
    pub fn degree(&self, from: VertexId) -> usize {
        self.slot(from).map_or(0, |v| v.neighbors.len())
    }

    /// Number of live vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.live
    }

    /// Number of directed adjacency entries across all live vertices.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.slots
            .iter()
            .flatten()
            .map(|v| v.neighbors.len())
            .sum()
    }

    /// Returns `true` when the graph holds no live vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Number of arena slots available before the next growth event.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Iterates over live vertex ids in insertion order.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_some())
            .map(|(i, _)| VertexId(i))
    }

    /// Iterates over live vertices as `(id, payload)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, &V)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|v| (VertexId(i), &v.value)))
    }

    /// Number of arena slots, live or vacated. Traversals size their
    /// visited bitmaps to this.
    pub(crate) fn slot_count(&self) -> usize {
        self.slots.len()
    }

    fn slot(&self, id: VertexId) -> Option<&Vertex<V>> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }
}

impl<V> Default for Graph<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_vertices() -> (Graph<i32>, VertexId, VertexId, VertexId) {
        let mut graph = Graph::new();
        let a = graph.add_vertex(1);
        let b = graph.add_vertex(2);
        let c = graph.add_vertex(3);
        (graph, a, b, c)
    }

    #[test]
    fn vertex_count_matches_insertions() {
        let mut graph = Graph::new();
        assert!(graph.is_empty());
        for i in 0..7 {
            graph.add_vertex(i);
        }
        assert_eq!(graph.vertex_count(), 7);
        let ids: Vec<usize> = graph.vertex_ids().map(VertexId::index).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn edges_are_one_directional() {
        let (mut graph, a, b, _) = three_vertices();
        graph.add_edge(a, b);
        assert!(graph.is_adjacent(a, b));
        assert!(!graph.is_adjacent(b, a));

        graph.add_edge(b, a);
        assert!(graph.is_adjacent(b, a));
    }

    #[test]
    fn undirected_edge_mirrors() {
        let (mut graph, a, b, _) = three_vertices();
        graph.add_undirected_edge(a, b);
        assert!(graph.is_adjacent(a, b));
        assert!(graph.is_adjacent(b, a));
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn duplicate_edges_and_self_loops_are_kept() {
        let (mut graph, a, b, _) = three_vertices();
        graph.add_edge(a, b);
        graph.add_edge(a, b);
        graph.add_edge(a, a);
        assert_eq!(graph.degree(a), 3);
        let neighbors: Vec<VertexId> = graph.neighbors(a).collect();
        assert_eq!(neighbors, vec![b, b, a]);
    }

    #[test]
    fn remove_edge_takes_first_occurrence() {
        let (mut graph, a, b, c) = three_vertices();
        graph.add_edge(a, b);
        graph.add_edge(a, c);
        graph.add_edge(a, b);

        assert!(graph.remove_edge(a, b));
        let neighbors: Vec<VertexId> = graph.neighbors(a).collect();
        assert_eq!(neighbors, vec![c, b]);

        assert!(!graph.remove_edge(a, a));
    }

    #[test]
    fn remove_edge_all_purges_duplicates() {
        let (mut graph, a, b, c) = three_vertices();
        graph.add_edge(a, b);
        graph.add_edge(a, b);
        graph.add_edge(a, c);

        assert_eq!(graph.remove_edge_all(a, b), 2);
        assert_eq!(graph.remove_edge_all(a, b), 0);
        let neighbors: Vec<VertexId> = graph.neighbors(a).collect();
        assert_eq!(neighbors, vec![c]);
    }

    #[test]
    fn remove_vertex_purges_all_references() {
        let (mut graph, a, b, c) = three_vertices();
        graph.add_undirected_edge(a, b);
        graph.add_undirected_edge(b, c);
        graph.add_edge(c, b);

        assert_eq!(graph.remove_vertex(b), Some(2));
        assert_eq!(graph.vertex_count(), 2);
        assert!(!graph.contains(b));

        // No adjacency list anywhere still mentions the removed id.
        for id in graph.vertex_ids().collect::<Vec<_>>() {
            assert!(graph.neighbors(id).all(|n| n != b));
        }
        assert_eq!(graph.edge_count(), 0);

        // Removing again is a no-op.
        assert_eq!(graph.remove_vertex(b), None);
    }

    #[test]
    fn remove_vertex_keeps_other_ids_stable() {
        let (mut graph, a, b, c) = three_vertices();
        graph.add_edge(a, c);
        graph.remove_vertex(b);

        assert_eq!(graph.value(a), Some(&1));
        assert_eq!(graph.value(c), Some(&3));
        assert!(graph.is_adjacent(a, c));
    }

    #[test]
    fn payload_access() {
        let (mut graph, a, _, _) = three_vertices();
        assert_eq!(graph.value(a), Some(&1));
        *graph.value_mut(a).unwrap() = 42;
        assert_eq!(graph.value(a), Some(&42));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn add_edge_to_missing_vertex_panics() {
        let (mut graph, a, b, _) = three_vertices();
        graph.remove_vertex(b);
        graph.add_edge(a, b);
    }

    #[test]
    fn growth_preserves_entries() {
        let mut graph = Graph::new();
        let initial = graph.capacity();
        assert!(initial >= INITIAL_CAPACITY);

        let ids: Vec<VertexId> = (0..initial * 3).map(|i| graph.add_vertex(i)).collect();
        assert!(graph.capacity() >= initial * GROWTH_FACTOR);

        // Wire a long chain to force adjacency growth too.
        for pair in ids.windows(2) {
            graph.add_edge(pair[0], pair[1]);
        }

        for (i, &id) in ids.iter().enumerate() {
            assert_eq!(graph.value(id), Some(&i));
        }
        for pair in ids.windows(2) {
            assert!(graph.is_adjacent(pair[0], pair[1]));
        }
        assert_eq!(graph.edge_count(), ids.len() - 1);
    }
}
