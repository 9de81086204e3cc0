//! # `trellis` - Teaching-Grade Graph Toolkit
//!
//! A small adjacency-list graph with arena-indexed vertices, paired with the
//! growable stack and queue containers that drive its iterative traversals.
//!
//! ## Design
//!
//! The crate replaces three classic hand-rolled mechanisms with their
//! type-checked equivalents:
//!
//! 1. **Generic payloads instead of type erasure**: vertices carry a payload
//!    type parameter `V` rather than an opaque pointer behind paired
//!    getter/setter callbacks, so payload access is checked at compile time.
//! 2. **Arena indices instead of weak references**: the [`graph::Graph`]
//!    owns every vertex in one arena and adjacency entries are
//!    [`graph::VertexId`] indices into it. Removal vacates a slot and purges
//!    the id from every remaining adjacency list; a dangling reference
//!    cannot be expressed.
//! 3. **Traversal-local visited state**: depth-first and breadth-first walks
//!    allocate their own visited bitmap, so repeated traversals over the
//!    same graph never need a reset step and never observe stale state.
//!
//! Traversals are iterative, driven by the crate's own
//! [`collections::Stack`] and [`collections::Queue`] rather than recursion,
//! so traversal depth is never bounded by the call stack.
//!
//! ## Example
//!
//! ```rust
//! use trellis::graph::Graph;
//!
//! let mut graph = Graph::new();
//! let a = graph.add_vertex(1);
//! let b = graph.add_vertex(2);
//! let c = graph.add_vertex(3);
//!
//! // Undirected edges are mirrored pairs of directed edges.
//! graph.add_undirected_edge(a, b);
//! graph.add_undirected_edge(b, c);
//!
//! let reached: Vec<i32> = graph
//!     .depth_first(a)
//!     .filter_map(|id| graph.value(id).copied())
//!     .collect();
//! assert_eq!(reached.len(), 3);
//!
//! println!("{}", graph.to_plain_text());
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod collections;
pub mod graph;

pub use collections::{Queue, Stack};
pub use graph::{BreadthFirst, DepthFirst, Graph, VertexId};
