//! The arena graph, its traversals, and its text renderings.
//!
//! Organized into:
//! - `arena`: the vertex arena and adjacency storage
//! - `traversal`: iterator-based depth-first and breadth-first walks
//! - `render`: plain and Graphviz text formatting

pub mod arena;
pub mod render;
pub mod traversal;
pub(crate) mod visited;

// Re-export the types almost every caller needs.
pub use arena::{Graph, VertexId};
pub use traversal::{BreadthFirst, DepthFirst};
