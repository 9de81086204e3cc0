//! Sequential containers that drive the graph traversals.
//!
//! Both containers are general purpose: they copy elements into their own
//! storage by move and hand them back by move, and neither knows anything
//! about the graph types that consume them.

pub mod queue;
pub mod stack;

pub use queue::Queue;
pub use stack::Stack;
