//! Read-only text renderings of a graph.
//!
//! Two formats, both one line per live vertex in insertion order, with values
//! rendered through `Display`:
//! - a plain adjacency listing, `value -- {n1, n2, ...}` (bare value when the
//!   vertex has no neighbors)
//! - a Graphviz `digraph` block suitable for `dot`
//!
//! Rendering never mutates the graph and is deterministic: the same graph
//! renders to byte-identical output every time.

use std::fmt::{Display, Write};

use crate::graph::arena::Graph;

impl<V: Display> Graph<V> {
    /// Renders the plain adjacency listing.
    ///
    /// ```
    /// use trellis::graph::Graph;
    ///
    /// let mut graph = Graph::new();
    /// let a = graph.add_vertex(1);
    /// let b = graph.add_vertex(2);
    /// graph.add_edge(a, b);
    ///
    /// assert_eq!(graph.to_plain_text(), "1 -- {2}\n2\n");
    /// ```
    #[must_use]
    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        for (id, value) in self.iter() {
            let _ = write!(out, "{value}");
            let mut neighbors = self.neighbors(id).peekable();
            if neighbors.peek().is_some() {
                let _ = write!(out, " -- {{");
                let mut first = true;
                for neighbor in neighbors {
                    if !first {
                        let _ = write!(out, ", ");
                    }
                    first = false;
                    // Adjacency entries always name live vertices, but a
                    // rendering of a hand-edited graph should not panic.
                    match self.value(neighbor) {
                        Some(v) => {
                            let _ = write!(out, "{v}");
                        }
                        None => {
                            let _ = write!(out, "?");
                        }
                    }
                }
                let _ = write!(out, "}}");
            }
            let _ = writeln!(out);
        }
        out
    }

    /// Renders a Graphviz `digraph` description of the graph.
    ///
    /// The header declares a left-to-right layout and node/edge styling;
    /// every live vertex is declared (so isolated vertices still appear)
    /// followed by one edge line per adjacency entry.
    #[must_use]
    pub fn to_graphviz(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "digraph {{");
        let _ = writeln!(out, "    rankdir=LR;");
        let _ = writeln!(out, "    node [shape=circle];");
        let _ = writeln!(out, "    edge [arrowsize=0.8];");
        for (_, value) in self.iter() {
            let _ = writeln!(out, "    \"{value}\";");
        }
        for (id, value) in self.iter() {
            for neighbor in self.neighbors(id) {
                if let Some(target) = self.value(neighbor) {
                    let _ = writeln!(out, "    \"{value}\" -> \"{target}\";");
                }
            }
        }
        let _ = writeln!(out, "}}");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_lists_adjacency_in_insertion_order() {
        let mut graph = Graph::new();
        let a = graph.add_vertex(1);
        let b = graph.add_vertex(2);
        let c = graph.add_vertex(3);
        graph.add_edge(a, b);
        graph.add_edge(a, c);
        graph.add_edge(c, a);

        assert_eq!(graph.to_plain_text(), "1 -- {2, 3}\n2\n3 -- {1}\n");
    }

    #[test]
    fn plain_text_single_isolated_vertex() {
        let mut graph = Graph::new();
        graph.add_vertex(42);
        assert_eq!(graph.to_plain_text(), "42\n");
    }

    #[test]
    fn plain_text_is_idempotent() {
        let mut graph = Graph::new();
        let a = graph.add_vertex("x");
        let b = graph.add_vertex("y");
        graph.add_undirected_edge(a, b);

        let first = graph.to_plain_text();
        let second = graph.to_plain_text();
        assert_eq!(first, second);
    }

    #[test]
    fn graphviz_declares_header_and_edges() {
        let mut graph = Graph::new();
        let a = graph.add_vertex("a");
        let b = graph.add_vertex("b");
        graph.add_edge(a, b);

        let dot = graph.to_graphviz();
        assert!(dot.starts_with("digraph {\n"));
        assert!(dot.contains("rankdir=LR;"));
        assert!(dot.contains("node [shape=circle];"));
        assert!(dot.contains("\"a\";"));
        assert!(dot.contains("\"b\";"));
        assert!(dot.contains("\"a\" -> \"b\";"));
        assert!(dot.ends_with("}\n"));
    }

    #[test]
    fn graphviz_keeps_isolated_vertices() {
        let mut graph = Graph::new();
        graph.add_vertex("alone");
        let dot = graph.to_graphviz();
        assert!(dot.contains("\"alone\";"));
        assert!(!dot.contains("->"));
    }

    #[test]
    fn removed_vertices_do_not_render() {
        let mut graph = Graph::new();
        let a = graph.add_vertex(1);
        let b = graph.add_vertex(2);
        graph.add_undirected_edge(a, b);
        graph.remove_vertex(b);

        assert_eq!(graph.to_plain_text(), "1\n");
    }
}
