//! undirected-graph — a generic in-memory undirected graph.
//!
//! A [`Graph<T>`] maps each node to the set of its neighbors and keeps that
//! relation symmetric under every mutation. Graphs combine with `+`
//! ([`union`]) and `-` ([`difference`]), compare with the subgraph order
//! (`<`, `<=`, ...), and can be walked breadth- or depth-first.
//!
//! ```
//! use undirected_graph::{is_complete, GraphBuilder};
//!
//! let mut graph = GraphBuilder::new()
//!     .nodes(["A", "B", "C"])
//!     .cycle(&["A", "B", "C"])
//!     .build()
//!     .unwrap();
//! assert!(is_complete(&graph));
//!
//! graph.remove_edge(&"A", &"B").unwrap();
//! assert!(!is_complete(&graph));
//! ```

pub mod cli;
pub mod format;
pub mod graph;
pub mod ops;
pub mod types;

// Re-export commonly used types at the crate root
pub use format::{DotWriter, GraphDocument};
pub use graph::{breadth_first, depth_first, BreadthFirst, DepthFirst, Graph, GraphBuilder};
pub use ops::{
    are_adjacent_edges, are_adjacent_nodes, difference, equals, is_child_node, is_complete,
    is_empty, is_improper_subgraph, is_null, is_proper_subgraph, is_spanning_subgraph,
    is_subgraph, is_subgraph_of, is_trivial, order, size, union,
};
pub use types::{Edge, GraphError, GraphResult};
