//! Free functions over one or two graphs: algebra, subgraph relations and
//! structural predicates.

pub mod algebra;
pub mod predicates;

pub use algebra::{difference, union};
pub use predicates::{
    are_adjacent_edges, are_adjacent_nodes, equals, is_child_node, is_complete, is_empty,
    is_improper_subgraph, is_null, is_proper_subgraph, is_spanning_subgraph, is_subgraph,
    is_subgraph_of, is_trivial, order, size,
};
