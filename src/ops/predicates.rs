//! Structural predicates and subgraph relations.

use std::cmp::Ordering;

use crate::graph::Graph;

/// Whether both graphs have identical adjacency.
pub fn equals<T: Ord + Clone>(g1: &Graph<T>, g2: &Graph<T>) -> bool {
    g1.adjacency() == g2.adjacency()
}

/// Whether `sub` is a subgraph of `graph`.
///
/// Every node of `sub` must be a node of `graph`, and its neighbors in `sub`
/// must be a subset of its neighbors in `graph`.
pub fn is_subgraph<T: Ord + Clone>(graph: &Graph<T>, sub: &Graph<T>) -> bool {
    sub.adjacency().iter().all(|(node, neighbors)| {
        graph
            .neighbors(node)
            .is_some_and(|outer| neighbors.is_subset(outer))
    })
}

/// Argument-swapped [`is_subgraph`]: whether `sub` is a subgraph of `graph`.
pub fn is_subgraph_of<T: Ord + Clone>(sub: &Graph<T>, graph: &Graph<T>) -> bool {
    is_subgraph(graph, sub)
}

/// A subgraph that differs from `graph`.
pub fn is_proper_subgraph<T: Ord + Clone>(graph: &Graph<T>, sub: &Graph<T>) -> bool {
    !equals(graph, sub) && is_subgraph(graph, sub)
}

/// The graph itself, seen as a subgraph. Same answer as [`equals`].
pub fn is_improper_subgraph<T: Ord + Clone>(graph: &Graph<T>, sub: &Graph<T>) -> bool {
    equals(graph, sub)
}

/// A subgraph with the same number of nodes as `graph`.
pub fn is_spanning_subgraph<T: Ord + Clone>(graph: &Graph<T>, sub: &Graph<T>) -> bool {
    graph.node_count() == sub.node_count() && is_subgraph(graph, sub)
}

/// Every node is connected to every other node.
///
/// The reverse lookup is redundant while the graph is symmetric; it is kept
/// so a broken adjacency map never reports as complete.
pub fn is_complete<T: Ord + Clone>(graph: &Graph<T>) -> bool {
    let others = graph.node_count().saturating_sub(1);
    graph.adjacency().iter().all(|(node, neighbors)| {
        neighbors.len() == others
            && neighbors
                .iter()
                .all(|neighbor| graph.contains_edge(neighbor, node))
    })
}

/// No edges. A graph without nodes is also empty.
pub fn is_empty<T: Ord + Clone>(graph: &Graph<T>) -> bool {
    graph.adjacency().values().all(|neighbors| neighbors.is_empty())
}

/// No nodes.
pub fn is_null<T: Ord + Clone>(graph: &Graph<T>) -> bool {
    graph.node_count() == 0
}

/// Exactly one node, with no neighbors.
pub fn is_trivial<T: Ord + Clone>(graph: &Graph<T>) -> bool {
    graph.node_count() == 1 && is_empty(graph)
}

/// Whether `node` is a node of `graph`.
pub fn is_child_node<T: Ord + Clone>(graph: &Graph<T>, node: &T) -> bool {
    graph.contains_node(node)
}

/// Both nodes exist and are connected.
pub fn are_adjacent_nodes<T: Ord + Clone>(graph: &Graph<T>, a: &T, b: &T) -> bool {
    is_child_node(graph, a) && is_child_node(graph, b) && graph.contains_edge(a, b)
}

/// Neither `a`/`b` nor `b`/`c` is an adjacent pair.
///
/// Note the polarity: this answers true when both pairs are NOT connected,
/// which is the opposite of what the name suggests.
pub fn are_adjacent_edges<T: Ord + Clone>(graph: &Graph<T>, a: &T, b: &T, c: &T) -> bool {
    !are_adjacent_nodes(graph, a, b) && !are_adjacent_nodes(graph, b, c)
}

/// Number of nodes.
pub fn order<T: Ord + Clone>(graph: &Graph<T>) -> usize {
    graph.node_count()
}

/// Number of edges: half the sum of all neighbor-set sizes.
pub fn size<T: Ord + Clone>(graph: &Graph<T>) -> usize {
    graph.edge_count()
}

/// Subgraph order: `a < b` when `a` is a proper subgraph of `b`.
///
/// Graphs where neither contains the other are incomparable.
impl<T: Ord + Clone> PartialOrd for Graph<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if equals(self, other) {
            Some(Ordering::Equal)
        } else if is_subgraph(other, self) {
            Some(Ordering::Less)
        } else if is_subgraph(self, other) {
            Some(Ordering::Greater)
        } else {
            None
        }
    }
}
