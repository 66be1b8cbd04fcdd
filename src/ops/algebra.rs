//! Graph union and difference.

use std::ops::{Add, Sub};

use crate::graph::Graph;

/// Union of two graphs.
///
/// The node set is the union of both node sets; a node present in both gets
/// the union of its two neighbor sets. Neither input is modified.
pub fn union<T: Ord + Clone>(g1: &Graph<T>, g2: &Graph<T>) -> Graph<T> {
    let mut adjacency = g1.adjacency().clone();
    for (node, neighbors) in g2.adjacency() {
        adjacency
            .entry(node.clone())
            .or_default()
            .extend(neighbors.iter().cloned());
    }

    let result = Graph::from_adjacency(adjacency);
    log::debug!(
        "union: {}+{} nodes -> {} nodes, {} edges",
        g1.node_count(),
        g2.node_count(),
        result.node_count(),
        result.edge_count()
    );
    result
}

/// Remove the edges of `g2` from a copy of `g1`.
///
/// Every node of `g2` that is still present in the result loses its `g2`
/// neighbors (symmetrically), and is then dropped if it has no neighbors
/// left. Nodes of `g1` that are not nodes of `g2` are always kept, isolated
/// or not.
pub fn difference<T: Ord + Clone>(g1: &Graph<T>, g2: &Graph<T>) -> Graph<T> {
    let mut adjacency = g1.adjacency().clone();
    let mut dropped = 0usize;

    for (node, neighbors) in g2.adjacency() {
        let Some(own) = adjacency.get_mut(node) else {
            continue;
        };
        for neighbor in neighbors {
            own.remove(neighbor);
        }
        let now_isolated = own.is_empty();

        for neighbor in neighbors {
            if let Some(theirs) = adjacency.get_mut(neighbor) {
                theirs.remove(node);
            }
        }

        if now_isolated {
            adjacency.remove(node);
            dropped += 1;
        }
    }

    let result = Graph::from_adjacency(adjacency);
    log::debug!(
        "difference: dropped {} isolated nodes, {} nodes and {} edges remain",
        dropped,
        result.node_count(),
        result.edge_count()
    );
    result
}

impl<T: Ord + Clone> Add for &Graph<T> {
    type Output = Graph<T>;

    fn add(self, rhs: Self) -> Graph<T> {
        union(self, rhs)
    }
}

impl<T: Ord + Clone> Add for Graph<T> {
    type Output = Graph<T>;

    fn add(self, rhs: Self) -> Graph<T> {
        union(&self, &rhs)
    }
}

impl<T: Ord + Clone> Sub for &Graph<T> {
    type Output = Graph<T>;

    fn sub(self, rhs: Self) -> Graph<T> {
        difference(self, rhs)
    }
}

impl<T: Ord + Clone> Sub for Graph<T> {
    type Output = Graph<T>;

    fn sub(self, rhs: Self) -> Graph<T> {
        difference(&self, &rhs)
    }
}
