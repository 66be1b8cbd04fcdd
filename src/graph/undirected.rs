//! Core graph structure — a symmetric adjacency map.

use std::collections::{btree_map, BTreeMap, BTreeSet};
use std::fmt;

use crate::types::{Edge, GraphError, GraphResult};

/// Neighbor sets keyed by node identity.
pub type Adjacency<T> = BTreeMap<T, BTreeSet<T>>;

/// An undirected, unweighted graph keyed by node identity.
///
/// Every edge `a -- b` is stored twice, as `b` in the set of `a` and `a` in
/// the set of `b`. All mutators keep that relation symmetric and never leave
/// a neighbor entry pointing at a node that is not a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph<T> {
    adjacency: Adjacency<T>,
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Self {
            adjacency: BTreeMap::new(),
        }
    }
}

impl<T: Ord + Clone> Graph<T> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an adjacency map that the caller has already made symmetric.
    pub(crate) fn from_adjacency(adjacency: Adjacency<T>) -> Self {
        Self { adjacency }
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges: half the sum of all neighbor-set sizes.
    ///
    /// A self-loop adds one entry to its node's set, so it contributes only
    /// half an edge here and a lone loop counts as zero. [`Graph::edges`]
    /// lists every loop, so the two can differ on graphs with loops.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(BTreeSet::len).sum::<usize>() / 2
    }

    /// Read-only view of the adjacency map.
    pub fn adjacency(&self) -> &Adjacency<T> {
        &self.adjacency
    }

    /// Whether `node` is present.
    pub fn contains_node(&self, node: &T) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Whether `a` and `b` are connected. Absent nodes are never connected.
    pub fn contains_edge(&self, a: &T, b: &T) -> bool {
        self.adjacency
            .get(a)
            .is_some_and(|neighbors| neighbors.contains(b))
    }

    /// The neighbor set of `node`, if present.
    pub fn neighbors(&self, node: &T) -> Option<&BTreeSet<T>> {
        self.adjacency.get(node)
    }

    /// Number of neighbors of `node`.
    pub fn degree(&self, node: &T) -> GraphResult<usize> {
        self.adjacency
            .get(node)
            .map(BTreeSet::len)
            .ok_or(GraphError::NodeNotFound)
    }

    /// All nodes in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = &T> + '_ {
        self.adjacency.keys()
    }

    /// Every undirected edge exactly once, ordered by `(first, second)`.
    ///
    /// Self-loops are included, unlike in [`Graph::edge_count`].
    pub fn edges(&self) -> impl Iterator<Item = Edge<T>> + '_ {
        self.adjacency.iter().flat_map(|(node, neighbors)| {
            neighbors
                .range(node.clone()..)
                .map(move |neighbor| Edge::new(node.clone(), neighbor.clone()))
        })
    }

    /// Look up the edge between `a` and `b`.
    pub fn edge(&self, a: &T, b: &T) -> GraphResult<Edge<T>> {
        self.require_nodes(a, b)?;
        if !self.contains_edge(a, b) {
            return Err(GraphError::EdgeNotFound);
        }
        Ok(Edge::new(a.clone(), b.clone()))
    }

    /// Insert `node` with no neighbors.
    pub fn add_node(&mut self, node: T) -> GraphResult<()> {
        match self.adjacency.entry(node) {
            btree_map::Entry::Occupied(_) => Err(GraphError::NodeAlreadyExists),
            btree_map::Entry::Vacant(slot) => {
                slot.insert(BTreeSet::new());
                log::trace!("node added, order {}", self.adjacency.len());
                Ok(())
            }
        }
    }

    /// Remove `node` together with every edge incident to it.
    ///
    /// Returns the neighbor set the node had at removal time.
    pub fn remove_node(&mut self, node: &T) -> GraphResult<BTreeSet<T>> {
        let neighbors = self
            .adjacency
            .remove(node)
            .ok_or(GraphError::NodeNotFound)?;

        for neighbor in &neighbors {
            if let Some(set) = self.adjacency.get_mut(neighbor) {
                set.remove(node);
            }
        }

        log::trace!(
            "node removed with {} incident edges, order {}",
            neighbors.len(),
            self.adjacency.len()
        );
        Ok(neighbors)
    }

    /// Connect `a` and `b`.
    ///
    /// `a == b` is accepted and stores a self-loop: the node lists itself as
    /// a neighbor.
    pub fn add_edge(&mut self, a: &T, b: &T) -> GraphResult<()> {
        self.require_nodes(a, b)?;
        if self.contains_edge(a, b) {
            return Err(GraphError::NodesAlreadyAdjacent);
        }

        if let Some(set) = self.adjacency.get_mut(a) {
            set.insert(b.clone());
        }
        if let Some(set) = self.adjacency.get_mut(b) {
            set.insert(a.clone());
        }
        log::trace!("edge added");
        Ok(())
    }

    /// Disconnect `a` and `b`.
    pub fn remove_edge(&mut self, a: &T, b: &T) -> GraphResult<()> {
        self.require_nodes(a, b)?;
        if !self.contains_edge(a, b) {
            return Err(GraphError::NodesNotAdjacent);
        }

        if let Some(set) = self.adjacency.get_mut(a) {
            set.remove(b);
        }
        if let Some(set) = self.adjacency.get_mut(b) {
            set.remove(a);
        }
        log::trace!("edge removed");
        Ok(())
    }

    /// Remove every node and edge.
    pub fn clear(&mut self) {
        self.adjacency.clear();
    }

    /// Remove every edge, keeping all nodes.
    pub fn clear_edges(&mut self) {
        for neighbors in self.adjacency.values_mut() {
            neighbors.clear();
        }
    }

    fn require_nodes(&self, a: &T, b: &T) -> GraphResult<()> {
        if self.contains_node(a) && self.contains_node(b) {
            Ok(())
        } else {
            Err(GraphError::NodeNotFound)
        }
    }
}

impl<T: fmt::Display> fmt::Display for Graph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (node, neighbors) in &self.adjacency {
            writeln!(f, "Node {} is connected to:", node)?;
            for neighbor in neighbors {
                writeln!(f, "\t- Node {}", neighbor)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path_graph() -> Graph<u32> {
        let mut graph = Graph::new();
        for node in 1..=3 {
            graph.add_node(node).unwrap();
        }
        graph.add_edge(&1, &2).unwrap();
        graph.add_edge(&2, &3).unwrap();
        graph
    }

    #[test]
    fn test_edges_are_listed_once() {
        let graph = path_graph();
        let edges: Vec<Edge<u32>> = graph.edges().collect();
        assert_eq!(edges, vec![Edge::new(1, 2), Edge::new(2, 3)]);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_edge_lookup_errors() {
        let graph = path_graph();
        assert_eq!(graph.edge(&2, &1).unwrap(), Edge::new(1, 2));
        assert!(matches!(graph.edge(&1, &3), Err(GraphError::EdgeNotFound)));
        assert!(matches!(graph.edge(&1, &9), Err(GraphError::NodeNotFound)));
    }

    #[test]
    fn test_degree() {
        let graph = path_graph();
        assert_eq!(graph.degree(&2).unwrap(), 2);
        assert_eq!(graph.degree(&3).unwrap(), 1);
        assert!(matches!(graph.degree(&7), Err(GraphError::NodeNotFound)));
    }

    #[test]
    fn test_remove_node_returns_former_neighbors() {
        let mut graph = path_graph();
        let former = graph.remove_node(&2).unwrap();
        assert_eq!(former.into_iter().collect::<Vec<_>>(), vec![1, 3]);
        assert!(graph.neighbors(&1).unwrap().is_empty());
        assert!(graph.neighbors(&3).unwrap().is_empty());
    }

    #[test]
    fn test_self_loop_is_stored_once() {
        let mut graph = Graph::new();
        graph.add_node('a').unwrap();
        graph.add_edge(&'a', &'a').unwrap();
        assert!(graph.contains_edge(&'a', &'a'));
        assert_eq!(graph.degree(&'a').unwrap(), 1);
        assert_eq!(graph.edges().collect::<Vec<_>>(), vec![Edge::new('a', 'a')]);
        assert!(matches!(
            graph.add_edge(&'a', &'a'),
            Err(GraphError::NodesAlreadyAdjacent)
        ));
        graph.remove_node(&'a').unwrap();
        assert_eq!(graph.node_count(), 0);
    }

    #[test]
    fn test_self_loop_counts() {
        let mut graph = Graph::new();
        graph.add_node(1).unwrap();
        graph.add_edge(&1, &1).unwrap();
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.edges().count(), 1);

        graph.add_node(2).unwrap();
        graph.add_edge(&1, &2).unwrap();
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edges().count(), 2);
    }

    #[test]
    fn test_display_lists_neighbors() {
        let graph = path_graph();
        let expected = "Node 1 is connected to:\n\t- Node 2\n\
                        Node 2 is connected to:\n\t- Node 1\n\t- Node 3\n\
                        Node 3 is connected to:\n\t- Node 2\n";
        assert_eq!(graph.to_string(), expected);
    }
}
