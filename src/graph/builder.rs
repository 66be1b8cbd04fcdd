//! Fluent API for building Graph instances.

use crate::types::{Edge, GraphError, GraphResult};

use super::Graph;

/// Fluent builder for constructing a [`Graph`].
///
/// Nodes and edges are recorded as given and replayed through the graph's
/// mutators in [`GraphBuilder::build`], so every precondition is checked
/// there.
pub struct GraphBuilder<T> {
    nodes: Vec<T>,
    edges: Vec<Edge<T>>,
}

impl<T: Ord + Clone> GraphBuilder<T> {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Add a node.
    pub fn node(&mut self, node: T) -> &mut Self {
        self.nodes.push(node);
        self
    }

    /// Add several nodes.
    pub fn nodes<I: IntoIterator<Item = T>>(&mut self, nodes: I) -> &mut Self {
        self.nodes.extend(nodes);
        self
    }

    /// Add an edge between two nodes.
    pub fn link(&mut self, a: T, b: T) -> &mut Self {
        self.edges.push(Edge::new(a, b));
        self
    }

    /// Add a closed cycle through `nodes` in the given order.
    ///
    /// Fewer than three nodes cannot close a simple cycle: two nodes get a
    /// single edge, one or zero nodes get none.
    pub fn cycle(&mut self, nodes: &[T]) -> &mut Self {
        for pair in nodes.windows(2) {
            self.edges.push(Edge::new(pair[0].clone(), pair[1].clone()));
        }
        if let [first, .., last] = nodes {
            if nodes.len() >= 3 {
                self.edges.push(Edge::new(last.clone(), first.clone()));
            }
        }
        self
    }

    /// Build the final graph.
    ///
    /// Fails with `NodeAlreadyExists` on a repeated node, `NodeNotFound` on
    /// an edge to an undeclared node and `EdgeAlreadyExists` on a repeated
    /// edge.
    pub fn build(&self) -> GraphResult<Graph<T>> {
        let mut graph = Graph::new();
        for node in &self.nodes {
            graph.add_node(node.clone())?;
        }
        for edge in &self.edges {
            graph
                .add_edge(&edge.first, &edge.second)
                .map_err(|e| match e {
                    GraphError::NodesAlreadyAdjacent => GraphError::EdgeAlreadyExists,
                    other => other,
                })?;
        }
        Ok(graph)
    }
}

impl<T: Ord + Clone> Default for GraphBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
