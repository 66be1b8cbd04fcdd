//! Graph traversal algorithms (BFS, DFS).

use std::collections::{BTreeSet, VecDeque};

use crate::types::{GraphError, GraphResult};

use super::Graph;

/// Lazy breadth-first walk, created by [`Graph::bfs`].
///
/// Nodes are marked visited when they are queued, so each reachable node is
/// yielded exactly once. Neighbors are queued in ascending order.
pub struct BreadthFirst<'a, T> {
    graph: &'a Graph<T>,
    queue: VecDeque<&'a T>,
    visited: BTreeSet<&'a T>,
}

/// Lazy depth-first walk, created by [`Graph::dfs`].
///
/// Uses the same visited-at-push discipline as [`BreadthFirst`] with a stack
/// in place of the queue, so the largest unvisited neighbor is expanded first.
pub struct DepthFirst<'a, T> {
    graph: &'a Graph<T>,
    stack: Vec<&'a T>,
    visited: BTreeSet<&'a T>,
}

impl<T: Ord + Clone> Graph<T> {
    /// Start a breadth-first walk from `start`.
    pub fn bfs(&self, start: &T) -> GraphResult<BreadthFirst<'_, T>> {
        let (start, _) = self
            .adjacency()
            .get_key_value(start)
            .ok_or(GraphError::NodeNotFound)?;
        Ok(BreadthFirst {
            graph: self,
            queue: VecDeque::from([start]),
            visited: BTreeSet::from([start]),
        })
    }

    /// Start a depth-first walk from `start`.
    pub fn dfs(&self, start: &T) -> GraphResult<DepthFirst<'_, T>> {
        let (start, _) = self
            .adjacency()
            .get_key_value(start)
            .ok_or(GraphError::NodeNotFound)?;
        Ok(DepthFirst {
            graph: self,
            stack: vec![start],
            visited: BTreeSet::from([start]),
        })
    }
}

impl<'a, T: Ord + Clone> Iterator for BreadthFirst<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let current = self.queue.pop_front()?;
        let graph = self.graph;
        if let Some(neighbors) = graph.neighbors(current) {
            for neighbor in neighbors {
                if self.visited.insert(neighbor) {
                    self.queue.push_back(neighbor);
                }
            }
        }
        Some(current)
    }
}

impl<'a, T: Ord + Clone> Iterator for DepthFirst<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let current = self.stack.pop()?;
        let graph = self.graph;
        if let Some(neighbors) = graph.neighbors(current) {
            for neighbor in neighbors {
                if self.visited.insert(neighbor) {
                    self.stack.push(neighbor);
                }
            }
        }
        Some(current)
    }
}

/// Nodes reachable from `start` in breadth-first order.
pub fn breadth_first<T: Ord + Clone>(graph: &Graph<T>, start: &T) -> GraphResult<Vec<T>> {
    Ok(graph.bfs(start)?.cloned().collect())
}

/// Nodes reachable from `start` in depth-first order.
pub fn depth_first<T: Ord + Clone>(graph: &Graph<T>, start: &T) -> GraphResult<Vec<T>> {
    Ok(graph.dfs(start)?.cloned().collect())
}
