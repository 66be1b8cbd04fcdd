//! Undirected edge value.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An unordered pair of node identities.
///
/// The endpoints are stored normalised so that `first <= second`, which makes
/// `Edge::new(a, b) == Edge::new(b, a)`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Edge<T> {
    /// The smaller endpoint.
    pub first: T,
    /// The larger endpoint.
    pub second: T,
}

impl<T: Ord> Edge<T> {
    /// Create a new edge, ordering the endpoints.
    pub fn new(a: T, b: T) -> Self {
        if a <= b {
            Self {
                first: a,
                second: b,
            }
        } else {
            Self {
                first: b,
                second: a,
            }
        }
    }

    /// Whether both endpoints are the same node.
    pub fn is_loop(&self) -> bool {
        self.first == self.second
    }

    /// Whether `node` is one of the endpoints.
    pub fn touches(&self, node: &T) -> bool {
        &self.first == node || &self.second == node
    }
}

impl<T: fmt::Display> fmt::Display for Edge<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -- {}", self.first, self.second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_are_normalised() {
        let edge = Edge::new("b", "a");
        assert_eq!(edge.first, "a");
        assert_eq!(edge.second, "b");
        assert_eq!(edge, Edge::new("a", "b"));
    }

    #[test]
    fn test_loop_and_touches() {
        assert!(Edge::new(3, 3).is_loop());
        let edge = Edge::new(1, 2);
        assert!(!edge.is_loop());
        assert!(edge.touches(&1));
        assert!(edge.touches(&2));
        assert!(!edge.touches(&3));
        assert_eq!(edge.to_string(), "1 -- 2");
    }
}
