//! Error types for the undirected-graph library.

use thiserror::Error;

/// All errors that can occur in the undirected-graph library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// An operation referenced a node that is not in the graph.
    #[error("Node not found")]
    NodeNotFound,

    /// An operation referenced an edge that is not in the graph.
    #[error("Edge not found")]
    EdgeNotFound,

    /// Tried to insert a node that is already present.
    #[error("Node already exists")]
    NodeAlreadyExists,

    /// Tried to insert an edge that is already present.
    #[error("Edge already exists")]
    EdgeAlreadyExists,

    /// Tried to disconnect two nodes that are not connected.
    #[error("Nodes not adjacent")]
    NodesNotAdjacent,

    /// Tried to connect two nodes that are already connected.
    #[error("Nodes already adjacent")]
    NodesAlreadyAdjacent,

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Graph document could not be encoded or decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
