//! JSON graph documents: a node list plus an edge list.

use std::io::{Read, Write};
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::graph::{Graph, GraphBuilder};
use crate::types::{Edge, GraphResult};

/// Serializable snapshot of a graph.
///
/// Nodes are listed explicitly so isolated nodes survive a round trip. Each
/// undirected edge appears once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDocument<T> {
    /// All nodes.
    pub nodes: Vec<T>,
    /// All edges.
    #[serde(default = "Vec::new")]
    pub edges: Vec<Edge<T>>,
}

impl<T: Ord + Clone> From<&Graph<T>> for GraphDocument<T> {
    fn from(graph: &Graph<T>) -> Self {
        Self {
            nodes: graph.nodes().cloned().collect(),
            edges: graph.edges().collect(),
        }
    }
}

impl<T: Ord + Clone> GraphDocument<T> {
    /// Rebuild the graph by replaying the nodes and edges.
    ///
    /// Fails with `NodeAlreadyExists` for a repeated node, `NodeNotFound`
    /// for an edge to an unlisted node and `EdgeAlreadyExists` for a
    /// repeated edge.
    pub fn into_graph(self) -> GraphResult<Graph<T>> {
        let mut builder = GraphBuilder::new();
        builder.nodes(self.nodes);
        for edge in self.edges {
            builder.link(edge.first, edge.second);
        }
        builder.build()
    }
}

impl<T> GraphDocument<T>
where
    T: Ord + Clone + Serialize + DeserializeOwned,
{
    /// Read a document from a JSON file and rebuild the graph.
    pub fn read_from_file(path: &Path) -> GraphResult<Graph<T>> {
        let file = std::fs::File::open(path)?;
        let graph = Self::read_from(std::io::BufReader::new(file))?;
        log::debug!(
            "read {} nodes and {} edges from {}",
            graph.node_count(),
            graph.edge_count(),
            path.display()
        );
        Ok(graph)
    }

    /// Read a document from any reader and rebuild the graph.
    pub fn read_from(reader: impl Read) -> GraphResult<Graph<T>> {
        let document: Self = serde_json::from_reader(reader)?;
        document.into_graph()
    }

    /// Write a graph to a JSON file.
    pub fn write_to_file(graph: &Graph<T>, path: &Path, pretty: bool) -> GraphResult<()> {
        let file = std::fs::File::create(path)?;
        let mut writer = std::io::BufWriter::new(file);
        Self::write_to(graph, &mut writer, pretty)?;
        writer.flush()?;
        Ok(())
    }

    /// Write a graph to any writer.
    pub fn write_to(graph: &Graph<T>, writer: &mut impl Write, pretty: bool) -> GraphResult<()> {
        let document = Self::from(graph);
        if pretty {
            serde_json::to_writer_pretty(&mut *writer, &document)?;
        } else {
            serde_json::to_writer(&mut *writer, &document)?;
        }
        writeln!(writer)?;
        Ok(())
    }
}
