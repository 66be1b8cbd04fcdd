//! Writes graphs in the DOT description language.

use std::fmt::Display;
use std::io::Write;
use std::path::Path;

use crate::graph::Graph;
use crate::types::GraphResult;

/// Writer for undirected DOT files.
///
/// Output is a `graph {` header, one `\ta -- b;` line per edge (each edge
/// once, smaller endpoint first, sorted) and a closing `}`. Nodes without
/// edges are not written; a self-loop is written as `\ta -- a;`.
pub struct DotWriter;

impl DotWriter {
    /// Write a graph to a DOT file, replacing any existing file.
    pub fn write_to_file<T>(graph: &Graph<T>, path: &Path) -> GraphResult<()>
    where
        T: Ord + Clone + Display,
    {
        let file = std::fs::File::create(path)?;
        let mut writer = std::io::BufWriter::new(file);
        Self::write_to(graph, &mut writer)?;
        writer.flush()?;
        log::debug!(
            "wrote {} edges as DOT to {}",
            graph.edges().count(),
            path.display()
        );
        Ok(())
    }

    /// Write a graph to any writer.
    pub fn write_to<T>(graph: &Graph<T>, writer: &mut impl Write) -> GraphResult<()>
    where
        T: Ord + Clone + Display,
    {
        writeln!(writer, "graph {{")?;
        for edge in graph.edges() {
            writeln!(writer, "\t{} -- {};", edge.first, edge.second)?;
        }
        writeln!(writer, "}}")?;
        Ok(())
    }

    /// Render a graph to a DOT string.
    pub fn to_string<T>(graph: &Graph<T>) -> GraphResult<String>
    where
        T: Ord + Clone + Display,
    {
        let mut buf = Vec::new();
        Self::write_to(graph, &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
