//! CLI command implementations.

use std::path::Path;

use crate::format::{DotWriter, GraphDocument};
use crate::graph::{breadth_first, depth_first, Graph};
use crate::ops;
use crate::types::GraphResult;

/// Node identities used by the CLI.
pub type CliGraph = Graph<String>;

/// Traversal order for [`cmd_walk`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkOrder {
    /// Breadth-first.
    Breadth,
    /// Depth-first.
    Depth,
}

fn load(path: &Path) -> GraphResult<CliGraph> {
    GraphDocument::read_from_file(path)
}

/// Display order, size and structural predicates of a graph.
pub fn cmd_info(path: &Path, json: bool) -> GraphResult<()> {
    let graph = load(path)?;

    if json {
        let info = serde_json::json!({
            "file": path.display().to_string(),
            "order": ops::order(&graph),
            "size": ops::size(&graph),
            "complete": ops::is_complete(&graph),
            "empty": ops::is_empty(&graph),
            "null": ops::is_null(&graph),
            "trivial": ops::is_trivial(&graph),
        });
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!("File: {}", path.display());
        println!("Order: {}", ops::order(&graph));
        println!("Size: {}", ops::size(&graph));
        println!("Complete: {}", ops::is_complete(&graph));
        println!("Empty: {}", ops::is_empty(&graph));
        println!("Null: {}", ops::is_null(&graph));
        println!("Trivial: {}", ops::is_trivial(&graph));
    }
    Ok(())
}

/// Print the adjacency listing of a graph.
pub fn cmd_show(path: &Path) -> GraphResult<()> {
    let graph = load(path)?;
    print!("{}", graph);
    Ok(())
}

/// Print the nodes reachable from `start`, in visitation order.
pub fn cmd_walk(path: &Path, start: &str, order: WalkOrder, json: bool) -> GraphResult<()> {
    let graph = load(path)?;
    let start = start.to_string();
    let visited = match order {
        WalkOrder::Breadth => breadth_first(&graph, &start)?,
        WalkOrder::Depth => depth_first(&graph, &start)?,
    };

    if json {
        println!("{}", serde_json::to_string(&visited)?);
    } else {
        for node in &visited {
            println!("{}", node);
        }
    }
    Ok(())
}

fn emit(graph: &CliGraph, out: Option<&Path>, pretty: bool) -> GraphResult<()> {
    match out {
        Some(out) => {
            GraphDocument::write_to_file(graph, out, pretty)?;
            println!(
                "Wrote {} nodes and {} edges to {}",
                graph.node_count(),
                graph.edge_count(),
                out.display()
            );
        }
        None => {
            let stdout = std::io::stdout();
            GraphDocument::write_to(graph, &mut stdout.lock(), pretty)?;
        }
    }
    Ok(())
}

/// Union of two graphs, printed or written as a document.
pub fn cmd_union(left: &Path, right: &Path, out: Option<&Path>, pretty: bool) -> GraphResult<()> {
    let result = ops::union(&load(left)?, &load(right)?);
    emit(&result, out, pretty)
}

/// Difference of two graphs, printed or written as a document.
pub fn cmd_difference(
    left: &Path,
    right: &Path,
    out: Option<&Path>,
    pretty: bool,
) -> GraphResult<()> {
    let result = ops::difference(&load(left)?, &load(right)?);
    emit(&result, out, pretty)
}

/// Report how `sub` relates to `graph` under the subgraph order.
pub fn cmd_compare(graph: &Path, sub: &Path, json: bool) -> GraphResult<()> {
    let g = load(graph)?;
    let s = load(sub)?;

    let subgraph = ops::is_subgraph(&g, &s);
    let proper = ops::is_proper_subgraph(&g, &s);
    let improper = ops::is_improper_subgraph(&g, &s);
    let spanning = ops::is_spanning_subgraph(&g, &s);

    if json {
        println!(
            "{}",
            serde_json::json!({
                "subgraph": subgraph,
                "proper": proper,
                "improper": improper,
                "spanning": spanning,
            })
        );
    } else {
        println!("Subgraph: {}", subgraph);
        println!("Proper subgraph: {}", proper);
        println!("Improper subgraph: {}", improper);
        println!("Spanning subgraph: {}", spanning);
    }
    Ok(())
}

/// Export a graph as DOT.
pub fn cmd_dot(path: &Path, out: &Path) -> GraphResult<()> {
    let graph = load(path)?;
    DotWriter::write_to_file(&graph, out)?;
    println!("Exported {} edges to {}", graph.edges().count(), out.display());
    Ok(())
}

/// Whether two nodes are adjacent. Absent nodes are never adjacent.
pub fn cmd_adjacent(path: &Path, a: &str, b: &str, json: bool) -> GraphResult<()> {
    let graph = load(path)?;
    let adjacent = ops::are_adjacent_nodes(&graph, &a.to_string(), &b.to_string());

    if json {
        println!("{}", serde_json::json!({"a": a, "b": b, "adjacent": adjacent}));
    } else {
        println!("{}", adjacent);
    }
    Ok(())
}
