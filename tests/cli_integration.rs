//! CLI integration: run the `ugraph` binary against JSON documents.

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

use undirected_graph::format::GraphDocument;
use undirected_graph::graph::{Graph, GraphBuilder};

// ==================== CLI Helpers ====================

/// Run the `ugraph` CLI with the given arguments and return the output.
fn run_ugraph(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ugraph"))
        .args(args)
        .output()
        .expect("Failed to run ugraph")
}

/// Helper: assert that the CLI ran successfully (exit code 0).
fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "ugraph failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn write_graph(dir: &Path, name: &str, graph: &Graph<String>) -> String {
    let path = dir.join(name);
    GraphDocument::write_to_file(graph, &path, false).unwrap();
    path.to_string_lossy().into_owned()
}

fn named(nodes: &[&str]) -> Vec<String> {
    nodes.iter().map(|n| n.to_string()).collect()
}

fn four_cycle() -> Graph<String> {
    let nodes = named(&["A", "B", "C", "D"]);
    GraphBuilder::new()
        .nodes(nodes.clone())
        .cycle(&nodes)
        .build()
        .unwrap()
}

fn diagonals() -> Graph<String> {
    GraphBuilder::new()
        .nodes(named(&["A", "B", "C", "D"]))
        .link("A".into(), "C".into())
        .link("B".into(), "D".into())
        .build()
        .unwrap()
}

// ==================== Command Tests ====================

#[test]
fn test_cli_info() {
    let dir = TempDir::new().unwrap();
    let file = write_graph(dir.path(), "cycle.json", &four_cycle());

    let output = run_ugraph(&["info", &file]);
    assert_success(&output);
    let text = stdout(&output);
    assert!(text.contains("Order: 4"));
    assert!(text.contains("Size: 4"));
    assert!(text.contains("Complete: false"));

    let output = run_ugraph(&["--format", "json", "info", &file]);
    assert_success(&output);
    let info: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(info["order"], 4);
    assert_eq!(info["size"], 4);
    assert_eq!(info["empty"], false);
}

#[test]
fn test_cli_walks() {
    let dir = TempDir::new().unwrap();
    let file = write_graph(dir.path(), "cycle.json", &four_cycle());

    let output = run_ugraph(&["bfs", &file, "A"]);
    assert_success(&output);
    assert_eq!(stdout(&output), "A\nB\nD\nC\n");

    let output = run_ugraph(&["--format", "json", "dfs", &file, "A"]);
    assert_success(&output);
    let order: Vec<String> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(order, named(&["A", "D", "C", "B"]));
}

#[test]
fn test_cli_missing_start_node_exit_code() {
    let dir = TempDir::new().unwrap();
    let file = write_graph(dir.path(), "cycle.json", &four_cycle());

    let output = run_ugraph(&["bfs", &file, "Z"]);
    assert_eq!(output.status.code(), Some(4));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Node not found"));
}

#[test]
fn test_cli_missing_file_exit_code() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.json");
    let output = run_ugraph(&["info", &missing.to_string_lossy()]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_cli_union_and_difference() {
    let dir = TempDir::new().unwrap();
    let cycle = write_graph(dir.path(), "cycle.json", &four_cycle());
    let diag = write_graph(dir.path(), "diag.json", &diagonals());
    let k4_path = dir.path().join("k4.json");
    let k4 = k4_path.to_string_lossy().into_owned();

    let output = run_ugraph(&["union", &cycle, &diag, "--out", &k4]);
    assert_success(&output);
    let merged: Graph<String> = GraphDocument::read_from_file(&k4_path).unwrap();
    assert_eq!(merged.edge_count(), 6);

    let output = run_ugraph(&["difference", &k4, &diag]);
    assert_success(&output);
    let restored: Graph<String> = GraphDocument::read_from(output.stdout.as_slice()).unwrap();
    assert_eq!(restored, four_cycle());
}

#[test]
fn test_cli_compare_and_adjacent() {
    let dir = TempDir::new().unwrap();
    let k4 = write_graph(dir.path(), "k4.json", &(four_cycle() + diagonals()));
    let cycle = write_graph(dir.path(), "cycle.json", &four_cycle());

    let output = run_ugraph(&["--format", "json", "compare", &k4, &cycle]);
    assert_success(&output);
    let relations: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(relations["subgraph"], true);
    assert_eq!(relations["proper"], true);
    assert_eq!(relations["improper"], false);
    assert_eq!(relations["spanning"], true);

    let output = run_ugraph(&["adjacent", &cycle, "A", "C"]);
    assert_success(&output);
    assert_eq!(stdout(&output).trim(), "false");
}

#[test]
fn test_cli_dot_and_show() {
    let dir = TempDir::new().unwrap();
    let file = write_graph(dir.path(), "cycle.json", &four_cycle());
    let dot_path = dir.path().join("cycle.dot");

    let output = run_ugraph(&["dot", &file, &dot_path.to_string_lossy()]);
    assert_success(&output);
    let dot = std::fs::read_to_string(&dot_path).unwrap();
    assert!(dot.contains("\tA -- B;"));

    let output = run_ugraph(&["show", &file]);
    assert_success(&output);
    assert!(stdout(&output).starts_with("Node A is connected to:\n\t- Node B\n\t- Node D\n"));
}
