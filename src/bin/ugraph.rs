//! CLI entry point for the `ugraph` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use undirected_graph::cli::{commands, WalkOrder};
use undirected_graph::GraphError;

#[derive(Parser)]
#[command(
    name = "ugraph",
    about = "ugraph — inspect, combine and export undirected graphs stored as JSON documents"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display order, size and structural predicates of a graph
    Info {
        /// Path to the graph document
        file: PathBuf,
    },
    /// Print each node with its neighbors
    Show {
        /// Path to the graph document
        file: PathBuf,
    },
    /// Breadth-first walk from a start node
    Bfs {
        /// Path to the graph document
        file: PathBuf,
        /// Start node
        start: String,
    },
    /// Depth-first walk from a start node
    Dfs {
        /// Path to the graph document
        file: PathBuf,
        /// Start node
        start: String,
    },
    /// Union of two graphs
    Union {
        /// Left graph document
        left: PathBuf,
        /// Right graph document
        right: PathBuf,
        /// Write the result here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
        /// Pretty-print JSON
        #[arg(long)]
        pretty: bool,
    },
    /// Remove the edges of the right graph from the left graph
    Difference {
        /// Left graph document
        left: PathBuf,
        /// Right graph document
        right: PathBuf,
        /// Write the result here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
        /// Pretty-print JSON
        #[arg(long)]
        pretty: bool,
    },
    /// Report subgraph relations of SUB with respect to GRAPH
    Compare {
        /// Containing graph document
        graph: PathBuf,
        /// Candidate subgraph document
        sub: PathBuf,
    },
    /// Export a graph as DOT
    Dot {
        /// Path to the graph document
        file: PathBuf,
        /// Path of the DOT file to write
        out: PathBuf,
    },
    /// Check whether two nodes are adjacent
    Adjacent {
        /// Path to the graph document
        file: PathBuf,
        /// First node
        a: String,
        /// Second node
        b: String,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new().filter_level(level).init();

    let result = match cli.command {
        Commands::Info { file } => commands::cmd_info(&file, json),
        Commands::Show { file } => commands::cmd_show(&file),
        Commands::Bfs { file, start } => commands::cmd_walk(&file, &start, WalkOrder::Breadth, json),
        Commands::Dfs { file, start } => commands::cmd_walk(&file, &start, WalkOrder::Depth, json),
        Commands::Union {
            left,
            right,
            out,
            pretty,
        } => commands::cmd_union(&left, &right, out.as_deref(), pretty),
        Commands::Difference {
            left,
            right,
            out,
            pretty,
        } => commands::cmd_difference(&left, &right, out.as_deref(), pretty),
        Commands::Compare { graph, sub } => commands::cmd_compare(&graph, &sub, json),
        Commands::Dot { file, out } => commands::cmd_dot(&file, &out),
        Commands::Adjacent { file, a, b } => commands::cmd_adjacent(&file, &a, &b, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::Json(_) => 2,
            _ => 4,
        };
        process::exit(code);
    }
}
