//! Command-line front end: load a graph from one of the four text
//! encodings and print a representation, a traversal, or a metric.
//!
//! The input's leading token selects its encoding, so no format flag is
//! needed.  The output sink defaults to stdout; `--output` opens a file
//! for this one operation only.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use graphforms::io::{read, write};
use graphforms::tracing_support::init_tracing;
use graphforms::{Graph, GraphError, TraversalKind};

/// Load a graph and print a representation, traversal, or metric.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input file path (use '-' to read from stdin)
    input: String,

    /// What to print
    #[arg(long, value_enum, default_value = "matrix")]
    op: Operation,

    /// Traversal algorithm used by `--op traverse`
    #[arg(long, value_enum, default_value = "bfs")]
    traversal: Algorithm,

    /// Write the result to this file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Operation {
    /// Adjacency matrix
    Matrix,
    /// Adjacency list
    List,
    /// Edge list
    Edges,
    /// Incidence matrix
    Incidence,
    /// Whole-graph traversal, one group per component
    Traverse,
    /// Per-vertex degrees
    Degrees,
    /// Edge/arc count
    Size,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Algorithm {
    DfsRecursive,
    DfsIterative,
    Bfs,
}

impl From<Algorithm> for TraversalKind {
    fn from(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::DfsRecursive => TraversalKind::DfsRecursive,
            Algorithm::DfsIterative => TraversalKind::DfsIterative,
            Algorithm::Bfs => TraversalKind::Bfs,
        }
    }
}

fn main() {
    init_tracing();
    let args = Args::parse();
    let graph = load_or_exit(&args.input);
    if let Err(err) = run(&args, &graph) {
        eprintln!("{err}");
        process::exit(1);
    }
}

fn load_or_exit(input: &str) -> Graph {
    let result = match input {
        "-" => read::read_graph(io::stdin().lock()),
        path => read::read_graph_file(path),
    };
    match result {
        Ok(graph) => graph,
        Err(err) => {
            eprintln!("failed to load graph: {err}");
            process::exit(1);
        }
    }
}

fn run(args: &Args, graph: &Graph) -> Result<(), GraphError> {
    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout().lock()),
    };
    match args.op {
        Operation::Matrix => write::write_adjacency_matrix(graph, &mut out)?,
        Operation::List => write::write_adjacency_list(graph, &mut out)?,
        Operation::Edges => write::write_edge_list(graph, &mut out)?,
        Operation::Incidence => write::write_incidence_matrix(graph, &mut out)?,
        Operation::Traverse => write::write_traversal(graph, args.traversal.into(), &mut out)?,
        Operation::Degrees => write::write_degrees(graph, &mut out)?,
        Operation::Size => write::write_edge_count(graph, &mut out)?,
    }
    out.flush()?;
    Ok(())
}
