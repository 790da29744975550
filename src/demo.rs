//! Builds a small tree of floats, prints it in every traversal order and then
//! as an indented outline.
//!
//! ```bash
//! # the default binary tree
//! demo
//!
//! # a three-ary tree with custom edges, reshaped into a heap at the end
//! demo --arity 3 --root 5 --edge 5:4 --edge 5:3 --edge 5:2 --edge 4:1 --to-heap
//! ```

use anyhow::{Result, bail};
use clap::Parser;
use kary_tree::{Cursor, Edge, Tree};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "demo", version, about = "Walks a K-ary tree in every supported order")]
struct Args {
    /// Maximum children per node (2 or 3)
    #[arg(short = 'k', long, default_value_t = 2, env = "KARY_ARITY")]
    arity: usize,

    /// Root value
    #[arg(long, default_value_t = 1.1)]
    root: f64,

    /// Child to attach, as `parent:child`. Repeatable; applied in order.
    #[arg(short, long = "edge", value_name = "PARENT:CHILD")]
    edges: Vec<Edge<f64>>,

    /// Reshape the tree into a binary min-heap and print it again
    #[arg(long)]
    to_heap: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info", env = "KARY_LOG")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level);

    match args.arity {
        2 => run::<2>(&args),
        3 => run::<3>(&args),
        other => bail!("unsupported arity {other}, expected 2 or 3"),
    }
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_new(format!("kary_tree={level},demo={level}"))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn default_edges(arity: usize) -> Vec<Edge<f64>> {
    let pairs: &[(f64, f64)] = if arity == 3 {
        &[(1.1, 1.2), (1.1, 1.3), (1.1, 1.4), (1.2, 1.5), (1.3, 1.6)]
    } else {
        &[(1.1, 1.2), (1.1, 1.3), (1.2, 1.4), (1.2, 1.5), (1.3, 1.6)]
    };
    pairs
        .iter()
        .map(|&(parent, child)| Edge { parent, child })
        .collect()
}

fn run<const K: usize>(args: &Args) -> Result<()> {
    let edges = if args.edges.is_empty() {
        default_edges(K)
    } else {
        args.edges.clone()
    };
    let requested = edges.len();

    let mut tree = Tree::<f64, K>::with_root(args.root);
    let attached = tree.attach_edges(edges);
    if attached < requested {
        warn!(requested, attached, "some edges were not attached");
    }
    info!(arity = K, nodes = tree.len(), "tree built");

    print_walks(&tree);
    println!("Tree structure:");
    print!("{tree}");

    if args.to_heap {
        tree.to_heap();
        println!("After heap reshape:");
        print!("{tree}");
    }
    Ok(())
}

fn print_walks<const K: usize>(tree: &Tree<f64, K>) {
    print_cursor("Pre-order", tree.begin_pre_order(), tree.end_pre_order());
    print_cursor("Post-order", tree.begin_post_order(), tree.end_post_order());
    print_cursor("In-order", tree.begin_in_order(), tree.end_in_order());
    print_cursor("BFS", tree.begin_bfs(), tree.end_bfs());
    print_cursor("DFS", tree.begin_dfs(), tree.end_dfs());
    print_cursor("Heap", tree.begin_heap(), tree.end_heap());
}

fn print_cursor<'a, C>(name: &str, mut cursor: C, end: C)
where
    C: Cursor<'a, f64> + PartialEq,
{
    println!("{name}:");
    while cursor != end {
        if let Some(node) = cursor.current() {
            println!("{}", node.value());
        }
        cursor.advance();
    }
}
