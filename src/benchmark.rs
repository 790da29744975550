use std::time::Instant;

use anyhow::{Result, bail, ensure};
use clap::Parser;
use kary_tree::{Tree, heap};
use rand::SeedableRng;
use rand::seq::SliceRandom;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tree-benchmark")]
#[command(about = "A tree traversal performance testing tool")]
struct Args {
    /// Node count. Attaching searches by value, so building is quadratic.
    #[arg(long, default_value = "20000")]
    size: usize,

    #[arg(long, default_value = "2")]
    arity: usize,

    #[arg(long, default_value = "42")]
    seed: u64,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info", env = "KARY_LOG")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level);
    ensure!(args.size > 0, "size must be at least 1");

    match args.arity {
        2 => run::<2>(&args),
        3 => run::<3>(&args),
        4 => run::<4>(&args),
        other => bail!("unsupported arity {other}, expected 2, 3 or 4"),
    }
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_new(format!("kary_tree={level},benchmark={level}"))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn run<const K: usize>(args: &Args) -> Result<()> {
    println!(
        "Running with arity {} and {} node count",
        K, args.size
    );

    let mut rng = rand::rngs::StdRng::seed_from_u64(args.seed);
    let mut values: Vec<usize> = (0..args.size).collect();
    values.shuffle(&mut rng);

    let start = Instant::now();
    let mut tree = Tree::<usize, K>::with_root(values[0]);
    for (i, &value) in values.iter().enumerate().skip(1) {
        // fill level by level, so every parent still has room
        let parent = values[(i - 1) / K];
        ensure!(
            tree.add_sub_node(&parent, value).is_attached(),
            "failed to attach {value} under {parent}"
        );
    }
    let built = Instant::now();
    info!(nodes = tree.len(), "tree built");

    let mut timings = Vec::new();
    let mut time = |name: &'static str, count: usize, started: Instant| {
        timings.push((name, count, Instant::now().saturating_duration_since(started)));
    };

    let t = Instant::now();
    let count = tree.pre_order().count();
    time("pre-order", count, t);
    let t = Instant::now();
    let count = tree.post_order().count();
    time("post-order", count, t);
    let t = Instant::now();
    let count = tree.in_order().count();
    time("in-order", count, t);
    let t = Instant::now();
    let count = tree.bfs().count();
    time("bfs", count, t);
    let t = Instant::now();
    let count = tree.dfs().count();
    time("dfs", count, t);
    let t = Instant::now();
    let count = tree.heap_order().count();
    time("heap snapshot", count, t);

    let heap_start = Instant::now();
    tree.to_heap();
    let reshaped = Instant::now();

    let bfs: Vec<usize> = tree.bfs().map(|node| *node.value()).collect();
    ensure!(heap::is_min_heap(&bfs), "to_heap broke the heap property");
    ensure!(bfs.first() == Some(&0), "heap root is not the minimum");

    println!(
        "Build took {} seconds",
        built.saturating_duration_since(start).as_secs_f32()
    );
    for (name, count, elapsed) in timings {
        println!(
            "{} visited {} nodes in {} seconds",
            name,
            count,
            elapsed.as_secs_f32()
        );
    }
    println!(
        "Heap reshape took {} seconds",
        reshaped.saturating_duration_since(heap_start).as_secs_f32()
    );
    Ok(())
}
