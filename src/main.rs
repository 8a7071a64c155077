//! Demo driver: seeds a tree from random input, prints and traverses it,
//! skews it with point inserts past the seeded range, then repairs it with
//! an explicit rebalance.

use balanced_bst::tree::{Node, Tree};
use clap::Parser;
use rand::Rng;
use tracing::info;

#[derive(Parser)]
#[command(name = "balanced-bst")]
#[command(about = "Balanced BST demo driver", long_about = None)]
struct Cli {
    /// Number of random keys to seed the tree with
    #[arg(short, long, default_value = "15")]
    count: usize,

    /// Seed keys are drawn from 0..max
    #[arg(short, long, default_value = "100")]
    max: i32,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn keys<'a>(iter: impl Iterator<Item = &'a Node<i32>>) -> Vec<i32> {
    iter.map(|n| *n.key()).collect()
}

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(log_level).init();

    let mut rng = rand::thread_rng();
    let seed: Vec<i32> = (0..cli.count).map(|_| rng.gen_range(0..cli.max)).collect();
    info!(?seed, "seeding tree");

    let mut tree: Tree<i32> = seed.into_iter().collect();
    print!("{}", tree.pretty());
    println!("balanced: {}", tree.is_balanced());

    println!("level order: {:?}", keys(tree.level_order()));
    println!("in order:    {:?}", keys(tree.in_order()));
    println!("pre order:   {:?}", keys(tree.pre_order()));
    println!("post order:  {:?}", keys(tree.post_order()));

    // An ascending run past the seeded range piles up on the rightmost
    // path.
    for offset in 0..6 {
        tree.insert(cli.max + 1 + offset * 7);
    }
    println!("balanced after skewed inserts: {}", tree.is_balanced());

    tree.rebalance();
    println!("balanced after rebalance: {}", tree.is_balanced());
    print!("{}", tree.pretty());
    println!("in order:    {:?}", keys(tree.in_order()));
}
