//! Replays the canonical scenario: insert 1..=7, print a full scan and a few
//! range queries. Set `SEARCH_TREE_LOG=trace` to see the tree's own logging.

use log::{LevelFilter, error, info};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use search_tree::{SearchTree, TreeCursor};

fn initialize_logging() {
    let level = std::env::var("SEARCH_TREE_LOG")
        .ok()
        .and_then(|level| level.parse().ok())
        .unwrap_or(LevelFilter::Info);
    if let Err(e) = TermLogger::init(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto) {
        eprintln!("logger already installed: {e}");
    }
}

fn main() {
    initialize_logging();

    let mut tree = SearchTree::new();
    tree.insert(0, "zero");
    tree.erase(&0);
    info!("after erase, find(0) exhausted: {}", !tree.find(&0).has_next());

    tree.insert(1, "one");
    tree.insert(1, "not one");
    info!("find(1) = {:?}", tree.find(&1).entry());

    for (key, name) in [(2, "two"), (3, "three"), (4, "four"), (5, "five"), (6, "six"), (7, "seven")] {
        tree.insert(key, name);
    }
    info!("full scan: {tree:?}");

    for (low, high) in [(2, 4), (8, 10), (-10, 4), (4, 10)] {
        let entries: Vec<_> = tree.range(low, high).into_iter().collect();
        info!("range({low}, {high}) = {entries:?}");
    }

    if let Err(e) = tree.validate() {
        error!("tree failed validation: {e}");
        std::process::exit(1);
    }
}
