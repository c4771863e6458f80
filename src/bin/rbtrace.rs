//! rbtrace: trace printer
//!
//! Builds a red-black tree from the given values, optionally runs a search
//! and a traversal, then replays the recorded trace to stdout one step per
//! interval and prints the final tree.
//!
//! ## Architecture
//! ```text
//! [args] --> [RedBlackTree] --(drained steps)--> [Playback] --> stdout
//! ```
//!
//! ## Usage
//! ```text
//! rbtrace [--config PATH] [--search V] [--traverse in|pre|post] [--skip] V1 V2 ...
//! ```
//!
//! ## Configuration
//! - playback.step_interval_ms: delay between printed steps (default: 500)
//! - layout.*: geometry used for the printed node positions
//!
//! Ctrl-C cancels playback; the tree itself is already complete.

use clap::Parser;
use tracing::{info, warn};

use rbtrace::config::Config;
use rbtrace::utils::bootstrap::init_tracing;
use rbtrace::{Frame, Playback, RedBlackTree, TraversalOrder};

/// Replay the trace of red-black tree insertions.
#[derive(Debug, Parser)]
#[command(name = "rbtrace", about = "Red-black tree trace printer", version)]
struct Args {
    /// YAML config file. A file named by RBTRACE_CONFIG is layered on top.
    #[arg(long)]
    config: Option<String>,

    /// Value to search for after inserting.
    #[arg(long, allow_negative_numbers = true)]
    search: Option<i64>,

    /// Traversal to run after inserting: in, pre or post.
    #[arg(long)]
    traverse: Option<TraversalOrder>,

    /// Print only the final frame instead of pacing every step.
    #[arg(long)]
    skip: bool,

    /// Values to insert, in order.
    #[arg(allow_negative_numbers = true)]
    values: Vec<i64>,
}

fn print_frame(index: usize, frame: &Frame) {
    println!("{:>4}  {}", index, frame.step);
    for (id, pos) in &frame.positions {
        let marker = if frame.highlighted.contains(id) { '*' } else { ' ' };
        println!("      {marker}{id} at ({:.0}, {:.0}) level {}", pos.x, pos.y, pos.level);
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let args = Args::parse();
    let config = Config::load(args.config.as_deref())?;

    let mut tree = RedBlackTree::new();
    for &value in &args.values {
        tree.insert(value);
    }
    if let Some(value) = args.search {
        let outcome = tree.search_outcome(value);
        if outcome.is_found() {
            info!(value, "search hit");
        } else {
            warn!(value, error = %outcome.error, "search failed");
        }
    }
    if let Some(order) = args.traverse {
        let values = tree.traverse(order);
        info!(%order, ?values, "traversal");
    }

    let mut playback = Playback::new(tree.drain_steps(), config.layout.clone());
    info!(
        steps = playback.remaining(),
        interval_ms = config.playback.step_interval_ms,
        "rbtrace playback started"
    );

    if args.skip {
        if let Some(frame) = playback.skip_to_end() {
            print_frame(playback.shown(), &frame?);
        }
    } else {
        let mut ticker = tokio::time::interval(config.playback.step_interval());
        let ctrl_c = tokio::signal::ctrl_c();
        tokio::pin!(ctrl_c);
        loop {
            tokio::select! {
                _ = &mut ctrl_c => {
                    let dropped = playback.cancel();
                    warn!(dropped, "playback cancelled");
                    break;
                }
                _ = ticker.tick() => {
                    let Some(frame) = playback.next_frame() else {
                        break;
                    };
                    print_frame(playback.shown(), &frame?);
                }
            }
        }
    }

    println!("{}", tree);
    Ok(())
}
