//! Acceptance tests for the traced red-black tree using Cucumber.
//!
//! Scenarios describe the observable contract of the engine: fix-up shapes,
//! search outcomes, traversal order, trace contents and layout determinism.
//!
//! ```bash
//! cargo test --test interfaces
//! ```

mod steps;

use cucumber::World;
use steps::TreeWorld;

#[tokio::main]
async fn main() {
    println!("\n=== Running Red-Black Tree Interface Tests ===\n");
    TreeWorld::cucumber()
        .fail_on_skipped()
        .run_and_exit("tests/interfaces/features")
        .await;
}
