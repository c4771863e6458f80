//! Cucumber step definitions for interface tests.

pub mod layout;
pub mod trace;
pub mod tree;

use std::collections::BTreeMap;

use cucumber::World;
use rbtrace::{NodeId, Position, RedBlackTree, SearchOutcome, Step};

/// Test context shared by every scenario.
#[derive(Debug, Default, World)]
pub struct TreeWorld {
    tree: RedBlackTree,
    steps: Vec<Step>,
    search: Option<SearchOutcome>,
    traversal: Vec<i64>,
    layouts: Vec<BTreeMap<NodeId, Position>>,
}

impl TreeWorld {
    /// Drain anything the engine recorded into the scenario's step list.
    fn collect_steps(&mut self) {
        let drained = self.tree.drain_steps();
        self.steps.extend(drained);
    }
}

/// Parse a comma separated list such as `"30, 20, 10"`.
pub fn parse_values(raw: &str) -> Vec<i64> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse().expect("Scenario value is not an integer"))
        .collect()
}

/// Parse an upper-case tag such as `BLACK` or `ROTATE_RIGHT` into its enum.
pub fn parse_tag<T: serde::de::DeserializeOwned>(raw: &str) -> T {
    serde_json::from_str(&format!("\"{}\"", raw)).expect("Unknown tag in scenario")
}
