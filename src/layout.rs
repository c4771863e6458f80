//! Node placement for 2-D rendering.
//!
//! Horizontal placement comes from a node's in-order rank, vertical placement
//! from its depth. Nodes on the same level therefore never overlap, but the
//! layout is as wide as the tree has nodes; it is simple and deterministic,
//! not compact.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::node::{NodeId, NodeRef};

/// Spacing and canvas geometry.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Distance between horizontally adjacent in-order ranks.
    pub horizontal_spacing: f64,
    /// Distance between depth levels.
    pub level_height: f64,
    /// Nominal canvas width the tree is centered in.
    pub canvas_width: f64,
    /// Vertical offset of the root level.
    pub base_offset: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            horizontal_spacing: 80.0,
            level_height: 100.0,
            canvas_width: 1200.0,
            base_offset: 50.0,
        }
    }
}

/// Where to draw one node.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub level: usize,
}

/// Compute a position for every node under `root`, keyed by node id.
///
/// Pure: the same tree always yields the same map.
pub fn positions(root: Option<NodeRef<'_>>, config: &LayoutConfig) -> BTreeMap<NodeId, Position> {
    let mut out = BTreeMap::new();
    let Some(root) = root else {
        return out;
    };

    let mut ranks = BTreeMap::new();
    rank_inorder(Some(root), &mut ranks);

    let tree_width = ranks.len().saturating_sub(1) as f64 * config.horizontal_spacing;
    let center_offset = (config.canvas_width - tree_width) / 2.0;
    place(Some(root), 0, &ranks, center_offset, config, &mut out);

    trace!(nodes = out.len(), center_offset, "computed layout");
    out
}

fn rank_inorder(node: Option<NodeRef<'_>>, ranks: &mut BTreeMap<NodeId, usize>) {
    let Some(node) = node else { return };
    rank_inorder(node.left(), ranks);
    let rank = ranks.len();
    ranks.insert(node.id(), rank);
    rank_inorder(node.right(), ranks);
}

fn place(
    node: Option<NodeRef<'_>>,
    level: usize,
    ranks: &BTreeMap<NodeId, usize>,
    center_offset: f64,
    config: &LayoutConfig,
    out: &mut BTreeMap<NodeId, Position>,
) {
    let Some(node) = node else { return };
    let rank = ranks.get(&node.id()).copied().unwrap_or_default();
    out.insert(
        node.id(),
        Position {
            x: rank as f64 * config.horizontal_spacing + center_offset,
            y: level as f64 * config.level_height + config.base_offset,
            level,
        },
    );
    place(node.left(), level + 1, ranks, center_offset, config, out);
    place(node.right(), level + 1, ranks, center_offset, config, out);
}
