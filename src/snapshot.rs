//! Snapshot codec.
//!
//! A snapshot is a structural copy of a tree: id, value and color of every
//! node plus its left/right subtrees. Parent links are never written; they are
//! rebuilt on restore by passing each new node down as the parent of its
//! children. The blob form is JSON, with an empty tree encoded as `null`.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::SnapshotError;
use crate::node::{Color, Node, NodeId, NodeRef, Slot};
use crate::tree::RedBlackTree;

/// Serialized form of one subtree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeSnapshot {
    pub id: NodeId,
    pub value: i64,
    pub color: Color,
    pub left: Option<Box<NodeSnapshot>>,
    pub right: Option<Box<NodeSnapshot>>,
}

impl NodeSnapshot {
    /// Number of nodes in this subtree.
    pub fn node_count(&self) -> usize {
        1 + self.left.as_ref().map_or(0, |n| n.node_count())
            + self.right.as_ref().map_or(0, |n| n.node_count())
    }
}

/// Capture the subtree rooted at `root`.
pub fn serialize(root: Option<NodeRef<'_>>) -> Option<NodeSnapshot> {
    root.map(|node| NodeSnapshot {
        id: node.id(),
        value: node.value(),
        color: node.color(),
        left: serialize(node.left()).map(Box::new),
        right: serialize(node.right()).map(Box::new),
    })
}

/// Encode the whole tree as a snapshot blob.
pub fn encode(tree: &RedBlackTree) -> String {
    let snapshot = serialize(tree.root());
    serde_json::to_string(&snapshot).unwrap_or_else(|e| {
        warn!(error = %e, "failed to encode snapshot");
        "null".to_string()
    })
}

/// Parse and validate a snapshot blob.
///
/// Every id must be unique and no larger than [`NodeId::MAX`].
pub fn decode(blob: &str) -> Result<Option<NodeSnapshot>, SnapshotError> {
    let snapshot: Option<NodeSnapshot> = serde_json::from_str(blob)?;
    if let Some(root) = &snapshot {
        check_ids(root, &mut HashSet::new())?;
    }
    Ok(snapshot)
}

fn check_ids(node: &NodeSnapshot, seen: &mut HashSet<NodeId>) -> Result<(), SnapshotError> {
    if node.id > NodeId::MAX {
        return Err(SnapshotError::IdOverflow(node.id));
    }
    if !seen.insert(node.id) {
        return Err(SnapshotError::DuplicateId(node.id));
    }
    for child in [&node.left, &node.right].into_iter().flatten() {
        check_ids(child, seen)?;
    }
    Ok(())
}

/// Rebuild an independent tree from a snapshot.
///
/// The restored tree shares nothing with the tree the snapshot came from. Its
/// trace is empty and its id counter continues after the largest restored id.
pub fn restore(snapshot: Option<&NodeSnapshot>) -> Result<RedBlackTree, SnapshotError> {
    if let Some(root) = snapshot {
        check_ids(root, &mut HashSet::new())?;
    }
    Ok(build(snapshot))
}

/// Decode a blob and restore it in one step.
pub fn restore_blob(blob: &str) -> Result<RedBlackTree, SnapshotError> {
    let snapshot = decode(blob)?;
    Ok(build(snapshot.as_ref()))
}

/// Assemble a tree from an already validated snapshot.
fn build(snapshot: Option<&NodeSnapshot>) -> RedBlackTree {
    let mut nodes = Vec::with_capacity(snapshot.map_or(0, NodeSnapshot::node_count));
    if let Some(root) = snapshot {
        attach(root, None, &mut nodes);
    }
    let root = (!nodes.is_empty()).then_some(0);
    let next_id = nodes
        .iter()
        .map(|n| n.id.0)
        .max()
        .map_or(1, |max| max.saturating_add(1));
    debug!(nodes = nodes.len(), next_id, "restored snapshot");
    RedBlackTree::from_parts(nodes, root, next_id)
}

fn attach(snapshot: &NodeSnapshot, parent: Option<Slot>, nodes: &mut Vec<Node>) -> Slot {
    let slot = nodes.len();
    let mut node = Node::new(snapshot.id, snapshot.value, parent);
    node.color = snapshot.color;
    nodes.push(node);

    let left = snapshot.left.as_deref().map(|child| attach(child, Some(slot), nodes));
    let right = snapshot.right.as_deref().map(|child| attach(child, Some(slot), nodes));
    nodes[slot].left = left;
    nodes[slot].right = right;
    slot
}
