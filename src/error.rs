//! Error types.

use serde::Serialize;

use crate::node::NodeId;

/// Failure outcomes of a search. Both are normal query results; the tree
/// stays usable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("Tree is empty")]
    Empty,

    #[error("Value not found")]
    NotFound,
}

/// Search result in the flat `{value, error}` shape presentation layers use.
///
/// `error` is empty on success; `value` is 0 on failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchOutcome {
    pub value: i64,
    pub error: String,
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        self.error.is_empty()
    }
}

impl From<Result<i64, SearchError>> for SearchOutcome {
    fn from(result: Result<i64, SearchError>) -> Self {
        match result {
            Ok(value) => Self {
                value,
                error: String::new(),
            },
            Err(e) => Self {
                value: 0,
                error: e.to_string(),
            },
        }
    }
}

/// A snapshot blob could not be turned back into a tree.
///
/// Indicates a data-integrity problem rather than a query outcome.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("Malformed snapshot: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Snapshot contains node id {0} more than once")]
    DuplicateId(NodeId),

    #[error("Snapshot node id {0} exceeds the largest id {max}", max = NodeId::MAX)]
    IdOverflow(NodeId),
}

/// A broken structural property found by
/// [`RedBlackTree::check_invariants`](crate::tree::RedBlackTree::check_invariants).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvariantViolation {
    #[error("Root {0} is red")]
    RedRoot(NodeId),

    #[error("Red node {child} has red parent {parent}")]
    RedRedEdge { parent: NodeId, child: NodeId },

    #[error("Black-height mismatch under {node}: left {left}, right {right}")]
    BlackHeight {
        node: NodeId,
        left: usize,
        right: usize,
    },

    #[error("Node {node} with value {value} breaks search order")]
    Order { node: NodeId, value: i64 },

    #[error("Node {0} has a parent link that does not match its owner")]
    ParentLink(NodeId),
}
