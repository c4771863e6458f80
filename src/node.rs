//! Tree vertices.
//!
//! Nodes live in an arena owned by [`RedBlackTree`](crate::tree::RedBlackTree)
//! and link to each other by slot index. Children are owned by exactly one
//! parent slot; the parent link is a plain back-reference that mirrors it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Index of a node inside its tree's arena.
pub(crate) type Slot = usize;

/// Red-black node color.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Color {
    Red,
    Black,
}

impl Color {
    /// Single-letter tag used by the text rendering.
    pub fn tag(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Black => 'B',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => f.write_str("red"),
            Color::Black => f.write_str("black"),
        }
    }
}

/// Stable node identity.
///
/// Minted once per node by the owning tree and preserved across snapshot
/// round-trips, so it is safe to key positions and trace references by it.
#[repr(transparent)]
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct NodeId(pub u64);

impl NodeId {
    /// Largest id a tree mints or accepts from a snapshot. Ids stay within
    /// `i64` so the flat integer form of a step reference is exact.
    pub const MAX: NodeId = NodeId(i64::MAX as u64);
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Arena slot for one vertex.
#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) id: NodeId,
    pub(crate) value: i64,
    pub(crate) color: Color,
    pub(crate) left: Option<Slot>,
    pub(crate) right: Option<Slot>,
    pub(crate) parent: Option<Slot>,
}

impl Node {
    /// New detached node. Nodes start red; fix-up decides their final color.
    pub(crate) fn new(id: NodeId, value: i64, parent: Option<Slot>) -> Self {
        Self {
            id,
            value,
            color: Color::Red,
            left: None,
            right: None,
            parent,
        }
    }

    pub(crate) fn is_red(&self) -> bool {
        self.color == Color::Red
    }
}

/// Read-only handle to a node of a tree.
///
/// Borrowing the arena keeps the view consistent with the tree it came from;
/// it cannot outlive or observe a later mutation.
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    nodes: &'a [Node],
    slot: Slot,
}

impl<'a> NodeRef<'a> {
    pub(crate) fn new(nodes: &'a [Node], slot: Slot) -> Self {
        Self { nodes, slot }
    }

    fn node(&self) -> &'a Node {
        &self.nodes[self.slot]
    }

    fn at(&self, slot: Option<Slot>) -> Option<NodeRef<'a>> {
        slot.map(|slot| NodeRef::new(self.nodes, slot))
    }

    pub fn id(&self) -> NodeId {
        self.node().id
    }

    pub fn value(&self) -> i64 {
        self.node().value
    }

    pub fn color(&self) -> Color {
        self.node().color
    }

    pub fn left(&self) -> Option<NodeRef<'a>> {
        self.at(self.node().left)
    }

    pub fn right(&self) -> Option<NodeRef<'a>> {
        self.at(self.node().right)
    }

    pub fn parent(&self) -> Option<NodeRef<'a>> {
        self.at(self.node().parent)
    }

    pub fn is_red(&self) -> bool {
        self.node().is_red()
    }

    pub fn is_black(&self) -> bool {
        !self.is_red()
    }
}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id())
            .field("value", &self.value())
            .field("color", &self.color())
            .finish()
    }
}

impl fmt::Display for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.color().tag(), self.value())
    }
}
