//! Red-black tree engine.
//!
//! Insertion follows the classic parent/uncle case analysis: a red uncle is
//! resolved by recoloring and moving two levels up, a black uncle by at most
//! two rotations. Every comparison, insertion, rotation and recoloring is
//! recorded as a [`Step`] carrying a snapshot of the tree at that instant.
//!
//! Duplicate values are accepted. Descent goes right only when the new value
//! is strictly greater, so an equal value lands in the left subtree; later
//! rotations may move it to either side, which keeps the in-order sequence
//! non-decreasing.

mod render;
mod rotate;
mod traverse;
mod validate;

use std::collections::BTreeSet;

use tracing::{debug, trace};

use crate::error::{SearchError, SearchOutcome};
use crate::node::{Color, Node, NodeId, NodeRef, Slot};
use crate::snapshot;
use crate::step::{Step, StepKind, StepTarget, TraceBuffer};

pub use traverse::TraversalOrder;

/// Red-black tree over `i64` values with a recorded step trace.
///
/// Single-writer: every operation runs to completion and leaves invariants
/// restored before it returns.
#[derive(Debug)]
pub struct RedBlackTree {
    nodes: Vec<Node>,
    root: Option<Slot>,
    trace: TraceBuffer,
    next_id: u64,
}

impl Default for RedBlackTree {
    fn default() -> Self {
        Self::new()
    }
}

impl RedBlackTree {
    /// Create a new empty tree. Node ids start at 1.
    pub fn new() -> Self {
        Self::from_parts(Vec::new(), None, 1)
    }

    pub(crate) fn from_parts(nodes: Vec<Node>, root: Option<Slot>, next_id: u64) -> Self {
        Self {
            nodes,
            root,
            trace: TraceBuffer::new(),
            next_id,
        }
    }

    /// Rebuild a tree from a snapshot blob taken from a [`Step`].
    pub fn restore_from_snapshot(blob: &str) -> Result<Self, crate::error::SnapshotError> {
        snapshot::restore_blob(blob)
    }

    pub fn root(&self) -> Option<NodeRef<'_>> {
        self.root.map(|slot| NodeRef::new(&self.nodes, slot))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Steps recorded since the last drain.
    pub fn trace(&self) -> &TraceBuffer {
        &self.trace
    }

    /// Hand over every recorded step and reset the buffer.
    ///
    /// This is the only way steps leave the tree; a second call returns only
    /// what was recorded in between.
    pub fn drain_steps(&mut self) -> Vec<Step> {
        let steps = self.trace.drain();
        debug!(steps = steps.len(), "drained trace");
        steps
    }

    /// Insert `value`, then restore the red-black properties.
    ///
    /// Returns the id minted for the new node.
    pub fn insert(&mut self, value: i64) -> NodeId {
        let mut parent = None;
        let mut cursor = self.root;
        while let Some(slot) = cursor {
            parent = Some(slot);
            let candidate = self.nodes[slot].value;
            self.record(
                StepKind::Compare,
                StepTarget::Node(self.nodes[slot].id),
                Some(StepTarget::Value(value)),
                format!("Comparing {value} with {candidate}"),
                None,
            );
            cursor = if value > candidate {
                self.nodes[slot].right
            } else {
                self.nodes[slot].left
            };
        }

        let id = self.mint_id();
        let slot = self.nodes.len();
        self.nodes.push(Node::new(id, value, parent));
        match parent {
            None => self.root = Some(slot),
            Some(p) if value > self.nodes[p].value => self.nodes[p].right = Some(slot),
            Some(p) => self.nodes[p].left = Some(slot),
        }
        self.record(
            StepKind::Insert,
            StepTarget::Node(id),
            None,
            format!("Insert {value} as red node"),
            None,
        );

        self.insert_fixup(slot);
        debug!(value, node = %id, steps = self.trace.len(), "inserted");
        id
    }

    fn insert_fixup(&mut self, mut z: Slot) {
        while let Some(parent) = self.parent_of(z).filter(|&p| self.nodes[p].is_red()) {
            // A red parent is never the root, so the grandparent exists.
            let Some(grand) = self.parent_of(parent) else {
                break;
            };
            let parent_is_left = self.nodes[grand].left == Some(parent);
            let uncle = if parent_is_left {
                self.nodes[grand].right
            } else {
                self.nodes[grand].left
            };

            if let Some(uncle) = uncle.filter(|&u| self.nodes[u].is_red()) {
                self.record(
                    StepKind::Compare,
                    StepTarget::Node(self.nodes[z].id),
                    Some(StepTarget::Node(self.nodes[uncle].id)),
                    format!("Uncle {} is red, recoloring", self.nodes[uncle].value),
                    None,
                );
                self.recolor(parent, Color::Black, "parent");
                self.recolor(uncle, Color::Black, "uncle");
                self.recolor(grand, Color::Red, "grandparent");
                z = grand;
                continue;
            }

            let inner = if parent_is_left {
                self.nodes[parent].right == Some(z)
            } else {
                self.nodes[parent].left == Some(z)
            };
            if inner {
                z = parent;
                if parent_is_left {
                    self.rotate_left(Some(z));
                } else {
                    self.rotate_right(Some(z));
                }
            }

            let Some(parent) = self.parent_of(z) else {
                break;
            };
            let Some(grand) = self.parent_of(parent) else {
                break;
            };
            self.recolor(parent, Color::Black, "parent");
            self.recolor(grand, Color::Red, "grandparent");
            if parent_is_left {
                self.rotate_right(Some(grand));
            } else {
                self.rotate_left(Some(grand));
            }
        }

        if let Some(root) = self.root {
            self.nodes[root].color = Color::Black;
            self.record(
                StepKind::Recolor,
                StepTarget::Node(self.nodes[root].id),
                None,
                format!("Ensure root {} is black", self.nodes[root].value),
                Some(Color::Black),
            );
        }
    }

    /// Look up `value`, recording one comparison per visited node and a
    /// closing FOUND or NOT_FOUND step. An empty tree fails without steps.
    pub fn search(&mut self, value: i64) -> Result<i64, SearchError> {
        if self.root.is_none() {
            debug!(value, "search on empty tree");
            return Err(SearchError::Empty);
        }

        let mut cursor = self.root;
        while let Some(slot) = cursor {
            let (id, candidate) = (self.nodes[slot].id, self.nodes[slot].value);
            self.record(
                StepKind::Compare,
                StepTarget::Node(id),
                Some(StepTarget::Value(value)),
                format!("Comparing {value} with {candidate}"),
                None,
            );
            cursor = match value.cmp(&candidate) {
                std::cmp::Ordering::Equal => {
                    self.record(
                        StepKind::Found,
                        StepTarget::Node(id),
                        Some(StepTarget::Value(value)),
                        format!("Found {value}!"),
                        None,
                    );
                    debug!(value, node = %id, "search hit");
                    return Ok(candidate);
                }
                std::cmp::Ordering::Less => self.nodes[slot].left,
                std::cmp::Ordering::Greater => self.nodes[slot].right,
            };
        }

        self.record(
            StepKind::NotFound,
            StepTarget::Value(value),
            None,
            format!("{value} not found in tree"),
            None,
        );
        debug!(value, "search miss");
        Err(SearchError::NotFound)
    }

    /// [`search`](Self::search) in the flat `{value, error}` form.
    pub fn search_outcome(&mut self, value: i64) -> SearchOutcome {
        self.search(value).into()
    }

    /// Next unused id. Once the counter passes [`NodeId::MAX`] the lowest
    /// free id is reused instead.
    fn mint_id(&mut self) -> NodeId {
        let id = match self.next_id.checked_add(1) {
            Some(next) if self.next_id <= NodeId::MAX.0 => {
                let id = self.next_id;
                self.next_id = next;
                id
            }
            _ => self.lowest_free_id(),
        };
        NodeId(id)
    }

    fn lowest_free_id(&self) -> u64 {
        let used: BTreeSet<u64> = self.nodes.iter().map(|n| n.id.0).collect();
        let mut candidate = 1;
        for id in used.range(1..) {
            if *id != candidate {
                break;
            }
            candidate += 1;
        }
        candidate
    }

    fn parent_of(&self, slot: Slot) -> Option<Slot> {
        self.nodes[slot].parent
    }

    /// Set a node's color and record it. `role` names the node's position
    /// relative to the one being fixed.
    fn recolor(&mut self, slot: Slot, color: Color, role: &str) {
        self.nodes[slot].color = color;
        self.record(
            StepKind::Recolor,
            StepTarget::Node(self.nodes[slot].id),
            None,
            format!("Recolor {role} {} to {color}", self.nodes[slot].value),
            Some(color),
        );
    }

    fn record(
        &mut self,
        kind: StepKind,
        primary: StepTarget,
        secondary: Option<StepTarget>,
        description: String,
        new_color: Option<Color>,
    ) {
        trace!(kind = %kind, "{}", description);
        let blob = snapshot::encode(self);
        self.trace
            .push(Step::new(kind, primary, secondary, description, new_color, blob));
    }
}
