//! Rotation primitives.
//!
//! Both rotations record their step before touching any link, so the step's
//! snapshot shows the tree as it was just before the rotation.

use super::RedBlackTree;
use crate::node::Slot;
use crate::step::{StepKind, StepTarget};

impl RedBlackTree {
    /// Rotate left around `x`, lifting its right child.
    ///
    /// No-op when `x` is absent or has no right child.
    pub(crate) fn rotate_left(&mut self, x: Option<Slot>) {
        let Some(x) = x else { return };
        let Some(y) = self.nodes[x].right else { return };

        self.record(
            StepKind::RotateLeft,
            StepTarget::Node(self.nodes[x].id),
            Some(StepTarget::Node(self.nodes[y].id)),
            format!("Rotating left at node {}", self.nodes[x].value),
            None,
        );

        let inner = self.nodes[y].left;
        self.nodes[x].right = inner;
        if let Some(inner) = inner {
            self.nodes[inner].parent = Some(x);
        }

        let grand = self.nodes[x].parent;
        self.nodes[y].parent = grand;
        self.replace_child(grand, x, y);

        self.nodes[y].left = Some(x);
        self.nodes[x].parent = Some(y);
    }

    /// Rotate right around `x`, lifting its left child.
    ///
    /// No-op when `x` is absent or has no left child.
    pub(crate) fn rotate_right(&mut self, x: Option<Slot>) {
        let Some(x) = x else { return };
        let Some(y) = self.nodes[x].left else { return };

        self.record(
            StepKind::RotateRight,
            StepTarget::Node(self.nodes[x].id),
            Some(StepTarget::Node(self.nodes[y].id)),
            format!("Rotating right at node {}", self.nodes[x].value),
            None,
        );

        let inner = self.nodes[y].right;
        self.nodes[x].left = inner;
        if let Some(inner) = inner {
            self.nodes[inner].parent = Some(x);
        }

        let grand = self.nodes[x].parent;
        self.nodes[y].parent = grand;
        self.replace_child(grand, x, y);

        self.nodes[y].right = Some(x);
        self.nodes[x].parent = Some(y);
    }

    /// Point whichever slot owned `old` at `new`; with no parent, `new`
    /// becomes the root.
    fn replace_child(&mut self, parent: Option<Slot>, old: Slot, new: Slot) {
        match parent {
            None => self.root = Some(new),
            Some(p) if self.nodes[p].left == Some(old) => self.nodes[p].left = Some(new),
            Some(p) => self.nodes[p].right = Some(new),
        }
    }
}
