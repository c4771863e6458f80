//! Structural self-check.

use super::RedBlackTree;
use crate::error::InvariantViolation;
use crate::node::Slot;

impl RedBlackTree {
    /// Verify the red-black properties, search order and parent links.
    ///
    /// On success returns the black-height of the root: the number of black
    /// nodes on any path from the root down to an absent child, not counting
    /// the root itself.
    pub fn check_invariants(&self) -> Result<usize, InvariantViolation> {
        let Some(root) = self.root else {
            return Ok(0);
        };
        let node = &self.nodes[root];
        if node.is_red() {
            return Err(InvariantViolation::RedRoot(node.id));
        }
        if node.parent.is_some() {
            return Err(InvariantViolation::ParentLink(node.id));
        }
        let left = self.check_subtree(node.left, root, None, Some(node.value))?;
        let right = self.check_subtree(node.right, root, Some(node.value), None)?;
        if left != right {
            return Err(InvariantViolation::BlackHeight {
                node: node.id,
                left,
                right,
            });
        }
        Ok(left)
    }

    /// Black nodes on every path through `slot`, counting `slot` itself.
    /// Values must stay within the inclusive `low..=high` window.
    fn check_subtree(
        &self,
        slot: Option<Slot>,
        parent: Slot,
        low: Option<i64>,
        high: Option<i64>,
    ) -> Result<usize, InvariantViolation> {
        let Some(slot) = slot else {
            return Ok(0);
        };
        let node = &self.nodes[slot];
        if node.parent != Some(parent) {
            return Err(InvariantViolation::ParentLink(node.id));
        }
        if low.is_some_and(|low| node.value < low) || high.is_some_and(|high| node.value > high) {
            return Err(InvariantViolation::Order {
                node: node.id,
                value: node.value,
            });
        }
        if node.is_red() && self.nodes[parent].is_red() {
            return Err(InvariantViolation::RedRedEdge {
                parent: self.nodes[parent].id,
                child: node.id,
            });
        }

        let left = self.check_subtree(node.left, slot, low, Some(node.value))?;
        let right = self.check_subtree(node.right, slot, Some(node.value), high)?;
        if left != right {
            return Err(InvariantViolation::BlackHeight {
                node: node.id,
                left,
                right,
            });
        }
        Ok(left + usize::from(!node.is_red()))
    }
}
