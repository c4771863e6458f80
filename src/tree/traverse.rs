//! Depth-first traversals and level-order listing.

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use tracing::debug;

use super::RedBlackTree;
use crate::node::{NodeRef, Slot};
use crate::step::{StepKind, StepTarget};

/// Depth-first visiting order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TraversalOrder {
    /// Left, self, right.
    In,
    /// Self, left, right.
    Pre,
    /// Left, right, self.
    Post,
}

impl fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraversalOrder::In => f.write_str("inorder"),
            TraversalOrder::Pre => f.write_str("preorder"),
            TraversalOrder::Post => f.write_str("postorder"),
        }
    }
}

impl FromStr for TraversalOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "in" | "inorder" => Ok(TraversalOrder::In),
            "pre" | "preorder" => Ok(TraversalOrder::Pre),
            "post" | "postorder" => Ok(TraversalOrder::Post),
            other => Err(format!("Unknown traversal order: {}", other)),
        }
    }
}

impl RedBlackTree {
    /// Values in the given order, recording one TRAVERSE step per node.
    ///
    /// Never changes the tree's shape or colors.
    pub fn traverse(&mut self, order: TraversalOrder) -> Vec<i64> {
        let mut visits = Vec::with_capacity(self.nodes.len());
        self.collect(self.root, order, &mut visits);

        let mut values = Vec::with_capacity(visits.len());
        for slot in visits {
            let (id, value) = (self.nodes[slot].id, self.nodes[slot].value);
            self.record(
                StepKind::Traverse,
                StepTarget::Node(id),
                None,
                format!("Visiting {value}"),
                None,
            );
            values.push(value);
        }
        debug!(%order, nodes = values.len(), "traversed");
        values
    }

    pub fn inorder(&mut self) -> Vec<i64> {
        self.traverse(TraversalOrder::In)
    }

    pub fn preorder(&mut self) -> Vec<i64> {
        self.traverse(TraversalOrder::Pre)
    }

    pub fn postorder(&mut self) -> Vec<i64> {
        self.traverse(TraversalOrder::Post)
    }

    fn collect(&self, slot: Option<Slot>, order: TraversalOrder, out: &mut Vec<Slot>) {
        let Some(slot) = slot else { return };
        let (left, right) = (self.nodes[slot].left, self.nodes[slot].right);
        match order {
            TraversalOrder::Pre => {
                out.push(slot);
                self.collect(left, order, out);
                self.collect(right, order, out);
            }
            TraversalOrder::In => {
                self.collect(left, order, out);
                out.push(slot);
                self.collect(right, order, out);
            }
            TraversalOrder::Post => {
                self.collect(left, order, out);
                self.collect(right, order, out);
                out.push(slot);
            }
        }
    }

    /// Every node in breadth-first order, root first. Records no steps.
    pub fn to_array(&self) -> Vec<NodeRef<'_>> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut queue: VecDeque<NodeRef<'_>> = self.root().into_iter().collect();
        while let Some(node) = queue.pop_front() {
            queue.extend(node.left());
            queue.extend(node.right());
            out.push(node);
        }
        out
    }
}
