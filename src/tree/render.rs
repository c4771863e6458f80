//! Sideways text rendering.
//!
//! The right subtree is printed above its parent and the left subtree below,
//! so the output reads like the tree rotated a quarter turn counter-clockwise.

use std::fmt::{self, Write as _};

use super::RedBlackTree;
use crate::node::NodeRef;

impl fmt::Display for RedBlackTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root() {
            None => f.write_str("Empty"),
            Some(root) => {
                let mut out = String::new();
                render(root, "", true, &mut out)?;
                f.write_str(&out)
            }
        }
    }
}

fn render(node: NodeRef<'_>, prefix: &str, is_left: bool, out: &mut String) -> fmt::Result {
    if let Some(right) = node.right() {
        let prefix = format!("{prefix}{}", if is_left { "│      " } else { "       " });
        render(right, &prefix, false, out)?;
    }
    writeln!(out, "{prefix}{} {node}", if is_left { "└───" } else { "┌───" })?;
    if let Some(left) = node.left() {
        let prefix = format!("{prefix}{}", if is_left { "       " } else { "│      " });
        render(left, &prefix, true, out)?;
    }
    Ok(())
}
