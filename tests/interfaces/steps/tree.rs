//! Insertion, search and traversal step definitions.

use cucumber::{given, then, when};
use rbtrace::{Color, NodeRef, RedBlackTree, TraversalOrder};

use super::{parse_tag, parse_values, TreeWorld};

fn assert_node(node: Option<NodeRef<'_>>, value: i64, color: &str) {
    let node = node.expect("Expected a node, found an empty position");
    assert_eq!(node.value(), value);
    assert_eq!(node.color(), parse_tag::<Color>(color));
}

// --- Given steps ---

#[given("an empty red-black tree")]
fn given_empty_tree(world: &mut TreeWorld) {
    world.tree = RedBlackTree::new();
    world.steps.clear();
}

#[given(expr = "a tree built from {string}")]
fn given_tree_from(world: &mut TreeWorld, values: String) {
    world.tree = RedBlackTree::new();
    for v in parse_values(&values) {
        world.tree.insert(v);
    }
    // Setup steps are not part of the scenario's trace.
    world.tree.drain_steps();
    world.steps.clear();
}

// --- When steps ---

#[when(expr = "I insert {int}")]
fn when_insert(world: &mut TreeWorld, value: i64) {
    world.tree.insert(value);
    world.collect_steps();
}

#[when(expr = "I insert the values {string}")]
fn when_insert_values(world: &mut TreeWorld, values: String) {
    for v in parse_values(&values) {
        world.tree.insert(v);
    }
    world.collect_steps();
}

#[when(expr = "I search for {int}")]
fn when_search(world: &mut TreeWorld, value: i64) {
    world.search = Some(world.tree.search_outcome(value));
    world.collect_steps();
}

#[when(expr = "I traverse the tree {word}")]
fn when_traverse(world: &mut TreeWorld, order: String) {
    let order: TraversalOrder = order.parse().expect("Unknown traversal order");
    world.traversal = world.tree.traverse(order);
    world.collect_steps();
}

// --- Then steps ---

#[then(expr = "the root has value {int} and color {word}")]
fn then_root(world: &mut TreeWorld, value: i64, color: String) {
    assert_node(world.tree.root(), value, &color);
}

#[then(expr = "the root's left child has value {int} and color {word}")]
fn then_left_child(world: &mut TreeWorld, value: i64, color: String) {
    assert_node(world.tree.root().and_then(|r| r.left()), value, &color);
}

#[then(expr = "the root's right child has value {int} and color {word}")]
fn then_right_child(world: &mut TreeWorld, value: i64, color: String) {
    assert_node(world.tree.root().and_then(|r| r.right()), value, &color);
}

#[then(expr = "the inorder traversal is {string}")]
fn then_inorder(world: &mut TreeWorld, expected: String) {
    // Inspect a restored copy so the scenario's trace stays untouched.
    let mut copy = rbtrace::snapshot::restore_blob(&rbtrace::snapshot::encode(&world.tree))
        .expect("Failed to copy tree");
    assert_eq!(copy.inorder(), parse_values(&expected));
}

#[then(expr = "the traversal output is {string}")]
fn then_traversal_output(world: &mut TreeWorld, expected: String) {
    assert_eq!(world.traversal, parse_values(&expected));
}

#[then(expr = "the search succeeds with {int}")]
fn then_search_hit(world: &mut TreeWorld, value: i64) {
    let outcome = world.search.as_ref().expect("No search was run");
    assert_eq!(outcome.error, "");
    assert_eq!(outcome.value, value);
}

#[then(expr = "the search fails with {string}")]
fn then_search_miss(world: &mut TreeWorld, error: String) {
    let outcome = world.search.as_ref().expect("No search was run");
    assert_eq!(outcome.error, error);
}

#[then("the tree satisfies the red-black invariants")]
fn then_invariants(world: &mut TreeWorld) {
    if let Err(e) = world.tree.check_invariants() {
        panic!("Invariant violated: {}", e);
    }
}

#[then(expr = "the tree holds {int} node(s)")]
fn then_node_count(world: &mut TreeWorld, count: usize) {
    assert_eq!(world.tree.len(), count);
}
