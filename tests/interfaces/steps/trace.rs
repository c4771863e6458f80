//! Trace step definitions.

use cucumber::{then, when};
use rbtrace::{snapshot, Color, StepKind, StepTarget};

use super::{parse_tag, TreeWorld};

#[when("I drain the trace again")]
fn when_drain_again(world: &mut TreeWorld) {
    world.steps = world.tree.drain_steps();
}

#[then(expr = "the trace contains {int} {word} step(s)")]
fn then_step_count(world: &mut TreeWorld, count: usize, kind: String) {
    let kind: StepKind = parse_tag(&kind);
    let actual = world.steps.iter().filter(|s| s.kind() == kind).count();
    assert_eq!(actual, count, "unexpected number of {} steps", kind);
}

#[then("the trace is empty")]
fn then_trace_empty(world: &mut TreeWorld) {
    assert!(world.steps.is_empty(), "trace has {} steps", world.steps.len());
}

#[then(expr = "the trace ends with a {word} step")]
fn then_last_kind(world: &mut TreeWorld, kind: String) {
    let last = world.steps.last().expect("Trace is empty");
    assert_eq!(last.kind(), parse_tag::<StepKind>(&kind));
}

#[then(expr = "the last step recolors the root {word}")]
fn then_last_recolors_root(world: &mut TreeWorld, color: String) {
    let last = world.steps.last().expect("Trace is empty");
    let root = world.tree.root().expect("Tree is empty");
    assert_eq!(last.kind(), StepKind::Recolor);
    assert_eq!(last.primary(), StepTarget::Node(root.id()));
    assert_eq!(last.new_color(), Some(parse_tag::<Color>(&color)));
}

#[then(expr = "the last step references value {int}")]
fn then_last_references_value(world: &mut TreeWorld, value: i64) {
    let last = world.steps.last().expect("Trace is empty");
    assert_eq!(last.primary(), StepTarget::Value(value));
}

#[then(expr = "the first rotation is {word} at the node holding {int}")]
fn then_first_rotation(world: &mut TreeWorld, kind: String, value: i64) {
    let rotation = world
        .steps
        .iter()
        .find(|s| s.kind().is_rotation())
        .expect("No rotation recorded");
    assert_eq!(rotation.kind(), parse_tag::<StepKind>(&kind));

    // Resolve the pivot id against the tree as it was when the step was taken.
    let view = snapshot::restore_blob(rotation.snapshot()).expect("Bad rotation snapshot");
    let id = rotation.primary().node().expect("Rotation without node");
    let node = view
        .to_array()
        .into_iter()
        .find(|n| n.id() == id)
        .expect("Rotated node missing from snapshot");
    assert_eq!(node.value(), value);
}

#[then("every step snapshot can be restored")]
fn then_snapshots_restore(world: &mut TreeWorld) {
    for step in &world.steps {
        if let Err(e) = snapshot::restore_blob(step.snapshot()) {
            panic!("Step '{}' has an unusable snapshot: {}", step, e);
        }
    }
}
