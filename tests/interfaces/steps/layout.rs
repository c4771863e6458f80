//! Layout step definitions.

use cucumber::{then, when};
use rbtrace::{layout, LayoutConfig};

use super::TreeWorld;

#[when("I compute the layout twice")]
fn when_layout_twice(world: &mut TreeWorld) {
    let config = LayoutConfig::default();
    world.layouts = vec![
        layout::positions(world.tree.root(), &config),
        layout::positions(world.tree.root(), &config),
    ];
}

#[then("both layouts are identical")]
fn then_layouts_identical(world: &mut TreeWorld) {
    assert_eq!(world.layouts.len(), 2);
    assert_eq!(world.layouts[0], world.layouts[1]);
}

#[then(expr = "the layout has {int} position(s)")]
fn then_layout_size(world: &mut TreeWorld, count: usize) {
    for layout in &world.layouts {
        assert_eq!(layout.len(), count);
    }
}

#[then(expr = "the root is drawn at x {float} on level {int}")]
fn then_root_position(world: &mut TreeWorld, x: f64, level: usize) {
    let root = world.tree.root().expect("Tree is empty");
    let pos = world.layouts[0][&root.id()];
    assert_eq!(pos.x, x);
    assert_eq!(pos.level, level);
}
