// CSS transform strings are built in a pure module; the crate itself only
// compiles for wasm32, so the module is pulled in by path.

#![allow(dead_code)]
mod transform {
    include!("../src/transform.rs");
}

use hero_core::content::HERO_PANEL_PLACEMENT;
use hero_core::{ItemPlacement, ItemTransform, LayerOffset};
use transform::*;

#[test]
fn flat_item_translates_only() {
    let t = ItemTransform::compose(
        LayerOffset::new(-6.0, 4.0, -0.2, -0.2),
        &ItemPlacement::at(8.0, 46.0),
        false,
    );
    assert_eq!(css_transform(&t), "translate3d(-6.00px, 4.00px, 0)");
}

#[test]
fn centered_tilted_panel() {
    let t = ItemTransform::compose(
        LayerOffset::new(-30.0, 20.0, -3.0, -3.0),
        &HERO_PANEL_PLACEMENT,
        true,
    );
    assert_eq!(
        css_transform(&t),
        "translate3d(calc(-50% + -30.00px), calc(-50% + 20.00px), 0) rotateX(-3.000deg) rotateY(-3.000deg)"
    );
}

#[test]
fn static_rotation_is_appended() {
    let placement = ItemPlacement::at(10.0, 18.0)
        .with_nudge(-8.0, 6.0)
        .with_rotation(-4.0);
    let t = ItemTransform::compose(LayerOffset::ZERO, &placement, false);
    assert_eq!(css_transform(&t), "translate3d(-8.00px, 6.00px, 0) rotate(-4deg)");
}

#[test]
fn negative_zero_prints_as_zero() {
    let t = ItemTransform::compose(
        LayerOffset::new(-0.0, -0.0, 0.0, 0.0),
        &ItemPlacement::FILL,
        false,
    );
    assert_eq!(css_transform(&t), "translate3d(0.00px, 0.00px, 0)");
}

#[test]
fn anchor_style_for_placed_and_fill_items() {
    assert_eq!(
        anchor_style(&ItemPlacement::at(75.0, 22.0)),
        "left: 75%; top: 22%;"
    );
    assert_eq!(anchor_style(&ItemPlacement::at(12.5, 0.0)), "left: 12.5%; top: 0%;");
    assert_eq!(anchor_style(&ItemPlacement::FILL), "");
}
