//! End-to-end layout scenarios exercising the public API: preset
//! round-trips, nested container resolution, deferred sorting, and the
//! invariants every resolution pass must uphold.

use gantry_core::{Rect, Size};
use gantry_layout::{
    AnchorPreset, Alignment, AnchorPreset as Preset, ElementId, LayoutStrategy, Orientation,
    SizeFlags, ThemeConstant, Ui,
};

/// Expected placement of one axis for a 40x20 box inside a parent extent.
fn expected_axis(class: char, parent: f32, min: f32) -> (f32, f32) {
    match class {
        'b' => (0.0, min),
        'c' => (((parent - min) * 0.5), min),
        'e' => (parent - min, min),
        'w' => (0.0, parent),
        _ => unreachable!(),
    }
}

/// Per-preset axis classes, written out independently of the engine's own
/// table so the two can disagree in tests.
fn preset_classes(preset: AnchorPreset) -> (char, char) {
    match preset {
        Preset::TopLeft => ('b', 'b'),
        Preset::TopRight => ('e', 'b'),
        Preset::BottomLeft => ('b', 'e'),
        Preset::BottomRight => ('e', 'e'),
        Preset::CenterLeft => ('b', 'c'),
        Preset::CenterTop => ('c', 'b'),
        Preset::CenterRight => ('e', 'c'),
        Preset::CenterBottom => ('c', 'e'),
        Preset::Center => ('c', 'c'),
        Preset::LeftWide => ('b', 'w'),
        Preset::TopWide => ('w', 'b'),
        Preset::RightWide => ('e', 'w'),
        Preset::BottomWide => ('w', 'e'),
        Preset::VcenterWide => ('c', 'w'),
        Preset::HcenterWide => ('w', 'c'),
        Preset::Full => ('w', 'w'),
    }
}

#[test]
fn every_preset_places_and_survives_parent_resizes() {
    for preset in AnchorPreset::ALL {
        let mut ui = Ui::new(Size::new(400.0, 300.0));
        let el = ui.create(LayoutStrategy::Free);
        ui.set_min_size(el, Size::new(40.0, 20.0));
        ui.add_child(ui.root(), el);
        ui.set_anchor_preset(el, preset);

        let (h, v) = preset_classes(preset);
        let (x, w) = expected_axis(h, 400.0, 40.0);
        let (y, hgt) = expected_axis(v, 300.0, 20.0);
        assert_eq!(ui.rect(el), Rect::new(x, y, w, hgt), "{preset:?} at 400x300");

        ui.set_canvas_size(Size::new(800.0, 600.0));
        let (x, w) = expected_axis(h, 800.0, 40.0);
        let (y, hgt) = expected_axis(v, 600.0, 20.0);
        assert_eq!(ui.rect(el), Rect::new(x, y, w, hgt), "{preset:?} after resize");
    }
}

#[test]
fn nested_containers_resolve_top_down_in_one_tick() {
    let mut ui = Ui::new(Size::new(400.0, 200.0));
    let padded = ui.create_child(ui.root(), LayoutStrategy::Padded);
    ui.set_anchor_preset(padded, AnchorPreset::Full);
    ui.set_constant_override(padded, ThemeConstant::PaddingLeft, Some(20.0));
    ui.set_constant_override(padded, ThemeConstant::PaddingRight, Some(20.0));

    let row = ui.create_child(padded, LayoutStrategy::row());
    ui.set_constant_override(row, ThemeConstant::Separation, Some(0.0));
    let left = ui.create_child(row, LayoutStrategy::Free);
    let right = ui.create_child(row, LayoutStrategy::Free);
    for &c in &[left, right] {
        ui.set_min_size(c, Size::new(10.0, 10.0));
        ui.set_size_flags(c, Orientation::Horizontal, SizeFlags::FILL_EXPAND)
            .unwrap();
    }

    ui.update();

    // Padded inset 20 each side of 400 leaves 360 for the row, split 1:1.
    assert_eq!(ui.rect(row).width, 360.0);
    assert_eq!(ui.rect(left).width, 180.0);
    assert_eq!(ui.rect(right).width, 180.0);
    assert_eq!(ui.global_rect(left).x, 20.0);
    assert_eq!(ui.global_rect(right).right(), 380.0);
}

#[test]
fn resolution_is_idempotent() {
    let mut ui = Ui::new(Size::new(333.0, 177.0));
    let col = ui.create_child(ui.root(), LayoutStrategy::column());
    ui.set_anchor_preset(col, AnchorPreset::Full);
    let mut leaves = Vec::new();
    for i in 0..5 {
        let leaf = ui.create_child(col, LayoutStrategy::Free);
        ui.set_min_size(leaf, Size::new(10.0 + i as f32, 13.0));
        ui.set_size_flags(leaf, Orientation::Vertical, SizeFlags::FILL_EXPAND)
            .unwrap();
        leaves.push(leaf);
    }
    ui.update();
    let first: Vec<Rect> = leaves.iter().map(|&l| ui.rect(l)).collect();

    // Force a full re-sort with unchanged inputs.
    ui.queue_sort(col);
    ui.update();
    let second: Vec<Rect> = leaves.iter().map(|&l| ui.rect(l)).collect();
    assert_eq!(first, second);
}

#[test]
fn mutations_defer_to_the_update_tick() {
    let mut ui = Ui::new(Size::new(300.0, 100.0));
    let row = ui.create_child(ui.root(), LayoutStrategy::row());
    ui.set_anchor_preset(row, AnchorPreset::Full);
    let a = ui.create_child(row, LayoutStrategy::Free);
    let b = ui.create_child(row, LayoutStrategy::Free);
    ui.set_min_size(a, Size::new(50.0, 10.0));
    ui.set_min_size(b, Size::new(50.0, 10.0));
    ui.update();
    let before = ui.rect(b);

    // Flipping a size flag queues the parent but moves nothing yet.
    ui.set_size_flags(a, Orientation::Horizontal, SizeFlags::FILL_EXPAND)
        .unwrap();
    assert!(ui.sort_pending(row));
    assert_eq!(ui.rect(b), before);

    ui.update();
    assert_ne!(ui.rect(a).width, 50.0);
}

#[test]
fn min_size_floor_holds_across_a_mixed_tree() {
    let mut ui = Ui::new(Size::new(500.0, 400.0));
    let col = ui.create_child(ui.root(), LayoutStrategy::column());
    ui.set_anchor_preset(col, AnchorPreset::Full);

    let row = ui.create_child(col, LayoutStrategy::row());
    let mut all = vec![col, row];
    for i in 0..3 {
        let leaf = ui.create_child(row, LayoutStrategy::Free);
        ui.set_min_size(leaf, Size::new(40.0 + 10.0 * i as f32, 25.0));
        all.push(leaf);
    }
    let center = ui.create_child(col, LayoutStrategy::Center);
    let boxed = ui.create_child(center, LayoutStrategy::Free);
    ui.set_min_size(boxed, Size::new(60.0, 30.0));
    all.push(center);
    all.push(boxed);

    ui.update();

    for id in all {
        let min = ui.combined_min(id);
        let rect = ui.rect(id);
        assert!(
            rect.width >= min.width && rect.height >= min.height,
            "floor violated: rect {rect:?} vs min {min:?}"
        );
    }
}

#[test]
fn container_min_is_recomputed_not_patched() {
    let mut ui = Ui::new(Size::new(400.0, 300.0));
    let row = ui.create_child(ui.root(), LayoutStrategy::row());
    ui.set_constant_override(row, ThemeConstant::Separation, Some(6.0));
    let a = ui.create_child(row, LayoutStrategy::Free);
    let b = ui.create_child(row, LayoutStrategy::Free);
    ui.set_min_size(a, Size::new(30.0, 12.0));
    ui.set_min_size(b, Size::new(50.0, 9.0));
    assert_eq!(ui.combined_min(row), Size::new(86.0, 12.0));

    // Shrinking a child shrinks the container: nothing is sticky.
    ui.set_min_size(b, Size::new(10.0, 9.0));
    assert_eq!(ui.combined_min(row), Size::new(46.0, 12.0));

    // Hiding a child removes it from the formula entirely.
    ui.set_visible(a, false);
    assert_eq!(ui.combined_min(row), Size::new(10.0, 9.0));
}

#[test]
fn theme_separation_change_reflows_rows() {
    let mut ui = Ui::new(Size::new(300.0, 100.0));
    let row = ui.create_child(ui.root(), LayoutStrategy::row());
    ui.set_anchor_preset(row, AnchorPreset::Full);
    let a = ui.create_child(row, LayoutStrategy::Free);
    let b = ui.create_child(row, LayoutStrategy::Free);
    ui.set_min_size(a, Size::new(50.0, 10.0));
    ui.set_min_size(b, Size::new(50.0, 10.0));
    ui.update();
    // Default separation is 4.
    assert_eq!(ui.rect(b).x, 54.0);

    let version = ui.theme_version();
    ui.set_theme_constant(ThemeConstant::Separation, 20.0);
    assert!(ui.theme_version() > version);
    ui.update();
    assert_eq!(ui.rect(b).x, 70.0);
}

#[test]
fn alignment_applies_only_without_stretch() {
    let mut ui = Ui::new(Size::new(400.0, 50.0));
    let row = ui.create_child(ui.root(), LayoutStrategy::row());
    ui.set_anchor_preset(row, AnchorPreset::Full);
    ui.set_alignment(row, Alignment::End);
    ui.set_constant_override(row, ThemeConstant::Separation, Some(0.0));
    let a = ui.create_child(row, LayoutStrategy::Free);
    ui.set_min_size(a, Size::new(60.0, 10.0));
    ui.update();
    // No stretching child: the whole run shifts to the end.
    assert_eq!(ui.rect(a).x, 340.0);

    // Once anything stretches, alignment is moot: space goes to the child.
    ui.set_size_flags(a, Orientation::Horizontal, SizeFlags::FILL_EXPAND)
        .unwrap();
    ui.update();
    assert_eq!(ui.rect(a).x, 0.0);
    assert_eq!(ui.rect(a).width, 400.0);
}

#[test]
fn zero_sized_canvas_is_inert() {
    let mut ui = Ui::new(Size::ZERO);
    let el = ui.create_child(ui.root(), LayoutStrategy::Free);
    ui.set_min_size(el, Size::new(10.0, 10.0));
    ui.update();
    // Children still honor their floor against a zero-extent parent.
    let rect = ui.rect(el);
    assert_eq!(rect.width, 10.0);
    assert_eq!(rect.height, 10.0);
}

#[test]
fn detached_subtrees_keep_state_and_reattach_cleanly() {
    let mut ui = Ui::new(Size::new(200.0, 200.0));
    let panel = ui.create_child(ui.root(), LayoutStrategy::Panel);
    ui.set_anchor_preset(panel, AnchorPreset::Full);
    let child = ui.create_child(panel, LayoutStrategy::Free);
    ui.set_min_size(child, Size::new(20.0, 20.0));
    ui.update();
    assert_eq!(ui.rect(child).width, 200.0);

    ui.remove_child(panel);
    assert!(!ui.is_attached(panel));
    assert!(!ui.is_attached(child));

    // Mutating a detached subtree resolves nothing.
    ui.set_min_size(child, Size::new(50.0, 50.0));
    ui.update();

    ui.add_child(ui.root(), panel);
    ui.update();
    assert!(ui.is_attached(child));
    assert_eq!(ui.rect(child).width, 200.0);
}

fn ids_of(ui: &Ui, parent: ElementId) -> Vec<ElementId> {
    ui.children(parent).to_vec()
}

#[test]
fn reorder_free_children_does_not_move_rects() {
    let mut ui = Ui::new(Size::new(100.0, 100.0));
    let a = ui.create_child(ui.root(), LayoutStrategy::Free);
    ui.set_rect(a, Rect::new(5.0, 5.0, 10.0, 10.0));
    assert_eq!(ids_of(&ui, ui.root()), vec![a]);
    ui.update();
    assert_eq!(ui.rect(a), Rect::new(5.0, 5.0, 10.0, 10.0));
}
