//! Property tests for the load-bearing layout invariants: idempotence, the
//! minimum-size floor, and stretch conservation.

use gantry_core::{Rect, Size};
use gantry_layout::{
    AnchorPreset, ElementId, LayoutStrategy, Orientation, SizeFlags, ThemeConstant, Ui,
};
use proptest::prelude::*;

const SEPARATION: f32 = 5.0;

/// Build a full-width row and populate it from the given child specs.
fn build_row(canvas_width: f32, specs: &[(f32, bool, f32)]) -> (Ui, Vec<ElementId>) {
    let mut ui = Ui::new(Size::new(canvas_width, 60.0));
    let row = ui.create_child(ui.root(), LayoutStrategy::row());
    ui.set_anchor_preset(row, AnchorPreset::Full);
    ui.set_constant_override(row, ThemeConstant::Separation, Some(SEPARATION));
    let mut children = Vec::new();
    for &(min, expand, ratio) in specs {
        let child = ui.create_child(row, LayoutStrategy::Free);
        ui.set_min_size(child, Size::new(min, 10.0));
        if expand {
            ui.set_size_flags(child, Orientation::Horizontal, SizeFlags::FILL_EXPAND)
                .unwrap();
            ui.set_stretch_ratio(child, ratio).unwrap();
        }
        children.push(child);
    }
    ui.update();
    (ui, children)
}

fn child_spec() -> impl Strategy<Value = (f32, bool, f32)> {
    (
        (0u32..60).prop_map(|v| v as f32),
        any::<bool>(),
        (1u32..8).prop_map(|v| v as f32 / 2.0),
    )
}

proptest! {
    /// No child ever resolves below its combined minimum.
    #[test]
    fn min_size_floor(specs in prop::collection::vec(child_spec(), 1..8)) {
        let (mut ui, children) = build_row(800.0, &specs);
        for (child, &(min, _, _)) in children.iter().zip(&specs) {
            let rect = ui.rect(*child);
            prop_assert!(rect.width >= min, "width {} below min {}", rect.width, min);
            let combined = ui.combined_min(*child);
            prop_assert!(rect.width >= combined.width);
        }
    }

    /// When every minimum fits, committed sizes plus separation account for
    /// every pixel of the container extent, provided someone stretches.
    #[test]
    fn stretch_conservation(specs in prop::collection::vec(child_spec(), 1..8)) {
        let min_sum: f32 = specs.iter().map(|s| s.0).sum();
        let extent = min_sum + SEPARATION * (specs.len() - 1) as f32 + 200.0;
        let (ui, children) = build_row(extent, &specs);

        let any_stretch = specs.iter().any(|s| s.1);
        let width_sum: f32 = children.iter().map(|&c| ui.rect(c).width).sum();
        let occupied = width_sum + SEPARATION * (specs.len() - 1) as f32;
        if any_stretch {
            // Floored shares may strand strictly less than one pixel when
            // the trailing child is not the one stretching; the end snap
            // makes it exact otherwise. Never over-allocates.
            prop_assert!(
                occupied > extent - 1.0 - 1e-3 && occupied <= extent + 1e-3,
                "unaccounted pixels: occupied {} of {}",
                occupied,
                extent
            );
            // A stretching trailing child with nothing to pin it lands
            // exactly on the container edge.
            let (last_min, last_expand, _) = *specs.last().unwrap();
            if last_expand && last_min == 0.0 {
                let last = *children.last().unwrap();
                prop_assert_eq!(ui.rect(last).right(), extent);
            }
        } else {
            prop_assert!(occupied <= extent + 1e-3);
        }
    }

    /// Re-sorting with unchanged inputs reproduces bit-identical rects.
    #[test]
    fn idempotence(specs in prop::collection::vec(child_spec(), 1..8)) {
        let (mut ui, children) = build_row(640.0, &specs);
        let first: Vec<Rect> = children.iter().map(|&c| ui.rect(c)).collect();
        let row = ui.parent(children[0]).unwrap();
        ui.queue_sort(row);
        ui.update();
        let second: Vec<Rect> = children.iter().map(|&c| ui.rect(c)).collect();
        prop_assert_eq!(first, second);
    }

    /// Rect positions always satisfy `position = margin + anchor × extent`.
    #[test]
    fn anchor_margin_identity(
        anchor_left in 0.0f32..=1.0,
        margin_left in -50.0f32..50.0,
        canvas in 50.0f32..500.0,
    ) {
        let mut ui = Ui::new(Size::new(canvas, canvas));
        let el = ui.create_child(ui.root(), LayoutStrategy::Free);
        ui.set_anchor(el, gantry_layout::Side::Left, anchor_left, true);
        ui.set_margin(el, gantry_layout::Side::Left, margin_left);
        let anchors = ui.anchors(el);
        let margins = ui.margins(el);
        let rect = ui.rect(el);
        prop_assert!((rect.x - (margins.left + anchors.left * canvas)).abs() < 1e-3);
    }
}
