#![forbid(unsafe_code)]

//! The generic container contract.
//!
//! Containers never re-lay their children synchronously on every mutation:
//! [`Ui::queue_sort`] raises an idempotent flag and the actual sort runs at
//! most once per [`Ui::update`](crate::Ui::update) tick, parents first.
//! Every strategy places children through one primitive,
//! [`Ui::fit_child`], which honors the child's own size flags.

use gantry_core::{Rect, Size, Vec2};

use crate::element::SizeFlags;
use crate::strategy::{LayoutStrategy, ScrollMode};
use crate::tree::ElementId;
use crate::Ui;

impl Ui {
    /// Ask for a re-sort on the next update tick. Idempotent; meaningful
    /// only once the element is attached.
    pub fn queue_sort(&mut self, id: ElementId) {
        let el = &mut self.elements[id];
        if !el.attached || el.pending_sort {
            return;
        }
        el.pending_sort = true;
    }

    /// Whether a sort is pending for this element.
    pub fn sort_pending(&self, id: ElementId) -> bool {
        self.elements[id].pending_sort
    }

    /// Run the element's strategy over its children now and clear the
    /// pending flag. Normally driven by [`Ui::update`](crate::Ui::update).
    pub(crate) fn sort_children(&mut self, id: ElementId) {
        let strategy = self.elements[id].strategy;
        let _span = tracing::trace_span!("sort_children", element = ?id, kind = ?strategy.kind())
            .entered();
        match strategy {
            LayoutStrategy::Free => {}
            LayoutStrategy::LinearBox { axis, alignment } => {
                self.sort_linear_box(id, axis, alignment);
            }
            LayoutStrategy::Center => self.sort_center(id),
            LayoutStrategy::Padded => self.sort_padded(id),
            LayoutStrategy::Panel => self.sort_panel(id),
            LayoutStrategy::Scroll {
                offset,
                horizontal,
                vertical,
            } => self.sort_scroll(id, offset, horizontal, vertical),
        }
        self.elements[id].pending_sort = false;
    }

    /// Children that take part in this sort pass, in order.
    pub(crate) fn eligible_children(
        &self,
        id: ElementId,
    ) -> smallvec::SmallVec<[ElementId; 8]> {
        self.elements[id]
            .children
            .iter()
            .copied()
            .filter(|&c| self.elements[c].participates())
            .collect()
    }

    /// Place a child within the allotted rectangle, honoring the child's
    /// own size flags: a non-FILL axis shrinks the child to its combined
    /// minimum and aligns it within the span per SHRINK_BEGIN/CENTER/END.
    /// Rotation and scale are reset to identity; layout makes no guarantee
    /// about a child's prior transform state.
    ///
    /// Panics if `child` is not owned by `parent`; that is a programming
    /// error, not a recoverable condition.
    pub(crate) fn fit_child(&mut self, parent: ElementId, child: ElementId, target: Rect) {
        assert!(
            self.elements[child].parent == Some(parent),
            "fit_child: element is not a child of this container"
        );

        let min = self.combined_min(child);
        let el = &self.elements[child];
        let (h_flags, v_flags) = (el.h_size_flags, el.v_size_flags);

        let mut x = target.x;
        let mut y = target.y;
        let mut width = target.width;
        let mut height = target.height;

        if !h_flags.contains(SizeFlags::FILL) {
            width = min.width;
            if h_flags.contains(SizeFlags::SHRINK_END) {
                x += target.width - min.width;
            } else if h_flags.contains(SizeFlags::SHRINK_CENTER) {
                x += ((target.width - min.width) * 0.5).floor();
            }
        }
        if !v_flags.contains(SizeFlags::FILL) {
            height = min.height;
            if v_flags.contains(SizeFlags::SHRINK_END) {
                y += target.height - min.height;
            } else if v_flags.contains(SizeFlags::SHRINK_CENTER) {
                y += ((target.height - min.height) * 0.5).floor();
            }
        }

        self.set_rect(child, Rect::new(x, y, width, height));
        self.set_rotation(child, 0.0);
        self.set_scale(child, Vec2::ONE);
    }

    // ------------------------------------------------------------------
    // Simple strategies
    // ------------------------------------------------------------------

    /// Center: every child gets its combined minimum, centered in the
    /// container.
    fn sort_center(&mut self, id: ElementId) {
        let extent = self.elements[id].rect.size();
        for child in self.eligible_children(id) {
            let min = self.combined_min(child);
            let target = Rect::new(
                ((extent.width - min.width) * 0.5).floor(),
                ((extent.height - min.height) * 0.5).floor(),
                min.width,
                min.height,
            );
            self.fit_child(id, child, target);
        }
    }

    /// Padded: children fill the rectangle inside the theme padding.
    fn sort_padded(&mut self, id: ElementId) {
        let extent = self.elements[id].rect.size();
        let pad = self.padding(id);
        let inner = Rect::from_size(extent).inner(pad);
        for child in self.eligible_children(id) {
            self.fit_child(id, child, inner);
        }
    }

    /// Panel: children fill the whole rectangle.
    fn sort_panel(&mut self, id: ElementId) {
        let extent = self.elements[id].rect.size();
        for child in self.eligible_children(id) {
            self.fit_child(id, child, Rect::from_size(extent));
        }
    }

    /// Scroll: children are sized to at least the viewport on enabled axes
    /// and shifted by the (clamped) scroll offset.
    fn sort_scroll(
        &mut self,
        id: ElementId,
        offset: Vec2,
        horizontal: ScrollMode,
        vertical: ScrollMode,
    ) {
        let viewport = self.elements[id].rect.size();

        // Content extent decides how far the offset may go.
        let mut content = Size::ZERO;
        let children = self.eligible_children(id);
        for &child in &children {
            content = content.max(self.combined_min(child));
        }
        let clamped = Vec2::new(
            match horizontal {
                ScrollMode::Enabled => offset.x.clamp(0.0, (content.width - viewport.width).max(0.0)),
                ScrollMode::Disabled => 0.0,
            },
            match vertical {
                ScrollMode::Enabled => offset.y.clamp(0.0, (content.height - viewport.height).max(0.0)),
                ScrollMode::Disabled => 0.0,
            },
        );
        if clamped != offset
            && let LayoutStrategy::Scroll { offset: stored, .. } = &mut self.elements[id].strategy
        {
            *stored = clamped;
        }

        for child in children {
            let min = self.combined_min(child);
            let width = match horizontal {
                ScrollMode::Enabled => viewport.width.max(min.width),
                ScrollMode::Disabled => viewport.width,
            };
            let height = match vertical {
                ScrollMode::Enabled => viewport.height.max(min.height),
                ScrollMode::Disabled => viewport.height,
            };
            self.fit_child(
                id,
                child,
                Rect::new(-clamped.x, -clamped.y, width, height),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Orientation;
    use gantry_core::Size;

    fn ui() -> Ui {
        Ui::new(Size::new(200.0, 100.0))
    }

    #[test]
    fn queue_sort_is_idempotent_and_needs_attachment() {
        let mut ui = ui();
        let floating = ui.create(LayoutStrategy::row());
        ui.queue_sort(floating);
        assert!(!ui.sort_pending(floating));

        ui.add_child(ui.root(), floating);
        assert!(ui.sort_pending(floating));
        ui.update();
        assert!(!ui.sort_pending(floating));
    }

    #[test]
    #[should_panic(expected = "not a child of this container")]
    fn fit_child_rejects_foreign_children() {
        let mut ui = ui();
        let a = ui.create_child(ui.root(), LayoutStrategy::row());
        let b = ui.create_child(ui.root(), LayoutStrategy::row());
        let child = ui.create_child(b, LayoutStrategy::Free);
        ui.fit_child(a, child, Rect::new(0.0, 0.0, 10.0, 10.0));
    }

    #[test]
    fn fit_child_shrink_end_aligns_to_the_far_edge() {
        let mut ui = ui();
        let panel = ui.create_child(ui.root(), LayoutStrategy::Panel);
        let child = ui.create_child(panel, LayoutStrategy::Free);
        ui.set_min_size(child, Size::new(30.0, 10.0));
        ui.set_size_flags(child, Orientation::Horizontal, SizeFlags::SHRINK_END)
            .unwrap();
        ui.fit_child(panel, child, Rect::new(0.0, 0.0, 100.0, 40.0));
        let rect = ui.rect(child);
        assert_eq!(rect.x, 70.0);
        assert_eq!(rect.width, 30.0);
        // Vertical axis defaults to FILL: full span.
        assert_eq!(rect.height, 40.0);
    }

    #[test]
    fn fit_child_shrink_center_floors_the_offset() {
        let mut ui = ui();
        let panel = ui.create_child(ui.root(), LayoutStrategy::Panel);
        let child = ui.create_child(panel, LayoutStrategy::Free);
        ui.set_min_size(child, Size::new(30.0, 10.0));
        ui.set_size_flags(child, Orientation::Horizontal, SizeFlags::SHRINK_CENTER)
            .unwrap();
        ui.fit_child(panel, child, Rect::new(0.0, 0.0, 101.0, 40.0));
        // (101 - 30) / 2 = 35.5, floored.
        assert_eq!(ui.rect(child).x, 35.0);
    }

    #[test]
    fn fit_child_resets_transform() {
        let mut ui = ui();
        let panel = ui.create_child(ui.root(), LayoutStrategy::Panel);
        let child = ui.create_child(panel, LayoutStrategy::Free);
        ui.set_rotation(child, 1.2);
        ui.set_scale(child, Vec2::new(2.0, 2.0));
        ui.fit_child(panel, child, Rect::new(0.0, 0.0, 50.0, 50.0));
        assert_eq!(ui.rotation(child), 0.0);
        assert_eq!(ui.scale(child), Vec2::ONE);
    }

    #[test]
    fn center_strategy_centers_min_sized_children() {
        let mut ui = ui();
        let center = ui.create_child(ui.root(), LayoutStrategy::Center);
        let child = ui.create_child(center, LayoutStrategy::Free);
        ui.set_min_size(child, Size::new(40.0, 20.0));
        ui.update();
        // Container fills the 200x100 canvas via the root panel-free chain:
        // the center container is a child of a Free root, so it keeps its
        // min size unless anchored. Anchor it wide first.
        ui.set_anchor_preset(center, crate::AnchorPreset::Full);
        ui.update();
        let rect = ui.rect(child);
        assert_eq!(rect, Rect::new(80.0, 40.0, 40.0, 20.0));
    }

    #[test]
    fn padded_strategy_insets_children() {
        let mut ui = ui();
        let padded = ui.create_child(ui.root(), LayoutStrategy::Padded);
        ui.set_anchor_preset(padded, crate::AnchorPreset::Full);
        ui.set_constant_override(padded, crate::ThemeConstant::PaddingLeft, Some(10.0));
        ui.set_constant_override(padded, crate::ThemeConstant::PaddingTop, Some(5.0));
        let child = ui.create_child(padded, LayoutStrategy::Free);
        ui.update();
        let rect = ui.rect(child);
        assert_eq!(rect.x, 10.0);
        assert_eq!(rect.y, 5.0);
        assert_eq!(rect.width, 190.0);
        assert_eq!(rect.height, 95.0);
    }

    #[test]
    fn padded_strategy_min_size_includes_padding() {
        let mut ui = ui();
        let padded = ui.create_child(ui.root(), LayoutStrategy::Padded);
        ui.set_constant_override(padded, crate::ThemeConstant::PaddingLeft, Some(10.0));
        ui.set_constant_override(padded, crate::ThemeConstant::PaddingRight, Some(10.0));
        let child = ui.create_child(padded, LayoutStrategy::Free);
        ui.set_min_size(child, Size::new(30.0, 20.0));
        assert_eq!(ui.combined_min(padded), Size::new(50.0, 20.0));
    }

    #[test]
    fn scroll_strategy_offsets_and_clamps() {
        let mut ui = ui();
        let scroll = ui.create_child(ui.root(), LayoutStrategy::scroll());
        ui.set_anchor_preset(scroll, crate::AnchorPreset::Full);
        let child = ui.create_child(scroll, LayoutStrategy::Free);
        ui.set_min_size(child, Size::new(500.0, 100.0));
        ui.set_scroll_offset(scroll, Vec2::new(120.0, 50.0));
        ui.update();
        let rect = ui.rect(child);
        assert_eq!(rect.x, -120.0);
        // Vertical content fits the viewport: offset clamps to zero.
        assert_eq!(rect.y, 0.0);
        assert_eq!(rect.width, 500.0);
        assert_eq!(ui.scroll_offset(scroll), Some(Vec2::new(120.0, 0.0)));
    }

    #[test]
    fn scroll_min_size_suppressed_on_enabled_axes() {
        let mut ui = ui();
        let scroll = ui.create_child(ui.root(), LayoutStrategy::scroll());
        let child = ui.create_child(scroll, LayoutStrategy::Free);
        ui.set_min_size(child, Size::new(500.0, 400.0));
        assert_eq!(ui.combined_min(scroll), Size::ZERO);
    }

    #[test]
    fn hidden_children_are_skipped() {
        let mut ui = ui();
        let panel = ui.create_child(ui.root(), LayoutStrategy::Panel);
        let child = ui.create_child(panel, LayoutStrategy::Free);
        ui.set_min_size(child, Size::new(50.0, 50.0));
        ui.set_visible(child, false);
        assert_eq!(ui.combined_min(panel), Size::ZERO);
        assert!(ui.eligible_children(panel).is_empty());
    }
}
