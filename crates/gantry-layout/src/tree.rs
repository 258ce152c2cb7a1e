#![forbid(unsafe_code)]

//! The element arena and the resolution engine.
//!
//! [`Ui`] owns every element in a slotmap arena; parent/child links are ids,
//! and ownership is strictly parent→child, so the tree is acyclic by
//! construction. Resolution is single-threaded and synchronous: bottom-up
//! minimum-size propagation settles at mutation time (change-gated, so it
//! terminates), and top-down re-sorts are deferred to the per-frame
//! [`Ui::update`] tick.

use gantry_core::{DirtyFlags, Rect, Size, Vec2};
use slotmap::{SlotMap, new_key_type};

use crate::LayoutError;
use crate::anchors::AnchorPreset;
use crate::element::{
    Anchors, Element, GrowDirection, Margins, Measure, Orientation, Side, SizeFlags,
};
use crate::strategy::LayoutStrategy;
use crate::theme::Theme;

new_key_type! {
    /// Stable handle to an element in the arena.
    pub struct ElementId;
}

/// The layout tree: element storage, the canvas it resolves against, and
/// the shared theme table.
pub struct Ui {
    pub(crate) elements: SlotMap<ElementId, Element>,
    pub(crate) root: ElementId,
    canvas: Size,
    pub(crate) theme: Theme,
    pub(crate) theme_version: u64,
}

impl Ui {
    /// Create a tree rooted at a canvas of the given size.
    ///
    /// The root element fills the canvas and tracks it across resizes.
    pub fn new(canvas: Size) -> Self {
        let mut elements = SlotMap::with_key();
        let mut root_el = Element::new(LayoutStrategy::Free);
        root_el.anchors = Anchors {
            left: 0.0,
            top: 0.0,
            right: 1.0,
            bottom: 1.0,
        };
        root_el.attached = true;
        // The root is a backdrop, not a widget: hits fall through to it.
        root_el.mouse_filter = crate::element::MouseFilter::Ignore;
        let root = elements.insert(root_el);
        let mut ui = Self {
            elements,
            root,
            canvas,
            theme: Theme::default(),
            theme_version: 0,
        };
        ui.resolve_rect(root);
        ui
    }

    /// The root element.
    #[inline]
    pub fn root(&self) -> ElementId {
        self.root
    }

    /// The canvas extent the root resolves against.
    #[inline]
    pub fn canvas_size(&self) -> Size {
        self.canvas
    }

    /// Resize the canvas and re-resolve from the root.
    pub fn set_canvas_size(&mut self, size: Size) {
        if self.canvas == size {
            return;
        }
        self.canvas = size;
        let root = self.root;
        self.resolve_rect(root);
    }

    /// Whether the id refers to a live element.
    #[inline]
    pub fn contains(&self, id: ElementId) -> bool {
        self.elements.contains_key(id)
    }

    /// Number of live elements (including the root).
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        // The root always exists.
        false
    }

    // ------------------------------------------------------------------
    // Tree structure
    // ------------------------------------------------------------------

    /// Create a detached element. It resolves nothing until attached under
    /// the root via [`Ui::add_child`].
    pub fn create(&mut self, strategy: LayoutStrategy) -> ElementId {
        self.elements.insert(Element::new(strategy))
    }

    /// Create an element and attach it to `parent` in one step.
    pub fn create_child(&mut self, parent: ElementId, strategy: LayoutStrategy) -> ElementId {
        let id = self.create(strategy);
        self.add_child(parent, id);
        id
    }

    /// Attach `child` as the last child of `parent`.
    ///
    /// Panics if `child` already has a parent or if the link would create a
    /// cycle; both are tree-ownership violations.
    pub fn add_child(&mut self, parent: ElementId, child: ElementId) {
        assert!(
            self.elements[child].parent.is_none(),
            "add_child: element already has a parent"
        );
        let mut cursor = Some(parent);
        while let Some(id) = cursor {
            assert!(id != child, "add_child: link would create a cycle");
            cursor = self.elements[id].parent;
        }

        self.elements[child].parent = Some(parent);
        self.elements[parent].children.push(child);

        if self.elements[parent].attached {
            self.enter_tree(child);
        }
        self.on_child_list_changed(parent);
    }

    /// Detach `child` from its parent, keeping it (and its subtree) alive.
    pub fn remove_child(&mut self, child: ElementId) {
        let Some(parent) = self.elements[child].parent else {
            return;
        };
        self.elements[parent].children.retain(|&c| c != child);
        self.elements[child].parent = None;
        self.exit_tree(child);
        self.on_child_list_changed(parent);
    }

    /// Move `child` under a new parent, preserving its subtree.
    pub fn reparent(&mut self, child: ElementId, new_parent: ElementId) {
        self.remove_child(child);
        self.add_child(new_parent, child);
    }

    /// Destroy an element and its whole subtree, releasing any focus links
    /// pointing into it from the rest of the tree.
    pub fn destroy(&mut self, id: ElementId) {
        assert!(id != self.root, "destroy: the root cannot be destroyed");
        self.remove_child(id);

        let mut doomed = Vec::new();
        self.collect_subtree(id, &mut doomed);
        for &dead in &doomed {
            self.elements.remove(dead);
        }
        for (_, el) in self.elements.iter_mut() {
            for &dead in &doomed {
                el.focus.release(dead);
            }
        }
    }

    fn collect_subtree(&self, id: ElementId, out: &mut Vec<ElementId>) {
        out.push(id);
        for &child in &self.elements[id].children {
            self.collect_subtree(child, out);
        }
    }

    /// The element's parent, if attached to one.
    #[inline]
    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.elements[id].parent
    }

    /// The element's children, in layout order.
    #[inline]
    pub fn children(&self, id: ElementId) -> &[ElementId] {
        &self.elements[id].children
    }

    /// Whether the element is reachable from the root.
    #[inline]
    pub fn is_attached(&self, id: ElementId) -> bool {
        self.elements[id].attached
    }

    fn enter_tree(&mut self, id: ElementId) {
        self.elements[id].attached = true;
        let children = self.elements[id].children.clone();
        for child in children {
            self.enter_tree(child);
        }
        self.invalidate_min_size(id);
        self.resolve_rect(id);
        if self.elements[id].strategy.is_container() {
            self.queue_sort(id);
        }
    }

    fn exit_tree(&mut self, id: ElementId) {
        let el = &mut self.elements[id];
        el.attached = false;
        el.pending_sort = false;
        let children = self.elements[id].children.clone();
        for child in children {
            self.exit_tree(child);
        }
    }

    fn on_child_list_changed(&mut self, parent: ElementId) {
        if self.elements[parent].strategy.is_container() {
            self.invalidate_min_size(parent);
            self.queue_sort(parent);
        }
    }

    // ------------------------------------------------------------------
    // Update tick
    // ------------------------------------------------------------------

    /// Per-frame tick: run every pending re-sort, parents before children,
    /// so a container whose size just changed re-sorts before its children
    /// are visited. Call once per frame before rendering reads rects.
    pub fn update(&mut self) {
        let root = self.root;
        self.update_recursive(root);
    }

    fn update_recursive(&mut self, id: ElementId) {
        if self.elements[id].pending_sort {
            self.sort_children(id);
        }
        let children = self.elements[id].children.clone();
        for child in children {
            self.update_recursive(child);
        }
    }

    // ------------------------------------------------------------------
    // Anchor/margin resolution
    // ------------------------------------------------------------------

    /// The rectangle children of `id` anchor against: the element's extent
    /// at the origin (child coordinates are parent-relative).
    pub(crate) fn anchorable_rect_of_parent(&self, id: ElementId) -> Rect {
        match self.elements[id].parent {
            Some(p) => Rect::from_size(self.elements[p].rect.size()),
            None => Rect::from_size(self.canvas),
        }
    }

    /// Resolve this element's rectangle from its anchors, margins, and
    /// combined minimum. No-op on detached elements; the tree never invokes
    /// it before attachment.
    pub(crate) fn resolve_rect(&mut self, id: ElementId) {
        if !self.elements.contains_key(id) || !self.elements[id].attached {
            debug_assert!(
                self.elements.contains_key(id),
                "resolve_rect: dead element"
            );
            return;
        }

        // A remembered preset keeps meaning what it says across parent
        // resizes, rather than freezing the fractions it first produced.
        if let Some(preset) = self.elements[id].last_preset {
            self.apply_preset_tables(id, preset);
        }
        if self.elements[id].pending_margin_recompute {
            self.compute_margins(id);
            self.elements[id].pending_margin_recompute = false;
        }

        let parent_rect = self.anchorable_rect_of_parent(id);
        let min = self.combined_min(id);
        let el = &self.elements[id];
        let (a, m) = (el.anchors, el.margins);
        let (h_grow, v_grow) = (el.h_grow, el.v_grow);

        let left = m.left + a.left * parent_rect.width;
        let top = m.top + a.top * parent_rect.height;
        let right = m.right + a.right * parent_rect.width;
        let bottom = m.bottom + a.bottom * parent_rect.height;

        let mut x = left;
        let mut y = top;
        let mut width = right - left;
        let mut height = bottom - top;

        if min.width > width {
            match h_grow {
                GrowDirection::Begin => x += width - min.width,
                GrowDirection::Both => x += 0.5 * (width - min.width),
                GrowDirection::End => {}
            }
            width = min.width;
        }
        if min.height > height {
            match v_grow {
                GrowDirection::Begin => y += height - min.height,
                GrowDirection::Both => y += 0.5 * (height - min.height),
                GrowDirection::End => {}
            }
            height = min.height;
        }

        self.place(id, Rect::new(x, y, width, height));
    }

    /// Commit a rectangle. If anything moved: raise the dirty flag, bring
    /// margins back in line with the committed rect, queue this element's
    /// own sort if it is a container, and re-resolve children (they anchor
    /// to this rect).
    fn place(&mut self, id: ElementId, new: Rect) {
        let el = &mut self.elements[id];
        let pos_changed = el.rect.x != new.x || el.rect.y != new.y;
        let size_changed = el.rect.width != new.width || el.rect.height != new.height;
        el.rect = new;
        if !pos_changed && !size_changed {
            return;
        }
        if !el.attached {
            el.pending_margin_recompute = true;
            return;
        }
        el.dirty |= DirtyFlags::SIZE;
        self.compute_margins(id);
        tracing::trace!(?id, rect = ?new, "rect committed");
        if self.elements[id].strategy.is_container() {
            self.queue_sort(id);
        }
        let children = self.elements[id].children.clone();
        for child in children {
            self.resolve_rect(child);
        }
    }

    /// Recompute margins so `position = margin + anchor × parent_extent`
    /// holds for the element's current rectangle.
    fn compute_margins(&mut self, id: ElementId) {
        let parent_rect = self.anchorable_rect_of_parent(id);
        let el = &mut self.elements[id];
        el.margins = Margins {
            left: el.rect.x - el.anchors.left * parent_rect.width,
            top: el.rect.y - el.anchors.top * parent_rect.height,
            right: el.rect.right() - el.anchors.right * parent_rect.width,
            bottom: el.rect.bottom() - el.anchors.bottom * parent_rect.height,
        };
    }

    // ------------------------------------------------------------------
    // Minimum size
    // ------------------------------------------------------------------

    /// The enforced floor for the element's resolved size: the larger of
    /// the explicit and intrinsic minimums. Recomputes the intrinsic part
    /// if it is stale.
    pub fn combined_min(&mut self, id: ElementId) -> Size {
        if self.elements[id].min_size_dirty {
            self.calculate_min_size(id);
        }
        self.elements[id].combined_min_cached()
    }

    fn calculate_min_size(&mut self, id: ElementId) {
        let strategy_min = self.strategy_min_size(id);
        let el = &mut self.elements[id];
        let content_min = el
            .content
            .as_ref()
            .map(|c| c.min_size())
            .unwrap_or(Size::ZERO);
        el.internal_min = content_min.max(strategy_min);
        el.min_size_dirty = false;
    }

    /// Mark the intrinsic minimum stale and propagate the change. Widgets
    /// call this whenever any input to their measurement changes.
    ///
    /// Propagation is change-gated: it continues upward only while the
    /// combined value actually moved, which (with the acyclic tree) is the
    /// termination guarantee.
    pub fn invalidate_min_size(&mut self, id: ElementId) {
        self.elements[id].min_size_dirty = true;
        self.update_minimum_size(id);
    }

    fn update_minimum_size(&mut self, id: ElementId) {
        self.calculate_min_size(id);
        let combined = self.elements[id].combined_min_cached();
        if combined == self.elements[id].last_combined_min {
            return;
        }
        self.elements[id].last_combined_min = combined;
        if !self.elements[id].attached {
            return;
        }
        tracing::trace!(?id, min = ?combined, "combined minimum changed");
        if let Some(parent) = self.elements[id].parent {
            self.invalidate_min_size(parent);
            if self.elements[parent].strategy.is_container() {
                self.queue_sort(parent);
            }
        }
        self.resolve_rect(id);
    }

    // ------------------------------------------------------------------
    // Anchors, margins, presets
    // ------------------------------------------------------------------

    /// Set one anchor fraction. Clears any remembered preset.
    ///
    /// A begin-side anchor crossing past its opposite pushes the opposite
    /// along (and symmetrically), so `left ≤ right` and `top ≤ bottom`
    /// always hold. With `keep_margins` the pixel margins are left alone
    /// (edges move); without it margins are rewritten so the edges stay
    /// where they are.
    pub fn set_anchor(&mut self, id: ElementId, side: Side, value: f32, keep_margins: bool) {
        self.elements[id].last_preset = None;
        let parent_rect = self.anchorable_rect_of_parent(id);
        let range = match side {
            Side::Left | Side::Right => parent_rect.width,
            Side::Top | Side::Bottom => parent_rect.height,
        };

        let el = &mut self.elements[id];
        let (anchor, margin, opp_anchor, opp_margin) = match side {
            Side::Left => (
                &mut el.anchors.left,
                &mut el.margins.left,
                &mut el.anchors.right,
                &mut el.margins.right,
            ),
            Side::Right => (
                &mut el.anchors.right,
                &mut el.margins.right,
                &mut el.anchors.left,
                &mut el.margins.left,
            ),
            Side::Top => (
                &mut el.anchors.top,
                &mut el.margins.top,
                &mut el.anchors.bottom,
                &mut el.margins.bottom,
            ),
            Side::Bottom => (
                &mut el.anchors.bottom,
                &mut el.margins.bottom,
                &mut el.anchors.top,
                &mut el.margins.top,
            ),
        };

        let prev_pos = *margin + *anchor * range;
        let prev_opp_pos = *opp_margin + *opp_anchor * range;

        *anchor = value;
        let begin_side = matches!(side, Side::Left | Side::Top);
        if (begin_side && *anchor > *opp_anchor) || (!begin_side && *anchor < *opp_anchor) {
            *opp_anchor = *anchor;
        }
        if !keep_margins {
            *margin = prev_pos - *anchor * range;
            *opp_margin = prev_opp_pos - *opp_anchor * range;
        }

        if self.elements[id].attached {
            self.resolve_rect(id);
        }
    }

    /// Set one pixel margin. Clears any remembered preset.
    pub fn set_margin(&mut self, id: ElementId, side: Side, value: f32) {
        let el = &mut self.elements[id];
        el.last_preset = None;
        match side {
            Side::Left => el.margins.left = value,
            Side::Top => el.margins.top = value,
            Side::Right => el.margins.right = value,
            Side::Bottom => el.margins.bottom = value,
        }
        if el.attached {
            self.resolve_rect(id);
        }
    }

    /// Apply a named preset and remember it: on every later parent resize
    /// the anchors and margins re-derive from the preset first.
    pub fn set_anchor_preset(&mut self, id: ElementId, preset: AnchorPreset) {
        self.elements[id].last_preset = Some(preset);
        self.apply_preset_tables(id, preset);
        if self.elements[id].attached {
            self.resolve_rect(id);
        }
    }

    fn apply_preset_tables(&mut self, id: ElementId, preset: AnchorPreset) {
        let min = self.combined_min(id);
        let (h, v) = preset.placement();
        let (anchor_left, anchor_right) = h.anchors();
        let (anchor_top, anchor_bottom) = v.anchors();
        let (margin_left, margin_right) = h.margins(min.width);
        let (margin_top, margin_bottom) = v.margins(min.height);
        let el = &mut self.elements[id];
        el.anchors = Anchors {
            left: anchor_left,
            top: anchor_top,
            right: anchor_right,
            bottom: anchor_bottom,
        };
        el.margins = Margins {
            left: margin_left,
            top: margin_top,
            right: margin_right,
            bottom: margin_bottom,
        };
    }

    /// Place the element explicitly: anchors reset to zero (the rect is
    /// absolute within the parent) and any remembered preset is forgotten.
    /// Width/height are floored by the explicit minimum. This is the
    /// primitive container strategies place children through.
    pub fn set_rect(&mut self, id: ElementId, rect: Rect) {
        let el = &mut self.elements[id];
        el.last_preset = None;
        el.anchors = Anchors::default();
        let width = rect.width.max(el.min_size.width);
        let height = rect.height.max(el.min_size.height);
        self.place(id, Rect::new(rect.x, rect.y, width, height));
    }

    /// Move the element, keeping its size and anchors.
    pub fn set_position(&mut self, id: ElementId, position: Vec2) {
        let rect = self.elements[id].rect;
        self.place(id, Rect::new(position.x, position.y, rect.width, rect.height));
    }

    /// Resize the element in place. Floored by the explicit minimum.
    pub fn set_size(&mut self, id: ElementId, size: Size) {
        let el = &self.elements[id];
        let rect = el.rect;
        let width = size.width.max(el.min_size.width);
        let height = size.height.max(el.min_size.height);
        self.place(id, Rect::new(rect.x, rect.y, width, height));
    }

    // ------------------------------------------------------------------
    // Element policy setters
    // ------------------------------------------------------------------

    /// Set the externally imposed minimum size.
    pub fn set_min_size(&mut self, id: ElementId, min: Size) {
        let el = &mut self.elements[id];
        if el.min_size == min {
            return;
        }
        el.min_size = min;
        self.invalidate_min_size(id);
    }

    /// The explicit minimum size.
    pub fn min_size(&self, id: ElementId) -> Size {
        self.elements[id].min_size
    }

    /// Set the per-axis sizing policy a parent container honors.
    ///
    /// Contradictory combinations (FILL together with a SHRINK alignment)
    /// are rejected here rather than silently coerced later.
    pub fn set_size_flags(
        &mut self,
        id: ElementId,
        orientation: Orientation,
        flags: SizeFlags,
    ) -> Result<(), LayoutError> {
        if !flags.is_coherent() {
            return Err(LayoutError::ContradictorySizeFlags(orientation));
        }
        let el = &mut self.elements[id];
        match orientation {
            Orientation::Horizontal => el.h_size_flags = flags,
            Orientation::Vertical => el.v_size_flags = flags,
        }
        self.notify_size_policy_changed(id);
        Ok(())
    }

    /// The per-axis sizing policy.
    pub fn size_flags(&self, id: ElementId, orientation: Orientation) -> SizeFlags {
        match orientation {
            Orientation::Horizontal => self.elements[id].h_size_flags,
            Orientation::Vertical => self.elements[id].v_size_flags,
        }
    }

    /// Set the relative share of leftover space among EXPAND siblings.
    pub fn set_stretch_ratio(&mut self, id: ElementId, ratio: f32) -> Result<(), LayoutError> {
        if !(ratio.is_finite() && ratio > 0.0) {
            return Err(LayoutError::InvalidStretchRatio(ratio));
        }
        self.elements[id].stretch_ratio = ratio;
        self.notify_size_policy_changed(id);
        Ok(())
    }

    /// The stretch ratio.
    pub fn stretch_ratio(&self, id: ElementId) -> f32 {
        self.elements[id].stretch_ratio
    }

    fn notify_size_policy_changed(&mut self, id: ElementId) {
        if let Some(parent) = self.elements[id].parent
            && self.elements[parent].strategy.is_container()
        {
            self.queue_sort(parent);
        }
    }

    /// Set which side absorbs extra size when the minimum exceeds the
    /// anchor-derived extent.
    pub fn set_grow_direction(
        &mut self,
        id: ElementId,
        orientation: Orientation,
        grow: GrowDirection,
    ) {
        let el = &mut self.elements[id];
        match orientation {
            Orientation::Horizontal => el.h_grow = grow,
            Orientation::Vertical => el.v_grow = grow,
        }
        if el.attached {
            self.resolve_rect(id);
        }
    }

    /// Show or hide the element. Hidden elements keep their state but stop
    /// participating in layout, hit testing, and focus.
    pub fn set_visible(&mut self, id: ElementId, visible: bool) {
        if self.elements[id].visible == visible {
            return;
        }
        self.elements[id].visible = visible;
        self.notify_participation_changed(id);
    }

    /// Enable or disable the element.
    pub fn set_enabled(&mut self, id: ElementId, enabled: bool) {
        if self.elements[id].enabled == enabled {
            return;
        }
        self.elements[id].enabled = enabled;
        self.notify_participation_changed(id);
    }

    fn notify_participation_changed(&mut self, id: ElementId) {
        if let Some(parent) = self.elements[id].parent
            && self.elements[parent].participates()
            && self.elements[parent].strategy.is_container()
        {
            self.invalidate_min_size(parent);
            self.queue_sort(parent);
        }
    }

    pub fn visible(&self, id: ElementId) -> bool {
        self.elements[id].visible
    }

    pub fn enabled(&self, id: ElementId) -> bool {
        self.elements[id].enabled
    }

    // ------------------------------------------------------------------
    // Content
    // ------------------------------------------------------------------

    /// Attach measurable content; its reported minimum becomes the
    /// element's intrinsic minimum.
    pub fn set_content(&mut self, id: ElementId, content: Box<dyn Measure>) {
        self.elements[id].content = Some(content);
        self.invalidate_min_size(id);
    }

    /// Borrow the element's content, if it is a `T`.
    pub fn content<T: Measure>(&self, id: ElementId) -> Option<&T> {
        let content = self.elements[id].content.as_deref()?;
        (content as &dyn std::any::Any).downcast_ref::<T>()
    }

    /// Mutably borrow the element's content, if it is a `T`.
    ///
    /// Call [`Ui::invalidate_min_size`] afterwards if the mutation changes
    /// what [`Measure::min_size`] reports.
    pub fn content_mut<T: Measure>(&mut self, id: ElementId) -> Option<&mut T> {
        let content = self.elements[id].content.as_deref_mut()?;
        (content as &mut dyn std::any::Any).downcast_mut::<T>()
    }

    // ------------------------------------------------------------------
    // Transform and read-only queries
    // ------------------------------------------------------------------

    /// The last resolved placement, relative to the parent.
    #[inline]
    pub fn rect(&self, id: ElementId) -> Rect {
        self.elements[id].rect
    }

    /// The element's top-left corner in canvas coordinates.
    pub fn global_position(&self, id: ElementId) -> Vec2 {
        let mut pos = Vec2::ZERO;
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            let el = &self.elements[current];
            pos = pos + el.rect.position();
            cursor = el.parent;
        }
        pos
    }

    /// The resolved rectangle in canvas coordinates.
    pub fn global_rect(&self, id: ElementId) -> Rect {
        let pos = self.global_position(id);
        let rect = self.elements[id].rect;
        Rect::new(pos.x, pos.y, rect.width, rect.height)
    }

    /// Set the post-layout rotation, in radians. Layout itself never reads
    /// this; container placement resets it to zero.
    pub fn set_rotation(&mut self, id: ElementId, rotation: f32) {
        let el = &mut self.elements[id];
        if el.rotation != rotation {
            el.rotation = rotation;
            el.dirty |= DirtyFlags::TRANSFORM;
        }
    }

    /// Set the post-layout scale. Reset to identity by container placement.
    pub fn set_scale(&mut self, id: ElementId, scale: Vec2) {
        let el = &mut self.elements[id];
        if el.scale != scale {
            el.scale = scale;
            el.dirty |= DirtyFlags::TRANSFORM;
        }
    }

    pub fn rotation(&self, id: ElementId) -> f32 {
        self.elements[id].rotation
    }

    pub fn scale(&self, id: ElementId) -> Vec2 {
        self.elements[id].scale
    }

    /// Accumulated rotation along the ancestor chain.
    pub fn global_rotation(&self, id: ElementId) -> f32 {
        let mut rotation = 0.0;
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            rotation += self.elements[current].rotation;
            cursor = self.elements[current].parent;
        }
        rotation
    }

    /// Accumulated scale along the ancestor chain.
    pub fn global_scale(&self, id: ElementId) -> Vec2 {
        let mut scale = Vec2::ONE;
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            let s = self.elements[current].scale;
            scale = Vec2::new(scale.x * s.x, scale.y * s.y);
            cursor = self.elements[current].parent;
        }
        scale
    }

    /// The element's anchors.
    pub fn anchors(&self, id: ElementId) -> Anchors {
        self.elements[id].anchors
    }

    /// The element's margins.
    pub fn margins(&self, id: ElementId) -> Margins {
        self.elements[id].margins
    }

    /// Drain the dirty flags raised since the last drain. The renderer
    /// calls this once per frame after reading the resolved rect.
    pub fn take_dirty(&mut self, id: ElementId) -> DirtyFlags {
        std::mem::take(&mut self.elements[id].dirty)
    }
}
