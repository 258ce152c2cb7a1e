#![forbid(unsafe_code)]

//! The per-element layout data model.
//!
//! An [`Element`] owns everything the resolver needs: anchors, margins,
//! explicit and intrinsic minimums, size flags, stretch ratio, grow
//! directions, the resolved rectangle, and the focus/hit-test policy fields.
//! Elements never reference each other directly: parent/child and focus
//! links are [`ElementId`] keys resolved through the [`Ui`](crate::Ui)
//! arena at access time.

use bitflags::bitflags;
use gantry_core::{DirtyFlags, Rect, Size, Vec2};

use crate::anchors::AnchorPreset;
use crate::strategy::LayoutStrategy;
use crate::theme::{THEME_CONSTANT_COUNT, ThemeCache};
use crate::tree::ElementId;

bitflags! {
    /// Per-axis sizing policy a parent container honors when placing a child.
    ///
    /// `FILL` and `EXPAND` are independent: `EXPAND` opts the child into
    /// stretch distribution (it may be handed more than its minimum), while
    /// `FILL` controls whether the child is stretched to its full allotted
    /// span or shrunk to its minimum and aligned within the span.
    /// `SHRINK_BEGIN` is the empty set.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct SizeFlags: u8 {
        /// Stretch the child to its full allotted span.
        const FILL = 1 << 0;
        /// Participate in leftover-space distribution among siblings.
        const EXPAND = 1 << 1;
        /// Shrink to minimum and center within the allotted span.
        const SHRINK_CENTER = 1 << 2;
        /// Shrink to minimum and align to the end of the allotted span.
        const SHRINK_END = 1 << 3;
    }
}

impl SizeFlags {
    /// Shrink to minimum and align to the start of the allotted span.
    pub const SHRINK_BEGIN: Self = Self::empty();

    /// Fill the allotted span and take part in stretch distribution.
    pub const FILL_EXPAND: Self = Self::FILL.union(Self::EXPAND);

    /// Whether this combination is internally consistent.
    ///
    /// `FILL` stretches to the full span; `SHRINK_CENTER`/`SHRINK_END`
    /// shrink to minimum and align; asking for both at once is
    /// contradictory and is rejected where the flags are set.
    pub fn is_coherent(self) -> bool {
        !(self.contains(Self::FILL)
            && self.intersects(Self::SHRINK_CENTER | Self::SHRINK_END))
    }
}

impl Default for SizeFlags {
    fn default() -> Self {
        Self::FILL
    }
}

/// Which side of an element absorbs extra size when its combined minimum
/// exceeds the anchor-derived extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GrowDirection {
    /// Grow toward the start (left/top): the origin shifts back.
    Begin,
    /// Grow toward the end (right/bottom): the origin stays put.
    #[default]
    End,
    /// Grow both ways: the origin shifts back by half the deficit.
    Both,
}

/// How an element participates in keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusMode {
    /// The element cannot take focus.
    #[default]
    None,
    /// The element takes focus on click only.
    Click,
    /// The element takes focus on click and via keyboard traversal.
    All,
}

/// How an element participates in pointer hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MouseFilter {
    /// The element claims hits over its rectangle.
    #[default]
    Stop,
    /// The element never claims hits, but its children still can.
    Ignore,
    /// Neither the element nor its children receive hits.
    None,
}

/// One edge of an element's rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Top,
    Right,
    Bottom,
}

/// One of the two layout axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Fractional positions within the parent's rectangle that each edge tracks.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Anchors {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

/// Fixed pixel offsets added to the anchor-projected edge positions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Margins {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

/// Intrinsic-minimum-size callback implemented by widget content.
///
/// Widgets report the smallest rectangle their content needs (text metrics,
/// icon size, padding). The result is cached on the element; call
/// [`Ui::invalidate_min_size`](crate::Ui::invalidate_min_size) whenever any
/// input to this computation changes.
pub trait Measure: std::any::Any {
    /// The smallest size the content can be rendered at, in pixels.
    fn min_size(&self) -> Size;
}

/// Focus links. These are lookup keys, not owning references; a stale key
/// (target destroyed) is treated as absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct FocusLinks {
    pub next: Option<ElementId>,
    pub prev: Option<ElementId>,
    pub left: Option<ElementId>,
    pub top: Option<ElementId>,
    pub right: Option<ElementId>,
    pub bottom: Option<ElementId>,
}

impl FocusLinks {
    pub(crate) fn neighbor(&self, side: Side) -> Option<ElementId> {
        match side {
            Side::Left => self.left,
            Side::Top => self.top,
            Side::Right => self.right,
            Side::Bottom => self.bottom,
        }
    }

    pub(crate) fn neighbor_mut(&mut self, side: Side) -> &mut Option<ElementId> {
        match side {
            Side::Left => &mut self.left,
            Side::Top => &mut self.top,
            Side::Right => &mut self.right,
            Side::Bottom => &mut self.bottom,
        }
    }

    /// Drop every link pointing at `target`.
    pub(crate) fn release(&mut self, target: ElementId) {
        for slot in [
            &mut self.next,
            &mut self.prev,
            &mut self.left,
            &mut self.top,
            &mut self.right,
            &mut self.bottom,
        ] {
            if *slot == Some(target) {
                *slot = None;
            }
        }
    }
}

/// A node in the layout tree.
pub struct Element {
    pub(crate) parent: Option<ElementId>,
    pub(crate) children: Vec<ElementId>,
    pub(crate) attached: bool,

    pub(crate) anchors: Anchors,
    pub(crate) margins: Margins,
    pub(crate) last_preset: Option<AnchorPreset>,

    /// Externally settable floor.
    pub(crate) min_size: Size,
    /// Cached intrinsic minimum, recomputed lazily.
    pub(crate) internal_min: Size,
    pub(crate) min_size_dirty: bool,
    /// Change gate for upward propagation.
    pub(crate) last_combined_min: Size,

    /// Last resolved placement, relative to the parent.
    pub(crate) rect: Rect,
    /// Rect was written while detached; margins re-derive on first resolve
    /// so the stored placement survives attachment.
    pub(crate) pending_margin_recompute: bool,
    pub(crate) rotation: f32,
    pub(crate) scale: Vec2,
    pub(crate) dirty: DirtyFlags,

    pub(crate) h_size_flags: SizeFlags,
    pub(crate) v_size_flags: SizeFlags,
    pub(crate) stretch_ratio: f32,
    pub(crate) h_grow: GrowDirection,
    pub(crate) v_grow: GrowDirection,

    pub(crate) strategy: LayoutStrategy,
    pub(crate) pending_sort: bool,

    pub(crate) visible: bool,
    pub(crate) enabled: bool,

    pub(crate) focus_mode: FocusMode,
    pub(crate) focus: FocusLinks,
    pub(crate) mouse_filter: MouseFilter,

    pub(crate) content: Option<Box<dyn Measure>>,

    pub(crate) constant_overrides: [Option<f32>; THEME_CONSTANT_COUNT],
    pub(crate) constant_cache: Option<ThemeCache>,
}

impl Element {
    pub(crate) fn new(strategy: LayoutStrategy) -> Self {
        // Containers default to letting pointer events fall through to the
        // children they arrange.
        let mouse_filter = if strategy.is_container() {
            MouseFilter::Ignore
        } else {
            MouseFilter::Stop
        };
        Self {
            parent: None,
            children: Vec::new(),
            attached: false,
            anchors: Anchors::default(),
            margins: Margins::default(),
            last_preset: None,
            min_size: Size::ZERO,
            internal_min: Size::ZERO,
            min_size_dirty: true,
            last_combined_min: Size::ZERO,
            rect: Rect::default(),
            pending_margin_recompute: false,
            rotation: 0.0,
            scale: Vec2::ONE,
            dirty: DirtyFlags::empty(),
            h_size_flags: SizeFlags::FILL,
            v_size_flags: SizeFlags::FILL,
            stretch_ratio: 1.0,
            h_grow: GrowDirection::default(),
            v_grow: GrowDirection::default(),
            strategy,
            pending_sort: false,
            visible: true,
            enabled: true,
            focus_mode: FocusMode::default(),
            focus: FocusLinks::default(),
            mouse_filter,
            content: None,
            constant_overrides: [None; THEME_CONSTANT_COUNT],
            constant_cache: None,
        }
    }

    /// The true minimum the layout math enforces: the component-wise max of
    /// the explicit and (cached) intrinsic minimums. Derived, never stored.
    #[inline]
    pub(crate) fn combined_min_cached(&self) -> Size {
        self.min_size.max(self.internal_min)
    }

    /// Whether the element takes part in layout at all.
    #[inline]
    pub(crate) fn participates(&self) -> bool {
        self.enabled && self.visible
    }

    #[inline]
    pub(crate) fn size_flags(&self, horizontal: bool) -> SizeFlags {
        if horizontal {
            self.h_size_flags
        } else {
            self.v_size_flags
        }
    }
}
