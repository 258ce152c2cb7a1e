#![forbid(unsafe_code)]

//! Data-selected layout strategies.
//!
//! A container is any element whose strategy is not [`LayoutStrategy::Free`].
//! Strategies are plain data attached to the element: selecting one swaps
//! the sort behavior and the container's minimum-size formula without any
//! subclassing. The formulas here mirror the corresponding sort passes
//! exactly; a container's combined minimum is always recomputed from its
//! children, never incrementally patched.

use gantry_core::{Size, Vec2};

use crate::element::SizeFlags;
use crate::theme::ThemeConstant;
use crate::tree::ElementId;
use crate::Ui;

/// The axis a linear box arranges children along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Left to right.
    Row,
    /// Top to bottom.
    Column,
}

/// Main-axis alignment of a linear box when no child stretched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Begin,
    Center,
    End,
}

/// Per-axis scrolling policy of the scroll strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollMode {
    /// The axis does not scroll; children impose their minimum as usual.
    #[default]
    Disabled,
    /// The axis scrolls; children may exceed the viewport, and their
    /// minimum no longer contributes to the container's own minimum.
    Enabled,
}

/// Strategy discriminant, for dispatch and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    Free,
    LinearBox,
    Center,
    Padded,
    Panel,
    Scroll,
}

/// How a container arranges its children.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LayoutStrategy {
    /// No container behavior: children resolve from their own anchors and
    /// margins against this element's rectangle.
    Free,
    /// Arrange children along one axis with fixed separation, distributing
    /// leftover space among stretchable children.
    LinearBox {
        axis: Axis,
        alignment: Alignment,
    },
    /// Give each child its combined minimum, centered.
    Center,
    /// Single-slot padding frame; padding comes from the theme constants.
    Padded,
    /// Fit children to the full container rectangle.
    Panel,
    /// Offset children by a scroll position, sizing them to at least the
    /// viewport on enabled axes.
    Scroll {
        offset: Vec2,
        horizontal: ScrollMode,
        vertical: ScrollMode,
    },
}

impl LayoutStrategy {
    /// A row-axis linear box with default alignment.
    pub const fn row() -> Self {
        LayoutStrategy::LinearBox {
            axis: Axis::Row,
            alignment: Alignment::Begin,
        }
    }

    /// A column-axis linear box with default alignment.
    pub const fn column() -> Self {
        LayoutStrategy::LinearBox {
            axis: Axis::Column,
            alignment: Alignment::Begin,
        }
    }

    /// A scroll strategy with both axes enabled and a zero offset.
    pub const fn scroll() -> Self {
        LayoutStrategy::Scroll {
            offset: Vec2::ZERO,
            horizontal: ScrollMode::Enabled,
            vertical: ScrollMode::Enabled,
        }
    }

    /// Whether elements with this strategy own their children's layout.
    #[inline]
    pub const fn is_container(&self) -> bool {
        !matches!(self, LayoutStrategy::Free)
    }

    /// The discriminant, for dispatch and diagnostics.
    pub const fn kind(&self) -> StrategyKind {
        match self {
            LayoutStrategy::Free => StrategyKind::Free,
            LayoutStrategy::LinearBox { .. } => StrategyKind::LinearBox,
            LayoutStrategy::Center => StrategyKind::Center,
            LayoutStrategy::Padded => StrategyKind::Padded,
            LayoutStrategy::Panel => StrategyKind::Panel,
            LayoutStrategy::Scroll { .. } => StrategyKind::Scroll,
        }
    }
}

impl Ui {
    /// The container's own intrinsic minimum: a pure function of its
    /// children's combined minimums and the strategy's policy constants.
    pub(crate) fn strategy_min_size(&mut self, id: ElementId) -> Size {
        match self.elements[id].strategy {
            LayoutStrategy::Free => Size::ZERO,
            LayoutStrategy::LinearBox { axis, .. } => self.linear_box_min_size(id, axis),
            LayoutStrategy::Center | LayoutStrategy::Panel => self.max_child_min_size(id),
            LayoutStrategy::Padded => {
                let base = self.max_child_min_size(id);
                let pad = self.padding(id);
                Size::new(
                    base.width + pad.horizontal_sum(),
                    base.height + pad.vertical_sum(),
                )
            }
            LayoutStrategy::Scroll {
                horizontal,
                vertical,
                ..
            } => {
                let base = self.max_child_min_size(id);
                Size::new(
                    if horizontal == ScrollMode::Disabled {
                        base.width
                    } else {
                        0.0
                    },
                    if vertical == ScrollMode::Disabled {
                        base.height
                    } else {
                        0.0
                    },
                )
            }
        }
    }

    /// Component-wise maximum over participating children's minimums.
    fn max_child_min_size(&mut self, id: ElementId) -> Size {
        let children = self.elements[id].children.clone();
        let mut out = Size::ZERO;
        for child in children {
            if !self.elements[child].participates() {
                continue;
            }
            out = out.max(self.combined_min(child));
        }
        out
    }

    /// Sum of minimums plus separation along the main axis, maximum across
    /// the cross axis, the same formula the distribution pass assumes.
    fn linear_box_min_size(&mut self, id: ElementId, axis: Axis) -> Size {
        let separation = self.constant(id, ThemeConstant::Separation);
        let children = self.elements[id].children.clone();
        let mut main = 0.0f32;
        let mut cross = 0.0f32;
        let mut first = true;
        for child in children {
            if !self.elements[child].participates() {
                continue;
            }
            let min = self.combined_min(child);
            let (child_main, child_cross) = match axis {
                Axis::Row => (min.width, min.height),
                Axis::Column => (min.height, min.width),
            };
            main += child_main;
            if !first {
                main += separation;
            }
            cross = cross.max(child_cross);
            first = false;
        }
        match axis {
            Axis::Row => Size::new(main, cross),
            Axis::Column => Size::new(cross, main),
        }
    }

    /// The padded strategy's inset, from the theme constant table.
    pub(crate) fn padding(&mut self, id: ElementId) -> gantry_core::Sides {
        gantry_core::Sides::new(
            self.constant(id, ThemeConstant::PaddingLeft),
            self.constant(id, ThemeConstant::PaddingTop),
            self.constant(id, ThemeConstant::PaddingRight),
            self.constant(id, ThemeConstant::PaddingBottom),
        )
    }

    /// Update a linear box's alignment.
    pub fn set_alignment(&mut self, id: ElementId, alignment: Alignment) {
        if let LayoutStrategy::LinearBox {
            alignment: current, ..
        } = &mut self.elements[id].strategy
        {
            if *current != alignment {
                *current = alignment;
                self.queue_sort(id);
            }
        }
    }

    /// Update a scroll strategy's offset. The offset is clamped against the
    /// content extent at sort time.
    pub fn set_scroll_offset(&mut self, id: ElementId, offset: Vec2) {
        if let LayoutStrategy::Scroll {
            offset: current, ..
        } = &mut self.elements[id].strategy
        {
            if *current != offset {
                *current = offset;
                self.queue_sort(id);
            }
        }
    }

    /// The scroll offset, if the element uses the scroll strategy.
    pub fn scroll_offset(&self, id: ElementId) -> Option<Vec2> {
        match self.elements[id].strategy {
            LayoutStrategy::Scroll { offset, .. } => Some(offset),
            _ => None,
        }
    }
}

/// Whether a child wants to stretch along the given orientation.
pub(crate) fn wants_stretch(flags: SizeFlags) -> bool {
    flags.contains(SizeFlags::EXPAND)
}
