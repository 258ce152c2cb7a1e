#![forbid(unsafe_code)]

//! Constraint-based layout for a retained-mode UI scene graph.
//!
//! The engine resolves, for every visible element, a concrete pixel
//! rectangle from declarative constraints (anchors, margins, intrinsic
//! minimum size, size flags, stretch ratios) and re-resolves incrementally
//! when inputs change, without re-laying the whole tree every frame:
//!
//! - [`Ui`] owns the element arena and drives resolution. Bottom-up
//!   minimum-size propagation settles at mutation time (change-gated, so it
//!   cannot loop); top-down re-sorts are deferred to the per-frame
//!   [`Ui::update`] tick.
//! - [`LayoutStrategy`] selects container behavior as plain data: linear
//!   boxes with stretch distribution, centering, padding frames, panels,
//!   and scrolling viewports.
//! - Focus-neighbor queries and pointer hit testing run against the
//!   resolved rectangles for the input system.
//!
//! ```
//! use gantry_core::Size;
//! use gantry_layout::{LayoutStrategy, Ui};
//!
//! let mut ui = Ui::new(Size::new(640.0, 480.0));
//! let row = ui.create_child(ui.root(), LayoutStrategy::row());
//! ui.set_anchor_preset(row, gantry_layout::AnchorPreset::Full);
//! let left = ui.create_child(row, LayoutStrategy::Free);
//! ui.set_min_size(left, Size::new(120.0, 0.0));
//! ui.update();
//! assert_eq!(ui.rect(left).x, 0.0);
//! ```

pub mod anchors;
pub mod container;
pub mod element;
pub mod focus;
pub mod hit;
pub mod linear_box;
pub mod strategy;
pub mod theme;
pub mod tree;

pub use anchors::AnchorPreset;
pub use element::{
    Anchors, Element, FocusMode, GrowDirection, Margins, Measure, MouseFilter, Orientation, Side,
    SizeFlags,
};
pub use focus::MAX_NEIGHBOR_SEARCH_COUNT;
pub use gantry_core::{DirtyFlags, Rect, Sides, Size, Vec2};
pub use strategy::{Alignment, Axis, LayoutStrategy, ScrollMode, StrategyKind};
pub use theme::{Theme, ThemeConstant};
pub use tree::{ElementId, Ui};

use thiserror::Error;

/// Conditions the public API rejects instead of silently coercing.
///
/// Degenerate numeric states (negative slack, zero-sized parents) are not
/// errors: they clamp and produce a degraded but stable layout. Structural
/// ownership violations are not errors either: they panic.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum LayoutError {
    #[error("size flags combine FILL with a SHRINK alignment on the {0:?} axis")]
    ContradictorySizeFlags(Orientation),
    #[error("stretch ratio must be finite and positive, got {0}")]
    InvalidStretchRatio(f32),
}
