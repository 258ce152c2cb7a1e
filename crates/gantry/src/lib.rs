#![forbid(unsafe_code)]

//! Gantry public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for users. It
//! re-exports the engine types from the internal crates and offers a
//! lightweight prelude for day-to-day usage.
//!
//! ```
//! use gantry::prelude::*;
//!
//! let mut ui = Ui::new(Size::new(640.0, 480.0));
//! let row = ui.create_child(ui.root(), LayoutStrategy::row());
//! ui.set_anchor_preset(row, AnchorPreset::Full);
//! let label = ui.create_child(row, LayoutStrategy::Free);
//! ui.set_content(label, Box::new(Label::new("hello")));
//! ui.update();
//! assert!(ui.rect(label).width > 0.0);
//! ```

// --- Core re-exports -------------------------------------------------------

pub use gantry_core::{DirtyFlags, Rect, Sides, Size, Vec2, segment_distance};

// --- Layout re-exports -----------------------------------------------------

pub use gantry_layout::{
    Alignment, AnchorPreset, Anchors, Axis, ElementId, FocusMode, GrowDirection, LayoutError,
    LayoutStrategy, MAX_NEIGHBOR_SEARCH_COUNT, Margins, Measure, MouseFilter, Orientation,
    ScrollMode, Side, SizeFlags, StrategyKind, Theme, ThemeConstant, Ui,
};

// --- Widget re-exports -----------------------------------------------------

pub use gantry_widgets::{Button, FontMetrics, Label, ProgressBar, StretchMode, TextureRect};

/// Commonly used types, importable in one line.
pub mod prelude {
    pub use crate::{
        Alignment, AnchorPreset, Axis, Button, ElementId, FocusMode, GrowDirection, Label,
        LayoutStrategy, Measure, Orientation, Rect, ScrollMode, Side, Sides, Size, SizeFlags,
        ThemeConstant, Ui, Vec2,
    };
}
