#![forbid(unsafe_code)]

//! Named anchor presets.
//!
//! A preset deterministically assigns all four anchors and all four margins
//! so that the element's current combined-min-sized box sits at the named
//! position. The 15×4 mapping is table-driven: each preset reduces to a
//! per-axis [`AxisPlacement`], and anchors/margins derive uniformly from
//! that class, so every cell of the table is auditable in one place.
//!
//! An element remembers the last preset applied and re-derives
//! anchors+margins from it on every parent resize, so "snap top-right"
//! keeps meaning top-right instead of drifting to whatever fractions were
//! frozen at application time.

/// Placement of one axis of a preset within the parent extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AxisPlacement {
    /// Pinned to the start edge at combined-min extent.
    Begin,
    /// Centered at combined-min extent.
    Center,
    /// Pinned to the end edge at combined-min extent.
    End,
    /// Stretched across the full parent extent.
    Wide,
}

impl AxisPlacement {
    /// Anchor fractions `(begin_edge, end_edge)` for this placement.
    pub(crate) const fn anchors(self) -> (f32, f32) {
        match self {
            AxisPlacement::Begin => (0.0, 0.0),
            AxisPlacement::Center => (0.5, 0.5),
            AxisPlacement::End => (1.0, 1.0),
            AxisPlacement::Wide => (0.0, 1.0),
        }
    }

    /// Margin offsets `(begin_edge, end_edge)` relative to the anchors
    /// above, positioning a box of combined-min extent `min`.
    pub(crate) fn margins(self, min: f32) -> (f32, f32) {
        match self {
            AxisPlacement::Begin => (0.0, min),
            AxisPlacement::Center => (-0.5 * min, 0.5 * min),
            AxisPlacement::End => (-min, 0.0),
            AxisPlacement::Wide => (0.0, 0.0),
        }
    }
}

/// The 15 named anchor presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorPreset {
    /// Snap to the top-left corner of the parent.
    TopLeft,
    /// Snap to the top-right corner of the parent.
    TopRight,
    /// Snap to the bottom-left corner of the parent.
    BottomLeft,
    /// Snap to the bottom-right corner of the parent.
    BottomRight,
    /// Snap to the center of the parent's left edge.
    CenterLeft,
    /// Snap to the center of the parent's top edge.
    CenterTop,
    /// Snap to the center of the parent's right edge.
    CenterRight,
    /// Snap to the center of the parent's bottom edge.
    CenterBottom,
    /// Snap to the center of the parent.
    Center,
    /// Stretch along the parent's left edge.
    LeftWide,
    /// Stretch along the parent's top edge.
    TopWide,
    /// Stretch along the parent's right edge.
    RightWide,
    /// Stretch along the parent's bottom edge.
    BottomWide,
    /// Stretch along the vertical line that halves the parent.
    VcenterWide,
    /// Stretch along the horizontal line that halves the parent.
    HcenterWide,
    /// Fill the entire parent rectangle.
    Full,
}

impl AnchorPreset {
    /// Every preset, for table audits and exhaustive tests.
    pub const ALL: [AnchorPreset; 16] = [
        AnchorPreset::TopLeft,
        AnchorPreset::TopRight,
        AnchorPreset::BottomLeft,
        AnchorPreset::BottomRight,
        AnchorPreset::CenterLeft,
        AnchorPreset::CenterTop,
        AnchorPreset::CenterRight,
        AnchorPreset::CenterBottom,
        AnchorPreset::Center,
        AnchorPreset::LeftWide,
        AnchorPreset::TopWide,
        AnchorPreset::RightWide,
        AnchorPreset::BottomWide,
        AnchorPreset::VcenterWide,
        AnchorPreset::HcenterWide,
        AnchorPreset::Full,
    ];

    /// The per-axis placement classes `(horizontal, vertical)`.
    pub(crate) const fn placement(self) -> (AxisPlacement, AxisPlacement) {
        use AxisPlacement::*;
        match self {
            AnchorPreset::TopLeft => (Begin, Begin),
            AnchorPreset::TopRight => (End, Begin),
            AnchorPreset::BottomLeft => (Begin, End),
            AnchorPreset::BottomRight => (End, End),
            AnchorPreset::CenterLeft => (Begin, Center),
            AnchorPreset::CenterTop => (Center, Begin),
            AnchorPreset::CenterRight => (End, Center),
            AnchorPreset::CenterBottom => (Center, End),
            AnchorPreset::Center => (Center, Center),
            AnchorPreset::LeftWide => (Begin, Wide),
            AnchorPreset::TopWide => (Wide, Begin),
            AnchorPreset::RightWide => (End, Wide),
            AnchorPreset::BottomWide => (Wide, End),
            AnchorPreset::VcenterWide => (Center, Wide),
            AnchorPreset::HcenterWide => (Wide, Center),
            AnchorPreset::Full => (Wide, Wide),
        }
    }
}
