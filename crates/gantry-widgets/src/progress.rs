#![forbid(unsafe_code)]

//! A horizontal progress bar.

use gantry_core::Size;
use gantry_layout::Measure;

/// The bar reserves a usable track length and thickness; the fill fraction
/// is renderer state and never affects layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressBar {
    min_track: f32,
    thickness: f32,
    fraction: f32,
}

impl ProgressBar {
    pub fn new() -> Self {
        Self {
            min_track: 48.0,
            thickness: 8.0,
            fraction: 0.0,
        }
    }

    /// Set the minimum track length (builder-style).
    pub fn min_track(mut self, min_track: f32) -> Self {
        self.min_track = min_track;
        self
    }

    /// Set the bar thickness (builder-style).
    pub fn thickness(mut self, thickness: f32) -> Self {
        self.thickness = thickness;
        self
    }

    /// Completed fraction in `[0, 1]`.
    pub fn fraction(&self) -> f32 {
        self.fraction
    }

    /// Set the completed fraction, clamped to `[0, 1]`. Layout is
    /// unaffected, so no invalidation is needed.
    pub fn set_fraction(&mut self, fraction: f32) {
        self.fraction = fraction.clamp(0.0, 1.0);
    }
}

impl Default for ProgressBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Measure for ProgressBar {
    fn min_size(&self) -> Size {
        Size::new(self.min_track, self.thickness)
    }
}
