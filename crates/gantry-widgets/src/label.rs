#![forbid(unsafe_code)]

//! Single- and multi-line text labels.

use gantry_core::Size;
use gantry_layout::Measure;

/// Metrics of the monospace-advance font model the label measures with.
///
/// Real shaping lives outside this crate; layout only needs a stable
/// advance and line height per glyph so minimum sizes are cheap and
/// deterministic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontMetrics {
    /// Horizontal advance per glyph, in pixels.
    pub glyph_advance: f32,
    /// Baseline-to-baseline distance, in pixels.
    pub line_height: f32,
}

impl Default for FontMetrics {
    fn default() -> Self {
        Self {
            glyph_advance: 8.0,
            line_height: 16.0,
        }
    }
}

/// A text label. The intrinsic minimum is the tight box around the text:
/// the longest line times the glyph advance by the line count times the
/// line height.
#[derive(Debug, Clone, Default)]
pub struct Label {
    text: String,
    metrics: FontMetrics,
}

impl Label {
    /// Create a label with default metrics.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            metrics: FontMetrics::default(),
        }
    }

    /// Set the font metrics (builder-style).
    pub fn metrics(mut self, metrics: FontMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// The current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text. The owning element's minimum must be invalidated
    /// afterwards.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    fn columns_and_lines(&self) -> (usize, usize) {
        if self.text.is_empty() {
            return (0, 1);
        }
        let mut columns = 0;
        let mut lines = 0;
        for line in self.text.lines() {
            columns = columns.max(line.chars().count());
            lines += 1;
        }
        (columns, lines.max(1))
    }
}

impl Measure for Label {
    fn min_size(&self) -> Size {
        let (columns, lines) = self.columns_and_lines();
        Size::new(
            columns as f32 * self.metrics.glyph_advance,
            lines as f32 * self.metrics.line_height,
        )
    }
}
