#![forbid(unsafe_code)]

//! Push buttons: a label plus padding.

use gantry_core::{Sides, Size};
use gantry_layout::Measure;

use crate::label::{FontMetrics, Label};

/// A button's intrinsic minimum is its label's box grown by the padding on
/// each side.
#[derive(Debug, Clone)]
pub struct Button {
    label: Label,
    padding: Sides,
}

impl Button {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            label: Label::new(text),
            padding: Sides::all(6.0),
        }
    }

    /// Set the padding (builder-style).
    pub fn padding(mut self, padding: Sides) -> Self {
        self.padding = padding;
        self
    }

    /// Set the label font metrics (builder-style).
    pub fn metrics(mut self, metrics: FontMetrics) -> Self {
        self.label = std::mem::take(&mut self.label).metrics(metrics);
        self
    }

    pub fn text(&self) -> &str {
        self.label.text()
    }

    /// Replace the button text. Invalidate the owning element's minimum
    /// afterwards.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.label.set_text(text);
    }
}

impl Measure for Button {
    fn min_size(&self) -> Size {
        let inner = self.label.min_size();
        Size::new(
            inner.width + self.padding.horizontal_sum(),
            inner.height + self.padding.vertical_sum(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_grows_the_label_box() {
        let button = Button::new("ok").padding(Sides::new(4.0, 2.0, 4.0, 2.0));
        // "ok" is 2 glyphs * 8px; one line of 16px.
        assert_eq!(button.min_size(), Size::new(24.0, 20.0));
    }

    #[test]
    fn text_change_changes_the_minimum() {
        let mut button = Button::new("ok");
        let before = button.min_size();
        button.set_text("confirm");
        assert!(button.min_size().width > before.width);
    }
}
