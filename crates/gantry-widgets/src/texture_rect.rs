#![forbid(unsafe_code)]

//! A rectangle displaying a texture region.

use gantry_core::Size;
use gantry_layout::Measure;

/// How the texture relates to the element's resolved rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StretchMode {
    /// The element reserves the full texture size.
    #[default]
    Keep,
    /// The texture scales to whatever rectangle layout resolves; the
    /// element imposes no minimum of its own.
    Scale,
}

/// The widget holds only what layout needs: the source region's pixel size
/// and the stretch policy. Sampling and drawing are the renderer's job.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextureRect {
    texture_size: Size,
    stretch: StretchMode,
}

impl TextureRect {
    pub fn new(texture_size: Size) -> Self {
        Self {
            texture_size,
            stretch: StretchMode::Keep,
        }
    }

    /// Set the stretch mode (builder-style).
    pub fn stretch(mut self, stretch: StretchMode) -> Self {
        self.stretch = stretch;
        self
    }

    pub fn texture_size(&self) -> Size {
        self.texture_size
    }

    /// Swap the displayed region. Invalidate the owning element's minimum
    /// afterwards.
    pub fn set_texture_size(&mut self, size: Size) {
        self.texture_size = size;
    }
}

impl Measure for TextureRect {
    fn min_size(&self) -> Size {
        match self.stretch {
            StretchMode::Keep => self.texture_size,
            StretchMode::Scale => Size::ZERO,
        }
    }
}
