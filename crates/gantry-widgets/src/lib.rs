#![forbid(unsafe_code)]

//! Leaf widgets for Gantry.
//!
//! Widgets here are deliberately thin: each implements
//! [`Measure`](gantry_layout::Measure), the "compute my intrinsic minimum
//! size" callback, and nothing else. Placement, stretching, and alignment
//! all belong to the layout engine; a widget's job is to report the
//! smallest box its content needs and to have
//! [`Ui::invalidate_min_size`](gantry_layout::Ui::invalidate_min_size)
//! called whenever any input to that report changes.

pub mod button;
pub mod label;
pub mod progress;
pub mod texture_rect;

pub use button::Button;
pub use label::{FontMetrics, Label};
pub use progress::ProgressBar;
pub use texture_rect::{StretchMode, TextureRect};
