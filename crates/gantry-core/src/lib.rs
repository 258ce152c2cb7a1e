#![forbid(unsafe_code)]

//! Shared primitives for the Gantry layout engine.
//!
//! This crate holds the geometric types every other crate speaks in
//! ([`Rect`], [`Size`], [`Sides`], [`Vec2`]) plus the dirty flags a renderer
//! consumes between frames. All quantities are `f32` pixels with a top-left
//! origin (y grows downward).

pub mod flags;
pub mod geometry;

pub use flags::DirtyFlags;
pub use geometry::{Rect, Sides, Size, Vec2, segment_distance};
