#![forbid(unsafe_code)]

//! Dirty flags raised by layout and drained by the renderer.

use bitflags::bitflags;

bitflags! {
    /// Per-element dirtiness accumulated during a layout pass.
    ///
    /// Layout only ever raises these; the renderer takes and clears them
    /// once per frame after reading the resolved rectangles.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct DirtyFlags: u8 {
        /// Position or size changed since the last drain.
        const SIZE = 1 << 0;
        /// Rotation or scale changed since the last drain.
        const TRANSFORM = 1 << 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_accumulate() {
        let mut f = DirtyFlags::default();
        assert!(f.is_empty());
        f |= DirtyFlags::SIZE;
        f |= DirtyFlags::TRANSFORM;
        assert!(f.contains(DirtyFlags::SIZE | DirtyFlags::TRANSFORM));
    }
}
