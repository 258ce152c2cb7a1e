#![forbid(unsafe_code)]

//! Linear-box stretch distribution.
//!
//! Children line up along one axis with fixed separation. Stretchable
//! children (EXPAND flag on the main axis) split the leftover space by
//! stretch ratio through a relaxation loop: any child whose tentative share
//! falls below its minimum is pinned there and removed from the stretching
//! set, and the pass re-runs with the survivors. The set only shrinks, so
//! the loop terminates in at most child-count passes.
//!
//! Shares are floored to whole pixels with a running fractional-pixel error
//! accumulator; whenever the accumulated error reaches a pixel it is paid
//! back to the current child, so rounding loss never under-fills the
//! container. The last child, if stretching, snaps its far edge exactly to
//! the container extent to absorb any residual floating-point drift.

use gantry_core::Rect;
use smallvec::SmallVec;

use crate::Ui;
use crate::strategy::{Alignment, Axis, wants_stretch};
use crate::theme::ThemeConstant;
use crate::tree::ElementId;

/// Per-child scratch state for one distribution pass.
#[derive(Debug, Clone, Copy)]
struct BoxItem {
    id: ElementId,
    min_size: f32,
    ratio: f32,
    will_stretch: bool,
    final_size: f32,
}

impl Ui {
    pub(crate) fn sort_linear_box(&mut self, id: ElementId, axis: Axis, alignment: Alignment) {
        let separation = self.constant(id, ThemeConstant::Separation);
        let extent = self.elements[id].rect.size();
        let (main_extent, cross_extent) = match axis {
            Axis::Row => (extent.width, extent.height),
            Axis::Column => (extent.height, extent.width),
        };

        let children = self.eligible_children(id);
        if children.is_empty() {
            return;
        }

        // Pass 1: baseline minimums and the stretching set.
        let mut items: SmallVec<[BoxItem; 8]> = SmallVec::with_capacity(children.len());
        let mut min_sum = 0.0f32;
        let mut stretch_avail = 0.0f32;
        let mut stretch_ratio_total = 0.0f32;
        for &child in &children {
            let min = self.combined_min(child);
            let el = &self.elements[child];
            let (min_main, flags) = match axis {
                Axis::Row => (min.width, el.h_size_flags),
                Axis::Column => (min.height, el.v_size_flags),
            };
            let will_stretch = wants_stretch(flags);
            min_sum += min_main;
            if will_stretch {
                stretch_avail += min_main;
                stretch_ratio_total += el.stretch_ratio;
            }
            items.push(BoxItem {
                id: child,
                min_size: min_main,
                ratio: el.stretch_ratio,
                will_stretch,
                final_size: min_main,
            });
        }

        // Pass 2: available space. Separation beyond the extent just means
        // zero slack; children still get their minimums.
        let child_count = items.len();
        let available = main_extent - (child_count - 1) as f32 * separation;
        let slack = (available - min_sum).max(0.0);
        stretch_avail += slack;

        // Pass 3: relaxation. Each failed pass pins at least one child to
        // its minimum and shrinks the stretching set.
        let has_stretched = stretch_ratio_total > 0.0;
        while stretch_ratio_total > 0.0 {
            let mut refit_ok = true;
            let mut error = 0.0f32;
            for item in items.iter_mut() {
                if !item.will_stretch {
                    continue;
                }
                let share = stretch_avail * item.ratio / stretch_ratio_total;
                error += share - share.floor();
                if share < item.min_size {
                    // The share cannot honor this child's floor: pin it and
                    // re-run the pass without it.
                    item.will_stretch = false;
                    item.final_size = item.min_size;
                    stretch_ratio_total -= item.ratio;
                    stretch_avail -= item.min_size;
                    refit_ok = false;
                    tracing::debug!(child = ?item.id, min = item.min_size as f64, "demoted to minimum");
                    continue;
                }
                item.final_size = share.floor();
                if error >= 1.0 {
                    item.final_size += 1.0;
                    error -= 1.0;
                }
            }
            if refit_ok {
                break;
            }
        }

        // Pass 4: placement. A single alignment offset applies only when
        // nothing ever wanted to stretch.
        let mut offset = if has_stretched {
            0.0
        } else {
            match alignment {
                Alignment::Begin => 0.0,
                Alignment::Center => (slack * 0.5).floor(),
                Alignment::End => slack,
            }
        };

        for (idx, item) in items.iter().enumerate() {
            if idx > 0 {
                offset += separation;
            }
            let from = offset;
            let mut to = offset + item.final_size;
            if item.will_stretch && idx == child_count - 1 {
                // The trailing stretch child absorbs any numerical drift so
                // its far edge lands exactly on the container extent.
                to = main_extent;
            }
            let size = to - from;
            let target = match axis {
                Axis::Row => Rect::new(from, 0.0, size, cross_extent),
                Axis::Column => Rect::new(0.0, from, cross_extent, size),
            };
            self.fit_child(id, item.id, target);
            offset = to;
        }
    }
}
