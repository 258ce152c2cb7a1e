#![forbid(unsafe_code)]

//! Focus queries.
//!
//! Directional navigation follows an explicit per-side override when one is
//! set (chains of overrides are bounded so a misconfigured cycle cannot
//! hang the caller), and otherwise falls back to a geometric search over
//! the whole tree: project every focusable element's corners onto the
//! search direction, discard candidates behind the source, and pick the one
//! whose facing edges sit closest to ours. The scan is full-tree on every
//! call; focus changes at input rate, not frame rate.

use gantry_core::segment_distance;

use crate::Ui;
use crate::element::{FocusMode, Side};
use crate::tree::ElementId;

/// Upper bound on explicit-override hops, guarding against override cycles
/// formed by misconfiguration.
pub const MAX_NEIGHBOR_SEARCH_COUNT: usize = 512;

/// Candidates at the same depth along the search axis still count as "not
/// behind" within this tolerance.
const PROJECTION_FUZZ: f32 = 1e-5;

impl Ui {
    /// How the element participates in focus.
    pub fn focus_mode(&self, id: ElementId) -> FocusMode {
        self.elements[id].focus_mode
    }

    pub fn set_focus_mode(&mut self, id: ElementId, mode: FocusMode) {
        self.elements[id].focus_mode = mode;
    }

    /// Explicitly route a directional query to a specific element instead
    /// of the geometric search. `None` restores the default.
    pub fn set_focus_neighbor(&mut self, id: ElementId, side: Side, target: Option<ElementId>) {
        *self.elements[id].focus.neighbor_mut(side) = target;
    }

    /// The explicit directional override, if any.
    pub fn focus_neighbor_override(&self, id: ElementId, side: Side) -> Option<ElementId> {
        self.elements[id].focus.neighbor(side)
    }

    /// Explicit successor in tab order. `None` restores tree order.
    pub fn set_focus_next(&mut self, id: ElementId, target: Option<ElementId>) {
        self.elements[id].focus.next = target;
    }

    /// Explicit predecessor in tab order. `None` restores tree order.
    pub fn set_focus_prev(&mut self, id: ElementId, target: Option<ElementId>) {
        self.elements[id].focus.prev = target;
    }

    fn focusable(&self, id: ElementId) -> bool {
        let Some(el) = self.elements.get(id) else {
            return false;
        };
        el.attached && el.enabled && el.visible && el.focus_mode == FocusMode::All
    }

    /// The element focus should move to in the given direction.
    pub fn focus_neighbor(&self, id: ElementId, side: Side) -> Option<ElementId> {
        let mut current = id;
        for _ in 0..MAX_NEIGHBOR_SEARCH_COUNT {
            match self.elements[current].focus.neighbor(side) {
                Some(next) if self.elements.contains_key(next) => {
                    if self.focusable(next) {
                        return Some(next);
                    }
                    // Follow the override chain through unfocusable hops.
                    current = next;
                }
                _ => {
                    if current == id {
                        return self.geometric_neighbor(id, side);
                    }
                    return None;
                }
            }
        }
        None
    }

    fn geometric_neighbor(&self, id: ElementId, side: Side) -> Option<ElementId> {
        let dir = match side {
            Side::Left => gantry_core::Vec2::new(-1.0, 0.0),
            Side::Top => gantry_core::Vec2::new(0.0, -1.0),
            Side::Right => gantry_core::Vec2::new(1.0, 0.0),
            Side::Bottom => gantry_core::Vec2::new(0.0, 1.0),
        };

        let source = self.global_rect(id);
        let source_corners = source.corners();
        let mut source_max = f32::NEG_INFINITY;
        for corner in source_corners {
            source_max = source_max.max(dir.dot(corner));
        }

        let mut best_dist = f32::INFINITY;
        let mut best: Option<ElementId> = None;
        self.scan_for_neighbor(
            self.root,
            id,
            dir,
            &source_corners,
            source_max,
            &mut best_dist,
            &mut best,
        );
        best
    }

    #[allow(clippy::too_many_arguments)]
    fn scan_for_neighbor(
        &self,
        at: ElementId,
        source: ElementId,
        dir: gantry_core::Vec2,
        source_corners: &[gantry_core::Vec2; 4],
        source_max: f32,
        best_dist: &mut f32,
        best: &mut Option<ElementId>,
    ) {
        if at != source && self.focusable(at) {
            let corners = self.global_rect(at).corners();
            let mut candidate_min = f32::INFINITY;
            for corner in corners {
                candidate_min = candidate_min.min(dir.dot(corner));
            }
            // Only consider elements that are not behind us along the
            // search direction; the fuzz keeps same-depth siblings in play.
            if candidate_min > source_max - PROJECTION_FUZZ {
                for i in 0..4 {
                    let sa = source_corners[i];
                    let sb = source_corners[(i + 1) % 4];
                    for j in 0..4 {
                        let ca = corners[j];
                        let cb = corners[(j + 1) % 4];
                        let d = segment_distance(sa, sb, ca, cb);
                        if d < *best_dist {
                            *best_dist = d;
                            *best = Some(at);
                        }
                    }
                }
            }
        }
        for &child in &self.elements[at].children {
            self.scan_for_neighbor(child, source, dir, source_corners, source_max, best_dist, best);
        }
    }

    /// Preorder ids under the root, in child order.
    fn preorder(&self) -> Vec<ElementId> {
        let mut out = Vec::with_capacity(self.elements.len());
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            out.push(id);
            for &child in self.elements[id].children.iter().rev() {
                stack.push(child);
            }
        }
        out
    }

    /// The next focusable element in tab order: the explicit link if it is
    /// valid, otherwise the next focusable element in preorder, wrapping.
    pub fn focus_next(&self, id: ElementId) -> Option<ElementId> {
        if let Some(next) = self.elements[id].focus.next
            && self.focusable(next)
        {
            return Some(next);
        }
        self.step_focus(id, false)
    }

    /// The previous focusable element in tab order.
    pub fn focus_prev(&self, id: ElementId) -> Option<ElementId> {
        if let Some(prev) = self.elements[id].focus.prev
            && self.focusable(prev)
        {
            return Some(prev);
        }
        self.step_focus(id, true)
    }

    fn step_focus(&self, id: ElementId, backwards: bool) -> Option<ElementId> {
        let mut order = self.preorder();
        if backwards {
            order.reverse();
        }
        let pos = order.iter().position(|&e| e == id)?;
        let len = order.len();
        (1..len)
            .map(|offset| order[(pos + offset) % len])
            .find(|&candidate| candidate != id && self.focusable(candidate))
    }
}
