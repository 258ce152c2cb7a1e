#![forbid(unsafe_code)]

//! Pointer hit testing against resolved rectangles.

use crate::Ui;
use crate::element::MouseFilter;
use crate::tree::ElementId;

impl Ui {
    /// How the element participates in hit testing.
    pub fn mouse_filter(&self, id: ElementId) -> MouseFilter {
        self.elements[id].mouse_filter
    }

    pub fn set_mouse_filter(&mut self, id: ElementId, filter: MouseFilter) {
        self.elements[id].mouse_filter = filter;
    }

    /// The topmost element under the given canvas-space point.
    ///
    /// Children are tested front-to-back (last child draws on top) before
    /// the element itself; [`MouseFilter::None`] prunes a whole subtree,
    /// [`MouseFilter::Ignore`] skips only the element.
    pub fn hit(&self, x: f32, y: f32) -> Option<ElementId> {
        self.hit_from(self.root, x, y)
    }

    fn hit_from(&self, id: ElementId, x: f32, y: f32) -> Option<ElementId> {
        let el = &self.elements[id];
        if !el.enabled || !el.visible || el.mouse_filter == MouseFilter::None {
            return None;
        }
        for &child in el.children.iter().rev() {
            if let Some(target) = self.hit_from(child, x, y) {
                return Some(target);
            }
        }
        if el.mouse_filter == MouseFilter::Ignore {
            return None;
        }
        if self.global_rect(id).contains(x, y) {
            Some(id)
        } else {
            None
        }
    }

    /// Whether a canvas-space point falls inside the element's resolved
    /// rectangle.
    pub fn has_point(&self, id: ElementId, x: f32, y: f32) -> bool {
        self.global_rect(id).contains(x, y)
    }
}
