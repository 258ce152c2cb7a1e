#![forbid(unsafe_code)]

//! Theme constants that feed layout.
//!
//! A small fixed-key table: the [`Ui`](crate::Ui) owns one shared
//! [`Theme`], each element may override individual keys, and a per-element
//! cache of resolved values is validated against an explicit version
//! counter. Bumping the counter on any shared-table change makes every
//! stale cache self-invalidate on next read, so invalidation never walks
//! the tree clearing nested caches.

use crate::Ui;
use crate::tree::ElementId;

/// Fixed keys for pixel constants consumed by layout strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeConstant {
    /// Gap between consecutive children of a linear box.
    Separation,
    /// Padded-strategy inset, left side.
    PaddingLeft,
    /// Padded-strategy inset, top side.
    PaddingTop,
    /// Padded-strategy inset, right side.
    PaddingRight,
    /// Padded-strategy inset, bottom side.
    PaddingBottom,
}

pub(crate) const THEME_CONSTANT_COUNT: usize = 5;

impl ThemeConstant {
    pub const ALL: [ThemeConstant; THEME_CONSTANT_COUNT] = [
        ThemeConstant::Separation,
        ThemeConstant::PaddingLeft,
        ThemeConstant::PaddingTop,
        ThemeConstant::PaddingRight,
        ThemeConstant::PaddingBottom,
    ];

    #[inline]
    pub(crate) const fn index(self) -> usize {
        match self {
            ThemeConstant::Separation => 0,
            ThemeConstant::PaddingLeft => 1,
            ThemeConstant::PaddingTop => 2,
            ThemeConstant::PaddingRight => 3,
            ThemeConstant::PaddingBottom => 4,
        }
    }
}

/// The shared constant table.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    values: [f32; THEME_CONSTANT_COUNT],
}

impl Theme {
    /// Look up a constant.
    #[inline]
    pub fn constant(&self, key: ThemeConstant) -> f32 {
        self.values[key.index()]
    }

    /// Replace a constant.
    #[inline]
    pub fn set_constant(&mut self, key: ThemeConstant, value: f32) {
        self.values[key.index()] = value;
    }
}

impl Default for Theme {
    fn default() -> Self {
        let mut values = [0.0; THEME_CONSTANT_COUNT];
        values[ThemeConstant::Separation.index()] = 4.0;
        Self { values }
    }
}

/// Per-element resolved-constant cache, valid while `version` matches the
/// engine's current theme version.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ThemeCache {
    pub(crate) version: u64,
    pub(crate) values: [f32; THEME_CONSTANT_COUNT],
}

impl Ui {
    /// Read-only view of the shared theme.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Current theme version; bumped on every shared-table change.
    pub fn theme_version(&self) -> u64 {
        self.theme_version
    }

    /// Replace a shared constant and re-measure everything that consumed it.
    pub fn set_theme_constant(&mut self, key: ThemeConstant, value: f32) {
        if self.theme.constant(key) == value {
            return;
        }
        self.theme.set_constant(key, value);
        self.theme_version += 1;
        tracing::debug!(?key, value = value as f64, version = self.theme_version, "theme constant changed");
        self.remeasure_all();
    }

    /// Override a constant for one element (takes precedence over the
    /// shared table). `None` removes the override.
    pub fn set_constant_override(
        &mut self,
        id: ElementId,
        key: ThemeConstant,
        value: Option<f32>,
    ) {
        let el = &mut self.elements[id];
        if el.constant_overrides[key.index()] == value {
            return;
        }
        el.constant_overrides[key.index()] = value;
        el.constant_cache = None;
        self.invalidate_min_size(id);
        if self.elements[id].strategy.is_container() {
            self.queue_sort(id);
        }
    }

    /// Effective constant for an element: its own override if present,
    /// otherwise the shared table. Resolution results are cached per
    /// element and validated against [`Ui::theme_version`].
    pub fn constant(&mut self, id: ElementId, key: ThemeConstant) -> f32 {
        let version = self.theme_version;
        let el = &mut self.elements[id];
        if let Some(cache) = el.constant_cache
            && cache.version == version
        {
            return cache.values[key.index()];
        }
        let mut values = [0.0; THEME_CONSTANT_COUNT];
        for k in ThemeConstant::ALL {
            values[k.index()] =
                el.constant_overrides[k.index()].unwrap_or(self.theme.constant(k));
        }
        el.constant_cache = Some(ThemeCache { version, values });
        values[key.index()]
    }

    /// Invalidate every element's intrinsic minimum after a shared-table
    /// change. Change-gated propagation keeps the fallout proportional to
    /// what actually moved.
    fn remeasure_all(&mut self) {
        let ids: Vec<ElementId> = self.elements.keys().collect();
        for id in ids {
            if self.elements.contains_key(id) {
                self.invalidate_min_size(id);
            }
        }
        let root = self.root;
        self.queue_sort_recursive(root);
    }

    fn queue_sort_recursive(&mut self, id: ElementId) {
        if self.elements[id].strategy.is_container() {
            self.queue_sort(id);
        }
        let children = self.elements[id].children.clone();
        for child in children {
            self.queue_sort_recursive(child);
        }
    }
}
