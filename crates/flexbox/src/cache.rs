//! Host-owned cache of resolved lines.
//!
//! The engine keeps no state between passes. A host that lays out the same item set
//! repeatedly (for example while only the cross constraint changes) can keep a [`LineCache`]
//! next to the container and hand it to [`crate::FlexEngine::layout_cached`].

use std::collections::HashMap;

use log::trace;

use crate::chapter6::MeasureSpec;
use crate::chapter9::CachedLines;

/// Identifies a cached line set.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct LineCacheKey {
    /// Bumped by the host whenever items or container configuration change.
    pub item_set_version: u64,
    /// Constraint on the container's main axis (padding box).
    pub main_constraint: MeasureSpec,
}

/// Resolved lines keyed by item-set version and main-axis constraint.
#[derive(Clone, Debug, Default)]
pub struct LineCache {
    entries: HashMap<LineCacheKey, CachedLines>,
}

impl LineCache {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, key: &LineCacheKey) -> Option<&CachedLines> {
        self.entries.get(key)
    }

    /// Store lines for `key`. Entries for older versions are dropped.
    pub fn store(&mut self, key: LineCacheKey, lines: CachedLines) {
        self.entries
            .retain(|existing, _| existing.item_set_version >= key.item_set_version);
        trace!(target: "flexbox::cache", "store {key:?}");
        self.entries.insert(key, lines);
    }

    /// Forget everything.
    #[inline]
    pub fn invalidate(&mut self) {
        self.entries.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
