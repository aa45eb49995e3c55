//! Read-through resource cache keyed by normalized path
//!
//! Failed lookups are cached as well, so a missing resource costs one decode
//! attempt per mod session.

use std::sync::Arc;
use rustc_hash::FxHashMap;
use crate::error::Result;

pub(crate) struct ResourceCache<T> {
    entries: FxHashMap<String, Result<Arc<T>>>,
}

impl<T> ResourceCache<T> {
    pub(crate) fn new() -> Self {
        Self {
            entries: FxHashMap::default(),
        }
    }

    /// Cached result for `key`, if any
    pub(crate) fn get(&self, key: &str) -> Option<Result<Arc<T>>> {
        self.entries.get(key).cloned()
    }

    /// Store `result` unless the key is already populated (first writer wins).
    /// Returns whatever the cache now holds for `key`.
    pub(crate) fn insert(&mut self, key: String, result: Result<Arc<T>>) -> Result<Arc<T>> {
        self.entries.entry(key).or_insert(result).clone()
    }

    /// Serve `key` from the cache, or run `fetch` once and remember its result
    pub(crate) fn get_or_fetch(
        &mut self,
        key: &str,
        fetch: impl FnOnce() -> Result<Arc<T>>,
    ) -> Result<Arc<T>> {
        if let Some(hit) = self.get(key) {
            return hit;
        }
        self.insert(key.to_string(), fetch())
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}
