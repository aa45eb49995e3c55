//! Ordered, name-indexed asset storage
//!
//! Declaration order is significant: it drives string id assignment.

use rustc_hash::FxHashMap;
use crate::asset::asset::Asset;

/// Which table an `AssetRef` points into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetRef {
    /// Index into the active mod's asset table
    Mod(usize),
    /// Index into the built-in asset table
    Builtin(usize),
}

/// Assets in declaration order with a name → index lookup
#[derive(Debug, Clone, Default)]
pub struct AssetTable {
    entries: Vec<(String, Asset)>,
    names: FxHashMap<String, usize>,
}

impl AssetTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an asset. A duplicate name replaces the earlier asset in place,
    /// keeping its original position.
    pub fn insert(&mut self, name: impl Into<String>, asset: Asset) -> usize {
        let name = name.into();
        if let Some(&index) = self.names.get(&name) {
            self.entries[index].1 = asset;
            return index;
        }
        let index = self.entries.len();
        self.names.insert(name.clone(), index);
        self.entries.push((name, asset));
        index
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.get(name).copied()
    }

    pub fn get(&self, name: &str) -> Option<&Asset> {
        self.index_of(name).map(|index| &self.entries[index].1)
    }

    pub fn get_index(&self, index: usize) -> Option<&Asset> {
        self.entries.get(index).map(|(_, asset)| asset)
    }

    pub fn name_at(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|(name, _)| name.as_str())
    }

    /// (name, asset) pairs in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Asset)> {
        self.entries.iter().map(|(name, asset)| (name.as_str(), asset))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut Asset)> {
        self.entries.iter_mut().map(|(name, asset)| (name.as_str(), asset))
    }

    /// Every asset's resource names, flattened in declaration order
    pub fn resource_names(&self) -> impl Iterator<Item = Option<&str>> {
        self.entries.iter().flat_map(|(_, asset)| asset.resource_names())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
