//! Bidirectional path ⇄ integer identifier table
//!
//! Identifiers are dense (0, 1, 2, ...) in first-insertion order, so the
//! reverse table is a plain vector.

use rustc_hash::FxHashMap;

/// Compact, session-consistent identifier for a resource path
pub type StringId = i32;

/// Identifier value meaning "absent"
pub const NO_STRING_ID: StringId = -1;

/// Path ⇄ id table. First occurrence of a path wins an id.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct StringIdTable {
    ids: FxHashMap<String, StringId>,
    paths: Vec<String>,
}

impl StringIdTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a path, returning its id (existing id if already present)
    pub fn insert(&mut self, path: &str) -> StringId {
        if let Some(&id) = self.ids.get(path) {
            return id;
        }
        let id = self.paths.len() as StringId;
        self.ids.insert(path.to_string(), id);
        self.paths.push(path.to_string());
        id
    }

    /// Id for a path, `NO_STRING_ID` if unknown or absent
    pub fn id(&self, path: Option<&str>) -> StringId {
        path.and_then(|p| self.ids.get(p).copied())
            .unwrap_or(NO_STRING_ID)
    }

    /// Path for an id
    pub fn path(&self, id: StringId) -> Option<&str> {
        usize::try_from(id)
            .ok()
            .and_then(|index| self.paths.get(index))
            .map(String::as_str)
    }

    /// Paths in id order
    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    /// Number of assigned ids
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Whether no ids are assigned
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Drop every assignment
    pub fn clear(&mut self) {
        self.ids.clear();
        self.paths.clear();
    }
}

#[cfg(test)]
#[path = "string_ids_tests.rs"]
mod tests;
