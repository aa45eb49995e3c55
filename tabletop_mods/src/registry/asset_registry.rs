//! Per-mod asset registry
//!
//! Owns the sandbox root, the read-through caches for textures, materials
//! and meshes, and the bidirectional path ⇄ id table. Rebuilt wholesale on
//! every mod switch.

use std::sync::Arc;
use crate::error::{Error, Result};
use crate::registry::cache::ResourceCache;
use crate::registry::loader::ResourceLoader;
use crate::registry::path::{self, BUILTIN_SCHEME};
use crate::registry::string_ids::{StringId, StringIdTable};
use crate::resource::{Material, Mesh, Texture};
use crate::{tabletop_debug, tabletop_info, tabletop_warn};

const SOURCE: &str = "tabletop::AssetRegistry";

/// Registry of the active mod's resources
///
/// # Example
///
/// ```no_run
/// use tabletop_mods::tabletop::registry::{AssetRegistry, MemoryResourceLoader};
///
/// let mut registry = AssetRegistry::new(MemoryResourceLoader::new());
/// registry.reset(Some("/mods/poker"));
/// registry.assign_ids([Some("cards/ace.png"), Some("cards/back.png")]);
/// assert_eq!(registry.get_id(Some("cards/back.png")), 1);
/// let texture = registry.get_texture(0);
/// ```
pub struct AssetRegistry {
    loader: Box<dyn ResourceLoader>,
    /// Active mod directory in sandbox-root form (trailing `/`)
    sandbox_root: Option<String>,
    string_ids: StringIdTable,
    textures: ResourceCache<Texture>,
    materials: ResourceCache<Material>,
    meshes: ResourceCache<Mesh>,
    /// Bumped on every reset; ids from an older generation are stale
    generation: u64,
}

impl AssetRegistry {
    /// Create a registry with no active mod
    pub fn new<L: ResourceLoader + 'static>(loader: L) -> Self {
        Self::with_loader(Box::new(loader))
    }

    /// Create a registry from an already boxed loader
    pub fn with_loader(loader: Box<dyn ResourceLoader>) -> Self {
        Self {
            loader,
            sandbox_root: None,
            string_ids: StringIdTable::new(),
            textures: ResourceCache::new(),
            materials: ResourceCache::new(),
            meshes: ResourceCache::new(),
            generation: 0,
        }
    }

    // ===== MOD SWITCH =====

    /// Discard ids and caches and set a new sandbox root.
    ///
    /// Everything resolved before this call is invalid afterwards.
    /// `assign_ids` must run again before `get_id`/`get_path` are trusted.
    pub fn reset(&mut self, base_directory: Option<&str>) {
        self.string_ids.clear();
        self.textures.clear();
        self.materials.clear();
        self.meshes.clear();
        self.sandbox_root = base_directory.map(path::sandbox_root);
        self.generation += 1;
        tabletop_debug!(SOURCE, "Reset (generation {}, root {:?})",
            self.generation, self.sandbox_root);
    }

    /// Sandbox root of the active mod (trailing `/`)
    pub fn base_directory(&self) -> Option<&str> {
        self.sandbox_root.as_deref()
    }

    /// Number of resets so far
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// True if ids taken at `generation` still name the same paths
    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    // ===== PATHS =====

    /// Resolve a mod-authored path against the active mod directory
    pub fn normalize_relative_path(&self, path: &str) -> String {
        match &self.sandbox_root {
            Some(root) => path::normalize_relative_path(path, root),
            None => path::normalize_absolute_path(path),
        }
    }

    /// Sandbox gate for an already normalized path
    pub fn check_path(&self, path: &str) -> bool {
        path::check_path(path, self.sandbox_root.as_deref())
    }

    /// Normalize and gate a path; rejected paths never reach a cache
    fn sandboxed(&self, path: &str) -> Result<String> {
        let normalized = self.normalize_relative_path(path);
        if self.check_path(&normalized) {
            Ok(normalized)
        } else {
            tabletop_warn!(SOURCE, "Rejected path outside sandbox: '{}' -> '{}'", path, normalized);
            Err(Error::SandboxViolation(normalized))
        }
    }

    // ===== RESOLUTION =====

    /// Resolve a texture through the cache
    pub fn resolve_texture(&mut self, path: &str) -> Result<Arc<Texture>> {
        let key = self.sandboxed(path)?;
        self.cached_texture(&key)
    }

    fn cached_texture(&mut self, key: &str) -> Result<Arc<Texture>> {
        let loader = &self.loader;
        self.textures.get_or_fetch(key, || {
            let builtin = key.starts_with(BUILTIN_SCHEME);
            loader.load_texture(key, builtin)
                .map(Arc::new)
                .inspect_err(|err| tabletop_warn!(SOURCE, "Texture unavailable: {}", err))
        })
    }

    /// Resolve a material: `base` with its diffuse texture taken from `path`.
    ///
    /// Cached by normalized path only; the first base used for a path wins.
    pub fn resolve_material(&mut self, path: &str, base: &Arc<Material>) -> Result<Arc<Material>> {
        let key = self.sandboxed(path)?;
        if let Some(hit) = self.materials.get(&key) {
            return hit;
        }
        let built = self.cached_texture(&key)
            .map(|texture| Arc::new(base.with_diffuse(texture)));
        self.materials.insert(key, built)
    }

    /// Resolve a mesh through the cache
    pub fn resolve_mesh(&mut self, path: &str) -> Result<Arc<Mesh>> {
        let key = self.sandboxed(path)?;
        let loader = &self.loader;
        self.meshes.get_or_fetch(&key, || {
            let builtin = key.starts_with(BUILTIN_SCHEME);
            loader.load_mesh(&key, builtin)
                .map(Arc::new)
                .inspect_err(|err| tabletop_warn!(SOURCE, "Mesh unavailable: {}", err))
        })
    }

    // ===== IDENTIFIERS =====

    /// Rebuild the id tables from resource names in deterministic order.
    ///
    /// Callers pass built-in asset names first, then mod asset names, each in
    /// declaration order. `None` entries are skipped; the first occurrence of
    /// a path wins its id.
    pub fn assign_ids<'a, I>(&mut self, names: I)
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        self.string_ids.clear();
        for name in names.into_iter().flatten() {
            self.string_ids.insert(name);
        }
        tabletop_info!(SOURCE, "Assigned {} string ids", self.string_ids.len());
    }

    /// Id of a resource path (`NO_STRING_ID` if unknown or absent)
    pub fn get_id(&self, path: Option<&str>) -> StringId {
        self.string_ids.id(path)
    }

    /// Resource path of an id
    pub fn get_path(&self, id: StringId) -> Option<&str> {
        self.string_ids.path(id)
    }

    /// The current id table
    pub fn string_ids(&self) -> &StringIdTable {
        &self.string_ids
    }

    fn path_of(&self, id: StringId) -> Result<String> {
        self.get_path(id)
            .map(str::to_string)
            .ok_or_else(|| Error::NotFound(format!("string id {}", id)))
    }

    /// `get_path` + `resolve_texture`
    ///
    /// Ids carry no generation. An id held across `reset` may name a path of
    /// the new mod; objects spawned under an older generation must be
    /// dropped (`Scene::clear`) or checked with `is_current` first.
    pub fn get_texture(&mut self, id: StringId) -> Result<Arc<Texture>> {
        let path = self.path_of(id)?;
        self.resolve_texture(&path)
    }

    /// `get_path` + `resolve_material`
    pub fn get_material(&mut self, id: StringId, base: &Arc<Material>) -> Result<Arc<Material>> {
        let path = self.path_of(id)?;
        self.resolve_material(&path, base)
    }

    /// `get_path` + `resolve_mesh`
    pub fn get_mesh(&mut self, id: StringId) -> Result<Arc<Mesh>> {
        let path = self.path_of(id)?;
        self.resolve_mesh(&path)
    }

    // ===== CACHE INSPECTION =====

    pub fn cached_texture_count(&self) -> usize {
        self.textures.len()
    }

    pub fn cached_material_count(&self) -> usize {
        self.materials.len()
    }

    pub fn cached_mesh_count(&self) -> usize {
        self.meshes.len()
    }

    /// Whether a normalized path has a texture cache entry (positive or negative)
    pub fn is_texture_cached(&self, normalized_path: &str) -> bool {
        self.textures.contains(normalized_path)
    }
}

#[cfg(test)]
#[path = "asset_registry_tests.rs"]
mod tests;
