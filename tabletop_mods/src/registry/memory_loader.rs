//! In-memory resource loader
//!
//! Serves pre-decoded textures and meshes keyed by normalized path. Useful
//! for bundled built-in resources, headless sessions and tests. Counts every
//! decode request so callers can verify cache behavior.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use rustc_hash::FxHashMap;
use crate::error::{Error, Result};
use crate::registry::loader::ResourceLoader;
use crate::registry::path::normalize_absolute_path;
use crate::resource::{Mesh, Texture};

/// In-memory `ResourceLoader`
#[derive(Default)]
pub struct MemoryResourceLoader {
    textures: FxHashMap<String, Result<Texture>>,
    meshes: FxHashMap<String, Result<Mesh>>,
    requests: Arc<AtomicUsize>,
}

impl MemoryResourceLoader {
    /// Create an empty loader
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a texture under `path` (normalized on insert)
    pub fn insert_texture(&mut self, path: &str, texture: Texture) {
        self.textures.insert(normalize_absolute_path(path), Ok(texture));
    }

    /// Register a mesh under `path` (normalized on insert)
    pub fn insert_mesh(&mut self, path: &str, mesh: Mesh) {
        self.meshes.insert(normalize_absolute_path(path), Ok(mesh));
    }

    /// Register a texture path whose decode always fails
    pub fn insert_corrupt_texture(&mut self, path: &str) {
        let path = normalize_absolute_path(path);
        let err = Error::DecodeError(format!("corrupt texture data: {}", path));
        self.textures.insert(path, Err(err));
    }

    /// Shared counter of decode requests served (hits and misses)
    pub fn request_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.requests)
    }

    /// Number of decode requests served so far
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

impl ResourceLoader for MemoryResourceLoader {
    fn load_texture(&self, path: &str, _builtin: bool) -> Result<Texture> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        self.textures
            .get(path)
            .cloned()
            .unwrap_or_else(|| Err(Error::NotFound(path.to_string())))
    }

    fn load_mesh(&self, path: &str, _builtin: bool) -> Result<Mesh> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        self.meshes
            .get(path)
            .cloned()
            .unwrap_or_else(|| Err(Error::NotFound(path.to_string())))
    }
}
