//! Resource decode collaborator contract
//!
//! The registry never touches the filesystem itself. It hands a normalized,
//! sandbox-checked path to a `ResourceLoader`, which either returns a decoded
//! handle or fails with `NotFound` / `DecodeError`.

use crate::error::Result;
use crate::resource::{Mesh, Texture};

/// Decodes textures and meshes for the AssetRegistry
///
/// Implementations: `MemoryResourceLoader` (in-memory bundle) and the
/// filesystem backend in the `tabletop_mods_fs` crate.
pub trait ResourceLoader {
    /// Decode the texture at `path`
    ///
    /// # Arguments
    ///
    /// * `path` - Normalized path, already accepted by the sandbox gate
    /// * `builtin` - True if `path` is in the built-in namespace
    fn load_texture(&self, path: &str, builtin: bool) -> Result<Texture>;

    /// Decode the mesh at `path`
    fn load_mesh(&self, path: &str, builtin: bool) -> Result<Mesh>;
}
