//! Filesystem resource loader

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tabletop_mods::tabletop::registry::{ResourceLoader, BUILTIN_SCHEME};
use tabletop_mods::tabletop::resource::{Mesh, Texture};
use tabletop_mods::tabletop::{Error, Result};
use tabletop_mods::{tabletop_debug, tabletop_error};
use crate::fs_mesh::decode_obj;
use crate::fs_texture::decode_texture;

const SOURCE: &str = "tabletop::fs";

/// Reads resources from disk
///
/// Paths arrive already normalized and sandboxed by the registry; this
/// loader only maps the built-in scheme onto `builtin_root`.
#[derive(Debug, Clone)]
pub struct FsResourceLoader {
    builtin_root: PathBuf,
}

impl FsResourceLoader {
    /// Create a loader serving `builtin://` from `builtin_root`
    pub fn new(builtin_root: impl Into<PathBuf>) -> Self {
        Self { builtin_root: builtin_root.into() }
    }

    pub fn builtin_root(&self) -> &Path {
        &self.builtin_root
    }

    /// Filesystem location of a resource path
    pub fn file_path(&self, path: &str, builtin: bool) -> PathBuf {
        match path.strip_prefix(BUILTIN_SCHEME) {
            Some(relative) if builtin => self.builtin_root.join(relative),
            _ => PathBuf::from(path),
        }
    }

    fn read(&self, path: &str, builtin: bool) -> Result<Vec<u8>> {
        let file = self.file_path(path, builtin);
        tabletop_debug!(SOURCE, "Reading '{}'", file.display());
        fs::read(&file).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => Error::NotFound(path.to_string()),
            _ => {
                tabletop_error!(SOURCE, "Failed to read '{}': {}", file.display(), e);
                Error::NotFound(path.to_string())
            }
        })
    }
}

impl ResourceLoader for FsResourceLoader {
    fn load_texture(&self, path: &str, builtin: bool) -> Result<Texture> {
        let bytes = self.read(path, builtin)?;
        decode_texture(path, &bytes)
    }

    fn load_mesh(&self, path: &str, builtin: bool) -> Result<Mesh> {
        let bytes = self.read(path, builtin)?;
        decode_obj(path, &bytes)
    }
}
