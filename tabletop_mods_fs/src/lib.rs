/*!
# Tabletop Mods - Filesystem Backend

Filesystem implementation of the `ResourceLoader` collaborator.

Mod-relative paths are read from disk as given (the registry has already
normalized and sandboxed them). Paths under the `builtin://` scheme are
served from a bundled-resource directory. Textures are decoded with `image`,
Wavefront OBJ meshes with `tobj`.
*/

mod fs_loader;
mod fs_mesh;
mod fs_texture;

pub use fs_loader::FsResourceLoader;
pub use fs_mesh::decode_obj;
pub use fs_texture::decode_texture;
