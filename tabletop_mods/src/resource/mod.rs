//! Resource data types
//!
//! Decoded, engine-agnostic handles produced by the resource decode
//! collaborator and cached by the AssetRegistry.

pub mod texture;
pub mod mesh;
pub mod material;

pub use texture::Texture;
pub use mesh::Mesh;
pub use material::Material;
