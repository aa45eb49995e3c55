//! Asset registry module
//!
//! Path sandboxing, resource caching and the session-consistent string id
//! table for the active mod.

mod asset_registry;
mod cache;
pub mod loader;
pub mod memory_loader;
pub mod path;
pub mod string_ids;

pub use asset_registry::AssetRegistry;
pub use loader::ResourceLoader;
pub use memory_loader::MemoryResourceLoader;
pub use path::{
    BUILTIN_SCHEME,
    check_path, is_absolute, is_builtin, normalize_absolute_path, normalize_relative_path, sandbox_root,
};
pub use string_ids::{StringId, StringIdTable, NO_STRING_ID};
