//! Mod loading module
//!
//! Turns mod descriptions (JSON) into `Mod` values: metadata, a typed asset
//! table and spawn rules.

mod asset_parser;
mod game_mod;
mod json;
mod mod_loader;

pub use asset_parser::parse_asset;
pub use game_mod::Mod;
pub use mod_loader::{load_mod, load_mod_dir, load_mod_str, scan_mods};
