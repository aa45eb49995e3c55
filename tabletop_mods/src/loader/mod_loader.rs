//! Mod description loader
//!
//! Parses a mod description into a `Mod`: required metadata, the asset
//! table and the spawn rules. Only a missing or mistyped `name` aborts a
//! load; every other problem is logged and recovered locally.

use std::fs;
use std::path::{self, Path};
use glam::Vec2;
use serde_json::Value;
use crate::asset::{AssetRef, AssetTable, BuiltinAssets};
use crate::config::SessionConfig;
use crate::error::{Error, Result};
use crate::loader::asset_parser::parse_asset;
use crate::loader::game_mod::Mod;
use crate::loader::json::{self, Object, Rotation};
use crate::registry::{is_absolute, is_builtin, normalize_absolute_path};
use crate::spawn::SpawnRule;
use crate::{tabletop_bail, tabletop_error, tabletop_info, tabletop_warn};

const SOURCE: &str = "tabletop::ModLoader";

/// Build a `Mod` from a parsed description
///
/// # Arguments
///
/// * `document` - Parsed mod description
/// * `base_path` - Directory the mod was loaded from (becomes the sandbox root;
///   a relative directory is resolved against the working directory)
/// * `builtins` - Built-in assets, searched after the mod's own assets
/// * `config` - Session configuration (reference bounds)
pub fn load_mod(
    document: &Value,
    base_path: &str,
    builtins: &BuiltinAssets,
    config: &SessionConfig,
) -> Result<Mod> {
    let root = match document.as_object() {
        Some(root) => root,
        None => tabletop_bail!(Parse, SOURCE, "Mod description in '{}' is not an object", base_path),
    };
    let name = match json::required_str(root, "name") {
        Ok(name) => name,
        Err(err) => tabletop_bail!(Parse, SOURCE, "Mod in '{}': {}", base_path, err),
    };

    let mut game_mod = Mod::new(name, absolute_base(base_path), config);
    game_mod.author = json::optional(SOURCE, root, "author", "a string", json::to_string);
    game_mod.min_players = json::optional(SOURCE, root, "min_players", "an integer", json::to_u32);
    game_mod.max_players = json::optional(SOURCE, root, "max_players", "an integer", json::to_u32);
    read_bounds(root, &mut game_mod);

    if let Some(assets) = json::optional(SOURCE, root, "assets", "an object", Value::as_object) {
        game_mod.assets = read_assets(assets);
    }
    if let Some(instances) = json::optional(SOURCE, root, "instances", "an array", Value::as_array) {
        game_mod.instances = instances
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| {
                read_instance(index, entry, &game_mod.assets, builtins, config)
                    .inspect_err(|err| tabletop_warn!(SOURCE, "Skipping instance {}: {}", index, err))
                    .ok()
            })
            .collect();
    }

    tabletop_info!(
        SOURCE,
        "Loaded mod '{}': {} assets, {} instances",
        game_mod.name,
        game_mod.assets.len(),
        game_mod.instances.len()
    );
    Ok(game_mod)
}

/// Parse and load a description from JSON text
pub fn load_mod_str(
    text: &str,
    base_path: &str,
    builtins: &BuiltinAssets,
    config: &SessionConfig,
) -> Result<Mod> {
    let document: Value = serde_json::from_str(text)
        .inspect_err(|err| tabletop_error!(SOURCE, "Invalid JSON in '{}': {}", base_path, err))?;
    load_mod(&document, base_path, builtins, config)
}

/// Load the description file of one mod directory
pub fn load_mod_dir(directory: &Path, builtins: &BuiltinAssets, config: &SessionConfig) -> Result<Mod> {
    let meta = directory.join(&config.meta_file_name);
    let text = fs::read_to_string(&meta)
        .map_err(|err| Error::Io(format!("{}: {}", meta.display(), err)))?;
    load_mod_str(&text, &directory.to_string_lossy(), builtins, config)
}

/// Load every mod under `mods_dir`
///
/// Each immediate sub-directory holding a description file is loaded on its
/// own; a failing mod is logged and skipped. Mods are returned sorted by
/// directory name.
pub fn scan_mods(mods_dir: &Path, builtins: &BuiltinAssets, config: &SessionConfig) -> Result<Vec<Mod>> {
    let mut directories: Vec<_> = fs::read_dir(mods_dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_dir() && path.join(&config.meta_file_name).is_file())
        .collect();
    directories.sort();

    let mut mods = Vec::with_capacity(directories.len());
    for directory in directories {
        match load_mod_dir(&directory, builtins, config) {
            Ok(game_mod) => mods.push(game_mod),
            Err(err) => tabletop_error!(SOURCE, "Failed to load mod '{}': {}", directory.display(), err),
        }
    }
    tabletop_info!(SOURCE, "Found {} mods in '{}'", mods.len(), mods_dir.display());
    Ok(mods)
}

// ===== SECTIONS =====

/// Absolute, normalized form of a mod directory
fn absolute_base(base_path: &str) -> String {
    if is_builtin(base_path) || is_absolute(&base_path.replace('\\', "/")) {
        return normalize_absolute_path(base_path);
    }
    match path::absolute(base_path) {
        Ok(resolved) => normalize_absolute_path(&resolved.to_string_lossy()),
        Err(err) => {
            tabletop_warn!(SOURCE, "Cannot resolve mod directory '{}': {}", base_path, err);
            normalize_absolute_path(base_path)
        }
    }
}

fn read_bounds(root: &Object, game_mod: &mut Mod) {
    let Some(numbers) = json::optional(SOURCE, root, "bounds", "a numeric array", json::to_numbers) else {
        return;
    };
    match numbers.as_slice() {
        [width, height] => {
            game_mod.bounds = Vec2::new(*width, *height);
            game_mod.bounds_declared = true;
        }
        other => tabletop_warn!(
            SOURCE,
            "Ignoring bounds with {} components; using {:?}",
            other.len(),
            game_mod.bounds
        ),
    }
}

fn read_assets(assets: &Object) -> AssetTable {
    let mut table = AssetTable::new();
    for (name, value) in assets {
        match parse_asset(name, value) {
            Ok(Some(asset)) => {
                table.insert(name.as_str(), asset);
            }
            Ok(None) => {}
            Err(err) => tabletop_warn!(SOURCE, "Skipping asset '{}': {}", name, err),
        }
    }
    table
}

/// Mod-defined assets shadow built-ins of the same name
fn lookup_asset(name: &str, assets: &AssetTable, builtins: &BuiltinAssets) -> Result<AssetRef> {
    assets
        .index_of(name)
        .map(AssetRef::Mod)
        .or_else(|| builtins.index_of(name).map(AssetRef::Builtin))
        .ok_or_else(|| Error::UnknownAssetReference(name.to_string()))
}

fn read_instance(
    index: usize,
    entry: &Value,
    assets: &AssetTable,
    builtins: &BuiltinAssets,
    config: &SessionConfig,
) -> Result<SpawnRule> {
    let object = json::as_object(entry, &format!("instance {}", index))?;
    let asset_name = json::required_str(object, "asset")?;
    let asset = lookup_asset(asset_name, assets, builtins)?;

    let mut rule = SpawnRule::new(asset, asset_name);
    if let Some(pos) = json::optional(SOURCE, object, "pos", "a 2-element array", json::to_vec2) {
        rule.pos = -pos;
    }
    if let Some(size) = json::optional(SOURCE, object, "size", "a number or 3-element array", json::to_size) {
        rule.size = size;
    }
    match json::optional(SOURCE, object, "rot", "a rotation", json::to_rotation) {
        Some(Rotation::Explicit(rot)) => rule.rot = rot,
        Some(Rotation::Named(name)) => rule.rot_str = Some(name),
        None => {}
    }
    let count = json::optional(SOURCE, object, "count", "a positive integer", |value| {
        json::to_u32(value).filter(|count| *count >= 1)
    });
    rule.count = match count {
        Some(count) if count > config.max_instance_count => {
            tabletop_warn!(
                SOURCE,
                "Instance {} of '{}': count {} clamped to {}",
                index,
                asset_name,
                count,
                config.max_instance_count
            );
            config.max_instance_count.max(1)
        }
        Some(count) => count,
        None => 1,
    };
    Ok(rule)
}

#[cfg(test)]
#[path = "mod_loader_tests.rs"]
mod tests;
