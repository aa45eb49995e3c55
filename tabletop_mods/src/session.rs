//! Session context
//!
//! Owns the configuration, the built-in assets, one `AssetRegistry` and the
//! active `Mod`. Switching mods is a barrier: ids, caches and the sandbox
//! root are rebuilt before anything can spawn.

use std::path::Path;
use crate::asset::{Asset, AssetRef, BuiltinAssets};
use crate::config::SessionConfig;
use crate::error::Result;
use crate::loader::{load_mod_dir, Mod};
use crate::registry::{AssetRegistry, ResourceLoader};
use crate::scene::{ObjectKey, SceneSpawner};
use crate::spawn::execute_rule;
use crate::{tabletop_error, tabletop_info, tabletop_warn};

const SOURCE: &str = "tabletop::Session";

/// One participant's view of the mod subsystem
pub struct Session {
    config: SessionConfig,
    builtins: BuiltinAssets,
    registry: AssetRegistry,
    active: Option<Mod>,
}

impl Session {
    /// Create a session with no active mod
    pub fn new<L: ResourceLoader + 'static>(config: SessionConfig, builtins: BuiltinAssets, loader: L) -> Self {
        Self {
            config,
            builtins,
            registry: AssetRegistry::new(loader),
            active: None,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn builtins(&self) -> &BuiltinAssets {
        &self.builtins
    }

    pub fn registry(&self) -> &AssetRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut AssetRegistry {
        &mut self.registry
    }

    pub fn active_mod(&self) -> Option<&Mod> {
        self.active.as_ref()
    }

    /// Bumped on every mod switch; ids from an older generation are stale
    pub fn generation(&self) -> u64 {
        self.registry.generation()
    }

    // ===== MOD SWITCH =====

    /// Make `game_mod` the active mod, returning the previous one
    ///
    /// Resets the registry onto the mod directory, assigns ids (built-in
    /// resources first, then the mod's, each in declaration order) and
    /// resolves the ids embedded in every asset. Objects spawned under the
    /// previous mod keep stale ids; the caller clears them from its scene.
    pub fn activate(&mut self, mut game_mod: Mod) -> Option<Mod> {
        self.registry.reset(Some(&game_mod.base_directory));
        self.registry.assign_ids(
            self.builtins
                .table()
                .resource_names()
                .chain(game_mod.assets.resource_names()),
        );

        for (_, asset) in self.builtins.table_mut().iter_mut() {
            asset.init_string_ids(&self.registry);
        }
        for (_, asset) in game_mod.assets.iter_mut() {
            asset.init_string_ids(&self.registry);
        }

        tabletop_info!(
            SOURCE,
            "Activated mod '{}' (generation {}, {} string ids)",
            game_mod.name,
            self.registry.generation(),
            self.registry.string_ids().len()
        );
        self.active.replace(game_mod)
    }

    /// Load the mod in `directory` and activate it
    pub fn activate_dir(&mut self, directory: &Path) -> Result<Option<Mod>> {
        let game_mod = load_mod_dir(directory, &self.builtins, &self.config)?;
        Ok(self.activate(game_mod))
    }

    /// Drop the active mod and every id and cache derived from it
    pub fn deactivate(&mut self) -> Option<Mod> {
        self.registry.reset(None);
        self.active.take()
    }

    // ===== LOOKUP =====

    /// Asset behind a reference from the active mod's spawn rules
    pub fn asset(&self, asset: AssetRef) -> Option<&Asset> {
        match asset {
            AssetRef::Mod(index) => self.active.as_ref()?.assets.get_index(index),
            AssetRef::Builtin(index) => self.builtins.table().get_index(index),
        }
    }

    // ===== SPAWNING =====

    /// Spawn every rule of the active mod in declaration order
    pub fn spawn_all(&mut self, scene: &mut dyn SceneSpawner) -> Vec<ObjectKey> {
        self.spawn_filtered(scene, |_| true)
    }

    /// Spawn every rule except scenery (boards)
    pub fn spawn_grabbables(&mut self, scene: &mut dyn SceneSpawner) -> Vec<ObjectKey> {
        self.spawn_filtered(scene, Asset::is_grabbable)
    }

    /// Spawn failures are logged per rule; the remaining rules still spawn.
    fn spawn_filtered(&mut self, scene: &mut dyn SceneSpawner, keep: impl Fn(&Asset) -> bool) -> Vec<ObjectKey> {
        let Some(active) = self.active.as_mut() else {
            tabletop_warn!(SOURCE, "Nothing to spawn: no active mod");
            return Vec::new();
        };
        let global_scale = active.global_scale(&self.config);
        let reference_scale = active.reference_scale(&self.config);
        let Mod { assets, instances, .. } = active;

        let mut spawned = Vec::new();
        for rule in instances.iter_mut() {
            let asset = match rule.asset {
                AssetRef::Mod(index) => assets.get_index(index),
                AssetRef::Builtin(index) => self.builtins.table().get_index(index),
            };
            let Some(asset) = asset else {
                tabletop_warn!(SOURCE, "Rule for '{}' points at a missing asset", rule.asset_name);
                continue;
            };
            if !keep(asset) {
                continue;
            }
            match execute_rule(rule, asset, &self.registry, scene, global_scale, reference_scale) {
                Ok(keys) => spawned.extend(keys),
                Err(err) => tabletop_error!(SOURCE, "Failed to spawn '{}': {}", rule.asset_name, err),
            }
        }
        spawned
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
