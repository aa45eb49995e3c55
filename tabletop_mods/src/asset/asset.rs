//! Polymorphic mod asset
//!
//! `Asset` is a closed set of variants; each variant implements the shared
//! `AssetBehavior` capability set and `Asset` dispatches by variant tag.

use glam::{Quat, Vec3};
use crate::asset::board::Board;
use crate::asset::deck::Deck;
use crate::asset::dice::Dice;
use crate::asset::prefab::{BuiltinToken, Prefab};
use crate::error::Result;
use crate::registry::AssetRegistry;
use crate::scene::{ObjectKey, Placement, SceneSpawner};

/// Capability set shared by every asset variant
///
/// Default methods are the base behavior: spawning does nothing, every
/// orientation name is identity, the footprint is unit, there are no
/// resources and no ids to resolve.
pub trait AssetBehavior {
    /// Materialize one instance through the scene collaborator
    ///
    /// # Arguments
    ///
    /// * `registry` - Active registry (ids already assigned)
    /// * `scene` - Scene collaborator
    /// * `scale` - Combined mod → table scale factor
    /// * `placement` - World transform and authored size of this instance
    fn spawn(
        &self,
        _registry: &AssetRegistry,
        _scene: &mut dyn SceneSpawner,
        _scale: f32,
        _placement: &Placement,
    ) -> Result<Option<ObjectKey>> {
        Ok(None)
    }

    /// Rotation for a named orientation
    fn rotation(&self, _orientation: &str) -> Quat {
        Quat::IDENTITY
    }

    /// Footprint used for grid spacing
    fn size(&self) -> Vec3 {
        Vec3::ONE
    }

    /// Resource paths in id-assignment order (`None` entries are skipped)
    fn resource_names(&self) -> Vec<Option<&str>> {
        Vec::new()
    }

    /// Swap embedded paths for ids from the active registry
    fn init_string_ids(&mut self, _registry: &AssetRegistry) {}
}

/// Apply an authored size to a freshly instantiated object.
///
/// `Vec3::ONE` is a sentinel for "keep native scale" and is compared
/// exactly, not within a tolerance.
pub(crate) fn apply_size_override(
    scene: &mut dyn SceneSpawner,
    object: ObjectKey,
    scale: f32,
    size: Vec3,
) -> Result<()> {
    if size != Vec3::ONE {
        scene.set_scale(object, size * scale)?;
    }
    Ok(())
}

/// A named, typed template that can be spawned any number of times
#[derive(Debug, Clone, PartialEq)]
pub enum Asset {
    Dice(Dice),
    Deck(Deck),
    Board(Board),
    Prefab(Prefab),
    BuiltinToken(BuiltinToken),
}

impl Asset {
    fn behavior(&self) -> &dyn AssetBehavior {
        match self {
            Asset::Dice(dice) => dice,
            Asset::Deck(deck) => deck,
            Asset::Board(board) => board,
            Asset::Prefab(prefab) => prefab,
            Asset::BuiltinToken(token) => token,
        }
    }

    fn behavior_mut(&mut self) -> &mut dyn AssetBehavior {
        match self {
            Asset::Dice(dice) => dice,
            Asset::Deck(deck) => deck,
            Asset::Board(board) => board,
            Asset::Prefab(prefab) => prefab,
            Asset::BuiltinToken(token) => token,
        }
    }

    /// Variant tag as written in mod documents
    pub fn kind_name(&self) -> &'static str {
        match self {
            Asset::Dice(_) => "dice",
            Asset::Deck(_) => "deck",
            Asset::Board(_) => "board",
            Asset::Prefab(_) => "prefab",
            Asset::BuiltinToken(_) => "builtin_token",
        }
    }

    /// False for scenery that players cannot pick up (boards)
    pub fn is_grabbable(&self) -> bool {
        match self {
            Asset::Board(_) => false,
            Asset::Prefab(prefab) => prefab.kind.is_grabbable(),
            _ => true,
        }
    }

    pub fn spawn(
        &self,
        registry: &AssetRegistry,
        scene: &mut dyn SceneSpawner,
        scale: f32,
        placement: &Placement,
    ) -> Result<Option<ObjectKey>> {
        self.behavior().spawn(registry, scene, scale, placement)
    }

    pub fn rotation(&self, orientation: &str) -> Quat {
        self.behavior().rotation(orientation)
    }

    pub fn size(&self) -> Vec3 {
        self.behavior().size()
    }

    pub fn resource_names(&self) -> Vec<Option<&str>> {
        self.behavior().resource_names()
    }

    pub fn init_string_ids(&mut self, registry: &AssetRegistry) {
        self.behavior_mut().init_string_ids(registry)
    }
}

#[cfg(test)]
#[path = "asset_tests.rs"]
mod tests;
