//! Thin assets wrapping an existing prefab

use glam::Vec3;
use crate::asset::asset::{apply_size_override, AssetBehavior};
use crate::error::Result;
use crate::registry::AssetRegistry;
use crate::scene::{ObjectKey, Placement, PrefabKind, SceneSpawner};

/// Any prefab the scene already knows (generic tokens)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prefab {
    pub kind: PrefabKind,
}

impl AssetBehavior for Prefab {
    fn spawn(
        &self,
        _registry: &AssetRegistry,
        scene: &mut dyn SceneSpawner,
        scale: f32,
        placement: &Placement,
    ) -> Result<Option<ObjectKey>> {
        let object = scene.instantiate(self.kind, placement.position, placement.rotation)?;
        apply_size_override(scene, object, scale, placement.size)?;
        Ok(Some(object))
    }
}

/// Bundled game piece (coins) with its own footprint
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuiltinToken {
    pub kind: PrefabKind,
    pub footprint: Vec3,
}

impl AssetBehavior for BuiltinToken {
    fn spawn(
        &self,
        _registry: &AssetRegistry,
        scene: &mut dyn SceneSpawner,
        scale: f32,
        placement: &Placement,
    ) -> Result<Option<ObjectKey>> {
        let object = scene.instantiate(self.kind, placement.position, placement.rotation)?;
        apply_size_override(scene, object, scale, placement.size)?;
        Ok(Some(object))
    }

    fn size(&self) -> Vec3 {
        self.footprint
    }
}
