//! Board asset
//!
//! The play surface itself. A mod may supply its own board art; the object
//! is scenery and is never handed to players.

use crate::asset::asset::{apply_size_override, AssetBehavior};
use crate::asset::material_maker::MaterialMaker;
use crate::error::Result;
use crate::registry::AssetRegistry;
use crate::scene::{ObjectKey, Placement, PrefabKind, SceneSpawner};

/// Board prefab with a mod-authored surface
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Board {
    /// Diffuse and normal textures of the surface
    pub material: MaterialMaker,
}

impl Board {
    pub fn has_surface(&self) -> bool {
        self.material.diffuse_path.is_some() || self.material.normal_path.is_some()
    }
}

impl AssetBehavior for Board {
    fn spawn(
        &self,
        _registry: &AssetRegistry,
        scene: &mut dyn SceneSpawner,
        scale: f32,
        placement: &Placement,
    ) -> Result<Option<ObjectKey>> {
        let object = scene.instantiate(PrefabKind::Board, placement.position, placement.rotation)?;
        apply_size_override(scene, object, scale, placement.size)?;
        // Without authored art the prefab keeps its stock surface
        if self.has_surface() {
            scene.set_material(object, &self.material)?;
        }
        Ok(Some(object))
    }

    fn resource_names(&self) -> Vec<Option<&str>> {
        self.material.resource_names()
    }

    fn init_string_ids(&mut self, registry: &AssetRegistry) {
        self.material.init_string_ids(registry);
    }
}
