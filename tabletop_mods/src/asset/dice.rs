//! Dice asset

use glam::Vec3;
use crate::asset::asset::{apply_size_override, AssetBehavior};
use crate::asset::material_maker::MaterialMaker;
use crate::error::Result;
use crate::registry::{AssetRegistry, NO_STRING_ID};
use crate::scene::{ObjectKey, Placement, PrefabKind, SceneSpawner};

/// Width of one die, in world units
pub const DIE_WIDTH: f32 = 1.0;

/// Collider shape of a die
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhysicsKind {
    Box,
    Model,
}

impl PhysicsKind {
    /// Wire value
    pub fn as_i32(self) -> i32 {
        match self {
            PhysicsKind::Box => 0,
            PhysicsKind::Model => 1,
        }
    }

    pub fn from_i32(value: i32) -> Option<Self> {
        match value {
            0 => Some(PhysicsKind::Box),
            1 => Some(PhysicsKind::Model),
            _ => None,
        }
    }

    /// Parse the document spelling (`"box"` / `"model"`)
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "box" => Some(PhysicsKind::Box),
            "model" => Some(PhysicsKind::Model),
            _ => None,
        }
    }
}

/// A die with its own model, material and collider
#[derive(Debug, Clone, PartialEq)]
pub struct Dice {
    /// Render model path
    pub model: Option<String>,
    pub model_scale: f32,
    pub material: MaterialMaker,
    /// Collider model path (falls back to `model`)
    pub physics_model: Option<String>,
    pub physics: PhysicsKind,
}

impl Default for Dice {
    fn default() -> Self {
        Self {
            model: None,
            model_scale: 1.0,
            material: MaterialMaker::default(),
            physics_model: None,
            physics: PhysicsKind::Model,
        }
    }
}

impl Dice {
    /// Path the collider is built from
    pub fn physics_model_path(&self) -> Option<&str> {
        self.physics_model.as_deref().or(self.model.as_deref())
    }
}

impl AssetBehavior for Dice {
    fn spawn(
        &self,
        registry: &AssetRegistry,
        scene: &mut dyn SceneSpawner,
        scale: f32,
        placement: &Placement,
    ) -> Result<Option<ObjectKey>> {
        let object = scene.instantiate(PrefabKind::Dice, placement.position, placement.rotation)?;
        apply_size_override(scene, object, scale, placement.size)?;

        let model_id = registry.get_id(self.model.as_deref());
        if model_id != NO_STRING_ID {
            scene.set_model(object, model_id, self.model_scale)?;
        }
        scene.set_material(object, &self.material)?;

        match self.physics {
            PhysicsKind::Box => scene.set_physics_box(object)?,
            PhysicsKind::Model => {
                let physics_id = registry.get_id(self.physics_model_path());
                if physics_id != NO_STRING_ID {
                    scene.set_physics_model(object, physics_id)?;
                }
            }
        }
        Ok(Some(object))
    }

    fn size(&self) -> Vec3 {
        Vec3::splat(DIE_WIDTH)
    }

    fn resource_names(&self) -> Vec<Option<&str>> {
        let mut names = self.material.resource_names();
        names.push(self.model.as_deref());
        names.push(self.physics_model.as_deref());
        names
    }

    fn init_string_ids(&mut self, registry: &AssetRegistry) {
        self.material.init_string_ids(registry);
    }
}
