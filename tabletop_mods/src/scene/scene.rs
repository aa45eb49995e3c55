//! In-memory implementation of the scene collaborator
//!
//! Uses a SlotMap for O(1) insert/remove with stable keys. Records every
//! setter call, so it serves as the reference collaborator for headless
//! sessions and as the observation point in tests.

use glam::{Quat, Vec3};
use rustc_hash::FxHashSet;
use slotmap::SlotMap;
use crate::asset::{CardData, MaterialMaker, PhysicsKind};
use crate::error::{Error, Result};
use crate::registry::StringId;
use crate::replication::{DiceAppearance, StateStream};
use super::spawner::{ObjectKey, PrefabKind, SceneSpawner};

/// One live object
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    pub prefab: PrefabKind,
    pub position: Vec3,
    pub rotation: Quat,
    /// `None` while the prefab keeps its native scale
    pub scale_override: Option<Vec3>,
    pub model_scale: f32,
    /// Replicated appearance (dice, and boards with their own surface)
    pub appearance: Option<DiceAppearance>,
    /// Cards, bottom first (decks only)
    pub cards: Vec<CardData>,
    pub face_up: bool,
}

impl SceneObject {
    fn new(prefab: PrefabKind, position: Vec3, rotation: Quat) -> Self {
        Self {
            prefab,
            position,
            rotation,
            scale_override: None,
            model_scale: 1.0,
            appearance: None,
            cards: Vec::new(),
            face_up: false,
        }
    }

    fn appearance_mut(&mut self) -> &mut DiceAppearance {
        self.appearance.get_or_insert_with(DiceAppearance::default)
    }
}

/// Collection of spawned objects
#[derive(Debug, Default)]
pub struct Scene {
    objects: SlotMap<ObjectKey, SceneObject>,
    /// Keys in spawn order
    spawn_order: Vec<ObjectKey>,
    /// Objects created since the last take_new_objects()
    new_objects: FxHashSet<ObjectKey>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn object(&self, key: ObjectKey) -> Option<&SceneObject> {
        self.objects.get(key)
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Live objects in the order they were spawned
    pub fn objects_in_spawn_order(&self) -> impl Iterator<Item = (ObjectKey, &SceneObject)> {
        self.spawn_order
            .iter()
            .filter_map(|&key| self.objects.get(key).map(|object| (key, object)))
    }

    /// Drain the set of objects created since the last call
    pub fn take_new_objects(&mut self) -> FxHashSet<ObjectKey> {
        std::mem::take(&mut self.new_objects)
    }

    /// Remove an object; returns it if it existed
    pub fn remove_object(&mut self, key: ObjectKey) -> Option<SceneObject> {
        let removed = self.objects.remove(key)?;
        self.spawn_order.retain(|&k| k != key);
        self.new_objects.remove(&key);
        Some(removed)
    }

    /// Remove every object (mod switch)
    pub fn clear(&mut self) {
        self.objects.clear();
        self.spawn_order.clear();
        self.new_objects.clear();
    }

    /// Write or read the replicated appearance of a die
    pub fn serialize_appearance(&mut self, key: ObjectKey, stream: &mut dyn StateStream) -> Result<()> {
        self.object_mut(key)?.appearance_mut().serialize(stream)
    }

    fn object_mut(&mut self, key: ObjectKey) -> Result<&mut SceneObject> {
        self.objects
            .get_mut(key)
            .ok_or_else(|| Error::SpawnFailed(format!("unknown object {:?}", key)))
    }
}

impl SceneSpawner for Scene {
    fn instantiate(&mut self, prefab: PrefabKind, position: Vec3, rotation: Quat) -> Result<ObjectKey> {
        let key = self.objects.insert(SceneObject::new(prefab, position, rotation));
        self.spawn_order.push(key);
        self.new_objects.insert(key);
        Ok(key)
    }

    fn set_scale(&mut self, object: ObjectKey, scale: Vec3) -> Result<()> {
        self.object_mut(object)?.scale_override = Some(scale);
        Ok(())
    }

    fn set_model(&mut self, object: ObjectKey, model_id: StringId, model_scale: f32) -> Result<()> {
        let object = self.object_mut(object)?;
        object.model_scale = model_scale;
        object.appearance_mut().model_id = model_id;
        Ok(())
    }

    fn set_material(&mut self, object: ObjectKey, material: &MaterialMaker) -> Result<()> {
        self.object_mut(object)?.appearance_mut().material = Some(material.clone());
        Ok(())
    }

    fn set_physics_model(&mut self, object: ObjectKey, physics_model_id: StringId) -> Result<()> {
        let appearance = self.object_mut(object)?.appearance_mut();
        appearance.physics = PhysicsKind::Model;
        appearance.physics_model_id = physics_model_id;
        Ok(())
    }

    fn set_physics_box(&mut self, object: ObjectKey) -> Result<()> {
        self.object_mut(object)?.appearance_mut().physics = PhysicsKind::Box;
        Ok(())
    }

    fn fill_deck(&mut self, object: ObjectKey, cards: Vec<CardData>, face_up: bool) -> Result<()> {
        let object = self.object_mut(object)?;
        object.cards = cards;
        object.face_up = face_up;
        Ok(())
    }
}

#[cfg(test)]
#[path = "scene_tests.rs"]
mod tests;
