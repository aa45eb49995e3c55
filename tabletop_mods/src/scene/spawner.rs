//! Scene/object collaborator contract
//!
//! Assets materialize themselves through this trait. The implementation
//! creates the live object and replicates it to the other participants;
//! this crate only calls into it.

use glam::{Quat, Vec3};
use slotmap::new_key_type;
use crate::asset::{CardData, MaterialMaker};
use crate::error::Result;
use crate::registry::StringId;

new_key_type! {
    /// Stable key of a spawned object
    pub struct ObjectKey;
}

/// Prefab selector understood by the scene collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrefabKind {
    Dice,
    Deck,
    Token,
    Board,
    SilverCoin,
    GoldCoin,
}

impl PrefabKind {
    /// Boards are scenery; everything else can be picked up
    pub fn is_grabbable(self) -> bool {
        !matches!(self, PrefabKind::Board)
    }
}

/// World transform plus the authored size of one spawned instance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub position: Vec3,
    pub rotation: Quat,
    /// Exactly `Vec3::ONE` means "keep the prefab's native scale"
    pub size: Vec3,
}

/// Creates and configures live objects
pub trait SceneSpawner {
    /// Instantiate a prefab at a world transform
    fn instantiate(&mut self, prefab: PrefabKind, position: Vec3, rotation: Quat) -> Result<ObjectKey>;

    /// Override the object's native scale
    fn set_scale(&mut self, object: ObjectKey, scale: Vec3) -> Result<()>;

    /// Set the render model by string id
    fn set_model(&mut self, object: ObjectKey, model_id: StringId, model_scale: f32) -> Result<()>;

    /// Set the surface appearance
    fn set_material(&mut self, object: ObjectKey, material: &MaterialMaker) -> Result<()>;

    /// Use a mesh collider built from the given model id
    fn set_physics_model(&mut self, object: ObjectKey, physics_model_id: StringId) -> Result<()>;

    /// Use a box collider
    fn set_physics_box(&mut self, object: ObjectKey) -> Result<()>;

    /// Fill a deck object with cards, bottom first
    fn fill_deck(&mut self, object: ObjectKey, cards: Vec<CardData>, face_up: bool) -> Result<()>;
}
