//! Deck asset

use glam::{Quat, Vec3};
use crate::asset::asset::{apply_size_override, AssetBehavior};
use crate::error::Result;
use crate::registry::{AssetRegistry, StringId, NO_STRING_ID};
use crate::scene::{ObjectKey, Placement, PrefabKind, SceneSpawner};

/// Footprint of one card (width, thickness, depth)
pub const CARD_SIZE: Vec3 = Vec3::new(2.0, 0.05, 2.8);

/// Face/back texture ids of one card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardData {
    pub card_id: StringId,
    pub card_back_id: StringId,
}

impl Default for CardData {
    fn default() -> Self {
        Self {
            card_id: NO_STRING_ID,
            card_back_id: NO_STRING_ID,
        }
    }
}

impl CardData {
    pub fn new(card_id: StringId, card_back_id: StringId) -> Self {
        Self { card_id, card_back_id }
    }
}

/// A stack of cards sharing one back texture
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Deck {
    /// Back texture path
    pub back: String,
    /// Face texture paths, bottom card first
    pub cards: Vec<String>,
    pub face_up: bool,
}

impl Deck {
    /// Card list handed to the deck-filling collaborator
    pub fn card_data(&self, registry: &AssetRegistry) -> Vec<CardData> {
        let back_id = registry.get_id(Some(self.back.as_str()));
        self.cards
            .iter()
            .map(|face| CardData::new(registry.get_id(Some(face.as_str())), back_id))
            .collect()
    }
}

impl AssetBehavior for Deck {
    fn spawn(
        &self,
        registry: &AssetRegistry,
        scene: &mut dyn SceneSpawner,
        scale: f32,
        placement: &Placement,
    ) -> Result<Option<ObjectKey>> {
        let object = scene.instantiate(PrefabKind::Deck, placement.position, placement.rotation)?;
        apply_size_override(scene, object, scale, placement.size)?;
        scene.fill_deck(object, self.card_data(registry), self.face_up)?;
        Ok(Some(object))
    }

    /// `vertical` 180°, `horizontal` 270° (top faces right),
    /// `horizontal_reversed` 90° (top faces left), yaw about +Y
    fn rotation(&self, orientation: &str) -> Quat {
        let degrees: f32 = match orientation {
            "vertical" => 180.0,
            "horizontal" => 270.0,
            "horizontal_reversed" => 90.0,
            _ => return Quat::IDENTITY,
        };
        Quat::from_rotation_y(degrees.to_radians())
    }

    fn size(&self) -> Vec3 {
        CARD_SIZE
    }

    fn resource_names(&self) -> Vec<Option<&str>> {
        self.cards
            .iter()
            .map(|face| Some(face.as_str()))
            .chain(std::iter::once(Some(self.back.as_str())))
            .collect()
    }
}
