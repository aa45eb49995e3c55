//! Tests for the asset variants
//!
//! Spawning goes through the in-memory Scene; ids come from a registry
//! populated with each asset's own resource names.

use super::*;
use crate::asset::{Board, BuiltinAssets, CardData, MaterialMaker, PhysicsKind, CARD_SIZE, COIN_SIZE, DIE_WIDTH};
use crate::registry::{MemoryResourceLoader, NO_STRING_ID};
use crate::scene::{PrefabKind, Scene};

// ============================================================================
// Helper Functions
// ============================================================================

fn poker_deck() -> Deck {
    Deck {
        back: "cards/back.png".to_string(),
        cards: vec![
            "cards/ace.png".to_string(),
            "cards/king.png".to_string(),
            "cards/queen.png".to_string(),
        ],
        face_up: false,
    }
}

fn registry_for(asset: &Asset) -> AssetRegistry {
    let mut registry = AssetRegistry::new(MemoryResourceLoader::new());
    registry.reset(Some("/mods/poker"));
    registry.assign_ids(asset.resource_names());
    registry
}

fn placement(size: Vec3) -> Placement {
    Placement {
        position: Vec3::new(1.0, 0.0, 2.0),
        rotation: Quat::IDENTITY,
        size,
    }
}

fn yaw_degrees(rotation: Quat) -> f32 {
    let (axis, angle) = rotation.to_axis_angle();
    let signed = if axis.y < 0.0 { -angle } else { angle };
    signed.to_degrees().rem_euclid(360.0)
}

// ============================================================================
// Tests: Base behavior
// ============================================================================

struct Inert;
impl AssetBehavior for Inert {}

#[test]
fn test_base_behavior_defaults() {
    let registry = AssetRegistry::new(MemoryResourceLoader::new());
    let mut scene = Scene::new();
    let mut inert = Inert;

    assert_eq!(inert.size(), Vec3::ONE);
    assert_eq!(inert.rotation("vertical"), Quat::IDENTITY);
    assert!(inert.resource_names().is_empty());
    inert.init_string_ids(&registry);
    assert_eq!(inert.spawn(&registry, &mut scene, 1.0, &placement(Vec3::ONE)), Ok(None));
    assert_eq!(scene.object_count(), 0);
}

// ============================================================================
// Tests: Deck
// ============================================================================

#[test]
fn test_deck_rotation_mapping() {
    let deck = Asset::Deck(poker_deck());

    assert!((yaw_degrees(deck.rotation("vertical")) - 180.0).abs() < 1e-3);
    assert!((yaw_degrees(deck.rotation("horizontal")) - 270.0).abs() < 1e-3);
    assert!((yaw_degrees(deck.rotation("horizontal_reversed")) - 90.0).abs() < 1e-3);
    assert_eq!(deck.rotation("diagonal"), Quat::IDENTITY);
    assert_eq!(deck.rotation(""), Quat::IDENTITY);
}

#[test]
fn test_deck_horizontal_orientations_are_mirrored() {
    let deck = Asset::Deck(poker_deck());
    let right = deck.rotation("horizontal") * Vec3::Z;
    let left = deck.rotation("horizontal_reversed") * Vec3::Z;
    assert!((right + left).length() < 1e-5);
    assert!((deck.rotation("vertical") * Vec3::Z + Vec3::Z).length() < 1e-5);
}

#[test]
fn test_deck_size_is_card_footprint() {
    let size = Asset::Deck(poker_deck()).size();
    assert_eq!(size, CARD_SIZE);
    assert_ne!(size.x, size.z);
}

#[test]
fn test_deck_resource_names_faces_then_back() {
    let deck = Asset::Deck(poker_deck());
    assert_eq!(
        deck.resource_names(),
        vec![
            Some("cards/ace.png"),
            Some("cards/king.png"),
            Some("cards/queen.png"),
            Some("cards/back.png"),
        ]
    );
}

#[test]
fn test_deck_spawn_fills_cards_sharing_back_id() {
    let deck = Asset::Deck(Deck { face_up: true, ..poker_deck() });
    let registry = registry_for(&deck);
    let mut scene = Scene::new();

    let key = deck.spawn(&registry, &mut scene, 1.0, &placement(Vec3::ONE)).unwrap().unwrap();

    let object = scene.object(key).unwrap();
    assert_eq!(object.prefab, PrefabKind::Deck);
    assert_eq!(object.position, Vec3::new(1.0, 0.0, 2.0));
    assert!(object.face_up);
    assert_eq!(
        object.cards,
        vec![CardData::new(0, 3), CardData::new(1, 3), CardData::new(2, 3)]
    );
}

// ============================================================================
// Tests: Size sentinel
// ============================================================================

#[test]
fn test_unit_size_keeps_native_scale() {
    let deck = Asset::Deck(poker_deck());
    let registry = registry_for(&deck);
    let mut scene = Scene::new();

    let key = deck.spawn(&registry, &mut scene, 2.0, &placement(Vec3::ONE)).unwrap().unwrap();

    assert!(scene.object(key).unwrap().scale_override.is_none());
}

#[test]
fn test_non_unit_size_overrides_scale() {
    let token = Asset::Prefab(Prefab { kind: PrefabKind::Token });
    let registry = registry_for(&token);
    let mut scene = Scene::new();

    let key = token.spawn(&registry, &mut scene, 2.0, &placement(Vec3::new(1.0, 2.0, 1.0))).unwrap().unwrap();

    assert_eq!(scene.object(key).unwrap().scale_override, Some(Vec3::new(2.0, 4.0, 2.0)));
}

#[test]
fn test_nearly_unit_size_still_overrides() {
    let token = Asset::BuiltinToken(BuiltinToken { kind: PrefabKind::GoldCoin, footprint: COIN_SIZE });
    let registry = registry_for(&token);
    let mut scene = Scene::new();
    let size = Vec3::new(1.0, 1.0, 1.0 + f32::EPSILON);

    let key = token.spawn(&registry, &mut scene, 1.0, &placement(size)).unwrap().unwrap();

    assert_eq!(scene.object(key).unwrap().scale_override, Some(size));
}

// ============================================================================
// Tests: Dice
// ============================================================================

fn textured_dice(physics: PhysicsKind) -> Dice {
    let mut material = MaterialMaker::with_paths(Some("dice/red.png".into()), None);
    material.transparent = true;
    Dice {
        model: Some("dice/d8.obj".into()),
        model_scale: 0.5,
        material,
        physics_model: Some("dice/d8_hull.obj".into()),
        physics,
    }
}

#[test]
fn test_dice_resource_names_material_then_models() {
    let dice = Asset::Dice(textured_dice(PhysicsKind::Model));
    assert_eq!(
        dice.resource_names(),
        vec![Some("dice/red.png"), None, Some("dice/d8.obj"), Some("dice/d8_hull.obj")]
    );
}

#[test]
fn test_dice_size_is_die_width() {
    assert_eq!(Asset::Dice(Dice::default()).size(), Vec3::splat(DIE_WIDTH));
}

#[test]
fn test_dice_init_string_ids_reaches_material() {
    let mut dice = Asset::Dice(textured_dice(PhysicsKind::Model));
    let registry = registry_for(&dice);

    dice.init_string_ids(&registry);

    let Asset::Dice(inner) = &dice else { panic!("not dice") };
    assert_eq!(inner.material.diffuse_id, 0);
    assert_eq!(inner.material.normal_id, NO_STRING_ID);
}

#[test]
fn test_dice_spawn_pushes_ids() {
    let mut dice = Asset::Dice(textured_dice(PhysicsKind::Model));
    let registry = registry_for(&dice);
    dice.init_string_ids(&registry);
    let mut scene = Scene::new();

    let key = dice.spawn(&registry, &mut scene, 1.0, &placement(Vec3::ONE)).unwrap().unwrap();

    let object = scene.object(key).unwrap();
    let appearance = object.appearance.as_ref().unwrap();
    assert_eq!(object.prefab, PrefabKind::Dice);
    assert_eq!(object.model_scale, 0.5);
    assert_eq!(appearance.model_id, 1);
    assert_eq!(appearance.physics, PhysicsKind::Model);
    assert_eq!(appearance.physics_model_id, 2);
    assert_eq!(appearance.material.as_ref().unwrap().diffuse_id, 0);
    assert!(appearance.material.as_ref().unwrap().transparent);
}

#[test]
fn test_dice_box_physics() {
    let dice = Asset::Dice(textured_dice(PhysicsKind::Box));
    let registry = registry_for(&dice);
    let mut scene = Scene::new();

    let key = dice.spawn(&registry, &mut scene, 1.0, &placement(Vec3::ONE)).unwrap().unwrap();

    let appearance = scene.object(key).unwrap().appearance.clone().unwrap();
    assert_eq!(appearance.physics, PhysicsKind::Box);
    assert_eq!(appearance.physics_model_id, NO_STRING_ID);
}

#[test]
fn test_dice_physics_model_falls_back_to_model() {
    let dice = Dice { physics_model: None, ..textured_dice(PhysicsKind::Model) };
    assert_eq!(dice.physics_model_path(), Some("dice/d8.obj"));
}

// ============================================================================
// Tests: Board
// ============================================================================

fn felt_board() -> Board {
    Board {
        material: MaterialMaker::with_paths(Some("felt.png".to_string()), Some("felt_n.png".to_string())),
    }
}

#[test]
fn test_board_resource_names_and_ids() {
    let mut asset = Asset::Board(felt_board());
    assert_eq!(asset.resource_names(), vec![Some("felt.png"), Some("felt_n.png")]);

    let registry = registry_for(&asset);
    asset.init_string_ids(&registry);

    let Asset::Board(board) = &asset else { unreachable!() };
    assert_eq!(board.material.diffuse_id, 0);
    assert_eq!(board.material.normal_id, 1);
}

#[test]
fn test_board_spawn_applies_surface() {
    let mut asset = Asset::Board(felt_board());
    let registry = registry_for(&asset);
    asset.init_string_ids(&registry);
    let mut scene = Scene::new();

    let key = asset.spawn(&registry, &mut scene, 1.0, &placement(Vec3::ONE)).unwrap().unwrap();

    let object = scene.object(key).unwrap();
    assert_eq!(object.prefab, PrefabKind::Board);
    let material = object.appearance.as_ref().and_then(|a| a.material.as_ref()).unwrap();
    assert_eq!(material.diffuse_id, 0);
}

#[test]
fn test_board_without_surface_keeps_stock_material() {
    let asset = Asset::Board(Board::default());
    let registry = registry_for(&asset);
    let mut scene = Scene::new();

    let key = asset.spawn(&registry, &mut scene, 1.0, &placement(Vec3::ONE)).unwrap().unwrap();

    assert!(scene.object(key).unwrap().appearance.is_none());
    assert!(asset.resource_names().into_iter().flatten().next().is_none());
}

// ============================================================================
// Tests: Variant metadata
// ============================================================================

#[test]
fn test_kind_names_and_grabbable() {
    let builtins = BuiltinAssets::standard();
    assert_eq!(builtins.get("dice").unwrap().kind_name(), "dice");
    assert_eq!(builtins.get("token").unwrap().kind_name(), "prefab");
    assert_eq!(builtins.get("gold_coin").unwrap().kind_name(), "builtin_token");
    assert_eq!(Asset::Deck(poker_deck()).kind_name(), "deck");
    assert_eq!(builtins.get("board").unwrap().kind_name(), "board");

    assert!(!builtins.get("board").unwrap().is_grabbable());
    assert!(builtins.get("token").unwrap().is_grabbable());
    assert!(builtins.get("dice").unwrap().is_grabbable());
}

#[test]
fn test_builtin_declared_order() {
    let builtins = BuiltinAssets::standard();
    let names: Vec<&str> = builtins.table().iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["dice", "token", "board", "silver_coin", "gold_coin"]);
    assert_eq!(builtins.get("silver_coin").unwrap().size(), COIN_SIZE);
}

#[test]
fn test_builtin_resources_use_builtin_scheme() {
    let builtins = BuiltinAssets::standard();
    let names: Vec<&str> = builtins.table().resource_names().flatten().collect();
    assert_eq!(names.len(), 4);
    assert!(names.iter().all(|n| n.starts_with("builtin://")));
}
