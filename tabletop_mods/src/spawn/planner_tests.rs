//! Tests for grid and singleton placement

use super::*;
use glam::{Quat, Vec2};
use crate::asset::{AssetRef, BuiltinToken, Deck, Prefab, CARD_SIZE};
use crate::registry::MemoryResourceLoader;
use crate::scene::{PrefabKind, Scene};

// ============================================================================
// Helper Functions
// ============================================================================

fn token() -> Asset {
    Asset::Prefab(Prefab { kind: PrefabKind::Token })
}

fn deck() -> Asset {
    Asset::Deck(Deck {
        back: "back.png".to_string(),
        cards: vec!["a.png".to_string()],
        face_up: false,
    })
}

fn rule(count: u32) -> SpawnRule {
    SpawnRule {
        pos: Vec2::new(2.0, -1.0),
        count,
        ..SpawnRule::new(AssetRef::Builtin(1), "token")
    }
}

fn sum(offsets: &[Vec3]) -> Vec3 {
    offsets.iter().copied().sum()
}

// ============================================================================
// Tests: grid_offsets
// ============================================================================

#[test]
fn test_single_copy_has_no_offset() {
    assert_eq!(grid_offsets(1, CARD_SIZE), vec![Vec3::ZERO]);
}

#[test]
fn test_zero_count_treated_as_one() {
    assert_eq!(grid_offsets(0, Vec3::ONE), vec![Vec3::ZERO]);
}

#[test]
fn test_four_copies_form_centered_square() {
    let offsets = grid_offsets(4, CARD_SIZE);

    assert_eq!(offsets.len(), 4);
    assert!(sum(&offsets).length() < 1e-5);

    let dx = GRID_SPACING * CARD_SIZE.x / 2.0;
    let dz = GRID_SPACING * CARD_SIZE.z / 2.0;
    for expected in [
        Vec3::new(dx, 0.0, -dz),
        Vec3::new(dx, 0.0, dz),
        Vec3::new(-dx, 0.0, -dz),
        Vec3::new(-dx, 0.0, dz),
    ] {
        assert!(offsets.iter().any(|o| (*o - expected).length() < 1e-5), "missing {:?}", expected);
    }
}

#[test]
fn test_five_copies_use_three_rows() {
    let offsets = grid_offsets(5, Vec3::ONE);

    assert_eq!(offsets.len(), 5);
    let mut rows: Vec<i32> = offsets.iter().map(|o| (o.x / GRID_SPACING).round() as i32).collect();
    rows.dedup();
    assert_eq!(rows.len(), 3);
    // Two copies per row, the last row holds the remainder
    assert_eq!(offsets[0].x, offsets[1].x);
    assert_eq!(offsets[2].x, offsets[3].x);
    assert!(offsets[4].x < offsets[2].x);
}

#[test]
fn test_grid_spacing_follows_footprint() {
    let offsets = grid_offsets(4, Vec3::new(2.0, 1.0, 4.0));
    assert!((offsets[1].z - offsets[0].z - 6.0).abs() < 1e-5);
    assert!((offsets[0].x - offsets[2].x - 3.0).abs() < 1e-5);
    assert_eq!(offsets.iter().map(|o| o.y).sum::<f32>(), 0.0);
}

// ============================================================================
// Tests: plan_spawn
// ============================================================================

#[test]
fn test_single_placement_is_scaled_position() {
    let mut single = rule(1);
    let placements = plan_spawn(&mut single, &token(), 2.0, 0.5);

    assert_eq!(placements.len(), 1);
    assert_eq!(placements[0].position, Vec3::new(2.0, 0.0, -1.0));
    assert_eq!(placements[0].size, Vec3::ONE);
    assert_eq!(placements[0].rotation, Quat::IDENTITY);
}

#[test]
fn test_grid_centered_on_scaled_anchor() {
    let mut grid = rule(4);
    let placements = plan_spawn(&mut grid, &token(), 3.0, 1.0);

    let center: Vec3 = placements.iter().map(|p| p.position).sum::<Vec3>() / 4.0;
    assert!((center - Vec3::new(6.0, 0.0, -3.0)).length() < 1e-4);
    assert!(placements.iter().all(|p| p.size == Vec3::ONE));
}

#[test]
fn test_named_rotation_overrides_explicit() {
    let mut named = SpawnRule {
        rot: Quat::from_rotation_x(1.0),
        rot_str: Some("vertical".to_string()),
        ..rule(1)
    };
    let asset = deck();
    let placements = plan_spawn(&mut named, &asset, 1.0, 1.0);

    assert_eq!(placements[0].rotation, asset.rotation("vertical"));
    assert_eq!(named.rot, asset.rotation("vertical"));
}

#[test]
fn test_unknown_name_still_overrides_with_identity() {
    let mut named = SpawnRule {
        rot: Quat::from_rotation_x(1.0),
        rot_str: Some("sideways".to_string()),
        ..rule(1)
    };
    let placements = plan_spawn(&mut named, &deck(), 1.0, 1.0);
    assert_eq!(placements[0].rotation, Quat::IDENTITY);
}

#[test]
fn test_explicit_rotation_kept_without_name() {
    let rot = Quat::from_rotation_y(0.25);
    let mut explicit = SpawnRule { rot, ..rule(2) };
    let placements = plan_spawn(&mut explicit, &deck(), 1.0, 1.0);
    assert!(placements.iter().all(|p| p.rotation == rot));
}

// ============================================================================
// Tests: execute_rule
// ============================================================================

#[test]
fn test_execute_rule_creates_every_copy() {
    let registry = AssetRegistry::new(MemoryResourceLoader::new());
    let mut scene = Scene::new();
    let mut grid = SpawnRule { size: Vec3::splat(2.0), ..rule(5) };

    let keys = execute_rule(&mut grid, &token(), &registry, &mut scene, 2.0, 1.0).unwrap();

    assert_eq!(keys.len(), 5);
    assert_eq!(scene.object_count(), 5);
    for key in keys {
        let object = scene.object(key).unwrap();
        assert_eq!(object.prefab, PrefabKind::Token);
        assert_eq!(object.scale_override, Some(Vec3::splat(4.0)));
    }
}

#[test]
fn test_execute_rule_unit_size_keeps_native_scale() {
    let registry = AssetRegistry::new(MemoryResourceLoader::new());
    let mut scene = Scene::new();
    let coin = Asset::BuiltinToken(BuiltinToken { kind: PrefabKind::GoldCoin, footprint: Vec3::ONE });

    let keys = execute_rule(&mut rule(1), &coin, &registry, &mut scene, 2.0, 1.0).unwrap();

    assert!(scene.object(keys[0]).unwrap().scale_override.is_none());
}
