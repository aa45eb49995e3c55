//! Spawn planner
//!
//! Computes the world transforms of every copy a rule asks for, then hands
//! each one to the asset's spawn behavior.
//!
//! Grid layout for `count > 1`: `per_row = floor(sqrt(count))`, spacing is
//! `GRID_SPACING` times the asset footprint. Rows advance along -X, columns
//! along +Z, and the full rows are centered on the anchor.

use glam::Vec3;
use crate::asset::Asset;
use crate::error::Result;
use crate::registry::AssetRegistry;
use crate::scene::{ObjectKey, Placement, SceneSpawner};
use crate::spawn::spawn_rule::SpawnRule;
use crate::tabletop_debug;

const SOURCE: &str = "tabletop::SpawnPlanner";

/// Distance between grid neighbours, in footprints
pub const GRID_SPACING: f32 = 1.5;

/// Offsets of `count` grid copies relative to the anchor
///
/// A single copy has no offset.
pub fn grid_offsets(count: u32, footprint: Vec3) -> Vec<Vec3> {
    let count = count.max(1);
    if count == 1 {
        return vec![Vec3::ZERO];
    }

    let per_row = ((count as f64).sqrt().floor() as u32).max(1);
    let step_x = GRID_SPACING * footprint.x;
    let step_z = GRID_SPACING * footprint.z;
    let row_step = Vec3::new(-step_x, 0.0, 0.0);
    let col_step = Vec3::new(0.0, 0.0, step_z);
    let initial = Vec3::new(step_x, 0.0, -step_z) * ((per_row - 1) as f32 / 2.0);

    (0..count)
        .map(|i| {
            let row = (i / per_row) as f32;
            let col = (i % per_row) as f32;
            initial + row_step * row + col_step * col
        })
        .collect()
}

/// Plan every placement of a rule
///
/// Resolves the rule's named orientation first, so a name always wins over
/// an explicit rotation.
pub fn plan_spawn(
    rule: &mut SpawnRule,
    asset: &Asset,
    global_scale: f32,
    reference_scale: f32,
) -> Vec<Placement> {
    let rotation = rule.resolve_rotation(asset);
    let scaled = rule.pos * global_scale * reference_scale;
    let anchor = Vec3::new(scaled.x, 0.0, scaled.y);

    grid_offsets(rule.count, asset.size())
        .into_iter()
        .map(|offset| Placement {
            position: anchor + offset,
            rotation,
            size: rule.size,
        })
        .collect()
}

/// Plan a rule and spawn every placement through the scene collaborator
///
/// Returns the keys of the objects created. Assets whose spawn is a no-op
/// contribute nothing.
pub fn execute_rule(
    rule: &mut SpawnRule,
    asset: &Asset,
    registry: &AssetRegistry,
    scene: &mut dyn SceneSpawner,
    global_scale: f32,
    reference_scale: f32,
) -> Result<Vec<ObjectKey>> {
    let scale = global_scale * reference_scale;
    let placements = plan_spawn(rule, asset, global_scale, reference_scale);
    tabletop_debug!(SOURCE, "Spawning {} x '{}'", placements.len(), rule.asset_name);

    let mut spawned = Vec::with_capacity(placements.len());
    for placement in &placements {
        if let Some(key) = asset.spawn(registry, scene, scale, placement)? {
            spawned.push(key);
        }
    }
    Ok(spawned)
}

#[cfg(test)]
#[path = "planner_tests.rs"]
mod tests;
