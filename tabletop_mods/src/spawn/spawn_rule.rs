//! Authored placement instruction

use glam::{Quat, Vec2, Vec3};
use crate::asset::{Asset, AssetRef};

/// One entry of a mod's `instances` list
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnRule {
    /// Asset this rule spawns (mod table first, then built-ins)
    pub asset: AssetRef,
    /// Asset name as authored
    pub asset_name: String,
    /// Authored position, already mirrored into table convention
    pub pos: Vec2,
    /// Exactly `Vec3::ONE` keeps the native scale
    pub size: Vec3,
    /// Explicit rotation
    pub rot: Quat,
    /// Named orientation; overrides `rot` whenever present
    pub rot_str: Option<String>,
    /// Number of copies, at least 1
    pub count: u32,
}

impl SpawnRule {
    /// A single unrotated, unscaled copy at the origin
    pub fn new(asset: AssetRef, asset_name: impl Into<String>) -> Self {
        Self {
            asset,
            asset_name: asset_name.into(),
            pos: Vec2::ZERO,
            size: Vec3::ONE,
            rot: Quat::IDENTITY,
            rot_str: None,
            count: 1,
        }
    }

    /// Resolve the named orientation through the asset, if one is set
    pub fn resolve_rotation(&mut self, asset: &Asset) -> Quat {
        if let Some(name) = &self.rot_str {
            self.rot = asset.rotation(name);
        }
        self.rot
    }
}
