//! Built-in asset table
//!
//! Assets bundled with the application. Their resources live under the
//! reserved `builtin://` scheme and are assigned ids before any mod asset.

use glam::Vec3;
use crate::asset::asset::Asset;
use crate::asset::asset_table::AssetTable;
use crate::asset::board::Board;
use crate::asset::dice::{Dice, PhysicsKind};
use crate::asset::material_maker::MaterialMaker;
use crate::asset::prefab::{BuiltinToken, Prefab};
use crate::scene::PrefabKind;

/// Footprint of a coin token
pub const COIN_SIZE: Vec3 = Vec3::new(0.8, 0.1, 0.8);

/// Declared-order table of built-in assets
#[derive(Debug, Clone, Default)]
pub struct BuiltinAssets {
    table: AssetTable,
}

impl BuiltinAssets {
    /// An empty table (mods may only use their own assets)
    pub fn empty() -> Self {
        Self::default()
    }

    /// The standard bundle: dice, token, board, silver_coin, gold_coin
    pub fn standard() -> Self {
        let mut table = AssetTable::new();

        let mut material = MaterialMaker::with_paths(
            Some("builtin://dice/d6_diffuse.png".to_string()),
            Some("builtin://dice/d6_normal.png".to_string()),
        );
        material.set_shininess(0.6);
        table.insert("dice", Asset::Dice(Dice {
            model: Some("builtin://dice/d6.obj".to_string()),
            model_scale: 1.0,
            material,
            physics_model: Some("builtin://dice/d6_physics.obj".to_string()),
            physics: PhysicsKind::Model,
        }));
        table.insert("token", Asset::Prefab(Prefab { kind: PrefabKind::Token }));
        table.insert("board", Asset::Board(Board::default()));
        table.insert("silver_coin", Asset::BuiltinToken(BuiltinToken {
            kind: PrefabKind::SilverCoin,
            footprint: COIN_SIZE,
        }));
        table.insert("gold_coin", Asset::BuiltinToken(BuiltinToken {
            kind: PrefabKind::GoldCoin,
            footprint: COIN_SIZE,
        }));

        Self { table }
    }

    pub fn table(&self) -> &AssetTable {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut AssetTable {
        &mut self.table
    }

    pub fn get(&self, name: &str) -> Option<&Asset> {
        self.table.get(name)
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.table.index_of(name)
    }
}
