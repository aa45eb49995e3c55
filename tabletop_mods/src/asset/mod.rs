//! Mod asset model
//!
//! Asset variants (Dice, Deck, Board, Prefab, BuiltinToken), their shared
//! capability set, and the tables that hold them.

mod asset;
mod asset_table;
mod board;
mod builtin;
mod deck;
mod dice;
mod material_maker;
mod prefab;

pub use asset::{Asset, AssetBehavior};
pub use asset_table::{AssetRef, AssetTable};
pub use board::Board;
pub use builtin::{BuiltinAssets, COIN_SIZE};
pub use deck::{CardData, Deck, CARD_SIZE};
pub use dice::{Dice, PhysicsKind, DIE_WIDTH};
pub use material_maker::{MaterialMaker, NO_SHININESS};
pub use prefab::{BuiltinToken, Prefab};
