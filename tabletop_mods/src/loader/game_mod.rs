//! Loaded mod

use glam::Vec2;
use crate::asset::AssetTable;
use crate::config::SessionConfig;
use crate::spawn::SpawnRule;

/// A parsed mod: metadata, assets and spawn instructions
#[derive(Debug, Clone)]
pub struct Mod {
    pub name: String,
    pub author: Option<String>,
    /// Normalized absolute directory; the sandbox root while active
    pub base_directory: String,
    /// Play-area width × height in mod coordinates
    pub bounds: Vec2,
    /// False when `bounds` fell back to the reference bounds
    pub bounds_declared: bool,
    pub min_players: Option<u32>,
    pub max_players: Option<u32>,
    /// Mod-defined assets in declaration order
    pub assets: AssetTable,
    /// Spawn instructions in declaration order
    pub instances: Vec<SpawnRule>,
}

impl Mod {
    /// An empty mod rooted at `base_directory`
    pub fn new(name: impl Into<String>, base_directory: impl Into<String>, config: &SessionConfig) -> Self {
        Self {
            name: name.into(),
            author: None,
            base_directory: base_directory.into(),
            bounds: config.reference_bounds(),
            bounds_declared: false,
            min_players: None,
            max_players: None,
            assets: AssetTable::new(),
            instances: Vec::new(),
        }
    }

    /// Factor mapping mod coordinates onto the play surface
    pub fn global_scale(&self, config: &SessionConfig) -> f32 {
        config.global_scale(self.bounds)
    }

    /// Correction for mods relying on the reference bounds
    pub fn reference_scale(&self, config: &SessionConfig) -> f32 {
        config.reference_scale(self.bounds_declared)
    }
}
