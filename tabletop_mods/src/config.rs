//! Session configuration
//!
//! Fixed table geometry and scanning parameters shared by every mod loaded
//! into a session.

use glam::Vec2;
use serde::Deserialize;
use crate::error::Result;

/// Configuration for a mod session
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    /// Edge length of the physical play surface, in world units
    pub play_area_extent: f32,
    /// Bounds assigned to a mod that does not declare `bounds`
    pub reference_bounds: [f32; 2],
    /// File name of the per-mod description inside each mod directory
    pub meta_file_name: String,
    /// Upper bound on `count` for one instance entry; larger counts are clamped
    pub max_instance_count: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            play_area_extent: 16.0,
            reference_bounds: [16.0, 16.0],
            meta_file_name: "meta.json".to_string(),
            max_instance_count: 1024,
        }
    }
}

impl SessionConfig {
    /// Parse a configuration from JSON text (missing keys take defaults)
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reference bounds as a vector
    pub fn reference_bounds(&self) -> Vec2 {
        Vec2::from(self.reference_bounds)
    }

    /// Factor mapping a mod's declared bounds onto the play surface
    pub fn global_scale(&self, bounds: Vec2) -> f32 {
        let extent = bounds.max_element();
        if extent > 0.0 {
            self.play_area_extent / extent
        } else {
            1.0
        }
    }

    /// Correction applied when the mod relies on the reference bounds
    pub fn reference_scale(&self, bounds_declared: bool) -> f32 {
        if bounds_declared || self.play_area_extent <= 0.0 {
            1.0
        } else {
            self.reference_bounds().max_element() / self.play_area_extent
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
