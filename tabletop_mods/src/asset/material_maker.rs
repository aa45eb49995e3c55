//! Surface appearance recipe carried by mod assets.
//!
//! A MaterialMaker starts with resource paths (known to the participant that
//! loaded the mod) and gains integer ids during `init_string_ids`. Only the
//! ids and scalar parameters travel over the network; receivers rebuild the
//! Material from their own registry.

use crate::registry::{AssetRegistry, StringId, NO_STRING_ID};
use crate::resource::Material;
use crate::tabletop_warn;

const SOURCE: &str = "tabletop::MaterialMaker";

/// Shininess value meaning "not specular"
pub const NO_SHININESS: f32 = -1.0;

/// Describes a surface: diffuse/normal textures, shininess, transparency
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialMaker {
    /// Authored diffuse texture path
    pub diffuse_path: Option<String>,
    /// Authored normal map path
    pub normal_path: Option<String>,
    /// Resolved diffuse id (`NO_STRING_ID` until `init_string_ids`)
    pub diffuse_id: StringId,
    /// Resolved normal map id (`NO_STRING_ID` until `init_string_ids`)
    pub normal_id: StringId,
    /// `NO_SHININESS`, or a value in (0, 1]
    pub shininess: f32,
    pub transparent: bool,
}

impl Default for MaterialMaker {
    fn default() -> Self {
        Self {
            diffuse_path: None,
            normal_path: None,
            diffuse_id: NO_STRING_ID,
            normal_id: NO_STRING_ID,
            shininess: NO_SHININESS,
            transparent: false,
        }
    }
}

impl MaterialMaker {
    /// Create a maker from authored texture paths
    pub fn with_paths(diffuse: Option<String>, normal: Option<String>) -> Self {
        Self {
            diffuse_path: diffuse,
            normal_path: normal,
            ..Self::default()
        }
    }

    /// Set shininess if it lies in (0, 1]; anything else leaves it unset
    pub fn set_shininess(&mut self, shininess: f32) -> bool {
        if shininess > 0.0 && shininess <= 1.0 {
            self.shininess = shininess;
            true
        } else {
            false
        }
    }

    pub fn has_shininess(&self) -> bool {
        self.shininess >= 0.0
    }

    /// Authored paths in id-assignment order (diffuse, normal)
    pub fn resource_names(&self) -> Vec<Option<&str>> {
        vec![self.diffuse_path.as_deref(), self.normal_path.as_deref()]
    }

    /// Replace paths with ids from the active registry
    pub fn init_string_ids(&mut self, registry: &AssetRegistry) {
        self.diffuse_id = registry.get_id(self.diffuse_path.as_deref());
        self.normal_id = registry.get_id(self.normal_path.as_deref());
    }

    /// Shader family derived from the recipe
    ///
    /// `Diffuse` or `Specular`, prefixed `Bumped ` with a normal map and
    /// `Transparent/` when transparent.
    pub fn shader_name(&self) -> String {
        let mut name = if self.has_shininess() { "Specular" } else { "Diffuse" }.to_string();
        if self.normal_id != NO_STRING_ID {
            name = format!("Bumped {}", name);
        }
        if self.transparent {
            name = format!("Transparent/{}", name);
        }
        name
    }

    /// Build a Material from the resolved ids.
    ///
    /// Missing textures degrade to an untextured slot; this never fails.
    pub fn make(&self, registry: &mut AssetRegistry) -> Material {
        let mut material = Material::new(self.shader_name());

        if self.diffuse_id != NO_STRING_ID {
            match registry.get_texture(self.diffuse_id) {
                Ok(texture) => material = material.with_diffuse(texture),
                Err(err) => tabletop_warn!(SOURCE, "Diffuse texture missing: {}", err),
            }
        }
        if self.normal_id != NO_STRING_ID {
            match registry.get_texture(self.normal_id) {
                Ok(texture) => material = material.with_normal(texture),
                Err(err) => tabletop_warn!(SOURCE, "Normal map missing: {}", err),
            }
        }
        if self.has_shininess() {
            material = material.with_shininess(self.shininess);
        }
        material.with_transparent(self.transparent)
    }
}

#[cfg(test)]
#[path = "material_maker_tests.rs"]
mod tests;
