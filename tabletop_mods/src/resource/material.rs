//! Resource-level material type.
//!
//! A Material is a pure data description of a surface: a shader family name,
//! optional diffuse/normal textures and scalar parameters. Constructing GPU
//! objects from it is the renderer's business.

use std::sync::Arc;
use crate::resource::texture::Texture;

/// Surface description built from a base material and resolved textures
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    shader: String,
    diffuse: Option<Arc<Texture>>,
    normal: Option<Arc<Texture>>,
    shininess: Option<f32>,
    transparent: bool,
}

impl Material {
    /// Create an untextured material for a shader family
    pub fn new(shader: impl Into<String>) -> Self {
        Self {
            shader: shader.into(),
            diffuse: None,
            normal: None,
            shininess: None,
            transparent: false,
        }
    }

    /// Copy of this material with the diffuse texture replaced
    pub fn with_diffuse(&self, texture: Arc<Texture>) -> Self {
        Self {
            diffuse: Some(texture),
            ..self.clone()
        }
    }

    /// Copy of this material with the normal map replaced
    pub fn with_normal(&self, texture: Arc<Texture>) -> Self {
        Self {
            normal: Some(texture),
            ..self.clone()
        }
    }

    /// Copy of this material with a specular shininess in (0, 1]
    pub fn with_shininess(&self, shininess: f32) -> Self {
        Self {
            shininess: Some(shininess),
            ..self.clone()
        }
    }

    /// Copy of this material with transparency toggled
    pub fn with_transparent(&self, transparent: bool) -> Self {
        Self {
            transparent,
            ..self.clone()
        }
    }

    // ===== ACCESSORS =====

    pub fn shader(&self) -> &str {
        &self.shader
    }

    pub fn diffuse(&self) -> Option<&Arc<Texture>> {
        self.diffuse.as_ref()
    }

    pub fn normal(&self) -> Option<&Arc<Texture>> {
        self.normal.as_ref()
    }

    pub fn shininess(&self) -> Option<f32> {
        self.shininess
    }

    pub fn is_transparent(&self) -> bool {
        self.transparent
    }
}

#[cfg(test)]
#[path = "material_tests.rs"]
mod tests;
