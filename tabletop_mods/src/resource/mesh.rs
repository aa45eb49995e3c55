//! Decoded mesh data

use glam::Vec3;

/// A decoded triangle mesh (positions, normals, indices)
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    path: String,
    positions: Vec<Vec3>,
    normals: Vec<Vec3>,
    indices: Vec<u32>,
}

impl Mesh {
    /// Create a mesh
    ///
    /// `normals` may be empty; otherwise it must match `positions` in length.
    /// Returns `None` on mismatched normals or out-of-range indices.
    pub fn new(
        path: impl Into<String>,
        positions: Vec<Vec3>,
        normals: Vec<Vec3>,
        indices: Vec<u32>,
    ) -> Option<Self> {
        if !normals.is_empty() && normals.len() != positions.len() {
            return None;
        }
        if indices.iter().any(|&i| i as usize >= positions.len()) {
            return None;
        }
        Some(Self {
            path: path.into(),
            positions,
            normals,
            indices,
        })
    }

    /// Normalized path this mesh was decoded from
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Axis-aligned extent of the mesh (zero for an empty mesh)
    pub fn extent(&self) -> Vec3 {
        let Some(first) = self.positions.first() else {
            return Vec3::ZERO;
        };
        let (min, max) = self.positions.iter().fold((*first, *first), |(min, max), p| {
            (min.min(*p), max.max(*p))
        });
        max - min
    }
}

#[cfg(test)]
#[path = "mesh_tests.rs"]
mod tests;
