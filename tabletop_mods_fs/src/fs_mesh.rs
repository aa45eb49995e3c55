//! Wavefront OBJ decoding (positions, normals, indices; no materials)

use tabletop_mods::glam::Vec3;
use tabletop_mods::tabletop::resource::Mesh;
use tabletop_mods::tabletop::Result;
use tabletop_mods::{tabletop_bail, tabletop_err};

const SOURCE: &str = "tabletop::fs";

fn to_vec3s(flat: &[f32]) -> Vec<Vec3> {
    flat.chunks_exact(3).map(|c| Vec3::new(c[0], c[1], c[2])).collect()
}

/// Decode OBJ text into one mesh
///
/// Every object in the file is merged. Normals are kept only when every
/// object provides them.
pub fn decode_obj(path: &str, bytes: &[u8]) -> Result<Mesh> {
    let load_opts = tobj::LoadOptions {
        triangulate: true,
        single_index: true,
        ..Default::default()
    };
    let (models, _materials) = tobj::load_obj_buf(&mut &bytes[..], &load_opts, |_| {
        Ok((Vec::new(), Default::default()))
    })
    .map_err(|e| tabletop_err!(DecodeError, SOURCE, "Failed to parse OBJ '{}': {}", path, e))?;

    if models.is_empty() {
        tabletop_bail!(DecodeError, SOURCE, "No meshes in OBJ '{}'", path);
    }

    let with_normals = models.iter().all(|m| m.mesh.normals.len() == m.mesh.positions.len());
    let mut positions = Vec::new();
    let mut normals = Vec::new();
    let mut indices = Vec::new();
    for model in models {
        let mesh = model.mesh;
        let start = positions.len() as u32;
        let vertex_count = mesh.positions.len() as u32 / 3;

        positions.extend(to_vec3s(&mesh.positions));
        if with_normals {
            normals.extend(to_vec3s(&mesh.normals));
        }
        if mesh.indices.is_empty() {
            indices.extend(start..start + vertex_count);
        } else {
            indices.extend(mesh.indices.iter().map(|&i| start + i));
        }
    }

    Mesh::new(path, positions, normals, indices).ok_or_else(|| {
        tabletop_err!(DecodeError, SOURCE, "OBJ '{}' has out-of-range indices", path)
    })
}
