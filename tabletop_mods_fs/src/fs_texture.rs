//! Texture decoding

use tabletop_mods::tabletop::resource::Texture;
use tabletop_mods::tabletop::Result;
use tabletop_mods::tabletop_err;

const SOURCE: &str = "tabletop::fs";

/// Decode PNG/JPEG/BMP bytes into an RGBA8 texture
pub fn decode_texture(path: &str, bytes: &[u8]) -> Result<Texture> {
    let image = image::load_from_memory(bytes)
        .map_err(|e| tabletop_err!(DecodeError, SOURCE, "Failed to decode image '{}': {}", path, e))?;
    let rgba = image.to_rgba8();
    let (width, height) = rgba.dimensions();

    Texture::from_rgba8(path, width, height, rgba.into_raw()).ok_or_else(|| {
        tabletop_err!(DecodeError, SOURCE, "Image '{}' has inconsistent pixel data", path)
    })
}
