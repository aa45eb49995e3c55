//! Decoded texture data

/// A decoded RGBA8 texture
#[derive(Debug, Clone, PartialEq)]
pub struct Texture {
    path: String,
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Texture {
    /// Create a texture from tightly packed RGBA8 pixels
    ///
    /// Returns `None` if the pixel buffer does not match `width * height * 4`.
    pub fn from_rgba8(path: impl Into<String>, width: u32, height: u32, pixels: Vec<u8>) -> Option<Self> {
        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected {
            return None;
        }
        Some(Self {
            path: path.into(),
            width,
            height,
            pixels,
        })
    }

    /// A 1x1 texture of a single color
    pub fn solid(path: impl Into<String>, rgba: [u8; 4]) -> Self {
        Self {
            path: path.into(),
            width: 1,
            height: 1,
            pixels: rgba.to_vec(),
        }
    }

    /// Normalized path this texture was decoded from
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA8 pixel bytes, row-major
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}
