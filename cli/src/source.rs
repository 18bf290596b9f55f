//! Pixel acquisition boundary.
//!
//! The conversion pipeline only sees raw RGBA bytes and a width; anything
//! able to produce them (a decoded file, a screen grab) is a pixel source.

use std::path::Path;

use anyhow::Context as _;

/// A producer of raw RGBA frames.
pub trait PixelSource {
    /// Frame width in pixels.
    fn width(&self) -> u32;

    /// Raw RGBA bytes, row-major, 4 bytes per pixel.
    fn rgba(&self) -> &[u8];
}

/// Pixel source backed by a decoded PNG file.
pub struct PngSource {
    width: u32,
    data: Vec<u8>,
}

impl PngSource {
    /// Decode a PNG file into an RGBA frame.
    pub fn open(path: &Path) -> anyhow::Result<Self> {
        let img = image::open(path)
            .with_context(|| format!("cannot decode {}", path.display()))?
            .to_rgba8();
        Ok(Self {
            width: img.width(),
            data: img.into_raw(),
        })
    }
}

impl PixelSource for PngSource {
    fn width(&self) -> u32 {
        self.width
    }

    fn rgba(&self) -> &[u8] {
        &self.data
    }
}
