//! RGBA to monochrome mask conversion.
//!
//! Alpha-blends each pixel against a white background, weighs the channels
//! with a luma approximation, and thresholds the gray sum into a 0/1 mask.
//! Unless trimming is disabled, the mask is cropped to the bounding box of
//! the dark pixels.

use tracing::debug;

// Perceptual luma channel weights.
const LUMA_R: f32 = 0.30;
const LUMA_G: f32 = 0.59;
const LUMA_B: f32 = 0.11;

/// Monochrome mask, one byte per pixel, 1 = dark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonoImage {
    /// Mask pixels in row-major order.
    pub pixels: Vec<u8>,
    /// Mask width in pixels, after cropping.
    pub width: u32,
    /// Mask height in pixels, after cropping.
    pub height: u32,
}

impl MonoImage {
    /// The empty zero-by-zero mask.
    pub fn empty() -> Self {
        Self {
            pixels: Vec::new(),
            width: 0,
            height: 0,
        }
    }
}

/// Blend one RGBA pixel against white and test the gray sum against the cutoff.
fn is_dark(rgba: &[u8], offset: usize, cutoff: f32) -> bool {
    let a = f32::from(rgba[offset + 3]) / 255.0;
    let r = f32::from(rgba[offset]) * LUMA_R * a + 255.0 * (1.0 - a);
    let g = f32::from(rgba[offset + 1]) * LUMA_G * a + 255.0 * (1.0 - a);
    let b = f32::from(rgba[offset + 2]) * LUMA_B * a + 255.0 * (1.0 - a);
    r + g + b <= cutoff
}

/// Convert an RGBA buffer into a monochrome mask.
///
/// `black` is the blackness threshold percent (1..=99); pixels whose blended
/// gray value is at or below `255 * black / 100` are dark. With `no_trim` the
/// mask covers the full canvas; otherwise it is cropped to the inclusive
/// bounding box of the dark pixels. An image with no dark pixel at all
/// produces the empty mask.
pub fn monochrome(rgba: &[u8], width: u32, height: u32, black: u8, no_trim: bool) -> MonoImage {
    debug_assert!(rgba.len() >= width as usize * height as usize * 4);
    let cutoff = 255.0 * f32::from(black) / 100.0;

    let (min_x, min_y, max_x, max_y) = if no_trim {
        if width == 0 || height == 0 {
            return MonoImage::empty();
        }
        (0, 0, width - 1, height - 1)
    } else {
        match dark_bounding_box(rgba, width, height, cutoff) {
            Some(bbox) => bbox,
            None => {
                debug!(width, height, "No dark pixels, mask is empty");
                return MonoImage::empty();
            }
        }
    };

    let crop_w = max_x - min_x + 1;
    let crop_h = max_y - min_y + 1;
    let mut pixels = Vec::with_capacity(crop_w as usize * crop_h as usize);
    for y in min_y..=max_y {
        let mut offset = (y as usize * width as usize + min_x as usize) * 4;
        for _ in min_x..=max_x {
            pixels.push(u8::from(is_dark(rgba, offset, cutoff)));
            offset += 4;
        }
    }

    debug!(
        width,
        height, crop_w, crop_h, min_x, min_y, "Monochrome mask built"
    );
    MonoImage {
        pixels,
        width: crop_w,
        height: crop_h,
    }
}

/// Inclusive bounding box of the dark pixels, or `None` when every pixel is light.
fn dark_bounding_box(
    rgba: &[u8],
    width: u32,
    height: u32,
    cutoff: f32,
) -> Option<(u32, u32, u32, u32)> {
    let mut min_x = width;
    let mut min_y = height;
    let mut max_x = 0;
    let mut max_y = 0;
    let mut found = false;

    let mut offset = 0;
    for y in 0..height {
        for x in 0..width {
            if is_dark(rgba, offset, cutoff) {
                min_x = min_x.min(x);
                min_y = min_y.min(y);
                max_x = max_x.max(x);
                max_y = max_y.max(y);
                found = true;
            }
            offset += 4;
        }
    }

    found.then_some((min_x, min_y, max_x, max_y))
}
