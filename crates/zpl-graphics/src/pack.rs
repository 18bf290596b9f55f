//! Bitmap rotation and bit packing.
//!
//! Packs a monochrome mask into row-aligned bytes, 8 pixels per byte,
//! MSB first, with each row padded to a byte boundary. Rotation is fused
//! into the packing scan so no intermediate rotated mask is materialized:
//! each variant just walks the mask in a different order.

use tracing::debug;

use crate::mono::MonoImage;

/// Rotation applied to the bitmap while packing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Rotation {
    /// Keep the original orientation.
    #[default]
    None,
    /// Rotate 90 degrees clockwise.
    Clockwise,
    /// Rotate 90 degrees counter-clockwise.
    CounterClockwise,
    /// Rotate 180 degrees.
    Inverted,
}

impl Rotation {
    /// Output dimensions for a mask of the given size.
    pub fn rotated_size(&self, width: u32, height: u32) -> (u32, u32) {
        match self {
            Rotation::None | Rotation::Inverted => (width, height),
            Rotation::Clockwise | Rotation::CounterClockwise => (height, width),
        }
    }
}

/// Bit-packed monochrome bitmap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedBitmap {
    /// Packed bytes, `row_bytes()` per row.
    pub data: Vec<u8>,
    /// Bitmap width in pixels, after rotation.
    pub width: u32,
    /// Bitmap height in pixels, after rotation.
    pub height: u32,
}

impl PackedBitmap {
    /// Packed bytes per bitmap row.
    pub fn row_bytes(&self) -> usize {
        (self.width as usize).div_ceil(8)
    }
}

/// Pack a monochrome mask into a rotated bitmap.
pub fn pack(mono: &MonoImage, rotation: Rotation) -> PackedBitmap {
    let (width, height) = rotation.rotated_size(mono.width, mono.height);
    let data = match rotation {
        Rotation::None => pack_row_major(mono.pixels.iter().copied(), mono.width),
        Rotation::Inverted => pack_row_major(mono.pixels.iter().rev().copied(), mono.width),
        Rotation::Clockwise => pack_clockwise(mono),
        Rotation::CounterClockwise => pack_counter_clockwise(mono),
    };
    debug!(
        width,
        height,
        bytes = data.len(),
        ?rotation,
        "Packed bitmap"
    );
    PackedBitmap {
        data,
        width,
        height,
    }
}

/// Pack a row-major pixel stream; used for both the unrotated and the
/// 180-degree case (the latter feeds the pixels in reverse).
fn pack_row_major<I: Iterator<Item = u8>>(pixels: I, width: u32) -> Vec<u8> {
    let mut out = Vec::new();
    let mut byte = 0u8;
    let mut bitx = 0u32;
    for px in pixels {
        byte |= px << (7 - (bitx & 7));
        bitx += 1;
        if bitx == width || bitx & 7 == 0 {
            out.push(byte);
            byte = 0;
            if bitx == width {
                bitx = 0;
            }
        }
    }
    out
}

/// Column-major scan: columns left to right, each walked bottom to top.
fn pack_clockwise(mono: &MonoImage) -> Vec<u8> {
    let (w, h) = (mono.width as usize, mono.height as usize);
    let mut out = Vec::with_capacity(h.div_ceil(8) * w);
    for x in 0..w {
        let mut byte = 0u8;
        let mut bitx = 0u32;
        for y in (0..h).rev() {
            byte |= mono.pixels[y * w + x] << (7 - (bitx & 7));
            bitx += 1;
            if y == 0 || bitx & 7 == 0 {
                out.push(byte);
                byte = 0;
            }
        }
    }
    out
}

/// Column-major scan: columns right to left, each walked top to bottom.
fn pack_counter_clockwise(mono: &MonoImage) -> Vec<u8> {
    let (w, h) = (mono.width as usize, mono.height as usize);
    let mut out = Vec::with_capacity(h.div_ceil(8) * w);
    for x in (0..w).rev() {
        let mut byte = 0u8;
        let mut bitx = 0u32;
        for y in 0..h {
            byte |= mono.pixels[y * w + x] << (7 - (bitx & 7));
            bitx += 1;
            if y == h - 1 || bitx & 7 == 0 {
                out.push(byte);
                byte = 0;
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mask(pixels: Vec<u8>, width: u32, height: u32) -> MonoImage {
        assert_eq!(pixels.len(), (width * height) as usize);
        MonoImage {
            pixels,
            width,
            height,
        }
    }

    /// Expand a packed bitmap back into a one-byte-per-pixel mask.
    fn unpack(bitmap: &PackedBitmap) -> MonoImage {
        let row_bytes = bitmap.row_bytes();
        let mut pixels = Vec::with_capacity((bitmap.width * bitmap.height) as usize);
        for y in 0..bitmap.height as usize {
            for x in 0..bitmap.width as usize {
                let byte = bitmap.data[y * row_bytes + x / 8];
                pixels.push((byte >> (7 - (x & 7))) & 1);
            }
        }
        mask(pixels, bitmap.width, bitmap.height)
    }

    #[test]
    fn test_pack_half_black_row() {
        let mono = mask(vec![1, 1, 1, 1, 0, 0, 0, 0], 8, 1);
        let packed = pack(&mono, Rotation::None);
        assert_eq!(packed.data, vec![0xf0]);
        assert_eq!(packed.width, 8);
        assert_eq!(packed.height, 1);
        assert_eq!(packed.row_bytes(), 1);
    }

    #[test]
    fn test_pack_single_pixel() {
        let mono = mask(vec![1], 1, 1);
        let packed = pack(&mono, Rotation::None);
        assert_eq!(packed.data, vec![0x80]);
        assert_eq!(packed.row_bytes(), 1);
    }

    #[test]
    fn test_row_tail_is_zero_padded() {
        // 10 wide: second byte of each row only uses its top two bits.
        let mono = mask(vec![1; 20], 10, 2);
        let packed = pack(&mono, Rotation::None);
        assert_eq!(packed.data, vec![0xff, 0xc0, 0xff, 0xc0]);
        assert_eq!(packed.row_bytes(), 2);
    }

    #[test]
    fn test_row_stride_invariant() {
        for (w, h) in [(1, 1), (7, 3), (8, 2), (9, 5), (16, 1), (17, 4), (3, 10), (2, 9)] {
            let mono = mask(vec![1; (w * h) as usize], w, h);
            for rotation in [
                Rotation::None,
                Rotation::Inverted,
                Rotation::Clockwise,
                Rotation::CounterClockwise,
            ] {
                let packed = pack(&mono, rotation);
                assert_eq!(packed.row_bytes(), (packed.width as usize).div_ceil(8));
                assert_eq!(
                    packed.data.len(),
                    packed.row_bytes() * packed.height as usize,
                    "stride broken for {w}x{h} {rotation:?}"
                );
            }
        }
    }

    #[test]
    fn test_inverted_moves_first_pixel_last() {
        let mut pixels = vec![0u8; 8];
        pixels[0] = 1;
        let mono = mask(pixels, 8, 1);
        let packed = pack(&mono, Rotation::Inverted);
        assert_eq!(packed.data, vec![0x01]);
    }

    #[test]
    fn test_inverted_twice_restores_bitmap() {
        let mono = mask(vec![1, 0, 0, 1, 1, 1, 0, 1, 0, 1, 0, 0], 4, 3);
        let baseline = pack(&mono, Rotation::None);
        let once = pack(&mono, Rotation::Inverted);
        let twice = pack(&unpack(&once), Rotation::Inverted);
        assert_eq!(twice, baseline);
    }

    #[test]
    fn test_clockwise_swaps_dimensions() {
        let mono = mask(vec![0; 12], 4, 3);
        let packed = pack(&mono, Rotation::Clockwise);
        assert_eq!(packed.width, 3);
        assert_eq!(packed.height, 4);
        assert_eq!(packed.row_bytes(), 1);
        assert_eq!(packed.data.len(), 4);
    }

    #[test]
    fn test_clockwise_known_corner() {
        // Single dark pixel at top-left; after +90 it lands top-right.
        let mut pixels = vec![0u8; 6];
        pixels[0] = 1;
        let mono = mask(pixels, 3, 2);
        let packed = pack(&mono, Rotation::Clockwise);
        assert_eq!(packed.width, 2);
        assert_eq!(packed.height, 3);
        // Row 0 holds pixels (0,0)=old (0,1) and (1,0)=old (0,0).
        assert_eq!(packed.data, vec![0x40, 0x00, 0x00]);
    }

    #[test]
    fn test_counter_clockwise_known_corner() {
        // Single dark pixel at top-left; after -90 it lands bottom-left.
        let mut pixels = vec![0u8; 6];
        pixels[0] = 1;
        let mono = mask(pixels, 3, 2);
        let packed = pack(&mono, Rotation::CounterClockwise);
        assert_eq!(packed.width, 2);
        assert_eq!(packed.height, 3);
        assert_eq!(packed.data, vec![0x00, 0x00, 0x80]);
    }

    #[test]
    fn test_clockwise_then_counter_clockwise_restores() {
        let mono = mask(vec![1, 0, 1, 1, 0, 0, 0, 1, 1, 0, 1, 0], 4, 3);
        let baseline = pack(&mono, Rotation::None);
        let turned = pack(&mono, Rotation::Clockwise);
        let restored = pack(&unpack(&turned), Rotation::CounterClockwise);
        assert_eq!(restored, baseline);
    }

    #[test]
    fn test_empty_mask_packs_to_nothing() {
        let mono = MonoImage::empty();
        for rotation in [
            Rotation::None,
            Rotation::Inverted,
            Rotation::Clockwise,
            Rotation::CounterClockwise,
        ] {
            let packed = pack(&mono, rotation);
            assert!(packed.data.is_empty());
            assert_eq!(packed.width, 0);
            assert_eq!(packed.height, 0);
        }
    }
}
