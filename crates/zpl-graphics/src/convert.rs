//! Conversion entry points.
//!
//! Both entry points share the same pipeline — monochromize, then rotate and
//! pack — and differ only in the final encoding: a compressed `:Z64:` token
//! or run-length hex text.

use serde::Serialize;
use tracing::debug;

use crate::options::ConvertOptions;
use crate::pack::{PackedBitmap, pack};
use crate::{Result, ZplGraphicsError, acs, mono, z64};

/// An encoded bitmap, ready to be spliced into a graphic command.
///
/// The numeric fields are what a surrounding command template needs alongside
/// the payload (for `^GFA` that is total bytes, bytes per row and the
/// payload itself).
#[derive(Debug, Clone, Serialize)]
pub struct EncodedBitmap {
    /// Uncompressed size of the packed bitmap in bytes.
    pub len: usize,
    /// Packed bytes per bitmap row.
    pub row_bytes: usize,
    /// Bitmap width in pixels, after cropping and rotation.
    pub width: u32,
    /// Bitmap height in pixels, after cropping and rotation.
    pub height: u32,
    /// Encoded payload: a `:Z64:` token or run-length hex text.
    pub payload: String,
}

/// Convert RGBA pixels into a compressed `:Z64:` graphic payload.
///
/// `rgba` holds 4 bytes per pixel in row-major order; the image height is
/// derived from the buffer length and `width`.
pub fn rgba_to_z64(rgba: &[u8], width: u32, opts: &ConvertOptions) -> Result<EncodedBitmap> {
    let packed = packed_bitmap(rgba, width, opts)?;
    let payload = z64::encode_z64(&packed.data)?;
    Ok(finish(packed, payload))
}

/// Convert RGBA pixels into a run-length hex graphic payload.
///
/// Same pipeline as [`rgba_to_z64`], but the packed bitmap is rendered with
/// the alternative data compression scheme and carries no checksum.
pub fn rgba_to_acs(rgba: &[u8], width: u32, opts: &ConvertOptions) -> Result<EncodedBitmap> {
    let packed = packed_bitmap(rgba, width, opts)?;
    let payload = acs::encode_acs(&packed.data);
    Ok(finish(packed, payload))
}

/// Shared pipeline front half: validate dimensions, monochromize, pack.
fn packed_bitmap(rgba: &[u8], width: u32, opts: &ConvertOptions) -> Result<PackedBitmap> {
    let row = width as usize * 4;
    if width == 0 || !rgba.len().is_multiple_of(row) {
        return Err(ZplGraphicsError::InvalidWidth {
            width,
            len: rgba.len(),
        });
    }
    let height = (rgba.len() / row) as u32;
    debug!(width, height, black = opts.black, rotate = ?opts.rotate, "Converting RGBA image");

    let mask = mono::monochrome(rgba, width, height, opts.black, opts.no_trim);
    Ok(pack(&mask, opts.rotate))
}

fn finish(packed: PackedBitmap, payload: String) -> EncodedBitmap {
    EncodedBitmap {
        len: packed.data.len(),
        row_bytes: packed.row_bytes(),
        width: packed.width,
        height: packed.height,
        payload,
    }
}
