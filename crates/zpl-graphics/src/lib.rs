//! ZPL graphic-field payload encoding.
//!
//! Converts RGBA rasters into the monochrome bitmap payloads understood by
//! Zebra label printers: the deflate-compressed `:Z64:` token and the
//! run-length hex "alternative data compression scheme" (ACS).

pub mod acs;
pub mod convert;
pub mod crc16;
pub mod mono;
pub mod options;
pub mod pack;
pub mod z64;

// Re-exports for convenience
pub use convert::{EncodedBitmap, rgba_to_acs, rgba_to_z64};
pub use mono::{MonoImage, monochrome};
pub use options::ConvertOptions;
pub use pack::{PackedBitmap, Rotation, pack};

/// Errors that can occur while encoding a graphic payload.
#[derive(Debug, thiserror::Error)]
pub enum ZplGraphicsError {
    #[error("Invalid width {width} for {len} bytes of RGBA data")]
    InvalidWidth { width: u32, len: usize },

    #[error("Checksum input contains non-Latin-1 character {0:?}")]
    InvalidCharacter(char),

    #[error("Compression failed: {0}")]
    Compression(#[from] std::io::Error),
}

/// Result type alias for zpl-graphics operations.
pub type Result<T> = std::result::Result<T, ZplGraphicsError>;
