//! Compressed graphic encoding.
//!
//! Deflates the packed bitmap into a zlib stream, renders it as base64, and
//! wraps it in a `:Z64:<data>:<crc>` token. The firmware validates the token
//! by recomputing the CRC-16 checksum over the base64 body.

use std::io::Write;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use flate2::Compression;
use flate2::write::ZlibEncoder;
use tracing::debug;

use crate::Result;
use crate::crc16::crc16_hex;

/// Encode packed bitmap bytes as a `:Z64:` token.
pub fn encode_z64(data: &[u8]) -> Result<String> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    let compressed = encoder.finish()?;

    let b64 = STANDARD.encode(&compressed);
    let crc = crc16_hex(&b64)?;
    debug!(
        raw = data.len(),
        compressed = compressed.len(),
        encoded = b64.len(),
        "Z64 payload built"
    );
    Ok(format!(":Z64:{b64}:{crc}"))
}
