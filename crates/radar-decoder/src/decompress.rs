//! Gzip detection and decompression.

use std::io::Read;

use bytes::Bytes;
use tracing::debug;

use crate::error::{DecodeError, DecodeResult};

/// Magic prefix of a gzip stream.
const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Strip a gzip wrapper from the buffer if one is present.
///
/// Buffers without the two-byte gzip prefix pass through unchanged.
/// A prefix followed by a corrupt stream is a [`DecodeError::Decompression`].
pub fn maybe_decompress(data: &[u8]) -> DecodeResult<Bytes> {
    if data.len() < 2 || data[0..2] != GZIP_MAGIC {
        return Ok(Bytes::copy_from_slice(data));
    }

    let mut decoder = flate2::read::GzDecoder::new(data);
    let mut decompressed = Vec::new();
    decoder
        .read_to_end(&mut decompressed)
        .map_err(|e| DecodeError::Decompression(e.to_string()))?;

    debug!(
        compressed = data.len(),
        decompressed = decompressed.len(),
        "Inflated gzip wrapper"
    );

    Ok(Bytes::from(decompressed))
}
