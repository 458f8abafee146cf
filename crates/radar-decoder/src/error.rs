//! Error types for the reflectivity decoder.

use thiserror::Error;

/// Errors raised while decoding a reflectivity message.
///
/// None of these escape the [`decode`](crate::decode) entry point: each one
/// diverts the pipeline to the synthetic fallback field.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Decompression failed: {0}")]
    Decompression(String),

    #[error("Invalid message format: {0}")]
    InvalidFormat(String),

    #[error("Unsupported grid definition template: {0}")]
    UnsupportedTemplate(u16),

    #[error("No usable grid data: {0}")]
    NoGridData(String),
}

/// Result type for decoder-internal operations.
pub type DecodeResult<T> = std::result::Result<T, DecodeError>;
