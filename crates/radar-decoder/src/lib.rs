//! Reflectivity message decoder.
//!
//! Decodes a single-field GRIB2-subset reflectivity message into a bounded
//! set of geo-located dBZ points for map rendering: gzip detection,
//! section walking, lat/lon grid-definition parsing, 16-bit sample
//! conversion, scan-aware coordinate mapping, and stride sampling against
//! a point budget.
//!
//! The one entry point is [`decode`] (or [`decode_with_options`]). It
//! never fails: inputs that cannot be decoded produce a deterministic
//! synthetic storm field, flagged via
//! [`DecodedGrid::synthetic_fallback`](radar_common::DecodedGrid).

pub mod decompress;
pub mod error;
pub mod fallback;
pub mod mapping;
pub mod sampler;
pub mod sections;
pub mod unpacking;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, warn};

use radar_common::{DecodedGrid, RadarDataPoint};

pub use error::{DecodeError, DecodeResult};

/// Options controlling a decode invocation.
#[derive(Debug, Clone)]
pub struct DecodeOptions {
    /// Upper bound on emitted points.
    pub max_points: usize,
    /// Seed for the synthetic fallback generator.
    pub fallback_seed: u64,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            max_points: 10_000,
            fallback_seed: 42,
        }
    }
}

/// Decode a raw (possibly gzip-wrapped) reflectivity message with default
/// options.
pub fn decode(buffer: &[u8]) -> DecodedGrid {
    decode_with_options(buffer, &DecodeOptions::default())
}

/// Decode a raw reflectivity message.
///
/// Never returns an error: any decode failure is logged and converted into
/// the synthetic fallback field so the caller always has something to
/// render. Callers that need to know must check
/// [`DecodedGrid::synthetic_fallback`](radar_common::DecodedGrid).
pub fn decode_with_options(buffer: &[u8], options: &DecodeOptions) -> DecodedGrid {
    match try_decode(buffer, options) {
        Ok(points) => {
            debug!(points = points.len(), "Decoded reflectivity message");
            DecodedGrid::real(points)
        }
        Err(e) => {
            warn!(error = %e, "Decode failed, generating synthetic field");
            let mut rng = StdRng::seed_from_u64(options.fallback_seed);
            DecodedGrid::synthetic(fallback::synthetic_storms(&mut rng, options.max_points))
        }
    }
}

fn try_decode(buffer: &[u8], options: &DecodeOptions) -> DecodeResult<Vec<RadarDataPoint>> {
    let message = decompress::maybe_decompress(buffer)?;
    let offsets = sections::locate_sections(&message)?;
    let grid = sections::parse_grid_definition(&message, offsets.grid_definition)?;
    let payload = sections::data_payload(&message, offsets.data)?;

    Ok(sampler::sample_grid(&grid, payload, options.max_points))
}
