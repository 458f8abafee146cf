//! Decoded reflectivity point types.

use serde::{Deserialize, Serialize};

/// A single geo-located reflectivity sample.
///
/// Latitude and longitude are in degrees, `value` is radar reflectivity
/// in dBZ.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadarDataPoint {
    pub lat: f64,
    pub lng: f64,
    pub value: f64,
}

impl RadarDataPoint {
    pub fn new(lat: f64, lng: f64, value: f64) -> Self {
        Self { lat, lng, value }
    }

    /// Check that the point lies inside the valid geographic range.
    ///
    /// Points failing this check are dropped by the decoder, never clamped.
    pub fn in_bounds(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }
}

/// The result of one decode invocation.
///
/// `synthetic_fallback` is true when the input could not be decoded and the
/// points were generated synthetically; consumers use it to label the layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecodedGrid {
    pub points: Vec<RadarDataPoint>,
    pub synthetic_fallback: bool,
}

impl DecodedGrid {
    /// Wrap points decoded from real sensor data.
    pub fn real(points: Vec<RadarDataPoint>) -> Self {
        Self {
            points,
            synthetic_fallback: false,
        }
    }

    /// Wrap synthetically generated points.
    pub fn synthetic(points: Vec<RadarDataPoint>) -> Self {
        Self {
            points,
            synthetic_fallback: true,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
