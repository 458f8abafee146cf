//! GeoJSON types for the rendering boundary.
//!
//! The map layer consumes decoded reflectivity as a GeoJSON
//! `FeatureCollection` of Point features. Each feature carries the dBZ
//! value and the provenance flag in its properties.

use serde::{Deserialize, Serialize};

use crate::point::DecodedGrid;

/// A GeoJSON FeatureCollection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureCollection {
    /// Type identifier (always "FeatureCollection").
    #[serde(rename = "type")]
    pub type_: String,

    /// Array of features.
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn new() -> Self {
        Self {
            type_: "FeatureCollection".to_string(),
            features: Vec::new(),
        }
    }
}

impl Default for FeatureCollection {
    fn default() -> Self {
        Self::new()
    }
}

/// A GeoJSON Feature with a point geometry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Feature {
    /// Type identifier (always "Feature").
    #[serde(rename = "type")]
    pub type_: String,

    pub geometry: Geometry,

    pub properties: PointProperties,
}

impl Feature {
    /// Create a point feature at the given location.
    pub fn point(lon: f64, lat: f64, properties: PointProperties) -> Self {
        Self {
            type_: "Feature".to_string(),
            geometry: Geometry::Point {
                coordinates: [lon, lat],
            },
            properties,
        }
    }
}

/// GeoJSON geometry types used by this boundary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum Geometry {
    /// A point geometry.
    Point {
        /// Coordinates as [longitude, latitude].
        coordinates: [f64; 2],
    },
}

/// Properties attached to each reflectivity feature.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PointProperties {
    /// Reflectivity in dBZ.
    pub dbz: f64,

    /// True when the point came from the synthetic fallback field.
    pub synthetic: bool,
}

impl From<&DecodedGrid> for FeatureCollection {
    fn from(grid: &DecodedGrid) -> Self {
        let features = grid
            .points
            .iter()
            .map(|p| {
                Feature::point(
                    p.lng,
                    p.lat,
                    PointProperties {
                        dbz: p.value,
                        synthetic: grid.synthetic_fallback,
                    },
                )
            })
            .collect();

        Self {
            type_: "FeatureCollection".to_string(),
            features,
        }
    }
}
