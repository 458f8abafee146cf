//! Common types shared across the radar-feed workspace.

pub mod bbox;
pub mod geojson;
pub mod point;

pub use bbox::BoundingBox;
pub use geojson::{Feature, FeatureCollection, Geometry};
pub use point::{DecodedGrid, RadarDataPoint};
