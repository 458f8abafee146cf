//! Synthetic storm field generation.
//!
//! When a message cannot be decoded the caller still needs a renderable
//! layer. This module builds a fixed set of named storm cells over the
//! central US: an outward spiral with banding for each cell, a shell of
//! light precipitation around it, and sparse background drizzle across the
//! coverage box. All randomness comes from the seeded generator the caller
//! passes in, so a given seed always produces the same field.

use rand::rngs::StdRng;
use rand::Rng;
use tracing::debug;

use radar_common::{BoundingBox, RadarDataPoint};

/// A synthetic storm cell.
struct StormCenter {
    name: &'static str,
    lat: f64,
    lng: f64,
    peak_dbz: f64,
}

/// Storm cells rendered on every fallback field.
const STORM_CENTERS: [StormCenter; 4] = [
    StormCenter {
        name: "tulsa",
        lat: 36.15,
        lng: -95.99,
        peak_dbz: 58.0,
    },
    StormCenter {
        name: "wichita",
        lat: 37.69,
        lng: -97.34,
        peak_dbz: 52.0,
    },
    StormCenter {
        name: "springfield",
        lat: 37.21,
        lng: -93.29,
        peak_dbz: 47.0,
    },
    StormCenter {
        name: "dallas",
        lat: 32.78,
        lng: -96.80,
        peak_dbz: 44.0,
    },
];

/// Coverage box for the background drizzle field.
const COVERAGE: BoundingBox = BoundingBox {
    min_x: -124.0,
    min_y: 25.0,
    max_x: -67.0,
    max_y: 49.0,
};

const SPIRAL_POINTS: usize = 150;
const SHELL_POINTS: usize = 60;
const BACKGROUND_POINTS: usize = 250;

/// Generate the synthetic storm field, capped at `budget` points.
pub fn synthetic_storms(rng: &mut StdRng, budget: usize) -> Vec<RadarDataPoint> {
    let mut points = Vec::new();

    for storm in &STORM_CENTERS {
        let before = points.len();
        spiral(rng, storm, &mut points);
        shell(rng, storm, &mut points);
        debug!(
            storm = storm.name,
            points = points.len() - before,
            "Generated synthetic storm cell"
        );
    }
    background(rng, &mut points);

    points.retain(|p| p.in_bounds());
    points.truncate(budget);
    points
}

/// Spiral arm: intensity decays outward with oscillating bands on top.
fn spiral(rng: &mut StdRng, storm: &StormCenter, out: &mut Vec<RadarDataPoint>) {
    for step in 0..SPIRAL_POINTS {
        let angle = step as f64 * 0.45;
        let radius = 0.03 + step as f64 * 0.009;
        let lat = storm.lat + radius * angle.cos();
        let lng = storm.lng + radius * angle.sin();

        let bands = 6.0 * (radius * 18.0).sin();
        let jitter = rng.gen_range(-2.0..2.0);
        let dbz = (storm.peak_dbz - radius * 28.0 + bands + jitter).max(18.0);

        out.push(RadarDataPoint::new(lat, lng, dbz));
    }
}

/// Scattered light precipitation around the storm core.
fn shell(rng: &mut StdRng, storm: &StormCenter, out: &mut Vec<RadarDataPoint>) {
    for _ in 0..SHELL_POINTS {
        let angle = rng.gen_range(0.0..std::f64::consts::TAU);
        let radius = rng.gen_range(1.2..2.2);
        let lat = storm.lat + radius * angle.cos();
        let lng = storm.lng + radius * angle.sin();
        let dbz = rng.gen_range(5.0..20.0);

        out.push(RadarDataPoint::new(lat, lng, dbz));
    }
}

/// Sparse drizzle across the whole coverage box.
fn background(rng: &mut StdRng, out: &mut Vec<RadarDataPoint>) {
    for _ in 0..BACKGROUND_POINTS {
        let lat = COVERAGE.min_y + rng.gen::<f64>() * COVERAGE.height();
        let lng = COVERAGE.min_x + rng.gen::<f64>() * COVERAGE.width();
        let dbz = rng.gen_range(2.0..12.0);

        out.push(RadarDataPoint::new(lat, lng, dbz));
    }
}
