//! Deterministic stride sampling of decoded grids.

use radar_common::RadarDataPoint;
use tracing::debug;

use crate::mapping;
use crate::sections::GridDefinition;
use crate::unpacking::{self, SampleReader};

/// Decode, map, and sample a grid into at most `budget` points.
///
/// Cells are visited at a fixed stride over the row-major cell sequence,
/// so the emitted points cover the whole grid regardless of its size and
/// identical input always yields identical output. The stride floor can
/// overshoot the budget by a fraction of one stride, so the count is
/// additionally capped.
///
/// Missing-data sentinels yield no point; points mapping outside the valid
/// latitude/longitude range are dropped, not clamped.
pub fn sample_grid(grid: &GridDefinition, payload: &[u8], budget: usize) -> Vec<RadarDataPoint> {
    let reader = SampleReader::new(payload, grid.cell_count());
    let total = grid.cell_count();
    let stride = (total / budget.max(1)).max(1);

    let mut points = Vec::with_capacity(budget.min(total));
    for index in (0..reader.cell_count()).step_by(stride) {
        if points.len() >= budget {
            break;
        }
        let Some(code) = reader.code_at(index) else {
            break;
        };
        if unpacking::is_missing(code) {
            continue;
        }

        let row = (index / grid.points_per_row as usize) as u32;
        let col = (index % grid.points_per_row as usize) as u32;
        let (lat, lng) = mapping::cell_to_lat_lng(grid, row, col);

        let point = RadarDataPoint::new(lat, lng, unpacking::code_to_dbz(code));
        if !point.in_bounds() {
            continue;
        }
        points.push(point);
    }

    debug!(
        cells = total,
        available = reader.cell_count(),
        stride,
        emitted = points.len(),
        "Sampled decoded grid"
    );

    points
}
