//! Grid index to geographic coordinate mapping.

use crate::sections::GridDefinition;

/// Map a (row, column) cell index to (latitude, longitude) in degrees.
///
/// Scan direction decides the sign of each step. Longitudes arrive in the
/// source's 0-360 convention; values above 180 are wrapped into -180..180.
/// The result is not clamped: out-of-range points are the caller's to drop.
pub fn cell_to_lat_lng(grid: &GridDefinition, row: u32, col: u32) -> (f64, f64) {
    let lat = if grid.scan.rows_southward {
        grid.lat1 - row as f64 * grid.row_increment.abs()
    } else {
        grid.lat1 + row as f64 * grid.row_increment.abs()
    };

    let lng = if grid.scan.columns_eastward {
        grid.lon1 + col as f64 * grid.col_increment.abs()
    } else {
        grid.lon1 - col as f64 * grid.col_increment.abs()
    };

    let lng = if lng > 180.0 { lng - 360.0 } else { lng };

    (lat, lng)
}
