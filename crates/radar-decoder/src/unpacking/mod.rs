//! Packed sample decoding.
//!
//! Sample codes are unsigned 16-bit big-endian words in row-major order.
//! The three-branch dBZ conversion reproduces the source encoding's
//! offset/signed packing scheme; the 32000 and 3200 thresholds are part of
//! the wire contract and are not equivalent to a single linear scale.

/// Sample codes that mean "no data at this cell".
pub const MISSING_CODES: [u16; 3] = [0, 32767, 65535];

/// True when the code is a missing-data sentinel.
pub fn is_missing(raw: u16) -> bool {
    MISSING_CODES.contains(&raw)
}

/// Convert a raw sample code to reflectivity in dBZ.
pub fn code_to_dbz(raw: u16) -> f64 {
    if raw > 32000 {
        (raw as f64 - 65535.0) / 100.0
    } else if raw > 3200 {
        (raw as f64 / 100.0) - 32.0
    } else {
        raw as f64 / 100.0
    }
}

/// Reader over the packed sample words of a data section payload.
///
/// Yields at most `min(payload words, grid cells)` codes; a short payload
/// simply truncates the grid rather than erroring.
pub struct SampleReader<'a> {
    payload: &'a [u8],
    cells: usize,
}

impl<'a> SampleReader<'a> {
    pub fn new(payload: &'a [u8], grid_cells: usize) -> Self {
        let available = payload.len() / 2;
        Self {
            payload,
            cells: available.min(grid_cells),
        }
    }

    /// Number of cells this reader can yield.
    pub fn cell_count(&self) -> usize {
        self.cells
    }

    /// Raw code at the given row-major cell index.
    pub fn code_at(&self, index: usize) -> Option<u16> {
        if index >= self.cells {
            return None;
        }
        let i = index * 2;
        Some(u16::from_be_bytes([self.payload[i], self.payload[i + 1]]))
    }
}
