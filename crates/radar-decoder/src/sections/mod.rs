//! Message section walking and grid-definition parsing.
//!
//! A reflectivity message is a 16-byte indicator section followed by a
//! sequence of numbered sections, each prefixed with a 4-byte big-endian
//! length that includes the prefix itself. This module locates the grid
//! definition (section 3) and data (section 7) sections and interprets the
//! latitude/longitude grid template.

use tracing::debug;

use crate::error::{DecodeError, DecodeResult};

/// ASCII magic marker at the start of every message.
const MAGIC: &[u8; 4] = b"GRIB";

/// End-of-message marker.
const END_MARKER: &[u8; 4] = b"7777";

/// Length of the indicator section at the start of a message.
pub const INDICATOR_LENGTH: usize = 16;

/// Coordinates and increments are stored as integers scaled by 10^6.
const MICRODEGREES: f64 = 1_000_000.0;

const GRID_DEFINITION_SECTION: u8 = 3;
const DATA_SECTION: u8 = 7;

/// Scanning-direction flags from the grid definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanMode {
    /// Rows advance north to south (latitude decreases with row index).
    pub rows_southward: bool,
    /// Columns advance west to east (longitude increases with column index).
    pub columns_eastward: bool,
    /// Adjacent samples run along rows rather than columns.
    pub row_adjacent: bool,
}

impl ScanMode {
    /// Interpret the scanning mode flag byte.
    ///
    /// Bit 0x80 set flips rows to south-to-north, bit 0x40 set flips
    /// columns to east-to-west, bit 0x20 selects the consecutive-point
    /// axis. Flag byte 0x00 is the common north-west-origin layout.
    pub fn from_flags(flags: u8) -> Self {
        Self {
            rows_southward: flags & 0x80 == 0,
            columns_eastward: flags & 0x40 == 0,
            row_adjacent: flags & 0x20 == 0,
        }
    }
}

/// Section 3: grid shape, corner coordinates, increments, scan direction.
#[derive(Debug, Clone)]
pub struct GridDefinition {
    /// Points along a parallel (columns per row).
    pub points_per_row: u32,
    /// Points along a meridian (rows per column).
    pub points_per_column: u32,
    /// First grid point, degrees. Longitude may use the 0-360 convention.
    pub lat1: f64,
    pub lon1: f64,
    /// Last grid point, degrees.
    pub lat2: f64,
    pub lon2: f64,
    /// Latitude step between rows, degrees.
    pub row_increment: f64,
    /// Longitude step between columns, degrees.
    pub col_increment: f64,
    pub scan: ScanMode,
}

impl GridDefinition {
    /// Total number of grid cells.
    pub fn cell_count(&self) -> usize {
        self.points_per_row as usize * self.points_per_column as usize
    }
}

/// Byte offsets of the two required sections within a message.
#[derive(Debug, Clone, Copy)]
pub struct SectionOffsets {
    pub grid_definition: usize,
    pub data: usize,
}

/// Validate the magic marker and locate the required sections.
///
/// The data section is searched for only in the remainder of the message
/// after the grid definition.
pub fn locate_sections(message: &[u8]) -> DecodeResult<SectionOffsets> {
    if message.len() < 4 || &message[0..4] != MAGIC {
        return Err(DecodeError::InvalidFormat(
            "missing GRIB magic marker".to_string(),
        ));
    }

    let grid_definition = find_section(message, INDICATOR_LENGTH, GRID_DEFINITION_SECTION)?;
    let grid_section = section_slice(message, grid_definition)?;
    let data = find_section(
        message,
        grid_definition + grid_section.len(),
        DATA_SECTION,
    )?;

    debug!(grid_definition, data, "Located message sections");

    Ok(SectionOffsets {
        grid_definition,
        data,
    })
}

/// Parse the grid definition section at `offset`.
///
/// Only the latitude/longitude grid (template 0) is supported; any other
/// template is rejected rather than misinterpreted.
pub fn parse_grid_definition(message: &[u8], offset: usize) -> DecodeResult<GridDefinition> {
    let section = section_slice(message, offset)?;
    if section.len() < 14 {
        return Err(DecodeError::NoGridData(
            "grid definition section truncated".to_string(),
        ));
    }

    let template = u16::from_be_bytes([section[12], section[13]]);
    if template != 0 {
        return Err(DecodeError::UnsupportedTemplate(template));
    }

    // Template 3.0 body, fixed offsets relative to byte 14:
    // Bytes 16-19: Ni - points along a parallel (u32)
    // Bytes 20-23: Nj - points along a meridian (u32)
    // Bytes 32-35: La1, 36-39: Lo1 (i32, microdegrees)
    // Bytes 41-44: La2, 45-48: Lo2 (i32, microdegrees)
    // Bytes 49-52: Di, 53-56: Dj (u32, microdegrees)
    // Byte 57: scanning mode flags
    let gd = &section[14..];
    if gd.len() < 58 {
        return Err(DecodeError::NoGridData(format!(
            "lat/lon template needs 58 bytes, got {}",
            gd.len()
        )));
    }

    let points_per_row = u32::from_be_bytes([gd[16], gd[17], gd[18], gd[19]]);
    let points_per_column = u32::from_be_bytes([gd[20], gd[21], gd[22], gd[23]]);
    if points_per_row == 0 || points_per_column == 0 {
        return Err(DecodeError::NoGridData("empty grid dimensions".to_string()));
    }

    let lat1 = i32::from_be_bytes([gd[32], gd[33], gd[34], gd[35]]) as f64 / MICRODEGREES;
    let lon1 = i32::from_be_bytes([gd[36], gd[37], gd[38], gd[39]]) as f64 / MICRODEGREES;
    let lat2 = i32::from_be_bytes([gd[41], gd[42], gd[43], gd[44]]) as f64 / MICRODEGREES;
    let lon2 = i32::from_be_bytes([gd[45], gd[46], gd[47], gd[48]]) as f64 / MICRODEGREES;
    let col_increment = u32::from_be_bytes([gd[49], gd[50], gd[51], gd[52]]) as f64 / MICRODEGREES;
    let row_increment = u32::from_be_bytes([gd[53], gd[54], gd[55], gd[56]]) as f64 / MICRODEGREES;
    let scan = ScanMode::from_flags(gd[57]);

    debug!(
        points_per_row,
        points_per_column,
        lat1,
        lon1,
        scan_flags = gd[57],
        "Parsed grid definition"
    );

    Ok(GridDefinition {
        points_per_row,
        points_per_column,
        lat1,
        lon1,
        lat2,
        lon2,
        row_increment,
        col_increment,
        scan,
    })
}

/// Packed sample payload of the data section at `offset`.
///
/// The payload starts after the 5-byte section header.
pub fn data_payload(message: &[u8], offset: usize) -> DecodeResult<&[u8]> {
    let section = section_slice(message, offset)?;
    Ok(&section[5..])
}

/// Find a section by number, walking forward from `start`.
fn find_section(message: &[u8], start: usize, section_num: u8) -> DecodeResult<usize> {
    let mut offset = start;

    loop {
        if offset + 5 > message.len() {
            return Err(DecodeError::NoGridData(format!(
                "section {} not found",
                section_num
            )));
        }

        if &message[offset..offset + 4] == END_MARKER {
            return Err(DecodeError::NoGridData(format!(
                "reached end of message before section {}",
                section_num
            )));
        }

        let length = u32::from_be_bytes([
            message[offset],
            message[offset + 1],
            message[offset + 2],
            message[offset + 3],
        ]) as usize;

        if length < 5 || offset + length > message.len() {
            return Err(DecodeError::NoGridData(format!(
                "malformed section length at offset {}",
                offset
            )));
        }

        if message[offset + 4] == section_num {
            return Ok(offset);
        }

        offset += length;
    }
}

/// Bounds-checked view of the section starting at `offset`.
fn section_slice(message: &[u8], offset: usize) -> DecodeResult<&[u8]> {
    if offset + 5 > message.len() {
        return Err(DecodeError::NoGridData(format!(
            "section header at offset {} past end of message",
            offset
        )));
    }

    let length = u32::from_be_bytes([
        message[offset],
        message[offset + 1],
        message[offset + 2],
        message[offset + 3],
    ]) as usize;

    if length < 5 || offset + length > message.len() {
        return Err(DecodeError::NoGridData(format!(
            "malformed section length at offset {}",
            offset
        )));
    }

    Ok(&message[offset..offset + length])
}
