//! Common test utilities for radar-decoder tests.
//!
//! Provides a builder for minimal synthetic reflectivity messages so the
//! integration tests need no binary fixtures.

use std::io::Write;

use flate2::write::GzEncoder;
use flate2::Compression;

/// Builds a minimal single-field reflectivity message.
///
/// The generated message has an indicator section, a filler identification
/// section, a lat/lon grid definition (section 3), a bitmap stub (section
/// 6), the packed data section (section 7), and the end marker.
pub struct RadarMessageBuilder {
    ni: u32,
    nj: u32,
    la1: i32,
    lo1: i32,
    la2: i32,
    lo2: i32,
    di: u32,
    dj: u32,
    scanning_mode: u8,
    grid_template: u16,
    codes: Vec<u16>,
}

impl RadarMessageBuilder {
    /// Small regional grid: 40°N to 38°N, 250°E to 253°E, 1° cells.
    pub fn new() -> Self {
        let ni = 4;
        let nj = 3;
        Self {
            ni,
            nj,
            la1: 40_000_000,
            lo1: 250_000_000,
            la2: 38_000_000,
            lo2: 253_000_000,
            di: 1_000_000,
            dj: 1_000_000,
            scanning_mode: 0x00,
            grid_template: 0,
            codes: vec![2500; (ni * nj) as usize],
        }
    }

    pub fn with_grid(mut self, ni: u32, nj: u32) -> Self {
        self.ni = ni;
        self.nj = nj;
        self.codes = vec![2500; (ni * nj) as usize];
        self
    }

    pub fn with_corner(mut self, la1_microdeg: i32, lo1_microdeg: i32) -> Self {
        self.la1 = la1_microdeg;
        self.lo1 = lo1_microdeg;
        self
    }

    pub fn with_increments(mut self, di_microdeg: u32, dj_microdeg: u32) -> Self {
        self.di = di_microdeg;
        self.dj = dj_microdeg;
        self
    }

    pub fn with_scan_mode(mut self, flags: u8) -> Self {
        self.scanning_mode = flags;
        self
    }

    pub fn with_grid_template(mut self, template: u16) -> Self {
        self.grid_template = template;
        self
    }

    pub fn with_codes(mut self, codes: Vec<u16>) -> Self {
        self.codes = codes;
        self
    }

    /// Build the complete message bytes.
    pub fn build(&self) -> Vec<u8> {
        let section1 = self.build_section1();
        let section3 = self.build_section3();
        let section6 = self.build_section6();
        let section7 = self.build_section7();

        let message_length =
            16 + section1.len() + section3.len() + section6.len() + section7.len() + 4;

        let mut message = Vec::with_capacity(message_length);

        // Section 0: indicator
        message.extend_from_slice(b"GRIB");
        message.extend_from_slice(&[0, 0]); // Reserved
        message.push(209); // Discipline
        message.push(2); // Edition
        message.extend_from_slice(&(message_length as u64).to_be_bytes());

        message.extend_from_slice(&section1);
        message.extend_from_slice(&section3);
        message.extend_from_slice(&section6);
        message.extend_from_slice(&section7);

        // Section 8: end marker
        message.extend_from_slice(b"7777");

        message
    }

    /// Build the message and wrap it in a gzip stream.
    pub fn build_gzipped(&self) -> Vec<u8> {
        gzip(&self.build())
    }

    fn build_section1(&self) -> Vec<u8> {
        // Identification section: the decoder skips it, content is filler.
        let mut section = Vec::new();
        let section_length: u32 = 21;

        section.extend_from_slice(&section_length.to_be_bytes());
        section.push(1); // Section number
        section.extend_from_slice(&[0u8; 16]);

        section
    }

    fn build_section3(&self) -> Vec<u8> {
        let mut section = Vec::new();

        let template_data_len = 58;
        let section_length: u32 = 14 + template_data_len;

        section.extend_from_slice(&section_length.to_be_bytes());
        section.push(3); // Section number

        section.push(0); // Source of grid definition
        let num_data_points = self.ni * self.nj;
        section.extend_from_slice(&num_data_points.to_be_bytes());
        section.push(0); // Number of octets for optional list
        section.push(0); // Interpretation of optional list
        section.extend_from_slice(&self.grid_template.to_be_bytes());

        // Template 3.0 body (58 bytes)
        section.push(6); // Shape of Earth
        section.push(0); // Scale factor of radius
        section.extend_from_slice(&0u32.to_be_bytes()); // Scaled value of radius
        section.push(0); // Scale factor of major axis
        section.extend_from_slice(&0u32.to_be_bytes()); // Scaled value of major axis
        section.push(0); // Scale factor of minor axis
        section.extend_from_slice(&0u32.to_be_bytes()); // Scaled value of minor axis

        section.extend_from_slice(&self.ni.to_be_bytes()); // Ni
        section.extend_from_slice(&self.nj.to_be_bytes()); // Nj
        section.extend_from_slice(&0u32.to_be_bytes()); // Basic angle
        section.extend_from_slice(&0xFFFF_FFFFu32.to_be_bytes()); // Subdivisions

        section.extend_from_slice(&self.la1.to_be_bytes()); // La1
        section.extend_from_slice(&self.lo1.to_be_bytes()); // Lo1
        section.push(48); // Resolution and component flags
        section.extend_from_slice(&self.la2.to_be_bytes()); // La2
        section.extend_from_slice(&self.lo2.to_be_bytes()); // Lo2
        section.extend_from_slice(&self.di.to_be_bytes()); // Di
        section.extend_from_slice(&self.dj.to_be_bytes()); // Dj
        section.push(self.scanning_mode);

        section
    }

    fn build_section6(&self) -> Vec<u8> {
        let mut section = Vec::new();
        let section_length: u32 = 6;

        section.extend_from_slice(&section_length.to_be_bytes());
        section.push(6); // Section number
        section.push(255); // No bitmap

        section
    }

    fn build_section7(&self) -> Vec<u8> {
        let mut section = Vec::new();

        let section_length: u32 = 5 + 2 * self.codes.len() as u32;

        section.extend_from_slice(&section_length.to_be_bytes());
        section.push(7); // Section number
        for code in &self.codes {
            section.extend_from_slice(&code.to_be_bytes());
        }

        section
    }
}

impl Default for RadarMessageBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Gzip-compress a buffer.
pub fn gzip(data: &[u8]) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}
