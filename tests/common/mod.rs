//! Shared helpers for integration tests
//!
//! Containers are assembled in memory with `zip::ZipWriter`; no fixture files
//! are needed.

#![allow(dead_code)]

use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Four vertices spanning a 10 x 20 x 5 mm box, two triangles
pub const BOX_MODEL: &str = r##"<?xml version="1.0" encoding="UTF-8"?>
<model unit="millimeter" xml:lang="en-US" xmlns="http://schemas.microsoft.com/3dmanufacturing/core/2015/02">
  <resources>
    <object id="1" type="model">
      <mesh>
        <vertices>
          <vertex x="0" y="0" z="0"/>
          <vertex x="10" y="0" z="0"/>
          <vertex x="10" y="20" z="0"/>
          <vertex x="0" y="20" z="5"/>
        </vertices>
        <triangles>
          <triangle v1="0" v2="1" v3="2"/>
          <triangle v1="0" v2="2" v3="3"/>
        </triangles>
      </mesh>
    </object>
  </resources>
  <build>
    <item objectid="1"/>
  </build>
</model>"##;

/// Minimal 1x1 PNG
pub const PNG_1X1: [u8; 70] = [
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, // PNG signature
    0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44, 0x52, // IHDR chunk
    0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x02, 0x00, 0x00, 0x00, 0x90, 0x77, 0x53,
    0xDE, 0x00, 0x00, 0x00, 0x0C, 0x49, 0x44, 0x41, 0x54, 0x08, 0xD7, 0x63, 0xF8, 0xCF, 0xC0, 0xF0,
    0x1F, 0x00, 0x05, 0x05, 0x02, 0x00, 0x5F, 0xC8, 0xF1, 0xD2, 0x00, 0x00, 0x00, 0x00, 0x49, 0x45,
    0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
];

/// JPEG start-of-image marker followed by a JFIF APP0 header
pub const JPEG_HEADER: [u8; 6] = [0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10];

/// Builder for in-memory 3MF containers
#[derive(Default)]
pub struct ContainerBuilder {
    entries: Vec<(String, Vec<u8>)>,
    stored: bool,
}

impl ContainerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the 10 x 20 x 5 box model
    pub fn with_box_model() -> Self {
        Self::new().model(BOX_MODEL)
    }

    pub fn entry(mut self, name: &str, data: impl AsRef<[u8]>) -> Self {
        self.entries.push((name.to_string(), data.as_ref().to_vec()));
        self
    }

    /// Store entries uncompressed so their payload appears verbatim in the archive
    pub fn stored(mut self) -> Self {
        self.stored = true;
        self
    }

    pub fn model(self, xml: &str) -> Self {
        self.entry("3D/3dmodel.model", xml)
    }

    pub fn build(self) -> Vec<u8> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let mut options = SimpleFileOptions::default();
        if self.stored {
            options = options.compression_method(CompressionMethod::Stored);
        }

        for (name, data) in &self.entries {
            zip.start_file(name.as_str(), options).unwrap();
            zip.write_all(data).unwrap();
        }

        zip.finish().unwrap().into_inner()
    }
}

/// Flip one bit in the first occurrence of `marker` inside a stored archive
///
/// The entry keeps its headers, so it is still listed, but its CRC no longer
/// matches and reading it fails.
pub fn corrupt_payload(archive: &mut [u8], marker: &[u8]) {
    let pos = archive
        .windows(marker.len())
        .position(|window| window == marker)
        .expect("marker not found in archive");
    archive[pos] ^= 0x01;
}
