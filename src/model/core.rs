//! Analysis result and analyzer configuration

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Serialize, Serializer};

use super::geometry::ModelInfo;
use super::settings::PrintSettings;
use super::vendor::BambuMetadata;
use crate::opc::ImageFormat;

/// Default upper bound for a single archive entry (256 MiB uncompressed)
pub const DEFAULT_MAX_ENTRY_SIZE: u64 = 256 * 1024 * 1024;

/// Configuration for analyzing 3MF containers
///
/// The default configuration extracts every section. Entries whose
/// uncompressed size exceeds `max_entry_size` are treated as unreadable, which
/// keeps a hostile archive from inflating gigabytes into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerConfig {
    max_entry_size: u64,
    read_thumbnail: bool,
}

impl AnalyzerConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self {
            max_entry_size: DEFAULT_MAX_ENTRY_SIZE,
            read_thumbnail: true,
        }
    }

    /// Limit the uncompressed size of any single entry read from the archive
    pub fn with_max_entry_size(mut self, bytes: u64) -> Self {
        self.max_entry_size = bytes;
        self
    }

    /// Enable or disable thumbnail extraction
    ///
    /// When disabled, `has_thumbnail` is always `false` and no image bytes
    /// are read.
    pub fn with_thumbnail(mut self, read_thumbnail: bool) -> Self {
        self.read_thumbnail = read_thumbnail;
        self
    }

    /// Maximum uncompressed size of a single entry
    pub fn max_entry_size(&self) -> u64 {
        self.max_entry_size
    }

    /// Whether thumbnail bytes are extracted
    pub fn reads_thumbnail(&self) -> bool {
        self.read_thumbnail
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalized analysis of one 3MF container
///
/// Built once per analysis and returned by value after the archive has been
/// closed. Serializes to the JSON shape expected by the file library:
/// thumbnail bytes are emitted as a base64 string under `thumbnail`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    /// Whether any thumbnail candidate was found
    pub has_thumbnail: bool,
    /// Raw bytes of the first thumbnail candidate present in the archive
    #[serde(rename = "thumbnail", serialize_with = "serialize_base64")]
    pub thumbnail_bytes: Option<Vec<u8>>,
    /// Geometry statistics and estimates
    pub model_info: ModelInfo,
    /// Slicer settings found in the print settings XML
    pub print_settings: PrintSettings,
    /// Vendor slicing metadata (AMS mapping, plate and print parameters)
    pub bambu_metadata: BambuMetadata,
}

impl AnalysisResult {
    /// Image format of the thumbnail, detected from its leading bytes
    pub fn thumbnail_format(&self) -> Option<ImageFormat> {
        self.thumbnail_bytes
            .as_deref()
            .map(ImageFormat::from_magic_bytes)
    }
}

fn serialize_base64<S: Serializer>(
    bytes: &Option<Vec<u8>>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    match bytes {
        Some(data) => serializer.serialize_some(&STANDARD.encode(data)),
        None => serializer.serialize_none(),
    }
}
