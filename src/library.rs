//! File-library records for uploaded 3MF containers

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::Serialize;

use crate::analyzer::analyze_bytes;
use crate::error::{Error, Result};
use crate::model::AnalysisResult;
use crate::opc::ImageFormat;

/// File extension accepted for uploads, compared case-insensitively
pub const UPLOAD_EXTENSION: &str = ".3mf";

/// Material shown when neither settings nor AMS mapping name one
const UNKNOWN_MATERIAL: &str = "Unknown";

/// Reject upload names that do not end in `.3mf`
///
/// Only the suffix is checked, so a bare `.3mf` passes.
pub fn validate_upload_name(name: &str) -> Result<()> {
    let accepted = name
        .len()
        .checked_sub(UPLOAD_EXTENSION.len())
        .and_then(|start| name.get(start..))
        .is_some_and(|ext| ext.eq_ignore_ascii_case(UPLOAD_EXTENSION));

    if accepted {
        Ok(())
    } else {
        Err(Error::UnsupportedUpload(format!(
            "Only .3MF files are allowed (got '{}')",
            name
        )))
    }
}

/// One entry of the file library listing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LibraryEntry {
    /// Upload file name
    pub name: String,
    /// Human readable size, e.g. `"12.5 MB"`
    pub size: String,
    /// Heuristic print time, e.g. `"2h 15m"`
    pub print_time: String,
    /// Primary material
    pub material: String,
    /// Thumbnail as a `data:` URL
    pub thumbnail: Option<String>,
}

impl LibraryEntry {
    /// Validate and analyze an uploaded container
    pub fn from_upload(name: &str, bytes: &[u8]) -> Result<Self> {
        validate_upload_name(name)?;
        let analysis = analyze_bytes(bytes)?;
        log::debug!("Analyzed upload '{}' ({} bytes)", name, bytes.len());
        Ok(Self::from_analysis(name, bytes.len() as u64, &analysis))
    }

    /// Build a record from an existing analysis
    pub fn from_analysis(name: &str, size_bytes: u64, analysis: &AnalysisResult) -> Self {
        let material = analysis
            .print_settings
            .material()
            .or_else(|| {
                analysis
                    .bambu_metadata
                    .ams_mapping
                    .first()
                    .map(|entry| entry.material_type.as_str())
            })
            .unwrap_or(UNKNOWN_MATERIAL)
            .to_string();

        Self {
            name: name.to_string(),
            size: format_size(size_bytes),
            print_time: analysis.model_info.estimated_print_time.clone(),
            material,
            thumbnail: analysis.thumbnail_bytes.as_deref().map(thumbnail_data_url),
        }
    }
}

/// Format a byte count with binary units and one decimal
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];

    if bytes < 1024 {
        return format!("{} B", bytes);
    }

    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", value, UNITS[unit])
}

fn thumbnail_data_url(bytes: &[u8]) -> String {
    let format = ImageFormat::from_magic_bytes(bytes);
    format!("data:{};base64,{}", format.mime_type(), STANDARD.encode(bytes))
}
