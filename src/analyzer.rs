//! Aggregation of all extractors into one [`AnalysisResult`]
//!
//! Every extractor runs against the same open package. A failing extractor
//! degrades its own section to the empty value and is logged; only failures to
//! open the container reach the caller.

use crate::error::{Error, Result};
use crate::model::{AnalysisResult, AnalyzerConfig, ModelInfo, PrintSettings};
use crate::opc::{
    EntrySource, MODEL_PATH, PRINT_SETTINGS_CANDIDATES, Package, extract_thumbnail, first_present,
};
use crate::parser::{parse_print_settings, scan_mesh_stats};
use crate::vendor::extract_bambu_metadata;
use std::io::{Read, Seek};
use std::path::{Path, PathBuf};

/// Analyze an open package with the default configuration
pub fn analyze<R: Read + Seek>(package: &mut Package<R>) -> AnalysisResult {
    analyze_with_config(package, &AnalyzerConfig::default())
}

/// Run every extractor against `source` and assemble the result
///
/// Never fails: missing or malformed parts yield empty sections.
pub fn analyze_with_config<S: EntrySource + ?Sized>(
    source: &mut S,
    config: &AnalyzerConfig,
) -> AnalysisResult {
    let model_info = extract_model_info(source).unwrap_or_else(|e| {
        log::warn!("Model geometry unavailable: {}", e);
        ModelInfo::default()
    });

    let thumbnail_bytes = if config.reads_thumbnail() {
        extract_thumbnail(source)
    } else {
        None
    };

    let print_settings = extract_print_settings(source);
    let bambu_metadata = extract_bambu_metadata(source);

    AnalysisResult {
        has_thumbnail: thumbnail_bytes.is_some(),
        thumbnail_bytes,
        model_info,
        print_settings,
        bambu_metadata,
    }
}

/// Geometry summary of `3D/3dmodel.model`
///
/// Fails with [`Error::MissingFile`] when the model part is absent, and with
/// the parser's error when it is malformed.
pub fn extract_model_info<S: EntrySource + ?Sized>(source: &mut S) -> Result<ModelInfo> {
    let bytes = source
        .read_entry(MODEL_PATH)?
        .ok_or_else(|| Error::MissingFile(MODEL_PATH.to_string()))?;
    let stats = scan_mesh_stats(&bytes)?;
    Ok(ModelInfo::from(&stats))
}

/// Print settings from the first settings document present
///
/// Only the first existing candidate is consulted. A document that cannot be
/// read or parsed gives empty settings rather than falling through to the
/// next candidate.
pub fn extract_print_settings<S: EntrySource + ?Sized>(source: &mut S) -> PrintSettings {
    let Some((name, bytes)) = first_present(source, &PRINT_SETTINGS_CANDIDATES) else {
        return PrintSettings::new();
    };

    match bytes.and_then(|bytes| parse_print_settings(&bytes)) {
        Ok(settings) => {
            log::debug!("Read {} print settings from '{}'", settings.len(), name);
            settings
        }
        Err(e) => {
            log::warn!("Ignoring unusable print settings '{}': {}", name, e);
            PrintSettings::new()
        }
    }
}

/// One analysis call: a container given by path or by bytes, and the knobs
/// to analyze it with
///
/// Exactly one of path and bytes must be set.
///
/// # Example
///
/// ```no_run
/// use threemf_analyzer::{AnalysisRequest, AnalyzerConfig};
///
/// # fn main() -> threemf_analyzer::Result<()> {
/// let result = AnalysisRequest::new()
///     .with_path("benchy.3mf")
///     .with_config(AnalyzerConfig::new().with_thumbnail(false))
///     .analyze()?;
/// println!("{} triangles", result.model_info.triangle_count);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct AnalysisRequest {
    path: Option<PathBuf>,
    bytes: Option<Vec<u8>>,
    config: AnalyzerConfig,
}

impl AnalysisRequest {
    /// Create an empty request with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Analyze the container stored at `path`
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Analyze a container held in memory
    pub fn with_bytes(mut self, bytes: impl Into<Vec<u8>>) -> Self {
        self.bytes = Some(bytes.into());
        self
    }

    /// Replace the analyzer configuration
    pub fn with_config(mut self, config: AnalyzerConfig) -> Self {
        self.config = config;
        self
    }

    /// Open the container, run the analysis and release the container
    ///
    /// Fails with [`Error::InvalidSource`] before touching the filesystem when
    /// neither or both inputs are set, with [`Error::Io`] when the path cannot
    /// be opened, and with [`Error::NotAnArchive`] when the data is not a ZIP.
    pub fn analyze(self) -> Result<AnalysisResult> {
        let config = self.config;
        match (self.path, self.bytes) {
            (Some(path), None) => {
                let mut package =
                    Package::from_path(&path)?.with_max_entry_size(config.max_entry_size());
                Ok(analyze_with_config(&mut package, &config))
            }
            (None, Some(bytes)) => {
                let mut package =
                    Package::from_bytes(bytes)?.with_max_entry_size(config.max_entry_size());
                Ok(analyze_with_config(&mut package, &config))
            }
            (None, None) => Err(Error::InvalidSource(
                "either a path or a byte buffer is required".to_string(),
            )),
            (Some(_), Some(_)) => Err(Error::InvalidSource(
                "a path and a byte buffer were both given".to_string(),
            )),
        }
    }
}

/// Analyze the 3MF file at `path` with the default configuration
pub fn analyze_path<P: AsRef<Path>>(path: P) -> Result<AnalysisResult> {
    let mut package = Package::from_path(path)?;
    Ok(analyze(&mut package))
}

/// Analyze a 3MF container held in memory with the default configuration
pub fn analyze_bytes(bytes: &[u8]) -> Result<AnalysisResult> {
    let mut package = Package::from_bytes(bytes)?;
    Ok(analyze(&mut package))
}
