//! # threemf-analyzer
//!
//! Reads 3MF print containers and summarizes what a print-farm front end needs
//! to know about them.
//!
//! A 3MF file is a ZIP archive. Besides the mesh in `3D/3dmodel.model`, slicers
//! drop a thumbnail, a print settings XML document and vendor JSON metadata
//! into it. This crate extracts all of them in one pass:
//!
//! - Mesh statistics (vertex/triangle counts, bounding box) with rough print
//!   time and filament weight estimates
//! - The thumbnail image, as raw bytes
//! - Named slicer settings, whatever XML shape the slicer used
//! - AMS filament mapping, plate and print parameters from either generation
//!   of vendor metadata
//!
//! Missing or malformed parts never abort an analysis; the affected section is
//! left empty. Only a container that cannot be opened is an error.
//!
//! ## Example
//!
//! ```no_run
//! use threemf_analyzer::analyze_path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let result = analyze_path("benchy.3mf")?;
//! println!(
//!     "{} triangles, about {}",
//!     result.model_info.triangle_count, result.model_info.estimated_print_time
//! );
//! println!("{}", serde_json::to_string_pretty(&result)?);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod analyzer;
pub mod error;
pub mod library;
pub mod mesh_ops;
pub mod model;
pub mod opc;
pub mod parser;
pub mod vendor;

pub use analyzer::{AnalysisRequest, analyze, analyze_bytes, analyze_path, analyze_with_config};
pub use error::{Error, Result};
pub use library::{LibraryEntry, validate_upload_name};
pub use model::{
    AmsMappingEntry, AnalysisResult, AnalyzerConfig, BambuMetadata, BoundingBox, Dimensions,
    MeshStats, ModelInfo, PlateInfo, PrintParams, PrintSettings,
};
pub use opc::{ImageFormat, Package};
