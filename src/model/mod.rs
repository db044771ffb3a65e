//! Data structures produced by an analysis

mod core;
mod geometry;
mod settings;
mod vendor;

pub use core::{AnalysisResult, AnalyzerConfig, DEFAULT_MAX_ENTRY_SIZE};

pub use geometry::{BoundingBox, Dimensions, MeshStats, ModelInfo, Point3d};

pub use settings::PrintSettings;

pub use vendor::{AmsMappingEntry, BambuMetadata, PlateInfo, PrintParams};
