//! Normalized vendor slicing metadata

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// One filament slot as recorded by the slicer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AmsMappingEntry {
    /// AMS tray index, defaults to the entry's position in the source array
    #[serde(rename = "ams_slot")]
    pub slot: i64,
    /// Filament material, e.g. "PLA"
    #[serde(rename = "type")]
    pub material_type: String,
    /// Hex color string, e.g. "#FFFFFF"
    pub color: String,
    /// Nozzle temperature in °C
    pub temperature: i64,
    /// Filament used in grams (only recorded by `filament_info` documents)
    #[serde(rename = "weight_used", skip_serializing_if = "Option::is_none")]
    pub weight_used_g: Option<f64>,
    /// Display name, defaults to "Filament {n}"
    #[serde(rename = "name")]
    pub display_name: String,
}

/// Build plate settings
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlateInfo {
    /// Plate surface
    pub plate_type: String,
    /// Bed temperature in °C
    pub bed_temp: i64,
    /// Chamber temperature in °C
    pub chamber_temp: i64,
    /// First layer bed temperature in °C
    pub first_layer_bed_temp: i64,
}

impl Default for PlateInfo {
    fn default() -> Self {
        Self {
            plate_type: "smooth".to_string(),
            bed_temp: 60,
            chamber_temp: 0,
            first_layer_bed_temp: 60,
        }
    }
}

/// Slicing parameters
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrintParams {
    /// Layer height in mm
    pub layer_height: f64,
    /// First layer height in mm
    pub initial_layer_height: f64,
    /// Wall loop count
    #[serde(rename = "perimeters")]
    pub perimeter_count: i64,
    /// Sparse infill density in percent
    pub infill_density: f64,
    /// Support style
    pub support_type: String,
    /// Whether supports are generated
    #[serde(rename = "enable_support")]
    pub support_enabled: bool,
    /// Brim style
    pub brim_type: String,
    /// Brim width in mm
    pub brim_width: f64,
}

impl Default for PrintParams {
    fn default() -> Self {
        Self {
            layer_height: 0.2,
            initial_layer_height: 0.2,
            perimeter_count: 3,
            infill_density: 20.0,
            support_type: "normal".to_string(),
            support_enabled: false,
            brim_type: "no_brim".to_string(),
            brim_width: 0.0,
        }
    }
}

/// Vendor slicing metadata normalized from either document generation
///
/// `plate_info` and `print_params` are `None` when no metadata document was
/// found; they serialize as empty JSON objects in that case.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BambuMetadata {
    /// Filament slots in source order
    pub ams_mapping: Vec<AmsMappingEntry>,
    /// Plate settings, defaulted per field when a document was found
    #[serde(serialize_with = "empty_object_if_none")]
    pub plate_info: Option<PlateInfo>,
    /// Slicing parameters, defaulted per field when a document was found
    #[serde(serialize_with = "empty_object_if_none")]
    pub print_params: Option<PrintParams>,
}

impl BambuMetadata {
    /// Whether no metadata document contributed to this value
    pub fn is_empty(&self) -> bool {
        self.ams_mapping.is_empty() && self.plate_info.is_none() && self.print_params.is_none()
    }
}

fn empty_object_if_none<S, T>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: Serialize,
{
    match value {
        Some(inner) => inner.serialize(serializer),
        None => serializer.serialize_map(Some(0))?.end(),
    }
}
