//! Slicer print settings

use serde::Serialize;
use std::collections::BTreeMap;

/// Named slicer settings read from a print settings XML document
///
/// Only settings that were actually found are present; nothing is defaulted
/// at this layer. Serializes as a flat JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PrintSettings {
    values: BTreeMap<String, String>,
}

impl PrintSettings {
    /// Create an empty settings map
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a setting value, replacing any earlier one
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Look up a setting by name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Number of settings present
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no setting was found
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over `(name, value)` pairs in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// `layer_height` setting
    pub fn layer_height(&self) -> Option<&str> {
        self.get("layer_height")
    }

    /// `infill_density` setting
    pub fn infill_density(&self) -> Option<&str> {
        self.get("infill_density")
    }

    /// `material` setting
    pub fn material(&self) -> Option<&str> {
        self.get("material")
    }

    /// `nozzle_temperature` setting
    pub fn nozzle_temperature(&self) -> Option<&str> {
        self.get("nozzle_temperature")
    }

    /// `bed_temperature` setting
    pub fn bed_temperature(&self) -> Option<&str> {
        self.get("bed_temperature")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_settings_are_absent() {
        let mut settings = PrintSettings::new();
        settings.insert("layer_height", "0.16");

        assert_eq!(settings.layer_height(), Some("0.16"));
        assert_eq!(settings.material(), None);
        assert_eq!(settings.len(), 1);
    }

    #[test]
    fn test_serializes_as_flat_object() {
        let mut settings = PrintSettings::new();
        settings.insert("material", "PETG");
        settings.insert("bed_temperature", "70");

        let json = serde_json::to_value(&settings).unwrap();
        assert_eq!(json, serde_json::json!({"material": "PETG", "bed_temperature": "70"}));
    }
}
