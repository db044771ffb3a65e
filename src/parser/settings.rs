//! Slicer print settings XML
//!
//! Slicers disagree on how settings are laid out. A setting such as
//! `layer_height` may appear as any of:
//!
//! ```xml
//! <layer_height>0.2</layer_height>
//! <setting name="layer_height" value="0.2"/>
//! <parameter name="layer_height">0.2</parameter>
//! ```
//!
//! The shapes are tried in that order; for each shape the first element in
//! document order is used. The root element itself never matches.

use super::{
    XML_BUFFER_CAPACITY, element_local_name, get_attr_by_local_name, unescape_text, xml_text,
};
use crate::error::{Error, Result};
use crate::model::PrintSettings;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// Settings extracted from print settings documents
pub const RECOGNIZED_SETTINGS: [&str; 5] = [
    "layer_height",
    "infill_density",
    "material",
    "nozzle_temperature",
    "bed_temperature",
];

/// `<name>`, `<setting name=..>`, `<parameter name=..>`
const SHAPE_COUNT: usize = 3;

/// Parse a print settings document
///
/// Settings that are not found, or whose first matching element carries
/// neither a `value` attribute nor text, are left out of the result.
pub fn parse_print_settings(bytes: &[u8]) -> Result<PrintSettings> {
    let xml = xml_text(bytes)?;
    // Values are trimmed as a whole; trimming each text event would drop the
    // spaces around entity references
    let mut reader = Reader::from_str(xml);

    let mut lookup = SettingsLookup::new();
    let mut buf = Vec::with_capacity(XML_BUFFER_CAPACITY);
    let mut depth: usize = 0;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::DocType(_)) => {
                return Err(Error::InvalidXml(
                    "DTD declarations are not allowed in settings documents".to_string(),
                ));
            }
            Ok(Event::Start(ref e)) => {
                lookup.finish_text();
                if depth > 0 {
                    lookup.visit(e, true)?;
                }
                depth += 1;
            }
            Ok(Event::Empty(ref e)) => {
                lookup.finish_text();
                if depth > 0 {
                    lookup.visit(e, false)?;
                }
            }
            Ok(Event::End(_)) => {
                lookup.finish_text();
                depth = depth.saturating_sub(1);
            }
            Ok(Event::Text(ref t)) => {
                let raw = std::str::from_utf8(t).map_err(|e| Error::InvalidXml(e.to_string()))?;
                lookup.push_text(&unescape_text(raw)?);
            }
            Ok(Event::GeneralRef(ref r)) => {
                // Entity references inside text arrive as separate events
                let name = std::str::from_utf8(r).map_err(|e| Error::InvalidXml(e.to_string()))?;
                lookup.push_text(&unescape_text(&format!("&{};", name))?);
            }
            Ok(Event::CData(ref t)) => {
                let raw = std::str::from_utf8(t).map_err(|e| Error::InvalidXml(e.to_string()))?;
                lookup.push_text(raw);
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    lookup.finish_text();
    Ok(lookup.into_settings())
}

/// First element per (setting, shape) and its value
struct SettingsLookup {
    /// `None`: no element of this shape yet. `Some(None)`: element found
    /// without a usable value.
    found: [[Option<Option<String>>; SHAPE_COUNT]; RECOGNIZED_SETTINGS.len()],
    /// Matched start tags still waiting for their leading text
    pending: Vec<(usize, usize)>,
    text: String,
}

impl SettingsLookup {
    fn new() -> Self {
        Self {
            found: std::array::from_fn(|_| [None, None, None]),
            pending: Vec::new(),
            text: String::new(),
        }
    }

    fn visit(&mut self, e: &BytesStart<'_>, has_content: bool) -> Result<()> {
        let local = element_local_name(e)?;
        let named = match local {
            "setting" => Some((1, get_attr_by_local_name(e, "name")?)),
            "parameter" => Some((2, get_attr_by_local_name(e, "name")?)),
            _ => None,
        };

        for (index, setting) in RECOGNIZED_SETTINGS.iter().enumerate() {
            let shape = if local == *setting {
                0
            } else if let Some((shape, Some(name))) = &named
                && name.as_str() == *setting
            {
                *shape
            } else {
                continue;
            };

            if self.found[index][shape].is_some() {
                continue;
            }

            let value = get_attr_by_local_name(e, "value")?.filter(|v| !v.is_empty());
            if value.is_none() && has_content {
                self.pending.push((index, shape));
            }
            self.found[index][shape] = Some(value);
        }

        Ok(())
    }

    fn push_text(&mut self, text: &str) {
        if !self.pending.is_empty() {
            self.text.push_str(text);
        }
    }

    fn finish_text(&mut self) {
        if self.pending.is_empty() {
            return;
        }

        let trimmed = self.text.trim();
        let value = (!trimmed.is_empty()).then(|| trimmed.to_string());
        for (index, shape) in self.pending.drain(..) {
            self.found[index][shape] = Some(value.clone());
        }
        self.text.clear();
    }

    fn into_settings(self) -> PrintSettings {
        let mut settings = PrintSettings::new();

        for (setting, shapes) in RECOGNIZED_SETTINGS.iter().zip(self.found) {
            // The first shape with an element decides, even if it has no value
            if let Some(Some(value)) = shapes.into_iter().flatten().next() {
                settings.insert(*setting, value);
            }
        }

        settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_element() {
        let xml = r#"<config><layer_height>0.28</layer_height><material>PETG</material></config>"#;
        let settings = parse_print_settings(xml.as_bytes()).unwrap();
        assert_eq!(settings.layer_height(), Some("0.28"));
        assert_eq!(settings.material(), Some("PETG"));
        assert_eq!(settings.infill_density(), None);
    }

    #[test]
    fn test_setting_name_attribute() {
        let xml = r#"<config><setting name="layer_height" value="0.16"/></config>"#;
        let settings = parse_print_settings(xml.as_bytes()).unwrap();
        assert_eq!(settings.layer_height(), Some("0.16"));
        assert_eq!(settings.len(), 1);
    }

    #[test]
    fn test_parameter_with_text() {
        let xml = r#"<config>
  <parameter name="nozzle_temperature">
    215
  </parameter>
</config>"#;
        let settings = parse_print_settings(xml.as_bytes()).unwrap();
        assert_eq!(settings.nozzle_temperature(), Some("215"));
    }

    #[test]
    fn test_whitespace_only_text_is_absent() {
        let xml = "<config><material>\n    \t</material><setting name=\"material\" value=\"PLA\"/></config>";
        let settings = parse_print_settings(xml.as_bytes()).unwrap();
        assert_eq!(settings.material(), None);
        assert!(settings.is_empty());
    }

    #[test]
    fn test_value_attribute_is_not_trimmed() {
        let xml = r#"<config><setting name="material" value=" PLA "/></config>"#;
        let settings = parse_print_settings(xml.as_bytes()).unwrap();
        assert_eq!(settings.material(), Some(" PLA "));
    }

    #[test]
    fn test_direct_element_takes_precedence() {
        let xml = r#"<config>
  <setting name="bed_temperature" value="55"/>
  <group><bed_temperature value="65"/></group>
</config>"#;
        let settings = parse_print_settings(xml.as_bytes()).unwrap();
        assert_eq!(settings.bed_temperature(), Some("65"));
    }

    #[test]
    fn test_first_element_of_a_shape_wins() {
        let xml = r#"<config>
  <setting name="material" value="PLA"/>
  <setting name="material" value="ABS"/>
</config>"#;
        let settings = parse_print_settings(xml.as_bytes()).unwrap();
        assert_eq!(settings.material(), Some("PLA"));
    }

    #[test]
    fn test_value_attribute_beats_text() {
        let xml = r#"<config><infill_density value="15%">ignored</infill_density></config>"#;
        let settings = parse_print_settings(xml.as_bytes()).unwrap();
        assert_eq!(settings.infill_density(), Some("15%"));
    }

    #[test]
    fn test_empty_first_match_hides_later_shapes() {
        let xml = r#"<config>
  <layer_height/>
  <setting name="layer_height" value="0.2"/>
</config>"#;
        let settings = parse_print_settings(xml.as_bytes()).unwrap();
        assert_eq!(settings.layer_height(), None);
    }

    #[test]
    fn test_leading_text_only() {
        let xml = r#"<config><material><note>x</note>PLA</material></config>"#;
        let settings = parse_print_settings(xml.as_bytes()).unwrap();
        assert_eq!(settings.material(), None);
    }

    #[test]
    fn test_root_element_never_matches() {
        let xml = r#"<material>PLA</material>"#;
        let settings = parse_print_settings(xml.as_bytes()).unwrap();
        assert!(settings.is_empty());
    }

    #[test]
    fn test_namespaced_document() {
        let xml = r#"<s:config xmlns:s="urn:slicer"><s:setting s:name="material" s:value="PLA &amp; TPU"/></s:config>"#;
        let settings = parse_print_settings(xml.as_bytes()).unwrap();
        assert_eq!(settings.material(), Some("PLA & TPU"));
    }

    #[test]
    fn test_entity_in_text() {
        let xml = r#"<config><material>PLA &amp; TPU</material></config>"#;
        let settings = parse_print_settings(xml.as_bytes()).unwrap();
        assert_eq!(settings.material(), Some("PLA & TPU"));
    }

    #[test]
    fn test_malformed_document() {
        assert!(parse_print_settings(b"<config><material>PLA</config>").is_err());
    }
}
