//! XML parsing for the model and print settings documents

mod geometry;
mod settings;

use crate::error::{Error, Result};
use quick_xml::events::BytesStart;

pub use geometry::{parse_vertex, scan_mesh_stats};
pub use settings::{RECOGNIZED_SETTINGS, parse_print_settings};

/// Default buffer capacity for XML parsing (4KB)
const XML_BUFFER_CAPACITY: usize = 4096;

/// Decode an archive entry as XML text
///
/// Rejects non UTF-8 content and strips a leading byte order mark, which some
/// slicers emit.
pub(crate) fn xml_text(bytes: &[u8]) -> Result<&str> {
    let text = std::str::from_utf8(bytes).map_err(|e| Error::InvalidXml(e.to_string()))?;
    Ok(text.strip_prefix('\u{feff}').unwrap_or(text))
}

/// Resolve XML entity references in raw attribute or text content
pub(crate) fn unescape_text(raw: &str) -> Result<String> {
    quick_xml::escape::unescape(raw)
        .map(|text| text.into_owned())
        .map_err(|e| Error::InvalidXml(e.to_string()))
}

/// Extract local name from potentially namespaced XML element name
///
/// Producers declare different default namespaces and prefixes for the same
/// elements, so lookups compare local names only.
///
/// # Examples
///
/// - `"m:colorgroup"` returns `"colorgroup"`
/// - `"mesh"` returns `"mesh"`
pub(crate) fn get_local_name(name_str: &str) -> &str {
    if let Some(pos) = name_str.rfind(':') {
        &name_str[pos + 1..]
    } else {
        name_str
    }
}

/// Local name of an element as UTF-8
pub(crate) fn element_local_name<'a>(e: &'a BytesStart<'_>) -> Result<&'a str> {
    let name = std::str::from_utf8(e.name().into_inner())
        .map_err(|e| Error::InvalidXml(e.to_string()))?;
    Ok(get_local_name(name))
}

/// Get an attribute value by its local name, regardless of namespace prefix
pub(crate) fn get_attr_by_local_name(e: &BytesStart<'_>, local_name: &str) -> Result<Option<String>> {
    for attr in e.attributes() {
        let attr = attr?;
        let key =
            std::str::from_utf8(attr.key.as_ref()).map_err(|e| Error::InvalidXml(e.to_string()))?;
        if get_local_name(key) == local_name {
            let value =
                std::str::from_utf8(&attr.value).map_err(|e| Error::InvalidXml(e.to_string()))?;
            return Ok(Some(unescape_text(value)?));
        }
    }
    Ok(None)
}
