//! Mesh statistics from `3D/3dmodel.model`

use super::{XML_BUFFER_CAPACITY, element_local_name, xml_text};
use crate::error::{Error, Result};
use crate::model::{MeshStats, Point3d};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// Scan a 3MF model document and total its meshes
///
/// Every `<vertex>` and `<triangle>` nested anywhere inside a `<mesh>` element
/// is counted, whatever namespace or prefix the producer used. Vertices are
/// folded into the bounding box as they stream past; no vertex arrays are
/// kept.
///
/// Fails on malformed XML, DTD declarations, and vertices with a missing or
/// non-numeric coordinate.
pub fn scan_mesh_stats(bytes: &[u8]) -> Result<MeshStats> {
    let xml = xml_text(bytes)?;
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut stats = MeshStats::default();
    let mut buf = Vec::with_capacity(XML_BUFFER_CAPACITY);
    // Number of currently open <mesh> elements
    let mut mesh_depth: usize = 0;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::DocType(_)) => {
                return Err(Error::InvalidXml(
                    "DTD declarations are not allowed in 3MF files for security reasons"
                        .to_string(),
                ));
            }
            Ok(Event::Start(ref e)) => match element_local_name(e)? {
                "mesh" => mesh_depth += 1,
                "vertex" if mesh_depth > 0 => stats.add_vertex(parse_vertex(e)?),
                "triangle" if mesh_depth > 0 => stats.add_triangle(),
                _ => {}
            },
            Ok(Event::Empty(ref e)) => match element_local_name(e)? {
                "vertex" if mesh_depth > 0 => stats.add_vertex(parse_vertex(e)?),
                "triangle" if mesh_depth > 0 => stats.add_triangle(),
                _ => {}
            },
            Ok(Event::End(ref e)) => {
                let name = std::str::from_utf8(e.name().into_inner())
                    .map_err(|e| Error::InvalidXml(e.to_string()))?;
                if super::get_local_name(name) == "mesh" {
                    mesh_depth = mesh_depth.saturating_sub(1);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    log::debug!(
        "Scanned model: {} vertices, {} triangles",
        stats.vertex_count,
        stats.triangle_count
    );

    Ok(stats)
}

/// Parse the x/y/z coordinates of a vertex element
///
/// Attributes other than x, y and z are ignored. Coordinates must be present
/// and finite.
pub fn parse_vertex(e: &BytesStart<'_>) -> Result<Point3d> {
    let mut x_opt: Option<f64> = None;
    let mut y_opt: Option<f64> = None;
    let mut z_opt: Option<f64> = None;

    let parse_f64 = |axis: &str, value: &[u8]| -> Result<f64> {
        let value_str = std::str::from_utf8(value).map_err(|e| Error::InvalidXml(e.to_string()))?;
        let value = value_str.trim().parse::<f64>().map_err(|_| {
            Error::parse_error_with_context(
                &format!("vertex {} coordinate", axis),
                value_str,
                "floating-point number",
            )
        })?;
        if !value.is_finite() {
            return Err(Error::InvalidXml(format!(
                "Vertex {} coordinate must be finite (got {})",
                axis, value
            )));
        }
        Ok(value)
    };

    for attr_result in e.attributes() {
        let attr = attr_result?;
        match attr.key.as_ref() {
            b"x" => x_opt = Some(parse_f64("x", &attr.value)?),
            b"y" => y_opt = Some(parse_f64("y", &attr.value)?),
            b"z" => z_opt = Some(parse_f64("z", &attr.value)?),
            _ => {}
        }
    }

    let x = x_opt.ok_or_else(|| Error::invalid_xml_element("vertex", "missing x attribute"))?;
    let y = y_opt.ok_or_else(|| Error::invalid_xml_element("vertex", "missing y attribute"))?;
    let z = z_opt.ok_or_else(|| Error::invalid_xml_element("vertex", "missing z attribute"))?;

    Ok((x, y, z))
}
