//! Geometry statistics types

use serde::Serialize;

use crate::mesh_ops;

/// A 3D point represented as (x, y, z)
pub type Point3d = (f64, f64, f64);

/// Axis-aligned bounding box folded from mesh vertices
///
/// An empty box is seeded with `min = +inf` and `max = -inf` on every axis so
/// that the first included point sets both bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Smallest coordinate seen on each axis
    pub min: Point3d,
    /// Largest coordinate seen on each axis
    pub max: Point3d,
}

impl BoundingBox {
    /// Create an empty bounding box
    pub fn empty() -> Self {
        Self {
            min: (f64::INFINITY, f64::INFINITY, f64::INFINITY),
            max: (f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    /// Whether no point has been included yet
    pub fn is_empty(&self) -> bool {
        self.min.0 > self.max.0 || self.min.1 > self.max.1 || self.min.2 > self.max.2
    }

    /// Grow the box to contain `point`
    pub fn include(&mut self, point: Point3d) {
        self.min.0 = self.min.0.min(point.0);
        self.min.1 = self.min.1.min(point.1);
        self.min.2 = self.min.2.min(point.2);
        self.max.0 = self.max.0.max(point.0);
        self.max.1 = self.max.1.max(point.1);
        self.max.2 = self.max.2.max(point.2);
    }

    /// Extent along each axis, zero for an empty box
    pub fn extent(&self) -> Point3d {
        if self.is_empty() {
            return (0.0, 0.0, 0.0);
        }
        (
            self.max.0 - self.min.0,
            self.max.1 - self.min.1,
            self.max.2 - self.min.2,
        )
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::empty()
    }
}

/// Vertex and triangle totals across every mesh in a model document
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MeshStats {
    /// Number of `<vertex>` elements inside `<mesh>` elements
    pub vertex_count: u64,
    /// Number of `<triangle>` elements inside `<mesh>` elements
    pub triangle_count: u64,
    /// Bounds of every vertex seen
    pub bounding_box: BoundingBox,
}

impl MeshStats {
    /// Record one vertex
    pub fn add_vertex(&mut self, point: Point3d) {
        self.vertex_count += 1;
        self.bounding_box.include(point);
    }

    /// Record one triangle
    pub fn add_triangle(&mut self) {
        self.triangle_count += 1;
    }

    /// Physical dimensions of the bounding box
    pub fn dimensions(&self) -> Dimensions {
        let (width, depth, height) = self.bounding_box.extent();
        Dimensions {
            width: mesh_ops::round2(width),
            depth: mesh_ops::round2(depth),
            height: mesh_ops::round2(height),
        }
    }
}

/// Bounding-box dimensions in millimeters, rounded to two decimals
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Dimensions {
    /// Extent along X
    pub width: f64,
    /// Extent along Y
    pub depth: f64,
    /// Extent along Z
    pub height: f64,
}

impl Dimensions {
    /// Bounding-box volume in mm³
    pub fn volume_mm3(&self) -> f64 {
        self.width * self.depth * self.height
    }
}

/// Geometry summary with rough print estimates
///
/// `Default` is the summary of a model with no meshes, which is also what an
/// analysis reports when `3D/3dmodel.model` is absent or malformed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelInfo {
    /// Total vertices across all meshes
    #[serde(rename = "vertices")]
    pub vertex_count: u64,
    /// Total triangles across all meshes
    #[serde(rename = "triangles")]
    pub triangle_count: u64,
    /// Bounding-box dimensions in mm
    pub dimensions: Dimensions,
    /// Bounding-box volume in cm³, rounded to two decimals
    pub volume_cm3: f64,
    /// Heuristic print time, formatted as `"{hours}h {minutes}m"`
    pub estimated_print_time: String,
    /// Heuristic filament weight in grams, rounded to two decimals
    pub estimated_material_grams: f64,
}

impl From<&MeshStats> for ModelInfo {
    fn from(stats: &MeshStats) -> Self {
        let dimensions = stats.dimensions();
        let volume_mm3 = dimensions.volume_mm3();

        Self {
            vertex_count: stats.vertex_count,
            triangle_count: stats.triangle_count,
            dimensions,
            volume_cm3: mesh_ops::round2(volume_mm3 / 1000.0),
            estimated_print_time: mesh_ops::estimate_print_time(stats.triangle_count, volume_mm3),
            estimated_material_grams: mesh_ops::estimate_material_grams(volume_mm3),
        }
    }
}

impl Default for ModelInfo {
    fn default() -> Self {
        Self::from(&MeshStats::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_bounding_box_has_zero_extent() {
        let bbox = BoundingBox::empty();
        assert!(bbox.is_empty());
        assert_eq!(bbox.extent(), (0.0, 0.0, 0.0));
    }

    #[test]
    fn test_first_point_sets_both_bounds() {
        let mut bbox = BoundingBox::empty();
        bbox.include((1.0, -2.0, 3.0));
        assert!(!bbox.is_empty());
        assert_eq!(bbox.min, (1.0, -2.0, 3.0));
        assert_eq!(bbox.max, (1.0, -2.0, 3.0));
        assert_eq!(bbox.extent(), (0.0, 0.0, 0.0));
    }

    #[test]
    fn test_mesh_stats_dimensions() {
        let mut stats = MeshStats::default();
        stats.add_vertex((0.0, 0.0, 0.0));
        stats.add_vertex((10.0, 20.0, 5.0));
        stats.add_triangle();

        let dims = stats.dimensions();
        assert_eq!(dims.width, 10.0);
        assert_eq!(dims.depth, 20.0);
        assert_eq!(dims.height, 5.0);
        assert_eq!(dims.volume_mm3(), 1000.0);
    }

    #[test]
    fn test_default_model_info_is_all_zero() {
        let info = ModelInfo::default();
        assert_eq!(info.vertex_count, 0);
        assert_eq!(info.triangle_count, 0);
        assert_eq!(info.dimensions, Dimensions::default());
        assert_eq!(info.volume_cm3, 0.0);
        assert_eq!(info.estimated_print_time, "0h 0m");
        assert_eq!(info.estimated_material_grams, 0.0);
    }

    #[test]
    fn test_model_info_wire_keys() {
        let json = serde_json::to_value(ModelInfo::default()).unwrap();
        assert!(json.get("vertices").is_some());
        assert!(json.get("triangles").is_some());
        assert!(json["dimensions"].get("width").is_some());
        assert_eq!(json["estimated_print_time"], "0h 0m");
    }
}
