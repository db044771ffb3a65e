//! Numeric helpers for geometry summaries
//!
//! The print time and material estimates are deliberately rough: they use the
//! bounding-box volume rather than the enclosed mesh volume and a fixed
//! infill/density assumption. The constants are kept stable so that results
//! stay comparable with previously stored analyses.

/// Assumed infill fraction for the material estimate
pub const INFILL_FRACTION: f64 = 0.2;

/// Assumed filament density in g/cm³ (PLA)
pub const FILAMENT_DENSITY_G_PER_CM3: f64 = 1.24;

/// Minutes added per square root of the triangle count
const COMPLEXITY_MINUTES_PER_SQRT_TRIANGLE: f64 = 0.1;

/// Minutes added per cm³ of bounding-box volume
const MINUTES_PER_CM3: f64 = 10.0;

/// Round to two decimal places, ties to even on the exact binary value
///
/// Formatting with a fixed precision rounds the exact decimal expansion of the
/// float, so `round2(2.675)` is `2.67`: the nearest double to 2.675 lies just
/// below it.
pub fn round2(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{:.2}", value).parse().unwrap_or(value)
}

/// Estimate print time from triangle count and bounding-box volume (mm³)
///
/// Returns `"{hours}h {minutes}m"` with both parts truncated toward zero.
pub fn estimate_print_time(triangle_count: u64, volume_mm3: f64) -> String {
    let base_minutes = (triangle_count as f64).sqrt() * COMPLEXITY_MINUTES_PER_SQRT_TRIANGLE;
    let volume_cm3 = volume_mm3 / 1000.0;
    let total_minutes = base_minutes + volume_cm3 * MINUTES_PER_CM3;

    let hours = (total_minutes / 60.0).trunc() as u64;
    let minutes = (total_minutes % 60.0).trunc() as u64;

    format!("{}h {}m", hours, minutes)
}

/// Estimate filament weight in grams from bounding-box volume (mm³)
pub fn estimate_material_grams(volume_mm3: f64) -> f64 {
    let volume_cm3 = volume_mm3 / 1000.0;
    round2(volume_cm3 * FILAMENT_DENSITY_G_PER_CM3 * INFILL_FRACTION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(1.0), 1.0);
        assert_eq!(round2(0.248), 0.25);
        assert_eq!(round2(10.004), 10.0);
        assert_eq!(round2(2.675), 2.67);
        assert_eq!(round2(-0.0), 0.0);
    }

    #[test]
    fn test_round2_passes_through_non_finite() {
        assert!(round2(f64::NAN).is_nan());
        assert_eq!(round2(f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn test_estimate_print_time() {
        // sqrt(2) * 0.1 + 1.0 * 10 = 10.14 minutes
        assert_eq!(estimate_print_time(2, 1000.0), "0h 10m");
        // sqrt(10000) * 0.1 + 13.0 * 10 = 140 minutes
        assert_eq!(estimate_print_time(10_000, 13_000.0), "2h 20m");
        assert_eq!(estimate_print_time(0, 0.0), "0h 0m");
    }

    #[test]
    fn test_estimate_material_grams() {
        assert_eq!(estimate_material_grams(1000.0), 0.25);
        assert_eq!(estimate_material_grams(0.0), 0.0);
        // 50 cm³ * 1.24 * 0.2 = 12.4 g
        assert_eq!(estimate_material_grams(50_000.0), 12.4);
    }
}
