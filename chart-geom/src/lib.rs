//! Slippy-map tile math: bbox/XYZ conversion and metre/degree offsets.
//!
//! Pure functions only, no I/O, no chart-specific types. Kept free of every
//! other crate in the workspace so tile math can be unit tested in
//! isolation.

use std::f64::consts::PI;

/// Geographic bounds of a tile, WGS84 lon/lat degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileBounds {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

/// Return the geographic bounds of slippy-map tile `(z, x, y)`.
///
/// Uses the standard WebMercator XYZ convention (`n = 2^z` tiles per side,
/// latitude via `atan(sinh(...))`).
pub fn tile_bounds(z: u8, x: u32, y: u32) -> TileBounds {
    let n = 2f64.powi(z as i32);
    let west = x as f64 / n * 360.0 - 180.0;
    let east = (x + 1) as f64 / n * 360.0 - 180.0;
    let north = (PI * (1.0 - 2.0 * y as f64 / n)).sinh().atan().to_degrees();
    let south = (PI * (1.0 - 2.0 * (y + 1) as f64 / n)).sinh().atan().to_degrees();
    TileBounds { west, south, east, north }
}

/// Inverse of [`tile_bounds`]: recover `(x, y)` for a bbox known to come
/// from tile `z`. Rounds to the nearest tile index.
pub fn bbox_to_xyz(z: u8, west: f64, _south: f64, _east: f64, north: f64) -> (u32, u32) {
    let n = 2f64.powi(z as i32);
    let x = ((west + 180.0) / 360.0 * n).round();
    let y_frac = 1.0 - (north.to_radians().tan() + 1.0 / north.to_radians().cos()).ln() / PI;
    let y = (y_frac / 2.0 * n).round();
    (x.max(0.0) as u32, y.max(0.0) as u32)
}

/// Validate that `(x, y)` are possible tile indices at zoom `z`.
pub fn is_valid_tile(z: u8, x: u32, y: u32) -> bool {
    let side = 1u64 << z.min(62);
    (x as u64) < side && (y as u64) < side
}

/// Convert a metre offset at latitude `lat_deg` into a WGS84 degree offset.
///
/// Latitude-corrected form: `dx` scales by `111_320 * cos(lat)`, `dy` by a
/// flat `111_320`. Near the poles `cos(lat)` underflows to a tiny nonzero
/// float rather than exact zero, so the guard is a tolerance rather than an
/// equality check; `dx` yields zero offset there instead of a huge one.
pub fn meter_offset_to_degrees(lat_deg: f64, dx_meters: f64, dy_meters: f64) -> (f64, f64) {
    const METERS_PER_DEGREE: f64 = 111_320.0;
    let cos_lat = lat_deg.to_radians().cos();
    let dlon = if cos_lat.abs() < 1e-12 {
        0.0
    } else {
        dx_meters / (METERS_PER_DEGREE * cos_lat)
    };
    let dlat = dy_meters / METERS_PER_DEGREE;
    (dlon, dlat)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn tile_bounds_z0_is_whole_world() {
        let b = tile_bounds(0, 0, 0);
        assert!((b.west - (-180.0)).abs() < 1e-9);
        assert!((b.east - 180.0).abs() < 1e-9);
        assert!(b.north > 0.0 && b.south < 0.0);
    }

    #[test]
    fn equator_offset_is_isotropic() {
        let (dlon, dlat) = meter_offset_to_degrees(0.0, 1113.2, 1113.2);
        assert!((dlon - dlat).abs() < 1e-9);
        assert!((dlon - 0.01).abs() < 1e-3);
    }

    #[test]
    fn offset_at_60deg_is_roughly_doubled_lon() {
        let (dlon, _dlat) = meter_offset_to_degrees(60.0, 1113.2, 0.0);
        assert!((dlon - 0.02).abs() < 1e-3);
    }

    #[test]
    fn pole_offset_dx_is_zero() {
        let (dlon, _) = meter_offset_to_degrees(90.0, 1000.0, 0.0);
        assert_eq!(dlon, 0.0);
    }

    proptest! {
        #[test]
        fn round_trip_law(z in 0u8..14, xf in 0.0f64..1.0, yf in 0.0f64..1.0) {
            let side = 1u32 << z;
            let x = ((xf * side as f64) as u32).min(side - 1);
            let y = ((yf * side as f64) as u32).min(side - 1);
            let b = tile_bounds(z, x, y);
            let (rx, ry) = bbox_to_xyz(z, b.west, b.south, b.east, b.north);
            prop_assert_eq!(rx, x);
            prop_assert_eq!(ry, y);
        }
    }

    #[test]
    fn tile_validity() {
        assert!(is_valid_tile(0, 0, 0));
        assert!(!is_valid_tile(0, 0, 1));
        assert!(is_valid_tile(3, 7, 7));
        assert!(!is_valid_tile(3, 8, 0));
    }
}
