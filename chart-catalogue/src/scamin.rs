//! SCAMIN scale-denominator to zoom mapping, and per-class zoom-range
//! display rules.

use std::sync::OnceLock;

/// `(scale denominator, zoom)` anchor points, descending by scale
/// denominator.
pub static SCAMIN_TABLE: &[(u32, u8)] = &[
    (50_000_000, 0),
    (20_000_000, 2),
    (10_000_000, 4),
    (5_000_000, 6),
    (1_000_000, 8),
    (500_000, 10),
    (100_000, 12),
    (20_000, 14),
    (2_000, 16),
];

/// Map a SCAMIN scale denominator to the zoom at which the feature first
/// becomes visible. The first table entry whose scale denominator is `<= v`
/// wins; values below the smallest tabled denominator clamp to the table's
/// maximum zoom. Missing/non-numeric input (`None`) maps to zoom 0.
pub fn scamin_to_zoom(v: Option<f64>) -> u8 {
    let Some(v) = v else { return 0 };
    if !v.is_finite() {
        return 0;
    }
    for &(scale, zoom) in SCAMIN_TABLE {
        if (scale as f64) <= v {
            return zoom;
        }
    }
    SCAMIN_TABLE.last().map(|&(_, z)| z).unwrap_or(0)
}

struct ZoomRange {
    zmin: u8,
    zmax: u8,
}

fn zoom_rules() -> &'static std::collections::HashMap<&'static str, ZoomRange> {
    static RULES: OnceLock<std::collections::HashMap<&'static str, ZoomRange>> = OnceLock::new();
    RULES.get_or_init(|| {
        let mut m = std::collections::HashMap::new();
        m.insert("SOUNDG", ZoomRange { zmin: 10, zmax: 18 });
        m.insert("DEPCNT", ZoomRange { zmin: 4, zmax: 18 });
        m.insert("DEPARE", ZoomRange { zmin: 0, zmax: 18 });
        m.insert("LIGHTS", ZoomRange { zmin: 6, zmax: 18 });
        m.insert("BOYLAT", ZoomRange { zmin: 10, zmax: 18 });
        m.insert("BOYSAW", ZoomRange { zmin: 10, zmax: 18 });
        m.insert("BOYISD", ZoomRange { zmin: 10, zmax: 18 });
        m.insert("BCNLAT", ZoomRange { zmin: 10, zmax: 18 });
        m.insert("BCNCAR", ZoomRange { zmin: 10, zmax: 18 });
        m.insert("WRECKS", ZoomRange { zmin: 8, zmax: 18 });
        m.insert("OBSTRN", ZoomRange { zmin: 8, zmax: 18 });
        m.insert("UWTROC", ZoomRange { zmin: 8, zmax: 18 });
        m.insert("ROCKS", ZoomRange { zmin: 8, zmax: 18 });
        m
    })
}

/// Whether `objl` should be shown at zoom `z`. Classes with no registered
/// rule are always shown.
pub fn apply_scamin(objl: &str, z: u8) -> bool {
    match zoom_rules().get(objl) {
        Some(range) => range.zmin <= z && z <= range.zmax,
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monotonic_non_decreasing_as_scale_shrinks() {
        let scales = [50_000_000.0, 20_000_000.0, 1_000_000.0, 100_000.0, 2_000.0, 100.0];
        let mut last = 0;
        for s in scales {
            let z = scamin_to_zoom(Some(s));
            assert!(z >= last, "zoom regressed at scale {s}: {z} < {last}");
            last = z;
        }
    }

    #[test]
    fn none_maps_to_zero() {
        assert_eq!(scamin_to_zoom(None), 0);
        assert_eq!(scamin_to_zoom(Some(f64::NAN)), 0);
    }

    #[test]
    fn below_smallest_clamps_to_max() {
        assert_eq!(scamin_to_zoom(Some(1.0)), 16);
    }

    #[test]
    fn unknown_class_always_shown() {
        assert!(apply_scamin("CBLARE", 0));
        assert!(apply_scamin("CBLARE", 18));
    }

    #[test]
    fn soundg_hidden_at_low_zoom() {
        assert!(!apply_scamin("SOUNDG", 0));
        assert!(apply_scamin("SOUNDG", 12));
    }
}
