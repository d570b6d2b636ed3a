//! CM93 `LIGHTS` sector geometry and stable label codes.
//!
//! Sector wedges default to a yellow 2.5 NM range, matching OpenCPN's
//! convention when attributes are sparse.

use chart_model::Geometry;

const NM_TO_DEG: f64 = 1.0 / 60.0;
const DEFAULT_RANGE_NM: f64 = 2.5;
const ARC_STEP_DEG: f64 = 10.0;

fn arc_ring(center: (f64, f64), radius_deg: f64, start: f64, end: f64) -> Vec<(f64, f64)> {
    let end = if start > end { end + 360.0 } else { end };
    let mut coords = vec![center];
    let mut angle = start;
    while angle < end {
        let rad = angle.to_radians();
        coords.push((center.0 + radius_deg * rad.sin(), center.1 + radius_deg * rad.cos()));
        angle += ARC_STEP_DEG;
    }
    let rad = end.to_radians();
    coords.push((center.0 + radius_deg * rad.sin(), center.1 + radius_deg * rad.cos()));
    coords.push(center);
    coords
}

/// `SECTR1`/`SECTR2` present → a wedge polygon; otherwise a simple range
/// line pointing north.
pub fn build_light_sectors(
    point: (f64, f64),
    valnmr: Option<f64>,
    sectr1: Option<f64>,
    sectr2: Option<f64>,
) -> Geometry {
    let radius_deg = valnmr.unwrap_or(DEFAULT_RANGE_NM) * NM_TO_DEG;
    match (sectr1, sectr2) {
        (Some(s1), Some(s2)) => {
            let ring = arc_ring(point, radius_deg, s1, s2);
            Geometry::MultiPolygon(vec![vec![ring]])
        }
        _ => Geometry::LineString(vec![point, (point.0, point.1 + radius_deg)]),
    }
}

#[derive(Debug, Clone, Default)]
pub struct LightAttrs {
    pub litchr: Option<String>,
    pub siggrp: Option<String>,
    pub colour: Option<String>,
    pub sigper: Option<String>,
    pub valnmr: Option<String>,
    pub sectr1: Option<String>,
    pub sectr2: Option<String>,
}

/// A stable CRC32 over the canonical composition
/// `LITCHR SIGGRP COLOUR[0] SIGPER VALNMR [SECTR1-SECTR2]`, used as a
/// compact label-plane code instead of carrying the full description text.
pub fn build_light_character(attrs: &LightAttrs) -> u32 {
    let mut parts: Vec<String> = Vec::new();
    if let Some(v) = &attrs.litchr {
        parts.push(v.clone());
    }
    if let Some(v) = &attrs.siggrp {
        parts.push(v.clone());
    }
    if let Some(v) = &attrs.colour {
        if let Some(first) = v.chars().next() {
            parts.push(first.to_uppercase().to_string());
        }
    }
    if let Some(v) = &attrs.sigper {
        parts.push(v.clone());
    }
    if let Some(v) = &attrs.valnmr {
        parts.push(v.clone());
    }
    if let (Some(s1), Some(s2)) = (&attrs.sectr1, &attrs.sectr2) {
        parts.push(format!("{s1}-{s2}"));
    }
    let text = parts.join(" ");
    crc32fast::hash(text.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_sectors_yields_range_line() {
        let g = build_light_sectors((1.0, 2.0), Some(5.0), None, None);
        assert!(matches!(g, Geometry::LineString(_)));
    }

    #[test]
    fn sectors_yield_wedge_polygon() {
        let g = build_light_sectors((1.0, 2.0), Some(5.0), Some(10.0), Some(80.0));
        match g {
            Geometry::MultiPolygon(polys) => {
                assert_eq!(polys.len(), 1);
                assert!(polys[0][0].len() > 3);
            }
            _ => panic!("expected wedge polygon"),
        }
    }

    #[test]
    fn character_code_is_deterministic() {
        let attrs = LightAttrs {
            litchr: Some("Fl".to_string()),
            siggrp: Some("(2)".to_string()),
            colour: Some("white".to_string()),
            sigper: Some("6s".to_string()),
            valnmr: Some("10".to_string()),
            sectr1: None,
            sectr2: None,
        };
        let a = build_light_character(&attrs);
        let b = build_light_character(&attrs);
        assert_eq!(a, b);
    }

    #[test]
    fn character_code_changes_with_colour_initial() {
        let mut attrs = LightAttrs { colour: Some("white".to_string()), ..Default::default() };
        let white = build_light_character(&attrs);
        attrs.colour = Some("red".to_string());
        let red = build_light_character(&attrs);
        assert_ne!(white, red);
    }
}
