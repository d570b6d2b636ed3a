//! S-52 pre-classifier: attaches styling hints to features (Phase A) and
//! finalizes the tile's safety contour (Phase B).
//!
//! Two-pass design per the data model: Phase A is pure and per-feature;
//! Phase B operates on the collected `DEPCNT` population and returns the
//! index set the caller should mutate. Neither phase ever panics on
//! missing or malformed attributes — non-numeric values are simply treated
//! as absent.

pub mod lights;
pub mod palette;
pub mod symbols;

use std::collections::HashMap;

use chart_model::{ContourConfig, Feature, Value};

pub use lights::{build_light_character, build_light_sectors, LightAttrs};
pub use palette::Palette;
pub use symbols::{SymbolAtlas, SymbolEntry};

/// Hints Phase A/B attach to a feature, merged back into `Feature.attrs`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HintSet(pub HashMap<String, Value>);

impl HintSet {
    fn new() -> Self {
        Self(HashMap::new())
    }

    fn set(&mut self, key: &str, value: impl Into<Value>) {
        self.0.insert(key.to_string(), value.into());
    }

    /// Merge hints into a feature's attribute bag, overwriting on key
    /// collision.
    pub fn apply_to(&self, feature: &mut Feature) {
        for (k, v) in &self.0 {
            feature.attrs.insert(k.clone(), v.clone());
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }
}

/// Depth band bucket a `DEPARE` falls into relative to `shallow`/`deep`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepthBand {
    VeryShallow,
    Intermediate,
    Deep,
}

impl DepthBand {
    fn as_str(self) -> &'static str {
        match self {
            DepthBand::VeryShallow => "VS",
            DepthBand::Intermediate => "IM",
            DepthBand::Deep => "DW",
        }
    }
}

/// Phase A: classify a single feature, pure function of `(objl, attrs, cfg)`.
pub fn classify_feature(
    feature: &Feature,
    cfg: &ContourConfig,
    palette: &Palette,
    atlas: &SymbolAtlas,
) -> HintSet {
    match feature.objl.as_str() {
        "DEPARE" => classify_depare(feature, cfg, palette),
        "DEPCNT" => classify_depcnt(feature, cfg),
        "SOUNDG" => classify_soundg(feature, cfg),
        "OBSTRN" | "WRECKS" | "UWTROC" | "ROCKS" => classify_hazard(feature, cfg, atlas),
        objl if objl.starts_with("BCN") || objl.starts_with("BOY") => classify_navaid(feature),
        "CBLARE" | "PIPARE" => classify_line_pattern(feature),
        _ => HintSet::new(),
    }
}

fn classify_depare(feature: &Feature, cfg: &ContourConfig, palette: &Palette) -> HintSet {
    let mut hints = HintSet::new();
    let d1 = feature.attr_f64("DRVAL1");
    let d2 = feature.attr_f64("DRVAL2");
    let (min, max) = match (d1, d2) {
        (Some(a), Some(b)) => (a.min(b), a.max(b)),
        (Some(a), None) | (None, Some(a)) => (a, a),
        (None, None) => return hints,
    };

    let is_shallow = min < cfg.safety;
    hints.set("isShallow", is_shallow);

    let fill_token = if is_shallow {
        Some(palette.resolve("DEPVS").unwrap_or_else(|| "DEPIT1".to_string()))
    } else if max >= cfg.safety {
        Some(palette.resolve("DEPDW").unwrap_or_else(|| "DEPDW".to_string()))
    } else {
        None
    };
    if let Some(token) = fill_token {
        hints.set("fillToken", token);
    }

    let band = if min < cfg.shallow {
        DepthBand::VeryShallow
    } else if max >= cfg.deep {
        DepthBand::Deep
    } else {
        DepthBand::Intermediate
    };
    hints.set("depthBand", band.as_str());
    hints
}

fn classify_depcnt(feature: &Feature, cfg: &ContourConfig) -> HintSet {
    let mut hints = HintSet::new();
    let valdco = feature.attr_f64("VALDCO");
    let is_safety = valdco.map(|v| v == cfg.safety).unwrap_or(false);
    let quapos = feature.attr_f64("QUAPOS");
    let is_low_acc = quapos.map(|q| q >= 2.0).unwrap_or(false);
    hints.set("isSafety", is_safety);
    hints.set("isLowAcc", is_low_acc);
    hints.set("role", if is_safety { "safety" } else { "normal" });
    hints
}

fn classify_soundg(feature: &Feature, cfg: &ContourConfig) -> HintSet {
    let mut hints = HintSet::new();
    if let Some(valsou) = feature.attr_f64("VALSOU") {
        hints.set("isShallow", valsou < cfg.safety);
    }
    hints
}

fn is_dangerous(feature: &Feature, cfg: &ContourConfig) -> bool {
    let shallow = feature.attr_f64("VALSOU").map(|v| v < cfg.safety).unwrap_or(false);
    let drying = feature
        .attr_i64("WATLEV")
        .map(|w| w == 1 || w == 2)
        .unwrap_or(false);
    shallow || drying
}

fn classify_hazard(feature: &Feature, cfg: &ContourConfig, atlas: &SymbolAtlas) -> HintSet {
    let mut hints = HintSet::new();
    if !is_dangerous(feature, cfg) {
        return hints;
    }

    let shallow = feature.attr_f64("VALSOU").map(|v| v < cfg.safety).unwrap_or(false);
    let drying = feature
        .attr_i64("WATLEV")
        .map(|w| w == 1 || w == 2)
        .unwrap_or(false);

    let icon = if feature.objl == "WRECKS" && shallow {
        "DANGER51"
    } else if feature.objl == "ROCKS" && !drying {
        "ROCKS01"
    } else {
        "ISODGR51"
    };
    hints.set("hazardIcon", icon);

    if let Some(entry) = atlas.get(icon) {
        hints.set("hazardOffX", (entry.width / 2.0 - entry.anchor_x).round());
        hints.set("hazardOffY", (entry.height / 2.0 - entry.anchor_y).round());
    }

    if let Some(watlev) = feature.attr_i64("WATLEV") {
        hints.set("hazardWatlev", watlev);
    }
    if let Some(buf) = cfg.hazard_buffer {
        hints.set("hazardBuffer", buf);
    }
    hints
}

fn classify_navaid(feature: &Feature) -> HintSet {
    let mut hints = HintSet::new();
    let cat = feature.first_attr_starting_with("CAT").map(|s| s.to_string());
    let icon = match cat {
        Some(cat) => format!("{}_{}", feature.objl, cat),
        None => feature.objl.clone(),
    };
    hints.set("navaidIcon", icon);
    if let Some(orient) = feature.attr_f64("ORIENT") {
        hints.set("orient", orient);
    }
    let name = feature
        .attr_str("OBJNAM")
        .or_else(|| feature.attr_str("NOBJNM"));
    if let Some(name) = name {
        hints.set("name", name);
    }
    hints
}

fn classify_line_pattern(feature: &Feature) -> HintSet {
    let mut hints = HintSet::new();
    if let Some(pattern) = feature.attr_str("linePattern") {
        if matches!(pattern, "dash" | "dot" | "dashdot") {
            hints.set("linePattern", pattern);
        }
    }
    hints
}

/// A classified `DEPCNT` seen by Phase B: just enough to decide promotion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassifiedContour {
    pub valdco: f64,
    pub is_safety: bool,
}

/// Phase B: if no contour already carries `isSafety`, pick the one whose
/// `|VALDCO - safety|` is smallest, preferring the deeper side on ties.
/// Returns the (at most one) index the caller should mark as the safety
/// contour. An empty `contours` slice, or one that already has a safety
/// contour, yields an empty result.
pub fn finalize_safety_contour(contours: &[ClassifiedContour], cfg: &ContourConfig) -> Vec<usize> {
    if contours.is_empty() || contours.iter().any(|c| c.is_safety) {
        return Vec::new();
    }

    let mut best: Option<(usize, f64, bool)> = None;
    for (i, c) in contours.iter().enumerate() {
        let dist = (c.valdco - cfg.safety).abs();
        let deeper = c.valdco > cfg.safety;
        let replace = match best {
            None => true,
            Some((_, best_dist, best_deeper)) => {
                dist < best_dist || (dist == best_dist && deeper && !best_deeper)
            }
        };
        if replace {
            best = Some((i, dist, deeper));
        }
    }
    best.map(|(i, _, _)| vec![i]).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chart_model::Geometry;
    use proptest::prelude::*;

    fn cfg(safety: f64) -> ContourConfig {
        ContourConfig { safety, shallow: 2.0, deep: 20.0, hazard_buffer: None }
    }

    fn contour(valdco: f64) -> ClassifiedContour {
        ClassifiedContour { valdco, is_safety: false }
    }

    #[test]
    fn finalize_promotes_deeper_on_tie() {
        let contours = [contour(5.0), contour(15.0), contour(20.0)];
        let idx = finalize_safety_contour(&contours, &cfg(10.0));
        assert_eq!(idx, vec![1]);
    }

    #[test]
    fn finalize_promotes_closest_when_none_deeper() {
        let contours = [contour(5.0), contour(15.0), contour(20.0)];
        let idx = finalize_safety_contour(&contours, &cfg(22.0));
        assert_eq!(idx, vec![2]);
    }

    #[test]
    fn finalize_noop_when_already_safety() {
        let contours = [contour(5.0), ClassifiedContour { valdco: 15.0, is_safety: true }];
        assert!(finalize_safety_contour(&contours, &cfg(10.0)).is_empty());
    }

    #[test]
    fn finalize_empty_population_is_empty() {
        assert!(finalize_safety_contour(&[], &cfg(10.0)).is_empty());
    }

    #[test]
    fn depare_shallow_flip_on_safety_change() {
        let feature = Feature::new("DEPARE", Geometry::Point(0.0, 0.0))
            .with_attr("DRVAL1", Value::num(5.0))
            .with_attr("DRVAL2", Value::num(8.0));
        let palette = Palette::default();
        let atlas = SymbolAtlas::default();
        let below = classify_feature(&feature, &cfg(3.0), &palette, &atlas);
        let above = classify_feature(&feature, &cfg(6.0), &palette, &atlas);
        assert_eq!(below.get("isShallow"), Some(&Value::Bool(false)));
        assert_eq!(above.get("isShallow"), Some(&Value::Bool(true)));
    }

    #[test]
    fn classify_is_idempotent() {
        let feature = Feature::new("SOUNDG", Geometry::Point(0.0, 0.0))
            .with_attr("VALSOU", Value::num(3.0));
        let palette = Palette::default();
        let atlas = SymbolAtlas::default();
        let c = cfg(10.0);
        let a = classify_feature(&feature, &c, &palette, &atlas);
        let b = classify_feature(&feature, &c, &palette, &atlas);
        assert_eq!(a, b);
    }

    #[test]
    fn hazard_non_dangerous_yields_no_hints() {
        let feature = Feature::new("OBSTRN", Geometry::Point(0.0, 0.0))
            .with_attr("VALSOU", Value::num(50.0));
        let palette = Palette::default();
        let atlas = SymbolAtlas::default();
        let hints = classify_feature(&feature, &cfg(10.0), &palette, &atlas);
        assert!(hints.get("hazardIcon").is_none());
    }

    #[test]
    fn wrecks_shallow_gets_danger_icon() {
        let feature = Feature::new("WRECKS", Geometry::Point(0.0, 0.0))
            .with_attr("VALSOU", Value::num(2.0));
        let palette = Palette::default();
        let atlas = SymbolAtlas::default();
        let hints = classify_feature(&feature, &cfg(10.0), &palette, &atlas);
        assert_eq!(hints.get("hazardIcon"), Some(&Value::Str("DANGER51".into())));
    }

    proptest! {
        #[test]
        fn finalize_always_at_most_one_safety(
            vals in proptest::collection::vec(-50.0f64..50.0, 1..12),
            safety in -50.0f64..50.0,
        ) {
            let contours: Vec<ClassifiedContour> = vals.iter().map(|v| contour(*v)).collect();
            let idx = finalize_safety_contour(&contours, &cfg(safety));
            prop_assert!(idx.len() <= 1);
        }
    }
}
