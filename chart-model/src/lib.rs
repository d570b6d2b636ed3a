//! Shared data model: features, geometry, dataset records, and the tile key
//! that fingerprints a render request.
//!
//! Kept dependency-light (`thiserror` + `serde` only) since every other
//! crate in the workspace depends on it.

pub mod geometry;
pub mod value;

use std::collections::HashMap;
use std::path::PathBuf;

pub use geometry::Geometry;
pub use value::Value;

/// A single chart object: geometry, object class, and typed attributes.
///
/// Invariants upheld by constructors: geometry coordinates are WGS84
/// lon/lat, `objl` is non-empty, numeric attributes are finite (enforced by
/// [`Value::Num`]'s constructor).
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub objl: String,
    pub geometry: Geometry,
    pub attrs: HashMap<String, Value>,
}

impl Feature {
    pub fn new(objl: impl Into<String>, geometry: Geometry) -> Self {
        Self {
            objl: objl.into(),
            geometry,
            attrs: HashMap::new(),
        }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: Value) -> Self {
        self.attrs.insert(name.into(), value);
        self
    }

    /// Numeric accessor: returns `None` for missing, non-numeric, or
    /// non-finite values. Never panics.
    pub fn attr_f64(&self, name: &str) -> Option<f64> {
        match self.attrs.get(name)? {
            Value::Num(n) if n.is_finite() => Some(*n),
            Value::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn attr_i64(&self, name: &str) -> Option<i64> {
        match self.attrs.get(name)? {
            Value::Int(i) => Some(*i),
            Value::Num(n) if n.is_finite() && n.fract() == 0.0 => Some(*n as i64),
            _ => None,
        }
    }

    pub fn attr_str(&self, name: &str) -> Option<&str> {
        match self.attrs.get(name)? {
            Value::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn attr_bool(&self, name: &str) -> Option<bool> {
        match self.attrs.get(name)? {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// First attribute name whose key starts with `prefix`, sorted for
    /// determinism (attrs is a HashMap, so iteration order is not stable).
    pub fn first_attr_starting_with(&self, prefix: &str) -> Option<&str> {
        let mut matches: Vec<&str> = self
            .attrs
            .keys()
            .filter(|k| k.starts_with(prefix))
            .map(|k| k.as_str())
            .collect();
        matches.sort_unstable();
        matches.into_iter().next()
    }
}

/// Kind of dataset backing a registry entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetKind {
    Enc,
    Cm93,
    Geotiff,
    Osm,
}

/// Where a dataset's bytes live: a local path or a remote URL (OSM tiles).
#[derive(Debug, Clone, PartialEq)]
pub enum Locator {
    Path(PathBuf),
    Url(String),
}

/// Geographic bounding box, WGS84 degrees: `[west, south, east, north]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

/// A registered, ingestable dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetRecord {
    pub id: String,
    pub kind: DatasetKind,
    pub name: String,
    pub bbox: BoundingBox,
    pub minzoom: u8,
    pub maxzoom: u8,
    pub updated_at: i64,
    pub locator: Locator,
    pub scale_min: Option<f64>,
    pub scale_max: Option<f64>,
    pub senc_path: Option<PathBuf>,
    pub tags: Vec<String>,
}

impl DatasetRecord {
    /// `minzoom <= maxzoom`, `west <= east`, `south <= north`.
    pub fn is_valid(&self) -> bool {
        self.minzoom <= self.maxzoom
            && self.bbox.west <= self.bbox.east
            && self.bbox.south <= self.bbox.north
    }
}

/// Mariner-configurable contour parameters driving Phase A/B classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContourConfig {
    pub safety: f64,
    pub shallow: f64,
    pub deep: f64,
    pub hazard_buffer: Option<f64>,
}

impl Default for ContourConfig {
    fn default() -> Self {
        Self {
            safety: 10.0,
            shallow: 2.0,
            deep: 20.0,
            hazard_buffer: None,
        }
    }
}

/// Deterministic fingerprint of a render request. Equal fingerprints imply
/// equal responses (§8 invariant).
#[derive(Debug, Clone, PartialEq, Hash, Eq)]
pub struct TileKey {
    pub format: String,
    pub dataset_id: String,
    pub z: u8,
    pub x: u32,
    pub y: u32,
    pub safety_milli: i64,
    pub shallow_milli: i64,
    pub deep_milli: i64,
}

impl TileKey {
    pub fn new(
        format: &str,
        dataset_id: &str,
        z: u8,
        x: u32,
        y: u32,
        contour: ContourConfig,
    ) -> Self {
        Self {
            format: format.to_string(),
            dataset_id: dataset_id.to_string(),
            z,
            x,
            y,
            safety_milli: to_millis(contour.safety),
            shallow_milli: to_millis(contour.shallow),
            deep_milli: to_millis(contour.deep),
        }
    }

    /// Canonical string form, suitable as a Tier-1/Tier-2 cache key.
    pub fn to_cache_string(&self) -> String {
        format!(
            "{}:{}:{}:{}:{}:{}:{}:{}",
            self.format,
            self.dataset_id,
            self.z,
            self.x,
            self.y,
            self.safety_milli,
            self.shallow_milli,
            self.deep_milli
        )
    }
}

/// Quantize floating metres to an exact, hashable integer key component.
fn to_millis(v: f64) -> i64 {
    (v * 1000.0).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_key_equal_fingerprints_equal_strings() {
        let cfg = ContourConfig::default();
        let a = TileKey::new("mvt", "ds1", 5, 3, 3, cfg);
        let b = TileKey::new("mvt", "ds1", 5, 3, 3, cfg);
        assert_eq!(a, b);
        assert_eq!(a.to_cache_string(), b.to_cache_string());
    }

    #[test]
    fn tile_key_differs_on_contour() {
        let a = TileKey::new("mvt", "ds1", 5, 3, 3, ContourConfig::default());
        let mut cfg2 = ContourConfig::default();
        cfg2.safety = 15.0;
        let b = TileKey::new("mvt", "ds1", 5, 3, 3, cfg2);
        assert_ne!(a, b);
    }

    #[test]
    fn dataset_record_validity() {
        let mut rec = DatasetRecord {
            id: "x".into(),
            kind: DatasetKind::Enc,
            name: "x".into(),
            bbox: BoundingBox { west: 0.0, south: 0.0, east: 1.0, north: 1.0 },
            minzoom: 0,
            maxzoom: 10,
            updated_at: 0,
            locator: Locator::Path(PathBuf::from("/tmp/x")),
            scale_min: None,
            scale_max: None,
            senc_path: None,
            tags: vec![],
        };
        assert!(rec.is_valid());
        rec.minzoom = 11;
        assert!(!rec.is_valid());
    }

    #[test]
    fn attr_accessors_never_panic_on_wrong_type() {
        let f = Feature::new("DEPARE", Geometry::Point(0.0, 0.0))
            .with_attr("DRVAL1", Value::Str("nope".into()));
        assert_eq!(f.attr_f64("DRVAL1"), None);
        assert_eq!(f.attr_f64("MISSING"), None);
    }

    #[test]
    fn first_attr_starting_with_is_deterministic() {
        let f = Feature::new("BOYLAT", Geometry::Point(0.0, 0.0))
            .with_attr("CATLAM", Value::Str("1".into()))
            .with_attr("CATAAA", Value::Str("2".into()));
        assert_eq!(f.first_attr_starting_with("CAT"), Some("CATAAA"));
    }
}
