//! Tile render orchestration: dataset resolution → feature query →
//! S-52 pre-classification → SCAMIN filtering → MVT/raster encoding →
//! response cache, per the tile serving pipeline's nine steps.

mod raster;

use chart_catalogue::{apply_scamin, dict};
use chart_cache::{CachedResponse, ResponseCache};
use chart_geom::tile_bounds;
use chart_model::{ContourConfig, DatasetKind, DatasetRecord, Feature, Locator, TileKey, Value};
use chart_mvt::{encode, LayerSet};
use chart_registry::Registry;
use chart_s52::{build_light_character, build_light_sectors, classify_feature, finalize_safety_contour, ClassifiedContour, LightAttrs, Palette, SymbolAtlas};
use chart_sources::{FeatureSource, SourceError};
use thiserror::Error;

pub use raster::{render_raster_placeholder, RasterError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileFormat {
    Mvt,
    Png,
    Geotiff,
}

impl TileFormat {
    pub fn media_type(self) -> &'static str {
        match self {
            TileFormat::Mvt => "application/vnd.mapbox-vector-tile",
            TileFormat::Png => "image/png",
            TileFormat::Geotiff => "image/tiff",
        }
    }

    /// Short tag used as the renderer-variant component of a [`TileKey`].
    pub fn tag(self) -> &'static str {
        match self {
            TileFormat::Mvt => "mvt",
            TileFormat::Png => "png",
            TileFormat::Geotiff => "geotiff",
        }
    }
}

#[derive(Debug, Clone)]
pub struct TileRequest {
    pub dataset_id: String,
    pub z: u8,
    pub x: u32,
    pub y: u32,
    pub format: TileFormat,
    pub contour: ContourConfig,
}

#[derive(Debug, Error)]
pub enum TileError {
    #[error("dataset not found: {0}")]
    NotFound(String),
    #[error("invalid tile coordinates z={z} x={x} y={y}")]
    InvalidTile { z: u8, x: u32, y: u32 },
    #[error("format unsupported for this dataset kind")]
    UnsupportedFormat,
    #[error("feature source error: {0}")]
    Source(#[from] SourceError),
    #[error("raster renderer unavailable: {0}")]
    Unavailable(#[from] RasterError),
}

#[derive(Debug, Clone)]
pub struct RenderedTile {
    pub bytes: Vec<u8>,
    pub media_type: String,
    pub etag: String,
    pub from_cache: bool,
}

/// Renders (or serves from cache) one `(dataset, z, x, y, format, contour)`
/// tile.
pub fn render_tile(
    datasets: &Registry,
    source: &dyn FeatureSource,
    cache: &ResponseCache,
    req: TileRequest,
) -> Result<RenderedTile, TileError> {
    let record = datasets.get(&req.dataset_id).ok_or_else(|| TileError::NotFound(req.dataset_id.clone()))?;

    if !chart_geom::is_valid_tile(req.z, req.x, req.y) {
        return Err(TileError::InvalidTile { z: req.z, x: req.x, y: req.y });
    }
    validate_format(&record, req.format)?;

    let key = TileKey::new(req.format.tag(), &req.dataset_id, req.z, req.x, req.y, req.contour);
    if let Some(cached) = cache.get(&key) {
        return Ok(RenderedTile { bytes: cached.bytes, media_type: cached.media_type, etag: cached.etag, from_cache: true });
    }

    let bytes = match req.format {
        TileFormat::Mvt => render_vector(&record, source, req.z, req.x, req.y, req.contour)?,
        TileFormat::Png => render_raster_placeholder(req.z, req.x, req.y)?,
        TileFormat::Geotiff => render_raster_placeholder(req.z, req.x, req.y)?,
    };

    let response = CachedResponse::new(bytes, req.format.media_type());
    cache.put(&key, response.clone());
    Ok(RenderedTile { bytes: response.bytes, media_type: response.media_type, etag: response.etag, from_cache: false })
}

fn validate_format(record: &DatasetRecord, format: TileFormat) -> Result<(), TileError> {
    match (record.kind, format) {
        (DatasetKind::Geotiff, TileFormat::Geotiff) => Ok(()),
        (DatasetKind::Geotiff, _) => Err(TileError::UnsupportedFormat),
        (_, TileFormat::Geotiff) => Err(TileError::UnsupportedFormat),
        (_, TileFormat::Png) | (_, TileFormat::Mvt) => Ok(()),
    }
}

fn render_vector(
    record: &DatasetRecord,
    source: &dyn FeatureSource,
    z: u8,
    x: u32,
    y: u32,
    contour: ContourConfig,
) -> Result<Vec<u8>, TileError> {
    let bounds = tile_bounds(z, x, y);
    let palette = Palette::default();
    let atlas = SymbolAtlas::default();

    let raw: Vec<Feature> = source.features(&record.locator, bounds, z)?.collect();

    let mut kept: Vec<Feature> = Vec::with_capacity(raw.len());
    let mut depcnt_indices: Vec<usize> = Vec::new();
    let mut depcnt_contours: Vec<ClassifiedContour> = Vec::new();

    for feature in raw {
        if !apply_scamin(&feature.objl, z) {
            continue;
        }
        let hints = classify_feature(&feature, &contour, &palette, &atlas);
        let mut feature = feature;
        hints.apply_to(&mut feature);

        if let Some(code) = dict::code_for(&feature.objl) {
            feature.attrs.insert("objlCode".to_string(), Value::Int(code as i64));
        }

        if feature.objl == "DEPCNT" {
            let valdco = feature.attr_f64("VALDCO").unwrap_or(contour.safety);
            let is_safety = feature.attr_bool("isSafety").unwrap_or(false);
            depcnt_indices.push(kept.len());
            depcnt_contours.push(ClassifiedContour { valdco, is_safety });
        }

        if feature.objl == "LIGHTS" {
            let (label, sector) = build_light_extras(&feature);
            kept.push(label);
            kept.push(sector);
        }

        kept.push(feature);
    }

    let promote = finalize_safety_contour(&depcnt_contours, &contour);
    for i in promote {
        if let Some(&feature_idx) = depcnt_indices.get(i) {
            if let Some(feature) = kept.get_mut(feature_idx) {
                feature.attrs.insert("isSafety".to_string(), Value::Bool(true));
                feature.attrs.insert("role".to_string(), Value::Str("safety".to_string()));
            }
        }
    }

    let layers: LayerSet = vec![("chart".to_string(), kept)];
    Ok(encode(&layers, &bounds, chart_mvt::DEFAULT_EXTENT))
}

/// Builds the separate CM93 `LIGHTS` sector wedge and label-plane feature:
/// the label carries a stable CRC32 text code rather than the full
/// description string.
fn build_light_extras(feature: &Feature) -> (Feature, Feature) {
    let attrs = LightAttrs {
        litchr: feature.attr_str("LITCHR").map(str::to_string),
        siggrp: feature.attr_str("SIGGRP").map(str::to_string),
        colour: feature.first_attr_starting_with("COLOUR").map(str::to_string),
        sigper: feature.attr_str("SIGPER").map(str::to_string),
        valnmr: feature.attr_f64("VALNMR").map(|v| v.to_string()),
        sectr1: feature.attr_f64("SECTR1").map(|v| v.to_string()),
        sectr2: feature.attr_f64("SECTR2").map(|v| v.to_string()),
    };
    let code = build_light_character(&attrs);

    let point = match feature.geometry.bounds() {
        Some((w, s, _, _)) => (w, s),
        None => (0.0, 0.0),
    };
    let sector_geom = build_light_sectors(
        point,
        feature.attr_f64("VALNMR"),
        feature.attr_f64("SECTR1"),
        feature.attr_f64("SECTR2"),
    );

    let mut label = Feature::new("LIGHTS_LABEL", chart_model::Geometry::Point(point.0, point.1));
    label.attrs.insert("text".to_string(), Value::Str(code.to_string()));

    let sector = Feature::new("LIGHTS_SECTOR", sector_geom);
    (label, sector)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chart_model::BoundingBox;
    use std::path::PathBuf;

    struct EmptySource;
    impl FeatureSource for EmptySource {
        fn features(
            &self,
            _locator: &Locator,
            _bounds: chart_geom::TileBounds,
            _z: u8,
        ) -> Result<Box<dyn Iterator<Item = Feature>>, SourceError> {
            Ok(Box::new(std::iter::empty()))
        }
    }

    fn sample_record() -> DatasetRecord {
        DatasetRecord {
            id: "harbor".to_string(),
            kind: DatasetKind::Enc,
            name: "Harbor".to_string(),
            bbox: BoundingBox { west: -1.0, south: -1.0, east: 1.0, north: 1.0 },
            minzoom: 0,
            maxzoom: 14,
            updated_at: 0,
            locator: Locator::Path(PathBuf::from("harbor.mbtiles")),
            scale_min: None,
            scale_max: None,
            senc_path: None,
            tags: Vec::new(),
        }
    }

    #[test]
    fn unknown_dataset_is_not_found() {
        let registry = Registry::open_in_memory().unwrap();
        let cache = ResponseCache::new(16);
        let source = EmptySource;
        let req = TileRequest {
            dataset_id: "nope".to_string(),
            z: 5,
            x: 1,
            y: 1,
            format: TileFormat::Mvt,
            contour: ContourConfig::default(),
        };
        let err = render_tile(&registry, &source, &cache, req).unwrap_err();
        assert!(matches!(err, TileError::NotFound(_)));
    }

    #[test]
    fn invalid_tile_coords_rejected() {
        let registry = Registry::open_in_memory().unwrap();
        registry.upsert(&sample_record()).unwrap();
        let cache = ResponseCache::new(16);
        let source = EmptySource;
        let req = TileRequest {
            dataset_id: "harbor".to_string(),
            z: 2,
            x: 99,
            y: 99,
            format: TileFormat::Mvt,
            contour: ContourConfig::default(),
        };
        let err = render_tile(&registry, &source, &cache, req).unwrap_err();
        assert!(matches!(err, TileError::InvalidTile { .. }));
    }

    #[test]
    fn geotiff_format_rejected_for_vector_dataset() {
        let registry = Registry::open_in_memory().unwrap();
        registry.upsert(&sample_record()).unwrap();
        let cache = ResponseCache::new(16);
        let source = EmptySource;
        let req = TileRequest {
            dataset_id: "harbor".to_string(),
            z: 5,
            x: 1,
            y: 1,
            format: TileFormat::Geotiff,
            contour: ContourConfig::default(),
        };
        let err = render_tile(&registry, &source, &cache, req).unwrap_err();
        assert!(matches!(err, TileError::UnsupportedFormat));
    }

    #[test]
    fn empty_dataset_renders_valid_empty_tile_and_caches_it() {
        let registry = Registry::open_in_memory().unwrap();
        registry.upsert(&sample_record()).unwrap();
        let cache = ResponseCache::new(16);
        let source = EmptySource;
        let req = TileRequest {
            dataset_id: "harbor".to_string(),
            z: 5,
            x: 1,
            y: 1,
            format: TileFormat::Mvt,
            contour: ContourConfig::default(),
        };
        let first = render_tile(&registry, &source, &cache, req.clone()).unwrap();
        assert!(!first.from_cache);
        let second = render_tile(&registry, &source, &cache, req).unwrap();
        assert!(second.from_cache);
        assert_eq!(first.bytes, second.bytes);
    }
}
