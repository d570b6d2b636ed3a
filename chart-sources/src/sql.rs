//! SQL-backed reader for ENC/CM93 SQLite feature tables: spatial filter by
//! bbox, zoom-based LOD via SCAMIN.
//!
//! Expected schema (written by `chart-ingest`):
//! `features(objl TEXT, lon REAL, lat REAL, geom_type TEXT, coords_json TEXT,
//! attrs_json TEXT, scamin REAL)`.

use chart_geom::TileBounds;
use chart_model::{Feature, Geometry, Locator, Value};
use rusqlite::Connection;

use crate::{FeatureSource, SourceError};

pub struct SqlSource;

impl SqlSource {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SqlSource {
    fn default() -> Self {
        Self::new()
    }
}

impl FeatureSource for SqlSource {
    fn features(
        &self,
        locator: &Locator,
        bounds: TileBounds,
        z: u8,
    ) -> Result<Box<dyn Iterator<Item = Feature>>, SourceError> {
        let Locator::Path(path) = locator else {
            return Err(SourceError::NotFound("SQL source requires a path locator".into()));
        };
        let conn = Connection::open(path).map_err(|e| SourceError::Corrupt(e.to_string()))?;

        let mut stmt = conn
            .prepare(
                "SELECT objl, geom_type, coords_json, attrs_json, scamin FROM features \
                 WHERE lon BETWEEN ?1 AND ?2 AND lat BETWEEN ?3 AND ?4",
            )
            .map_err(|e| SourceError::Corrupt(e.to_string()))?;

        let rows = stmt
            .query_map(
                rusqlite::params![bounds.west, bounds.east, bounds.south, bounds.north],
                |row| {
                    let objl: String = row.get(0)?;
                    let geom_type: String = row.get(1)?;
                    let coords_json: String = row.get(2)?;
                    let attrs_json: String = row.get(3)?;
                    let scamin: Option<f64> = row.get(4)?;
                    Ok((objl, geom_type, coords_json, attrs_json, scamin))
                },
            )
            .map_err(|e| SourceError::Corrupt(e.to_string()))?;

        let mut features = Vec::new();
        for row in rows {
            let (objl, geom_type, coords_json, attrs_json, scamin) =
                row.map_err(|e| SourceError::Corrupt(e.to_string()))?;

            if !chart_catalogue::apply_scamin(&objl, z) {
                continue;
            }
            let zoom_ok = scamin
                .map(|s| z >= chart_catalogue::scamin_to_zoom(Some(s)))
                .unwrap_or(true);
            if !zoom_ok {
                continue;
            }

            let geometry = parse_geometry(&geom_type, &coords_json)
                .map_err(|e| SourceError::Corrupt(format!("bad geometry for {objl}: {e}")))?;
            let mut feature = Feature::new(objl, geometry);
            if let Ok(serde_json::Value::Object(map)) = serde_json::from_str(&attrs_json) {
                for (k, v) in map {
                    feature.attrs.insert(k, json_to_value(v));
                }
            }
            features.push(feature);
        }
        Ok(Box::new(features.into_iter()))
    }
}

fn parse_geometry(kind: &str, coords_json: &str) -> Result<Geometry, serde_json::Error> {
    match kind {
        "point" => {
            let (lon, lat): (f64, f64) = serde_json::from_str(coords_json)?;
            Ok(Geometry::Point(lon, lat))
        }
        "linestring" => {
            let pts: Vec<(f64, f64)> = serde_json::from_str(coords_json)?;
            Ok(Geometry::LineString(pts))
        }
        "polygon" => {
            let rings: Vec<Vec<(f64, f64)>> = serde_json::from_str(coords_json)?;
            Ok(Geometry::Polygon(rings))
        }
        _ => {
            let (lon, lat): (f64, f64) = serde_json::from_str(coords_json)?;
            Ok(Geometry::Point(lon, lat))
        }
    }
}

fn json_to_value(v: serde_json::Value) -> Value {
    match v {
        serde_json::Value::String(s) => Value::Str(s),
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Int(i)
            } else {
                Value::num(n.as_f64().unwrap_or(f64::NAN))
            }
        }
        _ => Value::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_db_is_corrupt() {
        let source = SqlSource::new();
        let bounds = TileBounds { west: 0.0, south: 0.0, east: 1.0, north: 1.0 };
        let result = source.features(&Locator::Path("/nonexistent/charts.db".into()), bounds, 5);
        assert!(matches!(result, Err(SourceError::Corrupt(_))));
    }

    #[test]
    fn parse_point_geometry() {
        let g = parse_geometry("point", "[1.0, 2.0]").unwrap();
        assert_eq!(g, Geometry::Point(1.0, 2.0));
    }
}
