//! MBTiles reader: pre-encoded vector tiles keyed by `(z, x, y)`, stored in
//! TMS row order (south-up) and re-decoded into [`Feature`]s.

use chart_geom::TileBounds;
use chart_model::{Feature, Locator};
use rusqlite::Connection;

use crate::{tms_xyz_row, FeatureSource, SourceError};

pub struct MbtilesSource;

impl MbtilesSource {
    pub fn new() -> Self {
        Self
    }

    fn read_tile(path: &std::path::Path, z: u8, x: u32, y_xyz: u32) -> Result<Option<Vec<u8>>, SourceError> {
        let conn = Connection::open(path).map_err(|e| SourceError::Corrupt(e.to_string()))?;
        let y_tms = tms_xyz_row(z, y_xyz);
        conn.query_row(
            "SELECT tile_data FROM tiles WHERE zoom_level = ?1 AND tile_column = ?2 AND tile_row = ?3",
            rusqlite::params![z, x, y_tms],
            |row| row.get::<_, Vec<u8>>(0),
        )
        .map(Some)
        .or_else(|e| match e {
            rusqlite::Error::QueryReturnedNoRows => Ok(None),
            other => Err(SourceError::Corrupt(other.to_string())),
        })
    }
}

impl Default for MbtilesSource {
    fn default() -> Self {
        Self::new()
    }
}

impl FeatureSource for MbtilesSource {
    fn features(
        &self,
        locator: &Locator,
        bounds: TileBounds,
        z: u8,
    ) -> Result<Box<dyn Iterator<Item = Feature>>, SourceError> {
        let Locator::Path(path) = locator else {
            return Err(SourceError::NotFound("MBTiles source requires a path locator".into()));
        };
        // The caller identifies (x, y) through `bounds`; recover them via
        // the inverse tile-bounds transform so a single trait method can
        // stay bbox-shaped like every other adapter.
        let (x, y) = chart_geom::bbox_to_xyz(z, bounds.west, bounds.south, bounds.east, bounds.north);

        let Some(tile_data) = Self::read_tile(path, z, x, y)? else {
            return Ok(Box::new(std::iter::empty()));
        };

        let layers = chart_mvt::decode(&tile_data, &bounds, chart_mvt::DEFAULT_EXTENT)
            .map_err(|e| SourceError::Corrupt(e.to_string()))?;
        let features: Vec<Feature> = layers.into_iter().flat_map(|(_, f)| f).collect();
        Ok(Box::new(features.into_iter()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_db_is_corrupt_not_panic() {
        let source = MbtilesSource::new();
        let bounds = TileBounds { west: 0.0, south: 0.0, east: 1.0, north: 1.0 };
        let result = source.features(&Locator::Path("/nonexistent/path.mbtiles".into()), bounds, 0);
        assert!(matches!(result, Err(SourceError::Corrupt(_))));
    }

    #[test]
    fn url_locator_is_not_found() {
        let source = MbtilesSource::new();
        let bounds = TileBounds { west: 0.0, south: 0.0, east: 1.0, north: 1.0 };
        let result = source.features(&Locator::Url("https://example.com".into()), bounds, 0);
        assert!(matches!(result, Err(SourceError::NotFound(_))));
    }
}
