//! Deterministic synthetic feature population for CM93 placeholder tiles,
//! grounded on `tileserver.py`'s `_stub_features`: keeps tests hermetic
//! without a real chart dataset on disk.

use chart_geom::TileBounds;
use chart_model::{Feature, Geometry, Locator, Value};

use crate::{FeatureSource, SourceError};

#[derive(Debug, Clone, Copy, Default)]
pub struct StubSource {
    /// Soundings per row/column of the synthetic grid.
    pub grid_size: u32,
}

impl StubSource {
    pub fn new() -> Self {
        Self { grid_size: 3 }
    }
}

impl FeatureSource for StubSource {
    fn features(
        &self,
        _locator: &Locator,
        bounds: TileBounds,
        _z: u8,
    ) -> Result<Box<dyn Iterator<Item = Feature>>, SourceError> {
        let mut features = Vec::new();
        let grid = self.grid_size.max(1);
        let width = bounds.east - bounds.west;
        let height = bounds.north - bounds.south;

        for row in 0..grid {
            for col in 0..grid {
                let lon = bounds.west + width * (col as f64 + 0.5) / grid as f64;
                let lat = bounds.south + height * (row as f64 + 0.5) / grid as f64;
                let depth = 5.0 + (row * grid + col) as f64;
                features.push(
                    Feature::new("SOUNDG", Geometry::Point(lon, lat))
                        .with_attr("VALSOU", Value::num(depth)),
                );
            }
        }

        let center_lon = bounds.west + width / 2.0;
        let center_lat = bounds.south + height / 2.0;
        features.push(
            Feature::new("WRECKS", Geometry::Point(center_lon, center_lat))
                .with_attr("VALSOU", Value::num(3.0))
                .with_attr("WATLEV", Value::Int(1)),
        );
        features.push(
            Feature::new(
                "OBSTRN",
                Geometry::Point(center_lon + width * 0.1, center_lat + height * 0.1),
            )
            .with_attr("VALSOU", Value::num(4.5)),
        );

        Ok(Box::new(features.into_iter()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yields_fixed_population_for_a_bbox() {
        let source = StubSource::new();
        let bounds = TileBounds { west: 0.0, south: 0.0, east: 1.0, north: 1.0 };
        let features: Vec<Feature> = source
            .features(&Locator::Path("unused".into()), bounds, 5)
            .unwrap()
            .collect();
        assert_eq!(features.len(), 3 * 3 + 2);
        assert!(features.iter().any(|f| f.objl == "WRECKS"));
        assert!(features.iter().any(|f| f.objl == "OBSTRN"));
    }

    #[test]
    fn population_is_parameterized_by_bbox() {
        let source = StubSource::new();
        let a = TileBounds { west: 0.0, south: 0.0, east: 1.0, north: 1.0 };
        let b = TileBounds { west: 10.0, south: 10.0, east: 11.0, north: 11.0 };
        let fa: Vec<Feature> = source.features(&Locator::Path("x".into()), a, 5).unwrap().collect();
        let fb: Vec<Feature> = source.features(&Locator::Path("x".into()), b, 5).unwrap().collect();
        assert_ne!(fa[0].geometry, fb[0].geometry);
    }
}
