//! Feature source adapters: a uniform iterator of [`Feature`]s for a
//! `(dataset, bbox, zoom)` request.
//!
//! Every adapter yields a finite, single-pass, non-restartable sequence —
//! callers must collect what they need in one traversal.

mod mbtiles;
mod sql;
mod stub;

use chart_geom::TileBounds;
use chart_model::{Feature, Locator};
use thiserror::Error;

pub use mbtiles::MbtilesSource;
pub use sql::SqlSource;
pub use stub::StubSource;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("dataset not found: {0}")]
    NotFound(String),
    #[error("underlying store is corrupt: {0}")]
    Corrupt(String),
}

/// Uniform feature supply for a tile render. Implementations may hold open
/// file handles or DB connections; the returned iterator borrows nothing
/// from `self` beyond its lifetime so callers can box it freely.
pub trait FeatureSource {
    fn features(
        &self,
        locator: &Locator,
        bounds: TileBounds,
        z: u8,
    ) -> Result<Box<dyn Iterator<Item = Feature>>, SourceError>;
}

/// TMS row index for an XYZ row at zoom `z` (and the inverse — the mapping
/// is its own inverse).
pub fn tms_xyz_row(z: u8, y: u32) -> u32 {
    let side = 1u32 << z;
    side - 1 - y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tms_xyz_row_round_trips() {
        for z in 0..8u8 {
            for y in 0..(1u32 << z) {
                assert_eq!(tms_xyz_row(z, tms_xyz_row(z, y)), y);
            }
        }
    }
}
