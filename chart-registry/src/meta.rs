//! `*.meta.json` sidecar: `{kind, name, bounds[4], minzoom, maxzoom,
//! updatedAt, cells, scamin, sha256}` (§6 persisted state).

use std::path::{Path, PathBuf};

use chart_model::{BoundingBox, DatasetKind, DatasetRecord, Locator};
use serde::{Deserialize, Serialize};

use crate::RegistryError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetaSidecar {
    pub kind: String,
    pub name: String,
    pub bounds: [f64; 4],
    pub minzoom: u8,
    pub maxzoom: u8,
    #[serde(rename = "updatedAt")]
    pub updated_at: i64,
    pub cells: Option<u32>,
    pub scamin: Option<bool>,
    pub sha256: Option<String>,
}

impl MetaSidecar {
    pub fn read(path: &Path) -> Result<Self, RegistryError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

pub(crate) fn build_record(
    meta_path: &Path,
    data_path: &Path,
    default_kind: DatasetKind,
) -> Result<DatasetRecord, RegistryError> {
    let meta = MetaSidecar::read(meta_path)?;
    let kind = parse_kind(&meta.kind).unwrap_or(default_kind);
    let id = data_path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| meta.name.clone());

    Ok(DatasetRecord {
        id,
        kind,
        name: meta.name,
        bbox: BoundingBox {
            west: meta.bounds[0],
            south: meta.bounds[1],
            east: meta.bounds[2],
            north: meta.bounds[3],
        },
        minzoom: meta.minzoom,
        maxzoom: meta.maxzoom,
        updated_at: meta.updated_at,
        locator: Locator::Path(PathBuf::from(data_path)),
        scale_min: None,
        scale_max: None,
        senc_path: None,
        tags: Vec::new(),
    })
}

fn parse_kind(s: &str) -> Option<DatasetKind> {
    match s {
        "enc" => Some(DatasetKind::Enc),
        "cm93" => Some(DatasetKind::Cm93),
        "geotiff" => Some(DatasetKind::Geotiff),
        "osm" => Some(DatasetKind::Osm),
        _ => None,
    }
}
