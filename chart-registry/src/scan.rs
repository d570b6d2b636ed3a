//! `scan`: sidecar-first directory walk, bare-MBTiles fallback, and the
//! separate directory-mtime-cached ENC dataset view (`list_datasets`).

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use chart_model::{BoundingBox, DatasetKind, DatasetRecord, Locator};
use rusqlite::Connection;

use crate::meta::MetaSidecar;
use crate::{Registry, RegistryError};

#[derive(Debug, Default, Clone, Copy)]
pub struct ScanReport {
    pub registered: usize,
    pub skipped: usize,
}

pub(crate) fn scan_paths(registry: &Registry, paths: &[PathBuf], synth_osm: bool) -> Result<ScanReport, RegistryError> {
    let mut report = ScanReport::default();
    let mut sidecar_companions: Vec<PathBuf> = Vec::new();

    for dir in paths {
        let entries = match std::fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!(target: "chart_registry", "scan: cannot read {}: {e}", dir.display());
                continue;
            }
        };
        for entry in entries.flatten() {
            let path = entry.path();
            let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else { continue };
            if !file_name.ends_with(".meta.json") {
                continue;
            }
            let stem = file_name.trim_end_matches(".meta.json");
            let meta = match MetaSidecar::read(&path) {
                Ok(meta) => meta,
                Err(e) => {
                    log::warn!(target: "chart_registry", "scan: bad sidecar {}: {e}", path.display());
                    report.skipped += 1;
                    continue;
                }
            };

            let companion = find_companion(dir, stem, &meta.kind);
            if let Some(companion) = companion {
                sidecar_companions.push(companion.clone());
                let result = match meta.kind.as_str() {
                    "cm93" => registry.register_cm93(&path, &companion),
                    "geotiff" => registry.register_cog(&path, &companion),
                    "senc" => registry.register_senc(&path, &companion),
                    _ => registry.register_mbtiles(&path, &companion),
                };
                match result {
                    Ok(_) => report.registered += 1,
                    Err(e) => {
                        log::warn!(target: "chart_registry", "scan: failed registering {stem}: {e}");
                        report.skipped += 1;
                    }
                }
            } else {
                report.skipped += 1;
            }
        }
    }

    for dir in paths {
        let entries = match std::fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(_) => continue,
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("mbtiles") {
                continue;
            }
            if sidecar_companions.contains(&path) {
                continue;
            }
            match read_mbtiles_metadata(&path) {
                Ok(record) => {
                    match registry_upsert_via_record(registry, &record) {
                        Ok(()) => report.registered += 1,
                        Err(e) => {
                            log::warn!(target: "chart_registry", "scan: failed registering bare mbtiles {}: {e}", path.display());
                            report.skipped += 1;
                        }
                    }
                }
                Err(e) => {
                    log::warn!(target: "chart_registry", "scan: unreadable mbtiles {}: {e}", path.display());
                    report.skipped += 1;
                }
            }
        }
    }

    if synth_osm {
        let record = DatasetRecord {
            id: "osm".to_string(),
            kind: DatasetKind::Osm,
            name: "OpenStreetMap community tiles".to_string(),
            bbox: BoundingBox { west: -180.0, south: -85.0, east: 180.0, north: 85.0 },
            minzoom: 0,
            maxzoom: 19,
            updated_at: now_unix(),
            locator: Locator::Url("https://tile.openstreetmap.org".to_string()),
            scale_min: None,
            scale_max: None,
            senc_path: None,
            tags: vec!["community".to_string()],
        };
        registry_upsert_via_record(registry, &record)?;
        report.registered += 1;
    }

    Ok(report)
}

fn find_companion(dir: &Path, stem: &str, kind: &str) -> Option<PathBuf> {
    let candidates: &[&str] = match kind {
        "cm93" => &["db", "cm93"],
        "geotiff" => &["tif", "tiff"],
        "senc" => &["senc"],
        _ => &["mbtiles"],
    };
    candidates
        .iter()
        .map(|ext| dir.join(format!("{stem}.{ext}")))
        .find(|p| p.exists())
}

fn registry_upsert_via_record(registry: &Registry, record: &DatasetRecord) -> Result<(), RegistryError> {
    registry.upsert(record)
}

/// Bare `*.mbtiles` with no sidecar: read its own standard
/// `metadata(name, value)` table.
fn read_mbtiles_metadata(path: &Path) -> Result<DatasetRecord, RegistryError> {
    let conn = Connection::open(path)?;
    let get = |key: &str| -> Option<String> {
        conn.query_row("SELECT value FROM metadata WHERE name = ?1", [key], |r| r.get(0)).ok()
    };

    let name = get("name").unwrap_or_else(|| path.file_stem().unwrap().to_string_lossy().to_string());
    let bounds_str = get("bounds").unwrap_or_else(|| "-180,-85,180,85".to_string());
    let bounds: Vec<f64> = bounds_str.split(',').filter_map(|s| s.trim().parse().ok()).collect();
    let bbox = if bounds.len() == 4 {
        BoundingBox { west: bounds[0], south: bounds[1], east: bounds[2], north: bounds[3] }
    } else {
        BoundingBox { west: -180.0, south: -85.0, east: 180.0, north: 85.0 }
    };
    let minzoom: u8 = get("minzoom").and_then(|s| s.parse().ok()).unwrap_or(0);
    let maxzoom: u8 = get("maxzoom").and_then(|s| s.parse().ok()).unwrap_or(14);

    Ok(DatasetRecord {
        id: path.file_stem().unwrap().to_string_lossy().to_string(),
        kind: DatasetKind::Enc,
        name,
        bbox,
        minzoom,
        maxzoom,
        updated_at: now_unix(),
        locator: Locator::Path(path.to_path_buf()),
        scale_min: None,
        scale_max: None,
        senc_path: None,
        tags: Vec::new(),
    })
}

/// Directory-local ENC dataset enumeration: every `*.meta.json` sidecar in
/// `dir`, independent of the main registry's SQLite-backed listing.
pub(crate) fn scan_enc_dir(dir: &Path) -> Result<Vec<DatasetRecord>, RegistryError> {
    let mut records = Vec::new();
    for entry in std::fs::read_dir(dir)?.flatten() {
        let path = entry.path();
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else { continue };
        if !file_name.ends_with(".meta.json") {
            continue;
        }
        let stem = file_name.trim_end_matches(".meta.json");
        match MetaSidecar::read(&path) {
            Ok(meta) => {
                records.push(DatasetRecord {
                    id: stem.to_string(),
                    kind: DatasetKind::Enc,
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
                    locator: Locator::Path(dir.join(stem)),
                    scale_min: None,
                    scale_max: None,
                    senc_path: None,
                    tags: Vec::new(),
                });
            }
            Err(e) => log::warn!(target: "chart_registry", "list_datasets: bad sidecar {}: {e}", path.display()),
        }
    }
    Ok(records)
}

fn now_unix() -> i64 {
    SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.as_secs() as i64).unwrap_or(0)
}
