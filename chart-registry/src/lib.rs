//! Persistent on-disk catalogue of ingestable datasets: a single embedded
//! SQLite database (`charts` table), an in-memory TTL-refreshed listing
//! cache, and a second, directory-mtime-cached view (`list_datasets`) kept
//! deliberately separate from the main cache per the original
//! implementation.

pub mod dictionary;
mod meta;
mod scan;

use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant, SystemTime};

use chart_model::{BoundingBox, DatasetKind, DatasetRecord, Locator};
use rusqlite::Connection;
use thiserror::Error;

pub use meta::MetaSidecar;
pub use scan::ScanReport;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("sqlite error: {0}")]
    Sql(#[from] rusqlite::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("sidecar JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("dataset not found: {0}")]
    NotFound(String),
}

const LIST_CACHE_TTL: Duration = Duration::from_secs(300);

struct ListCache {
    refreshed_at: Instant,
    records: Vec<DatasetRecord>,
}

struct EncDirCache {
    dir: PathBuf,
    mtime: SystemTime,
    records: Vec<DatasetRecord>,
}

pub struct Registry {
    conn: Mutex<Connection>,
    list_cache: Mutex<Option<ListCache>>,
    enc_dir_cache: Mutex<Option<EncDirCache>>,
}

impl Registry {
    pub fn open(db_path: &Path) -> Result<Self, RegistryError> {
        let conn = Connection::open(db_path)?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS charts (
                id TEXT PRIMARY KEY,
                kind TEXT NOT NULL,
                name TEXT NOT NULL,
                bbox TEXT NOT NULL,
                minzoom INTEGER NOT NULL,
                maxzoom INTEGER NOT NULL,
                updated_at INTEGER NOT NULL,
                path TEXT,
                url TEXT,
                tags TEXT NOT NULL DEFAULT '[]',
                scale_min REAL,
                scale_max REAL,
                senc_path TEXT
            )",
            [],
        )?;
        Ok(Self {
            conn: Mutex::new(conn),
            list_cache: Mutex::new(None),
            enc_dir_cache: Mutex::new(None),
        })
    }

    pub fn open_in_memory() -> Result<Self, RegistryError> {
        let conn = Connection::open_in_memory()?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS charts (
                id TEXT PRIMARY KEY,
                kind TEXT NOT NULL,
                name TEXT NOT NULL,
                bbox TEXT NOT NULL,
                minzoom INTEGER NOT NULL,
                maxzoom INTEGER NOT NULL,
                updated_at INTEGER NOT NULL,
                path TEXT,
                url TEXT,
                tags TEXT NOT NULL DEFAULT '[]',
                scale_min REAL,
                scale_max REAL,
                senc_path TEXT
            )",
            [],
        )?;
        Ok(Self { conn: Mutex::new(conn), list_cache: Mutex::new(None), enc_dir_cache: Mutex::new(None) })
    }

    fn invalidate_list_cache(&self) {
        *self.list_cache.lock().expect("list cache mutex poisoned") = None;
    }

    pub fn upsert(&self, record: &DatasetRecord) -> Result<(), RegistryError> {
        let conn = self.conn.lock().expect("connection mutex poisoned");
        let bbox_json = serde_json::to_string(&[
            record.bbox.west,
            record.bbox.south,
            record.bbox.east,
            record.bbox.north,
        ])?;
        let tags_json = serde_json::to_string(&record.tags)?;
        let (path, url) = match &record.locator {
            Locator::Path(p) => (Some(p.to_string_lossy().to_string()), None),
            Locator::Url(u) => (None, Some(u.clone())),
        };
        conn.execute(
            "INSERT OR REPLACE INTO charts
             (id, kind, name, bbox, minzoom, maxzoom, updated_at, path, url, tags, scale_min, scale_max, senc_path)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
            rusqlite::params![
                record.id,
                kind_str(record.kind),
                record.name,
                bbox_json,
                record.minzoom,
                record.maxzoom,
                record.updated_at,
                path,
                url,
                tags_json,
                record.scale_min,
                record.scale_max,
                record.senc_path.as_ref().map(|p| p.to_string_lossy().to_string()),
            ],
        )?;
        drop(conn);
        self.invalidate_list_cache();
        log::info!(target: "chart_registry", "registered dataset {} ({:?})", record.id, record.kind);
        Ok(())
    }

    pub fn register_mbtiles(&self, meta_path: &Path, tiles_path: &Path) -> Result<DatasetRecord, RegistryError> {
        let record = meta::build_record(meta_path, tiles_path, DatasetKind::Enc)?;
        self.upsert(&record)?;
        Ok(record)
    }

    pub fn register_cog(&self, meta_path: &Path, cog_path: &Path) -> Result<DatasetRecord, RegistryError> {
        let record = meta::build_record(meta_path, cog_path, DatasetKind::Geotiff)?;
        self.upsert(&record)?;
        Ok(record)
    }

    pub fn register_senc(&self, meta_path: &Path, senc_path: &Path) -> Result<DatasetRecord, RegistryError> {
        let mut record = meta::build_record(meta_path, senc_path, DatasetKind::Enc)?;
        record.senc_path = Some(senc_path.to_path_buf());
        self.upsert(&record)?;
        Ok(record)
    }

    pub fn register_cm93(&self, meta_path: &Path, db_path: &Path) -> Result<DatasetRecord, RegistryError> {
        let record = meta::build_record(meta_path, db_path, DatasetKind::Cm93)?;
        self.upsert(&record)?;
        Ok(record)
    }

    /// Walk `paths`, register every `*.meta.json` sidecar pair, fall back
    /// to reading a bare `*.mbtiles`' own `metadata` table, and optionally
    /// emit a synthetic `osm` record.
    pub fn scan(&self, paths: &[PathBuf], synth_osm: bool) -> Result<ScanReport, RegistryError> {
        let report = scan::scan_paths(self, paths, synth_osm)?;
        self.invalidate_list_cache();
        Ok(report)
    }

    pub fn list(&self, kind: Option<DatasetKind>, q: Option<&str>, page: usize, page_size: usize) -> Vec<DatasetRecord> {
        let all = self.list_all_cached();
        let mut filtered: Vec<DatasetRecord> = all
            .into_iter()
            .filter(|r| kind.map(|k| k == r.kind).unwrap_or(true))
            .filter(|r| {
                q.map(|needle| r.name.to_lowercase().contains(&needle.to_lowercase()))
                    .unwrap_or(true)
            })
            .collect();
        filtered.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        let start = page.saturating_mul(page_size.max(1));
        filtered.into_iter().skip(start).take(page_size.max(1)).collect()
    }

    pub fn get(&self, id: &str) -> Option<DatasetRecord> {
        self.list_all_cached().into_iter().find(|r| r.id == id)
    }

    fn list_all_cached(&self) -> Vec<DatasetRecord> {
        {
            let cache = self.list_cache.lock().expect("list cache mutex poisoned");
            if let Some(entry) = cache.as_ref() {
                if entry.refreshed_at.elapsed() < LIST_CACHE_TTL {
                    return entry.records.clone();
                }
            }
        }
        let records = self.load_all_from_db();
        *self.list_cache.lock().expect("list cache mutex poisoned") =
            Some(ListCache { refreshed_at: Instant::now(), records: records.clone() });
        records
    }

    fn load_all_from_db(&self) -> Vec<DatasetRecord> {
        let conn = self.conn.lock().expect("connection mutex poisoned");
        let mut stmt = match conn.prepare("SELECT id, kind, name, bbox, minzoom, maxzoom, updated_at, path, url, tags, scale_min, scale_max, senc_path FROM charts") {
            Ok(stmt) => stmt,
            Err(e) => {
                log::warn!(target: "chart_registry", "failed preparing listing query: {e}");
                return Vec::new();
            }
        };
        let rows = stmt.query_map([], row_to_record);
        match rows {
            Ok(rows) => rows.filter_map(|r| r.ok()).collect(),
            Err(e) => {
                log::warn!(target: "chart_registry", "failed listing charts: {e}");
                Vec::new()
            }
        }
    }

    /// Directory-local ENC dataset view, distinct from the main registry
    /// cache: refreshed only when the directory's mtime changes.
    pub fn list_datasets(&self, dir: &Path) -> Result<Vec<DatasetRecord>, RegistryError> {
        let mtime = std::fs::metadata(dir)?.modified()?;
        {
            let cache = self.enc_dir_cache.lock().expect("enc dir cache mutex poisoned");
            if let Some(entry) = cache.as_ref() {
                if entry.dir == dir && entry.mtime == mtime {
                    return Ok(entry.records.clone());
                }
            }
        }
        let records = scan::scan_enc_dir(dir)?;
        *self.enc_dir_cache.lock().expect("enc dir cache mutex poisoned") =
            Some(EncDirCache { dir: dir.to_path_buf(), mtime, records: records.clone() });
        Ok(records)
    }

    pub fn get_dataset(&self, id: &str, dir: &Path) -> Result<Option<DatasetRecord>, RegistryError> {
        Ok(self.list_datasets(dir)?.into_iter().find(|r| r.id == id))
    }

    /// Rebuild the `object_class`/`attribute_class`/`chart_metadata`
    /// dictionary tables backing `/tiles/cm93/dict.json`.
    pub fn populate_dictionary(&self) -> Result<(), RegistryError> {
        let conn = self.conn.lock().expect("connection mutex poisoned");
        dictionary::populate(&conn)
    }

    pub fn load_dictionary(&self) -> Result<dictionary::Dictionary, RegistryError> {
        let conn = self.conn.lock().expect("connection mutex poisoned");
        dictionary::load(&conn)
    }
}

fn row_to_record(row: &rusqlite::Row) -> rusqlite::Result<DatasetRecord> {
    let kind_str: String = row.get(1)?;
    let bbox_json: String = row.get(3)?;
    let tags_json: String = row.get(9)?;
    let path: Option<String> = row.get(7)?;
    let url: Option<String> = row.get(8)?;
    let senc_path: Option<String> = row.get(12)?;

    let bbox: [f64; 4] = serde_json::from_str(&bbox_json).unwrap_or([0.0, 0.0, 0.0, 0.0]);
    let tags: Vec<String> = serde_json::from_str(&tags_json).unwrap_or_default();
    let locator = match (path, url) {
        (Some(p), _) => Locator::Path(PathBuf::from(p)),
        (None, Some(u)) => Locator::Url(u),
        (None, None) => Locator::Path(PathBuf::new()),
    };

    Ok(DatasetRecord {
        id: row.get(0)?,
        kind: kind_from_str(&kind_str),
        name: row.get(2)?,
        bbox: BoundingBox { west: bbox[0], south: bbox[1], east: bbox[2], north: bbox[3] },
        minzoom: row.get(4)?,
        maxzoom: row.get(5)?,
        updated_at: row.get(6)?,
        locator,
        scale_min: row.get(10)?,
        scale_max: row.get(11)?,
        senc_path: senc_path.map(PathBuf::from),
        tags,
    })
}

fn kind_str(kind: DatasetKind) -> &'static str {
    match kind {
        DatasetKind::Enc => "enc",
        DatasetKind::Cm93 => "cm93",
        DatasetKind::Geotiff => "geotiff",
        DatasetKind::Osm => "osm",
    }
}

fn kind_from_str(s: &str) -> DatasetKind {
    match s {
        "cm93" => DatasetKind::Cm93,
        "geotiff" => DatasetKind::Geotiff,
        "osm" => DatasetKind::Osm,
        _ => DatasetKind::Enc,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_meta(dir: &Path, stem: &str) -> PathBuf {
        let meta_path = dir.join(format!("{stem}.meta.json"));
        let mut f = std::fs::File::create(&meta_path).unwrap();
        writeln!(
            f,
            r#"{{"kind":"enc","name":"{stem}","bounds":[0.0,0.0,1.0,1.0],"minzoom":0,"maxzoom":14,"updatedAt":1000,"cells":1,"scamin":true,"sha256":"abc"}}"#
        )
        .unwrap();
        meta_path
    }

    #[test]
    fn register_then_get() {
        let tmp = tempfile::tempdir().unwrap();
        let meta_path = write_meta(tmp.path(), "harbor");
        let tiles_path = tmp.path().join("harbor.mbtiles");
        std::fs::write(&tiles_path, b"").unwrap();

        let registry = Registry::open_in_memory().unwrap();
        let record = registry.register_mbtiles(&meta_path, &tiles_path).unwrap();
        assert_eq!(registry.get(&record.id).unwrap().id, record.id);
    }

    #[test]
    fn list_filters_by_kind() {
        let tmp = tempfile::tempdir().unwrap();
        let meta_path = write_meta(tmp.path(), "harbor");
        let tiles_path = tmp.path().join("harbor.mbtiles");
        std::fs::write(&tiles_path, b"").unwrap();

        let registry = Registry::open_in_memory().unwrap();
        registry.register_mbtiles(&meta_path, &tiles_path).unwrap();
        assert_eq!(registry.list(Some(DatasetKind::Enc), None, 0, 10).len(), 1);
        assert_eq!(registry.list(Some(DatasetKind::Cm93), None, 0, 10).len(), 0);
    }

    #[test]
    fn re_register_same_id_replaces() {
        let tmp = tempfile::tempdir().unwrap();
        let meta_path = write_meta(tmp.path(), "harbor");
        let tiles_path = tmp.path().join("harbor.mbtiles");
        std::fs::write(&tiles_path, b"").unwrap();

        let registry = Registry::open_in_memory().unwrap();
        registry.register_mbtiles(&meta_path, &tiles_path).unwrap();
        registry.register_mbtiles(&meta_path, &tiles_path).unwrap();
        assert_eq!(registry.list(None, None, 0, 100).len(), 1);
    }
}
