//! HTTP route table: tile, style/asset, registry, config-inspection, and
//! observability endpoints, dispatched by hand off the request path rather
//! than `rouille::router!` — several routes carry a format extension fused
//! onto the last path segment (`{y}.pbf`), which the macro can't express.

use std::io::{Read, Write};
use std::process::{Command, Stdio};

use chart_model::{ContourConfig, DatasetKind, DatasetRecord, Locator, TileKey};
use chart_render::{render_tile, TileError, TileFormat, TileRequest};
use chart_sources::SourceError;
use flate2::write::GzEncoder;
use flate2::Compression;
use rouille::{Request, Response};
use serde_json::json;

use crate::error::{json_error, tile_error_response};
use crate::state::AppState;
use crate::style;

/// Minimum response body size, in bytes, before gzip is applied — mirrors
/// the original `GZipMiddleware(minimum_size=512)`.
const GZIP_MIN_BYTES: usize = 512;

pub fn handle(request: &Request, state: &AppState) -> Response {
    let response = dispatch(request, state);
    apply_cors(apply_gzip(request, response))
}

fn dispatch(request: &Request, state: &AppState) -> Response {
    let path = request.url();
    let segments: Vec<&str> = path.trim_matches('/').split('/').filter(|s| !s.is_empty()).collect();
    let method = request.method();

    if method == "OPTIONS" {
        return Response::empty_204();
    }

    match (method, segments.as_slice()) {
        ("GET", ["healthz"]) => Response::json(&json!({ "status": "ok" })),

        ("GET", ["metrics"]) => {
            Response::from_data("text/plain; version=0.0.4", state.metrics.gather())
        }

        ("GET", ["tiles", "cm93", "dict.json"]) => asset_json(state.dictionary_json()),
        ("GET", ["tiles", "cm93-core.tilejson"]) => tilejson_response(state, "cm93-core"),
        ("GET", ["tiles", "cm93-label.tilejson"]) => tilejson_response(state, "cm93-label"),

        ("GET", ["tiles", "cm93-core", z, x, y]) => {
            tile_response(request, state, "cm93", z, x, y, TileFormat::Mvt, false)
        }
        ("GET", ["tiles", "cm93-label", z, x, y]) => {
            tile_response(request, state, "cm93", z, x, y, TileFormat::Mvt, false)
        }
        ("GET", ["tiles", "cm93", z, x, y]) => {
            tile_response(request, state, "cm93", z, x, y, TileFormat::Mvt, false)
        }

        ("GET", ["tiles", "enc", z, x, y]) => match resolve_sole_enc_dataset(state) {
            Some(id) => tile_response(request, state, &id, z, x, y, TileFormat::Mvt, true),
            None => json_error(404, "NotFound", "no single ENC dataset registered"),
        },
        ("GET", ["tiles", "enc", ds, z, x, y]) => tile_response(request, state, ds, z, x, y, TileFormat::Mvt, true),

        ("GET", ["tiles", "geotiff", cid, z, x, y]) => {
            tile_response(request, state, cid, z, x, y, TileFormat::Geotiff, false)
        }
        ("GET", ["titiler", "tiles", cid, z, x, y]) => {
            tile_response(request, state, cid, z, x, y, TileFormat::Geotiff, false)
        }

        ("GET", ["style", name]) if name.starts_with("s52.") && name.ends_with(".json") => {
            let palette = name.trim_start_matches("s52.").trim_end_matches(".json");
            style::style_json(palette).unwrap_or_else(|| json_error(404, "NotFound", "unknown palette"))
        }

        ("GET", ["sprites", name]) if name.ends_with(".json") => {
            let base = name.trim_end_matches(".json");
            style::sprite_json(base).unwrap_or_else(|| json_error(404, "NotFound", "unknown sprite sheet"))
        }
        ("GET", ["sprites", name]) if name.ends_with(".png") => {
            let base = name.trim_end_matches(".png");
            style::sprite_png(base).unwrap_or_else(|| json_error(404, "NotFound", "unknown sprite sheet"))
        }
        ("GET", ["glyphs", fontstack, range]) if range.ends_with(".pbf") => {
            style::glyph_pbf(fontstack, range.trim_end_matches(".pbf"))
        }

        ("GET", ["charts"]) => list_charts(request, state),
        ("POST", ["charts", "scan"]) => scan_charts(state),
        ("GET", ["charts", id, "thumbnail"]) => chart_thumbnail(state, id),
        ("GET", ["charts", id]) => chart_by_id(state, id),

        ("GET", ["config", "contours"]) => {
            let c = ContourConfig::default();
            Response::json(&json!({
                "safety": c.safety,
                "shallow": c.shallow,
                "deep": c.deep,
                "hazardBuffer": c.hazard_buffer,
            }))
        }
        ("GET", ["config", "datasource"]) => Response::json(&json!({
            "encDir": state.config.enc_dir,
            "dataDir": state.config.data_dir,
            "mbtilesPath": state.config.mbtiles_path,
            "osmUseCommunity": state.config.osm_use_community,
        })),

        ("POST", ["admin", "import", kind @ ("enc" | "cm93" | "geotiff")]) => admin_import(state, kind),

        _ => json_error(404, "NotFound", "no route matches this path"),
    }
}

/// Applies wide-open CORS to every response (C10: "CORS is wide open by
/// default").
fn apply_cors(response: Response) -> Response {
    response
        .with_unique_header("Access-Control-Allow-Origin", "*")
        .with_unique_header("Access-Control-Allow-Methods", "GET, POST, OPTIONS")
        .with_unique_header("Access-Control-Allow-Headers", "*")
}

/// Gzip-encodes the body when the client advertises support via
/// `Accept-Encoding` and the body clears the minimum size (C10: "gzip is
/// applied above a minimum size", `GZipMiddleware(minimum_size=512)`).
fn apply_gzip(request: &Request, response: Response) -> Response {
    let accepts_gzip = request
        .header("Accept-Encoding")
        .map(|value| value.to_ascii_lowercase().contains("gzip"))
        .unwrap_or(false);
    if !accepts_gzip {
        return response;
    }

    let status = response.status_code;
    let headers: Vec<(String, String)> =
        response.headers.iter().map(|(k, v)| (k.clone().into_owned(), v.clone().into_owned())).collect();
    let (mut reader, _size) = response.data.into_reader_and_size();
    let mut bytes = Vec::new();
    let _ = reader.read_to_end(&mut bytes);

    if bytes.len() < GZIP_MIN_BYTES {
        return rebuild_response(status, headers, bytes);
    }

    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    if encoder.write_all(&bytes).is_err() {
        return rebuild_response(status, headers, bytes);
    }
    match encoder.finish() {
        Ok(compressed) => rebuild_response(status, headers, compressed).with_unique_header("Content-Encoding", "gzip"),
        Err(_) => rebuild_response(status, headers, bytes),
    }
}

fn rebuild_response(status: u16, headers: Vec<(String, String)>, bytes: Vec<u8>) -> Response {
    let mut resp = Response::from_data("application/octet-stream", bytes).with_status_code(status);
    for (key, value) in headers {
        resp = resp.with_unique_header(key, value);
    }
    resp
}

fn asset_json(value: serde_json::Value) -> Response {
    Response::json(&value).with_unique_header("Cache-Control", "public, max-age=60")
}

fn tilejson_response(state: &AppState, layer: &str) -> Response {
    let dataset = state.registry.get("cm93");
    let (minzoom, maxzoom, bounds) = match &dataset {
        Some(r) => (r.minzoom, r.maxzoom, [r.bbox.west, r.bbox.south, r.bbox.east, r.bbox.north]),
        None => (0, 14, [-180.0, -85.0, 180.0, 85.0]),
    };
    Response::json(&json!({
        "tilejson": "3.0.0",
        "name": layer,
        "scheme": "xyz",
        "tiles": [format!("/tiles/{layer}/{{z}}/{{x}}/{{y}}.pbf")],
        "minzoom": minzoom,
        "maxzoom": maxzoom,
        "bounds": bounds,
    }))
}

/// Splits a trailing `{y}[.ext]` path segment into the numeric row and an
/// optional lowercase extension.
fn split_y_ext(y: &str) -> Option<(u32, Option<&str>)> {
    match y.rsplit_once('.') {
        Some((stem, ext)) if !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()) => {
            Some((stem.parse().ok()?, Some(ext)))
        }
        _ => Some((y.parse().ok()?, None)),
    }
}

/// Resolves a `fmt` query override (`mvt`, `png`, `png-mvp`) to a
/// [`TileFormat`]; `png-mvp` shares the raster format but requests the
/// higher-fidelity Cargo-`raster`-feature renderer downstream.
fn format_from_query(request: &Request) -> Option<TileFormat> {
    match request.get_param("fmt").as_deref() {
        Some("mvt") => Some(TileFormat::Mvt),
        Some("png") | Some("png-mvp") => Some(TileFormat::Png),
        _ => None,
    }
}

/// Resolves the lone registered ENC dataset for the bare `/tiles/enc/{z}/{x}/{y}`
/// route, mirroring the original `if len(datasets) == 1: datasets[0].id`
/// (else 404 — ambiguous or empty registry, caller must address by id).
fn resolve_sole_enc_dataset(state: &AppState) -> Option<String> {
    let records = state.registry.list(Some(DatasetKind::Enc), None, 0, 10_000);
    match records.as_slice() {
        [record] => Some(record.id.clone()),
        _ => None,
    }
}

fn tile_response(
    request: &Request,
    state: &AppState,
    dataset_id: &str,
    z: &str,
    x: &str,
    y: &str,
    fallback_format: TileFormat,
    enc_only: bool,
) -> Response {
    let Ok(z_num) = z.parse::<u8>() else {
        return json_error(422, "InvalidTile", "non-numeric z");
    };
    let Ok(x_num) = x.parse::<u32>() else {
        return json_error(422, "InvalidTile", "non-numeric x");
    };
    let Some((y_num, ext)) = split_y_ext(y) else {
        return json_error(422, "InvalidTile", "non-numeric y");
    };
    let ext_format = match ext {
        Some("pbf") | Some("mvt") => Some(TileFormat::Mvt),
        Some("png") => Some(TileFormat::Png),
        Some("tif") | Some("tiff") => Some(TileFormat::Geotiff),
        _ => None,
    };
    let format = format_from_query(request).or(ext_format).unwrap_or(fallback_format);

    if enc_only && format != TileFormat::Mvt {
        return json_error(415, "UnsupportedFormat", "ENC tiles are served as MVT only");
    }

    let contour = contour_from_query(request);
    let req = TileRequest { dataset_id: dataset_id.to_string(), z: z_num, x: x_num, y: y_num, format, contour };

    let source = state.source.lock().expect("feature source mutex poisoned");
    let started = std::time::Instant::now();
    match render_tile(&state.registry, source.as_ref(), &state.cache, req) {
        Ok(tile) => {
            state.metrics.observe_render(format_kind(format), started.elapsed().as_secs_f64(), tile.bytes.len());
            if tile.from_cache {
                state.metrics.cache_hits_total.inc();
                if format == TileFormat::Geotiff {
                    state.metrics.geotiff_cache_hits.inc();
                }
            }
            let cache_status = if tile.from_cache { "hit" } else { "miss" };
            Response::from_data(tile.media_type.clone(), tile.bytes)
                .with_unique_header("Cache-Control", "public, max-age=60")
                .with_unique_header("ETag", tile.etag)
                .with_unique_header("Vary", "Accept-Encoding")
                .with_unique_header("X-Tile-Cache", cache_status)
        }
        Err(err) => {
            log_tile_error(&err);
            if format == TileFormat::Geotiff {
                state.metrics.geotiff_errors.inc();
            }
            if is_stale_eligible(&err) {
                let key = TileKey::new(format.tag(), dataset_id, z_num, x_num, y_num, ContourConfig::default());
                if let Some(stale) = state.cache.get(&key) {
                    return Response::from_data(stale.media_type, stale.bytes)
                        .with_unique_header("Cache-Control", "public, max-age=60")
                        .with_unique_header("ETag", stale.etag)
                        .with_unique_header("Vary", "Accept-Encoding")
                        .with_unique_header("X-Tile-Cache", "stale");
                }
            }
            tile_error_response(&err)
        }
    }
}

/// Render failures eligible for a last-good stale-cache fallback (and a 502
/// if none is found) rather than an immediate client-facing error — upstream
/// data corruption or a missing optional renderer, not a bad request.
fn is_stale_eligible(err: &TileError) -> bool {
    matches!(err, TileError::Source(SourceError::Corrupt(_)) | TileError::Unavailable(_))
}

fn format_kind(format: TileFormat) -> &'static str {
    match format {
        TileFormat::Mvt => "tile",
        TileFormat::Png => "cm93-label",
        TileFormat::Geotiff => "geotiff",
    }
}

fn log_tile_error(err: &TileError) {
    log::warn!(target: "chart_server", "tile render failed: {err}");
}

/// Reads contour overrides from the query string. A lone `sc` sets
/// `safety`, `shallow`, and `deep` together; an explicit field always takes
/// precedence over `sc` for that field.
fn contour_from_query(request: &Request) -> ContourConfig {
    let default = ContourConfig::default();
    let sc: Option<f64> = request.get_param("sc").and_then(|v| v.parse().ok());
    let safety: Option<f64> = request.get_param("safety").and_then(|v| v.parse().ok());
    let shallow: Option<f64> = request.get_param("shallow").and_then(|v| v.parse().ok());
    let deep: Option<f64> = request.get_param("deep").and_then(|v| v.parse().ok());
    ContourConfig {
        safety: safety.or(sc).unwrap_or(default.safety),
        shallow: shallow.or(sc).unwrap_or(default.shallow),
        deep: deep.or(sc).unwrap_or(default.deep),
        hazard_buffer: request.get_param("hazardBuffer").and_then(|v| v.parse().ok()),
    }
}

fn list_charts(request: &Request, state: &AppState) -> Response {
    let kind = request.get_param("kind").as_deref().and_then(parse_kind);
    let q = request.get_param("q");
    let page: usize = request.get_param("page").and_then(|v| v.parse().ok()).unwrap_or(0);
    let page_size: usize = request.get_param("pageSize").and_then(|v| v.parse().ok()).unwrap_or(50);
    let records = state.registry.list(kind, q.as_deref(), page, page_size);
    Response::json(&json!({ "charts": records.iter().map(record_json).collect::<Vec<_>>() }))
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

fn chart_by_id(state: &AppState, id: &str) -> Response {
    match state.registry.get(id) {
        Some(record) => Response::json(&record_json(&record)),
        None => json_error(404, "NotFound", &format!("no such dataset: {id}")),
    }
}

fn chart_thumbnail(state: &AppState, id: &str) -> Response {
    if state.registry.get(id).is_none() {
        return json_error(404, "NotFound", &format!("no such dataset: {id}"));
    }
    style::sprite_png("s52-day").unwrap_or_else(|| json_error(404, "NotFound", "no thumbnail"))
}

fn scan_charts(state: &AppState) -> Response {
    let paths = vec![state.config.data_dir.clone(), state.config.enc_dir.clone()];
    match state.registry.scan(&paths, state.config.osm_use_community) {
        Ok(report) => Response::json(&json!({ "registered": report.registered, "skipped": report.skipped })),
        Err(e) => json_error(500, "Unavailable", &e.to_string()),
    }
}

fn record_json(record: &DatasetRecord) -> serde_json::Value {
    let locator = match &record.locator {
        Locator::Path(p) => json!({ "path": p }),
        Locator::Url(u) => json!({ "url": u }),
    };
    json!({
        "id": record.id,
        "kind": record.kind,
        "name": record.name,
        "bbox": [record.bbox.west, record.bbox.south, record.bbox.east, record.bbox.north],
        "minzoom": record.minzoom,
        "maxzoom": record.maxzoom,
        "updatedAt": record.updated_at,
        "locator": locator,
        "scaleMin": record.scale_min,
        "scaleMax": record.scale_max,
        "tags": record.tags,
    })
}

/// Triggers a background rescan of the data/ENC directories for freshly
/// dropped `*.meta.json` sidecars, as a detached child process — the
/// request thread returns immediately rather than blocking on a directory
/// walk. The heavy per-format conversion (`chart-cli ingest-*`) is run
/// out-of-band by an operator or a scheduled job, not from this endpoint;
/// `kind` only narrows which directory gets walked.
fn admin_import(state: &AppState, kind: &str) -> Response {
    if !state.config.import_api_enabled {
        return json_error(404, "NotFound", "import API disabled");
    }
    let exe = std::env::current_exe().unwrap_or_else(|_| "chart-cli".into());
    let db_arg = state.config.db_path.to_string_lossy().to_string();
    let dir = match kind {
        "geotiff" => &state.config.data_dir,
        _ => &state.config.enc_dir,
    };
    let spawned = Command::new(exe)
        .arg("--db")
        .arg(&db_arg)
        .arg("scan")
        .arg(dir)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn();

    match spawned {
        Ok(child) => Response::json(&json!({ "accepted": true, "pid": child.id() })).with_status_code(202),
        Err(e) => json_error(500, "Unavailable", &format!("failed to spawn import: {e}")),
    }
}
