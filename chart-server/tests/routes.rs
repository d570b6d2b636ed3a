//! Route-table integration tests, driven directly against `routes::handle`
//! with `rouille::Request::fake_http` — no real socket involved.

use std::path::PathBuf;

use chart_model::{BoundingBox, DatasetKind, DatasetRecord, Locator};
use chart_registry::Registry;
use chart_server::routes;
use chart_server::state::AppState;
use rouille::Request;

fn fake_state() -> AppState {
    let config = chart_server::config::ServerConfig {
        bind_addr: "127.0.0.1:0".to_string(),
        db_path: std::path::PathBuf::from(":memory:"),
        data_dir: std::path::PathBuf::from("./nonexistent-data"),
        enc_dir: std::path::PathBuf::from("./nonexistent-enc"),
        mbtiles_path: None,
        mbtiles_cache_size: 16,
        geo_lru_size: 16,
        geo_webp: false,
        raster_mvp: false,
        import_api_enabled: false,
        osm_use_community: false,
        opencm_cm93_cli: None,
        redis_url: None,
        redis_ttl_secs: None,
    };
    let registry = Registry::open_in_memory().expect("in-memory registry");
    AppState::new(config, registry, Box::new(chart_sources::StubSource::new()))
}

fn get(path: &str) -> rouille::Response {
    let request = Request::fake_http("GET", path, Vec::new(), Vec::new());
    let state = fake_state();
    routes::handle(&request, &state)
}

fn get_with_state(state: &AppState, path: &str) -> rouille::Response {
    let request = Request::fake_http("GET", path, Vec::new(), Vec::new());
    routes::handle(&request, state)
}

fn register_dataset(registry: &Registry, id: &str, kind: DatasetKind) {
    registry
        .upsert(&DatasetRecord {
            id: id.to_string(),
            kind,
            name: id.to_string(),
            bbox: BoundingBox { west: -1.0, south: -1.0, east: 1.0, north: 1.0 },
            minzoom: 0,
            maxzoom: 14,
            updated_at: 0,
            locator: Locator::Path(PathBuf::from(format!("{id}.mbtiles"))),
            scale_min: None,
            scale_max: None,
            senc_path: None,
            tags: Vec::new(),
        })
        .expect("upsert dataset");
}

fn header<'a>(response: &'a rouille::Response, name: &str) -> Option<&'a str> {
    response.headers.iter().find(|(k, _)| k.eq_ignore_ascii_case(name)).map(|(_, v)| v.as_ref())
}

#[test]
fn healthz_is_ok() {
    let response = get("/healthz");
    assert_eq!(response.status_code, 200);
}

#[test]
fn metrics_is_plaintext() {
    let response = get("/metrics");
    assert_eq!(response.status_code, 200);
}

#[test]
fn unknown_route_is_404_json() {
    let response = get("/no/such/route");
    assert_eq!(response.status_code, 404);
}

#[test]
fn dict_json_round_trips() {
    let response = get("/tiles/cm93/dict.json");
    assert_eq!(response.status_code, 200);
}

#[test]
fn style_json_accepts_known_palette_only() {
    assert_eq!(get("/style/s52.day.json").status_code, 200);
    assert_eq!(get("/style/s52.nope.json").status_code, 404);
}

#[test]
fn sprite_routes_require_s52_prefix() {
    assert_eq!(get("/sprites/s52-day.json").status_code, 200);
    assert_eq!(get("/sprites/other.json").status_code, 404);
}

#[test]
fn glyphs_always_404() {
    let response = get("/glyphs/Roboto/0-255.pbf");
    assert_eq!(response.status_code, 404);
}

#[test]
fn unknown_dataset_tile_is_404() {
    let response = get("/tiles/enc/nonexistent-dataset/5/10/12");
    assert_eq!(response.status_code, 404);
}

#[test]
fn malformed_tile_coords_are_422() {
    let response = get("/tiles/cm93/notanumber/10/12.pbf");
    assert_eq!(response.status_code, 422);
}

#[test]
fn admin_import_disabled_by_default() {
    let request = Request::fake_http("POST", "/admin/import/enc", Vec::new(), Vec::new());
    let state = fake_state();
    let response = routes::handle(&request, &state);
    assert_eq!(response.status_code, 404);
}

#[test]
fn chart_lookup_of_unknown_id_is_404() {
    let response = get("/charts/does-not-exist");
    assert_eq!(response.status_code, 404);
}

#[test]
fn tile_response_carries_etag_cache_control_and_vary() {
    let state = fake_state();
    register_dataset(&state.registry, "cm93", DatasetKind::Cm93);
    let response = get_with_state(&state, "/tiles/cm93/5/1/1");
    assert_eq!(response.status_code, 200);
    assert!(header(&response, "ETag").is_some());
    assert_eq!(header(&response, "Vary"), Some("Accept-Encoding"));
    assert_eq!(header(&response, "Cache-Control"), Some("public, max-age=60"));
}

#[test]
fn sc_shorthand_sets_all_three_contour_fields() {
    let state = fake_state();
    register_dataset(&state.registry, "cm93", DatasetKind::Cm93);
    let low = get_with_state(&state, "/tiles/cm93/5/1/1?sc=5");
    let high = get_with_state(&state, "/tiles/cm93/5/1/1?sc=50");
    assert_eq!(low.status_code, 200);
    assert_eq!(high.status_code, 200);
    assert_ne!(header(&low, "ETag"), header(&high, "ETag"));
}

#[test]
fn enc_route_rejects_non_mvt_format_with_415() {
    let state = fake_state();
    register_dataset(&state.registry, "one", DatasetKind::Enc);
    let response = get_with_state(&state, "/tiles/enc/one/0/0/0?fmt=png");
    assert_eq!(response.status_code, 415);
}

#[test]
fn bare_enc_route_resolves_the_sole_registered_dataset() {
    let state = fake_state();
    register_dataset(&state.registry, "one", DatasetKind::Enc);
    let response = get_with_state(&state, "/tiles/enc/0/0/0");
    assert_eq!(response.status_code, 200);
}

#[test]
fn bare_enc_route_404s_when_no_dataset_is_registered() {
    let response = get("/tiles/enc/0/0/0");
    assert_eq!(response.status_code, 404);
}

#[test]
fn bare_enc_route_404s_when_datasets_are_ambiguous() {
    let state = fake_state();
    register_dataset(&state.registry, "one", DatasetKind::Enc);
    register_dataset(&state.registry, "two", DatasetKind::Enc);
    let response = get_with_state(&state, "/tiles/enc/0/0/0");
    assert_eq!(response.status_code, 404);
}

#[test]
fn every_response_carries_wide_open_cors_headers() {
    let response = get("/healthz");
    assert_eq!(header(&response, "Access-Control-Allow-Origin"), Some("*"));
}

#[test]
fn gzip_is_applied_when_accepted_and_body_clears_the_minimum_size() {
    let request = Request::fake_http(
        "GET",
        "/tiles/cm93/dict.json",
        vec![("Accept-Encoding".to_string(), "gzip, deflate".to_string())],
        Vec::new(),
    );
    let state = fake_state();
    let response = routes::handle(&request, &state);
    assert_eq!(response.status_code, 200);
    assert_eq!(header(&response, "Content-Encoding"), Some("gzip"));
}

#[test]
fn gzip_is_not_applied_when_client_does_not_accept_it() {
    let response = get("/tiles/cm93/dict.json");
    assert_eq!(response.status_code, 200);
    assert!(header(&response, "Content-Encoding").is_none());
}
