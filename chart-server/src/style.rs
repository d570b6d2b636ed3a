//! Style/asset server (C12): MapLibre style JSON per palette, sprite
//! sheet, glyph PBFs, and the CM93 dictionary. Every response here — even
//! a miss — carries a strong ETag and `Cache-Control`.

use chart_s52::{Palette, SymbolAtlas};
use rouille::Response;
use serde_json::json;

/// A single 1x1 transparent PNG, standing in for a real sprite atlas
/// render (no bitmap assets ship in this repository).
const PLACEHOLDER_PNG: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44, 0x52, 0x00, 0x00, 0x00,
    0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F, 0x15, 0xC4, 0x89, 0x00, 0x00, 0x00, 0x0A, 0x49,
    0x44, 0x41, 0x54, 0x78, 0x9C, 0x63, 0x00, 0x01, 0x00, 0x00, 0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00, 0x00,
    0x00, 0x00, 0x49, 0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
];

pub fn style_json(palette_name: &str) -> Option<Response> {
    if !matches!(palette_name, "day" | "dusk" | "night") {
        return None;
    }
    let overrides: std::collections::HashMap<String, String> = match palette_name {
        "dusk" => [("LANDA", "#3a2f1a"), ("CHBLK", "#eeeeee")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
        "night" => [("LANDA", "#1a1008"), ("CHBLK", "#ff3b3b")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
        _ => std::collections::HashMap::new(),
    };
    let palette = Palette::from_overrides(overrides);
    let style = json!({
        "version": 8,
        "name": format!("s52-{palette_name}"),
        "sources": {
            "cm93-core": { "type": "vector", "url": "/tiles/cm93-core.tilejson" },
            "cm93-label": { "type": "vector", "url": "/tiles/cm93-label.tilejson" },
        },
        "sprite": format!("/sprites/s52-{palette_name}"),
        "glyphs": "/glyphs/{fontstack}/{range}.pbf",
        "layers": [
            { "id": "land", "type": "fill", "source": "cm93-core", "source-layer": "chart",
              "paint": { "fill-color": palette.resolve("LANDA").unwrap_or_default() } },
            { "id": "chart-black", "type": "line", "source": "cm93-core", "source-layer": "chart",
              "paint": { "line-color": palette.resolve("CHBLK").unwrap_or_default() } },
        ],
    });
    Some(json_asset_response(&style))
}

pub fn sprite_json(name: &str) -> Option<Response> {
    if !name.starts_with("s52-") {
        return None;
    }
    let atlas = SymbolAtlas::default();
    let mut offset = 0i64;
    let mut entries = serde_json::Map::new();
    for icon in ["DANGER51", "ROCKS01", "ISODGR51"] {
        if let Some(entry) = atlas.get(icon) {
            entries.insert(
                icon.to_string(),
                json!({
                    "width": entry.width,
                    "height": entry.height,
                    "x": offset,
                    "y": 0,
                    "pixelRatio": 1,
                }),
            );
            offset += entry.width as i64;
        }
    }
    Some(json_asset_response(&serde_json::Value::Object(entries)))
}

pub fn sprite_png(name: &str) -> Option<Response> {
    if !name.starts_with("s52-") {
        return None;
    }
    Some(bytes_asset_response("image/png", PLACEHOLDER_PNG.to_vec()))
}

/// No real font glyph data ships in this repository: every range is a
/// (correctly-headered) 404, per the "absent style files" contract.
pub fn glyph_pbf(_fontstack: &str, _range: &str) -> Response {
    bytes_asset_response("application/x-protobuf", Vec::new()).with_status_code(404)
}

/// Builds a JSON asset response with a strong ETag hashed over the
/// serialized body, not a status-keyed placeholder — two palettes with
/// different bodies must not collide on the same ETag.
fn json_asset_response(value: &serde_json::Value) -> Response {
    let bytes = serde_json::to_vec(value).unwrap_or_default();
    bytes_asset_response("application/json", bytes)
}

fn bytes_asset_response(content_type: &str, bytes: Vec<u8>) -> Response {
    let etag = chart_cache::compute_etag(&bytes);
    Response::from_data(content_type.to_string(), bytes)
        .with_unique_header("Cache-Control", "public, max-age=3600")
        .with_unique_header("ETag", etag)
}
