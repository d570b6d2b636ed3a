//! Exception mapping: render/registry errors to the stable-shape JSON body
//! and status codes from the error taxonomy.

use chart_render::TileError;
use chart_sources::SourceError;
use rouille::Response;
use serde_json::json;

pub fn tile_error_response(err: &TileError) -> Response {
    let (status, kind) = match err {
        TileError::NotFound(_) => (404, "NotFound"),
        TileError::InvalidTile { .. } => (422, "InvalidTile"),
        TileError::UnsupportedFormat => (415, "UnsupportedFormat"),
        TileError::Source(SourceError::NotFound(_)) => (404, "NotFound"),
        TileError::Source(SourceError::Corrupt(_)) => (502, "Corrupt"),
        TileError::Unavailable(_) => (502, "Unavailable"),
    };
    json_error(status, kind, &err.to_string())
}

pub fn json_error(status: u16, kind: &str, message: &str) -> Response {
    Response::json(&json!({ "error": kind, "message": message })).with_status_code(status)
}
