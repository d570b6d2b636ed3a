//! Mapbox Vector Tile (MVT) protobuf encoder/decoder.
//!
//! No MVT *encoder* exists anywhere in the reference pack (only format
//! enums and decoders), so the wire-level protobuf handling here is
//! hand-rolled: varint/tag writing in [`protobuf`], geometry command
//! encoding in [`geometry`], and Tile/Layer/Feature assembly in this module.

mod geometry;
mod protobuf;

use std::collections::HashMap;

use chart_geom::TileBounds;
use chart_model::{Feature, Value};
use thiserror::Error;

use geometry::GeomType;
use protobuf::{ProtoReader, ProtoWriter, WIRE_LEN};

pub const DEFAULT_EXTENT: u32 = 4096;
const MVT_VERSION: u32 = 2;

/// An ordered set of named layers, each a sequence of features. A plain
/// `Vec` (rather than an external ordered-map crate) preserves layer order
/// with zero new dependencies.
pub type LayerSet = Vec<(String, Vec<Feature>)>;

#[derive(Debug, Error)]
pub enum MvtError {
    #[error("truncated MVT byte stream")]
    Truncated,
    #[error("malformed MVT data: {0}")]
    Malformed(String),
}

/// Encode a layer set into a version-2 MVT byte string, geometry quantized
/// against `bounds` at `extent` (4096 is the wire convention).
///
/// Encoding an empty `layers` produces a tile under 16 bytes with zero
/// layers.
pub fn encode(layers: &LayerSet, bounds: &TileBounds, extent: u32) -> Vec<u8> {
    let mut tile = ProtoWriter::new();
    for (name, features) in layers {
        let layer_bytes = encode_layer(name, features, bounds, extent);
        tile.write_bytes_field(3, &layer_bytes);
    }
    tile.into_vec()
}

fn encode_layer(name: &str, features: &[Feature], bounds: &TileBounds, extent: u32) -> Vec<u8> {
    let mut keys: Vec<String> = Vec::new();
    let mut key_index: HashMap<String, u32> = HashMap::new();
    let mut values: Vec<Value> = Vec::new();

    let mut feature_bytes = Vec::new();
    for (id, feature) in features.iter().enumerate() {
        let mut tags = Vec::new();
        let mut attrs: Vec<(&String, &Value)> = feature.attrs.iter().collect();
        attrs.sort_by(|a, b| a.0.cmp(b.0));
        for (k, v) in attrs {
            let key_idx = *key_index.entry(k.clone()).or_insert_with(|| {
                keys.push(k.clone());
                (keys.len() - 1) as u32
            });
            let value_idx = intern_value(&mut values, v);
            tags.push(key_idx);
            tags.push(value_idx);
        }
        let (geom_type, commands) = geometry::encode_geometry(&feature.geometry, bounds, extent);
        feature_bytes.push(encode_feature(id as u64, &tags, geom_type, &commands));
    }

    let mut layer = ProtoWriter::new();
    layer.write_uint32_field(15, MVT_VERSION);
    layer.write_string_field(1, name);
    for fb in &feature_bytes {
        layer.write_bytes_field(2, fb);
    }
    for key in &keys {
        layer.write_string_field(3, key);
    }
    for value in &values {
        layer.write_bytes_field(4, &encode_value(value));
    }
    layer.write_uint32_field(5, extent);
    layer.into_vec()
}

fn intern_value(values: &mut Vec<Value>, v: &Value) -> u32 {
    if let Some(pos) = values.iter().position(|existing| existing == v) {
        return pos as u32;
    }
    values.push(v.clone());
    (values.len() - 1) as u32
}

fn encode_feature(id: u64, tags: &[u32], geom_type: GeomType, commands: &[u32]) -> Vec<u8> {
    let mut w = ProtoWriter::new();
    w.write_uint64_field(1, id);
    w.write_packed_varints(2, tags);
    w.write_uint32_field(3, geom_type.to_wire());
    w.write_packed_varints(4, commands);
    w.into_vec()
}

fn encode_value(v: &Value) -> Vec<u8> {
    let mut w = ProtoWriter::new();
    match v {
        Value::Str(s) => w.write_string_field(1, s),
        Value::Num(n) => w.write_double_field(3, *n),
        Value::Int(i) => w.write_sint64_field(6, *i),
        Value::Bool(b) => w.write_bool_field(7, *b),
        Value::Null => {}
    }
    w.into_vec()
}

/// Decode an MVT byte string back into a [`LayerSet`], re-expressed in the
/// WGS84 lon/lat space of `bounds`. Used by `MbtilesSource` (which stores
/// pre-encoded tiles) and by round-trip tests.
pub fn decode(bytes: &[u8], bounds: &TileBounds, extent: u32) -> Result<LayerSet, MvtError> {
    let mut reader = ProtoReader::new(bytes);
    let mut layers = LayerSet::new();
    while !reader.eof() {
        let (field, wire) = reader.read_tag()?;
        if field == 3 && wire == WIRE_LEN {
            let layer_bytes = reader.read_len_delimited()?;
            layers.push(decode_layer(layer_bytes, bounds, extent)?);
        } else {
            reader.skip(wire)?;
        }
    }
    Ok(layers)
}

fn decode_layer(bytes: &[u8], bounds: &TileBounds, extent: u32) -> Result<(String, Vec<Feature>), MvtError> {
    let mut reader = ProtoReader::new(bytes);
    let mut name = String::new();
    let mut keys: Vec<String> = Vec::new();
    let mut values: Vec<Value> = Vec::new();
    let mut raw_features: Vec<&[u8]> = Vec::new();

    while !reader.eof() {
        let (field, wire) = reader.read_tag()?;
        match (field, wire) {
            (1, WIRE_LEN) => {
                name = String::from_utf8_lossy(reader.read_len_delimited()?).into_owned();
            }
            (2, WIRE_LEN) => raw_features.push(reader.read_len_delimited()?),
            (3, WIRE_LEN) => keys.push(String::from_utf8_lossy(reader.read_len_delimited()?).into_owned()),
            (4, WIRE_LEN) => values.push(decode_value(reader.read_len_delimited()?)?),
            (5, _) => {
                reader.skip(wire)?;
            }
            _ => reader.skip(wire)?,
        }
    }

    let mut features = Vec::with_capacity(raw_features.len());
    for raw in raw_features {
        features.push(decode_feature(raw, &keys, &values, bounds, extent)?);
    }
    Ok((name, features))
}

fn decode_value(bytes: &[u8]) -> Result<Value, MvtError> {
    let mut reader = ProtoReader::new(bytes);
    let mut value = Value::Null;
    while !reader.eof() {
        let (field, wire) = reader.read_tag()?;
        match field {
            1 => value = Value::Str(String::from_utf8_lossy(reader.read_len_delimited()?).into_owned()),
            3 => value = Value::num(reader.read_fixed64()?),
            6 => {
                let raw = {
                    let mut v = reader.read_varint()?;
                    // sint64 wire value, zigzag-decoded below.
                    v = protobuf::zigzag_decode(v) as u64;
                    v as i64
                };
                value = Value::Int(raw);
            }
            7 => value = Value::Bool(reader.read_varint()? != 0),
            _ => reader.skip(wire)?,
        }
    }
    Ok(value)
}

fn decode_feature(
    bytes: &[u8],
    keys: &[String],
    values: &[Value],
    bounds: &TileBounds,
    extent: u32,
) -> Result<Feature, MvtError> {
    let mut reader = ProtoReader::new(bytes);
    let mut tags: Vec<u32> = Vec::new();
    let mut geom_type = GeomType::Unknown;
    let mut commands: Vec<u32> = Vec::new();

    while !reader.eof() {
        let (field, wire) = reader.read_tag()?;
        match field {
            2 => tags = read_packed_u32(reader.read_len_delimited()?)?,
            3 => geom_type = GeomType::from_wire(reader.read_varint()?),
            4 => commands = read_packed_u32(reader.read_len_delimited()?)?,
            _ => reader.skip(wire)?,
        }
    }

    let geometry = geometry::decode_geometry(geom_type, &commands, bounds, extent)?;
    let mut feature = Feature::new("UNKNOWN", geometry);
    for pair in tags.chunks_exact(2) {
        let key = keys.get(pair[0] as usize).ok_or_else(|| MvtError::Malformed("tag key out of range".into()))?;
        let value = values.get(pair[1] as usize).ok_or_else(|| MvtError::Malformed("tag value out of range".into()))?;
        feature.attrs.insert(key.clone(), value.clone());
    }
    Ok(feature)
}

fn read_packed_u32(bytes: &[u8]) -> Result<Vec<u32>, MvtError> {
    let mut reader = ProtoReader::new(bytes);
    let mut out = Vec::new();
    while !reader.eof() {
        out.push(reader.read_varint()? as u32);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chart_model::Geometry;

    fn bounds() -> TileBounds {
        TileBounds { west: 0.0, south: 0.0, east: 1.0, north: 1.0 }
    }

    #[test]
    fn empty_layers_under_16_bytes() {
        let bytes = encode(&LayerSet::new(), &bounds(), DEFAULT_EXTENT);
        assert!(bytes.len() < 16, "empty tile was {} bytes", bytes.len());
        let decoded = decode(&bytes, &bounds(), DEFAULT_EXTENT).unwrap();
        assert!(decoded.is_empty());
    }

    #[test]
    fn single_feature_round_trips_attrs_and_geometry() {
        let feature = Feature::new("DEPARE", Geometry::Point(0.5, 0.5))
            .with_attr("isShallow", Value::Bool(true))
            .with_attr("depthBand", Value::Str("VS".into()));
        let layers: LayerSet = vec![("features".to_string(), vec![feature.clone()])];
        let bytes = encode(&layers, &bounds(), DEFAULT_EXTENT);
        let decoded = decode(&bytes, &bounds(), DEFAULT_EXTENT).unwrap();
        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded[0].0, "features");
        assert_eq!(decoded[0].1.len(), 1);
        let out = &decoded[0].1[0];
        assert_eq!(out.attrs.get("isShallow"), Some(&Value::Bool(true)));
        assert_eq!(out.attrs.get("depthBand"), Some(&Value::Str("VS".into())));
        match out.geometry {
            Geometry::Point(x, y) => {
                assert!((x - 0.5).abs() < 1e-3);
                assert!((y - 0.5).abs() < 1e-3);
            }
            _ => panic!("expected point geometry"),
        }
    }

    #[test]
    fn repeated_values_are_interned() {
        let f1 = Feature::new("SOUNDG", Geometry::Point(0.1, 0.1)).with_attr("isShallow", Value::Bool(true));
        let f2 = Feature::new("SOUNDG", Geometry::Point(0.2, 0.2)).with_attr("isShallow", Value::Bool(true));
        let layers: LayerSet = vec![("features".to_string(), vec![f1, f2])];
        let bytes = encode(&layers, &bounds(), DEFAULT_EXTENT);
        let decoded = decode(&bytes, &bounds(), DEFAULT_EXTENT).unwrap();
        assert_eq!(decoded[0].1.len(), 2);
    }

    #[test]
    fn multiple_layers_preserve_order() {
        let core = Feature::new("DEPARE", Geometry::Point(0.1, 0.1));
        let label = Feature::new("LIGHTS", Geometry::Point(0.2, 0.2));
        let layers: LayerSet = vec![
            ("core".to_string(), vec![core]),
            ("label".to_string(), vec![label]),
        ];
        let bytes = encode(&layers, &bounds(), DEFAULT_EXTENT);
        let decoded = decode(&bytes, &bounds(), DEFAULT_EXTENT).unwrap();
        assert_eq!(decoded[0].0, "core");
        assert_eq!(decoded[1].0, "label");
    }
}
