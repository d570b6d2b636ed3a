//! Geometry command encoding (MoveTo/LineTo/ClosePath) and lon/lat <->
//! tile-pixel quantization, per the Mapbox Vector Tile spec.

use chart_geom::TileBounds;
use chart_model::Geometry;

use crate::protobuf::{zigzag_decode, zigzag_encode};
use crate::MvtError;

const CMD_MOVE_TO: u32 = 1;
const CMD_LINE_TO: u32 = 2;
const CMD_CLOSE_PATH: u32 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeomType {
    Unknown,
    Point,
    LineString,
    Polygon,
}

impl GeomType {
    pub fn to_wire(self) -> u32 {
        match self {
            GeomType::Unknown => 0,
            GeomType::Point => 1,
            GeomType::LineString => 2,
            GeomType::Polygon => 3,
        }
    }

    pub fn from_wire(v: u64) -> Self {
        match v {
            1 => GeomType::Point,
            2 => GeomType::LineString,
            3 => GeomType::Polygon,
            _ => GeomType::Unknown,
        }
    }
}

fn quantize(bounds: &TileBounds, extent: u32, lon: f64, lat: f64) -> (i32, i32) {
    let width = bounds.east - bounds.west;
    let height = bounds.north - bounds.south;
    let x = if width.abs() < f64::EPSILON {
        0.0
    } else {
        (lon - bounds.west) / width * extent as f64
    };
    let y = if height.abs() < f64::EPSILON {
        0.0
    } else {
        (bounds.north - lat) / height * extent as f64
    };
    (x.round() as i32, y.round() as i32)
}

fn dequantize(bounds: &TileBounds, extent: u32, px: i32, py: i32) -> (f64, f64) {
    let width = bounds.east - bounds.west;
    let height = bounds.north - bounds.south;
    let lon = bounds.west + (px as f64 / extent as f64) * width;
    let lat = bounds.north - (py as f64 / extent as f64) * height;
    (lon, lat)
}

fn encode_ring_commands(out: &mut Vec<u32>, cursor: &mut (i32, i32), ring: &[(f64, f64)], bounds: &TileBounds, extent: u32, close: bool) {
    let mut points: Vec<(i32, i32)> = ring.iter().map(|&(lon, lat)| quantize(bounds, extent, lon, lat)).collect();
    if close && points.len() > 1 && points.first() == points.last() {
        points.pop();
    }
    if points.is_empty() {
        return;
    }
    push_move_to(out, cursor, points[0]);
    if points.len() > 1 {
        push_line_to(out, cursor, &points[1..]);
    }
    if close {
        out.push((CMD_CLOSE_PATH << 3) | 1);
    }
}

fn push_move_to(out: &mut Vec<u32>, cursor: &mut (i32, i32), point: (i32, i32)) {
    out.push((CMD_MOVE_TO << 3) | 1);
    let dx = point.0 - cursor.0;
    let dy = point.1 - cursor.1;
    out.push(zigzag_encode(dx as i64) as u32);
    out.push(zigzag_encode(dy as i64) as u32);
    *cursor = point;
}

fn push_line_to(out: &mut Vec<u32>, cursor: &mut (i32, i32), points: &[(i32, i32)]) {
    out.push((CMD_LINE_TO << 3) | points.len() as u32);
    for &point in points {
        let dx = point.0 - cursor.0;
        let dy = point.1 - cursor.1;
        out.push(zigzag_encode(dx as i64) as u32);
        out.push(zigzag_encode(dy as i64) as u32);
        *cursor = point;
    }
}

/// Encode a geometry into `(type, commands)`, quantized against `bounds`.
pub fn encode_geometry(geom: &Geometry, bounds: &TileBounds, extent: u32) -> (GeomType, Vec<u32>) {
    let mut cursor = (0i32, 0i32);
    let mut out = Vec::new();
    match geom {
        Geometry::Point(lon, lat) => {
            let p = quantize(bounds, extent, *lon, *lat);
            push_move_to(&mut out, &mut cursor, p);
            (GeomType::Point, out)
        }
        Geometry::MultiPoint(pts) => {
            let points: Vec<(i32, i32)> = pts.iter().map(|&(lon, lat)| quantize(bounds, extent, lon, lat)).collect();
            if !points.is_empty() {
                out.push((CMD_MOVE_TO << 3) | points.len() as u32);
                for &point in &points {
                    let dx = point.0 - cursor.0;
                    let dy = point.1 - cursor.1;
                    out.push(zigzag_encode(dx as i64) as u32);
                    out.push(zigzag_encode(dy as i64) as u32);
                    cursor = point;
                }
            }
            (GeomType::Point, out)
        }
        Geometry::LineString(pts) => {
            encode_ring_commands(&mut out, &mut cursor, pts, bounds, extent, false);
            (GeomType::LineString, out)
        }
        Geometry::MultiLineString(lines) => {
            for line in lines {
                encode_ring_commands(&mut out, &mut cursor, line, bounds, extent, false);
            }
            (GeomType::LineString, out)
        }
        Geometry::Polygon(rings) => {
            for ring in rings {
                encode_ring_commands(&mut out, &mut cursor, ring, bounds, extent, true);
            }
            (GeomType::Polygon, out)
        }
        Geometry::MultiPolygon(polys) => {
            for rings in polys {
                for ring in rings {
                    encode_ring_commands(&mut out, &mut cursor, ring, bounds, extent, true);
                }
            }
            (GeomType::Polygon, out)
        }
    }
}

struct DecodedPart {
    points: Vec<(i32, i32)>,
    closed: bool,
}

fn decode_parts(commands: &[u32]) -> Result<Vec<DecodedPart>, MvtError> {
    let mut parts = Vec::new();
    let mut cursor = (0i32, 0i32);
    let mut i = 0;
    let mut current: Option<DecodedPart> = None;
    while i < commands.len() {
        let cmd_int = commands[i];
        i += 1;
        let id = cmd_int & 0x7;
        let count = cmd_int >> 3;
        match id {
            1 => {
                // MoveTo always starts a new part.
                if let Some(part) = current.take() {
                    parts.push(part);
                }
                let mut points = Vec::with_capacity(count as usize);
                for _ in 0..count {
                    let dx = zigzag_decode(*commands.get(i).ok_or(MvtError::Truncated)? as u64) as i32;
                    let dy = zigzag_decode(*commands.get(i + 1).ok_or(MvtError::Truncated)? as u64) as i32;
                    i += 2;
                    cursor = (cursor.0 + dx, cursor.1 + dy);
                    points.push(cursor);
                }
                current = Some(DecodedPart { points, closed: false });
            }
            2 => {
                let part = current.as_mut().ok_or_else(|| MvtError::Malformed("LineTo without MoveTo".into()))?;
                for _ in 0..count {
                    let dx = zigzag_decode(*commands.get(i).ok_or(MvtError::Truncated)? as u64) as i32;
                    let dy = zigzag_decode(*commands.get(i + 1).ok_or(MvtError::Truncated)? as u64) as i32;
                    i += 2;
                    cursor = (cursor.0 + dx, cursor.1 + dy);
                    part.points.push(cursor);
                }
            }
            7 => {
                let part = current.as_mut().ok_or_else(|| MvtError::Malformed("ClosePath without MoveTo".into()))?;
                part.closed = true;
            }
            other => return Err(MvtError::Malformed(format!("unknown geometry command {other}"))),
        }
    }
    if let Some(part) = current.take() {
        parts.push(part);
    }
    Ok(parts)
}

/// Signed area (shoelace) in pixel space. Used to tell exterior rings from
/// holes when reconstructing multi-polygons: a polygon's first ring sets
/// the winding that later holes must oppose.
fn signed_area(points: &[(i32, i32)]) -> i64 {
    let mut area: i64 = 0;
    for i in 0..points.len() {
        let (x1, y1) = points[i];
        let (x2, y2) = points[(i + 1) % points.len()];
        area += x1 as i64 * y2 as i64 - x2 as i64 * y1 as i64;
    }
    area
}

pub fn decode_geometry(geom_type: GeomType, commands: &[u32], bounds: &TileBounds, extent: u32) -> Result<Geometry, MvtError> {
    let parts = decode_parts(commands)?;
    match geom_type {
        GeomType::Point => {
            let pts: Vec<(f64, f64)> = parts
                .into_iter()
                .flat_map(|p| p.points)
                .map(|(x, y)| dequantize(bounds, extent, x, y))
                .collect();
            match pts.len() {
                0 => Err(MvtError::Malformed("empty point geometry".into())),
                1 => Ok(Geometry::Point(pts[0].0, pts[0].1)),
                _ => Ok(Geometry::MultiPoint(pts)),
            }
        }
        GeomType::LineString => {
            let lines: Vec<Vec<(f64, f64)>> = parts
                .into_iter()
                .map(|p| p.points.into_iter().map(|(x, y)| dequantize(bounds, extent, x, y)).collect())
                .collect();
            match lines.len() {
                0 => Err(MvtError::Malformed("empty linestring geometry".into())),
                1 => Ok(Geometry::LineString(lines.into_iter().next().unwrap())),
                _ => Ok(Geometry::MultiLineString(lines)),
            }
        }
        GeomType::Polygon => {
            let mut polygons: Vec<Vec<Vec<(f64, f64)>>> = Vec::new();
            for part in parts {
                let area = signed_area(&part.points);
                let ring: Vec<(f64, f64)> = part
                    .points
                    .into_iter()
                    .map(|(x, y)| dequantize(bounds, extent, x, y))
                    .collect();
                let is_exterior = area < 0 || polygons.is_empty();
                if is_exterior {
                    polygons.push(vec![ring]);
                } else if let Some(last) = polygons.last_mut() {
                    last.push(ring);
                }
            }
            match polygons.len() {
                0 => Err(MvtError::Malformed("empty polygon geometry".into())),
                1 => Ok(Geometry::Polygon(polygons.into_iter().next().unwrap())),
                _ => Ok(Geometry::MultiPolygon(polygons)),
            }
        }
        GeomType::Unknown => Err(MvtError::Malformed("unknown geometry type".into())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> TileBounds {
        TileBounds { west: 0.0, south: 0.0, east: 1.0, north: 1.0 }
    }

    #[test]
    fn point_round_trips() {
        let geom = Geometry::Point(0.5, 0.5);
        let (ty, cmds) = encode_geometry(&geom, &bounds(), 4096);
        let decoded = decode_geometry(ty, &cmds, &bounds(), 4096).unwrap();
        assert_eq!(decoded, geom);
    }

    #[test]
    fn linestring_round_trips() {
        let geom = Geometry::LineString(vec![(0.1, 0.1), (0.5, 0.5), (0.9, 0.2)]);
        let (ty, cmds) = encode_geometry(&geom, &bounds(), 4096);
        let decoded = decode_geometry(ty, &cmds, &bounds(), 4096).unwrap();
        assert_eq!(decoded, geom);
    }

    #[test]
    fn polygon_with_hole_round_trips() {
        let geom = Geometry::Polygon(vec![
            vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0)],
            vec![(0.3, 0.3), (0.3, 0.6), (0.6, 0.6), (0.6, 0.3), (0.3, 0.3)],
        ]);
        let (ty, cmds) = encode_geometry(&geom, &bounds(), 4096);
        let decoded = decode_geometry(ty, &cmds, &bounds(), 4096).unwrap();
        match decoded {
            Geometry::Polygon(rings) => assert_eq!(rings.len(), 2),
            other => panic!("expected polygon with hole, got {other:?}"),
        }
    }
}
