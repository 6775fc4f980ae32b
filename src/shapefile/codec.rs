/*
This code is part of the esri_shapefile library.
Authors: esri_shapefile contributors
Created: 19/10/2026
Last Modified: 19/10/2026
License: MIT

Notes: Record framing and the per-shape-type record bodies. The record header
(number and content length) is big-endian; the body is little-endian.
*/
use super::rings::{assemble_polygons, flatten_polygons};
use crate::configs::CodecConfig;
use crate::error::{Result, ShapefileError};
use crate::geometry::*;
use byteorder::{BigEndian, ByteOrder};
use esri_common::utils::{ByteOrderReader, ByteOrderWriter, Endianness};
use std::io::prelude::*;

/// Measures below this value mean "no data".
pub const NO_DATA_THRESHOLD: f64 = -1.0e38;
/// The value written for a missing measure.
pub const NO_DATA: f64 = -1.0e39;

/// The 8-byte header preceding every `.shp` record.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RecordHeader {
    pub record_number: i32,  // BigEndian; 1-based
    pub content_length: i32, // BigEndian; in 16-bit words
}

impl RecordHeader {
    /// Reads a record header, returning `None` at a clean end of file.
    pub fn read<R: Read>(bor: &mut ByteOrderReader<R>) -> Result<Option<RecordHeader>> {
        let first = match bor.try_read_u8()? {
            Some(b) => b,
            None => return Ok(None),
        };
        let rest = bor.read_bytes(3)?;
        let record_number = BigEndian::read_i32(&[first, rest[0], rest[1], rest[2]]);
        let content_length = bor.read_i32_as(Endianness::BigEndian)?;
        Ok(Some(RecordHeader {
            record_number,
            content_length,
        }))
    }

    pub fn write<W: Write>(&self, bow: &mut ByteOrderWriter<W>) -> Result<()> {
        bow.write_i32_as(self.record_number, Endianness::BigEndian)?;
        bow.write_i32_as(self.content_length, Endianness::BigEndian)?;
        Ok(())
    }

    pub fn content_length_bytes(&self) -> usize {
        self.content_length.max(0) as usize * 2
    }
}

fn measure_from_disk(m: f64) -> Option<f64> {
    if m < NO_DATA_THRESHOLD {
        None
    } else {
        Some(m)
    }
}

/// Reads one record body of `content_length` bytes, starting at the shape
/// type code. Null shapes, MultiPatch and unknown type codes decode to
/// `None`; the reader always ends up at the start of the next record.
pub fn read_shape<R: Read>(
    bor: &mut ByteOrderReader<R>,
    content_length: usize,
    configs: &CodecConfig,
) -> Result<Option<Geometry>> {
    let start = bor.pos();
    bor.set_byte_order(Endianness::LittleEndian);
    let code = bor.read_i32()?;
    let geometry = match ShapeType::from_int(code) {
        None => {
            configs.warn(format!("Unrecognized shape type {}; record skipped.", code))?;
            None
        }
        Some(ShapeType::Null) => None,
        Some(ShapeType::MultiPatch) => {
            configs.warn("MultiPatch shapes are not supported; record read as a null shape.")?;
            None
        }
        Some(st) => match st.base_shape_type() {
            ShapeType::Point => Some(read_point(bor, st, content_length)?),
            ShapeType::MultiPoint => Some(read_multipoint(bor, st, start, content_length)?),
            ShapeType::PolyLine => {
                let parts = read_parts(bor, st, start, content_length)?;
                Some(Geometry::MultiLineString(MultiLineString::new(
                    parts.into_iter().map(LineString::new).collect(),
                )))
            }
            _ => {
                let parts = read_parts(bor, st, start, content_length)?;
                assemble_polygons(parts.into_iter().map(LinearRing::closing).collect())
                    .map(Geometry::MultiPolygon)
            }
        },
    };

    // stay framed even when the body carries trailing bytes
    let consumed = bor.pos() - start;
    if consumed < content_length {
        bor.skip(content_length - consumed)?;
    } else if consumed > content_length {
        return Err(ShapefileError::InvalidGeometry(format!(
            "record body is {} bytes but its header declares {}",
            consumed, content_length
        )));
    }
    Ok(geometry)
}

fn read_point<R: Read>(bor: &mut ByteOrderReader<R>, st: ShapeType, content_length: usize) -> Result<Geometry> {
    let mut v = Vertex::new(bor.read_f64()?, bor.read_f64()?);
    match st.dimension() {
        Dimension::XY => {}
        Dimension::Measure => {
            if content_length >= 28 {
                v.m = measure_from_disk(bor.read_f64()?);
            }
        }
        Dimension::Z => {
            v.z = Some(bor.read_f64()?);
            // the measure is optional on PointZ
            if content_length >= 36 {
                v.m = measure_from_disk(bor.read_f64()?);
            }
        }
    }
    Ok(Geometry::Point(v))
}

fn read_count<R: Read>(bor: &mut ByteOrderReader<R>, what: &str) -> Result<usize> {
    let n = bor.read_i32()?;
    if n < 0 {
        return Err(ShapefileError::InvalidGeometry(format!("negative {} count {}", what, n)));
    }
    Ok(n as usize)
}

/// Reads the optional trailing z and m blocks into `vertices`.
fn read_z_and_m<R: Read>(
    bor: &mut ByteOrderReader<R>,
    st: ShapeType,
    vertices: &mut [Vertex],
    start: usize,
    content_length: usize,
) -> Result<()> {
    let n = vertices.len();
    if st.has_z() {
        bor.skip(16)?; // z range
        for v in vertices.iter_mut() {
            v.z = Some(bor.read_f64()?);
        }
    }
    if st.has_m() {
        // The measure block is optional; only read it if the record has room.
        let remaining = content_length.saturating_sub(bor.pos() - start);
        if remaining >= 16 + 8 * n {
            bor.skip(16)?; // m range
            for v in vertices.iter_mut() {
                v.m = measure_from_disk(bor.read_f64()?);
            }
        }
    }
    Ok(())
}

fn read_multipoint<R: Read>(
    bor: &mut ByteOrderReader<R>,
    st: ShapeType,
    start: usize,
    content_length: usize,
) -> Result<Geometry> {
    bor.skip(32)?; // bounding box; recomputed from the points
    let num_points = read_count(bor, "point")?;
    let mut points = Vec::with_capacity(num_points.min(content_length / 16));
    for _ in 0..num_points {
        points.push(Vertex::new(bor.read_f64()?, bor.read_f64()?));
    }
    read_z_and_m(bor, st, &mut points, start, content_length)?;
    Ok(Geometry::MultiPoint(MultiPoint::new(points)))
}

/// Reads a multi-part body (PolyLine or Polygon) and splits the flat point
/// array into parts.
fn read_parts<R: Read>(
    bor: &mut ByteOrderReader<R>,
    st: ShapeType,
    start: usize,
    content_length: usize,
) -> Result<Vec<Vec<Vertex>>> {
    bor.skip(32)?; // bounding box; recomputed from the points
    let num_parts = read_count(bor, "part")?;
    let num_points = read_count(bor, "point")?;
    let mut part_starts = Vec::with_capacity(num_parts.min(content_length / 4));
    for _ in 0..num_parts {
        part_starts.push(read_count(bor, "part index")?);
    }
    let mut points = Vec::with_capacity(num_points.min(content_length / 16));
    for _ in 0..num_points {
        points.push(Vertex::new(bor.read_f64()?, bor.read_f64()?));
    }
    read_z_and_m(bor, st, &mut points, start, content_length)?;

    let mut parts = Vec::with_capacity(num_parts);
    for (i, &first) in part_starts.iter().enumerate() {
        let last = if i + 1 < num_parts { part_starts[i + 1] } else { num_points };
        if first > last || last > num_points {
            return Err(ShapefileError::InvalidGeometry(format!(
                "part {} spans points {}..{} of {}",
                i, first, last, num_points
            )));
        }
        if first < last {
            parts.push(points[first..last].to_vec());
        }
    }
    Ok(parts)
}

/// Number of parts and points a geometry contributes to a record.
fn counts(geometry: &Geometry) -> (usize, usize) {
    match geometry {
        Geometry::Point(_) => (0, 1),
        Geometry::MultiPoint(mp) => (0, mp.len()),
        Geometry::LineString(ls) => (1, ls.len()),
        Geometry::MultiLineString(mls) => (mls.len(), mls.num_points()),
        Geometry::Polygon(p) => (1 + p.holes().len(), p.num_points()),
        Geometry::MultiPolygon(mp) => (
            mp.polygons().iter().map(|p| 1 + p.holes().len()).sum(),
            mp.num_points(),
        ),
    }
}

/// Size in bytes of a record body, including the 4-byte shape type, when
/// `geometry` is written into a file of type `shape_type`.
pub fn content_length_bytes(geometry: Option<&Geometry>, shape_type: ShapeType) -> usize {
    let geometry = match geometry {
        Some(g) => g,
        None => return 4,
    };
    let (num_parts, num_points) = counts(geometry);
    let z_block = if shape_type.has_z() { 16 + 8 * num_points } else { 0 };
    let m_block = if shape_type.has_m() { 16 + 8 * num_points } else { 0 };
    match shape_type.base_shape_type() {
        ShapeType::Point => {
            let z = if shape_type.has_z() { 8 } else { 0 };
            let m = if shape_type.has_m() { 8 } else { 0 };
            4 + 16 + z + m
        }
        ShapeType::MultiPoint => 4 + 32 + 4 + 16 * num_points + z_block + m_block,
        ShapeType::PolyLine | ShapeType::Polygon => {
            4 + 32 + 4 + 4 + 4 * num_parts + 16 * num_points + z_block + m_block
        }
        _ => 4,
    }
}

/// Checks that a geometry may be written into a file of `shape_type`. A
/// geometry with more ordinates than the file holds loses them, with a
/// warning.
pub fn check_compatible(geometry: &Geometry, shape_type: ShapeType, configs: &CodecConfig) -> Result<()> {
    let found = geometry.shape_type();
    if found.base_shape_type() != shape_type.base_shape_type() {
        return Err(ShapefileError::ShapeTypeMismatch {
            expected: shape_type,
            found,
        });
    }
    if geometry.dimension() > shape_type.dimension() {
        configs.warn(format!(
            "{} geometry written to a {} file; extra ordinates are dropped.",
            found, shape_type
        ))?;
    }
    if shape_type.has_z() && geometry.vertices().any(|v| v.z.is_none()) {
        configs.warn(format!(
            "{} geometry has vertices without z-values; they are written to the {} file as 0.",
            found, shape_type
        ))?;
    }
    Ok(())
}

/// The extent a record adds to the file header. Missing z-values in a Z
/// file are stored as 0, so 0 joins the z range.
pub(crate) fn written_envelope(geometry: &Geometry, shape_type: ShapeType) -> Envelope {
    let mut env = geometry.envelope();
    if shape_type.has_z() {
        if let Some(v) = geometry.vertices().find(|v| v.z.is_none()) {
            env.expand_to_vertex(&Vertex::new_z(v.x, v.y, 0f64, None));
        }
    }
    env
}

fn write_point_xy<W: Write>(bow: &mut ByteOrderWriter<W>, v: &Vertex) -> Result<()> {
    bow.write_f64(v.x)?;
    bow.write_f64(v.y)?;
    Ok(())
}

fn write_bbox<W: Write>(bow: &mut ByteOrderWriter<W>, env: &Envelope) -> Result<()> {
    bow.write_f64(env.min_x())?;
    bow.write_f64(env.min_y())?;
    bow.write_f64(env.max_x())?;
    bow.write_f64(env.max_y())?;
    Ok(())
}

/// Writes the z and m blocks for a flat vertex array.
fn write_z_and_m<'a, W: Write, I>(bow: &mut ByteOrderWriter<W>, st: ShapeType, vertices: I) -> Result<()>
where
    I: Iterator<Item = &'a Vertex> + Clone,
{
    if st.has_z() {
        let zs = vertices.clone().map(|v| v.z.unwrap_or(0f64));
        let (lo, hi) = zs.clone().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), z| {
            (lo.min(z), hi.max(z))
        });
        if lo <= hi {
            bow.write_f64(lo)?;
            bow.write_f64(hi)?;
        } else {
            bow.write_f64(0f64)?;
            bow.write_f64(0f64)?;
        }
        for z in zs {
            bow.write_f64(z)?;
        }
    }
    if st.has_m() {
        let (lo, hi) = vertices
            .clone()
            .filter_map(|v| v.m)
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), m| (lo.min(m), hi.max(m)));
        if lo <= hi {
            bow.write_f64(lo)?;
            bow.write_f64(hi)?;
        } else {
            bow.write_f64(NO_DATA)?;
            bow.write_f64(NO_DATA)?;
        }
        for v in vertices {
            bow.write_f64(v.m.unwrap_or(NO_DATA))?;
        }
    }
    Ok(())
}

fn write_multipart<W: Write>(
    bow: &mut ByteOrderWriter<W>,
    st: ShapeType,
    env: &Envelope,
    parts: &[&[Vertex]],
) -> Result<()> {
    write_bbox(bow, env)?;
    let num_points: usize = parts.iter().map(|p| p.len()).sum();
    bow.write_i32(parts.len() as i32)?;
    bow.write_i32(num_points as i32)?;
    let mut first = 0usize;
    for part in parts {
        bow.write_i32(first as i32)?;
        first += part.len();
    }
    for part in parts {
        for v in part.iter() {
            write_point_xy(bow, v)?;
        }
    }
    write_z_and_m(bow, st, parts.iter().flat_map(|p| p.iter()))
}

/// Writes a record body, starting with the shape type code. A `None`
/// geometry is written as a null shape.
pub fn write_shape<W: Write>(
    bow: &mut ByteOrderWriter<W>,
    geometry: Option<&Geometry>,
    shape_type: ShapeType,
) -> Result<()> {
    bow.set_byte_order(Endianness::LittleEndian);
    let geometry = match geometry {
        Some(g) => g,
        None => {
            bow.write_i32(ShapeType::Null.to_int())?;
            return Ok(());
        }
    };
    bow.write_i32(shape_type.to_int())?;
    match geometry {
        Geometry::Point(v) => {
            write_point_xy(bow, v)?;
            if shape_type.has_z() {
                bow.write_f64(v.z.unwrap_or(0f64))?;
            }
            if shape_type.has_m() {
                bow.write_f64(v.m.unwrap_or(NO_DATA))?;
            }
        }
        Geometry::MultiPoint(mp) => {
            write_bbox(bow, &mp.envelope())?;
            bow.write_i32(mp.len() as i32)?;
            for v in mp.points() {
                write_point_xy(bow, v)?;
            }
            write_z_and_m(bow, shape_type, mp.points().iter())?;
        }
        Geometry::LineString(ls) => {
            write_multipart(bow, shape_type, &ls.envelope(), &[ls.vertices()])?;
        }
        Geometry::MultiLineString(mls) => {
            let parts: Vec<&[Vertex]> = mls.lines().iter().map(|l| l.vertices()).collect();
            write_multipart(bow, shape_type, &mls.envelope(), &parts)?;
        }
        Geometry::Polygon(p) => {
            let rings = flatten_polygons(std::slice::from_ref(p));
            let parts: Vec<&[Vertex]> = rings.iter().map(|r| r.vertices()).collect();
            write_multipart(bow, shape_type, &p.envelope(), &parts)?;
        }
        Geometry::MultiPolygon(mp) => {
            let rings = flatten_polygons(mp.polygons());
            let parts: Vec<&[Vertex]> = rings.iter().map(|r| r.vertices()).collect();
            write_multipart(bow, shape_type, &mp.envelope(), &parts)?;
        }
    }
    Ok(())
}
