/*
This code is part of the esri_shapefile library.
Authors: esri_shapefile contributors
Created: 19/10/2026
Last Modified: 19/10/2026
License: MIT
*/
use crate::configs::CodecConfig;
use crate::error::{Result, ShapefileError};
use crate::geometry::{Envelope, ShapeType};
use esri_common::utils::{ByteOrderReader, ByteOrderWriter, Endianness};
use std::fmt;
use std::io::prelude::*;

pub const FILE_CODE: i32 = 9994;
pub const VERSION: i32 = 1000;
pub const HEADER_LENGTH: usize = 100;

/// The 100-byte header shared by the `.shp` and `.shx` files.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapefileHeader {
    pub file_code: i32,        // BigEndian; value is 9994
    pub unused: [i32; 5],      // BigEndian; kept for round trips
    pub file_length: i32,      // BigEndian; in 16-bit words
    pub version: i32,          // LittleEndian
    pub shape_type: ShapeType, // LittleEndian
    pub x_min: f64,            // LittleEndian
    pub y_min: f64,            // LittleEndian
    pub x_max: f64,            // LittleEndian
    pub y_max: f64,            // LittleEndian
    pub z_min: f64,            // LittleEndian; 0 unless the shape type is z
    pub z_max: f64,            // LittleEndian; 0 unless the shape type is z
    pub m_min: f64,            // LittleEndian; 0 unless the shape type is measured
    pub m_max: f64,            // LittleEndian; 0 unless the shape type is measured
}

impl Default for ShapefileHeader {
    fn default() -> ShapefileHeader {
        ShapefileHeader {
            file_code: FILE_CODE,
            unused: [0i32; 5],
            file_length: (HEADER_LENGTH / 2) as i32,
            version: VERSION,
            shape_type: ShapeType::Null,
            x_min: 0f64,
            y_min: 0f64,
            x_max: 0f64,
            y_max: 0f64,
            z_min: 0f64,
            z_max: 0f64,
            m_min: 0f64,
            m_max: 0f64,
        }
    }
}

impl ShapefileHeader {
    /// Builds a header from the final record set: its file length in bytes
    /// and the union of the record envelopes.
    pub fn new(shape_type: ShapeType, extent: &Envelope, file_length_bytes: usize) -> ShapefileHeader {
        let mut header = ShapefileHeader {
            shape_type,
            file_length: (file_length_bytes / 2) as i32,
            ..Default::default()
        };
        if let Some(bb) = extent.bbox() {
            header.x_min = bb.min_x;
            header.y_min = bb.min_y;
            header.x_max = bb.max_x;
            header.y_max = bb.max_y;
        }
        if shape_type.has_z() {
            if let Some(z) = extent.z_range() {
                header.z_min = z.min;
                header.z_max = z.max;
            }
        }
        if shape_type.has_m() {
            if let Some(m) = extent.m_range() {
                header.m_min = m.min;
                header.m_max = m.max;
            }
        }
        header
    }

    /// Reads the header, leaving the reader positioned at the first record.
    pub fn read<R: Read>(bor: &mut ByteOrderReader<R>, configs: &CodecConfig) -> Result<ShapefileHeader> {
        // Note: the shapefile format uses mixed endianness; the first seven
        // integers are big-endian and everything after is little-endian.
        bor.set_byte_order(Endianness::BigEndian);
        let file_code = bor.read_i32()?;
        if file_code != FILE_CODE {
            configs.warn(ShapefileError::InvalidFileCode(file_code).to_string())?;
        }
        let mut unused = [0i32; 5];
        for u in unused.iter_mut() {
            *u = bor.read_i32()?;
        }
        let file_length = bor.read_i32()?;

        // the rest of the header is in LittleEndian format
        bor.set_byte_order(Endianness::LittleEndian);
        let version = bor.read_i32()?;
        if version != VERSION {
            configs.warn(format!(
                "Unexpected shapefile version {}; expected {}.",
                version, VERSION
            ))?;
        }
        let st = bor.read_i32()?;
        // records carry their own type, so an unknown file type is not fatal
        let shape_type = match ShapeType::from_int(st) {
            Some(shape_type) => shape_type,
            None => {
                configs.warn(format!(
                    "{}; the file is read as type {}.",
                    ShapefileError::UnsupportedShapeType(st),
                    ShapeType::Null
                ))?;
                ShapeType::Null
            }
        };

        Ok(ShapefileHeader {
            file_code,
            unused,
            file_length,
            version,
            shape_type,
            x_min: bor.read_f64()?,
            y_min: bor.read_f64()?,
            x_max: bor.read_f64()?,
            y_max: bor.read_f64()?,
            z_min: bor.read_f64()?,
            z_max: bor.read_f64()?,
            m_min: bor.read_f64()?,
            m_max: bor.read_f64()?,
        })
    }

    pub fn write<W: Write>(&self, bow: &mut ByteOrderWriter<W>) -> Result<()> {
        bow.set_byte_order(Endianness::BigEndian);
        bow.write_i32(self.file_code)?;
        for u in &self.unused {
            bow.write_i32(*u)?;
        }
        bow.write_i32(self.file_length)?;

        bow.set_byte_order(Endianness::LittleEndian);
        bow.write_i32(self.version)?;
        bow.write_i32(self.shape_type.to_int())?;
        bow.write_f64(self.x_min)?;
        bow.write_f64(self.y_min)?;
        bow.write_f64(self.x_max)?;
        bow.write_f64(self.y_max)?;
        bow.write_f64(self.z_min)?;
        bow.write_f64(self.z_max)?;
        bow.write_f64(self.m_min)?;
        bow.write_f64(self.m_max)?;
        Ok(())
    }

    /// The file length in bytes.
    pub fn file_length_bytes(&self) -> usize {
        self.file_length.max(0) as usize * 2
    }
}

impl fmt::Display for ShapefileHeader {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "file_code: {}
file_length: {}
version: {}
shape_type: {}
x_min: {}
x_max: {}
y_min: {}
y_max: {}
z_min: {}
z_max: {}
m_min: {}
m_max: {}",
            self.file_code,
            self.file_length,
            self.version,
            self.shape_type,
            self.x_min,
            self.x_max,
            self.y_min,
            self.y_max,
            self.z_min,
            self.z_max,
            self.m_min,
            self.m_max
        )
    }
}
