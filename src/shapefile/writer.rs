/*
This code is part of the esri_shapefile library.
Authors: esri_shapefile contributors
Created: 19/10/2026
Last Modified: 19/10/2026
License: MIT
*/
use super::codec::{check_compatible, content_length_bytes, write_shape, written_envelope, RecordHeader};
use super::header::{ShapefileHeader, HEADER_LENGTH};
use super::index::{IndexEntry, ShapeIndex};
use super::paths::{write_projection, ShapefilePaths};
use super::record::ShapeFileRecord;
use crate::configs::CodecConfig;
use crate::dbase::{DbaseField, DbaseWriter, FieldData};
use crate::error::Result;
use crate::geometry::{Envelope, Geometry, ShapeType};
use esri_common::utils::{ByteOrderWriter, Endianness};
use std::fs::File;
use std::io::prelude::*;
use std::io::BufWriter;
use std::path::Path;

/// What a finished writer produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WriteSummary {
    pub num_records: usize,
    pub shp_length_bytes: usize,
    pub shx_length_bytes: usize,
    pub extent: Envelope,
}

/// Writes a `.shp`, `.shx` and `.dbf` one record at a time.
///
/// The file length and extent in the two shape headers are only known once
/// every record is written. `finish` rewrites both headers in place; a
/// writer dropped without `finish` does the same but can only log failures.
pub struct ShapeFileWriter<W: Write + Seek = BufWriter<File>> {
    shp: ByteOrderWriter<W>,
    shx: ByteOrderWriter<W>,
    dbf: DbaseWriter<W>,
    shape_type: ShapeType,
    extent: Envelope,
    shp_length: usize,
    num_records: usize,
    configs: CodecConfig,
    finished: bool,
}

impl ShapeFileWriter {
    /// Creates the member files for `path`, a base name or any member file
    /// name. A projection, if given, is written to the `.prj` straight away.
    pub fn create<P: AsRef<Path>>(
        path: P,
        shape_type: ShapeType,
        fields: Vec<DbaseField>,
        projection: Option<&str>,
        configs: CodecConfig,
    ) -> Result<ShapeFileWriter> {
        let paths = ShapefilePaths::for_output(path);
        configs.progress(format!("writing {}", paths.shp.display()));
        if let Some(wkt) = projection {
            write_projection(&paths.prj, wkt)?;
        }
        ShapeFileWriter::new(
            BufWriter::new(File::create(&paths.shp)?),
            BufWriter::new(File::create(&paths.shx)?),
            BufWriter::new(File::create(&paths.dbf)?),
            shape_type,
            fields,
            configs,
        )
    }
}

impl<W: Write + Seek> ShapeFileWriter<W> {
    /// Writes placeholder headers to the three sinks.
    pub fn new(
        shp: W,
        shx: W,
        dbf: W,
        shape_type: ShapeType,
        fields: Vec<DbaseField>,
        configs: CodecConfig,
    ) -> Result<ShapeFileWriter<W>> {
        let placeholder = ShapefileHeader {
            shape_type,
            ..Default::default()
        };
        let mut shp = ByteOrderWriter::new(shp, Endianness::BigEndian);
        placeholder.write(&mut shp)?;
        let mut shx = ByteOrderWriter::new(shx, Endianness::BigEndian);
        placeholder.write(&mut shx)?;
        let dbf = DbaseWriter::new(dbf, fields, configs)?;
        Ok(ShapeFileWriter {
            shp,
            shx,
            dbf,
            shape_type,
            extent: Envelope::empty(),
            shp_length: HEADER_LENGTH,
            num_records: 0,
            configs,
            finished: false,
        })
    }

    pub fn shape_type(&self) -> ShapeType {
        self.shape_type
    }

    pub fn fields(&self) -> &[DbaseField] {
        self.dbf.fields()
    }

    pub fn num_records(&self) -> usize {
        self.num_records
    }

    /// Appends a record. Its index is ignored; records are numbered in the
    /// order they are written.
    pub fn write(&mut self, record: &ShapeFileRecord) -> Result<usize> {
        self.write_shape(record.geometry.as_ref(), record.attributes.values())
    }

    /// Appends a geometry (or a null shape) with its attribute values and
    /// returns its record number.
    pub fn write_shape(&mut self, geometry: Option<&Geometry>, values: &[FieldData]) -> Result<usize> {
        if let Some(g) = geometry {
            check_compatible(g, self.shape_type, &self.configs)?;
        }
        // the attribute row is validated before any shape bytes go out
        self.dbf.write(values)?;

        let record_number = self.num_records + 1;
        let content_length = content_length_bytes(geometry, self.shape_type);
        RecordHeader {
            record_number: record_number as i32,
            content_length: (content_length / 2) as i32,
        }
        .write(&mut self.shp)?;
        write_shape(&mut self.shp, geometry, self.shape_type)?;
        IndexEntry::new(self.shp_length, content_length).write(&mut self.shx)?;

        self.shp_length += 8 + content_length;
        self.num_records = record_number;
        if let Some(g) = geometry {
            self.extent.expand_to(&written_envelope(g, self.shape_type));
        }
        Ok(record_number)
    }

    fn close(&mut self) -> Result<WriteSummary> {
        self.finished = true;
        let shx_length = ShapeIndex::file_length_bytes(self.num_records);

        let header = ShapefileHeader::new(self.shape_type, &self.extent, self.shp_length);
        self.shp.seek_from_start(0)?;
        header.write(&mut self.shp)?;
        self.shp.seek_end()?;
        self.shp.flush()?;

        let header = ShapefileHeader::new(self.shape_type, &self.extent, shx_length);
        self.shx.seek_from_start(0)?;
        header.write(&mut self.shx)?;
        self.shx.seek_end()?;
        self.shx.flush()?;

        self.dbf.close()?;
        self.configs.progress(format!("wrote {} records", self.num_records));
        Ok(WriteSummary {
            num_records: self.num_records,
            shp_length_bytes: self.shp_length,
            shx_length_bytes: shx_length,
            extent: self.extent,
        })
    }

    /// Rewrites the headers with the final file lengths and extent.
    pub fn finish(mut self) -> Result<WriteSummary> {
        self.close()
    }
}

impl<W: Write + Seek> Drop for ShapeFileWriter<W> {
    fn drop(&mut self) {
        if !self.finished {
            if let Err(e) = self.close() {
                log::error!("failed to finalize shapefile: {}", e);
            }
        }
    }
}
