/*
This code is part of the esri_shapefile library.
Authors: esri_shapefile contributors
Created: 19/10/2026
Last Modified: 19/10/2026
License: MIT
*/
use super::codec::{read_shape, RecordHeader};
use super::header::ShapefileHeader;
use super::paths::{open_input, read_projection, ShapefilePaths};
use super::record::{Attributes, ShapeFileRecord};
use crate::configs::CodecConfig;
use crate::dbase::{AttributeType, DbaseField, DbaseReader, DbaseRecord, FieldData};
use crate::error::Result;
use crate::geometry::ShapeType;
use esri_common::utils::{ByteOrderReader, Endianness};
use std::io::prelude::*;
use std::path::Path;
use std::sync::Arc;

/// Reads a `.shp` and its `.dbf` in step, one record at a time.
pub struct ShapeFileReader<S: Read = Box<dyn Read>, D: Read = Box<dyn Read>> {
    shp: ByteOrderReader<S>,
    dbf: DbaseReader<D>,
    header: ShapefileHeader,
    names: Arc<[String]>,
    projection: Option<String>,
    configs: CodecConfig,
    ordinal: usize,
    pending: Option<DbaseRecord>,
    warned_missing_rows: bool,
    done: bool,
}

impl ShapeFileReader {
    /// Opens a data set by base name or by the name of any member file.
    /// Gzip-compressed members are decompressed on the fly.
    pub fn open<P: AsRef<Path>>(path: P, configs: CodecConfig) -> Result<ShapeFileReader> {
        let paths = ShapefilePaths::resolve(path)?;
        configs.progress(format!("reading {}", paths.shp.display()));
        let mut reader = ShapeFileReader::from_readers(open_input(&paths.shp)?, open_input(&paths.dbf)?, configs)?;
        reader.projection = read_projection(&paths.prj)?;
        Ok(reader)
    }
}

impl<S: Read, D: Read> ShapeFileReader<S, D> {
    /// Reads both file headers, leaving the reader at the first record.
    pub fn from_readers(shp: S, dbf: D, configs: CodecConfig) -> Result<ShapeFileReader<S, D>> {
        let mut shp = ByteOrderReader::new(shp, Endianness::BigEndian);
        let header = ShapefileHeader::read(&mut shp, &configs)?;
        let dbf = DbaseReader::new(dbf, configs)?;
        let names: Arc<[String]> = dbf.field_names().into();
        Ok(ShapeFileReader {
            shp,
            dbf,
            header,
            names,
            projection: None,
            configs,
            ordinal: 0,
            pending: None,
            warned_missing_rows: false,
            done: false,
        })
    }

    pub fn header(&self) -> &ShapefileHeader {
        &self.header
    }

    pub fn shape_type(&self) -> ShapeType {
        self.header.shape_type
    }

    pub fn projection(&self) -> Option<&str> {
        self.projection.as_deref()
    }

    pub fn fields(&self) -> &[DbaseField] {
        self.dbf.fields()
    }

    pub fn field_names(&self) -> Vec<String> {
        self.names.to_vec()
    }

    pub fn field_types(&self) -> Vec<AttributeType> {
        self.dbf.field_types()
    }

    /// True when both readers hold the same shape type and the same field
    /// names, types, lengths and decimal counts, in the same order.
    pub fn equiv<S2: Read, D2: Read>(&self, other: &ShapeFileReader<S2, D2>) -> bool {
        self.shape_type() == other.shape_type() && self.fields() == other.fields()
    }

    /// Returns the next record, or `None` at the end of the `.shp`.
    pub fn read(&mut self) -> Result<Option<ShapeFileRecord>> {
        if self.done {
            return Ok(None);
        }
        let rh = match RecordHeader::read(&mut self.shp)? {
            Some(rh) => rh,
            None => {
                self.done = true;
                self.check_excess_rows()?;
                return Ok(None);
            }
        };
        let geometry = read_shape(&mut self.shp, rh.content_length_bytes(), &self.configs)?;
        if let Some(g) = &geometry {
            if g.base_shape_type() != self.header.shape_type.base_shape_type() {
                self.configs.warn(format!(
                    "Record {} holds a {} in a {} file.",
                    rh.record_number,
                    g.base_shape_type(),
                    self.header.shape_type
                ))?;
            }
        }
        self.ordinal += 1;
        let values = self.attributes_for(self.ordinal)?;
        Ok(Some(ShapeFileRecord {
            index: rh.record_number.max(0) as usize,
            geometry,
            attributes: Attributes::new(self.names.clone(), values),
        }))
    }

    /// Reads all remaining records.
    pub fn read_records(&mut self) -> Result<Vec<ShapeFileRecord>> {
        let mut records = vec![];
        while let Some(record) = self.read()? {
            records.push(record);
        }
        Ok(records)
    }

    /// The attribute row at physical position `ordinal`, or nulls when it is
    /// deleted or missing.
    fn attributes_for(&mut self, ordinal: usize) -> Result<Vec<FieldData>> {
        loop {
            if self.pending.is_none() {
                self.pending = self.dbf.read()?;
            }
            match self.pending.take() {
                None => {
                    if !self.warned_missing_rows {
                        self.warned_missing_rows = true;
                        self.configs.warn(format!(
                            "The attribute table has no row for record {}; attributes are null.",
                            ordinal
                        ))?;
                    }
                    return Ok(vec![]);
                }
                Some(row) if row.index < ordinal => continue,
                Some(row) if row.index == ordinal => return Ok(row.values),
                Some(row) => {
                    log::debug!("attribute row {} is deleted; record {} has null attributes", ordinal, ordinal);
                    self.pending = Some(row);
                    return Ok(vec![]);
                }
            }
        }
    }

    fn check_excess_rows(&mut self) -> Result<()> {
        let mut excess = usize::from(self.pending.take().is_some());
        while self.dbf.read()?.is_some() {
            excess += 1;
        }
        if excess > 0 {
            self.configs.warn(format!(
                "The attribute table has {} more rows than the shapefile has records; they are ignored.",
                excess
            ))?;
        }
        Ok(())
    }
}

impl<S: Read, D: Read> Iterator for ShapeFileReader<S, D> {
    type Item = Result<ShapeFileRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read().transpose()
    }
}
