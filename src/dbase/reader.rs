/*
This code is part of the esri_shapefile library.
Authors: esri_shapefile contributors
Created: 19/10/2026
Last Modified: 19/10/2026
License: MIT
*/
use super::field::{AttributeType, DbaseField};
use super::header::{DbaseHeader, FILE_TERMINATOR};
use super::record::{decode_field, DbaseRecord, DELETED_RECORD};
use crate::configs::CodecConfig;
use crate::error::Result;
use esri_common::utils::{ByteOrderReader, Endianness};
use std::io::prelude::*;

/// Reads a `.dbf` table one live row at a time.
pub struct DbaseReader<R: Read> {
    bor: ByteOrderReader<R>,
    header: DbaseHeader,
    configs: CodecConfig,
    rows_read: usize,
    done: bool,
}

impl<R: Read> DbaseReader<R> {
    /// Reads the header, leaving the reader at the first row.
    pub fn new(reader: R, configs: CodecConfig) -> Result<DbaseReader<R>> {
        let mut bor = ByteOrderReader::new(reader, Endianness::LittleEndian);
        let header = DbaseHeader::read(&mut bor, &configs)?;
        configs.progress(format!(
            "dBASE table with {} fields and {} records",
            header.fields.len(),
            header.num_records
        ));
        Ok(DbaseReader {
            bor,
            header,
            configs,
            rows_read: 0,
            done: false,
        })
    }

    pub fn header(&self) -> &DbaseHeader {
        &self.header
    }

    pub fn fields(&self) -> &[DbaseField] {
        &self.header.fields
    }

    pub fn field_names(&self) -> Vec<String> {
        self.header.field_names()
    }

    pub fn field_types(&self) -> Vec<AttributeType> {
        self.header.fields.iter().map(|f| f.attribute_type()).collect()
    }

    /// Returns the next live row, or `None` once the table is exhausted.
    /// Rows flagged as deleted are skipped; the index of each returned row
    /// still counts them.
    pub fn read(&mut self) -> Result<Option<DbaseRecord>> {
        let row_bytes = (self.header.record_length as usize).saturating_sub(1);
        while !self.done {
            if self.rows_read >= self.header.num_records as usize {
                self.done = true;
                break;
            }
            let flag = match self.bor.try_read_u8()? {
                Some(FILE_TERMINATOR) | None => {
                    self.done = true;
                    self.configs.warn(format!(
                        "dBASE table ended after {} of {} records.",
                        self.rows_read, self.header.num_records
                    ))?;
                    break;
                }
                Some(flag) => flag,
            };
            let raw = self.bor.read_bytes(row_bytes)?;
            self.rows_read += 1;
            if flag == DELETED_RECORD {
                continue;
            }
            let mut values = Vec::with_capacity(self.header.fields.len());
            let mut start = 0usize;
            for field in &self.header.fields {
                let end = start + field.length as usize;
                values.push(decode_field(field, &raw[start..end]));
                start = end;
            }
            return Ok(Some(DbaseRecord {
                index: self.rows_read,
                values,
            }));
        }
        Ok(None)
    }

    pub fn into_inner(self) -> R {
        self.bor.into_inner()
    }
}

impl<R: Read> Iterator for DbaseReader<R> {
    type Item = Result<DbaseRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read().transpose()
    }
}
