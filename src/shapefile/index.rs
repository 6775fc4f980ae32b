/*
This code is part of the esri_shapefile library.
Authors: esri_shapefile contributors
Created: 19/10/2026
Last Modified: 19/10/2026
License: MIT
*/
use super::header::{ShapefileHeader, HEADER_LENGTH};
use crate::configs::CodecConfig;
use crate::error::Result;
use byteorder::{BigEndian, ByteOrder};
use esri_common::utils::{ByteOrderReader, ByteOrderWriter, Endianness};
use std::io::prelude::*;

/// One 8-byte `.shx` entry. Both values are in 16-bit words.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    pub offset: i32,         // BigEndian; start of the record header in the .shp
    pub content_length: i32, // BigEndian; same value as the record header's
}

impl IndexEntry {
    pub const SIZE: usize = 8;

    pub fn new(offset_bytes: usize, content_length_bytes: usize) -> IndexEntry {
        IndexEntry {
            offset: (offset_bytes / 2) as i32,
            content_length: (content_length_bytes / 2) as i32,
        }
    }

    pub fn read<R: Read>(bor: &mut ByteOrderReader<R>) -> Result<Option<IndexEntry>> {
        let first = match bor.try_read_u8()? {
            Some(b) => b,
            None => return Ok(None),
        };
        let rest = bor.read_bytes(3)?;
        Ok(Some(IndexEntry {
            offset: BigEndian::read_i32(&[first, rest[0], rest[1], rest[2]]),
            content_length: bor.read_i32_as(Endianness::BigEndian)?,
        }))
    }

    pub fn write<W: Write>(&self, bow: &mut ByteOrderWriter<W>) -> Result<()> {
        bow.write_i32_as(self.offset, Endianness::BigEndian)?;
        bow.write_i32_as(self.content_length, Endianness::BigEndian)?;
        Ok(())
    }

    pub fn offset_bytes(&self) -> usize {
        self.offset.max(0) as usize * 2
    }
}

/// A fully-read `.shx` file.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ShapeIndex {
    pub header: ShapefileHeader,
    pub entries: Vec<IndexEntry>,
}

impl ShapeIndex {
    pub fn read<R: Read>(reader: R, configs: &CodecConfig) -> Result<ShapeIndex> {
        let mut bor = ByteOrderReader::new(reader, Endianness::BigEndian);
        let header = ShapefileHeader::read(&mut bor, configs)?;
        let expected = header.file_length_bytes().saturating_sub(HEADER_LENGTH) / IndexEntry::SIZE;
        let mut entries = Vec::with_capacity(expected);
        while let Some(entry) = IndexEntry::read(&mut bor)? {
            entries.push(entry);
        }
        if entries.len() != expected {
            configs.warn(format!(
                "Index header declares {} entries but {} were found.",
                expected,
                entries.len()
            ))?;
        }
        Ok(ShapeIndex { header, entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The `.shx` length in bytes for `num_records` entries.
    pub fn file_length_bytes(num_records: usize) -> usize {
        HEADER_LENGTH + num_records * IndexEntry::SIZE
    }
}
