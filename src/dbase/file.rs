/*
This code is part of the esri_shapefile library.
Authors: esri_shapefile contributors
Created: 19/10/2026
Last Modified: 19/10/2026
License: MIT
*/
use super::field::{AttributeType, DbaseField, FieldData};
use super::header::{checked_lengths, DbaseHeader, FILE_TERMINATOR};
use super::reader::DbaseReader;
use super::record::DbaseRecord;
use super::writer::encode_row;
use crate::configs::CodecConfig;
use crate::error::{Result, ShapefileError};
use esri_common::utils::{ByteOrderWriter, Endianness};
use std::io::prelude::*;

/// An attribute table held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct DbaseFile {
    fields: Vec<DbaseField>,
    records: Vec<DbaseRecord>,
    configs: CodecConfig,
}

impl DbaseFile {
    pub fn new(configs: CodecConfig) -> DbaseFile {
        DbaseFile {
            fields: vec![],
            records: vec![],
            configs,
        }
    }

    /// Reads every live row of a table.
    pub fn read<R: Read>(reader: R, configs: CodecConfig) -> Result<DbaseFile> {
        let mut dbf = DbaseReader::new(reader, configs)?;
        let fields = dbf.fields().to_vec();
        let mut records = Vec::with_capacity(dbf.header().num_records as usize);
        while let Some(record) = dbf.read()? {
            records.push(record);
        }
        Ok(DbaseFile {
            fields,
            records,
            configs,
        })
    }

    pub fn fields(&self) -> &[DbaseField] {
        &self.fields
    }

    pub fn field_names(&self) -> Vec<String> {
        self.fields.iter().map(|f| f.name.clone()).collect()
    }

    pub fn field_types(&self) -> Vec<AttributeType> {
        self.fields.iter().map(|f| f.attribute_type()).collect()
    }

    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    pub fn records(&self) -> &[DbaseRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<DbaseRecord> {
        self.records
    }

    pub fn num_records(&self) -> usize {
        self.records.len()
    }

    /// Appends a column, filling existing rows with nulls. Fails without
    /// changing the table if the type cannot be stored, the (possibly
    /// truncated) name is already taken or the record would grow too wide.
    pub fn add_column(&mut self, name: &str, attribute_type: AttributeType) -> Result<&DbaseField> {
        let field = DbaseField::from_attribute(name, &attribute_type, &self.configs)?;
        if self.field_index(&field.name).is_some() {
            return Err(ShapefileError::InvalidField(format!(
                "a field named '{}' already exists",
                field.name
            )));
        }
        let mut widened = self.fields.clone();
        widened.push(field.clone());
        checked_lengths(&widened)?;
        for record in self.records.iter_mut() {
            record.values.push(FieldData::Null);
        }
        self.fields.push(field);
        Ok(&self.fields[self.fields.len() - 1])
    }

    /// Appends a row and returns its 1-based index.
    pub fn add_record(&mut self, values: Vec<FieldData>) -> Result<usize> {
        if values.len() != self.fields.len() {
            return Err(ShapefileError::InvalidField(format!(
                "row has {} values for {} fields",
                values.len(),
                self.fields.len()
            )));
        }
        let index = self.records.last().map(|r| r.index).unwrap_or(0) + 1;
        self.records.push(DbaseRecord { index, values });
        Ok(index)
    }

    /// Writes the table. Rows are written in order and renumbered densely.
    pub fn write<W: Write>(&mut self, writer: W) -> Result<()> {
        let header = DbaseHeader::new(self.fields.clone(), self.records.len() as u32)?;
        let mut bow = ByteOrderWriter::new(writer, Endianness::LittleEndian);
        header.write(&mut bow)?;
        for (i, record) in self.records.iter_mut().enumerate() {
            bow.write_bytes(&encode_row(&self.fields, &record.values, &self.configs)?)?;
            record.index = i + 1;
        }
        bow.write_u8(FILE_TERMINATOR)?;
        bow.flush()?;
        Ok(())
    }
}
