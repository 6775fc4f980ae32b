/*
This code is part of the esri_shapefile library.
Authors: esri_shapefile contributors
Created: 19/10/2026
Last Modified: 19/10/2026
License: MIT
*/
use super::field::{DbaseField, FieldData};
use super::header::{DbaseHeader, FILE_TERMINATOR};
use super::record::{encode_field, LIVE_RECORD};
use crate::configs::CodecConfig;
use crate::error::{Result, ShapefileError};
use esri_common::utils::{ByteOrderWriter, Endianness};
use std::io::prelude::*;

/// Byte offset of the record count in the table header.
const RECORD_COUNT_OFFSET: u64 = 4;

/// Writes a `.dbf` table row by row. The record count is not known until
/// the end, so the header is patched by `finish`; dropping an unfinished
/// writer patches it on a best-effort basis.
pub struct DbaseWriter<W: Write + Seek> {
    bow: ByteOrderWriter<W>,
    header: DbaseHeader,
    configs: CodecConfig,
    finished: bool,
}

impl<W: Write + Seek> DbaseWriter<W> {
    /// Writes a provisional header with a zero record count.
    pub fn new(writer: W, fields: Vec<DbaseField>, configs: CodecConfig) -> Result<DbaseWriter<W>> {
        let mut bow = ByteOrderWriter::new(writer, Endianness::LittleEndian);
        let header = DbaseHeader::new(fields, 0)?;
        header.write(&mut bow)?;
        Ok(DbaseWriter {
            bow,
            header,
            configs,
            finished: false,
        })
    }

    pub fn fields(&self) -> &[DbaseField] {
        &self.header.fields
    }

    pub fn num_records(&self) -> u32 {
        self.header.num_records
    }

    /// Appends one live row. `values` must hold one value per field.
    pub fn write(&mut self, values: &[FieldData]) -> Result<()> {
        if self.finished {
            return Err(ShapefileError::InvalidField("the table has already been finished".to_string()));
        }
        let row = encode_row(&self.header.fields, values, &self.configs)?;
        self.bow.write_bytes(&row)?;
        self.header.num_records += 1;
        Ok(())
    }

    /// Writes the end-of-file marker and the final record count.
    pub(crate) fn close(&mut self) -> Result<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.bow.write_u8(FILE_TERMINATOR)?;
        self.bow.seek_from_start(RECORD_COUNT_OFFSET)?;
        self.bow.set_byte_order(Endianness::LittleEndian);
        self.bow.write_u32(self.header.num_records)?;
        self.bow.seek_end()?;
        self.bow.flush()?;
        Ok(())
    }

    /// Completes the table and returns the number of rows written.
    pub fn finish(mut self) -> Result<u32> {
        self.close()?;
        Ok(self.header.num_records)
    }
}

impl<W: Write + Seek> Drop for DbaseWriter<W> {
    fn drop(&mut self) {
        if !self.finished {
            if let Err(e) = self.close() {
                log::error!("failed to finalize dBASE table: {}", e);
            }
        }
    }
}

/// Encodes a whole row, deletion flag included.
pub(crate) fn encode_row(fields: &[DbaseField], values: &[FieldData], configs: &CodecConfig) -> Result<Vec<u8>> {
    if values.len() != fields.len() {
        return Err(ShapefileError::InvalidField(format!(
            "row has {} values for {} fields",
            values.len(),
            fields.len()
        )));
    }
    let mut row = Vec::with_capacity(1 + fields.iter().map(|f| f.length as usize).sum::<usize>());
    row.push(LIVE_RECORD);
    for (field, value) in fields.iter().zip(values) {
        row.extend(encode_field(field, value, configs)?);
    }
    Ok(row)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::dbase::field::DbaseFieldType;
    use crate::dbase::reader::DbaseReader;
    use std::io::Cursor;

    fn fields() -> Vec<DbaseField> {
        let configs = CodecConfig::default();
        vec![
            DbaseField::new("NAME", DbaseFieldType::Character, 8, 0, &configs).unwrap(),
            DbaseField::new("AREA", DbaseFieldType::Numeric, 10, 2, &configs).unwrap(),
        ]
    }

    #[test]
    fn test_written_table_reads_back() {
        let mut buf = Cursor::new(Vec::new());
        {
            let mut writer = DbaseWriter::new(&mut buf, fields(), CodecConfig::default()).unwrap();
            writer.write(&["north".into(), 123.45.into()]).unwrap();
            writer.write(&[FieldData::Null, (-2.5).into()]).unwrap();
            assert!(writer.write(&["short row".into()]).is_err());
            assert_eq!(writer.finish().unwrap(), 2);
        }
        let bytes = buf.into_inner();
        assert_eq!(&bytes[4..8], &2u32.to_le_bytes());
        assert_eq!(*bytes.last().unwrap(), FILE_TERMINATOR);
        // header + 2 rows of 19 bytes + terminator
        assert_eq!(bytes.len(), 97 + 2 * 19 + 1);

        let rows: Vec<_> = DbaseReader::new(Cursor::new(bytes), CodecConfig::default())
            .unwrap()
            .map(|r| r.unwrap())
            .collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].values, vec![FieldData::from("north"), FieldData::Real(123.45)]);
        assert_eq!(rows[1].values, vec![FieldData::Null, FieldData::Real(-2.5)]);
    }

    #[test]
    fn test_drop_finalizes() {
        let mut buf = Cursor::new(Vec::new());
        {
            let mut writer = DbaseWriter::new(&mut buf, fields(), CodecConfig::default()).unwrap();
            writer.write(&["a".into(), 1.0.into()]).unwrap();
        }
        let bytes = buf.into_inner();
        assert_eq!(&bytes[4..8], &1u32.to_le_bytes());
        assert_eq!(*bytes.last().unwrap(), FILE_TERMINATOR);
    }
}
