/*
This code is part of the esri_shapefile library.
Authors: esri_shapefile contributors
Created: 19/10/2026
Last Modified: 19/10/2026
License: MIT
*/
use super::field::{DbaseField, DbaseFieldType, MAX_NAME_LENGTH};
use crate::configs::CodecConfig;
use crate::error::{Result, ShapefileError};
use chrono::prelude::*;
use esri_common::utils::{ByteOrderReader, ByteOrderWriter, Endianness};
use std::io::prelude::*;

pub const DBASE_III: u8 = 0x03;
pub const FIELD_TERMINATOR: u8 = 0x0D;
pub const FILE_TERMINATOR: u8 = 0x1A;
const FIELD_DESCRIPTOR_LENGTH: usize = 32;

/// The header and record lengths for a field list. Both are stored as 16-bit
/// values, which bounds the number and total width of the fields.
pub fn checked_lengths(fields: &[DbaseField]) -> Result<(u16, u16)> {
    let header_length = 33 + FIELD_DESCRIPTOR_LENGTH * fields.len();
    let record_length = 1 + fields.iter().map(|f| f.length as usize).sum::<usize>();
    if header_length > u16::MAX as usize {
        return Err(ShapefileError::InvalidField(format!(
            "{} fields need a {}-byte header; the limit is {}",
            fields.len(),
            header_length,
            u16::MAX
        )));
    }
    if record_length > u16::MAX as usize {
        return Err(ShapefileError::InvalidField(format!(
            "the fields need a {}-byte record; the limit is {}",
            record_length,
            u16::MAX
        )));
    }
    Ok((header_length as u16, record_length as u16))
}

#[derive(Debug, Clone, PartialEq)]
pub struct DbaseHeader {
    pub version: u8,
    pub year: u32,
    pub month: u8,
    pub day: u8,
    pub num_records: u32,
    pub header_length: u16,
    pub record_length: u16,
    pub fields: Vec<DbaseField>,
}

impl DbaseHeader {
    /// A header for a new table dated today. Fails if the fields do not fit
    /// in a dBASE III record.
    pub fn new(fields: Vec<DbaseField>, num_records: u32) -> Result<DbaseHeader> {
        let now = Local::now();
        let mut header = DbaseHeader {
            version: DBASE_III,
            year: now.year() as u32,
            month: now.month() as u8,
            day: now.day() as u8,
            num_records,
            header_length: 0,
            record_length: 0,
            fields,
        };
        header.update_lengths()?;
        Ok(header)
    }

    /// Recomputes the header and record lengths from the field list. The
    /// lengths are left untouched on error.
    pub fn update_lengths(&mut self) -> Result<()> {
        let (header_length, record_length) = checked_lengths(&self.fields)?;
        self.header_length = header_length;
        self.record_length = record_length;
        Ok(())
    }

    pub fn read<R: Read>(bor: &mut ByteOrderReader<R>, configs: &CodecConfig) -> Result<DbaseHeader> {
        bor.set_byte_order(Endianness::LittleEndian);
        let start = bor.pos();
        let version = bor.read_u8()?;
        if version & 0x07 != DBASE_III {
            configs.warn(format!("Unexpected dBASE version byte 0x{:02X}.", version))?;
        }
        let year = 1900u32 + bor.read_u8()? as u32;
        let month = bor.read_u8()?;
        let day = bor.read_u8()?;
        let num_records = bor.read_u32()?;
        let header_length = bor.read_u16()?;
        let record_length = bor.read_u16()?;
        bor.skip(20)?; // reserved

        let mut fields = vec![];
        loop {
            let first = bor.read_u8()?;
            if first == FIELD_TERMINATOR {
                break;
            }
            let mut name_bytes = vec![first];
            name_bytes.extend(bor.read_bytes(MAX_NAME_LENGTH - 1)?);
            let end = name_bytes.iter().position(|b| *b == 0).unwrap_or(MAX_NAME_LENGTH);
            let name = esri_common::utils::decode_latin1(&name_bytes[..end]).trim().to_string();
            let field_type = DbaseFieldType::from_char(char::from(bor.read_u8()?))?;
            bor.skip(4)?; // field offset; recomputed on write
            let length = bor.read_u8()?;
            let decimal_count = bor.read_u8()?;
            bor.skip(14)?; // reserved
            fields.push(DbaseField {
                name,
                field_type,
                length,
                decimal_count,
            });
        }

        // some writers pad the header beyond the terminator
        let consumed = bor.pos() - start;
        if (header_length as usize) > consumed {
            bor.skip(header_length as usize - consumed)?;
        }

        let header = DbaseHeader {
            version,
            year,
            month,
            day,
            num_records,
            header_length,
            record_length,
            fields,
        };
        let computed = 1 + header.fields.iter().map(|f| f.length as usize).sum::<usize>();
        if computed != record_length as usize {
            return Err(ShapefileError::InvalidField(format!(
                "record length {} does not match the field lengths, which sum to {}",
                record_length, computed
            )));
        }
        Ok(header)
    }

    pub fn write<W: Write>(&self, bow: &mut ByteOrderWriter<W>) -> Result<()> {
        bow.set_byte_order(Endianness::LittleEndian);
        bow.write_u8(DBASE_III)?;
        bow.write_u8(self.year.saturating_sub(1900).min(255) as u8)?;
        bow.write_u8(self.month)?;
        bow.write_u8(self.day)?;
        bow.write_u32(self.num_records)?;
        bow.write_u16(self.header_length)?;
        bow.write_u16(self.record_length)?;
        bow.write_bytes(&[0u8; 20])?;

        let mut offset = 1u32;
        for field in &self.fields {
            bow.write_latin1(&field.name, MAX_NAME_LENGTH, 0)?;
            bow.write_u8(field.field_type.to_char() as u8)?;
            bow.write_u32(offset)?;
            bow.write_u8(field.length)?;
            bow.write_u8(field.decimal_count)?;
            bow.write_bytes(&[0u8; 14])?;
            offset += field.length as u32;
        }
        bow.write_u8(FIELD_TERMINATOR)?;
        Ok(())
    }

    pub fn field_names(&self) -> Vec<String> {
        self.fields.iter().map(|f| f.name.clone()).collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Cursor;

    fn fields() -> Vec<DbaseField> {
        let configs = CodecConfig::default();
        vec![
            DbaseField::new("NAME", DbaseFieldType::Character, 20, 0, &configs).unwrap(),
            DbaseField::new("AREA", DbaseFieldType::Numeric, 10, 2, &configs).unwrap(),
            DbaseField::new("OPEN", DbaseFieldType::Logical, 1, 0, &configs).unwrap(),
        ]
    }

    #[test]
    fn test_header_layout() {
        let header = DbaseHeader::new(fields(), 12).unwrap();
        assert_eq!(header.header_length, 33 + 3 * 32);
        assert_eq!(header.record_length, 32);

        let mut bow = ByteOrderWriter::new(Vec::new(), Endianness::LittleEndian);
        header.write(&mut bow).unwrap();
        let bytes = bow.into_inner();
        assert_eq!(bytes.len(), header.header_length as usize);
        assert_eq!(bytes[0], 0x03);
        assert_eq!(&bytes[4..8], &12u32.to_le_bytes());
        assert_eq!(&bytes[32..36], b"NAME");
        assert_eq!(bytes[32 + 11], b'C');
        assert_eq!(bytes[64 + 16], 10); // AREA length
        assert_eq!(bytes[64 + 17], 2); // AREA decimals
        assert_eq!(*bytes.last().unwrap(), FIELD_TERMINATOR);

        let mut bor = ByteOrderReader::new(Cursor::new(bytes), Endianness::LittleEndian);
        let back = DbaseHeader::read(&mut bor, &CodecConfig::default()).unwrap();
        assert_eq!(back, header);
    }

    #[test]
    fn test_unknown_field_type() {
        let header = DbaseHeader::new(fields(), 0).unwrap();
        let mut bow = ByteOrderWriter::new(Vec::new(), Endianness::LittleEndian);
        header.write(&mut bow).unwrap();
        let mut bytes = bow.into_inner();
        bytes[32 + 11] = b'M';
        let mut bor = ByteOrderReader::new(Cursor::new(bytes), Endianness::LittleEndian);
        assert!(matches!(
            DbaseHeader::read(&mut bor, &CodecConfig::default()),
            Err(ShapefileError::UnknownFieldType('M'))
        ));
    }

    #[test]
    fn test_padded_header_is_skipped() {
        let mut header = DbaseHeader::new(fields(), 0).unwrap();
        header.header_length += 263;
        let mut bow = ByteOrderWriter::new(Vec::new(), Endianness::LittleEndian);
        header.write(&mut bow).unwrap();
        bow.write_bytes(&[0u8; 263]).unwrap();
        bow.write_u8(FILE_TERMINATOR).unwrap();
        let mut bor = ByteOrderReader::new(Cursor::new(bow.into_inner()), Endianness::LittleEndian);
        DbaseHeader::read(&mut bor, &CodecConfig::default()).unwrap();
        assert_eq!(bor.read_u8().unwrap(), FILE_TERMINATOR);
    }

    #[test]
    fn test_oversized_records_are_rejected() {
        let configs = CodecConfig::default();
        let wide: Vec<DbaseField> = (0..300)
            .map(|i| {
                DbaseField::new(&format!("F{}", i), DbaseFieldType::Character, 254, 0, &configs)
                    .unwrap()
            })
            .collect();
        assert!(matches!(
            DbaseHeader::new(wide.clone(), 0),
            Err(ShapefileError::InvalidField(_))
        ));
        // 258 * 254 + 1 = 65533 still fits
        let header = DbaseHeader::new(wide[..258].to_vec(), 0).unwrap();
        assert_eq!(header.record_length, 65533);

        let mut header = DbaseHeader::new(fields(), 0).unwrap();
        header.fields.extend(wide);
        assert!(header.update_lengths().is_err());
        assert_eq!(header.record_length, 32);
    }
}
