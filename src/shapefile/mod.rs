/*
This code is part of the esri_shapefile library.
Authors: esri_shapefile contributors
Created: 19/10/2026
Last Modified: 19/10/2026
License: MIT

Notes: The logic behind working with the ESRI Shapefile format. A data set is
a .shp of geometry records, a .shx of record offsets and a .dbf of attribute
rows, plus an optional .prj holding the projection text.
*/

// private sub-modules defined in other files
mod codec;
mod header;
mod index;
mod paths;
mod reader;
mod record;
mod rings;
mod writer;

// exports identifiers from private sub-modules in the current module namespace
pub use self::codec::{content_length_bytes, read_shape, write_shape, RecordHeader, NO_DATA, NO_DATA_THRESHOLD};
pub use self::header::{ShapefileHeader, FILE_CODE, HEADER_LENGTH, VERSION};
pub use self::index::{IndexEntry, ShapeIndex};
pub use self::paths::{open_input, ShapefilePaths};
pub use self::reader::ShapeFileReader;
pub use self::record::{Attributes, ShapeFileRecord};
pub use self::rings::{assemble_polygons, flatten_polygons};
pub use self::writer::{ShapeFileWriter, WriteSummary};

use self::codec::{check_compatible, written_envelope};
use self::paths::{read_projection, write_projection};
use crate::configs::CodecConfig;
use crate::dbase::{checked_lengths, encode_row, AttributeType, DbaseField, DbaseHeader, FieldData, FILE_TERMINATOR};
use crate::error::{Result, ShapefileError};
use crate::geometry::{Envelope, Geometry, ShapeType};
use esri_common::utils::{ByteOrderWriter, Endianness};
use std::fs::File;
use std::io::prelude::*;
use std::io::BufWriter;
use std::path::Path;
use std::sync::Arc;

/// A shapefile data set held entirely in memory.
#[derive(Debug, Clone)]
pub struct ShapeFile {
    shape_type: ShapeType,
    fields: Vec<DbaseField>,
    names: Arc<[String]>,
    records: Vec<ShapeFileRecord>,
    pub projection: Option<String>,
    configs: CodecConfig,
}

impl ShapeFile {
    /// An empty data set. A `Null` shape type is replaced by the type of the
    /// first geometry added.
    pub fn new(shape_type: ShapeType, configs: CodecConfig) -> ShapeFile {
        ShapeFile {
            shape_type,
            fields: vec![],
            names: Arc::from(Vec::<String>::new()),
            records: vec![],
            projection: None,
            configs,
        }
    }

    /// Reads a whole data set by base name or by any member file name.
    pub fn read<P: AsRef<Path>>(path: P, configs: CodecConfig) -> Result<ShapeFile> {
        let paths = ShapefilePaths::resolve(path)?;
        let mut sf = ShapeFile::read_from(open_input(&paths.shp)?, open_input(&paths.dbf)?, configs)?;
        sf.projection = read_projection(&paths.prj)?;
        Ok(sf)
    }

    /// Reads a whole data set from a `.shp` and a `.dbf` stream. Records are
    /// ordered by their record numbers.
    pub fn read_from<S: Read, D: Read>(shp: S, dbf: D, configs: CodecConfig) -> Result<ShapeFile> {
        let mut reader = ShapeFileReader::from_readers(shp, dbf, configs)?;
        let mut records = reader.read_records()?;
        // on-disk order is usually, but not always, ascending
        records.sort_by_key(|r| r.index);
        configs.progress(format!("read {} records", records.len()));
        let names: Arc<[String]> = reader.field_names().into();
        Ok(ShapeFile {
            shape_type: reader.shape_type(),
            fields: reader.fields().to_vec(),
            names,
            records,
            projection: None,
            configs,
        })
    }

    pub fn shape_type(&self) -> ShapeType {
        self.shape_type
    }

    pub fn fields(&self) -> &[DbaseField] {
        &self.fields
    }

    pub fn field_names(&self) -> Vec<String> {
        self.names.to_vec()
    }

    pub fn field_types(&self) -> Vec<AttributeType> {
        self.fields.iter().map(|f| f.attribute_type()).collect()
    }

    pub fn records(&self) -> &[ShapeFileRecord] {
        &self.records
    }

    pub fn records_mut(&mut self) -> &mut Vec<ShapeFileRecord> {
        &mut self.records
    }

    pub fn num_records(&self) -> usize {
        self.records.len()
    }

    /// Appends a column, filling existing records with nulls. On failure
    /// the data set is unchanged.
    pub fn add_column(&mut self, name: &str, attribute_type: AttributeType) -> Result<()> {
        let field = DbaseField::from_attribute(name, &attribute_type, &self.configs)?;
        if self.fields.iter().any(|f| f.name == field.name) {
            return Err(ShapefileError::InvalidField(format!(
                "a field named '{}' already exists",
                field.name
            )));
        }
        let mut widened = self.fields.clone();
        widened.push(field.clone());
        checked_lengths(&widened)?;
        let mut names = self.names.to_vec();
        names.push(field.name.clone());
        self.names = names.into();
        self.fields.push(field);
        for record in self.records.iter_mut() {
            let mut values = record.attributes.values().to_vec();
            values.push(FieldData::Null);
            record.attributes = Attributes::new(self.names.clone(), values);
        }
        Ok(())
    }

    /// Appends a record and returns its index.
    pub fn add_record(&mut self, geometry: Option<Geometry>, values: Vec<FieldData>) -> Result<usize> {
        if values.len() != self.fields.len() {
            return Err(ShapefileError::InvalidField(format!(
                "record has {} values for {} fields",
                values.len(),
                self.fields.len()
            )));
        }
        if let Some(g) = &geometry {
            if self.shape_type == ShapeType::Null && self.records.iter().all(|r| r.geometry.is_none()) {
                self.shape_type = g.shape_type();
            }
            check_compatible(g, self.shape_type, &self.configs)?;
        }
        let index = self.records.last().map(|r| r.index).unwrap_or(0) + 1;
        self.records.push(ShapeFileRecord {
            index,
            geometry,
            attributes: Attributes::new(self.names.clone(), values),
        });
        Ok(index)
    }

    /// The union of every record's envelope, as stored in the file header.
    pub fn extent(&self) -> Envelope {
        self.records
            .iter()
            .filter_map(|r| r.geometry.as_ref())
            .fold(Envelope::empty(), |acc, g| acc.union(&written_envelope(g, self.shape_type)))
    }

    /// The header the data set would be written with.
    pub fn header(&self) -> ShapefileHeader {
        let length = HEADER_LENGTH
            + self
                .records
                .iter()
                .map(|r| 8 + content_length_bytes(r.geometry.as_ref(), self.shape_type))
                .sum::<usize>();
        ShapefileHeader::new(self.shape_type, &self.extent(), length)
    }

    /// Writes the data set by base name or by any member file name.
    pub fn write<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let paths = ShapefilePaths::for_output(path);
        self.configs.progress(format!("writing {}", paths.shp.display()));
        self.write_to(
            BufWriter::new(File::create(&paths.shp)?),
            BufWriter::new(File::create(&paths.shx)?),
            BufWriter::new(File::create(&paths.dbf)?),
        )?;
        if let Some(wkt) = &self.projection {
            write_projection(&paths.prj, wkt)?;
        }
        Ok(())
    }

    /// Writes the three member files to sequential sinks. Records are
    /// renumbered densely from 1 and the headers are computed from the
    /// final record set.
    pub fn write_to<S: Write, X: Write, D: Write>(&mut self, shp: S, shx: X, dbf: D) -> Result<()> {
        for record in &self.records {
            if let Some(g) = &record.geometry {
                check_compatible(g, self.shape_type, &self.configs)?;
            }
        }
        let rows = self
            .records
            .iter()
            .map(|r| encode_row(&self.fields, r.attributes.values(), &self.configs))
            .collect::<Result<Vec<Vec<u8>>>>()?;

        let header = self.header();
        let mut shp = ByteOrderWriter::new(shp, Endianness::BigEndian);
        let mut shx = ByteOrderWriter::new(shx, Endianness::BigEndian);
        header.write(&mut shp)?;
        let shx_header = ShapefileHeader {
            file_length: (ShapeIndex::file_length_bytes(self.records.len()) / 2) as i32,
            ..header.clone()
        };
        shx_header.write(&mut shx)?;

        let mut offset = HEADER_LENGTH;
        for (i, record) in self.records.iter_mut().enumerate() {
            record.index = i + 1;
            let content_length = content_length_bytes(record.geometry.as_ref(), self.shape_type);
            RecordHeader {
                record_number: record.index as i32,
                content_length: (content_length / 2) as i32,
            }
            .write(&mut shp)?;
            write_shape(&mut shp, record.geometry.as_ref(), self.shape_type)?;
            IndexEntry::new(offset, content_length).write(&mut shx)?;
            offset += 8 + content_length;
        }
        shp.flush()?;
        shx.flush()?;

        let mut dbf = ByteOrderWriter::new(dbf, Endianness::LittleEndian);
        DbaseHeader::new(self.fields.clone(), self.records.len() as u32)?.write(&mut dbf)?;
        for row in rows {
            dbf.write_bytes(&row)?;
        }
        dbf.write_u8(FILE_TERMINATOR)?;
        dbf.flush()?;
        self.configs.progress(format!("wrote {} records", self.records.len()));
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::configs::WarningPolicy;
    use crate::dbase::{DbaseFieldType, DbaseReader};
    use crate::geometry::*;
    use chrono::NaiveDate;
    use esri_common::utils::{ByteOrderReader, Endianness};
    use std::io::Cursor;

    fn square(min_x: f64, min_y: f64, size: f64, clockwise: bool) -> LinearRing {
        let (max_x, max_y) = (min_x + size, min_y + size);
        let mut v = vec![
            Vertex::new(min_x, min_y),
            Vertex::new(min_x, max_y),
            Vertex::new(max_x, max_y),
            Vertex::new(max_x, min_y),
            Vertex::new(min_x, min_y),
        ];
        if !clockwise {
            v.reverse();
        }
        LinearRing::new(v).unwrap()
    }

    fn parcels() -> ShapeFile {
        let mut sf = ShapeFile::new(ShapeType::Polygon, CodecConfig::default());
        sf.add_column("NAME", AttributeType::string(16)).unwrap();
        sf.add_column("AREA", AttributeType::numeric(10, 2)).unwrap();
        sf.add_column("RATIO", AttributeType::float(12)).unwrap();
        sf.add_column("OWNERS", AttributeType::integer(4)).unwrap();
        sf.add_column("SURVEYED", AttributeType::timestamp()).unwrap();
        sf.add_column("PUBLIC", AttributeType::boolean()).unwrap();

        let lake = Polygon::new(square(0.0, 0.0, 100.0, true), vec![square(10.0, 10.0, 20.0, false)]).unwrap();
        let island = Polygon::from_shell(square(200.0, 0.0, 5.0, true));
        sf.add_record(
            Some(MultiPolygon::new(vec![lake, island]).into()),
            vec![
                "lakeside".into(),
                123.45.into(),
                0.125.into(),
                3.into(),
                NaiveDate::from_ymd_opt(1999, 12, 31).unwrap().into(),
                true.into(),
            ],
        )
        .unwrap();
        sf.add_record(None, vec![FieldData::Null; 6]).unwrap();
        sf.add_record(
            Some(MultiPolygon::new(vec![Polygon::from_shell(square(-50.0, -20.0, 10.0, true))]).into()),
            vec!["west".into(), (-7.5).into(), FieldData::Null, 0.into(), FieldData::Null, false.into()],
        )
        .unwrap();
        sf
    }

    fn write_to_buffers(sf: &mut ShapeFile) -> (Vec<u8>, Vec<u8>, Vec<u8>) {
        let (mut shp, mut shx, mut dbf) = (Vec::new(), Vec::new(), Vec::new());
        sf.write_to(&mut shp, &mut shx, &mut dbf).unwrap();
        (shp, shx, dbf)
    }

    #[test]
    fn test_round_trip() {
        let mut sf = parcels();
        let (shp, _, dbf) = write_to_buffers(&mut sf);
        let back = ShapeFile::read_from(Cursor::new(shp), Cursor::new(dbf), CodecConfig::default()).unwrap();
        assert_eq!(back.shape_type(), ShapeType::Polygon);
        assert_eq!(back.field_names(), sf.field_names());
        assert_eq!(back.field_types(), sf.field_types());
        assert_eq!(back.num_records(), 3);
        for (a, b) in sf.records().iter().zip(back.records()) {
            assert_eq!(a.index, b.index);
            assert_eq!(a.geometry, b.geometry);
            assert_eq!(a.attributes, b.attributes);
        }
        assert_eq!(back.records()[0].attributes.get("AREA"), Some(&FieldData::Real(123.45)));
    }

    #[test]
    fn test_header_consistency() {
        let mut sf = parcels();
        let (shp, shx, _) = write_to_buffers(&mut sf);

        let mut bor = ByteOrderReader::new(Cursor::new(shp.clone()), Endianness::BigEndian);
        let header = ShapefileHeader::read(&mut bor, &CodecConfig::default()).unwrap();
        assert_eq!(header.file_length_bytes(), shp.len());
        assert_eq!((header.x_min, header.y_min, header.x_max, header.y_max), (-50.0, -20.0, 205.0, 100.0));

        assert_eq!(shx.len(), HEADER_LENGTH + 3 * 8);
        let index = ShapeIndex::read(Cursor::new(shx), &CodecConfig::default()).unwrap();
        assert_eq!(index.len(), 3);
        assert_eq!(index.entries[0].offset_bytes(), HEADER_LENGTH);
        // each entry points at a record header carrying the same content length
        for (i, entry) in index.entries.iter().enumerate() {
            let at = entry.offset_bytes();
            let number = i32::from_be_bytes([shp[at], shp[at + 1], shp[at + 2], shp[at + 3]]);
            let length = i32::from_be_bytes([shp[at + 4], shp[at + 5], shp[at + 6], shp[at + 7]]);
            assert_eq!(number as usize, i + 1);
            assert_eq!(length, entry.content_length);
        }
    }

    #[test]
    fn test_header_z_range_counts_missing_z() {
        let mut sf = ShapeFile::new(ShapeType::PointZ, CodecConfig::new(WarningPolicy::Ignore));
        sf.add_column("ID", AttributeType::integer(3)).unwrap();
        sf.add_record(Some(Vertex::new_z(1.0, 1.0, 4.0, None).into()), vec![1.into()]).unwrap();
        sf.add_record(Some(Vertex::new(2.0, 2.0).into()), vec![2.into()]).unwrap();
        let (shp, _, _) = write_to_buffers(&mut sf);
        let mut bor = ByteOrderReader::new(Cursor::new(shp), Endianness::BigEndian);
        let header = ShapefileHeader::read(&mut bor, &CodecConfig::default()).unwrap();
        assert_eq!((header.z_min, header.z_max), (0.0, 4.0));

        let mut strict = ShapeFile::new(ShapeType::PointZ, CodecConfig::new(WarningPolicy::Fail));
        assert!(matches!(
            strict.add_record(Some(Vertex::new(2.0, 2.0).into()), vec![]),
            Err(ShapefileError::Warning(_))
        ));
        assert_eq!(strict.num_records(), 0);
    }

    #[test]
    fn test_unknown_header_type_still_reads_records() {
        let mut sf = parcels();
        let (mut shp, _, dbf) = write_to_buffers(&mut sf);
        shp[32..36].copy_from_slice(&77i32.to_le_bytes());
        let back =
            ShapeFile::read_from(Cursor::new(shp), Cursor::new(dbf), CodecConfig::new(WarningPolicy::Ignore)).unwrap();
        assert_eq!(back.shape_type(), ShapeType::Null);
        assert_eq!(back.num_records(), 3);
        assert_eq!(back.records()[0].geometry, sf.records()[0].geometry);
    }

    #[test]
    fn test_dense_reindex_on_write() {
        let mut sf = parcels();
        sf.records_mut().remove(1);
        let (shp, _, dbf) = write_to_buffers(&mut sf);
        assert_eq!(sf.records()[1].index, 2);
        let back = ShapeFile::read_from(Cursor::new(shp), Cursor::new(dbf), CodecConfig::default()).unwrap();
        let indices: Vec<usize> = back.records().iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![1, 2]);
        assert_eq!(back.records()[1].attributes.get("NAME"), Some(&FieldData::from("west")));
    }

    #[test]
    fn test_records_sorted_by_index() {
        let mut sf = ShapeFile::new(ShapeType::Point, CodecConfig::default());
        sf.add_column("ID", AttributeType::integer(3)).unwrap();
        for i in 0..3 {
            sf.add_record(Some(Vertex::new(i as f64, 0.0).into()), vec![(i as i64).into()]).unwrap();
        }
        let (mut shp, _, dbf) = write_to_buffers(&mut sf);
        // swap the numbers of the first two 28-byte records
        shp[100 + 3] = 2;
        shp[128 + 3] = 1;
        let back = ShapeFile::read_from(Cursor::new(shp), Cursor::new(dbf), CodecConfig::default()).unwrap();
        let order: Vec<(usize, FieldData)> = back
            .records()
            .iter()
            .map(|r| (r.index, r.attributes.value(0).cloned().unwrap()))
            .collect();
        // rows follow file position, records follow their numbers
        assert_eq!(order, vec![(1, FieldData::Int(1)), (2, FieldData::Int(0)), (3, FieldData::Int(2))]);
    }

    #[test]
    fn test_multipatch_record_is_skipped() {
        let mut sf = ShapeFile::new(ShapeType::PointZ, CodecConfig::default());
        sf.add_column("ID", AttributeType::integer(3)).unwrap();
        sf.add_record(Some(Vertex::new_z(1.0, 1.0, 1.0, None).into()), vec![1.into()]).unwrap();
        sf.add_record(Some(Vertex::new_z(2.0, 2.0, 2.0, Some(0.5)).into()), vec![2.into()]).unwrap();
        let (mut shp, _, dbf) = write_to_buffers(&mut sf);
        // relabel the first 36-byte record body as a MultiPatch
        shp[108..112].copy_from_slice(&31i32.to_le_bytes());
        let records: Vec<_> = ShapeFileReader::from_readers(Cursor::new(shp), Cursor::new(dbf), CodecConfig::default())
            .unwrap()
            .map(|r| r.unwrap())
            .collect();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].geometry, None);
        assert_eq!(records[0].attributes.get("ID"), Some(&FieldData::Int(1)));
        assert_eq!(records[1].geometry, Some(Geometry::Point(Vertex::new_z(2.0, 2.0, 2.0, Some(0.5)))));
    }

    #[test]
    fn test_missing_and_excess_rows() {
        let mut sf = ShapeFile::new(ShapeType::Point, CodecConfig::default());
        sf.add_column("ID", AttributeType::integer(3)).unwrap();
        sf.add_record(Some(Vertex::new(0.0, 0.0).into()), vec![1.into()]).unwrap();
        sf.add_record(Some(Vertex::new(1.0, 1.0).into()), vec![2.into()]).unwrap();
        let (shp, _, dbf) = write_to_buffers(&mut sf);

        let mut short = ShapeFile::new(ShapeType::Point, CodecConfig::default());
        short.add_column("ID", AttributeType::integer(3)).unwrap();
        short.add_record(Some(Vertex::new(0.0, 0.0).into()), vec![1.into()]).unwrap();
        let (short_shp, _, short_dbf) = write_to_buffers(&mut short);

        // more records than rows: the last record gets nulls
        let back = ShapeFile::read_from(Cursor::new(shp.clone()), Cursor::new(short_dbf), CodecConfig::default()).unwrap();
        assert_eq!(back.num_records(), 2);
        assert_eq!(back.records()[1].attributes.get("ID"), Some(&FieldData::Null));

        // more rows than records: the extra row is ignored, or fails when strict
        let back = ShapeFile::read_from(Cursor::new(short_shp.clone()), Cursor::new(dbf.clone()), CodecConfig::default()).unwrap();
        assert_eq!(back.num_records(), 1);
        let strict = CodecConfig::new(WarningPolicy::Fail);
        assert!(ShapeFile::read_from(Cursor::new(short_shp), Cursor::new(dbf), strict).is_err());
    }

    #[test]
    fn test_deleted_row_pairs_with_null_attributes() {
        let mut sf = ShapeFile::new(ShapeType::Point, CodecConfig::default());
        sf.add_column("ID", AttributeType::integer(3)).unwrap();
        for i in 1..=3 {
            sf.add_record(Some(Vertex::new(i as f64, 0.0).into()), vec![i.into()]).unwrap();
        }
        let (shp, _, mut dbf) = write_to_buffers(&mut sf);
        // header is 65 bytes, rows are 4 bytes
        dbf[65 + 4] = b'*';

        let rows: Vec<_> = DbaseReader::new(Cursor::new(dbf.clone()), CodecConfig::default())
            .unwrap()
            .map(|r| r.unwrap().index)
            .collect();
        assert_eq!(rows, vec![1, 3]);

        let back = ShapeFile::read_from(Cursor::new(shp), Cursor::new(dbf), CodecConfig::default()).unwrap();
        let ids: Vec<FieldData> = back.records().iter().map(|r| r.attributes.values()[0].clone()).collect();
        assert_eq!(ids, vec![FieldData::Int(1), FieldData::Null, FieldData::Int(3)]);
    }

    #[test]
    fn test_add_record_validation() {
        let mut sf = ShapeFile::new(ShapeType::Null, CodecConfig::new(WarningPolicy::Fail));
        sf.add_column("ID", AttributeType::integer(3)).unwrap();
        assert!(sf.add_record(None, vec![]).is_err());
        sf.add_record(Some(Vertex::new_m(0.0, 0.0, 1.0).into()), vec![1.into()]).unwrap();
        assert_eq!(sf.shape_type(), ShapeType::PointM);
        let line = LineString::new(vec![Vertex::new(0.0, 0.0), Vertex::new(1.0, 1.0)]);
        assert!(matches!(
            sf.add_record(Some(line.into()), vec![2.into()]),
            Err(ShapefileError::ShapeTypeMismatch { .. })
        ));
        assert!(sf.add_column("VeryLongFieldNameExceeding11", AttributeType::string(4)).is_err());
        assert_eq!(sf.fields().len(), 1);
    }

    #[test]
    fn test_add_column_rejects_oversized_records() {
        let mut sf = ShapeFile::new(ShapeType::Point, CodecConfig::default());
        for i in 0..258 {
            sf.add_column(&format!("F{}", i), AttributeType::string(254)).unwrap();
        }
        sf.add_record(Some(Vertex::new(1.0, 2.0).into()), vec![FieldData::Null; 258]).unwrap();
        assert!(matches!(
            sf.add_column("LAST", AttributeType::string(254)),
            Err(ShapefileError::InvalidField(_))
        ));
        assert_eq!(sf.fields().len(), 258);
        assert_eq!(sf.field_names().len(), 258);
        assert_eq!(sf.records()[0].attributes.values().len(), 258);
    }

    #[test]
    fn test_streaming_writer_matches_monolithic() {
        let mut sf = parcels();
        let (shp, shx, dbf) = write_to_buffers(&mut sf);

        let (mut s_shp, mut s_shx, mut s_dbf) = (Cursor::new(Vec::new()), Cursor::new(Vec::new()), Cursor::new(Vec::new()));
        let summary = {
            let mut writer = ShapeFileWriter::new(
                &mut s_shp,
                &mut s_shx,
                &mut s_dbf,
                sf.shape_type(),
                sf.fields().to_vec(),
                CodecConfig::default(),
            )
            .unwrap();
            for record in sf.records() {
                writer.write(record).unwrap();
            }
            writer.finish().unwrap()
        };
        assert_eq!(summary.num_records, 3);
        assert_eq!(summary.shp_length_bytes, shp.len());
        assert_eq!(summary.extent, sf.extent());
        assert_eq!(s_shp.into_inner(), shp);
        assert_eq!(s_shx.into_inner(), shx);
        // the dates in the two table headers may differ
        let s_dbf = s_dbf.into_inner();
        assert_eq!(s_dbf.len(), dbf.len());
        assert_eq!(&s_dbf[4..], &dbf[4..]);
    }

    #[test]
    fn test_dropped_writer_still_finalizes() {
        let (mut shp, mut shx, mut dbf) = (Cursor::new(Vec::new()), Cursor::new(Vec::new()), Cursor::new(Vec::new()));
        {
            let mut writer =
                ShapeFileWriter::new(&mut shp, &mut shx, &mut dbf, ShapeType::Point, vec![], CodecConfig::default()).unwrap();
            writer.write_shape(Some(&Vertex::new(3.0, 4.0).into()), &[]).unwrap();
            writer.write_shape(None, &[]).unwrap();
        }
        let shp = shp.into_inner();
        assert_eq!(shp.len(), 100 + 28 + 12);
        assert_eq!(&shp[24..28], &70i32.to_be_bytes());
        assert_eq!(&shp[36..44], &3.0f64.to_le_bytes());
        assert_eq!(shx.into_inner().len(), 116);
        assert_eq!(&dbf.into_inner()[4..8], &2u32.to_le_bytes());
    }

    #[test]
    fn test_streaming_writer_rejects_wrong_shape() {
        let (mut shp, mut shx, mut dbf) = (Cursor::new(Vec::new()), Cursor::new(Vec::new()), Cursor::new(Vec::new()));
        let mut writer =
            ShapeFileWriter::new(&mut shp, &mut shx, &mut dbf, ShapeType::PolyLine, vec![], CodecConfig::default()).unwrap();
        assert!(writer.write_shape(Some(&Vertex::new(0.0, 0.0).into()), &[]).is_err());
        assert_eq!(writer.num_records(), 0);
        let summary = writer.finish().unwrap();
        assert_eq!(summary.shp_length_bytes, HEADER_LENGTH);
    }

    #[test]
    fn test_equiv() {
        let mut a = parcels();
        let (shp, _, dbf) = write_to_buffers(&mut a);
        let mut b = parcels();
        b.records_mut().truncate(1);
        let (b_shp, _, b_dbf) = write_to_buffers(&mut b);
        let mut c = ShapeFile::new(ShapeType::Polygon, CodecConfig::default());
        c.add_column("NAME", AttributeType::string(17)).unwrap();
        let (c_shp, _, c_dbf) = write_to_buffers(&mut c);

        let ra = ShapeFileReader::from_readers(Cursor::new(shp), Cursor::new(dbf), CodecConfig::default()).unwrap();
        let rb = ShapeFileReader::from_readers(Cursor::new(b_shp), Cursor::new(b_dbf), CodecConfig::default()).unwrap();
        let rc = ShapeFileReader::from_readers(Cursor::new(c_shp), Cursor::new(c_dbf), CodecConfig::default()).unwrap();
        assert!(ra.equiv(&rb));
        assert!(!ra.equiv(&rc));
        assert_eq!(rc.fields()[0].field_type, DbaseFieldType::Character);
    }

    #[test]
    fn test_files_on_disk_with_gzip() {
        use flate2::write::GzEncoder;
        use flate2::Compression;

        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("parcels");
        let mut sf = parcels();
        sf.projection = Some("PROJCS[\"local\"]".to_string());
        sf.write(&base).unwrap();
        assert!(dir.path().join("parcels.shx").is_file());

        let back = ShapeFile::read(dir.path().join("parcels.dbf"), CodecConfig::default()).unwrap();
        assert_eq!(back.num_records(), 3);
        assert_eq!(back.projection.as_deref(), Some("PROJCS[\"local\"]"));

        // compress the .shp and read through the decoder
        let raw = std::fs::read(dir.path().join("parcels.shp")).unwrap();
        std::fs::remove_file(dir.path().join("parcels.shp")).unwrap();
        let mut enc = GzEncoder::new(File::create(dir.path().join("parcels.shp.gz")).unwrap(), Compression::default());
        enc.write_all(&raw).unwrap();
        enc.finish().unwrap();

        let mut reader = ShapeFileReader::open(&base, CodecConfig::default()).unwrap();
        assert_eq!(reader.shape_type(), ShapeType::Polygon);
        let records = reader.read_records().unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].geometry, back.records()[0].geometry);
    }

    #[test]
    fn test_streaming_create_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let configs = CodecConfig::default();
        let fields = vec![DbaseField::new("LABEL", DbaseFieldType::Character, 8, 0, &configs).unwrap()];
        let mut writer =
            ShapeFileWriter::create(dir.path().join("pts.shp"), ShapeType::MultiPoint, fields, Some("GEOGCS[]"), configs)
                .unwrap();
        let mp = MultiPoint::new(vec![Vertex::new(0.0, 0.0), Vertex::new(2.0, 3.0)]);
        writer.write_shape(Some(&mp.clone().into()), &["pair".into()]).unwrap();
        let summary = writer.finish().unwrap();
        assert_eq!(summary.shx_length_bytes, 108);

        let mut reader = ShapeFileReader::open(dir.path().join("pts"), configs).unwrap();
        assert_eq!(reader.projection(), Some("GEOGCS[]"));
        let record = reader.read().unwrap().unwrap();
        assert_eq!(record.geometry, Some(Geometry::MultiPoint(mp)));
        assert_eq!(record.attributes.get("LABEL"), Some(&FieldData::from("pair")));
        assert!(reader.read().unwrap().is_none());
    }
}
