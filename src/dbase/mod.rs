/*
This code is part of the esri_shapefile library.
Authors: esri_shapefile contributors
Created: 19/10/2026
Last Modified: 19/10/2026
License: MIT

Notes: The dBASE III attribute tables (.dbf) that accompany a shapefile.
*/

// private sub-modules defined in other files
mod field;
mod file;
mod header;
mod reader;
mod record;
mod writer;

// exports identifiers from private sub-modules in the current module namespace
pub use self::field::{AttributeKind, AttributeType, DbaseField, DbaseFieldType, FieldData, MAX_NAME_LENGTH};
pub use self::file::DbaseFile;
pub use self::header::{checked_lengths, DbaseHeader, FILE_TERMINATOR};
pub use self::reader::DbaseReader;
pub use self::record::{decode_field, encode_field, DbaseRecord};
pub use self::writer::DbaseWriter;
pub(crate) use self::writer::encode_row;
