/*
This code is part of the esri_shapefile library.
Authors: esri_shapefile contributors
Created: 19/10/2026
Last Modified: 19/10/2026
License: MIT

Notes: Readers and writers for ESRI Shapefile data sets: geometry in .shp,
the record index in .shx and attributes in dBASE III .dbf tables.

A reader or writer instance is not meant to be shared between threads.
Concurrent readers of the same unchanging files are safe; a writer
concurrent with any other reader or writer of the same files is not.
*/

pub mod configs;
pub mod dbase;
pub mod error;
pub mod geometry;
pub mod shapefile;

// exports identifiers from private sub-modules in the current module namespace
pub use crate::configs::{CodecConfig, WarningPolicy};
pub use crate::dbase::{AttributeKind, AttributeType, FieldData};
pub use crate::error::{Result, ShapefileError};
pub use crate::geometry::*;
pub use crate::shapefile::{
    Attributes, ShapeFile, ShapeFileReader, ShapeFileRecord, ShapeFileWriter, ShapefileHeader, WriteSummary,
};
