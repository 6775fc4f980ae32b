/*
This code is part of the esri_shapefile library.
Authors: esri_shapefile contributors
Created: 19/10/2026
Last Modified: 19/10/2026
License: MIT
*/
use crate::geometry::ShapeType;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading or writing a Shapefile set.
#[derive(Debug, Error)]
pub enum ShapefileError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("missing file: {0}")]
    MissingFile(PathBuf),

    #[error("invalid file code {0}; expected 9994")]
    InvalidFileCode(i32),

    #[error("unsupported shape type code {0}")]
    UnsupportedShapeType(i32),

    #[error("shape type mismatch: expected {expected}, found {found}")]
    ShapeTypeMismatch { expected: ShapeType, found: ShapeType },

    #[error("unknown dBASE field type '{0}'")]
    UnknownFieldType(char),

    #[error("invalid field: {0}")]
    InvalidField(String),

    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    /// A soft warning escalated to a failure by `WarningPolicy::Fail`.
    #[error("{0}")]
    Warning(String),
}

pub type Result<T> = std::result::Result<T, ShapefileError>;
