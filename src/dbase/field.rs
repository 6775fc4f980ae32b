/*
This code is part of the esri_shapefile library.
Authors: esri_shapefile contributors
Created: 19/10/2026
Last Modified: 19/10/2026
License: MIT
*/
use crate::configs::CodecConfig;
use crate::error::{Result, ShapefileError};
use chrono::NaiveDate;
use std::fmt;

/// Field names are stored in 11 bytes.
pub const MAX_NAME_LENGTH: usize = 11;

/// The dBASE III field types this codec reads and writes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DbaseFieldType {
    Character,
    Numeric,
    Float,
    Date,
    Logical,
}

impl DbaseFieldType {
    pub fn from_char(c: char) -> Result<DbaseFieldType> {
        match c {
            'C' | 'c' => Ok(DbaseFieldType::Character),
            'N' | 'n' => Ok(DbaseFieldType::Numeric),
            'F' | 'f' => Ok(DbaseFieldType::Float),
            'D' | 'd' => Ok(DbaseFieldType::Date),
            'L' | 'l' => Ok(DbaseFieldType::Logical),
            _ => Err(ShapefileError::UnknownFieldType(c)),
        }
    }

    pub fn to_char(&self) -> char {
        match self {
            DbaseFieldType::Character => 'C',
            DbaseFieldType::Numeric => 'N',
            DbaseFieldType::Float => 'F',
            DbaseFieldType::Date => 'D',
            DbaseFieldType::Logical => 'L',
        }
    }

    /// The largest width dBASE III allows for the type.
    pub fn max_length(&self) -> u8 {
        match self {
            DbaseFieldType::Character => 254,
            DbaseFieldType::Numeric | DbaseFieldType::Float => 19,
            DbaseFieldType::Date => 8,
            DbaseFieldType::Logical => 1,
        }
    }
}

impl fmt::Display for DbaseFieldType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A field descriptor from the `.dbf` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbaseField {
    pub name: String,
    pub field_type: DbaseFieldType,
    pub length: u8,
    pub decimal_count: u8,
}

impl DbaseField {
    /// Creates a descriptor. Names longer than 11 bytes are truncated and
    /// over-wide fields are kept; both raise a warning.
    pub fn new(
        name: &str,
        field_type: DbaseFieldType,
        length: u8,
        decimal_count: u8,
        configs: &CodecConfig,
    ) -> Result<DbaseField> {
        if name.is_empty() {
            return Err(ShapefileError::InvalidField("field names cannot be empty".to_string()));
        }
        if length == 0 {
            return Err(ShapefileError::InvalidField(format!("field '{}' has zero length", name)));
        }
        let mut stored = name.to_string();
        if stored.len() > MAX_NAME_LENGTH {
            let mut end = MAX_NAME_LENGTH;
            while !stored.is_char_boundary(end) {
                end -= 1;
            }
            stored.truncate(end);
            configs.warn(format!(
                "Field name '{}' is longer than {} bytes and was truncated to '{}'.",
                name, MAX_NAME_LENGTH, stored
            ))?;
        }
        if length > field_type.max_length() {
            configs.warn(format!(
                "Field '{}' has length {}, beyond the dBASE III maximum of {} for type {}.",
                stored,
                length,
                field_type.max_length(),
                field_type
            ))?;
        }
        let decimal_count = match field_type {
            DbaseFieldType::Numeric | DbaseFieldType::Float => decimal_count,
            _ => 0,
        };
        Ok(DbaseField {
            name: stored,
            field_type,
            length,
            decimal_count,
        })
    }

    /// Builds the descriptor that stores values of `attribute_type`.
    pub fn from_attribute(name: &str, attribute_type: &AttributeType, configs: &CodecConfig) -> Result<DbaseField> {
        let length = |default: u8| -> Result<u8> {
            match attribute_type.length {
                0 => Ok(default),
                l if l > 255 => Err(ShapefileError::InvalidField(format!(
                    "field '{}' has length {}; at most 255 bytes fit in a record field",
                    name, l
                ))),
                l => Ok(l as u8),
            }
        };
        match attribute_type.kind {
            AttributeKind::String => DbaseField::new(name, DbaseFieldType::Character, length(254)?, 0, configs),
            AttributeKind::Boolean => DbaseField::new(name, DbaseFieldType::Logical, 1, 0, configs),
            AttributeKind::Timestamp => DbaseField::new(name, DbaseFieldType::Date, 8, 0, configs),
            AttributeKind::Integer => DbaseField::new(name, DbaseFieldType::Numeric, length(10)?, 0, configs),
            AttributeKind::Float => {
                let aux = attribute_type.aux_length;
                if aux < 0 {
                    let decimals = -(aux + 1);
                    DbaseField::new(name, DbaseFieldType::Float, length(19)?, decimals.min(255) as u8, configs)
                } else {
                    DbaseField::new(name, DbaseFieldType::Numeric, length(19)?, aux.min(255) as u8, configs)
                }
            }
        }
    }

    /// The logical type carried by this field.
    pub fn attribute_type(&self) -> AttributeType {
        let length = self.length as usize;
        match self.field_type {
            DbaseFieldType::Character => AttributeType::new(AttributeKind::String, length, 0),
            DbaseFieldType::Logical => AttributeType::new(AttributeKind::Boolean, length, 0),
            DbaseFieldType::Date => AttributeType::new(AttributeKind::Timestamp, length, 0),
            DbaseFieldType::Numeric if self.decimal_count == 0 => {
                AttributeType::new(AttributeKind::Integer, length, 0)
            }
            DbaseFieldType::Numeric => AttributeType::new(AttributeKind::Float, length, self.decimal_count as i32),
            DbaseFieldType::Float => {
                AttributeType::new(AttributeKind::Float, length, -(self.decimal_count as i32) - 1)
            }
        }
    }
}

/// The logical kinds of attribute value.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AttributeKind {
    String,
    Boolean,
    Float,
    Integer,
    Timestamp,
}

/// A column's logical type with its textual width. For floats, a
/// non-negative `aux_length` is the decimal count of an `N` field and a
/// negative one marks an `F` field with `-(aux_length + 1)` decimals.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct AttributeType {
    pub kind: AttributeKind,
    pub length: usize,
    pub aux_length: i32,
}

impl AttributeType {
    pub fn new(kind: AttributeKind, length: usize, aux_length: i32) -> AttributeType {
        AttributeType {
            kind,
            length,
            aux_length,
        }
    }

    pub fn string(length: usize) -> AttributeType {
        AttributeType::new(AttributeKind::String, length, 0)
    }

    pub fn integer(length: usize) -> AttributeType {
        AttributeType::new(AttributeKind::Integer, length, 0)
    }

    /// A fixed-decimal number (`N`).
    pub fn numeric(length: usize, decimals: u8) -> AttributeType {
        AttributeType::new(AttributeKind::Float, length, decimals as i32)
    }

    /// A free-form float (`F`).
    pub fn float(length: usize) -> AttributeType {
        AttributeType::new(AttributeKind::Float, length, -1)
    }

    pub fn boolean() -> AttributeType {
        AttributeType::new(AttributeKind::Boolean, 1, 0)
    }

    pub fn timestamp() -> AttributeType {
        AttributeType::new(AttributeKind::Timestamp, 8, 0)
    }

    pub fn is_free_form_float(&self) -> bool {
        self.kind == AttributeKind::Float && self.aux_length < 0
    }
}

/// One attribute value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldData {
    Int(i64),
    Real(f64),
    Text(String),
    Date(NaiveDate),
    Bool(bool),
    Null,
}

impl FieldData {
    pub fn is_null(&self) -> bool {
        matches!(self, FieldData::Null)
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldData::Int(v) => Some(*v as f64),
            FieldData::Real(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for FieldData {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FieldData::Int(v) => write!(f, "{}", v),
            FieldData::Real(v) => write!(f, "{}", v),
            FieldData::Text(v) => write!(f, "{}", v),
            FieldData::Date(v) => write!(f, "{}", v.format("%Y%m%d")),
            FieldData::Bool(v) => write!(f, "{}", if *v { "T" } else { "F" }),
            FieldData::Null => write!(f, ""),
        }
    }
}

impl From<i64> for FieldData {
    fn from(v: i64) -> FieldData {
        FieldData::Int(v)
    }
}

impl From<i32> for FieldData {
    fn from(v: i32) -> FieldData {
        FieldData::Int(v as i64)
    }
}

impl From<f64> for FieldData {
    fn from(v: f64) -> FieldData {
        FieldData::Real(v)
    }
}

impl From<&str> for FieldData {
    fn from(v: &str) -> FieldData {
        FieldData::Text(v.to_string())
    }
}

impl From<String> for FieldData {
    fn from(v: String) -> FieldData {
        FieldData::Text(v)
    }
}

impl From<bool> for FieldData {
    fn from(v: bool) -> FieldData {
        FieldData::Bool(v)
    }
}

impl From<NaiveDate> for FieldData {
    fn from(v: NaiveDate) -> FieldData {
        FieldData::Date(v)
    }
}

impl<T: Into<FieldData>> From<Option<T>> for FieldData {
    fn from(v: Option<T>) -> FieldData {
        match v {
            Some(v) => v.into(),
            None => FieldData::Null,
        }
    }
}
