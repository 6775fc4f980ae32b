/*
This code is part of the esri_shapefile library.
Authors: esri_shapefile contributors
Created: 19/10/2026
Last Modified: 19/10/2026
License: MIT

Notes: Fixed-width text encodings of dBASE values. Every value occupies
exactly its field's length; blank fields read as nulls.
*/
use super::field::{DbaseField, DbaseFieldType, FieldData};
use crate::configs::CodecConfig;
use crate::error::Result;
use chrono::{Datelike, NaiveDate};
use esri_common::utils::{decode_latin1, encode_latin1};

/// Deletion markers at the start of each record.
pub const LIVE_RECORD: u8 = 0x20;
pub const DELETED_RECORD: u8 = 0x2A;

/// One live row of a `.dbf` table. `index` is the 1-based position of the
/// row in the file, counting deleted rows.
#[derive(Debug, Clone, PartialEq)]
pub struct DbaseRecord {
    pub index: usize,
    pub values: Vec<FieldData>,
}

/// Decodes one field of a record.
pub fn decode_field(field: &DbaseField, raw: &[u8]) -> FieldData {
    let text = decode_latin1(raw);
    let trimmed = text.trim_matches(|c: char| c == ' ' || c == '\0');
    if trimmed.is_empty() {
        return FieldData::Null;
    }
    match field.field_type {
        DbaseFieldType::Character => {
            FieldData::Text(text.trim_end_matches(|c: char| c == ' ' || c == '\0').to_string())
        }
        // wide or fractional text in a 0-decimal field falls back to a real
        DbaseFieldType::Numeric if field.decimal_count == 0 => match trimmed.parse::<i64>() {
            Ok(v) => FieldData::Int(v),
            Err(_) => trimmed.parse::<f64>().map(FieldData::Real).unwrap_or(FieldData::Null),
        },
        DbaseFieldType::Numeric | DbaseFieldType::Float => match trimmed.parse::<f64>() {
            Ok(v) => FieldData::Real(v),
            Err(_) => FieldData::Null,
        },
        DbaseFieldType::Date => parse_date(trimmed).map(FieldData::Date).unwrap_or(FieldData::Null),
        DbaseFieldType::Logical => match trimmed.chars().next() {
            Some('?') | None => FieldData::Null,
            Some(c) => FieldData::Bool(matches!(c, 'T' | 't' | 'Y' | 'y')),
        },
    }
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year = s[0..4].parse::<i32>().ok()?;
    let month = s[4..6].parse::<u32>().ok()?;
    let day = s[6..8].parse::<u32>().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn pad_left(s: &str, width: usize) -> Vec<u8> {
    let mut out = vec![b' '; width.saturating_sub(s.len())];
    out.extend_from_slice(s.as_bytes());
    out
}

fn pad_right(mut bytes: Vec<u8>, width: usize) -> Vec<u8> {
    bytes.resize(width, b' ');
    bytes
}

/// Fixed-decimal text for an `N` field: the integer part right-aligned, a
/// '.' when there are decimals, then the fraction truncated or zero-padded
/// to `decimals` digits.
fn format_numeric(value: &FieldData, width: usize, decimals: usize) -> Option<String> {
    let s = match value {
        FieldData::Int(v) => v.to_string(),
        FieldData::Real(v) if v.is_finite() => v.to_string(),
        _ => return None,
    };
    let (int_part, frac_part) = match s.split_once('.') {
        Some((i, f)) => (i.to_string(), f.to_string()),
        None => (s.clone(), String::new()),
    };
    let mut out = if int_part == "-0" && decimals == 0 {
        "0".to_string()
    } else {
        int_part
    };
    if decimals > 0 {
        let mut frac: String = frac_part.chars().take(decimals).collect();
        while frac.len() < decimals {
            frac.push('0');
        }
        out.push('.');
        out.push_str(&frac);
    }
    if out.len() > width {
        // overflow
        return Some("*".repeat(width));
    }
    Some(out)
}

/// Encodes one value into exactly `field.length` bytes. A value of the
/// wrong kind for the field is written as a blank, with a warning.
pub fn encode_field(field: &DbaseField, value: &FieldData, configs: &CodecConfig) -> Result<Vec<u8>> {
    let width = field.length as usize;
    let mismatch = |configs: &CodecConfig| -> Result<Vec<u8>> {
        configs.warn(format!(
            "Value {:?} does not fit field '{}' of type {}; written as blank.",
            value, field.name, field.field_type
        ))?;
        Ok(vec![b' '; width])
    };
    let bytes = match (field.field_type, value) {
        (_, FieldData::Null) if field.field_type != DbaseFieldType::Logical => vec![b' '; width],
        (DbaseFieldType::Character, v) => {
            let mut b = encode_latin1(&v.to_string());
            b.truncate(width);
            pad_right(b, width)
        }
        (DbaseFieldType::Numeric, v) => match format_numeric(v, width, field.decimal_count as usize) {
            Some(s) => pad_left(&s, width),
            None => return mismatch(configs),
        },
        (DbaseFieldType::Float, v) => {
            let s = match v {
                FieldData::Int(i) => i.to_string(),
                FieldData::Real(r) if r.is_finite() => r.to_string(),
                _ => return mismatch(configs),
            };
            if s.len() > width {
                "9".repeat(width).into_bytes()
            } else {
                pad_right(s.into_bytes(), width)
            }
        }
        (DbaseFieldType::Date, FieldData::Date(d)) => {
            let s = format!("{:04}{:02}{:02}", d.year(), d.month(), d.day());
            let mut b = s.into_bytes();
            b.truncate(width);
            pad_right(b, width)
        }
        (DbaseFieldType::Date, _) => return mismatch(configs),
        (DbaseFieldType::Logical, FieldData::Bool(b)) => pad_right(vec![if *b { b'T' } else { b'F' }], width),
        (DbaseFieldType::Logical, FieldData::Null) => pad_right(vec![b'?'], width),
        (DbaseFieldType::Logical, _) => return mismatch(configs),
    };
    Ok(bytes)
}
