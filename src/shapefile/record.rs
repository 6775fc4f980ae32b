/*
This code is part of the esri_shapefile library.
Authors: esri_shapefile contributors
Created: 19/10/2026
Last Modified: 19/10/2026
License: MIT
*/
use crate::dbase::FieldData;
use crate::geometry::Geometry;
use std::sync::Arc;

/// The attribute values of one record, keyed by field name in table order.
/// All records read from one file share the same list of names.
#[derive(Debug, Clone, PartialEq)]
pub struct Attributes {
    names: Arc<[String]>,
    values: Vec<FieldData>,
}

impl Attributes {
    /// Pairs names with values. Missing values are filled with nulls and
    /// surplus values are dropped.
    pub fn new(names: Arc<[String]>, mut values: Vec<FieldData>) -> Attributes {
        values.resize(names.len(), FieldData::Null);
        Attributes { names, values }
    }

    pub fn nulls(names: Arc<[String]>) -> Attributes {
        Attributes::new(names, vec![])
    }

    pub fn get(&self, name: &str) -> Option<&FieldData> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| &self.values[i])
    }

    pub fn value(&self, index: usize) -> Option<&FieldData> {
        self.values.get(index)
    }

    pub fn set(&mut self, name: &str, value: FieldData) -> bool {
        match self.names.iter().position(|n| n == name) {
            Some(i) => {
                self.values[i] = value;
                true
            }
            None => false,
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn values(&self) -> &[FieldData] {
        &self.values
    }

    pub fn into_values(self) -> Vec<FieldData> {
        self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldData)> {
        self.names.iter().map(|n| n.as_str()).zip(self.values.iter())
    }
}

/// A geometry (or a null shape) with its attribute row.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeFileRecord {
    /// Record number in the `.shp`; reassigned densely on every write.
    pub index: usize,
    pub geometry: Option<Geometry>,
    pub attributes: Attributes,
}
