/*
This code is part of the esri_shapefile library.
Authors: esri_shapefile contributors
Created: 19/10/2026
Last Modified: 19/10/2026
License: MIT
*/
use super::line::dimension_of;
use super::{Dimension, Envelope, LineString, Polygon, Vertex};
use std::cell::OnceCell;

/// An unordered set of vertices stored in one record.
#[derive(Clone, Debug, Default)]
pub struct MultiPoint {
    points: Vec<Vertex>,
    envelope: OnceCell<Envelope>,
}

impl MultiPoint {
    pub fn new(points: Vec<Vertex>) -> MultiPoint {
        MultiPoint {
            points,
            envelope: OnceCell::new(),
        }
    }

    pub fn points(&self) -> &[Vertex] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn envelope(&self) -> Envelope {
        *self
            .envelope
            .get_or_init(|| Envelope::from_vertices(&self.points))
    }

    pub fn dimension(&self) -> Dimension {
        dimension_of(&self.points)
    }
}

impl PartialEq for MultiPoint {
    fn eq(&self, other: &Self) -> bool {
        self.points == other.points
    }
}

#[derive(Clone, Debug, Default)]
pub struct MultiLineString {
    lines: Vec<LineString>,
    envelope: OnceCell<Envelope>,
}

impl MultiLineString {
    pub fn new(lines: Vec<LineString>) -> MultiLineString {
        MultiLineString {
            lines,
            envelope: OnceCell::new(),
        }
    }

    pub fn lines(&self) -> &[LineString] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn num_points(&self) -> usize {
        self.lines.iter().map(|l| l.len()).sum()
    }

    pub fn envelope(&self) -> Envelope {
        *self.envelope.get_or_init(|| {
            self.lines
                .iter()
                .fold(Envelope::empty(), |env, l| env.union(&l.envelope()))
        })
    }

    pub fn dimension(&self) -> Dimension {
        self.lines
            .iter()
            .map(|l| l.dimension())
            .max()
            .unwrap_or(Dimension::XY)
    }
}

impl PartialEq for MultiLineString {
    fn eq(&self, other: &Self) -> bool {
        self.lines == other.lines
    }
}

#[derive(Clone, Debug, Default)]
pub struct MultiPolygon {
    polygons: Vec<Polygon>,
    envelope: OnceCell<Envelope>,
}

impl MultiPolygon {
    pub fn new(polygons: Vec<Polygon>) -> MultiPolygon {
        MultiPolygon {
            polygons,
            envelope: OnceCell::new(),
        }
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    pub fn into_polygons(self) -> Vec<Polygon> {
        self.polygons
    }

    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    pub fn num_points(&self) -> usize {
        self.polygons.iter().map(|p| p.num_points()).sum()
    }

    pub fn envelope(&self) -> Envelope {
        *self.envelope.get_or_init(|| {
            self.polygons
                .iter()
                .fold(Envelope::empty(), |env, p| env.union(&p.envelope()))
        })
    }

    pub fn dimension(&self) -> Dimension {
        self.polygons
            .iter()
            .map(|p| p.dimension())
            .max()
            .unwrap_or(Dimension::XY)
    }
}

impl PartialEq for MultiPolygon {
    fn eq(&self, other: &Self) -> bool {
        self.polygons == other.polygons
    }
}
