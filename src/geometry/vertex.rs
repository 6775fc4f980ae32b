/*
This code is part of the esri_shapefile library.
Authors: esri_shapefile contributors
Created: 19/10/2026
Last Modified: 19/10/2026
License: MIT
*/
use super::Dimension;
use esri_common::structures::Point2D;
use std::fmt;

/// A single coordinate, optionally carrying a z-value and a measure.
///
/// On disk a Z-type vertex is laid out X, Y, Z, M even though M is the
/// lesser extension. A `None` measure is the "no data" measure.
#[derive(Default, Copy, Clone, Debug, PartialEq)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
    pub z: Option<f64>,
    pub m: Option<f64>,
}

impl Vertex {
    pub fn new(x: f64, y: f64) -> Vertex {
        Vertex { x, y, z: None, m: None }
    }

    pub fn new_m(x: f64, y: f64, m: f64) -> Vertex {
        Vertex { x, y, z: None, m: Some(m) }
    }

    pub fn new_z(x: f64, y: f64, z: f64, m: Option<f64>) -> Vertex {
        Vertex { x, y, z: Some(z), m }
    }

    pub fn xy(&self) -> Point2D {
        Point2D::new(self.x, self.y)
    }

    /// The smallest dimension able to hold this vertex.
    pub fn dimension(&self) -> Dimension {
        if self.z.is_some() {
            Dimension::Z
        } else if self.m.is_some() {
            Dimension::Measure
        } else {
            Dimension::XY
        }
    }
}

impl From<Point2D> for Vertex {
    fn from(p: Point2D) -> Vertex {
        Vertex::new(p.x, p.y)
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {}", self.x, self.y)?;
        if let Some(z) = self.z {
            write!(f, ", z: {}", z)?;
        }
        if let Some(m) = self.m {
            write!(f, ", m: {}", m)?;
        }
        write!(f, ")")
    }
}
