/*
This code is part of the esri_shapefile library.
Authors: esri_shapefile contributors
Created: 19/10/2026
Last Modified: 19/10/2026
License: MIT
*/
use super::{Dimension, Envelope, Vertex};
use crate::error::{Result, ShapefileError};
use esri_common::algorithms::{
    is_clockwise_order, point_in_poly, point_on_boundary, poly_in_poly, signed_area,
};
use esri_common::structures::Point2D;
use std::cell::OnceCell;

pub(crate) fn dimension_of(vertices: &[Vertex]) -> Dimension {
    vertices
        .iter()
        .map(|v| v.dimension())
        .max()
        .unwrap_or(Dimension::XY)
}

/// An open sequence of vertices.
#[derive(Clone, Debug, Default)]
pub struct LineString {
    vertices: Vec<Vertex>,
    envelope: OnceCell<Envelope>,
}

impl LineString {
    pub fn new(vertices: Vec<Vertex>) -> LineString {
        LineString {
            vertices,
            envelope: OnceCell::new(),
        }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn into_vertices(self) -> Vec<Vertex> {
        self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn envelope(&self) -> Envelope {
        *self
            .envelope
            .get_or_init(|| Envelope::from_vertices(&self.vertices))
    }

    pub fn dimension(&self) -> Dimension {
        dimension_of(&self.vertices)
    }
}

impl PartialEq for LineString {
    fn eq(&self, other: &Self) -> bool {
        self.vertices == other.vertices
    }
}

/// A closed sequence of vertices (the first vertex equals the last) used as
/// a polygon boundary. Orientation and extent are computed on first use.
#[derive(Clone, Debug)]
pub struct LinearRing {
    vertices: Vec<Vertex>,
    clockwise: OnceCell<bool>,
    envelope: OnceCell<Envelope>,
}

impl LinearRing {
    /// Creates a ring from vertices that are already closed.
    pub fn new(vertices: Vec<Vertex>) -> Result<LinearRing> {
        if vertices.len() < 4 {
            return Err(ShapefileError::InvalidGeometry(format!(
                "a ring needs at least 4 vertices, found {}",
                vertices.len()
            )));
        }
        if vertices[0].xy() != vertices[vertices.len() - 1].xy() {
            return Err(ShapefileError::InvalidGeometry(
                "ring is not closed; the first and last vertices differ".to_string(),
            ));
        }
        Ok(LinearRing::from_closed(vertices))
    }

    /// Creates a ring, appending a copy of the first vertex if the sequence
    /// is open. Used when decoding rings written by less careful software.
    pub fn closing(mut vertices: Vec<Vertex>) -> LinearRing {
        if let (Some(first), Some(last)) = (vertices.first(), vertices.last()) {
            if first.xy() != last.xy() {
                let first = *first;
                vertices.push(first);
            }
        }
        LinearRing::from_closed(vertices)
    }

    fn from_closed(vertices: Vec<Vertex>) -> LinearRing {
        LinearRing {
            vertices,
            clockwise: OnceCell::new(),
            envelope: OnceCell::new(),
        }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn is_closed(&self) -> bool {
        match (self.vertices.first(), self.vertices.last()) {
            (Some(a), Some(b)) => a.xy() == b.xy(),
            _ => false,
        }
    }

    pub fn points(&self) -> Vec<Point2D> {
        self.vertices.iter().map(|v| v.xy()).collect()
    }

    /// ESRI winding: clockwise rings are shells, counter-clockwise rings holes.
    pub fn is_clockwise(&self) -> bool {
        *self
            .clockwise
            .get_or_init(|| is_clockwise_order(&self.points()))
    }

    pub fn signed_area(&self) -> f64 {
        signed_area(&self.points())
    }

    pub fn envelope(&self) -> Envelope {
        *self
            .envelope
            .get_or_init(|| Envelope::from_vertices(&self.vertices))
    }

    pub fn dimension(&self) -> Dimension {
        dimension_of(&self.vertices)
    }

    pub fn reversed(&self) -> LinearRing {
        let mut vertices = self.vertices.clone();
        vertices.reverse();
        let ring = LinearRing::from_closed(vertices);
        if let Some(cw) = self.clockwise.get() {
            let _ = ring.clockwise.set(!cw);
        }
        if let Some(env) = self.envelope.get() {
            let _ = ring.envelope.set(*env);
        }
        ring
    }

    /// Returns this ring wound clockwise (shell orientation).
    pub fn to_clockwise(&self) -> LinearRing {
        if self.is_clockwise() {
            self.clone()
        } else {
            self.reversed()
        }
    }

    /// Returns this ring wound counter-clockwise (hole orientation).
    pub fn to_counter_clockwise(&self) -> LinearRing {
        if self.is_clockwise() {
            self.reversed()
        } else {
            self.clone()
        }
    }

    /// True if the point is inside the ring or on its boundary.
    pub fn contains_point(&self, p: &Point2D) -> bool {
        let points = self.points();
        point_in_poly(p, &points) || point_on_boundary(p, &points)
    }

    /// True if every vertex of `other` lies within this ring. A cheap extent
    /// test runs first.
    pub fn contains_ring(&self, other: &LinearRing) -> bool {
        if !self.envelope().contains(&other.envelope()) {
            return false;
        }
        poly_in_poly(&other.points(), &self.points())
    }
}

impl PartialEq for LinearRing {
    fn eq(&self, other: &Self) -> bool {
        self.vertices == other.vertices
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn square(min: f64, max: f64, clockwise: bool) -> Vec<Vertex> {
        let mut v = vec![
            Vertex::new(min, min),
            Vertex::new(min, max),
            Vertex::new(max, max),
            Vertex::new(max, min),
            Vertex::new(min, min),
        ];
        if !clockwise {
            v.reverse();
        }
        v
    }

    #[test]
    fn test_ring_orientation() {
        let ring = LinearRing::new(square(0.0, 10.0, true)).unwrap();
        assert!(ring.is_clockwise());
        assert!(ring.signed_area() < 0.0);
        let rev = ring.reversed();
        assert!(!rev.is_clockwise());
        assert_eq!(rev.to_clockwise(), ring);
        assert_eq!(ring.to_counter_clockwise(), rev);
    }

    #[test]
    fn test_ring_validation() {
        let open = vec![Vertex::new(0.0, 0.0), Vertex::new(0.0, 1.0), Vertex::new(1.0, 1.0), Vertex::new(1.0, 0.0)];
        assert!(LinearRing::new(open.clone()).is_err());
        assert!(LinearRing::new(vec![Vertex::new(0.0, 0.0)]).is_err());
        let closed = LinearRing::closing(open);
        assert!(closed.is_closed());
        assert_eq!(closed.len(), 5);
    }

    #[test]
    fn test_ring_containment() {
        let outer = LinearRing::new(square(0.0, 10.0, true)).unwrap();
        let inner = LinearRing::new(square(2.0, 4.0, false)).unwrap();
        let apart = LinearRing::new(square(20.0, 30.0, false)).unwrap();
        assert!(outer.contains_ring(&inner));
        assert!(!inner.contains_ring(&outer));
        assert!(!outer.contains_ring(&apart));
        assert!(outer.contains_point(&Point2D::new(0.0, 5.0)));
        assert!(!outer.contains_point(&Point2D::new(11.0, 5.0)));
    }

    #[test]
    fn test_lazy_envelope_and_dimension() {
        let line = LineString::new(vec![Vertex::new_m(0.0, 1.0, 3.0), Vertex::new(2.0, -1.0)]);
        let env = line.envelope();
        assert_eq!(env.min_y(), -1.0);
        assert_eq!(env.max_x(), 2.0);
        assert_eq!(line.dimension(), Dimension::Measure);
    }
}
