/*
This code is part of the esri_shapefile library.
Authors: esri_shapefile contributors
Created: 19/10/2026
Last Modified: 19/10/2026
License: MIT
*/
use super::Vertex;
use esri_common::structures::BoundingBox;

/// A closed interval on one axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub fn new(min: f64, max: f64) -> Range {
        if min <= max {
            Range { min, max }
        } else {
            Range { min: max, max: min }
        }
    }

    fn expand_to(&mut self, value: f64) {
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    fn union(a: Option<Range>, b: Option<Range>) -> Option<Range> {
        match (a, b) {
            (Some(a), Some(b)) => Some(Range::new(a.min.min(b.min), a.max.max(b.max))),
            (a, None) => a,
            (None, b) => b,
        }
    }
}

/// Extent of a shape or a whole file, with optional z and measure ranges.
///
/// An envelope that has seen no vertices is "unset" and acts as the
/// identity for `union`, so an empty file never contributes zeros to a
/// real extent.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Envelope {
    xy: Option<BoundingBox>,
    z: Option<Range>,
    m: Option<Range>,
}

impl Envelope {
    pub fn empty() -> Envelope {
        Envelope::default()
    }

    pub fn from_vertex(v: &Vertex) -> Envelope {
        let mut env = Envelope::empty();
        env.expand_to_vertex(v);
        env
    }

    pub fn from_vertices<'a, I: IntoIterator<Item = &'a Vertex>>(vertices: I) -> Envelope {
        let mut env = Envelope::empty();
        for v in vertices {
            env.expand_to_vertex(v);
        }
        env
    }

    pub fn is_empty(&self) -> bool {
        self.xy.is_none()
    }

    pub fn bbox(&self) -> Option<BoundingBox> {
        self.xy
    }

    pub fn z_range(&self) -> Option<Range> {
        self.z
    }

    pub fn m_range(&self) -> Option<Range> {
        self.m
    }

    pub fn expand_to_vertex(&mut self, v: &Vertex) {
        match self.xy.as_mut() {
            Some(bb) => bb.expand_to_point(&v.xy()),
            None => self.xy = Some(BoundingBox::from_point(&v.xy())),
        }
        if let Some(z) = v.z {
            match self.z.as_mut() {
                Some(r) => r.expand_to(z),
                None => self.z = Some(Range::new(z, z)),
            }
        }
        if let Some(m) = v.m {
            match self.m.as_mut() {
                Some(r) => r.expand_to(m),
                None => self.m = Some(Range::new(m, m)),
            }
        }
    }

    pub fn expand_to(&mut self, other: &Envelope) {
        *self = self.union(other);
    }

    pub fn union(&self, other: &Envelope) -> Envelope {
        let xy = match (self.xy, other.xy) {
            (Some(mut a), Some(b)) => {
                a.expand_to(b);
                Some(a)
            }
            (a, None) => a,
            (None, b) => b,
        };
        Envelope {
            xy,
            z: Range::union(self.z, other.z),
            m: Range::union(self.m, other.m),
        }
    }

    /// Planar containment; an unset envelope contains nothing and is
    /// contained by nothing.
    pub fn contains(&self, other: &Envelope) -> bool {
        match (self.xy, other.xy) {
            (Some(a), Some(b)) => a.contains(b),
            _ => false,
        }
    }

    pub fn overlaps(&self, other: &Envelope) -> bool {
        match (self.xy, other.xy) {
            (Some(a), Some(b)) => a.overlaps(b),
            _ => false,
        }
    }

    pub fn min_x(&self) -> f64 {
        self.xy.map_or(0f64, |bb| bb.min_x)
    }

    pub fn min_y(&self) -> f64 {
        self.xy.map_or(0f64, |bb| bb.min_y)
    }

    pub fn max_x(&self) -> f64 {
        self.xy.map_or(0f64, |bb| bb.max_x)
    }

    pub fn max_y(&self) -> f64 {
        self.xy.map_or(0f64, |bb| bb.max_y)
    }
}
