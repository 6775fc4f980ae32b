/*
This code is part of the esri_shapefile library.
Authors: esri_shapefile contributors
Created: 19/10/2026
Last Modified: 19/10/2026
License: MIT

Notes: The geometry model shared by the .shp reader and writer. Points carry
optional z and measure values instead of forming a type hierarchy, and the
Geometry enum replaces run-time type tests when choosing an encoding.
*/

// private sub-modules defined in other files
mod envelope;
mod line;
mod multi;
mod polygon;
mod shape_type;
mod vertex;

// exports identifiers from private sub-modules in the current module namespace
pub use self::envelope::{Envelope, Range};
pub use self::line::{LineString, LinearRing};
pub use self::multi::{MultiLineString, MultiPoint, MultiPolygon};
pub use self::polygon::Polygon;
pub use self::shape_type::{Dimension, ShapeType};
pub use self::vertex::Vertex;

/// Any shape that can be stored in a `.shp` record.
#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
    Point(Vertex),
    MultiPoint(MultiPoint),
    LineString(LineString),
    MultiLineString(MultiLineString),
    Polygon(Polygon),
    MultiPolygon(MultiPolygon),
}

impl Geometry {
    /// The dimensionless record type this geometry encodes as.
    pub fn base_shape_type(&self) -> ShapeType {
        match self {
            Geometry::Point(_) => ShapeType::Point,
            Geometry::MultiPoint(_) => ShapeType::MultiPoint,
            Geometry::LineString(_) | Geometry::MultiLineString(_) => ShapeType::PolyLine,
            Geometry::Polygon(_) | Geometry::MultiPolygon(_) => ShapeType::Polygon,
        }
    }

    pub fn dimension(&self) -> Dimension {
        match self {
            Geometry::Point(v) => v.dimension(),
            Geometry::MultiPoint(mp) => mp.dimension(),
            Geometry::LineString(ls) => ls.dimension(),
            Geometry::MultiLineString(mls) => mls.dimension(),
            Geometry::Polygon(p) => p.dimension(),
            Geometry::MultiPolygon(mp) => mp.dimension(),
        }
    }

    /// The narrowest shape type able to hold this geometry.
    pub fn shape_type(&self) -> ShapeType {
        self.base_shape_type().with_dimension(self.dimension())
    }

    pub fn envelope(&self) -> Envelope {
        match self {
            Geometry::Point(v) => Envelope::from_vertex(v),
            Geometry::MultiPoint(mp) => mp.envelope(),
            Geometry::LineString(ls) => ls.envelope(),
            Geometry::MultiLineString(mls) => mls.envelope(),
            Geometry::Polygon(p) => p.envelope(),
            Geometry::MultiPolygon(mp) => mp.envelope(),
        }
    }

    /// Every vertex in encoding order: parts in sequence, shells before holes.
    pub fn vertices(&self) -> Box<dyn Iterator<Item = &Vertex> + '_> {
        fn rings(p: &Polygon) -> impl Iterator<Item = &Vertex> + '_ {
            std::iter::once(p.shell())
                .chain(p.holes().iter())
                .flat_map(|r| r.vertices().iter())
        }
        match self {
            Geometry::Point(v) => Box::new(std::iter::once(v)),
            Geometry::MultiPoint(mp) => Box::new(mp.points().iter()),
            Geometry::LineString(ls) => Box::new(ls.vertices().iter()),
            Geometry::MultiLineString(mls) => Box::new(mls.lines().iter().flat_map(|l| l.vertices().iter())),
            Geometry::Polygon(p) => Box::new(rings(p)),
            Geometry::MultiPolygon(mp) => Box::new(mp.polygons().iter().flat_map(rings)),
        }
    }

    pub fn num_points(&self) -> usize {
        match self {
            Geometry::Point(_) => 1,
            Geometry::MultiPoint(mp) => mp.len(),
            Geometry::LineString(ls) => ls.len(),
            Geometry::MultiLineString(mls) => mls.num_points(),
            Geometry::Polygon(p) => p.num_points(),
            Geometry::MultiPolygon(mp) => mp.num_points(),
        }
    }
}

impl From<Vertex> for Geometry {
    fn from(v: Vertex) -> Geometry {
        Geometry::Point(v)
    }
}

impl From<MultiPoint> for Geometry {
    fn from(mp: MultiPoint) -> Geometry {
        Geometry::MultiPoint(mp)
    }
}

impl From<LineString> for Geometry {
    fn from(ls: LineString) -> Geometry {
        Geometry::LineString(ls)
    }
}

impl From<MultiLineString> for Geometry {
    fn from(mls: MultiLineString) -> Geometry {
        Geometry::MultiLineString(mls)
    }
}

impl From<Polygon> for Geometry {
    fn from(p: Polygon) -> Geometry {
        Geometry::Polygon(p)
    }
}

impl From<MultiPolygon> for Geometry {
    fn from(mp: MultiPolygon) -> Geometry {
        Geometry::MultiPolygon(mp)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_shape_type_follows_dimension() {
        assert_eq!(Geometry::from(Vertex::new(1.0, 2.0)).shape_type(), ShapeType::Point);
        assert_eq!(Geometry::from(Vertex::new_m(1.0, 2.0, 3.0)).shape_type(), ShapeType::PointM);
        let line = LineString::new(vec![
            Vertex::new_z(0.0, 0.0, 1.0, None),
            Vertex::new_z(1.0, 1.0, 2.0, Some(0.5)),
        ]);
        let g = Geometry::from(line);
        assert_eq!(g.shape_type(), ShapeType::PolyLineZ);
        assert_eq!(g.num_points(), 2);
        assert_eq!(g.envelope().z_range(), Some(Range::new(1.0, 2.0)));
    }

    #[test]
    fn test_vertices_walk_every_ring() {
        let square = |o: f64, s: f64| {
            LinearRing::closing(vec![
                Vertex::new(o, o),
                Vertex::new(o, o + s),
                Vertex::new(o + s, o + s),
                Vertex::new(o + s, o),
            ])
        };
        let mut p = Polygon::from_shell(square(0.0, 10.0));
        p.add_hole(square(2.0, 2.0).to_counter_clockwise()).unwrap();
        let g = Geometry::from(MultiPolygon::new(vec![p, Polygon::from_shell(square(20.0, 1.0))]));
        assert_eq!(g.vertices().count(), g.num_points());
        assert_eq!(g.vertices().next(), Some(&Vertex::new(0.0, 0.0)));
        assert_eq!(g.vertices().last(), Some(&Vertex::new(20.0, 20.0)));
    }
}
