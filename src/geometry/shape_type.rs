/*
This code is part of the esri_shapefile library.
Authors: esri_shapefile contributors
Created: 19/10/2026
Last Modified: 19/10/2026
License: MIT
*/
use std::fmt;

/// Shape type codes as stored in the `.shp` header and in each record.
#[repr(u16)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ShapeType {
    Null = 0,
    Point = 1,
    PolyLine = 3,
    Polygon = 5,
    MultiPoint = 8,
    PointZ = 11,
    PolyLineZ = 13,
    PolygonZ = 15,
    MultiPointZ = 18,
    PointM = 21,
    PolyLineM = 23,
    PolygonM = 25,
    MultiPointM = 28,
    MultiPatch = 31,
}

impl ShapeType {
    pub fn from_int(value: i32) -> Option<ShapeType> {
        match value {
            0 => Some(ShapeType::Null),
            1 => Some(ShapeType::Point),
            3 => Some(ShapeType::PolyLine),
            5 => Some(ShapeType::Polygon),
            8 => Some(ShapeType::MultiPoint),
            11 => Some(ShapeType::PointZ),
            13 => Some(ShapeType::PolyLineZ),
            15 => Some(ShapeType::PolygonZ),
            18 => Some(ShapeType::MultiPointZ),
            21 => Some(ShapeType::PointM),
            23 => Some(ShapeType::PolyLineM),
            25 => Some(ShapeType::PolygonM),
            28 => Some(ShapeType::MultiPointM),
            31 => Some(ShapeType::MultiPatch),
            _ => None,
        }
    }

    pub fn to_int(&self) -> i32 {
        *self as i32
    }

    pub fn base_shape_type(&self) -> ShapeType {
        match self {
            ShapeType::Null => ShapeType::Null,
            ShapeType::Point | ShapeType::PointZ | ShapeType::PointM => ShapeType::Point,
            ShapeType::PolyLine | ShapeType::PolyLineZ | ShapeType::PolyLineM => {
                ShapeType::PolyLine
            }
            ShapeType::Polygon | ShapeType::PolygonZ | ShapeType::PolygonM => ShapeType::Polygon,
            ShapeType::MultiPoint | ShapeType::MultiPointZ | ShapeType::MultiPointM => {
                ShapeType::MultiPoint
            }
            ShapeType::MultiPatch => ShapeType::MultiPatch,
        }
    }

    pub fn dimension(&self) -> Dimension {
        match self {
            ShapeType::Null
            | ShapeType::MultiPoint
            | ShapeType::Point
            | ShapeType::Polygon
            | ShapeType::PolyLine => Dimension::XY,
            ShapeType::MultiPointM
            | ShapeType::PointM
            | ShapeType::PolygonM
            | ShapeType::PolyLineM => Dimension::Measure,
            ShapeType::MultiPointZ
            | ShapeType::PointZ
            | ShapeType::PolygonZ
            | ShapeType::PolyLineZ
            | ShapeType::MultiPatch => Dimension::Z,
        }
    }

    /// Combines a base type (Point, PolyLine, Polygon, MultiPoint) with a
    /// dimension. Null and MultiPatch are returned unchanged.
    pub fn with_dimension(&self, dimension: Dimension) -> ShapeType {
        match (self.base_shape_type(), dimension) {
            (ShapeType::Point, Dimension::XY) => ShapeType::Point,
            (ShapeType::Point, Dimension::Measure) => ShapeType::PointM,
            (ShapeType::Point, Dimension::Z) => ShapeType::PointZ,
            (ShapeType::PolyLine, Dimension::XY) => ShapeType::PolyLine,
            (ShapeType::PolyLine, Dimension::Measure) => ShapeType::PolyLineM,
            (ShapeType::PolyLine, Dimension::Z) => ShapeType::PolyLineZ,
            (ShapeType::Polygon, Dimension::XY) => ShapeType::Polygon,
            (ShapeType::Polygon, Dimension::Measure) => ShapeType::PolygonM,
            (ShapeType::Polygon, Dimension::Z) => ShapeType::PolygonZ,
            (ShapeType::MultiPoint, Dimension::XY) => ShapeType::MultiPoint,
            (ShapeType::MultiPoint, Dimension::Measure) => ShapeType::MultiPointM,
            (ShapeType::MultiPoint, Dimension::Z) => ShapeType::MultiPointZ,
            (other, _) => other,
        }
    }

    /// True for every type that stores an M block (the M and Z variants).
    pub fn has_m(&self) -> bool {
        self.dimension() != Dimension::XY && *self != ShapeType::MultiPatch
    }

    pub fn has_z(&self) -> bool {
        self.dimension() == Dimension::Z
    }
}

impl Default for ShapeType {
    fn default() -> ShapeType {
        ShapeType::Null
    }
}

impl fmt::Display for ShapeType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let printable = match *self {
            ShapeType::Null => "Null",
            ShapeType::Point => "Point",
            ShapeType::PolyLine => "PolyLine",
            ShapeType::Polygon => "Polygon",
            ShapeType::MultiPoint => "MultiPoint",
            ShapeType::PointZ => "PointZ",
            ShapeType::PolyLineZ => "PolyLineZ",
            ShapeType::PolygonZ => "PolygonZ",
            ShapeType::MultiPointZ => "MultiPointZ",
            ShapeType::PointM => "PointM",
            ShapeType::PolyLineM => "PolyLineM",
            ShapeType::PolygonM => "PolygonM",
            ShapeType::MultiPointM => "MultiPointM",
            ShapeType::MultiPatch => "MultiPatch",
        };
        write!(f, "{}", printable)
    }
}

/// Which auxiliary ordinates a shape type carries per vertex.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Dimension {
    XY,
    Measure,
    Z,
}
