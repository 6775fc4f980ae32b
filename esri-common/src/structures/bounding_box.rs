/*
This code is part of the esri_shapefile library.
Authors: esri_shapefile contributors
Created: 19/10/2026
Last Modified: 19/10/2026
License: MIT
*/
use crate::structures::Point2D;

/// An axis-aligned planar extent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    pub fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> BoundingBox {
        let (x1, x2) = if min_x < max_x { (min_x, max_x) } else { (max_x, min_x) };
        let (y1, y2) = if min_y < max_y { (min_y, max_y) } else { (max_y, min_y) };
        BoundingBox {
            min_x: x1,
            min_y: y1,
            max_x: x2,
            max_y: y2,
        }
    }

    /// A degenerate box covering a single point.
    pub fn from_point(p: &Point2D) -> BoundingBox {
        BoundingBox {
            min_x: p.x,
            min_y: p.y,
            max_x: p.x,
            max_y: p.y,
        }
    }

    pub fn get_height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn get_width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn overlaps(&self, other: BoundingBox) -> bool {
        !(self.max_y < other.min_y
            || self.max_x < other.min_x
            || self.min_y > other.max_y
            || self.min_x > other.max_x)
    }

    pub fn contains(&self, other: BoundingBox) -> bool {
        other.max_y <= self.max_y
            && other.max_x <= self.max_x
            && other.min_y >= self.min_y
            && other.min_x >= self.min_x
    }

    pub fn is_point_in_box(&self, x: f64, y: f64) -> bool {
        !(self.max_y < y || self.max_x < x || self.min_y > y || self.min_x > x)
    }

    pub fn expand_to(&mut self, other: BoundingBox) {
        self.max_y = self.max_y.max(other.max_y);
        self.max_x = self.max_x.max(other.max_x);
        self.min_y = self.min_y.min(other.min_y);
        self.min_x = self.min_x.min(other.min_x);
    }

    pub fn expand_to_point(&mut self, p: &Point2D) {
        self.expand_to(BoundingBox::from_point(p));
    }
}
