/*
This code is part of the esri_shapefile library.
Authors: esri_shapefile contributors
Created: 19/10/2026
Last Modified: 19/10/2026
License: MIT
*/

use crate::structures::{BoundingBox, Point2D};
use std::f64::EPSILON;

/// Tests whether a point is within in a polygon using the winding number (wn).
/// Points on the edge of the poly are deemed outside; see `point_on_boundary`.
pub fn point_in_poly(p: &Point2D, poly: &[Point2D]) -> bool {
    winding_number(p, poly) % 2 != 0i32
}

/// Calculates the winding number of a polygon around a point, based on
/// http://geomalgorithms.com/a03-_inclusion.html. The polygon may be given
/// closed (poly[n] == poly[0]) or open; the closing edge is implied.
pub fn winding_number(p: &Point2D, poly: &[Point2D]) -> i32 {
    let n = poly.len();
    if n < 3 {
        return 0i32;
    }
    let mut wn = 0i32;
    for i in 0..n {
        let a = &poly[i];
        let b = &poly[(i + 1) % n];
        if a.y <= p.y {
            // an upward crossing with p left of the edge
            if b.y > p.y && p.is_left(a, b) > 0f64 {
                wn += 1i32;
            }
        } else if b.y <= p.y && p.is_left(a, b) < 0f64 {
            // a downward crossing with p right of the edge
            wn -= 1i32;
        }
    }
    wn
}

/// Returns true if the point lies on one of the polygon's edges.
pub fn point_on_boundary(p: &Point2D, poly: &[Point2D]) -> bool {
    let n = poly.len();
    if n == 0 {
        return false;
    }
    for i in 0..n {
        let a = &poly[i];
        let b = &poly[(i + 1) % n];
        let mut seg = BoundingBox::from_point(a);
        seg.expand_to_point(b);
        if !seg.is_point_in_box(p.x, p.y) {
            continue;
        }
        let scale = (b.x - a.x).abs().max((b.y - a.y).abs()).max(1f64);
        if p.is_left(a, b).abs() <= EPSILON * scale * scale {
            return true;
        }
    }
    false
}

/// Tests whether one polygon is contained within another polygon. Vertices of
/// the contained polygon may touch the containing polygon's boundary, but an
/// interior point must fall strictly inside. For disjoint polygons the test
/// fails on the first vertex.
pub fn poly_in_poly(contained_poly: &[Point2D], containing_poly: &[Point2D]) -> bool {
    for p in contained_poly {
        if !point_in_poly(p, containing_poly) && !point_on_boundary(p, containing_poly) {
            return false;
        }
    }
    if contained_poly.is_empty() {
        return false;
    }
    point_in_poly(&interior_point(contained_poly), containing_poly)
}

/// Returns a point within the poly when one can be found by probing the
/// midpoints of vertex neighbours; otherwise the centre of the vertices.
pub fn interior_point(poly: &[Point2D]) -> Point2D {
    let num_points = poly.len();
    if num_points > 4 {
        for a in 1..num_points - 1 {
            if poly[a].is_left(&poly[a - 1], &poly[a + 1]).abs() > EPSILON {
                // it's not co-linear
                let midpoint = Point2D::midpoint(&poly[a - 1], &poly[a + 1]);
                if point_in_poly(&midpoint, poly) {
                    return midpoint;
                }
            }
        }
    }
    let distinct = if num_points > 1 && poly[0] == poly[num_points - 1] {
        &poly[0..num_points - 1]
    } else {
        poly
    };
    if distinct.is_empty() {
        return Point2D::default();
    }
    Point2D::centre_point(distinct)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::structures::Point2D;

    fn square(min: f64, max: f64) -> Vec<Point2D> {
        vec![
            Point2D::new(min, min),
            Point2D::new(min, max),
            Point2D::new(max, max),
            Point2D::new(max, min),
            Point2D::new(min, min),
        ]
    }

    #[test]
    fn test_point_in_poly() {
        let poly = [
            Point2D::new(0.0, 0.0),
            Point2D::new(5.0, 0.0),
            Point2D::new(5.0, 5.0),
            Point2D::new(0.0, 0.0),
        ];
        assert!(point_in_poly(&Point2D::new(4.0, 2.0), &poly));
        assert_eq!(point_in_poly(&Point2D::new(12.0, 12.0), &poly), false);
    }

    #[test]
    fn test_winding_number() {
        let poly = [
            Point2D::new(0.0, 0.0),
            Point2D::new(5.0, 0.0),
            Point2D::new(5.0, 5.0),
            Point2D::new(0.0, 0.0),
        ];
        assert_eq!(winding_number(&Point2D::new(4.0, 2.0), &poly), 1i32);
        assert_eq!(winding_number(&Point2D::new(6.0, 2.0), &poly), 0i32);
    }

    #[test]
    fn test_point_on_boundary() {
        let poly = square(0.0, 10.0);
        assert!(point_on_boundary(&Point2D::new(0.0, 5.0), &poly));
        assert!(point_on_boundary(&Point2D::new(10.0, 10.0), &poly));
        assert!(!point_on_boundary(&Point2D::new(5.0, 5.0), &poly));
    }

    #[test]
    fn test_poly_in_poly() {
        let outer = square(0.0, 10.0);
        let inner = square(2.0, 4.0);
        assert!(poly_in_poly(&inner, &outer));
        assert_eq!(poly_in_poly(&outer, &inner), false);
    }

    #[test]
    fn test_touching_vertex_still_contained() {
        let outer = square(0.0, 10.0);
        let touching = vec![
            Point2D::new(0.0, 5.0),
            Point2D::new(3.0, 7.0),
            Point2D::new(3.0, 3.0),
            Point2D::new(0.0, 5.0),
        ];
        assert!(poly_in_poly(&touching, &outer));
    }

    #[test]
    fn test_interior_point_of_triangle() {
        let tri = vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(3.0, 0.0),
            Point2D::new(0.0, 3.0),
            Point2D::new(0.0, 0.0),
        ];
        let p = interior_point(&tri);
        assert!(point_in_poly(&p, &tri));
    }
}
