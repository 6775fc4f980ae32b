/*
This code is part of the esri_shapefile library.
Authors: esri_shapefile contributors
Created: 19/10/2026
Last Modified: 19/10/2026
License: MIT
*/
use crate::structures::Point2D;

/// Checks whether a sequence of Point2D are in clockwise order, with y
/// increasing upwards. Sequences with fewer than three distinct vertices
/// have no orientation and return false.
pub fn is_clockwise_order(points: &[Point2D]) -> bool {
    // This approach is based on the method described by Paul Bourke, March 1998
    // http://paulbourke.net/geometry/clockwise/index.html
    if points.len() < 3 {
        return false;
    }

    let end_point = if points[0] == points[points.len() - 1] {
        // The last point is the same as the first...it's not a legitimate point.
        points.len() - 2
    } else {
        points.len() - 1
    };

    let num_points_in_part = end_point + 1;
    if num_points_in_part < 3 {
        return false;
    }

    // first see if it is a convex or concave polygon
    // calculate the cross product for each adjacent edge.
    let mut crossproducts = vec![0f64; num_points_in_part];
    for j in 0..num_points_in_part {
        let n2 = j;
        let (n1, n3) = if j == 0 {
            (num_points_in_part - 1, j + 1)
        } else if j == num_points_in_part - 1 {
            (j - 1, 0)
        } else {
            (j - 1, j + 1)
        };
        crossproducts[j] = (points[n2].x - points[n1].x) * (points[n3].y - points[n2].y)
            - (points[n2].y - points[n1].y) * (points[n3].x - points[n2].x);
    }

    let test_sign = crossproducts[0] >= 0f64;
    let is_convex = crossproducts[1..]
        .iter()
        .all(|&cp| (cp >= 0f64) == test_sign);

    if is_convex {
        // positive means counter-clockwise
        return !test_sign;
    }

    // a negative signed area indicates clockwise order
    let mut area = 0f64;
    for j in 0..num_points_in_part {
        let n1 = j;
        let n2 = if j < num_points_in_part - 1 { j + 1 } else { 0 };
        area += (points[n1].x * points[n2].y) - (points[n2].x * points[n1].y);
    }
    area < 0f64
}

#[cfg(test)]
mod test {
    use super::is_clockwise_order;
    use crate::structures::Point2D;

    #[test]
    fn test_is_clockwise_order() {
        let mut points: Vec<Point2D> = Vec::new();
        points.push(Point2D::new(0f64, 0f64));
        points.push(Point2D::new(1f64, 0f64));
        points.push(Point2D::new(1f64, 1f64));
        points.push(Point2D::new(0f64, 1f64));
        points.push(Point2D::new(0f64, 0f64));

        assert_eq!(is_clockwise_order(&points), false);

        points.reverse();
        assert_eq!(is_clockwise_order(&points), true);
    }

    #[test]
    fn test_concave_ring() {
        // an L-shape traced clockwise
        let points = vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(0.0, 2.0),
            Point2D::new(1.0, 2.0),
            Point2D::new(1.0, 1.0),
            Point2D::new(2.0, 1.0),
            Point2D::new(2.0, 0.0),
            Point2D::new(0.0, 0.0),
        ];
        assert!(is_clockwise_order(&points));
    }

    #[test]
    fn test_degenerate() {
        let points = vec![Point2D::new(0.0, 0.0), Point2D::new(1.0, 0.0), Point2D::new(0.0, 0.0)];
        assert_eq!(is_clockwise_order(&points), false);
        assert_eq!(is_clockwise_order(&[]), false);
    }
}
