/*
This code is part of the esri_shapefile library.
Authors: esri_shapefile contributors
Created: 19/10/2026
Last Modified: 19/10/2026
License: MIT
*/

use crate::structures::Point2D;

/// Calculates the signed area of a polygon defined by a series of vertices.
/// Counter-clockwise rings have a positive area, clockwise rings a negative one.
pub fn signed_area(vertices: &[Point2D]) -> f64 {
    let num_vertices = vertices.len();
    if num_vertices < 3 {
        return 0f64;
    }
    let mut area = 0f64;
    for i in 0..num_vertices - 1 {
        area += vertices[i].x * vertices[i + 1].y - vertices[i + 1].x * vertices[i].y;
    }
    area +=
        vertices[num_vertices - 1].x * vertices[0].y - vertices[0].x * vertices[num_vertices - 1].y;
    area / 2.0f64
}

/// Calculates the area of a polygon defined by a series of vertices.
pub fn polygon_area(vertices: &[Point2D]) -> f64 {
    signed_area(vertices).abs()
}
