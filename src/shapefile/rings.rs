/*
This code is part of the esri_shapefile library.
Authors: esri_shapefile contributors
Created: 19/10/2026
Last Modified: 19/10/2026
License: MIT

Notes: Polygon records store every ring of every polygon as a flat list of
parts. Clockwise rings are shells and counter-clockwise rings are holes; a
hole belongs to the innermost shell that contains it.
*/
use crate::geometry::{LinearRing, MultiPolygon, Polygon};

/// Rebuilds polygons-with-holes from the rings of one polygon record.
///
/// Returns `None` when no ring can act as a shell.
pub fn assemble_polygons(rings: Vec<LinearRing>) -> Option<MultiPolygon> {
    let (mut shells, mut holes): (Vec<LinearRing>, Vec<LinearRing>) =
        rings.into_iter().partition(|r| r.is_clockwise());

    // A lone ring wound the wrong way is still a polygon.
    if shells.is_empty() && holes.len() == 1 {
        shells.append(&mut holes);
    }
    if shells.is_empty() {
        return None;
    }

    // depth = number of other shells enclosing this one
    let depth: Vec<usize> = (0..shells.len())
        .map(|i| {
            (0..shells.len())
                .filter(|&j| j != i && shells[j].contains_ring(&shells[i]))
                .count()
        })
        .collect();

    // Innermost shells claim first so that a hole inside a nested shell is
    // never handed to the shell that encloses both.
    let mut order: Vec<usize> = (0..shells.len()).collect();
    order.sort_by(|a, b| depth[*b].cmp(&depth[*a]));

    let mut claimed: Vec<Vec<LinearRing>> = vec![vec![]; shells.len()];
    let mut pool: Vec<Option<LinearRing>> = holes.into_iter().map(Some).collect();
    for &s in &order {
        for slot in pool.iter_mut() {
            let inside = match slot {
                Some(hole) => shells[s].contains_ring(hole),
                None => false,
            };
            if inside {
                if let Some(hole) = slot.take() {
                    claimed[s].push(hole);
                }
            }
        }
    }

    let mut polygons: Vec<Polygon> = shells
        .into_iter()
        .zip(claimed)
        .map(|(shell, holes)| Polygon::from_parts(shell, holes))
        .collect();

    // Holes outside of every shell are kept as polygons of their own rather
    // than silently dropped.
    for orphan in pool.into_iter().flatten() {
        log::debug!("polygon record has a hole ring outside every shell; keeping it as a shell");
        polygons.push(Polygon::from_shell(orphan));
    }

    Some(MultiPolygon::new(polygons))
}

/// Flattens polygons into the ring order written to disk: each shell followed
/// by its holes, shells wound clockwise and holes counter-clockwise.
pub fn flatten_polygons(polygons: &[Polygon]) -> Vec<LinearRing> {
    let mut rings = Vec::with_capacity(polygons.iter().map(|p| 1 + p.holes().len()).sum());
    for polygon in polygons {
        rings.push(polygon.shell().to_clockwise());
        for hole in polygon.holes() {
            rings.push(hole.to_counter_clockwise());
        }
    }
    rings
}
