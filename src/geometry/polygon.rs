/*
This code is part of the esri_shapefile library.
Authors: esri_shapefile contributors
Created: 19/10/2026
Last Modified: 19/10/2026
License: MIT
*/
use super::{Dimension, Envelope, LinearRing};
use crate::error::{Result, ShapefileError};

/// One shell with zero or more holes. Every hole lies inside the shell.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    shell: LinearRing,
    holes: Vec<LinearRing>,
}

impl Polygon {
    /// Creates a polygon, checking that each hole is contained by the shell.
    pub fn new(shell: LinearRing, holes: Vec<LinearRing>) -> Result<Polygon> {
        let mut polygon = Polygon::from_shell(shell);
        for hole in holes {
            polygon.add_hole(hole)?;
        }
        Ok(polygon)
    }

    pub fn from_shell(shell: LinearRing) -> Polygon {
        Polygon {
            shell,
            holes: vec![],
        }
    }

    /// Assembles a polygon whose holes were already tested for containment.
    pub(crate) fn from_parts(shell: LinearRing, holes: Vec<LinearRing>) -> Polygon {
        Polygon { shell, holes }
    }

    pub fn add_hole(&mut self, hole: LinearRing) -> Result<()> {
        if !self.shell.contains_ring(&hole) {
            return Err(ShapefileError::InvalidGeometry(
                "hole ring is not contained by the polygon shell".to_string(),
            ));
        }
        self.holes.push(hole);
        Ok(())
    }

    pub fn shell(&self) -> &LinearRing {
        &self.shell
    }

    pub fn holes(&self) -> &[LinearRing] {
        &self.holes
    }

    pub fn num_points(&self) -> usize {
        self.shell.len() + self.holes.iter().map(|h| h.len()).sum::<usize>()
    }

    /// The shell's extent; holes never reach beyond it. Measures and
    /// z-values on the holes are folded in.
    pub fn envelope(&self) -> Envelope {
        let mut env = self.shell.envelope();
        for hole in &self.holes {
            env.expand_to(&hole.envelope());
        }
        env
    }

    pub fn dimension(&self) -> Dimension {
        self.holes
            .iter()
            .map(|h| h.dimension())
            .fold(self.shell.dimension(), |a, b| a.max(b))
    }

    /// Returns a copy with the shell wound clockwise and every hole
    /// counter-clockwise, as ESRI requires.
    pub fn normalized(&self) -> Polygon {
        Polygon {
            shell: self.shell.to_clockwise(),
            holes: self.holes.iter().map(|h| h.to_counter_clockwise()).collect(),
        }
    }
}
