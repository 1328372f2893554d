//! Move admissibility.

use crate::geometry::{ConfinementArea, Point};
use crate::hull::ObstacleBoundary;

/// The region the drone may fly through: a confinement rectangle minus the
/// obstacle boundary. Built once per run and only read afterwards.
#[derive(Debug, Clone)]
pub struct Airspace {
    boundary: ObstacleBoundary,
    confinement: ConfinementArea,
}

impl Airspace {
    pub fn new(boundary: ObstacleBoundary, confinement: ConfinementArea) -> Self {
        Self {
            boundary,
            confinement,
        }
    }

    /// Builds the boundary from raw no-fly-zone vertices.
    pub fn from_no_fly_vertices(vertices: &[Point], confinement: ConfinementArea) -> Self {
        Self::new(ObstacleBoundary::from_vertices(vertices), confinement)
    }

    pub fn boundary(&self) -> &ObstacleBoundary {
        &self.boundary
    }

    pub fn confinement(&self) -> &ConfinementArea {
        &self.confinement
    }

    /// A straight move is admissible when it ends inside the confinement
    /// area and neither crosses nor touches the obstacle boundary.
    pub fn is_valid_move(&self, from: &Point, to: &Point) -> bool {
        self.confinement.contains(to) && !self.boundary.crossed_by(from, to)
    }
}
