//! Convex obstacle boundary around the no-fly zones.
//!
//! Every no-fly-zone vertex is wrapped in a single convex polygon, which the
//! drone treats as one conservative obstacle.

use tracing::warn;

use crate::geometry::{Point, cross, segments_intersect};

/// A closed convex polyline, counter-clockwise from the leftmost vertex.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObstacleBoundary {
    vertices: Vec<Point>,
    edges: Vec<(Point, Point)>,
}

impl ObstacleBoundary {
    /// Gift-wraps `points` into a convex boundary.
    ///
    /// Duplicate vertices are ignored. With fewer than two distinct vertices
    /// the boundary is empty; collinear input collapses to the segment
    /// between its extreme vertices (traversed both ways).
    pub fn from_vertices(points: &[Point]) -> Self {
        let mut distinct: Vec<Point> = Vec::with_capacity(points.len());
        for point in points {
            if !distinct.contains(point) {
                distinct.push(*point);
            }
        }

        if distinct.len() < 2 {
            if !distinct.is_empty() {
                warn!("single no-fly-zone vertex, treating airspace as unobstructed");
            }
            return Self::default();
        }

        let vertices = gift_wrap(&distinct);
        if vertices.len() < 3 {
            warn!(
                vertices = distinct.len(),
                "collinear no-fly-zone vertices, boundary degenerates to a segment"
            );
        }

        let edges = vertices
            .iter()
            .zip(vertices.iter().cycle().skip(1))
            .map(|(from, to)| (*from, *to))
            .collect();

        Self { vertices, edges }
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn edges(&self) -> &[(Point, Point)] {
        &self.edges
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// True when the boundary has no interior (a segment).
    pub fn is_degenerate(&self) -> bool {
        !self.vertices.is_empty() && self.vertices.len() < 3
    }

    /// True if the segment `from..to` touches or crosses any edge.
    pub fn crossed_by(&self, from: &Point, to: &Point) -> bool {
        self.edges
            .iter()
            .any(|(a, b)| segments_intersect(from, to, a, b))
    }

    /// Point-in-polygon test that includes the boundary itself.
    pub fn encloses(&self, point: &Point) -> bool {
        if self.vertices.len() < 3 {
            return false;
        }
        self.edges.iter().all(|(a, b)| cross(a, b, point) >= 0.0)
    }
}

/// Jarvis march over distinct points. Returns hull vertices in
/// counter-clockwise order starting at the leftmost point.
fn gift_wrap(points: &[Point]) -> Vec<Point> {
    let start = points
        .iter()
        .enumerate()
        .fold(0, |best, (i, p)| if p.lng < points[best].lng { i } else { best });

    let mut hull = Vec::new();
    let mut current = start;
    loop {
        hull.push(points[current]);

        let mut next = (current + 1) % points.len();
        for (candidate, point) in points.iter().enumerate() {
            if candidate == current {
                continue;
            }
            let turn = cross(&points[current], &points[next], point);
            // Right of current->next means `point` is further clockwise, so
            // `next` cannot be on the hull. Collinear ties go to the farther point.
            let farther = turn == 0.0
                && points[current].distance_to(point) > points[current].distance_to(&points[next]);
            if turn < 0.0 || farther {
                next = candidate;
            }
        }

        current = next;
        if current == start || hull.len() > points.len() {
            break;
        }
    }

    hull
}
