//! Flight path as a coordinate polyline.
//!
//! The planner works with the move log; this is the shape handed to map
//! exports, one vertex per position the drone passes through.

use crate::flight::Move;
use crate::geometry::Point;

#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    points: Vec<Point>,
}

impl Polyline {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// The start of the first move followed by the end of every move.
    /// Hovers repeat the current vertex.
    pub fn from_moves(moves: &[Move]) -> Self {
        let mut points = Vec::with_capacity(moves.len() + 1);
        if let Some(first) = moves.first() {
            points.push(first.from);
        }
        points.extend(moves.iter().map(|entry| entry.to));
        Self { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    /// Summed length of all segments, in degrees.
    pub fn length(&self) -> f64 {
        self.points
            .windows(2)
            .map(|pair| pair[0].distance_to(&pair[1]))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Heading, STEP_LENGTH};
    use approx::assert_relative_eq;

    fn flight() -> Vec<Move> {
        let start = Point::new(-3.186874, 55.944494);
        let west = start.step(Heading::Degrees(180), STEP_LENGTH);
        let north = west.step(Heading::Degrees(90), STEP_LENGTH);
        vec![
            Move { order_no: Some("a".into()), from: start, heading: Heading::Degrees(180), to: west },
            Move { order_no: Some("a".into()), from: west, heading: Heading::Hover, to: west },
            Move { order_no: None, from: west, heading: Heading::Degrees(90), to: north },
        ]
    }

    #[test]
    fn test_from_moves_traces_every_position() {
        let moves = flight();
        let polyline = Polyline::from_moves(&moves);
        assert_eq!(polyline.points().len(), 4);
        assert_eq!(polyline.points()[0], moves[0].from);
        assert_eq!(polyline.points()[3], moves[2].to);
    }

    #[test]
    fn test_length_ignores_hovers() {
        let polyline = Polyline::from_moves(&flight());
        assert_relative_eq!(polyline.length(), 2.0 * STEP_LENGTH, max_relative = 1e-9);
    }

    #[test]
    fn test_empty_flight() {
        let polyline = Polyline::from_moves(&[]);
        assert!(polyline.points().is_empty());
        assert_eq!(polyline.length(), 0.0);
    }

    #[test]
    fn test_into_points() {
        let points = vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)];
        let polyline = Polyline::new(points.clone());
        assert_eq!(polyline.into_points(), points);
    }
}
