//! Planar geometry primitives.
//!
//! Coordinates are treated as a flat plane: the operating area is small
//! enough that degrees of longitude and latitude are used directly as
//! Euclidean axes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Length of one drone move, in degrees.
pub const STEP_LENGTH: f64 = 0.00015;

/// Two points closer than this are considered the same place.
pub const CLOSE_TOLERANCE: f64 = 0.00015;

/// A longitude/latitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub lng: f64,
    pub lat: f64,
}

impl Point {
    pub const fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    /// Euclidean distance in degrees.
    pub fn distance_to(&self, other: &Point) -> f64 {
        (self.lng - other.lng).hypot(self.lat - other.lat)
    }

    pub fn is_close_to(&self, other: &Point, tolerance: f64) -> bool {
        self.distance_to(other) < tolerance
    }

    /// The point reached by moving `length` along `heading`.
    ///
    /// Angles follow the trigonometric convention: 0 is east, 90 is north.
    /// Hovering leaves the point unchanged.
    pub fn step(&self, heading: Heading, length: f64) -> Point {
        match heading {
            Heading::Hover => *self,
            Heading::Degrees(degrees) => {
                let radians = f64::from(degrees).to_radians();
                Point::new(
                    self.lng + radians.cos() * length,
                    self.lat + radians.sin() * length,
                )
            }
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lng, self.lat)
    }
}

/// Direction of a single move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heading {
    /// A multiple of 10 in `0..=350`.
    Degrees(u16),
    /// Zero displacement, used when collecting or dropping off.
    Hover,
}

impl Heading {
    /// Angle stored for hover moves in exported tables.
    pub const HOVER_ANGLE: i32 = -999;

    /// The 36 admissible flying headings in ascending order.
    pub fn compass() -> impl Iterator<Item = Heading> {
        (0..36u16).map(|i| Heading::Degrees(i * 10))
    }

    pub fn angle(self) -> i32 {
        match self {
            Heading::Degrees(degrees) => i32::from(degrees),
            Heading::Hover => Self::HOVER_ANGLE,
        }
    }
}

/// Axis-aligned rectangle the drone must stay strictly inside.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfinementArea {
    pub min_lng: f64,
    pub max_lng: f64,
    pub min_lat: f64,
    pub max_lat: f64,
}

impl Default for ConfinementArea {
    fn default() -> Self {
        Self {
            min_lng: -3.192473,
            max_lng: -3.184319,
            min_lat: 55.942617,
            max_lat: 55.946233,
        }
    }
}

impl ConfinementArea {
    pub fn contains(&self, point: &Point) -> bool {
        point.lng > self.min_lng
            && point.lng < self.max_lng
            && point.lat > self.min_lat
            && point.lat < self.max_lat
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Collinear,
    Clockwise,
    CounterClockwise,
}

/// Z component of `(a - origin) x (b - origin)`.
pub fn cross(origin: &Point, a: &Point, b: &Point) -> f64 {
    (a.lng - origin.lng) * (b.lat - origin.lat) - (a.lat - origin.lat) * (b.lng - origin.lng)
}

/// Turn direction of the path `p -> q -> r`.
pub fn orientation(p: &Point, q: &Point, r: &Point) -> Orientation {
    let value = cross(p, q, r);
    if value > 0.0 {
        Orientation::CounterClockwise
    } else if value < 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

/// `q` lies within the bounding box of segment `p..r` (used once collinearity is known).
fn within_bounds(p: &Point, q: &Point, r: &Point) -> bool {
    q.lng >= p.lng.min(r.lng)
        && q.lng <= p.lng.max(r.lng)
        && q.lat >= p.lat.min(r.lat)
        && q.lat <= p.lat.max(r.lat)
}

/// Closed segment intersection. Touching endpoints and collinear overlap count.
pub fn segments_intersect(a0: &Point, a1: &Point, b0: &Point, b1: &Point) -> bool {
    let o1 = orientation(a0, a1, b0);
    let o2 = orientation(a0, a1, b1);
    let o3 = orientation(b0, b1, a0);
    let o4 = orientation(b0, b1, a1);

    if o1 != o2 && o3 != o4 {
        return true;
    }

    (o1 == Orientation::Collinear && within_bounds(a0, b0, a1))
        || (o2 == Orientation::Collinear && within_bounds(a0, b1, a1))
        || (o3 == Orientation::Collinear && within_bounds(b0, a0, b1))
        || (o4 == Orientation::Collinear && within_bounds(b0, a1, b1))
}
