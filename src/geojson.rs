//! The small slice of GeoJSON the planner reads and writes.
//!
//! Only points, line strings and polygons are modelled; any other geometry
//! deserializes as [`Geometry::Unsupported`] and is skipped with a warning.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

use crate::error::SourceError;
use crate::geometry::Point;
use crate::polyline::Polyline;

/// GeoJSON position, `[longitude, latitude]`.
pub type Position = [f64; 2];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point { coordinates: Position },
    LineString { coordinates: Vec<Position> },
    /// Rings of positions; the first ring is the outer boundary.
    Polygon { coordinates: Vec<Vec<Position>> },
    #[serde(other)]
    Unsupported,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
enum FeatureTag {
    Feature,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
enum FeatureCollectionTag {
    FeatureCollection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type")]
    tag: FeatureTag,
    pub geometry: Geometry,
    #[serde(default)]
    pub properties: Map<String, Value>,
}

impl Feature {
    pub fn new(geometry: Geometry) -> Self {
        Self {
            tag: FeatureTag::Feature,
            geometry,
            properties: Map::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    tag: FeatureCollectionTag,
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn new(features: Vec<Feature>) -> Self {
        Self {
            tag: FeatureCollectionTag::FeatureCollection,
            features,
        }
    }

    pub fn from_json(text: &str) -> Result<Self, SourceError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json(&self) -> Result<String, SourceError> {
        Ok(serde_json::to_string(self)?)
    }

    /// A single line-string feature tracing `path`.
    pub fn flight_path(path: &Polyline) -> Self {
        let coordinates = path.points().iter().map(position).collect();
        Self::new(vec![Feature::new(Geometry::LineString { coordinates })])
    }

    /// Every point feature, e.g. the landmark layer.
    pub fn points(&self) -> Vec<Point> {
        let mut points = Vec::new();
        for feature in &self.features {
            match &feature.geometry {
                Geometry::Point { coordinates } => points.push(point(coordinates)),
                other => warn!(geometry = ?other, "expected a point feature, skipping"),
            }
        }
        points
    }

    /// Outer-ring vertices of every polygon, flattened. Duplicates are kept.
    pub fn polygon_vertices(&self) -> Vec<Point> {
        let mut vertices = Vec::new();
        for feature in &self.features {
            match &feature.geometry {
                Geometry::Polygon { coordinates } => {
                    if let Some(outer) = coordinates.first() {
                        vertices.extend(outer.iter().map(point));
                    }
                }
                other => warn!(geometry = ?other, "expected a polygon feature, skipping"),
            }
        }
        vertices
    }
}

fn point(position: &Position) -> Point {
    Point::new(position[0], position[1])
}

fn position(point: &Point) -> Position {
    [point.lng, point.lat]
}

/// Writes the flight path map, replacing any existing file.
pub fn write_flight_map(path: &Polyline, dest: &Path) -> Result<(), SourceError> {
    let collection = FeatureCollection::flight_path(path);
    let tmp_path = dest.with_extension("tmp");
    let mut writer = BufWriter::new(File::create(&tmp_path)?);
    serde_json::to_writer(&mut writer, &collection)?;
    writer.flush()?;
    drop(writer);
    fs::rename(tmp_path, dest)?;
    Ok(())
}
