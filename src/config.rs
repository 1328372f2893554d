//! Planner configuration.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::SourceError;
use crate::geometry::{CLOSE_TOLERANCE, ConfinementArea, Point, STEP_LENGTH};

/// Appleton Tower, where every flight starts and ends.
pub const HOME: Point = Point::new(-3.186874, 55.944494);

/// How the scheduler picks the next order to service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPolicy {
    /// The order with a pickup location closest to the drone.
    #[default]
    NearestShop,
    /// The most valuable remaining order.
    HighestValue,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    pub home: Point,
    pub confinement: ConfinementArea,
    /// Length of one flying move.
    pub step_length: f64,
    /// Distance under which a target counts as reached.
    pub close_tolerance: f64,
    /// Total moves available for the day, hovers included.
    pub move_budget: usize,
    /// Stop taking new legs once this many moves or fewer remain.
    pub safety_margin: usize,
    pub selection: SelectionPolicy,
    /// Upper bound on flying moves in a single leg before it is abandoned.
    pub max_leg_steps: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            home: HOME,
            confinement: ConfinementArea::default(),
            step_length: STEP_LENGTH,
            close_tolerance: CLOSE_TOLERANCE,
            move_budget: 1500,
            safety_margin: 100,
            selection: SelectionPolicy::NearestShop,
            max_leg_steps: 1500,
        }
    }
}

impl PlannerConfig {
    /// Reads a JSON config file. Missing fields keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}
