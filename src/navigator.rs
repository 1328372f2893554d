//! Greedy step-by-step navigation.

use tracing::debug;

use crate::airspace::Airspace;
use crate::config::PlannerConfig;
use crate::error::NavigationError;
use crate::flight::{FlightLog, Move};
use crate::geometry::{Heading, Point};

/// Result of looking for the next move towards a goal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepOutcome {
    Moved { heading: Heading, to: Point },
    Blocked,
}

/// Flies the drone towards targets one discrete move at a time.
#[derive(Debug, Clone)]
pub struct Navigator<'a> {
    airspace: &'a Airspace,
    landmarks: &'a [Point],
    step_length: f64,
    tolerance: f64,
    max_leg_steps: usize,
}

impl<'a> Navigator<'a> {
    pub fn new(airspace: &'a Airspace, landmarks: &'a [Point], config: &PlannerConfig) -> Self {
        Self {
            airspace,
            landmarks,
            step_length: config.step_length,
            tolerance: config.close_tolerance,
            max_leg_steps: config.max_leg_steps,
        }
    }

    /// The admissible heading whose endpoint lands closest to `goal`.
    /// Ties go to the lowest heading.
    pub fn best_step(&self, from: &Point, goal: &Point) -> StepOutcome {
        Heading::compass()
            .map(|heading| (heading, from.step(heading, self.step_length)))
            .filter(|(_, to)| self.airspace.is_valid_move(from, to))
            .min_by(|(_, a), (_, b)| a.distance_to(goal).total_cmp(&b.distance_to(goal)))
            .map_or(StepOutcome::Blocked, |(heading, to)| StepOutcome::Moved { heading, to })
    }

    /// Steps greedily until close to `goal`, logging every move under
    /// `order_no`. Returns the final position.
    ///
    /// At most `max_steps` moves are flown, and never more than the
    /// configured per-leg limit. Moves logged before a failure stay in the log.
    pub fn move_toward(
        &self,
        log: &mut FlightLog,
        order_no: Option<&str>,
        from: Point,
        goal: Point,
        max_steps: usize,
    ) -> Result<Point, NavigationError> {
        let limit = max_steps.min(self.max_leg_steps);
        let mut current = from;
        let mut steps = 0;

        while !current.is_close_to(&goal, self.tolerance) {
            if steps >= limit {
                return Err(NavigationError::StepLimit { goal, steps });
            }

            match self.best_step(&current, &goal) {
                StepOutcome::Blocked => {
                    return Err(NavigationError::Blocked { at: current, goal });
                }
                StepOutcome::Moved { heading, to } => {
                    log.record(Move {
                        order_no: order_no.map(str::to_string),
                        from: current,
                        heading,
                        to,
                    });
                    current = to;
                    steps += 1;
                }
            }
        }

        Ok(current)
    }

    /// Among landmarks reachable in a straight admissible line from `from`,
    /// the one nearest `goal`.
    pub fn closest_landmark(&self, from: &Point, goal: &Point) -> Option<Point> {
        self.landmarks
            .iter()
            .filter(|landmark| self.airspace.is_valid_move(from, landmark))
            .min_by(|a, b| a.distance_to(goal).total_cmp(&b.distance_to(goal)))
            .copied()
    }

    /// Flies to `goal`, first detouring through the closest reachable
    /// landmark when the straight line is not admissible. The detour and the
    /// final approach share the `max_steps` allowance.
    pub fn find_goal(
        &self,
        log: &mut FlightLog,
        order_no: Option<&str>,
        from: Point,
        goal: Point,
        max_steps: usize,
    ) -> Result<Point, NavigationError> {
        let mut position = from;
        let start = log.len();

        if !self.airspace.is_valid_move(&from, &goal) {
            if let Some(landmark) = self.closest_landmark(&from, &goal) {
                debug!(%from, %goal, %landmark, "direct line blocked, detouring");
                position = self.move_toward(log, order_no, position, landmark, max_steps)?;
            }
        }

        let detour = log.len() - start;
        self.move_toward(log, order_no, position, goal, max_steps.saturating_sub(detour))
            .map_err(|err| match err {
                NavigationError::StepLimit { goal, steps } => NavigationError::StepLimit {
                    goal,
                    steps: steps + detour,
                },
                other => other,
            })
    }
}
