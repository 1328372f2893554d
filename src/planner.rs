//! Delivery scheduler: decides which order to fly next, drives the
//! navigator through its pickups and drop-off, and brings the drone home.

use std::collections::BTreeMap;

use tracing::{debug, info, warn};

use crate::airspace::Airspace;
use crate::config::{PlannerConfig, SelectionPolicy};
use crate::error::{NavigationError, OrderError};
use crate::flight::{FlightLog, Move};
use crate::geometry::{Heading, Point};
use crate::navigator::Navigator;
use crate::order::Order;

/// How a planning run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanStatus {
    /// Every order was attempted.
    Finished,
    /// The budget margin was reached and remaining orders were dropped.
    OutOfBudget,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UndeliveredReason {
    /// The budget ran out while this order was in progress.
    OutOfBudget,
    /// The run stopped before this order was picked.
    NotAttempted,
    /// The navigator could not reach one of its stops.
    Unreachable(NavigationError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct UndeliveredOrder {
    pub order: Order,
    pub reason: UndeliveredReason,
}

/// Informational totals for a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanSummary {
    pub total_value_pence: u64,
    pub delivered_value_pence: u64,
    pub order_count: usize,
    pub delivered_count: usize,
    pub move_count: usize,
    /// Moves beyond the budget. Order legs stop at the budget, so only the
    /// return leg can run past it.
    pub overrun: usize,
}

impl PlanSummary {
    /// Share of the day's order value that was delivered, in percent.
    pub fn value_percentage(&self) -> f64 {
        percentage(self.delivered_value_pence as f64, self.total_value_pence as f64)
    }

    /// Share of the day's orders that were delivered, in percent.
    pub fn delivery_percentage(&self) -> f64 {
        percentage(self.delivered_count as f64, self.order_count as f64)
    }
}

fn percentage(part: f64, whole: f64) -> f64 {
    if whole == 0.0 { 100.0 } else { part / whole * 100.0 }
}

#[derive(Debug, Clone)]
pub struct PlanReport {
    pub status: PlanStatus,
    pub delivered: Vec<Order>,
    pub undelivered: Vec<UndeliveredOrder>,
    pub flight_log: FlightLog,
    /// Set when the drone could not make it back home.
    pub return_error: Option<NavigationError>,
    pub summary: PlanSummary,
}

impl PlanReport {
    pub fn moves(&self) -> &[Move] {
        self.flight_log.moves()
    }

    pub fn returned_home(&self) -> bool {
        self.return_error.is_none()
    }
}

/// Outcome of servicing a single order.
enum Service {
    Delivered,
    Abandoned(UndeliveredReason),
}

/// Mutable state of one run. Only the scheduler writes to it.
struct Run {
    position: Point,
    log: FlightLog,
    safety_margin: usize,
}

impl Run {
    fn out_of_budget(&self) -> bool {
        self.log.is_exhausted(self.safety_margin)
    }

    /// Moves an order leg may fly, keeping one back for the hover that
    /// ends it.
    fn leg_allowance(&self) -> usize {
        usize::try_from(self.log.remaining() - 1).unwrap_or(0)
    }

    /// Gives up on the current order after a failed leg. A leg cut short by
    /// the budget counts as running out of budget, not as unreachable.
    fn abandon(&mut self, err: NavigationError) -> Service {
        self.position = self.log.position_or(self.position);
        if self.out_of_budget() {
            Service::Abandoned(UndeliveredReason::OutOfBudget)
        } else {
            Service::Abandoned(UndeliveredReason::Unreachable(err))
        }
    }

    /// Logs a zero-displacement move marking a pickup or drop-off.
    fn hover(&mut self, order_no: &str) {
        self.log.record(Move {
            order_no: Some(order_no.to_string()),
            from: self.position,
            heading: Heading::Hover,
            to: self.position,
        });
    }
}

/// Plans one day of deliveries over a fixed airspace.
#[derive(Debug, Clone)]
pub struct FlightPlanner {
    config: PlannerConfig,
    airspace: Airspace,
    landmarks: Vec<Point>,
    shop_locations: BTreeMap<String, Point>,
}

impl FlightPlanner {
    /// Detour landmarks are `landmarks`, then every shop in name order,
    /// then home.
    pub fn new(
        config: PlannerConfig,
        no_fly_vertices: &[Point],
        landmarks: Vec<Point>,
        shop_locations: BTreeMap<String, Point>,
    ) -> Self {
        let airspace = Airspace::from_no_fly_vertices(no_fly_vertices, config.confinement);
        let mut landmarks = landmarks;
        landmarks.extend(shop_locations.values().copied());
        landmarks.push(config.home);

        Self {
            config,
            airspace,
            landmarks,
            shop_locations,
        }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    pub fn airspace(&self) -> &Airspace {
        &self.airspace
    }

    pub fn landmarks(&self) -> &[Point] {
        &self.landmarks
    }

    /// Plans the day. Fails only if an order needs a shop with no known
    /// location, before any move is made.
    pub fn plan(&self, orders: Vec<Order>) -> Result<PlanReport, OrderError> {
        for order in &orders {
            if let Some(shop) = order
                .shops()
                .iter()
                .find(|shop| !self.shop_locations.contains_key(*shop))
            {
                return Err(OrderError::UnknownShop {
                    order_no: order.order_no().to_string(),
                    shop: shop.clone(),
                });
            }
        }

        let navigator = Navigator::new(&self.airspace, &self.landmarks, &self.config);
        let total_value_pence: u64 = orders.iter().map(|o| u64::from(o.cost_pence())).sum();
        let order_count = orders.len();

        let mut run = Run {
            position: self.config.home,
            log: FlightLog::new(self.config.move_budget),
            safety_margin: self.config.safety_margin,
        };
        let mut pending = orders;
        let mut delivered = Vec::new();
        let mut undelivered = Vec::new();
        let mut status = PlanStatus::Finished;

        while !pending.is_empty() {
            if run.out_of_budget() {
                status = PlanStatus::OutOfBudget;
                break;
            }

            let index = self.select_order(run.position, &pending);
            let order = pending.remove(index);
            debug!(order_no = order.order_no(), cost = order.cost_pence(), "servicing order");

            match self.service(&navigator, &mut run, &order) {
                Service::Delivered => delivered.push(order),
                Service::Abandoned(reason) => {
                    warn!(order_no = order.order_no(), ?reason, "order abandoned");
                    undelivered.push(UndeliveredOrder { order, reason });
                }
            }

            if run.out_of_budget() {
                status = PlanStatus::OutOfBudget;
                break;
            }
        }

        undelivered.extend(pending.into_iter().map(|order| UndeliveredOrder {
            order,
            reason: UndeliveredReason::NotAttempted,
        }));

        let home = self.config.home;
        let return_error = navigator
            .find_goal(&mut run.log, None, run.position, home, self.config.max_leg_steps)
            .err();
        if let Some(err) = &return_error {
            warn!(%err, "drone could not return home");
        }

        let summary = PlanSummary {
            total_value_pence,
            delivered_value_pence: delivered.iter().map(|o: &Order| u64::from(o.cost_pence())).sum(),
            order_count,
            delivered_count: delivered.len(),
            move_count: run.log.len(),
            overrun: run.log.overrun(),
        };
        if summary.overrun > 0 {
            warn!(overrun = summary.overrun, "flight exceeded the move budget");
        }
        info!(
            delivered = summary.delivered_value_pence,
            total = summary.total_value_pence,
            income_percent = summary.value_percentage(),
            deliveries_percent = summary.delivery_percentage(),
            moves = summary.move_count,
            "flight planned"
        );

        Ok(PlanReport {
            status,
            delivered,
            undelivered,
            flight_log: run.log,
            return_error,
            summary,
        })
    }

    /// Index of the next order to fly. Ties go to the earliest order.
    fn select_order(&self, position: Point, pending: &[Order]) -> usize {
        let mut best = 0;
        match self.config.selection {
            SelectionPolicy::NearestShop => {
                let mut closest = f64::INFINITY;
                for (index, order) in pending.iter().enumerate() {
                    for shop in order.shops() {
                        let distance = position.distance_to(&self.shop_locations[shop]);
                        if distance < closest {
                            closest = distance;
                            best = index;
                        }
                    }
                }
            }
            SelectionPolicy::HighestValue => {
                for (index, order) in pending.iter().enumerate() {
                    if order.cost_pence() > pending[best].cost_pence() {
                        best = index;
                    }
                }
            }
        }
        best
    }

    /// Collects from every shop (closest first), then drops off. Stops as
    /// soon as a stop leaves the run out of budget.
    fn service(&self, navigator: &Navigator<'_>, run: &mut Run, order: &Order) -> Service {
        let order_no = order.order_no();
        let mut shops: Vec<&String> = order.shops().iter().collect();

        while !shops.is_empty() {
            let index = closest_shop(run.position, &shops, &self.shop_locations);
            let shop = shops.remove(index);
            let goal = self.shop_locations[shop];

            let allowance = run.leg_allowance();
            match navigator.find_goal(&mut run.log, Some(order_no), run.position, goal, allowance) {
                Ok(position) => run.position = position,
                Err(err) => return run.abandon(err),
            }
            run.hover(order_no);
            debug!(order_no, shop = shop.as_str(), remaining = run.log.remaining(), "collected");

            if run.out_of_budget() {
                return Service::Abandoned(UndeliveredReason::OutOfBudget);
            }
        }

        let allowance = run.leg_allowance();
        match navigator.find_goal(&mut run.log, Some(order_no), run.position, order.deliver_to(), allowance) {
            Ok(position) => run.position = position,
            Err(err) => return run.abandon(err),
        }
        run.hover(order_no);
        debug!(order_no, remaining = run.log.remaining(), "delivered");

        Service::Delivered
    }
}

fn closest_shop(position: Point, shops: &[&String], locations: &BTreeMap<String, Point>) -> usize {
    let mut best = 0;
    let mut closest = f64::INFINITY;
    for (index, shop) in shops.iter().enumerate() {
        let distance = position.distance_to(&locations[*shop]);
        if distance < closest {
            closest = distance;
            best = index;
        }
    }
    best
}
