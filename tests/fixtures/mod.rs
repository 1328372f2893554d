//! Test fixtures for drone-planner.
//!
//! Provides realistic test data including:
//! - Real central Edinburgh no-fly zones, landmarks and shop locations
//! - Builders for menus, orders and planners

#![allow(dead_code)]

pub mod edinburgh_locations;

use std::collections::{BTreeMap, HashMap};

use drone_planner::config::PlannerConfig;
use drone_planner::error::SourceError;
use drone_planner::geometry::{Point, STEP_LENGTH};
use drone_planner::order::Order;
use drone_planner::planner::FlightPlanner;
use drone_planner::traits::{AddressResolver, MenuCatalog};

pub use edinburgh_locations::*;

/// In-memory menu: item -> (shop, price in pence).
#[derive(Debug, Clone, Default)]
pub struct TestCatalog {
    items: HashMap<String, (String, u32)>,
}

impl TestCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn item(mut self, item: &str, shop: &str, pence: u32) -> Self {
        self.items.insert(item.to_string(), (shop.to_string(), pence));
        self
    }
}

impl MenuCatalog for TestCatalog {
    fn shop_for(&self, item: &str) -> Option<&str> {
        self.items.get(item).map(|(shop, _)| shop.as_str())
    }

    fn price_of(&self, item: &str) -> Option<u32> {
        self.items.get(item).map(|(_, pence)| *pence)
    }
}

/// Address book for what3words lookups.
#[derive(Debug, Clone, Default)]
pub struct TestResolver {
    addresses: HashMap<String, Point>,
}

impl TestResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn address(mut self, words: &str, point: Point) -> Self {
        self.addresses.insert(words.to_string(), point);
        self
    }
}

impl AddressResolver for TestResolver {
    fn resolve(&self, address: &str) -> Result<Point, SourceError> {
        self.addresses
            .get(address)
            .copied()
            .ok_or_else(|| SourceError::InvalidAddress(address.to_string()))
    }
}

pub fn order(order_no: &str, deliver_to: Point, items: &[&str], catalog: &TestCatalog) -> Order {
    Order::new(
        order_no,
        "test.drop.point",
        deliver_to,
        items.iter().map(|item| item.to_string()).collect(),
        catalog,
    )
    .expect("valid test order")
}

pub fn shop_map(shops: &[(&str, Point)]) -> BTreeMap<String, Point> {
    shops.iter().map(|(name, point)| (name.to_string(), *point)).collect()
}

/// A point `steps` moves due west of home (negative goes east).
pub fn west_of_home(steps: f64) -> Point {
    let home = APPLETON_TOWER.point();
    Point::new(home.lng - steps * STEP_LENGTH, home.lat)
}

/// The square used for detour scenarios, west of home.
pub fn obstacle_square() -> Vec<Point> {
    vec![
        Point::new(-3.1895, 55.9440),
        Point::new(-3.1885, 55.9440),
        Point::new(-3.1885, 55.9450),
        Point::new(-3.1895, 55.9450),
    ]
}

pub fn planner(config: PlannerConfig, no_fly: &[Point], landmarks: Vec<Point>, shops: &[(&str, Point)]) -> FlightPlanner {
    FlightPlanner::new(config, no_fly, landmarks, shop_map(shops))
}
