//! drone-planner core
//!
//! Plans one day of food deliveries for a single drone: greedy stepping
//! around a convex no-fly boundary, a fixed move budget, and a return home.

pub mod airspace;
pub mod config;
pub mod error;
pub mod flight;
pub mod geojson;
pub mod geometry;
pub mod hull;
pub mod menus;
pub mod navigator;
pub mod order;
pub mod planner;
pub mod polyline;
pub mod records;
pub mod traits;
pub mod webserver;

pub use error::{Error, Result};
