use thiserror::Error;

use crate::geometry::Point;

/// Top-level error type for the drone planner.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Navigation(#[from] NavigationError),

    #[error(transparent)]
    Order(#[from] OrderError),

    #[error(transparent)]
    Source(#[from] SourceError),
}

/// The navigator could not finish a leg.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NavigationError {
    #[error("no admissible heading from {at} towards {goal}")]
    Blocked { at: Point, goal: Point },

    #[error("gave up on {goal} after {steps} steps without getting close")]
    StepLimit { goal: Point, steps: usize },
}

/// Order data that cannot be planned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OrderError {
    #[error("order {order_no}: no shop sells item {item:?}")]
    UnknownItem { order_no: String, item: String },

    #[error("order {order_no}: shop {shop:?} has no known location")]
    UnknownShop { order_no: String, shop: String },

    #[error("order {0} has no items")]
    EmptyOrder(String),
}

/// Failures talking to the map server or the tabular store.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed what3words address {0:?}")]
    InvalidAddress(String),

    #[error("invalid delivery date {0:?}")]
    InvalidDate(String),
}

pub type Result<T> = std::result::Result<T, Error>;
