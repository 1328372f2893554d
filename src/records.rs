//! Tabular store: the day's orders in, deliveries and flightpath out.
//!
//! Tables are CSV files with a header row. Output tables are replaced on
//! every run.

use std::collections::HashMap;
use std::fmt;
use std::io;
use std::path::Path;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::SourceError;
use crate::flight::Move;
use crate::order::{Order, OrderRequest};

/// Calendar day the orders are for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DeliveryDate(NaiveDate);

impl DeliveryDate {
    pub fn new(day: u32, month: u32, year: i32) -> Result<Self, SourceError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| SourceError::InvalidDate(format!("{:02}-{:02}-{:04}", day, month, year)))
    }

    /// Parses the separate day, month and year command-line arguments.
    pub fn from_parts(day: &str, month: &str, year: &str) -> Result<Self, SourceError> {
        let invalid = || SourceError::InvalidDate(format!("{}-{}-{}", day, month, year));
        Self::new(
            day.parse().map_err(|_| invalid())?,
            month.parse().map_err(|_| invalid())?,
            year.parse().map_err(|_| invalid())?,
        )
        .map_err(|_| invalid())
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// `drone-DD-MM-YYYY.geojson`
    pub fn map_file_name(&self) -> String {
        format!("drone-{}.geojson", self.0.format("%d-%m-%Y"))
    }
}

impl fmt::Display for DeliveryDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for DeliveryDate {
    type Err = SourceError;

    /// ISO `YYYY-MM-DD`.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
            .map(Self)
            .map_err(|_| SourceError::InvalidDate(text.to_string()))
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OrderRow {
    order_no: String,
    delivery_date: String,
    deliver_to: String,
    item: String,
}

/// Reads the orders for `date`, one row per ordered item. Orders keep the
/// order in which they first appear.
pub fn read_orders<R: io::Read>(reader: R, date: DeliveryDate) -> Result<Vec<OrderRequest>, SourceError> {
    let mut requests: Vec<OrderRequest> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    let mut csv = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    for row in csv.deserialize() {
        let row: OrderRow = row?;
        if row.delivery_date.parse::<DeliveryDate>()? != date {
            continue;
        }

        match index.get(&row.order_no) {
            Some(&position) => requests[position].items.push(row.item),
            None => {
                index.insert(row.order_no.clone(), requests.len());
                requests.push(OrderRequest {
                    order_no: row.order_no,
                    delivery_address: row.deliver_to,
                    items: vec![row.item],
                });
            }
        }
    }

    Ok(requests)
}

pub fn read_orders_file(path: impl AsRef<Path>, date: DeliveryDate) -> Result<Vec<OrderRequest>, SourceError> {
    read_orders(std::fs::File::open(path)?, date)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DeliveryRow<'a> {
    order_no: &'a str,
    delivered_to: &'a str,
    cost_in_pence: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FlightpathRow<'a> {
    order_no: Option<&'a str>,
    from_longitude: f64,
    from_latitude: f64,
    angle: i32,
    to_longitude: f64,
    to_latitude: f64,
}

pub fn write_deliveries<W: io::Write>(writer: W, delivered: &[Order]) -> Result<(), SourceError> {
    let mut csv = csv::Writer::from_writer(writer);
    for order in delivered {
        csv.serialize(DeliveryRow {
            order_no: order.order_no(),
            delivered_to: order.delivery_address(),
            cost_in_pence: order.cost_pence(),
        })?;
    }
    csv.flush()?;
    Ok(())
}

/// Return-leg moves are written with an empty order number; hovers with
/// angle -999.
pub fn write_flightpath<W: io::Write>(writer: W, moves: &[Move]) -> Result<(), SourceError> {
    let mut csv = csv::Writer::from_writer(writer);
    for entry in moves {
        csv.serialize(FlightpathRow {
            order_no: entry.order_no.as_deref(),
            from_longitude: entry.from.lng,
            from_latitude: entry.from.lat,
            angle: entry.heading.angle(),
            to_longitude: entry.to.lng,
            to_latitude: entry.to.lat,
        })?;
    }
    csv.flush()?;
    Ok(())
}

pub fn write_deliveries_file(path: impl AsRef<Path>, delivered: &[Order]) -> Result<(), SourceError> {
    write_deliveries(std::fs::File::create(path)?, delivered)
}

pub fn write_flightpath_file(path: impl AsRef<Path>, moves: &[Move]) -> Result<(), SourceError> {
    write_flightpath(std::fs::File::create(path)?, moves)
}
