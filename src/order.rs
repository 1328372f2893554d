//! Customer orders.

use std::collections::{BTreeSet, HashMap};

use rayon::prelude::*;
use tracing::debug;

use crate::error::{OrderError, Result, SourceError};
use crate::geometry::Point;
use crate::traits::{AddressResolver, MenuCatalog};

/// Flat fee added to every order, in pence.
pub const DELIVERY_CHARGE_PENCE: u32 = 50;

/// An order as stored, before prices and locations are known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRequest {
    pub order_no: String,
    pub delivery_address: String,
    pub items: Vec<String>,
}

/// A priced order with its pickup shops and drop-off point resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    order_no: String,
    items: Vec<String>,
    delivery_address: String,
    deliver_to: Point,
    shops: BTreeSet<String>,
    cost_pence: u32,
}

impl Order {
    /// Prices the order and derives the shops it needs, rejecting items the
    /// catalog does not know.
    pub fn new<C: MenuCatalog + ?Sized>(
        order_no: impl Into<String>,
        delivery_address: impl Into<String>,
        deliver_to: Point,
        items: Vec<String>,
        catalog: &C,
    ) -> std::result::Result<Self, OrderError> {
        let order_no = order_no.into();
        if items.is_empty() {
            return Err(OrderError::EmptyOrder(order_no));
        }

        let mut shops = BTreeSet::new();
        let mut cost_pence = DELIVERY_CHARGE_PENCE;
        for item in &items {
            let unknown = || OrderError::UnknownItem {
                order_no: order_no.clone(),
                item: item.clone(),
            };
            let shop = catalog.shop_for(item).ok_or_else(unknown)?;
            let price = catalog.price_of(item).ok_or_else(unknown)?;
            shops.insert(shop.to_string());
            cost_pence += price;
        }

        Ok(Self {
            order_no,
            items,
            delivery_address: delivery_address.into(),
            deliver_to,
            shops,
            cost_pence,
        })
    }

    pub fn order_no(&self) -> &str {
        &self.order_no
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn delivery_address(&self) -> &str {
        &self.delivery_address
    }

    pub fn deliver_to(&self) -> Point {
        self.deliver_to
    }

    /// Distinct shops to collect from, in name order.
    pub fn shops(&self) -> &BTreeSet<String> {
        &self.shops
    }

    pub fn cost_pence(&self) -> u32 {
        self.cost_pence
    }
}

/// Resolves delivery addresses (in parallel, each distinct address once)
/// and prices every request. Any failure rejects the whole batch.
pub fn prepare_orders<C, R>(requests: Vec<OrderRequest>, catalog: &C, resolver: &R) -> Result<Vec<Order>>
where
    C: MenuCatalog + ?Sized,
    R: AddressResolver + Sync + ?Sized,
{
    let addresses: BTreeSet<&str> = requests
        .iter()
        .map(|request| request.delivery_address.as_str())
        .collect();
    let addresses: Vec<&str> = addresses.into_iter().collect();

    let resolved: HashMap<String, Point> = addresses
        .par_iter()
        .map(|address| resolver.resolve(address).map(|point| (address.to_string(), point)))
        .collect::<std::result::Result<_, SourceError>>()?;
    debug!(addresses = resolved.len(), "resolved delivery addresses");

    let mut orders = Vec::with_capacity(requests.len());
    for request in requests {
        let deliver_to = resolved[request.delivery_address.as_str()];
        orders.push(Order::new(
            request.order_no,
            request.delivery_address,
            deliver_to,
            request.items,
            catalog,
        )?);
    }
    Ok(orders)
}
