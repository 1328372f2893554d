//! Seams to the data the planner consumes.
//!
//! The planner never fetches anything itself; menus and address lookups
//! are resolved through these traits before planning starts. The HTTP
//! implementations live in [`crate::menus`] and [`crate::webserver`].

use crate::error::SourceError;
use crate::geometry::Point;

/// Item-level menu data: which shop sells an item and what it costs.
pub trait MenuCatalog {
    /// Name of the shop selling `item`.
    fn shop_for(&self, item: &str) -> Option<&str>;

    /// Price of `item` in pence.
    fn price_of(&self, item: &str) -> Option<u32>;
}

/// Turns a symbolic address (a what3words triple) into coordinates.
pub trait AddressResolver {
    fn resolve(&self, address: &str) -> Result<Point, SourceError>;
}
