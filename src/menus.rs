//! Shop menus as published by the map server (`menus/menus.json`).

use std::collections::{BTreeMap, HashMap};

use rayon::prelude::*;
use serde::Deserialize;

use crate::error::SourceError;
use crate::geometry::Point;
use crate::traits::{AddressResolver, MenuCatalog};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MenuItem {
    pub item: String,
    pub pence: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Shop {
    pub name: String,
    /// what3words address of the shop.
    pub location: String,
    pub menu: Vec<MenuItem>,
}

/// Item lookups over every shop's menu.
#[derive(Debug, Clone, Default)]
pub struct Menus {
    shops: Vec<Shop>,
    sellers: HashMap<String, (usize, u32)>,
}

impl Menus {
    /// When two shops list the same item, the later shop wins.
    pub fn new(shops: Vec<Shop>) -> Self {
        let mut sellers = HashMap::new();
        for (index, shop) in shops.iter().enumerate() {
            for entry in &shop.menu {
                sellers.insert(entry.item.clone(), (index, entry.pence));
            }
        }
        Self { shops, sellers }
    }

    pub fn from_json(text: &str) -> Result<Self, SourceError> {
        Ok(Self::new(serde_json::from_str(text)?))
    }

    pub fn shops(&self) -> &[Shop] {
        &self.shops
    }

    /// Resolves every shop's address, in parallel.
    pub fn shop_locations<R>(&self, resolver: &R) -> Result<BTreeMap<String, Point>, SourceError>
    where
        R: AddressResolver + Sync + ?Sized,
    {
        self.shops
            .par_iter()
            .map(|shop| resolver.resolve(&shop.location).map(|point| (shop.name.clone(), point)))
            .collect()
    }
}

impl MenuCatalog for Menus {
    fn shop_for(&self, item: &str) -> Option<&str> {
        self.sellers
            .get(item)
            .map(|(index, _)| self.shops[*index].name.as_str())
    }

    fn price_of(&self, item: &str) -> Option<u32> {
        self.sellers.get(item).map(|(_, pence)| *pence)
    }
}
