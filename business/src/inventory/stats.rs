//! Aggregate figures for the dashboard.

use std::collections::BTreeMap;

use super::options::{STATUS_ACTIVE, STATUS_DISCONTINUED, STATUS_INACTIVE};
use super::Product;

/// Category label used for products without one.
pub const UNCATEGORIZED: &str = "Uncategorized";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InventoryStats {
    pub total_products: usize,
    pub active_products: usize,
    pub low_stock: usize,
    pub total_units: i64,
}

impl InventoryStats {
    pub fn from_products(products: &[Product]) -> Self {
        products.iter().fold(Self::default(), |mut stats, p| {
            stats.total_products += 1;
            if p.status.as_deref() == Some(STATUS_ACTIVE) {
                stats.active_products += 1;
            }
            if p.is_low_stock() {
                stats.low_stock += 1;
            }
            stats.total_units += p.stock.unwrap_or(0);
            stats
        })
    }

    pub fn inactive_products(&self) -> usize {
        self.total_products.saturating_sub(self.active_products)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProductStats {
    pub active: usize,
    pub inactive: usize,
    pub discontinued: usize,
    pub by_category: BTreeMap<String, usize>,
}

impl ProductStats {
    pub fn from_products(products: &[Product]) -> Self {
        let mut stats = Self::default();
        for p in products {
            match p.status.as_deref() {
                Some(STATUS_ACTIVE) => stats.active += 1,
                Some(STATUS_INACTIVE) => stats.inactive += 1,
                Some(STATUS_DISCONTINUED) => stats.discontinued += 1,
                _ => {}
            }
            let category = p.category.as_deref().unwrap_or(UNCATEGORIZED);
            *stats.by_category.entry(category.to_owned()).or_default() += 1;
        }
        stats
    }
}
