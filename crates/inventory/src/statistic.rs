use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use stockboard_core::ProductId;
use stockboard_products::Product;

use crate::batch::ProductStock;

/// Derived per-product aggregate (never persisted).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductStatistic {
    pub product: Product,
    pub total_quantity: u64,
    pub total_value: u64,
}

impl ProductStatistic {
    pub fn empty(product: Product) -> Self {
        Self {
            product,
            total_quantity: 0,
            total_value: 0,
        }
    }

    fn fold(&mut self, batch: &ProductStock) {
        self.total_quantity = self.total_quantity.saturating_add(batch.quantity);
        self.total_value = self.total_value.saturating_add(batch.value());
    }

    fn metric(&self, by: RankBy) -> u64 {
        match by {
            RankBy::Quantity => self.total_quantity,
            RankBy::Value => self.total_value,
        }
    }
}

/// Metric used to rank product statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankBy {
    Quantity,
    Value,
}

/// Where a product's stock sits relative to its configured thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockLevel {
    Empty,
    BelowMinimum,
    Normal,
    AboveMaximum,
}

impl StockLevel {
    pub fn classify(product: &Product, total_quantity: u64) -> Self {
        if total_quantity == 0 {
            StockLevel::Empty
        } else if total_quantity < u64::from(product.minimum_stock_level()) {
            StockLevel::BelowMinimum
        } else if total_quantity > u64::from(product.maximum_stock_level()) {
            StockLevel::AboveMaximum
        } else {
            StockLevel::Normal
        }
    }

    /// Whether the product needs replenishing.
    pub fn needs_reorder(self) -> bool {
        matches!(self, StockLevel::Empty | StockLevel::BelowMinimum)
    }
}

/// Sum of `quantity` across all batches.
pub fn total_quantity(batches: &[ProductStock]) -> u64 {
    batches
        .iter()
        .fold(0u64, |acc, b| acc.saturating_add(b.quantity))
}

/// Sum of `price * quantity` across all batches.
pub fn total_value(batches: &[ProductStock]) -> u64 {
    batches
        .iter()
        .fold(0u64, |acc, b| acc.saturating_add(b.value()))
}

/// Quantity held for one product; unknown ids yield 0.
pub fn product_total_quantity(batches: &[ProductStock], product_id: &ProductId) -> u64 {
    batches
        .iter()
        .filter(|b| b.is_for(product_id))
        .fold(0u64, |acc, b| acc.saturating_add(b.quantity))
}

/// Value held for one product; unknown ids yield 0.
pub fn product_total_value(batches: &[ProductStock], product_id: &ProductId) -> u64 {
    batches
        .iter()
        .filter(|b| b.is_for(product_id))
        .fold(0u64, |acc, b| acc.saturating_add(b.value()))
}

/// One statistic per known product, in catalog order.
///
/// Products without stock keep zero totals. Batches referencing a product
/// outside `products` are skipped (see [`orphan_batches`]).
pub fn product_statistics(products: &[Product], batches: &[ProductStock]) -> Vec<ProductStatistic> {
    let mut stats: Vec<ProductStatistic> =
        products.iter().cloned().map(ProductStatistic::empty).collect();

    let index: HashMap<ProductId, usize> = stats
        .iter()
        .enumerate()
        .map(|(i, s)| (s.product.id_typed().clone(), i))
        .collect();

    for batch in batches {
        if let Some(&i) = index.get(&batch.product_id) {
            stats[i].fold(batch);
        }
    }

    stats
}

/// Number of batches whose product is not in `products`.
pub fn orphan_batches(products: &[Product], batches: &[ProductStock]) -> usize {
    let known: HashSet<&ProductId> = products.iter().map(Product::id_typed).collect();
    batches
        .iter()
        .filter(|b| !known.contains(&b.product_id))
        .count()
}

/// First `n` statistics, descending by `by`.
///
/// Ties are broken by product id ascending so the ranking is deterministic.
pub fn top_n(mut stats: Vec<ProductStatistic>, by: RankBy, n: usize) -> Vec<ProductStatistic> {
    stats.sort_by(|a, b| {
        b.metric(by)
            .cmp(&a.metric(by))
            .then_with(|| a.product.id_typed().cmp(b.product.id_typed()))
    });
    stats.truncate(n);
    stats
}
