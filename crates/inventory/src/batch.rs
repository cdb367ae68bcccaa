use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockboard_core::{DomainError, DomainResult, ProductId};

/// A received quantity of a product at a given unit price.
///
/// `price` is in the smallest currency unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductStock {
    pub product_id: ProductId,
    pub price: u64,
    pub batch: String,
    pub quantity: u64,
    pub delivery_date: DateTime<Utc>,
}

impl ProductStock {
    pub fn new(
        product_id: ProductId,
        price: u64,
        batch: impl Into<String>,
        quantity: u64,
        delivery_date: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let stock = Self {
            product_id,
            price,
            batch: batch.into(),
            quantity,
            delivery_date,
        };
        stock.validate()?;
        Ok(stock)
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.batch.trim().is_empty() {
            return Err(DomainError::validation("batch label cannot be empty"));
        }
        Ok(())
    }

    /// `price * quantity`, saturating at `u64::MAX`.
    pub fn value(&self) -> u64 {
        self.price.saturating_mul(self.quantity)
    }

    pub fn is_for(&self, product_id: &ProductId) -> bool {
        &self.product_id == product_id
    }
}
