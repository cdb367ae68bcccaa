use serde::{Deserialize, Serialize};

use stockboard_core::{DomainError, DomainResult, Entity, ProductId};

/// Shortest accepted product name.
pub const MIN_NAME_LEN: usize = 3;

/// A stocked item with configured stock thresholds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    id: ProductId,
    name: String,
    minimum_stock_level: u32,
    maximum_stock_level: u32,
}

impl Product {
    /// Build a validated product.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        minimum_stock_level: u32,
        maximum_stock_level: u32,
    ) -> DomainResult<Self> {
        let product = Self {
            id,
            name: name.into(),
            minimum_stock_level,
            maximum_stock_level,
        };
        product.validate()?;
        Ok(product)
    }

    pub fn id_typed(&self) -> &ProductId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn minimum_stock_level(&self) -> u32 {
        self.minimum_stock_level
    }

    pub fn maximum_stock_level(&self) -> u32 {
        self.maximum_stock_level
    }

    /// Re-check field rules.
    ///
    /// Deserialized records bypass [`Product::new`], so anything loaded from
    /// a dataset should be passed through here before it reaches a store.
    pub fn validate(&self) -> DomainResult<()> {
        validate_name(&self.name)?;
        if self.maximum_stock_level < self.minimum_stock_level {
            return Err(DomainError::validation(format!(
                "maximum stock level ({}) must not be below minimum stock level ({})",
                self.maximum_stock_level, self.minimum_stock_level
            )));
        }
        Ok(())
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

fn validate_name(name: &str) -> DomainResult<()> {
    if name.chars().count() < MIN_NAME_LEN {
        return Err(DomainError::validation(format!(
            "product name must have at least {MIN_NAME_LEN} characters"
        )));
    }
    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == ' ') {
        return Err(DomainError::validation("product name must be alphanumeric"));
    }
    Ok(())
}
