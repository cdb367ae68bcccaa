use serde::{Deserialize, Serialize};

use stockboard_core::{DomainError, DomainResult, ProductId, SupplierId};

/// Composite identity of a [`ProductSupplier`] link.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProductSupplierKey {
    pub product_id: ProductId,
    pub supplier_id: SupplierId,
}

/// Commercial terms under which a supplier delivers a product.
///
/// `price` is in the smallest currency unit; `lead_time` is in days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSupplier {
    pub product_id: ProductId,
    pub supplier_id: SupplierId,
    pub price: u64,
    pub lead_time: u32,
}

impl ProductSupplier {
    pub fn new(
        product_id: ProductId,
        supplier_id: SupplierId,
        price: u64,
        lead_time: u32,
    ) -> DomainResult<Self> {
        let link = Self {
            product_id,
            supplier_id,
            price,
            lead_time,
        };
        link.validate()?;
        Ok(link)
    }

    pub fn key(&self) -> ProductSupplierKey {
        ProductSupplierKey {
            product_id: self.product_id.clone(),
            supplier_id: self.supplier_id.clone(),
        }
    }

    pub fn matches(&self, product_id: &ProductId, supplier_id: &SupplierId) -> bool {
        &self.product_id == product_id && &self.supplier_id == supplier_id
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.price == 0 {
            return Err(DomainError::validation("price is required"));
        }
        Ok(())
    }
}

/// Upsert `incoming` links into `existing`, keyed by (product, supplier).
///
/// A matching link gets its price and lead time overwritten in place; anything
/// else is appended. Existing order is preserved, so applying the same batch
/// twice leaves the collection unchanged the second time.
pub fn merge_product_suppliers(
    existing: &mut Vec<ProductSupplier>,
    incoming: impl IntoIterator<Item = ProductSupplier>,
) {
    for link in incoming {
        match existing
            .iter_mut()
            .find(|l| l.matches(&link.product_id, &link.supplier_id))
        {
            Some(current) => {
                current.price = link.price;
                current.lead_time = link.lead_time;
            }
            None => existing.push(link),
        }
    }
}
