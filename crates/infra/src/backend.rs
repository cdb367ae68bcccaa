//! In-memory backend: every access client over one seeded dataset.

use std::sync::Arc;

use crate::access::{
    InMemoryIssueClient, InMemoryProductClient, InMemoryProductSupplierClient,
    InMemoryPurchaseOrderClient, InMemorySalesOrderClient, InMemorySupplierClient,
};
use crate::seed::{Dataset, SeedError};

#[derive(Debug, Clone)]
pub struct InMemoryBackend {
    pub products: Arc<InMemoryProductClient>,
    pub product_suppliers: Arc<InMemoryProductSupplierClient>,
    pub purchase_orders: Arc<InMemoryPurchaseOrderClient>,
    pub sales_orders: Arc<InMemorySalesOrderClient>,
    pub suppliers: Arc<InMemorySupplierClient>,
    pub issues: Arc<InMemoryIssueClient>,
}

impl InMemoryBackend {
    /// Validate `dataset` and load it into fresh stores.
    pub fn from_dataset(dataset: Dataset) -> Result<Self, SeedError> {
        dataset.validate()?;

        let orphans = dataset.orphan_stock_batches();
        if orphans > 0 {
            tracing::warn!(orphans, "stock batches reference products outside the catalog");
        }

        tracing::info!(
            products = dataset.products.len(),
            suppliers = dataset.suppliers.len(),
            stock_batches = dataset.product_stock.len(),
            purchase_orders = dataset.purchase_orders.len(),
            sales_orders = dataset.sales_orders.len(),
            issues = dataset.issues.len(),
            "seeded in-memory backend"
        );

        Ok(Self {
            products: Arc::new(InMemoryProductClient::new(
                dataset.products,
                dataset.product_stock,
            )),
            product_suppliers: Arc::new(InMemoryProductSupplierClient::new(
                dataset.product_suppliers,
            )),
            purchase_orders: Arc::new(InMemoryPurchaseOrderClient::new(dataset.purchase_orders)),
            sales_orders: Arc::new(InMemorySalesOrderClient::new(dataset.sales_orders)),
            suppliers: Arc::new(InMemorySupplierClient::new(dataset.suppliers)),
            issues: Arc::new(InMemoryIssueClient::new(dataset.issues)),
        })
    }
}
