//! In-memory access clients.
//!
//! These back the tests, the sample dataset, and the default binary. They are
//! safe to share across threads but make no attempt at anything beyond
//! last-writer-wins.

use std::sync::{PoisonError, RwLock};

use stockboard_core::{DomainResult, IssueId, OrderId, ProductId, SupplierId};
use stockboard_inventory::ProductStock;
use stockboard_issues::Issue;
use stockboard_orders::{PurchaseOrder, SalesOrder};
use stockboard_parties::{ProductSupplier, Supplier, merge_product_suppliers};
use stockboard_products::Product;

use super::{
    IssueClient, ProductClient, ProductSupplierClient, PurchaseOrderClient, SalesOrderClient,
    SupplierClient,
};
use crate::read_model::{InMemoryRecordStore, RecordStore};

#[derive(Debug, Default)]
pub struct InMemoryProductClient {
    products: InMemoryRecordStore<ProductId, Product>,
    stock: RwLock<Vec<ProductStock>>,
}

impl InMemoryProductClient {
    pub fn new(
        products: impl IntoIterator<Item = Product>,
        stock: impl IntoIterator<Item = ProductStock>,
    ) -> Self {
        Self {
            products: products
                .into_iter()
                .map(|p| (p.id_typed().clone(), p))
                .collect(),
            stock: RwLock::new(stock.into_iter().collect()),
        }
    }

    /// Append a received stock batch.
    pub fn receive_stock(&self, batch: ProductStock) {
        self.stock
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(batch);
    }
}

impl ProductClient for InMemoryProductClient {
    fn all_products(&self) -> Vec<Product> {
        self.products.list()
    }

    fn product(&self, id: &ProductId) -> Option<Product> {
        self.products.get(id)
    }

    fn upsert_product(&self, product: Product) -> DomainResult<Product> {
        product.validate()?;
        self.products
            .upsert(product.id_typed().clone(), product.clone());
        Ok(product)
    }

    fn all_product_stock(&self) -> Vec<ProductStock> {
        self.stock
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[derive(Debug, Default)]
pub struct InMemoryProductSupplierClient {
    links: RwLock<Vec<ProductSupplier>>,
}

impl InMemoryProductSupplierClient {
    pub fn new(links: impl IntoIterator<Item = ProductSupplier>) -> Self {
        let mut merged = Vec::new();
        merge_product_suppliers(&mut merged, links);
        Self {
            links: RwLock::new(merged),
        }
    }
}

impl ProductSupplierClient for InMemoryProductSupplierClient {
    fn all_product_suppliers(&self) -> Vec<ProductSupplier> {
        self.links
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn upsert_product_suppliers(
        &self,
        links: Vec<ProductSupplier>,
    ) -> DomainResult<Vec<ProductSupplier>> {
        // All-or-nothing: reject the batch before touching the store.
        for link in &links {
            link.validate()?;
        }
        let mut current = self.links.write().unwrap_or_else(PoisonError::into_inner);
        merge_product_suppliers(&mut current, links);
        Ok(current.clone())
    }
}

#[derive(Debug, Default)]
pub struct InMemoryPurchaseOrderClient {
    orders: InMemoryRecordStore<OrderId, PurchaseOrder>,
}

impl InMemoryPurchaseOrderClient {
    pub fn new(orders: impl IntoIterator<Item = PurchaseOrder>) -> Self {
        Self {
            orders: orders.into_iter().map(|o| (o.id.clone(), o)).collect(),
        }
    }
}

impl PurchaseOrderClient for InMemoryPurchaseOrderClient {
    fn all_purchase_orders(&self) -> Vec<PurchaseOrder> {
        self.orders.list()
    }
}

#[derive(Debug, Default)]
pub struct InMemorySalesOrderClient {
    orders: InMemoryRecordStore<OrderId, SalesOrder>,
}

impl InMemorySalesOrderClient {
    pub fn new(orders: impl IntoIterator<Item = SalesOrder>) -> Self {
        Self {
            orders: orders.into_iter().map(|o| (o.id.clone(), o)).collect(),
        }
    }
}

impl SalesOrderClient for InMemorySalesOrderClient {
    fn all_sales_orders(&self) -> Vec<SalesOrder> {
        self.orders.list()
    }
}

#[derive(Debug, Default)]
pub struct InMemorySupplierClient {
    suppliers: InMemoryRecordStore<SupplierId, Supplier>,
}

impl InMemorySupplierClient {
    pub fn new(suppliers: impl IntoIterator<Item = Supplier>) -> Self {
        Self {
            suppliers: suppliers
                .into_iter()
                .map(|s| (s.id_typed().clone(), s))
                .collect(),
        }
    }
}

impl SupplierClient for InMemorySupplierClient {
    fn all_suppliers(&self) -> Vec<Supplier> {
        self.suppliers.list()
    }

    fn supplier(&self, id: &SupplierId) -> Option<Supplier> {
        self.suppliers.get(id)
    }
}

#[derive(Debug, Default)]
pub struct InMemoryIssueClient {
    issues: InMemoryRecordStore<IssueId, Issue>,
}

impl InMemoryIssueClient {
    pub fn new(issues: impl IntoIterator<Item = Issue>) -> Self {
        Self {
            issues: issues.into_iter().map(|i| (i.id.clone(), i)).collect(),
        }
    }
}

impl IssueClient for InMemoryIssueClient {
    fn all_issues(&self) -> Vec<Issue> {
        self.issues.list()
    }
}
