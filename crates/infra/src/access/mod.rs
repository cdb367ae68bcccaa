//! Access-layer contracts.
//!
//! One client trait per entity family. Aggregation services only ever talk to
//! these traits, so the record store behind them can be in-memory, file-backed,
//! or remote without touching the statistics code. Every call returns a fully
//! materialized collection.

pub mod in_memory;

use stockboard_core::{DomainResult, ProductId, SupplierId};
use stockboard_inventory::{ProductStatistic, ProductStock, RankBy, product_statistics, top_n};
use stockboard_issues::Issue;
use stockboard_orders::{ProductOrder, PurchaseOrder, SalesOrder};
use stockboard_parties::{ProductSupplier, Supplier};
use stockboard_products::Product;

pub use in_memory::{
    InMemoryIssueClient, InMemoryProductClient, InMemoryProductSupplierClient,
    InMemoryPurchaseOrderClient, InMemorySalesOrderClient, InMemorySupplierClient,
};

/// Products and the stock batches received for them.
pub trait ProductClient: Send + Sync {
    fn all_products(&self) -> Vec<Product>;

    fn product(&self, id: &ProductId) -> Option<Product> {
        self.all_products()
            .into_iter()
            .find(|p| p.id_typed() == id)
    }

    /// Replace the product with the same id, or insert it.
    fn upsert_product(&self, product: Product) -> DomainResult<Product>;

    fn all_product_stock(&self) -> Vec<ProductStock>;

    /// One statistic per known product, recomputed from the current batches.
    fn product_statistics(&self) -> Vec<ProductStatistic> {
        product_statistics(&self.all_products(), &self.all_product_stock())
    }

    fn top_n_products_by_quantity(&self, n: usize) -> Vec<ProductStatistic> {
        top_n(self.product_statistics(), RankBy::Quantity, n)
    }

    fn top_n_products_by_value(&self, n: usize) -> Vec<ProductStatistic> {
        top_n(self.product_statistics(), RankBy::Value, n)
    }
}

/// Product/supplier links with their commercial terms.
pub trait ProductSupplierClient: Send + Sync {
    fn all_product_suppliers(&self) -> Vec<ProductSupplier>;

    fn product_suppliers_by_product_id(&self, product_id: &ProductId) -> Vec<ProductSupplier> {
        self.all_product_suppliers()
            .into_iter()
            .filter(|l| &l.product_id == product_id)
            .collect()
    }

    /// Upsert by (product, supplier) and return the full updated collection.
    fn upsert_product_suppliers(
        &self,
        links: Vec<ProductSupplier>,
    ) -> DomainResult<Vec<ProductSupplier>>;
}

pub trait PurchaseOrderClient: Send + Sync {
    fn all_purchase_orders(&self) -> Vec<PurchaseOrder>;

    /// Orders with at least one position referencing `product`.
    fn product_purchase_orders(&self, product: &Product) -> Vec<PurchaseOrder> {
        self.all_purchase_orders()
            .into_iter()
            .filter(|o| o.touches_product(product.id_typed()))
            .collect()
    }
}

pub trait SalesOrderClient: Send + Sync {
    fn all_sales_orders(&self) -> Vec<SalesOrder>;

    /// Orders with at least one position referencing `product_id`.
    fn product_sales_orders(&self, product_id: &ProductId) -> Vec<SalesOrder> {
        self.all_sales_orders()
            .into_iter()
            .filter(|o| o.touches_product(product_id))
            .collect()
    }
}

pub trait SupplierClient: Send + Sync {
    fn all_suppliers(&self) -> Vec<Supplier>;

    fn supplier(&self, id: &SupplierId) -> Option<Supplier> {
        self.all_suppliers()
            .into_iter()
            .find(|s| s.id_typed() == id)
    }
}

pub trait IssueClient: Send + Sync {
    fn all_issues(&self) -> Vec<Issue>;

    fn product_issues(&self, product_id: &ProductId) -> Vec<Issue> {
        self.all_issues()
            .into_iter()
            .filter(|i| i.is_for(product_id))
            .collect()
    }
}
