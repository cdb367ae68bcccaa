use chrono::{DateTime, Utc};
use serde::Serialize;

use stockboard_core::ProductId;
use stockboard_inventory::{ProductStatistic, StockLevel};
use stockboard_issues::{Issue, IssueStat};
use stockboard_orders::{PurchaseOrder, SalesOrder};
use stockboard_parties::ProductSupplier;
use stockboard_products::Product;

use crate::issue::IssueService;
use crate::orders::{PurchaseOrderService, SalesOrderService};
use crate::product::ProductService;
use crate::product_supplier::ProductSupplierService;

/// Everything the overview page shows, computed in one pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub generated_at: DateTime<Utc>,
    pub total_quantity: u64,
    pub total_value: u64,
    pub top_by_quantity: Vec<ProductStatistic>,
    /// Sum of `total_quantity` over `top_by_quantity`.
    pub top_quantity_total: u64,
    pub top_by_value: Vec<ProductStatistic>,
    /// Sum of `total_value` over `top_by_value`.
    pub top_value_total: u64,
    pub issues: Vec<IssueStat>,
    pub total_issues: u64,
    pub reorder_candidates: Vec<ProductStatistic>,
}

/// Everything the product page shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetail {
    pub product: Product,
    pub total_quantity: u64,
    pub total_value: u64,
    pub stock_level: StockLevel,
    pub suppliers: Vec<ProductSupplier>,
    pub purchase_orders: Vec<PurchaseOrder>,
    pub sales_orders: Vec<SalesOrder>,
    pub issues: Vec<Issue>,
}

/// Composes the per-entity services into page-level views.
#[derive(Clone)]
pub struct DashboardService {
    products: ProductService,
    product_suppliers: ProductSupplierService,
    purchase_orders: PurchaseOrderService,
    sales_orders: SalesOrderService,
    issues: IssueService,
    top_n: usize,
}

impl DashboardService {
    pub fn new(
        products: ProductService,
        product_suppliers: ProductSupplierService,
        purchase_orders: PurchaseOrderService,
        sales_orders: SalesOrderService,
        issues: IssueService,
        top_n: usize,
    ) -> Self {
        Self {
            products,
            product_suppliers,
            purchase_orders,
            sales_orders,
            issues,
            top_n,
        }
    }

    pub fn snapshot(&self, now: DateTime<Utc>) -> DashboardSnapshot {
        let issues = self.issues.get_issues_summary(now);
        let total_issues: u64 = issues.iter().map(|s| s.quantity).sum();

        let top_by_quantity = self.products.get_top_products_by_quantity(self.top_n);
        let top_by_value = self.products.get_top_products_by_value(self.top_n);

        let snapshot = DashboardSnapshot {
            generated_at: now,
            total_quantity: self.products.get_total_quantity(),
            total_value: self.products.get_total_value(),
            top_quantity_total: top_by_quantity
                .iter()
                .fold(0u64, |acc, s| acc.saturating_add(s.total_quantity)),
            top_value_total: top_by_value
                .iter()
                .fold(0u64, |acc, s| acc.saturating_add(s.total_value)),
            top_by_quantity,
            top_by_value,
            issues,
            total_issues,
            reorder_candidates: self.products.products_below_minimum(),
        };

        tracing::debug!(
            total_quantity = snapshot.total_quantity,
            total_value = snapshot.total_value,
            total_issues = snapshot.total_issues,
            "computed dashboard snapshot"
        );
        snapshot
    }

    /// `None` when the product is not in the catalog.
    pub fn product_detail(&self, id: &ProductId) -> Option<ProductDetail> {
        let product = self.products.get_product(id)?;
        let total_quantity = self.products.get_product_total_quantity(id);

        Some(ProductDetail {
            total_quantity,
            total_value: self.products.get_product_total_value(id),
            stock_level: StockLevel::classify(&product, total_quantity),
            suppliers: self.product_suppliers.get_product_suppliers(id),
            purchase_orders: self.purchase_orders.get_product_orders(&product),
            sales_orders: self.sales_orders.get_product_orders(&product),
            issues: self.issues.get_product_issues(id),
            product,
        })
    }
}
