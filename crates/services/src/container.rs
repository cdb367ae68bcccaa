//! Explicit wiring of every service.

use std::sync::Arc;

use stockboard_infra::access::{
    IssueClient, ProductClient, ProductSupplierClient, PurchaseOrderClient, SalesOrderClient,
    SupplierClient,
};
use stockboard_infra::{DashboardConfig, InMemoryBackend};

use crate::dashboard::DashboardService;
use crate::issue::IssueService;
use crate::orders::{PurchaseOrderService, SalesOrderService};
use crate::product::ProductService;
use crate::product_supplier::ProductSupplierService;
use crate::supplier::SupplierService;

/// The access clients a full set of services reads from.
#[derive(Clone)]
pub struct Clients {
    pub products: Arc<dyn ProductClient>,
    pub product_suppliers: Arc<dyn ProductSupplierClient>,
    pub purchase_orders: Arc<dyn PurchaseOrderClient>,
    pub sales_orders: Arc<dyn SalesOrderClient>,
    pub suppliers: Arc<dyn SupplierClient>,
    pub issues: Arc<dyn IssueClient>,
}

impl From<&InMemoryBackend> for Clients {
    fn from(backend: &InMemoryBackend) -> Self {
        Self {
            products: backend.products.clone(),
            product_suppliers: backend.product_suppliers.clone(),
            purchase_orders: backend.purchase_orders.clone(),
            sales_orders: backend.sales_orders.clone(),
            suppliers: backend.suppliers.clone(),
            issues: backend.issues.clone(),
        }
    }
}

/// One instance of every service, built from explicitly passed clients.
#[derive(Clone)]
pub struct Services {
    pub products: ProductService,
    pub product_suppliers: ProductSupplierService,
    pub purchase_orders: PurchaseOrderService,
    pub sales_orders: SalesOrderService,
    pub suppliers: SupplierService,
    pub issues: IssueService,
    pub dashboard: DashboardService,
}

impl Services {
    pub fn new(clients: Clients, config: &DashboardConfig) -> Self {
        let products = ProductService::new(clients.products);
        let product_suppliers =
            ProductSupplierService::new(clients.product_suppliers, clients.suppliers.clone());
        let purchase_orders = PurchaseOrderService::new(clients.purchase_orders);
        let sales_orders = SalesOrderService::new(clients.sales_orders);
        let suppliers = SupplierService::new(clients.suppliers);
        let issues = IssueService::new(clients.issues, config.issue_period());

        let dashboard = DashboardService::new(
            products.clone(),
            product_suppliers.clone(),
            purchase_orders.clone(),
            sales_orders.clone(),
            issues.clone(),
            config.top_n,
        );

        Self {
            products,
            product_suppliers,
            purchase_orders,
            sales_orders,
            suppliers,
            issues,
            dashboard,
        }
    }

    pub fn in_memory(backend: &InMemoryBackend, config: &DashboardConfig) -> Self {
        Self::new(Clients::from(backend), config)
    }
}
