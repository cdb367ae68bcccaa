//! Aggregation services over the access-layer clients.
//!
//! Each service is constructed with the clients it reads from; [`Services`]
//! wires a full set explicitly. Every query recomputes from the current
//! records.

pub mod container;
pub mod dashboard;
pub mod issue;
pub mod orders;
pub mod product;
pub mod product_supplier;
pub mod supplier;

pub use container::{Clients, Services};
pub use dashboard::{DashboardService, DashboardSnapshot, ProductDetail};
pub use issue::IssueService;
pub use orders::{PurchaseOrderService, SalesOrderService};
pub use product::ProductService;
pub use product_supplier::ProductSupplierService;
pub use supplier::SupplierService;
