//! Orders domain module.
//!
//! Purchase orders (from suppliers) and sales orders (to customers) share the
//! same line-item shape, [`OrderPosition`]. Both expose their positions through
//! [`ProductOrder`] so product-scoped queries can treat them uniformly.

pub mod position;
pub mod purchase;
pub mod sales;

pub use position::{OrderPosition, ProductOrder};
pub use purchase::PurchaseOrder;
pub use sales::SalesOrder;
