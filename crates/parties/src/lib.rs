//! Parties domain module.
//!
//! Suppliers, customers, and the commercial link between a product and the
//! suppliers that deliver it.

pub mod party;
pub mod product_supplier;

pub use party::{Customer, Supplier};
pub use product_supplier::{ProductSupplier, ProductSupplierKey, merge_product_suppliers};
