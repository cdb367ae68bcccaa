//! Products domain module.
//!
//! This crate contains the product catalog entity and its field rules,
//! implemented purely as deterministic domain logic (no IO, no storage).

pub mod product;

pub use product::{Product, MIN_NAME_LEN};
