//! `stockboard-core`: shared building blocks for the stock dashboard domain.
//!
//! This crate contains **pure domain** primitives (no storage, no IO).

pub mod entity;
pub mod error;
pub mod id;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{CustomerId, IssueId, OrderId, OrderPositionId, ProductId, SupplierId};
