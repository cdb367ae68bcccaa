//! Inventory domain module.
//!
//! Received stock batches and the statistics derived from them: totals per
//! product, rankings, and threshold classification. Everything here is
//! recomputed from the batches on every call; nothing is cached.

pub mod batch;
pub mod statistic;

pub use batch::ProductStock;
pub use statistic::{
    ProductStatistic, RankBy, StockLevel, orphan_batches, product_statistics,
    product_total_quantity, product_total_value, top_n, total_quantity, total_value,
};
