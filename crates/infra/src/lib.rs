//! Infrastructure layer: access-layer clients, record stores, seeding, config.

pub mod access;
pub mod backend;
pub mod config;
pub mod fixtures;
pub mod read_model;
pub mod seed;

pub use backend::InMemoryBackend;
pub use config::{ConfigError, DashboardConfig};
pub use seed::{Dataset, SeedError};
