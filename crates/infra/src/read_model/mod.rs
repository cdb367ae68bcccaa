//! Record storage abstractions shared by the in-memory access clients.

pub mod record_store;

pub use record_store::{InMemoryRecordStore, RecordStore};
