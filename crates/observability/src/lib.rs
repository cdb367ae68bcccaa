//! Logging setup for the `stockboard` binary.

/// Install the JSON log subscriber. Calling it again keeps the first one.
pub fn init() {
    tracing::init();
}

pub mod tracing;
