//! JSON log subscriber filtered by `RUST_LOG`.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or does not parse.
pub const DEFAULT_FILTER: &str = "info";

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

pub fn init() {
    // stdout carries the dashboard JSON, so logs go to stderr.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter())
        .json()
        .with_target(false)
        .with_current_span(false)
        .with_writer(std::io::stderr)
        .try_init();
}
