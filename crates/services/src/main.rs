use anyhow::{Context, bail};
use chrono::Utc;

use stockboard_core::ProductId;
use stockboard_infra::{DashboardConfig, Dataset, InMemoryBackend, fixtures};
use stockboard_services::Services;

fn main() -> anyhow::Result<()> {
    stockboard_observability::init();

    let config = DashboardConfig::from_env().context("failed to load configuration")?;
    let now = Utc::now();

    let dataset = match &config.seed_path {
        Some(path) => Dataset::from_json_file(path)
            .with_context(|| format!("failed to seed from {}", path.display()))?,
        None => {
            tracing::info!("no seed path configured; using built-in sample dataset");
            fixtures::sample_dataset(now).context("failed to build sample dataset")?
        }
    };

    let backend = InMemoryBackend::from_dataset(dataset)?;
    let services = Services::in_memory(&backend, &config);

    let output = match std::env::args().nth(1) {
        Some(raw) => {
            let id: ProductId = raw.parse()?;
            let Some(detail) = services.dashboard.product_detail(&id) else {
                bail!("unknown product {id}");
            };
            serde_json::to_string_pretty(&detail)?
        }
        None => serde_json::to_string_pretty(&services.dashboard.snapshot(now))?,
    };

    println!("{output}");
    Ok(())
}
