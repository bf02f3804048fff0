//! Rental ledger demo binary

use anyhow::Context;
use chrono::Utc;
use rental_ledger::{demo::run_demo, Config};

fn load_config() -> anyhow::Result<Config> {
    match std::env::var("RENTAL_CONFIG") {
        Ok(path) => Config::from_file(&path)
            .with_context(|| format!("Failed to load config from {}", path)),
        Err(_) => Config::from_env().context("Failed to load config from environment"),
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = load_config()?;
    tracing::info!(
        service = %config.service_name,
        version = %config.service_version,
        "Starting rental demo"
    );

    let system = run_demo(config, Utc::now(), &mut std::io::stdout().lock())
        .context("Demo run failed")?;

    tracing::debug!(
        events = %serde_json::to_string(system.events())?,
        "Rental history"
    );
    tracing::debug!(metrics = %system.metrics().gather_text()?, "Metrics snapshot");

    Ok(())
}
