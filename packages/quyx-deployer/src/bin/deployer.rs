//! Quyx deployer binary.

use quyx_deployer::{deploy, Config};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;
    info!(
        network = ?config.network,
        wasm = %config.wasm_path,
        base_url = %config.base_url,
        "Deploying Quyx"
    );

    let record = deploy(&config).await?;
    record.write(&config.output_path)?;

    info!(address = %record.address, path = %config.output_path, "Contract address");
    Ok(())
}
