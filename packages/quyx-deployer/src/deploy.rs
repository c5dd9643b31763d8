use anyhow::Context;
use near_workspaces::network::ValidatorKey;
use near_workspaces::Contract;
use serde_json::json;
use tracing::{info, warn};

use crate::config::{Config, Network, UrlPolicy};
use crate::record::DeploymentRecord;

/// Deploys the wasm at `config.wasm_path` to a fresh developer account and
/// initializes it. The deploying account becomes the registry administrator.
pub async fn deploy(config: &Config) -> anyhow::Result<DeploymentRecord> {
    let wasm = std::fs::read(&config.wasm_path)
        .with_context(|| format!("reading contract wasm at {}", config.wasm_path))?;

    // The worker must outlive initialization; a dropped spawned sandbox stops the node.
    match config.network {
        Network::Localhost => {
            let worker = near_workspaces::sandbox()
                .rpc_addr(&config.rpc_addr)
                .validator_key(ValidatorKey::HomeDir(config.sandbox_home.clone().into()))
                .await
                .with_context(|| format!("connecting to sandbox node at {}", config.rpc_addr))?;
            let contract = worker.dev_deploy(&wasm).await?;
            initialize(&contract, &config.base_url, config.url_policy).await
        }
        Network::Sandbox => {
            warn!("Deploying to a throwaway sandbox; the recorded address dies with this process");
            let worker = near_workspaces::sandbox().await?;
            let contract = worker.dev_deploy(&wasm).await?;
            initialize(&contract, &config.base_url, config.url_policy).await
        }
        Network::Testnet => {
            let worker = near_workspaces::testnet().await?;
            let contract = worker.dev_deploy(&wasm).await?;
            initialize(&contract, &config.base_url, config.url_policy).await
        }
    }
}

/// Calls `new` on an already deployed contract and returns its record.
pub async fn initialize(
    contract: &Contract,
    base_url: &str,
    url_policy: Option<UrlPolicy>,
) -> anyhow::Result<DeploymentRecord> {
    info!(contract = %contract.id(), base_url, "Initializing Quyx");
    contract
        .call("new")
        .args_json(json!({
            "base_url": base_url,
            "url_policy": url_policy,
        }))
        .transact()
        .await?
        .into_result()
        .context("contract initialization failed")?;

    let administrator: String = contract
        .view("get_administrator")
        .args_json(json!({}))
        .await?
        .json()?;
    info!(contract = %contract.id(), administrator = %administrator, "Quyx initialized");

    Ok(DeploymentRecord {
        address: contract.id().to_string(),
    })
}
