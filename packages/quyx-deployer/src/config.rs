//! Deployer configuration.
//!
//! Layered from an optional `quyx-deployer.toml` and `QUYX_*` environment
//! variables; every field has a default.

use anyhow::Context;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Network {
    /// An already running local sandbox node at `rpc_addr`, started with
    /// `near-sandbox --home <sandbox_home> run`.
    Localhost,
    /// Throwaway sandbox spawned by the deployer. It stops when the deployer
    /// exits, so the written record only lives as long as the process.
    Sandbox,
    /// Testnet developer account created by the faucet helper.
    Testnet,
}

/// Mirrors the contract's `UrlPolicy` JSON form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UrlPolicy {
    NonEmpty,
    Http,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "defaults::network")]
    pub network: Network,

    #[serde(default = "defaults::rpc_addr")]
    pub rpc_addr: String,

    /// Home directory of the `localhost` node; holds `validator_key.json`.
    #[serde(default = "defaults::sandbox_home")]
    pub sandbox_home: String,

    #[serde(default = "defaults::wasm_path")]
    pub wasm_path: String,

    #[serde(default = "defaults::base_url")]
    pub base_url: String,

    #[serde(default)]
    pub url_policy: Option<UrlPolicy>,

    #[serde(default = "defaults::output_path")]
    pub output_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            network: defaults::network(),
            rpc_addr: defaults::rpc_addr(),
            sandbox_home: defaults::sandbox_home(),
            wasm_path: defaults::wasm_path(),
            base_url: defaults::base_url(),
            url_policy: None,
            output_path: defaults::output_path(),
        }
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        Self::from_builder(
            config::Config::builder()
                .add_source(config::File::with_name("quyx-deployer").required(false))
                .add_source(config::Environment::with_prefix("QUYX")),
        )
    }

    pub(crate) fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> anyhow::Result<Self> {
        builder
            .build()
            .and_then(|c| c.try_deserialize())
            .context("invalid deployer configuration")
    }
}

mod defaults {
    use super::Network;

    pub fn network() -> Network {
        Network::Localhost
    }

    pub fn rpc_addr() -> String {
        "http://127.0.0.1:3030".into()
    }

    pub fn sandbox_home() -> String {
        "/tmp/near-sandbox".into()
    }

    pub fn wasm_path() -> String {
        "target/near/quyx/quyx.wasm".into()
    }

    pub fn base_url() -> String {
        "https://api.quyx.xyz/card/".into()
    }

    pub fn output_path() -> String {
        "./data/contractAddress.json".into()
    }
}
