//! Deployment tooling for the Quyx card registry.
//!
//! Deploys the compiled contract to a developer account, initializes it with
//! the configured base URL and persists `{ "address": ... }` so later tooling
//! can find the instance.

pub mod config;
pub mod deploy;
pub mod record;

pub use crate::config::{Config, Network, UrlPolicy};
pub use crate::deploy::{deploy, initialize};
pub use crate::record::DeploymentRecord;
