//! Quyx card registry contract.
//!
//! A single administrator configures the base URL that card metadata lives
//! under and issues cards identified by caller-chosen `u64` ids. Holders
//! transfer their own cards. A card's metadata location is the current base
//! URL followed by the decimal card id.

use near_sdk::json_types::U64;
use near_sdk::{AccountId, PanicOnDefault, env, log, near};

pub mod constants;
mod errors;
mod events;
mod guards;
mod registry;
mod types;
mod validation;

#[cfg(feature = "admin-transfer")]
mod admin;
mod base_url;
mod cards;
mod enumeration;


pub use constants::*;
pub use errors::QuyxError;
pub use events::QuyxEvent;
pub use registry::{CardRegistry, StorageKey};
pub use types::{CardId, CardView, UrlPolicy};

#[near(contract_state)]
#[derive(PanicOnDefault)]
pub struct Contract {
    pub version: String,
    registry: CardRegistry,
}

#[near]
impl Contract {
    /// The predecessor becomes the administrator. `url_policy` defaults to
    /// [`UrlPolicy::NonEmpty`].
    #[init]
    #[handle_result]
    pub fn new(base_url: String, url_policy: Option<UrlPolicy>) -> Result<Self, QuyxError> {
        let administrator = env::predecessor_account_id();
        let registry =
            CardRegistry::new(administrator, base_url, url_policy.unwrap_or_default())?;
        log!(
            "Quyx initialized by {} with base URL {}",
            registry.administrator(),
            registry.base_url()
        );
        Ok(Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            registry,
        })
    }

    pub fn get_administrator(&self) -> &AccountId {
        self.registry.administrator()
    }

    pub fn get_version(&self) -> String {
        self.version.clone()
    }
}
