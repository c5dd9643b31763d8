use near_sdk::json_types::U64;
use near_sdk::{AccountId, near};

use crate::types::UrlPolicy;

/// NEP-297 events, logged as `EVENT_JSON:{"standard":"quyx",...}`.
#[near(event_json(standard = "quyx"))]
pub enum QuyxEvent {
    #[event_version("1.0.0")]
    AdministratorChanged {
        old_administrator: AccountId,
        new_administrator: AccountId,
    },
    #[event_version("1.0.0")]
    BaseUrlChanged {
        old_base_url: String,
        new_base_url: String,
    },
    #[event_version("1.0.0")]
    UrlPolicyChanged {
        old_policy: UrlPolicy,
        new_policy: UrlPolicy,
    },
    #[event_version("1.0.0")]
    CardIssued { owner_id: AccountId, card_id: U64 },
    #[event_version("1.0.0")]
    CardTransferred {
        old_owner_id: AccountId,
        new_owner_id: AccountId,
        card_id: U64,
    },
}
