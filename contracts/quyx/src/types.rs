use near_sdk::json_types::U64;
use near_sdk::{AccountId, near};

pub type CardId = u64;

/// Rule applied to every base URL the registry stores.
#[near(serializers = [borsh, json])]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum UrlPolicy {
    #[default]
    NonEmpty,
    /// Non-empty, `http://` or `https://` prefix, no whitespace.
    Http,
}

#[near(serializers = [json])]
#[derive(Clone, Debug, PartialEq)]
pub struct CardView {
    pub card_id: U64,
    pub owner_id: AccountId,
    pub uri: String,
}
