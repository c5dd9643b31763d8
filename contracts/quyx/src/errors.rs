use near_sdk_macros::NearSchema;

use crate::types::CardId;

#[derive(NearSchema, near_sdk::FunctionError)]
#[abi(json)]
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub enum QuyxError {
    Unauthorized(String),
    InvalidArgument(String),
    AlreadyExists(String),
    NotFound(String),
}

impl std::fmt::Display for QuyxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            Self::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            Self::AlreadyExists(msg) => write!(f, "Already exists: {}", msg),
            Self::NotFound(msg) => write!(f, "Not found: {}", msg),
        }
    }
}

impl QuyxError {
    pub fn only_administrator() -> Self {
        Self::Unauthorized("Only the administrator can perform this action".into())
    }
    pub fn not_card_owner(card_id: CardId) -> Self {
        Self::Unauthorized(format!("Only the owner of card {} can transfer it", card_id))
    }
    pub fn card_not_found(card_id: CardId) -> Self {
        Self::NotFound(format!("Card {} has not been issued", card_id))
    }
    pub fn card_already_issued(card_id: CardId) -> Self {
        Self::AlreadyExists(format!("Card {} is already issued", card_id))
    }
    pub fn null_account(role: &str) -> Self {
        Self::InvalidArgument(format!("{} cannot be the null account", role))
    }
}
