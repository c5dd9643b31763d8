use near_sdk::AccountId;

use super::CardRegistry;
use crate::errors::QuyxError;
use crate::events::QuyxEvent;
use crate::guards::check_administrator;
use crate::types::{CardId, UrlPolicy};

/// Staged writes of one operation. Reads see committed state overlaid with
/// whatever the operation has staged so far.
pub(crate) struct Transaction<'a> {
    registry: &'a CardRegistry,
    changes: ChangeSet,
}

#[derive(Default)]
pub(super) struct ChangeSet {
    pub(super) administrator: Option<AccountId>,
    pub(super) base_url: Option<String>,
    pub(super) url_policy: Option<UrlPolicy>,
    pub(super) ownership: Vec<OwnershipChange>,
    pub(super) events: Vec<QuyxEvent>,
}

pub(super) struct OwnershipChange {
    pub(super) card_id: CardId,
    /// `None` when the change issues the card.
    pub(super) previous_owner: Option<AccountId>,
    pub(super) new_owner: AccountId,
}

impl<'a> Transaction<'a> {
    pub(super) fn new(registry: &'a CardRegistry) -> Self {
        Self {
            registry,
            changes: ChangeSet::default(),
        }
    }

    pub(super) fn into_changes(self) -> ChangeSet {
        self.changes
    }

    pub(crate) fn administrator(&self) -> &AccountId {
        self.changes
            .administrator
            .as_ref()
            .unwrap_or(&self.registry.administrator)
    }

    pub(crate) fn base_url(&self) -> &str {
        self.changes
            .base_url
            .as_deref()
            .unwrap_or(&self.registry.base_url)
    }

    pub(crate) fn url_policy(&self) -> UrlPolicy {
        self.changes.url_policy.unwrap_or(self.registry.url_policy)
    }

    pub(crate) fn owner_of(&self, card_id: CardId) -> Option<&AccountId> {
        self.changes
            .ownership
            .iter()
            .rev()
            .find(|change| change.card_id == card_id)
            .map(|change| &change.new_owner)
            .or_else(|| self.registry.card_owners.get(&card_id))
    }

    pub(crate) fn require_administrator(&self, caller: &AccountId) -> Result<(), QuyxError> {
        check_administrator(self.administrator(), caller)
    }

    pub(crate) fn set_administrator(&mut self, administrator: AccountId) {
        self.changes.administrator = Some(administrator);
    }

    pub(crate) fn set_base_url(&mut self, base_url: String) {
        self.changes.base_url = Some(base_url);
    }

    pub(crate) fn set_url_policy(&mut self, url_policy: UrlPolicy) {
        self.changes.url_policy = Some(url_policy);
    }

    pub(crate) fn set_card_owner(&mut self, card_id: CardId, new_owner: AccountId) {
        let previous_owner = self.owner_of(card_id).cloned();
        self.changes.ownership.push(OwnershipChange {
            card_id,
            previous_owner,
            new_owner,
        });
    }

    pub(crate) fn emit(&mut self, event: QuyxEvent) {
        self.changes.events.push(event);
    }
}
