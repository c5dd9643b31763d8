//! Card registry state machine.
//!
//! Every mutation runs through [`CardRegistry::transact`]: the operation reads
//! committed state through a [`Transaction`], stages its writes and events on
//! it, and they are applied only when the operation returns `Ok`. A failed
//! operation leaves storage untouched and logs nothing.

mod admin;
mod cards;
mod transaction;

use near_sdk::store::{IterableSet, LookupMap};
use near_sdk::{AccountId, BorshStorageKey, near};

use crate::errors::QuyxError;
use crate::guards::hash_account_id;
use crate::types::{CardId, UrlPolicy};
use crate::validation::validate_base_url;

pub(crate) use transaction::Transaction;
use transaction::{ChangeSet, OwnershipChange};

#[near]
#[derive(BorshStorageKey)]
pub enum StorageKey {
    CardOwners,
    CardsPerOwner,
    CardsPerOwnerInner { account_id_hash: Vec<u8> },
}

#[near]
pub struct CardRegistry {
    administrator: AccountId,
    base_url: String,
    url_policy: UrlPolicy,
    card_owners: LookupMap<CardId, AccountId>,
    // Kept in lockstep with `card_owners`; only written by `apply_ownership`.
    cards_per_owner: LookupMap<AccountId, IterableSet<CardId>>,
    card_count: u64,
}

impl CardRegistry {
    pub fn new(
        administrator: AccountId,
        base_url: String,
        url_policy: UrlPolicy,
    ) -> Result<Self, QuyxError> {
        validate_base_url(url_policy, &base_url)?;
        Ok(Self {
            administrator,
            base_url,
            url_policy,
            card_owners: LookupMap::new(StorageKey::CardOwners),
            cards_per_owner: LookupMap::new(StorageKey::CardsPerOwner),
            card_count: 0,
        })
    }

    pub fn administrator(&self) -> &AccountId {
        &self.administrator
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url_policy(&self) -> UrlPolicy {
        self.url_policy
    }

    pub fn card_count(&self) -> u64 {
        self.card_count
    }

    pub(crate) fn transact<T>(
        &mut self,
        op: impl FnOnce(&mut Transaction<'_>) -> Result<T, QuyxError>,
    ) -> Result<T, QuyxError> {
        let mut tx = Transaction::new(self);
        let value = op(&mut tx)?;
        let changes = tx.into_changes();
        self.apply(changes);
        Ok(value)
    }

    fn apply(&mut self, changes: ChangeSet) {
        let ChangeSet {
            administrator,
            base_url,
            url_policy,
            ownership,
            events,
        } = changes;

        if let Some(administrator) = administrator {
            self.administrator = administrator;
        }
        if let Some(base_url) = base_url {
            self.base_url = base_url;
        }
        if let Some(url_policy) = url_policy {
            self.url_policy = url_policy;
        }
        for change in ownership {
            self.apply_ownership(change);
        }
        for event in events {
            event.emit();
        }
    }

    fn apply_ownership(&mut self, change: OwnershipChange) {
        let OwnershipChange {
            card_id,
            previous_owner,
            new_owner,
        } = change;

        match previous_owner {
            Some(previous_owner) => self.remove_card_from_owner(&previous_owner, card_id),
            None => self.card_count += 1,
        }
        self.add_card_to_owner(&new_owner, card_id);
        self.card_owners.insert(card_id, new_owner);
    }

    fn add_card_to_owner(&mut self, owner_id: &AccountId, card_id: CardId) {
        if self.cards_per_owner.get(owner_id).is_none() {
            self.cards_per_owner.insert(
                owner_id.clone(),
                IterableSet::new(StorageKey::CardsPerOwnerInner {
                    account_id_hash: hash_account_id(owner_id),
                }),
            );
        }
        if let Some(cards) = self.cards_per_owner.get_mut(owner_id) {
            cards.insert(card_id);
        }
    }

    fn remove_card_from_owner(&mut self, owner_id: &AccountId, card_id: CardId) {
        let Some(cards) = self.cards_per_owner.get_mut(owner_id) else {
            return;
        };
        cards.remove(&card_id);
        if cards.is_empty() {
            self.cards_per_owner.remove(owner_id);
        }
    }
}
