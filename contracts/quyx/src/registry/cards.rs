use near_sdk::AccountId;
use near_sdk::json_types::U64;

use super::CardRegistry;
use crate::errors::QuyxError;
use crate::events::QuyxEvent;
use crate::guards::{check_card_owner, check_not_null};
use crate::types::{CardId, CardView};

impl CardRegistry {
    pub fn issue_card(
        &mut self,
        caller: &AccountId,
        to: AccountId,
        card_id: CardId,
    ) -> Result<(), QuyxError> {
        self.transact(|tx| {
            tx.require_administrator(caller)?;
            check_not_null(&to, "Card recipient")?;
            if tx.owner_of(card_id).is_some() {
                return Err(QuyxError::card_already_issued(card_id));
            }
            tx.set_card_owner(card_id, to.clone());
            tx.emit(QuyxEvent::CardIssued {
                owner_id: to,
                card_id: U64(card_id),
            });
            Ok(())
        })
    }

    pub fn transfer_card(
        &mut self,
        caller: &AccountId,
        card_id: CardId,
        to: AccountId,
    ) -> Result<(), QuyxError> {
        self.transact(|tx| {
            let owner_id = tx
                .owner_of(card_id)
                .cloned()
                .ok_or_else(|| QuyxError::card_not_found(card_id))?;
            check_card_owner(card_id, &owner_id, caller)?;
            check_not_null(&to, "Card recipient")?;
            tx.set_card_owner(card_id, to.clone());
            tx.emit(QuyxEvent::CardTransferred {
                old_owner_id: owner_id,
                new_owner_id: to,
                card_id: U64(card_id),
            });
            Ok(())
        })
    }

    pub fn owner_of(&self, card_id: CardId) -> Result<&AccountId, QuyxError> {
        self.card_owners
            .get(&card_id)
            .ok_or_else(|| QuyxError::card_not_found(card_id))
    }

    /// Derived from the current base URL on every call; never stored.
    pub fn card_uri(&self, card_id: CardId) -> Result<String, QuyxError> {
        self.owner_of(card_id)?;
        Ok(self.compose_uri(card_id))
    }

    pub fn card(&self, card_id: CardId) -> Option<CardView> {
        self.card_owners.get(&card_id).map(|owner_id| CardView {
            card_id: U64(card_id),
            owner_id: owner_id.clone(),
            uri: self.compose_uri(card_id),
        })
    }

    pub fn card_supply_for_owner(&self, owner_id: &AccountId) -> u64 {
        self.cards_per_owner
            .get(owner_id)
            .map(|cards| cards.len() as u64)
            .unwrap_or(0)
    }

    pub fn cards_for_owner(&self, owner_id: &AccountId, start: usize, limit: usize) -> Vec<CardView> {
        let Some(cards) = self.cards_per_owner.get(owner_id) else {
            return vec![];
        };
        cards
            .iter()
            .skip(start)
            .take(limit)
            .map(|card_id| CardView {
                card_id: U64(*card_id),
                owner_id: owner_id.clone(),
                uri: self.compose_uri(*card_id),
            })
            .collect()
    }

    fn compose_uri(&self, card_id: CardId) -> String {
        format!("{}{}", self.base_url, card_id)
    }
}
