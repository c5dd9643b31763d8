use crate::validation::page_bounds;
use crate::*;

#[near]
impl Contract {
    pub fn get_card(&self, card_id: U64) -> Option<CardView> {
        self.registry.card(card_id.0)
    }

    pub fn total_cards(&self) -> U64 {
        U64(self.registry.card_count())
    }

    pub fn card_supply_for_owner(&self, account_id: AccountId) -> U64 {
        U64(self.registry.card_supply_for_owner(&account_id))
    }

    pub fn cards_for_owner(
        &self,
        account_id: AccountId,
        from_index: Option<U64>,
        limit: Option<u32>,
    ) -> Vec<CardView> {
        let (start, limit) = page_bounds(from_index, limit);
        self.registry.cards_for_owner(&account_id, start, limit)
    }
}
