use crate::*;

#[near]
impl Contract {
    #[handle_result]
    pub fn issue_card(&mut self, to: AccountId, card_id: U64) -> Result<(), QuyxError> {
        self.registry
            .issue_card(&env::predecessor_account_id(), to, card_id.0)
    }

    #[handle_result]
    pub fn transfer_card(&mut self, card_id: U64, to: AccountId) -> Result<(), QuyxError> {
        self.registry
            .transfer_card(&env::predecessor_account_id(), card_id.0, to)
    }

    #[handle_result]
    pub fn owner_of(&self, card_id: U64) -> Result<AccountId, QuyxError> {
        self.registry.owner_of(card_id.0).cloned()
    }

    #[handle_result]
    pub fn card_uri(&self, card_id: U64) -> Result<String, QuyxError> {
        self.registry.card_uri(card_id.0)
    }
}
