use crate::*;

#[near]
impl Contract {
    #[handle_result]
    pub fn transfer_administrator(
        &mut self,
        new_administrator: AccountId,
    ) -> Result<(), QuyxError> {
        self.registry
            .transfer_administrator(&env::predecessor_account_id(), new_administrator)
    }
}
