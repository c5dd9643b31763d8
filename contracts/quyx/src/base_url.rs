use crate::*;

#[near]
impl Contract {
    pub fn get_base_url(&self) -> &str {
        self.registry.base_url()
    }

    #[handle_result]
    pub fn set_base_url(&mut self, base_url: String) -> Result<(), QuyxError> {
        self.registry
            .set_base_url(&env::predecessor_account_id(), base_url)
    }

    pub fn get_url_policy(&self) -> UrlPolicy {
        self.registry.url_policy()
    }

    #[handle_result]
    pub fn set_url_policy(&mut self, url_policy: UrlPolicy) -> Result<(), QuyxError> {
        self.registry
            .set_url_policy(&env::predecessor_account_id(), url_policy)
    }
}
