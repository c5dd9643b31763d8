use near_sdk::AccountId;
#[cfg(feature = "admin-transfer")]
use near_sdk::log;

use super::CardRegistry;
use crate::errors::QuyxError;
use crate::events::QuyxEvent;
#[cfg(feature = "admin-transfer")]
use crate::guards::check_not_null;
use crate::types::UrlPolicy;
use crate::validation::validate_base_url;

impl CardRegistry {
    #[cfg(feature = "admin-transfer")]
    pub fn transfer_administrator(
        &mut self,
        caller: &AccountId,
        new_administrator: AccountId,
    ) -> Result<(), QuyxError> {
        self.transact(|tx| {
            tx.require_administrator(caller)?;
            check_not_null(&new_administrator, "Administrator")?;
            let old_administrator = tx.administrator().clone();
            tx.set_administrator(new_administrator.clone());
            tx.emit(QuyxEvent::AdministratorChanged {
                old_administrator,
                new_administrator,
            });
            Ok(())
        })?;
        log!(
            "Administrator changed from {} to {}",
            caller,
            self.administrator
        );
        Ok(())
    }

    pub fn set_base_url(&mut self, caller: &AccountId, base_url: String) -> Result<(), QuyxError> {
        self.transact(|tx| {
            tx.require_administrator(caller)?;
            validate_base_url(tx.url_policy(), &base_url)?;
            let old_base_url = tx.base_url().to_string();
            tx.set_base_url(base_url.clone());
            tx.emit(QuyxEvent::BaseUrlChanged {
                old_base_url,
                new_base_url: base_url,
            });
            Ok(())
        })
    }

    /// Switching policy re-validates the stored base URL, so the stored value
    /// always satisfies the active policy.
    pub fn set_url_policy(
        &mut self,
        caller: &AccountId,
        url_policy: UrlPolicy,
    ) -> Result<(), QuyxError> {
        self.transact(|tx| {
            tx.require_administrator(caller)?;
            validate_base_url(url_policy, tx.base_url())?;
            let old_policy = tx.url_policy();
            tx.set_url_policy(url_policy);
            tx.emit(QuyxEvent::UrlPolicyChanged {
                old_policy,
                new_policy: url_policy,
            });
            Ok(())
        })
    }
}
