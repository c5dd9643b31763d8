use crate::*;

pub(crate) fn hash_account_id(account_id: &AccountId) -> Vec<u8> {
    env::sha256(account_id.as_bytes())
}

pub(crate) fn is_null_account(account_id: &AccountId) -> bool {
    account_id.as_str() == NULL_ACCOUNT_ID || account_id.as_str() == SYSTEM_ACCOUNT_ID
}

pub(crate) fn check_not_null(account_id: &AccountId, role: &str) -> Result<(), QuyxError> {
    if is_null_account(account_id) {
        return Err(QuyxError::null_account(role));
    }
    Ok(())
}

pub(crate) fn check_administrator(
    administrator: &AccountId,
    caller: &AccountId,
) -> Result<(), QuyxError> {
    if caller != administrator {
        return Err(QuyxError::only_administrator());
    }
    Ok(())
}

// Card transfers are authorized by the holder, never by the administrator.
pub(crate) fn check_card_owner(
    card_id: CardId,
    owner_id: &AccountId,
    caller: &AccountId,
) -> Result<(), QuyxError> {
    if caller != owner_id {
        return Err(QuyxError::not_card_owner(card_id));
    }
    Ok(())
}
