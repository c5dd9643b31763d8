use crate::tests::test_utils::*;
use crate::*;
use near_sdk::json_types::U64;
use near_sdk::test_utils::get_logs;

// --- new ---

#[test]
fn new_makes_predecessor_the_administrator() {
    let contract = new_contract();
    assert_eq!(contract.get_administrator(), &administrator());
    assert_eq!(contract.get_base_url(), BASE_URL);
    assert_eq!(contract.get_url_policy(), UrlPolicy::NonEmpty);
    assert_eq!(contract.get_version(), env!("CARGO_PKG_VERSION"));
}

#[test]
fn new_logs_initialization() {
    let _contract = new_contract();
    let logs = get_logs();
    assert_eq!(logs.len(), 1);
    assert!(logs[0].contains("Quyx initialized by alice"));
}

#[test]
fn new_with_empty_base_url_fails() {
    set_caller(administrator());
    let result = Contract::new(String::new(), None);
    assert!(matches!(result, Err(QuyxError::InvalidArgument(_))));
}

#[test]
fn new_with_explicit_http_policy() {
    set_caller(administrator());
    let contract = match Contract::new(BASE_URL.to_string(), Some(UrlPolicy::Http)) {
        Ok(contract) => contract,
        Err(err) => panic!("init failed: {}", err),
    };
    assert_eq!(contract.get_url_policy(), UrlPolicy::Http);
}

// --- entrypoints use the predecessor as caller ---

#[test]
fn issue_and_transfer_through_entrypoints() {
    let mut contract = new_contract();
    contract.issue_card(holder(), U64(7)).unwrap();
    assert_eq!(contract.owner_of(U64(7)).unwrap(), holder());

    set_caller(holder());
    contract.transfer_card(U64(7), recipient()).unwrap();
    assert_eq!(contract.owner_of(U64(7)).unwrap(), recipient());

    set_caller(outsider());
    let err = contract.transfer_card(U64(7), outsider()).unwrap_err();
    assert!(matches!(err, QuyxError::Unauthorized(_)));
}

#[test]
fn admin_entrypoints_reject_other_predecessors() {
    let mut contract = new_contract();
    set_caller(outsider());

    let err = contract.set_base_url("https://x/".into()).unwrap_err();
    assert!(matches!(err, QuyxError::Unauthorized(_)));
    let err = contract.issue_card(outsider(), U64(1)).unwrap_err();
    assert!(matches!(err, QuyxError::Unauthorized(_)));
    let err = contract.set_url_policy(UrlPolicy::Http).unwrap_err();
    assert!(matches!(err, QuyxError::Unauthorized(_)));
    #[cfg(feature = "admin-transfer")]
    {
        let err = contract.transfer_administrator(outsider()).unwrap_err();
        assert!(matches!(err, QuyxError::Unauthorized(_)));
    }

    assert_eq!(contract.get_base_url(), BASE_URL);
    assert_eq!(contract.get_administrator(), &administrator());
    assert_eq!(contract.total_cards(), U64(0));
}

#[test]
fn card_uri_entrypoint_follows_base_url() {
    let mut contract = new_contract();
    contract.issue_card(holder(), U64(42)).unwrap();
    assert_eq!(
        contract.card_uri(U64(42)).unwrap(),
        "https://api.quyx.xyz/card/42"
    );

    contract.set_base_url("https://x/".into()).unwrap();
    assert_eq!(contract.card_uri(U64(42)).unwrap(), "https://x/42");
}

#[test]
fn view_entrypoints_report_unissued_cards() {
    let contract = new_contract();
    assert!(matches!(
        contract.owner_of(U64(999)),
        Err(QuyxError::NotFound(_))
    ));
    assert!(matches!(
        contract.card_uri(U64(999)),
        Err(QuyxError::NotFound(_))
    ));
}

#[cfg(feature = "admin-transfer")]
#[test]
fn transfer_administrator_entrypoint() {
    let mut contract = new_contract();
    contract.transfer_administrator(holder()).unwrap();
    assert_eq!(contract.get_administrator(), &holder());

    set_caller(holder());
    contract.issue_card(recipient(), U64(1)).unwrap();
    assert_eq!(contract.owner_of(U64(1)).unwrap(), recipient());
}
