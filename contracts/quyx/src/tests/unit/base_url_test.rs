use crate::tests::test_utils::*;
use crate::*;

// --- set_base_url ---

#[test]
fn set_base_url_by_administrator() {
    let mut registry = new_registry();
    registry
        .set_base_url(&administrator(), "https://x/".into())
        .unwrap();
    assert_eq!(registry.base_url(), "https://x/");
}

#[test]
fn set_base_url_by_outsider_fails_and_keeps_value() {
    let mut registry = new_registry();
    let err = registry
        .set_base_url(&outsider(), "https://evil/".into())
        .unwrap_err();
    assert!(matches!(err, QuyxError::Unauthorized(_)));
    assert_eq!(registry.base_url(), BASE_URL);
    assert!(event_logs().is_empty());
}

#[test]
fn set_empty_base_url_fails() {
    let mut registry = new_registry();
    let err = registry
        .set_base_url(&administrator(), String::new())
        .unwrap_err();
    assert!(matches!(err, QuyxError::InvalidArgument(_)));
    assert_eq!(registry.base_url(), BASE_URL);
}

#[test]
fn non_empty_policy_accepts_any_scheme() {
    let mut registry = new_registry();
    registry
        .set_base_url(&administrator(), "ipfs://bafy/".into())
        .unwrap();
    assert_eq!(registry.base_url(), "ipfs://bafy/");
}

#[test]
fn http_policy_rejects_non_http_base_url() {
    set_caller(administrator());
    let mut registry = registry_with(BASE_URL, UrlPolicy::Http);
    let err = registry
        .set_base_url(&administrator(), "ipfs://bafy/".into())
        .unwrap_err();
    assert!(matches!(err, QuyxError::InvalidArgument(_)));
    assert_eq!(registry.base_url(), BASE_URL);
}

// --- set_url_policy ---

#[test]
fn set_url_policy_by_administrator() {
    let mut registry = new_registry();
    registry
        .set_url_policy(&administrator(), UrlPolicy::Http)
        .unwrap();
    assert_eq!(registry.url_policy(), UrlPolicy::Http);

    registry
        .set_url_policy(&administrator(), UrlPolicy::NonEmpty)
        .unwrap();
    assert_eq!(registry.url_policy(), UrlPolicy::NonEmpty);
}

#[test]
fn set_url_policy_rejects_policy_current_base_violates() {
    let mut registry = new_registry();
    registry
        .set_base_url(&administrator(), "ipfs://bafy/".into())
        .unwrap();

    let err = registry
        .set_url_policy(&administrator(), UrlPolicy::Http)
        .unwrap_err();
    assert!(matches!(err, QuyxError::InvalidArgument(_)));
    assert_eq!(registry.url_policy(), UrlPolicy::NonEmpty);
}

#[test]
fn set_url_policy_by_outsider_fails() {
    let mut registry = new_registry();
    let err = registry
        .set_url_policy(&outsider(), UrlPolicy::Http)
        .unwrap_err();
    assert!(matches!(err, QuyxError::Unauthorized(_)));
    assert_eq!(registry.url_policy(), UrlPolicy::NonEmpty);
}
