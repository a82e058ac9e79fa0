use crate::AlertHeaders;

use jawnz_core::ENTITY_NAME;

fn alerts() -> AlertHeaders {
    AlertHeaders::new("jawnzbackApp", ENTITY_NAME)
}

#[test]
fn test_created_sets_alert_and_params() {
    let headers = alerts().created("abc-123");

    assert_eq!(
        headers["x-jawnzbackapp-alert"],
        "jawnzbackApp.jawnzbackCommentEntity.created"
    );
    assert_eq!(headers["x-jawnzbackapp-params"], "abc-123");
    assert!(headers.get("x-jawnzbackapp-error").is_none());
}

#[test]
fn test_updated_and_deleted_use_their_action() {
    let updated = alerts().updated("abc");
    let deleted = alerts().deleted("abc");

    assert_eq!(
        updated["x-jawnzbackapp-alert"],
        "jawnzbackApp.jawnzbackCommentEntity.updated"
    );
    assert_eq!(
        deleted["x-jawnzbackapp-alert"],
        "jawnzbackApp.jawnzbackCommentEntity.deleted"
    );
}

#[test]
fn test_failure_sets_error_key_and_entity_name() {
    let headers = alerts().failure("idnull");

    assert_eq!(headers["x-jawnzbackapp-error"], "error.idnull");
    assert_eq!(headers["x-jawnzbackapp-params"], "jawnzbackCommentEntity");
    assert!(headers.get("x-jawnzbackapp-alert").is_none());
}

#[test]
fn test_unencodable_id_is_skipped() {
    let headers = alerts().created("bad\nid");

    assert!(headers.get("x-jawnzbackapp-params").is_none());
    assert!(headers.get("x-jawnzbackapp-alert").is_some());
}
