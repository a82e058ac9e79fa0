use crate::{CommentEntity, CommentEntityPayload};

use chrono::DateTime;
use googletest::prelude::*;
use proptest::prelude::*;

fn full_payload() -> CommentEntityPayload {
    CommentEntityPayload {
        id: None,
        user_id: Some("AAAAAAAAAA".into()),
        user_name: Some("AAAAAAAAAA".into()),
        content: Some("AAAAAAAAAA".into()),
        created_at: DateTime::from_timestamp_millis(0),
    }
}

fn existing() -> CommentEntity {
    CommentEntity::new(
        "AAAAAAAAAA",
        "AAAAAAAAAA",
        "AAAAAAAAAA",
        DateTime::from_timestamp_millis(0).unwrap(),
    )
    .with_id("existing")
}

#[test]
fn given_complete_payload_when_into_entity_then_ok() {
    let entity = full_payload().into_entity().unwrap();

    assert_that!(entity.user_id.as_str(), eq("AAAAAAAAAA"));
    assert_that!(entity.id, none());
}

#[test]
fn given_missing_user_id_when_into_entity_then_validation_error() {
    let payload = CommentEntityPayload {
        user_id: None,
        ..full_payload()
    };

    let error = payload.into_entity().unwrap_err();
    assert_that!(error.field(), some(eq("userId")));
}

#[test]
fn given_missing_created_at_when_into_entity_then_validation_error() {
    let payload = CommentEntityPayload {
        created_at: None,
        ..full_payload()
    };

    let error = payload.into_entity().unwrap_err();
    assert_that!(error.field(), some(eq("createdAt")));
}

#[test]
fn given_json_null_fields_when_deserialized_then_none() {
    let payload: CommentEntityPayload =
        serde_json::from_str(r#"{"id":"x","userId":null,"content":"hello"}"#).unwrap();

    assert_that!(payload.id, some(eq("x")));
    assert_that!(payload.user_id, none());
    assert_that!(payload.user_name, none());
    assert_that!(payload.content, some(eq("hello")));
}

#[test]
fn given_partial_payload_when_merged_then_only_present_fields_change() {
    let mut entity = existing();
    let patch = CommentEntityPayload {
        id: Some("existing".into()),
        user_id: Some("BBBBBBBBBB".into()),
        content: Some("BBBBBBBBBB".into()),
        ..Default::default()
    };

    patch.merge_into(&mut entity).unwrap();

    assert_that!(entity.user_id.as_str(), eq("BBBBBBBBBB"));
    assert_that!(entity.user_name.as_str(), eq("AAAAAAAAAA"));
    assert_that!(entity.content.as_str(), eq("BBBBBBBBBB"));
    assert_that!(entity.id, some(eq("existing")));
}

#[test]
fn given_too_long_content_when_merged_then_error_and_entity_untouched() {
    let mut entity = existing();
    let patch = CommentEntityPayload {
        user_name: Some("BBBBBBBBBB".into()),
        content: Some("x".repeat(201)),
        ..Default::default()
    };

    assert_that!(patch.merge_into(&mut entity), err(anything()));
    assert_that!(entity.user_name.as_str(), eq("AAAAAAAAAA"));
}

proptest! {
    #[test]
    fn given_empty_patch_when_merged_then_entity_unchanged(content in "[a-zA-Z0-9 ]{1,200}") {
        let mut entity = existing();
        entity.content = content.clone();

        CommentEntityPayload::default().merge_into(&mut entity).unwrap();

        prop_assert_eq!(entity.content, content);
        prop_assert_eq!(entity.user_id, "AAAAAAAAAA");
    }

    #[test]
    fn given_full_payload_when_round_tripped_through_entity_then_fields_preserved(
        user in "[a-z]{1,20}",
        content in "[a-zA-Z0-9 ]{1,200}",
    ) {
        let payload = CommentEntityPayload {
            user_id: Some(user.clone()),
            user_name: Some(user.clone()),
            content: Some(content.clone()),
            ..full_payload()
        };

        let entity = payload.into_entity().unwrap();
        let back = CommentEntityPayload::from(entity);

        prop_assert_eq!(back.user_id, Some(user));
        prop_assert_eq!(back.content, Some(content));
    }
}
