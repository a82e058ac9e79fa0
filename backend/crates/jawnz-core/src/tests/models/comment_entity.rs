use crate::{CONTENT_MAX_LENGTH, CommentEntity};

use chrono::{DateTime, TimeZone, Utc};
use googletest::prelude::*;

fn sample() -> CommentEntity {
    CommentEntity::new(
        "AAAAAAAAAA",
        "AAAAAAAAAA",
        "AAAAAAAAAA",
        DateTime::from_timestamp_millis(0).unwrap(),
    )
}

#[test]
fn given_same_id_when_compared_then_equal() {
    let first = sample().with_id("id1");
    let second = sample().with_id("id1");

    assert_that!(first == second, eq(true));
}

#[test]
fn given_different_ids_when_compared_then_not_equal() {
    let first = sample().with_id("id1");
    let second = sample().with_id("id2");

    assert_that!(first == second, eq(false));
}

#[test]
fn given_missing_id_when_compared_then_not_equal() {
    let first = sample();
    let second = sample().with_id("id2");

    assert_that!(first == second, eq(false));
    assert_that!(sample() == sample(), eq(false));
}

#[test]
fn given_sub_millisecond_instant_when_created_then_truncated() {
    let instant = Utc.timestamp_opt(1_700_000_000, 123_456_789).unwrap();
    let entity = CommentEntity::new("u", "n", "c", instant);

    assert_that!(entity.created_at.timestamp_subsec_nanos(), eq(123_000_000));
}

#[test]
fn given_empty_content_when_validated_then_error_names_field() {
    let mut entity = sample();
    entity.content = String::new();

    let error = entity.validate().unwrap_err();
    assert_that!(error.field(), some(eq("content")));
}

#[test]
fn given_content_at_max_length_when_validated_then_ok() {
    let mut entity = sample();
    entity.content = "x".repeat(CONTENT_MAX_LENGTH);

    assert_that!(entity.validate(), ok(anything()));

    entity.content.push('x');
    assert_that!(entity.validate(), err(anything()));
}

#[test]
fn given_astral_plane_content_when_validated_then_counted_in_utf16_units() {
    let mut entity = sample();
    entity.content = "\u{1F600}".repeat(CONTENT_MAX_LENGTH / 2);

    assert_that!(entity.validate(), ok(anything()));

    entity.content.push('\u{1F600}');
    let error = entity.validate().unwrap_err();
    assert_that!(error.field(), some(eq("content")));
}

#[test]
fn given_bmp_accented_content_at_max_length_when_validated_then_ok() {
    let mut entity = sample();
    entity.content = "é".repeat(CONTENT_MAX_LENGTH);

    assert_that!(entity.validate(), ok(anything()));
}

#[test]
fn given_entity_when_serialized_then_uses_camel_case_fields() {
    let entity = sample().with_id("abc");
    let json = serde_json::to_value(&entity).unwrap();

    assert_eq!(json["id"], "abc");
    assert_eq!(json["userId"], "AAAAAAAAAA");
    assert_eq!(json["userName"], "AAAAAAAAAA");
    assert_eq!(json["createdAt"], "1970-01-01T00:00:00Z");
}
