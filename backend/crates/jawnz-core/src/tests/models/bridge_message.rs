use crate::{BridgeMessage, ContentType};

use std::str::FromStr;

#[test]
fn test_text_message_is_tagged_plain_text() {
    let message = BridgeMessage::text("value-produce");

    assert_eq!(message.payload, "value-produce");
    assert_eq!(message.content_type, ContentType::TextPlain);
    assert_eq!(message.content_type.to_string(), "text/plain");
}

#[test]
fn test_content_type_parses_with_charset_parameter() {
    let parsed = ContentType::from_str("Text/Plain; charset=UTF-8").unwrap();
    assert_eq!(parsed, ContentType::TextPlain);
}

#[test]
fn test_content_type_rejects_unknown_media_type() {
    assert!(ContentType::from_str("application/json").is_err());
}

#[test]
fn test_content_type_serializes_as_media_type() {
    let json = serde_json::to_string(&ContentType::TextPlain).unwrap();
    assert_eq!(json, "\"text/plain\"");
}
