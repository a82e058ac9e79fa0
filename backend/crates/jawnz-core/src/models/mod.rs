pub mod bridge_message;
pub mod comment_entity;
pub mod comment_entity_payload;
pub mod content_type;
