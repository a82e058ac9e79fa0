mod bridge_message;
mod comment_entity;
mod comment_entity_payload;
