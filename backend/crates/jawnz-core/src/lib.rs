pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::bridge_message::BridgeMessage;
pub use models::comment_entity::{
    CONTENT_MAX_LENGTH, CONTENT_MIN_LENGTH, CommentEntity, ENTITY_NAME,
};
pub use models::comment_entity_payload::CommentEntityPayload;
pub use models::content_type::ContentType;

#[cfg(test)]
mod tests;
