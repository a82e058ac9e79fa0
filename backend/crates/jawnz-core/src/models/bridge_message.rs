use crate::ContentType;

use serde::{Deserialize, Serialize};

/// A message in transit between the HTTP bridge and the broker.
///
/// Never persisted; the payload is opaque text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeMessage {
    pub payload: String,
    pub content_type: ContentType,
}

impl BridgeMessage {
    pub fn new(payload: impl Into<String>, content_type: ContentType) -> Self {
        Self {
            payload: payload.into(),
            content_type,
        }
    }

    /// Plain-text message, the only kind the bridge produces
    pub fn text(payload: impl Into<String>) -> Self {
        Self::new(payload, ContentType::TextPlain)
    }
}
