use serde::Deserialize;

/// Query parameters for POST /api/jawnzback-kafka/publish
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PublishQuery {
    /// Payload to publish; an empty string is a valid payload
    pub message: Option<String>,
}
