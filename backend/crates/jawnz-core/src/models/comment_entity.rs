use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Entity name used in alert headers and error keys
pub const ENTITY_NAME: &str = "jawnzbackCommentEntity";

pub const CONTENT_MIN_LENGTH: usize = 1;
pub const CONTENT_MAX_LENGTH: usize = 200;

/// A comment document. The identifier is assigned by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentEntity {
    pub id: Option<String>,
    pub user_id: String,
    pub user_name: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl CommentEntity {
    pub fn new(
        user_id: impl Into<String>,
        user_name: impl Into<String>,
        content: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: None,
            user_id: user_id.into(),
            user_name: user_name.into(),
            content: content.into(),
            created_at: truncate_to_millis(created_at),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Check field constraints that the type system cannot express
    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        validate_content(&self.content)
    }
}

/// Identity equality: entities without an id are never equal
impl PartialEq for CommentEntity {
    fn eq(&self, other: &Self) -> bool {
        match (&self.id, &other.id) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

#[track_caller]
pub(crate) fn validate_content(content: &str) -> CoreErrorResult<()> {
    // Measured in UTF-16 code units, so a character outside the BMP counts twice
    let length = content.encode_utf16().count();
    if !(CONTENT_MIN_LENGTH..=CONTENT_MAX_LENGTH).contains(&length) {
        return Err(CoreError::Validation {
            message: format!(
                "content length must be between {} and {}, got {}",
                CONTENT_MIN_LENGTH, CONTENT_MAX_LENGTH, length
            ),
            field: Some("content".into()),
            location: ErrorLocation::from(Location::caller()),
        });
    }
    Ok(())
}

/// The store keeps millisecond precision
pub(crate) fn truncate_to_millis(instant: DateTime<Utc>) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(instant.timestamp_millis()).unwrap_or(instant)
}
