use crate::models::comment_entity::{truncate_to_millis, validate_content};
use crate::{CommentEntity, CoreError, Result as CoreErrorResult};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Request body for create, update and partial update.
///
/// Every field is optional on the wire; `into_entity` enforces the
/// required ones, `merge_into` only applies those present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentEntityPayload {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl CommentEntityPayload {
    /// Build a complete entity, failing on the first missing field
    #[track_caller]
    pub fn into_entity(self) -> CoreErrorResult<CommentEntity> {
        let user_id = required(self.user_id, "userId")?;
        let user_name = required(self.user_name, "userName")?;
        let content = required(self.content, "content")?;
        let created_at = required(self.created_at, "createdAt")?;

        let entity = CommentEntity {
            id: self.id,
            user_id,
            user_name,
            content,
            created_at: truncate_to_millis(created_at),
        };
        entity.validate()?;

        Ok(entity)
    }

    /// Overwrite the fields of `existing` that are present in this payload.
    /// The identifier is never changed.
    #[track_caller]
    pub fn merge_into(self, existing: &mut CommentEntity) -> CoreErrorResult<()> {
        if let Some(ref content) = self.content {
            validate_content(content)?;
        }

        if let Some(user_id) = self.user_id {
            existing.user_id = user_id;
        }
        if let Some(user_name) = self.user_name {
            existing.user_name = user_name;
        }
        if let Some(content) = self.content {
            existing.content = content;
        }
        if let Some(created_at) = self.created_at {
            existing.created_at = truncate_to_millis(created_at);
        }

        Ok(())
    }
}

impl From<CommentEntity> for CommentEntityPayload {
    fn from(entity: CommentEntity) -> Self {
        Self {
            id: entity.id,
            user_id: Some(entity.user_id),
            user_name: Some(entity.user_name),
            content: Some(entity.content),
            created_at: Some(entity.created_at),
        }
    }
}

#[track_caller]
fn required<T>(value: Option<T>, field: &str) -> CoreErrorResult<T> {
    value.ok_or_else(|| CoreError::Validation {
        message: format!("{} must not be null", field),
        field: Some(field.to_string()),
        location: ErrorLocation::from(Location::caller()),
    })
}
