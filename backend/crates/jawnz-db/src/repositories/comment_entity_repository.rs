use crate::{DbError, PageRequest, Result as DbErrorResult};

use jawnz_core::CommentEntity;

use std::panic::Location;

use chrono::DateTime;
use error_location::ErrorLocation;
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

const TABLE: &str = "comment_entity";

const SEARCH_FILTER: &str = r#"
    user_id_folded LIKE ?1 ESCAPE '\'
    OR user_name_folded LIKE ?1 ESCAPE '\'
    OR content_folded LIKE ?1 ESCAPE '\'
"#;

#[derive(FromRow)]
struct CommentEntityRow {
    id: String,
    user_id: String,
    user_name: String,
    content: String,
    created_at: i64,
}

impl TryFrom<CommentEntityRow> for CommentEntity {
    type Error = DbError;

    #[track_caller]
    fn try_from(row: CommentEntityRow) -> Result<Self, Self::Error> {
        let created_at =
            DateTime::from_timestamp_millis(row.created_at).ok_or_else(|| DbError::Decode {
                table: TABLE,
                message: format!("created_at out of range: {}", row.created_at),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(CommentEntity {
            id: Some(row.id),
            user_id: row.user_id,
            user_name: row.user_name,
            content: row.content,
            created_at,
        })
    }
}

/// Document-style store for comment entities.
pub struct CommentEntityRepository {
    pool: SqlitePool,
}

impl CommentEntityRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new document. An id is generated when the entity has none.
    pub async fn insert(&self, entity: &CommentEntity) -> DbErrorResult<CommentEntity> {
        let stored = Self::with_assigned_id(entity);
        let id = stored.id.as_deref().unwrap_or_default();
        let created_at = stored.created_at.timestamp_millis();

        sqlx::query(
            r#"
              INSERT INTO comment_entity (
                  id, user_id, user_name, content, created_at,
                  user_id_folded, user_name_folded, content_folded
              )
              VALUES (?, ?, ?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(id)
        .bind(&stored.user_id)
        .bind(&stored.user_name)
        .bind(&stored.content)
        .bind(created_at)
        .bind(fold_case(&stored.user_id))
        .bind(fold_case(&stored.user_name))
        .bind(fold_case(&stored.content))
        .execute(&self.pool)
        .await?;

        Ok(stored)
    }

    /// Insert or replace by id. Replacing keeps the original insertion position.
    pub async fn save(&self, entity: &CommentEntity) -> DbErrorResult<CommentEntity> {
        let stored = Self::with_assigned_id(entity);
        let id = stored.id.as_deref().unwrap_or_default();
        let created_at = stored.created_at.timestamp_millis();

        sqlx::query(
            r#"
              INSERT INTO comment_entity (
                  id, user_id, user_name, content, created_at,
                  user_id_folded, user_name_folded, content_folded
              )
              VALUES (?, ?, ?, ?, ?, ?, ?, ?)
              ON CONFLICT(id) DO UPDATE SET
                  user_id = excluded.user_id,
                  user_name = excluded.user_name,
                  content = excluded.content,
                  created_at = excluded.created_at,
                  user_id_folded = excluded.user_id_folded,
                  user_name_folded = excluded.user_name_folded,
                  content_folded = excluded.content_folded
              "#,
        )
        .bind(id)
        .bind(&stored.user_id)
        .bind(&stored.user_name)
        .bind(&stored.content)
        .bind(created_at)
        .bind(fold_case(&stored.user_id))
        .bind(fold_case(&stored.user_name))
        .bind(fold_case(&stored.content))
        .execute(&self.pool)
        .await?;

        Ok(stored)
    }

    pub async fn find_by_id(&self, id: &str) -> DbErrorResult<Option<CommentEntity>> {
        let row = sqlx::query_as::<_, CommentEntityRow>(
            r#"
              SELECT id, user_id, user_name, content, created_at
              FROM comment_entity
              WHERE id = ?
              "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(CommentEntity::try_from).transpose()
    }

    pub async fn exists_by_id(&self, id: &str) -> DbErrorResult<bool> {
        let exists: i64 =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM comment_entity WHERE id = ?)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists != 0)
    }

    pub async fn find_all_by(&self, page: &PageRequest) -> DbErrorResult<Vec<CommentEntity>> {
        let sql = format!(
            r#"
              SELECT id, user_id, user_name, content, created_at
              FROM comment_entity
              ORDER BY {}
              LIMIT ? OFFSET ?
              "#,
            page.order_by()
        );

        let rows = sqlx::query_as::<_, CommentEntityRow>(&sql)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(CommentEntity::try_from).collect()
    }

    pub async fn count(&self) -> DbErrorResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM comment_entity")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Returns whether a document was removed.
    pub async fn delete_by_id(&self, id: &str) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM comment_entity WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn delete_all(&self) -> DbErrorResult<u64> {
        let result = sqlx::query("DELETE FROM comment_entity")
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Case-insensitive substring match on user id, user name and content.
    pub async fn search(
        &self,
        query: &str,
        page: &PageRequest,
    ) -> DbErrorResult<Vec<CommentEntity>> {
        let sql = format!(
            r#"
              SELECT id, user_id, user_name, content, created_at
              FROM comment_entity
              WHERE {}
              ORDER BY {}
              LIMIT ?2 OFFSET ?3
              "#,
            SEARCH_FILTER,
            page.order_by()
        );

        let rows = sqlx::query_as::<_, CommentEntityRow>(&sql)
            .bind(like_pattern(query))
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(CommentEntity::try_from).collect()
    }

    pub async fn count_search(&self, query: &str) -> DbErrorResult<i64> {
        let sql = format!("SELECT COUNT(*) FROM comment_entity WHERE {}", SEARCH_FILTER);

        let count: i64 = sqlx::query_scalar(&sql)
            .bind(like_pattern(query))
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    fn with_assigned_id(entity: &CommentEntity) -> CommentEntity {
        let mut stored = entity.clone();
        if stored.id.is_none() {
            stored.id = Some(Uuid::new_v4().to_string());
        }
        stored
    }
}

/// Case folding shared by the stored search columns and the search pattern.
pub(crate) fn fold_case(text: &str) -> String {
    text.to_lowercase()
}

/// `%query%`, case-folded, with LIKE wildcards escaped
pub(crate) fn like_pattern(query: &str) -> String {
    let mut pattern = String::with_capacity(query.len() + 2);
    pattern.push('%');
    for c in fold_case(query).chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
