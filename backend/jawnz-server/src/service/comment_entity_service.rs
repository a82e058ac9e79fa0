//! Service layer for comment entities: thin delegation to the repository.

use jawnz_core::{CommentEntity, CommentEntityPayload};
use jawnz_db::{CommentEntityRepository, Page, PageRequest, Result as DbErrorResult};

use log::debug;
use thiserror::Error;

/// Failure of a partial update: either the patch is invalid or storage failed
#[derive(Debug, Error)]
pub enum PartialUpdateError {
    #[error(transparent)]
    Invalid(#[from] jawnz_core::CoreError),

    #[error(transparent)]
    Storage(#[from] jawnz_db::DbError),
}

pub struct CommentEntityService {
    repository: CommentEntityRepository,
}

impl CommentEntityService {
    pub fn new(pool: sqlx::SqlitePool) -> Self {
        Self {
            repository: CommentEntityRepository::new(pool),
        }
    }

    /// Insert a new entity; the store assigns its id
    pub async fn save(&self, entity: &CommentEntity) -> DbErrorResult<CommentEntity> {
        debug!("Request to save CommentEntity : {:?}", entity);
        self.repository.insert(entity).await
    }

    /// Replace an existing entity
    pub async fn update(&self, entity: &CommentEntity) -> DbErrorResult<CommentEntity> {
        debug!("Request to update CommentEntity : {:?}", entity);
        self.repository.save(entity).await
    }

    /// Apply the present fields of `patch` to the stored entity `id`.
    /// `Ok(None)` when there is no such entity.
    pub async fn partial_update(
        &self,
        id: &str,
        patch: CommentEntityPayload,
    ) -> Result<Option<CommentEntity>, PartialUpdateError> {
        debug!("Request to partially update CommentEntity {} : {:?}", id, patch);

        let Some(mut existing) = self.repository.find_by_id(id).await? else {
            return Ok(None);
        };
        patch.merge_into(&mut existing)?;

        Ok(Some(self.repository.save(&existing).await?))
    }

    pub async fn find_all(&self, page: &PageRequest) -> DbErrorResult<Page<CommentEntity>> {
        debug!("Request to get all CommentEntities");
        let content = self.repository.find_all_by(page).await?;
        let total = self.count_all().await?;
        Ok(Page::new(content, page, total))
    }

    pub async fn count_all(&self) -> DbErrorResult<i64> {
        self.repository.count().await
    }

    pub async fn find_one(&self, id: &str) -> DbErrorResult<Option<CommentEntity>> {
        debug!("Request to get CommentEntity : {}", id);
        self.repository.find_by_id(id).await
    }

    pub async fn exists(&self, id: &str) -> DbErrorResult<bool> {
        self.repository.exists_by_id(id).await
    }

    /// Idempotent
    pub async fn delete(&self, id: &str) -> DbErrorResult<()> {
        debug!("Request to delete CommentEntity : {}", id);
        self.repository.delete_by_id(id).await?;
        Ok(())
    }

    pub async fn search(
        &self,
        query: &str,
        page: &PageRequest,
    ) -> DbErrorResult<Page<CommentEntity>> {
        debug!("Request to search for a page of CommentEntities for query {}", query);
        let content = self.repository.search(query, page).await?;
        let total = self.count_search(query).await?;
        Ok(Page::new(content, page, total))
    }

    pub async fn count_search(&self, query: &str) -> DbErrorResult<i64> {
        self.repository.count_search(query).await
    }
}
