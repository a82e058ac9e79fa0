//! Comment entity REST API handlers

use crate::{ApiError, ApiResult, AppState, CommentEntityService, PageParams, pagination_headers};

use jawnz_core::{CommentEntity, CommentEntityPayload};

use axum::{
    Json,
    extract::{OriginalUri, Path, State, rejection::JsonRejection},
    http::{StatusCode, header::LOCATION},
    response::{IntoResponse, Response},
};
use log::{debug, info};

const BASE_PATH: &str = "/api/comment-entities";

/// POST /api/comment-entities
pub async fn create_comment_entity(
    State(state): State<AppState>,
    payload: Result<Json<CommentEntityPayload>, JsonRejection>,
) -> ApiResult<Response> {
    let Json(payload) = payload?;
    debug!("REST request to save CommentEntity : {:?}", payload);

    let entity = payload.into_entity()?;
    if entity.id.is_some() {
        return Err(ApiError::bad_request(
            "A new commentEntity cannot already have an ID",
            "idexists",
        ));
    }

    let service = CommentEntityService::new(state.pool.clone());
    let saved = service.save(&entity).await?;
    let id = saved.id.clone().unwrap_or_default();

    info!("Created comment entity {} via REST API", id);

    let mut headers = state.comment_entity_alerts().created(&id);
    if let Ok(location) = format!("{}/{}", BASE_PATH, id).parse() {
        headers.insert(LOCATION, location);
    }

    Ok((StatusCode::CREATED, headers, Json(saved)).into_response())
}

/// PUT /api/comment-entities/{id}
pub async fn update_comment_entity(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<CommentEntityPayload>, JsonRejection>,
) -> ApiResult<Response> {
    let Json(payload) = payload?;
    debug!("REST request to update CommentEntity : {}, {:?}", id, payload);

    let entity = payload.into_entity()?;
    let service = CommentEntityService::new(state.pool.clone());
    check_target(&service, &id, entity.id.as_deref()).await?;

    let saved = service.update(&entity).await?;

    info!("Updated comment entity {} via REST API", id);

    let headers = state.comment_entity_alerts().updated(&id);
    Ok((StatusCode::OK, headers, Json(saved)).into_response())
}

/// PATCH /api/comment-entities/{id}
///
/// Accepts `application/json` and `application/merge-patch+json`. Absent or
/// null fields keep their stored values.
pub async fn partial_update_comment_entity(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<CommentEntityPayload>, JsonRejection>,
) -> ApiResult<Response> {
    let Json(payload) = payload?;
    debug!(
        "REST request to partial update CommentEntity partially : {}, {:?}",
        id, payload
    );

    let service = CommentEntityService::new(state.pool.clone());
    check_target(&service, &id, payload.id.as_deref()).await?;

    let saved = service
        .partial_update(&id, payload)
        .await?
        .ok_or_else(|| ApiError::bad_request("Entity not found", "idnotfound"))?;

    info!("Partially updated comment entity {} via REST API", id);

    let headers = state.comment_entity_alerts().updated(&id);
    Ok((StatusCode::OK, headers, Json(saved)).into_response())
}

/// GET /api/comment-entities?page=&size=&sort=
pub async fn get_all_comment_entities(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
) -> ApiResult<Response> {
    let page_request = PageParams::from_uri(&uri)?.page_request(&state.api_config)?;
    debug!("REST request to get a page of CommentEntities: {:?}", page_request);

    let service = CommentEntityService::new(state.pool.clone());
    let page = service.find_all(&page_request).await?;

    let headers = pagination_headers(&uri, &page);
    Ok((StatusCode::OK, headers, Json(page.content)).into_response())
}

/// GET /api/comment-entities/{id}
pub async fn get_comment_entity(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<CommentEntity>> {
    debug!("REST request to get CommentEntity : {}", id);

    let service = CommentEntityService::new(state.pool.clone());
    let entity = service
        .find_one(&id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("CommentEntity {} not found", id)))?;

    Ok(Json(entity))
}

/// DELETE /api/comment-entities/{id}
pub async fn delete_comment_entity(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Response> {
    debug!("REST request to delete CommentEntity : {}", id);

    let service = CommentEntityService::new(state.pool.clone());
    service.delete(&id).await?;

    info!("Deleted comment entity {} via REST API", id);

    let headers = state.comment_entity_alerts().deleted(&id);
    Ok((StatusCode::NO_CONTENT, headers).into_response())
}

/// GET /api/_search/comment-entities?query=&page=&size=&sort=
pub async fn search_comment_entities(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
) -> ApiResult<Response> {
    let params = PageParams::from_uri(&uri)?;
    let query = params.get("query").ok_or_else(|| {
        ApiError::bad_request("Required parameter 'query' is not present", "querymissing")
    })?;
    let page_request = params.page_request(&state.api_config)?;
    debug!(
        "REST request to search for a page of CommentEntities for query {}",
        query
    );

    let service = CommentEntityService::new(state.pool.clone());
    let page = service.search(query, &page_request).await?;

    let headers = pagination_headers(&uri, &page);
    Ok((StatusCode::OK, headers, Json(page.content)).into_response())
}

/// Body id must be present, match the path, and name a stored entity
async fn check_target(
    service: &CommentEntityService,
    path_id: &str,
    body_id: Option<&str>,
) -> ApiResult<()> {
    let Some(body_id) = body_id else {
        return Err(ApiError::bad_request("Invalid id", "idnull"));
    };
    if body_id != path_id {
        return Err(ApiError::bad_request("Invalid ID", "idinvalid"));
    }
    if !service.exists(path_id).await? {
        return Err(ApiError::bad_request("Entity not found", "idnotfound"));
    }
    Ok(())
}
