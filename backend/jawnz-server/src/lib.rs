pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod service;

#[cfg(test)]
mod tests;

pub use api::{
    alert_headers::AlertHeaders,
    comment_entities::comment_entities::{
        create_comment_entity, delete_comment_entity, get_all_comment_entities,
        get_comment_entity, partial_update_comment_entity, search_comment_entities,
        update_comment_entity,
    },
    error::ApiError,
    error::Result as ApiResult,
    jawnzback_kafka::{
        jawnzback_kafka::{consume, publish},
        publish_query::PublishQuery,
    },
    pagination::{PageParams, pagination_headers},
};
pub use app_state::AppState;
pub use service::comment_entity_service::CommentEntityService;

pub use crate::routes::build_router;
