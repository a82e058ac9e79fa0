use crate::api::alert_headers::entity_failure_alert;
use crate::{
    AppState, consume, create_comment_entity, delete_comment_entity, get_all_comment_entities,
    get_comment_entity, health, partial_update_comment_entity, publish, search_comment_entities,
    update_comment_entity,
};

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    // Entity endpoints report failures through alert headers
    let entity_routes = Router::new()
        .route(
            "/api/comment-entities",
            get(get_all_comment_entities).post(create_comment_entity),
        )
        .route(
            "/api/comment-entities/{id}",
            get(get_comment_entity)
                .put(update_comment_entity)
                .patch(partial_update_comment_entity)
                .delete(delete_comment_entity),
        )
        .route("/api/_search/comment-entities", get(search_comment_entities))
        .layer(middleware::map_response_with_state(
            state.clone(),
            entity_failure_alert,
        ));

    Router::new()
        .merge(entity_routes)
        // Broker bridge
        .route("/api/jawnzback-kafka/publish", post(publish))
        .route("/api/jawnzback-kafka/consume", get(consume))
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
