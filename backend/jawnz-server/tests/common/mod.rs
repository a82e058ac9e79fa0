#![allow(dead_code)]

//! Test infrastructure for jawnz-server API tests

use jawnz_bridge::{
    BroadcastBuffer, BroadcastConfig, InMemoryBinder, InboundListener, MessageChannel, Metrics,
    ShutdownCoordinator,
};
use jawnz_config::{ApiConfig, BridgeConfig, DEFAULT_DESTINATION};
use jawnz_core::{BridgeMessage, CommentEntity};
use jawnz_db::CommentEntityRepository;
use jawnz_server::AppState;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    body::{Body, Bytes},
    http::{Request, Response},
};
use chrono::{DateTime, Utc};
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use tokio::task::JoinHandle;

pub const APP_HEADER_ALERT: &str = "x-jawnzbackapp-alert";
pub const APP_HEADER_ERROR: &str = "x-jawnzbackapp-error";
pub const APP_HEADER_PARAMS: &str = "x-jawnzbackapp-params";

/// Server state plus the broker it is bound to
pub struct TestApp {
    pub state: AppState,
    pub binder: InMemoryBinder,
    pub listener: JoinHandle<u64>,
}

impl TestApp {
    pub fn router(&self) -> Router {
        jawnz_server::build_router(self.state.clone())
    }

    /// Deliver a record to the inbound destination, as the broker would
    pub async fn deliver_inbound(&self, payload: &str) {
        self.binder
            .output(DEFAULT_DESTINATION)
            .send(BridgeMessage::text(payload))
            .await
            .expect("Failed to deliver inbound message");
    }
}

/// Create a test pool with in-memory SQLite.
/// A single connection keeps every query on the same in-memory database.
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect(":memory:")
        .await
        .expect("Failed to create test database");

    jawnz_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create the full application wiring for testing
pub async fn create_test_app() -> TestApp {
    let pool = create_test_pool().await;
    let metrics = Metrics::new();
    let shutdown = ShutdownCoordinator::new();
    let bridge_config = BridgeConfig::default();
    let buffer = BroadcastBuffer::new(BroadcastConfig::from(&bridge_config), metrics.clone());

    let binder = InMemoryBinder::new();
    let outbound: Arc<dyn MessageChannel> = Arc::new(binder.output(DEFAULT_DESTINATION));
    let listener = InboundListener::new(
        binder.input(DEFAULT_DESTINATION),
        buffer.clone(),
        metrics.clone(),
        &shutdown,
    )
    .spawn();

    let state = AppState {
        pool,
        buffer,
        outbound,
        metrics,
        shutdown,
        bridge_config,
        api_config: ApiConfig::default(),
    };

    TestApp {
        state,
        binder,
        listener,
    }
}

pub fn default_created_at() -> DateTime<Utc> {
    DateTime::from_timestamp_millis(0).expect("epoch is representable")
}

/// Insert an entity directly through the repository
pub async fn insert_entity(pool: &SqlitePool, user_id: &str, content: &str) -> CommentEntity {
    let entity = CommentEntity::new(user_id, "AAAAAAAAAA", content, default_created_at());
    CommentEntityRepository::new(pool.clone())
        .insert(&entity)
        .await
        .expect("Failed to insert test entity")
}

pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

/// Next data frame of a streaming body, failing after `timeout`
pub async fn next_frame(body: &mut Body, timeout: Duration) -> Option<Bytes> {
    loop {
        let frame = tokio::time::timeout(timeout, body.frame())
            .await
            .expect("Timed out waiting for body frame")?
            .expect("Body stream failed");
        if let Ok(data) = frame.into_data() {
            return Some(data);
        }
    }
}
