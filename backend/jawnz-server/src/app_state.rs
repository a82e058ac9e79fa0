use crate::AlertHeaders;

use jawnz_bridge::{BroadcastBuffer, MessageChannel, Metrics, ShutdownCoordinator};
use jawnz_config::{ApiConfig, BridgeConfig};
use jawnz_core::ENTITY_NAME;

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared application state, built once by the composition root
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub buffer: BroadcastBuffer,
    /// Producer binding the publish endpoint sends through
    pub outbound: Arc<dyn MessageChannel>,
    pub metrics: Metrics,
    pub shutdown: ShutdownCoordinator,
    pub bridge_config: BridgeConfig,
    pub api_config: ApiConfig,
}

impl AppState {
    pub fn comment_entity_alerts(&self) -> AlertHeaders {
        AlertHeaders::new(self.api_config.application_name.clone(), ENTITY_NAME)
    }
}
