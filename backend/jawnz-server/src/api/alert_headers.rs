use crate::api::error::ErrorAlertKey;
use crate::AppState;

use axum::{
    extract::State,
    http::{HeaderMap, HeaderName, HeaderValue},
    response::Response,
};
use log::warn;

/// Builds the `X-{app}-alert`, `X-{app}-params` and `X-{app}-error`
/// notification headers for one entity type.
#[derive(Debug, Clone)]
pub struct AlertHeaders {
    application_name: String,
    entity_name: &'static str,
}

impl AlertHeaders {
    pub fn new(application_name: impl Into<String>, entity_name: &'static str) -> Self {
        Self {
            application_name: application_name.into(),
            entity_name,
        }
    }

    pub fn created(&self, id: &str) -> HeaderMap {
        self.success("created", id)
    }

    pub fn updated(&self, id: &str) -> HeaderMap {
        self.success("updated", id)
    }

    pub fn deleted(&self, id: &str) -> HeaderMap {
        self.success("deleted", id)
    }

    /// `X-{app}-error: error.{key}` plus the entity name as params
    pub fn failure(&self, error_key: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        self.insert(&mut headers, "error", format!("error.{}", error_key));
        self.insert(&mut headers, "params", self.entity_name.to_string());
        headers
    }

    fn success(&self, action: &str, id: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        self.insert(
            &mut headers,
            "alert",
            format!("{}.{}.{}", self.application_name, self.entity_name, action),
        );
        self.insert(&mut headers, "params", id.to_string());
        headers
    }

    fn insert(&self, headers: &mut HeaderMap, suffix: &str, value: String) {
        let name = format!("X-{}-{}", self.application_name, suffix);
        match (HeaderName::try_from(name), HeaderValue::try_from(value)) {
            (Ok(name), Ok(value)) => {
                headers.insert(name, value);
            }
            _ => warn!("Skipping alert header '{}' with unencodable value", suffix),
        }
    }
}

/// Response mapper for entity routes: adds failure alert headers to any
/// error response that carries an alert key.
pub async fn entity_failure_alert(State(state): State<AppState>, mut response: Response) -> Response {
    if let Some(ErrorAlertKey(key)) = response.extensions().get::<ErrorAlertKey>().copied() {
        let headers = state.comment_entity_alerts().failure(key);
        response.headers_mut().extend(headers);
    }
    response
}
