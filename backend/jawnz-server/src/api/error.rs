//! REST API error types
//!
//! These errors are designed to produce consistent JSON responses
//! with appropriate HTTP status codes.

use crate::service::comment_entity_service::PartialUpdateError;

use jawnz_bridge::BridgeError;
use jawnz_core::CoreError;
use jawnz_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional field
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "NOT_FOUND", "VALIDATION_ERROR")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Field name if this is a validation error for a specific field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// Alert key of a failed request, attached to the response as an extension.
/// Entity routes turn it into `X-{app}-error: error.{key}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorAlertKey(pub &'static str);

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Validation error (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Bad request (400), with the alert key clients branch on (e.g. "idexists")
    #[error("Bad request: {message} ({error_key}) {location}")]
    BadRequest {
        message: String,
        error_key: &'static str,
        location: ErrorLocation,
    },

    /// Request body is not JSON (415)
    #[error("Unsupported media type: {message} {location}")]
    UnsupportedMediaType {
        message: String,
        location: ErrorLocation,
    },

    /// Downstream dependency unavailable (503)
    #[error("Service unavailable: {message} {location}")]
    ServiceUnavailable {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn bad_request(message: impl Into<String>, error_key: &'static str) -> Self {
        ApiError::BadRequest {
            message: message.into(),
            error_key,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Key for the failure alert header, if this error carries one
    pub fn alert_key(&self) -> Option<&'static str> {
        match self {
            ApiError::Validation { .. } => Some("validation"),
            ApiError::BadRequest { error_key, .. } => Some(*error_key),
            _ => None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let alert_key = self.alert_key();

        // Client mistakes are not server failures
        match self {
            ApiError::Internal { .. } | ApiError::ServiceUnavailable { .. } => {
                log::error!("{}", self)
            }
            _ => log::warn!("{}", self),
        }

        let (status, body) = match self {
            ApiError::NotFound { message, .. } => (
                StatusCode::NOT_FOUND,
                ApiErrorBody {
                    code: "NOT_FOUND".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::Validation { message, field, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "VALIDATION_ERROR".into(),
                    message,
                    field,
                },
            ),
            ApiError::BadRequest { message, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "BAD_REQUEST".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::UnsupportedMediaType { message, .. } => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                ApiErrorBody {
                    code: "UNSUPPORTED_MEDIA_TYPE".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::ServiceUnavailable { message, .. } => (
                StatusCode::SERVICE_UNAVAILABLE,
                ApiErrorBody {
                    code: "SERVICE_UNAVAILABLE".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::Internal { message, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorBody {
                    code: "INTERNAL_ERROR".into(),
                    message,
                    field: None,
                },
            ),
        };

        let mut response = (status, Json(ApiErrorResponse { error: body })).into_response();
        if let Some(key) = alert_key {
            response.extensions_mut().insert(ErrorAlertKey(key));
        }
        response
    }
}

/// Convert domain validation errors to API errors
impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::Validation { message, field, .. } => ApiError::Validation {
                message,
                field,
                location: ErrorLocation::from(Location::caller()),
            },
            CoreError::InvalidContentType { value, .. } => ApiError::BadRequest {
                message: format!("Unsupported content type: {}", value),
                error_key: "contenttype",
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

/// Convert database errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        // Don't expose internal database details to clients
        log::error!("Database error: {}", e);

        match e {
            DbError::Sqlx {
                source: sqlx::Error::RowNotFound,
                ..
            } => ApiError::NotFound {
                message: "Resource not found".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            DbError::Sqlx { .. } | DbError::Decode { .. } => ApiError::Internal {
                message: "Database operation failed".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            DbError::Migration { source, .. } => ApiError::Internal {
                message: format!("Database migration error: {}", source),
                location: ErrorLocation::from(Location::caller()),
            },
            DbError::Initialization { message, .. } => ApiError::Internal {
                message: format!("Database initialization error: {}", message),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

/// Convert bridge errors to API errors
impl From<BridgeError> for ApiError {
    #[track_caller]
    fn from(e: BridgeError) -> Self {
        match e {
            BridgeError::BrokerUnavailable { destination, .. } => ApiError::ServiceUnavailable {
                message: format!("Message broker unavailable for '{}'", destination),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

impl From<PartialUpdateError> for ApiError {
    #[track_caller]
    fn from(e: PartialUpdateError) -> Self {
        match e {
            PartialUpdateError::Invalid(e) => ApiError::from(e),
            PartialUpdateError::Storage(e) => ApiError::from(e),
        }
    }
}

/// Malformed or mistyped request bodies. A body that is not declared as
/// JSON (`application/json` or `application/*+json`) is a 415.
impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(rejection: JsonRejection) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match rejection {
            JsonRejection::MissingJsonContentType(e) => ApiError::UnsupportedMediaType {
                message: e.body_text(),
                location,
            },
            other => ApiError::BadRequest {
                message: other.body_text(),
                error_key: "bodyinvalid",
                location,
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
