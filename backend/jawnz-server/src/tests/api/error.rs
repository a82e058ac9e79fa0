use crate::ApiError;
use crate::api::error::ErrorAlertKey;

use jawnz_bridge::BridgeError;
use jawnz_core::CoreError;
use jawnz_db::DbError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

#[tokio::test]
async fn test_not_found_returns_404_without_alert_key() {
    let error = ApiError::not_found("CommentEntity abc not found");
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(response.extensions().get::<ErrorAlertKey>().is_none());

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "CommentEntity abc not found");
}

#[tokio::test]
async fn test_bad_request_carries_alert_key() {
    let error = ApiError::bad_request("A new commentEntity cannot already have an ID", "idexists");
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.extensions().get::<ErrorAlertKey>().copied(),
        Some(ErrorAlertKey("idexists"))
    );

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::Validation {
        message: "content must not be null".into(),
        field: Some("content".into()),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.extensions().get::<ErrorAlertKey>().copied(),
        Some(ErrorAlertKey("validation"))
    );

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "content");
}

#[tokio::test]
async fn test_unsupported_media_type_returns_415_without_alert_key() {
    let error = ApiError::UnsupportedMediaType {
        message: "Expected request with `Content-Type: application/json`".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    assert_eq!(error.alert_key(), None);

    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert!(response.extensions().get::<ErrorAlertKey>().is_none());

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "UNSUPPORTED_MEDIA_TYPE");
}

#[tokio::test]
async fn test_service_unavailable_returns_503() {
    let error = ApiError::ServiceUnavailable {
        message: "Message broker unavailable".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "SERVICE_UNAVAILABLE");
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let error = ApiError::Internal {
        message: "Database operation failed".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
}

#[test]
fn test_core_validation_converts_to_validation() {
    let core = CoreError::Validation {
        message: "content length must be between 1 and 200, got 0".into(),
        field: Some("content".into()),
        location: ErrorLocation::from(Location::caller()),
    };

    let error = ApiError::from(core);

    assert!(matches!(error, ApiError::Validation { ref field, .. } if field.as_deref() == Some("content")));
}

#[test]
fn test_invalid_content_type_converts_to_bad_request() {
    let core = CoreError::InvalidContentType {
        value: "application/xml".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let error = ApiError::from(core);

    assert_eq!(error.alert_key(), Some("contenttype"));
}

#[test]
fn test_row_not_found_converts_to_not_found() {
    let db = DbError::from(sqlx::Error::RowNotFound);

    let error = ApiError::from(db);

    assert!(matches!(error, ApiError::NotFound { .. }));
}

#[test]
fn test_other_database_errors_hide_details() {
    let db = DbError::Initialization {
        message: "pool exhausted".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let error = ApiError::from(db);

    assert!(matches!(error, ApiError::Internal { .. }));
    assert_eq!(error.alert_key(), None);
}

#[test]
fn test_broker_unavailable_converts_to_service_unavailable() {
    let bridge = BridgeError::BrokerUnavailable {
        destination: "jawnzback-sse".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let error = ApiError::from(bridge);

    match error {
        ApiError::ServiceUnavailable { message, .. } => assert!(message.contains("jawnzback-sse")),
        other => panic!("expected ServiceUnavailable, got {:?}", other),
    }
}
