//! Publish/consume bridge between HTTP and the message broker

use crate::{ApiError, ApiResult, AppState, PublishQuery};

use jawnz_core::BridgeMessage;

use std::convert::Infallible;
use std::time::Duration;

use axum::{
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::sse::{Event, KeepAlive, Sse},
};
use futures::{Stream, StreamExt};
use log::{debug, info};

/// POST /api/jawnzback-kafka/publish?message=...
///
/// Sends the message as `text/plain` to the output destination.
/// 204 on success, 503 when the broker rejects it.
pub async fn publish(
    State(state): State<AppState>,
    query: Result<Query<PublishQuery>, QueryRejection>,
) -> ApiResult<StatusCode> {
    let Query(query) = query
        .map_err(|e| ApiError::bad_request(e.body_text(), "queryinvalid"))?;
    let message = query.message.ok_or_else(|| {
        ApiError::bad_request("Required parameter 'message' is not present", "messagemissing")
    })?;

    debug!("REST request to send to Kafka topic the message : {}", message);

    match state.outbound.send(BridgeMessage::text(message)).await {
        Ok(()) => {
            state.metrics.outbound_sent();
            Ok(StatusCode::NO_CONTENT)
        }
        Err(e) => {
            state.metrics.outbound_failed(e.error_code());
            Err(e.into())
        }
    }
}

/// GET /api/jawnzback-kafka/consume
///
/// Server-sent event stream of every message received after the request
/// arrived, one `data:` event per message. The stream ends when the server
/// shuts down; the client disconnecting detaches the subscriber.
pub async fn consume(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let subscription = state.buffer.subscribe();

    info!(
        "Consume stream {} opened ({} active)",
        subscription.id(),
        state.buffer.subscriber_count()
    );

    let stream = subscription
        .into_stream()
        .map(|message| Ok::<_, Infallible>(message_event(&message.payload)));

    Sse::new(stream).keep_alive(
        KeepAlive::new().interval(Duration::from_secs(state.bridge_config.keep_alive_secs)),
    )
}

/// One `data:` event; multi-line payloads become several `data:` lines
fn message_event(payload: &str) -> Event {
    let normalized = payload.replace("\r\n", "\n").replace('\r', "\n");
    Event::default().data(normalized)
}
