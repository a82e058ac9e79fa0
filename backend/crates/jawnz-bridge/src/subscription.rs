use crate::{Metrics, SubscriberId, SubscriberRegistry, create_subscriber_span};

use jawnz_core::BridgeMessage;

use futures::Stream;
use tokio::sync::broadcast::{self, error::RecvError};
use tracing::{Instrument, Span, debug, warn};

/// One subscriber's view of the broadcast buffer.
///
/// Yields every message published after it was created, in publish order.
/// Dropping it detaches the subscriber immediately.
pub struct Subscription {
    id: SubscriberId,
    receiver: Option<broadcast::Receiver<BridgeMessage>>,
    _registration: Option<Registration>,
    metrics: Metrics,
    span: Span,
}

/// Removes the subscriber from the registry when dropped
struct Registration {
    id: SubscriberId,
    registry: SubscriberRegistry,
    metrics: Metrics,
}

impl Drop for Registration {
    fn drop(&mut self) {
        if self.registry.unregister(self.id) {
            self.metrics.subscriber_detached();
        }
    }
}

impl Subscription {
    pub(crate) fn attached(
        id: SubscriberId,
        receiver: broadcast::Receiver<BridgeMessage>,
        registry: SubscriberRegistry,
        metrics: Metrics,
    ) -> Self {
        registry.register(id);
        metrics.subscriber_attached();

        Self {
            id,
            receiver: Some(receiver),
            _registration: Some(Registration {
                id,
                registry,
                metrics: metrics.clone(),
            }),
            metrics,
            span: create_subscriber_span(id),
        }
    }

    /// A subscription on a closed buffer: ends immediately
    pub(crate) fn terminated(id: SubscriberId, metrics: Metrics) -> Self {
        Self {
            id,
            receiver: None,
            _registration: None,
            metrics,
            span: create_subscriber_span(id),
        }
    }

    pub fn id(&self) -> SubscriberId {
        self.id
    }

    pub fn is_terminated(&self) -> bool {
        self.receiver.is_none()
    }

    /// Next message, or `None` once the buffer is closed and drained.
    ///
    /// A subscriber that fell more than the channel capacity behind skips the
    /// oldest messages and resumes from the oldest one still retained.
    pub async fn recv(&mut self) -> Option<BridgeMessage> {
        loop {
            let result = match self.receiver.as_mut() {
                Some(receiver) => receiver.recv().await,
                None => return None,
            };

            match result {
                Ok(message) => return Some(message),
                Err(RecvError::Lagged(skipped)) => {
                    warn!("Subscriber {} lagged, skipped {} messages", self.id, skipped);
                    self.metrics.subscriber_lagged(skipped);
                }
                Err(RecvError::Closed) => {
                    debug!("Broadcast buffer closed for subscriber {}", self.id);
                    self.receiver = None;
                    return None;
                }
            }
        }
    }

    /// Adapt into a `Stream`; dropping the stream detaches the subscriber.
    /// Each poll runs inside the subscriber span.
    pub fn into_stream(self) -> impl Stream<Item = BridgeMessage> + Send + 'static {
        futures::stream::unfold(self, |mut subscription| async move {
            let span = subscription.span.clone();
            let message = subscription.recv().instrument(span).await;
            message.map(|message| (message, subscription))
        })
    }
}
