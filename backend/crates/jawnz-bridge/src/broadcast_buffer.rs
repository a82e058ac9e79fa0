use crate::{BroadcastConfig, Metrics, SubscriberId, SubscriberRegistry, Subscription};

use jawnz_core::BridgeMessage;

use std::sync::{Arc, PoisonError, RwLock};

use log::{debug, info};
use tokio::sync::broadcast;

/// Process-wide fan-out from the inbound listener to every consume stream.
///
/// Each subscriber gets its own bounded view (drop-oldest on overflow), so the
/// producer never waits and one slow reader cannot stall the others. The
/// per-subscriber capacity is rounded up to a power of two.
#[derive(Clone)]
pub struct BroadcastBuffer {
    inner: Arc<BufferInner>,
}

struct BufferInner {
    /// `None` once closed
    sender: RwLock<Option<broadcast::Sender<BridgeMessage>>>,
    registry: SubscriberRegistry,
    metrics: Metrics,
}

impl BroadcastBuffer {
    pub fn new(config: BroadcastConfig, metrics: Metrics) -> Self {
        let capacity = config.channel_capacity.max(1);
        let (sender, _) = broadcast::channel(capacity);
        info!("Broadcast buffer created (capacity {} per subscriber)", capacity);

        Self {
            inner: Arc::new(BufferInner {
                sender: RwLock::new(Some(sender)),
                registry: SubscriberRegistry::new(),
                metrics,
            }),
        }
    }

    /// Offer a message to every attached subscriber.
    ///
    /// Returns how many subscribers it was offered to. Zero subscribers, or a
    /// closed buffer, drops the message and returns 0.
    pub fn publish(&self, message: BridgeMessage) -> usize {
        let guard = self
            .inner
            .sender
            .read()
            .unwrap_or_else(PoisonError::into_inner);

        let Some(sender) = guard.as_ref() else {
            debug!("Broadcast buffer closed, dropping message");
            self.inner.metrics.message_dropped("closed");
            return 0;
        };

        match sender.send(message) {
            Ok(receiver_count) => {
                debug!("Published message to {} subscribers", receiver_count);
                self.inner.metrics.message_published(receiver_count);
                receiver_count
            }
            Err(_) => {
                // No active receivers - nobody is listening right now
                debug!("Published message had no subscribers");
                self.inner.metrics.message_dropped("no_subscribers");
                0
            }
        }
    }

    /// Attach a new subscriber. It sees only messages published from now on.
    pub fn subscribe(&self) -> Subscription {
        let id = SubscriberId::new();

        // Held across registration so `close` cannot interleave
        let guard = self
            .inner
            .sender
            .read()
            .unwrap_or_else(PoisonError::into_inner);

        match guard.as_ref() {
            Some(sender) => Subscription::attached(
                id,
                sender.subscribe(),
                self.inner.registry.clone(),
                self.inner.metrics.clone(),
            ),
            None => {
                debug!("Subscribe on closed broadcast buffer, subscriber {} ends", id);
                Subscription::terminated(id, self.inner.metrics.clone())
            }
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.registry.count()
    }

    pub fn is_closed(&self) -> bool {
        self.inner
            .sender
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_none()
    }

    /// Tear down: every stream ends after draining what it already holds.
    /// Idempotent.
    pub fn close(&self) {
        let sender = self
            .inner
            .sender
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take();

        if sender.is_none() {
            return;
        }
        drop(sender);

        let detached = self.inner.registry.clear();
        self.inner.metrics.subscribers_cleared(detached);
        info!("Broadcast buffer closed, detached {} subscribers", detached);
    }
}
