use crate::{BridgeError, MessageChannel, Result as BridgeErrorResult, SubscribableChannel};

use jawnz_core::BridgeMessage;

use std::collections::HashMap;
use std::panic::Location;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use error_location::ErrorLocation;
use log::{debug, info};
use tokio::sync::mpsc;

type Bindings = HashMap<String, Vec<mpsc::UnboundedSender<BridgeMessage>>>;

/// In-process broker with named destinations.
///
/// Every inbound channel bound to a destination receives its own copy of each
/// message sent there, in send order.
#[derive(Clone, Default)]
pub struct InMemoryBinder {
    inner: Arc<BinderInner>,
}

#[derive(Default)]
struct BinderInner {
    bindings: Mutex<Bindings>,
    closed: AtomicBool,
}

impl InMemoryBinder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Producer binding for `destination`
    pub fn output(&self, destination: &str) -> OutboundChannel {
        info!("Bound outbound channel to destination '{}'", destination);
        OutboundChannel {
            binder: self.clone(),
            destination: destination.to_string(),
        }
    }

    /// Consumer binding for `destination`
    pub fn input(&self, destination: &str) -> InboundChannel {
        info!("Bound inbound channel to destination '{}'", destination);
        self.bind(destination)
    }

    /// Extra consumer binding used to inspect what was sent to `destination`
    pub fn capture(&self, destination: &str) -> InboundChannel {
        debug!("Capturing destination '{}'", destination);
        self.bind(destination)
    }

    /// Stop accepting sends and end every inbound channel
    pub fn close(&self) {
        if self.inner.closed.swap(true, Ordering::SeqCst) {
            return;
        }
        let dropped: usize = self.lock().drain().map(|(_, senders)| senders.len()).sum();
        info!("Broker binder closed ({} inbound bindings ended)", dropped);
    }

    pub fn is_closed(&self) -> bool {
        self.inner.closed.load(Ordering::SeqCst)
    }

    /// Deliver to every live binding on `destination`; returns how many got it
    #[track_caller]
    fn deliver(&self, destination: &str, message: BridgeMessage) -> BridgeErrorResult<usize> {
        if self.is_closed() {
            return Err(BridgeError::BrokerUnavailable {
                destination: destination.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let mut bindings = self.lock();
        let Some(senders) = bindings.get_mut(destination) else {
            debug!("No consumers bound to '{}', message discarded", destination);
            return Ok(0);
        };

        // Prune bindings whose inbound channel was dropped
        senders.retain(|sender| sender.send(message.clone()).is_ok());
        Ok(senders.len())
    }

    fn bind(&self, destination: &str) -> InboundChannel {
        let (sender, receiver) = mpsc::unbounded_channel();

        // A closed binder hands out channels that are already ended
        if !self.is_closed() {
            self.lock()
                .entry(destination.to_string())
                .or_default()
                .push(sender);
        }

        InboundChannel {
            destination: destination.to_string(),
            receiver,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Bindings> {
        self.inner
            .bindings
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

/// Producer side of an `InMemoryBinder` destination
#[derive(Clone)]
pub struct OutboundChannel {
    binder: InMemoryBinder,
    destination: String,
}

#[async_trait]
impl MessageChannel for OutboundChannel {
    async fn send(&self, message: BridgeMessage) -> BridgeErrorResult<()> {
        let delivered = self.binder.deliver(&self.destination, message)?;
        debug!(
            "Sent message to '{}' ({} bindings)",
            self.destination, delivered
        );
        Ok(())
    }

    fn destination(&self) -> &str {
        &self.destination
    }
}

/// Consumer side of an `InMemoryBinder` destination
pub struct InboundChannel {
    destination: String,
    receiver: mpsc::UnboundedReceiver<BridgeMessage>,
}

impl InboundChannel {
    /// Non-blocking receive; `None` when nothing is queued
    pub fn try_receive(&mut self) -> Option<BridgeMessage> {
        self.receiver.try_recv().ok()
    }
}

#[async_trait]
impl SubscribableChannel for InboundChannel {
    async fn receive(&mut self) -> Option<BridgeMessage> {
        self.receiver.recv().await
    }

    fn destination(&self) -> &str {
        &self.destination
    }
}
