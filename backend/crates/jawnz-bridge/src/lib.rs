pub mod broadcast_buffer;
pub mod broadcast_config;
pub mod error;
pub mod in_memory_binder;
pub mod inbound_listener;
pub mod message_channel;
pub mod metrics;
pub mod shutdown_coordinator;
pub mod shutdown_guard;
pub mod subscriber_id;
pub mod subscriber_registry;
pub mod subscription;

pub use broadcast_buffer::BroadcastBuffer;
pub use broadcast_config::BroadcastConfig;
pub use error::{BridgeError, Result};
pub use in_memory_binder::{InMemoryBinder, InboundChannel, OutboundChannel};
pub use inbound_listener::InboundListener;
pub use message_channel::{MessageChannel, SubscribableChannel};
pub use metrics::Metrics;
pub use shutdown_coordinator::ShutdownCoordinator;
pub use shutdown_guard::ShutdownGuard;
pub use subscriber_id::SubscriberId;
pub use subscriber_registry::SubscriberRegistry;
pub use subscription::Subscription;


use tracing::info_span;

/// Create a tracing span for one consume stream.
/// `Subscription::into_stream` polls inside it, so events it emits while
/// waiting for messages are attributed to the subscriber.
pub fn create_subscriber_span(subscriber_id: SubscriberId) -> tracing::Span {
    info_span!("sse_subscriber", subscriber_id = %subscriber_id)
}
