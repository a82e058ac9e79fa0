use crate::Result as BridgeErrorResult;

use jawnz_core::BridgeMessage;

use async_trait::async_trait;

/// Outbound side of a broker binding: fire-and-forget send.
#[async_trait]
pub trait MessageChannel: Send + Sync {
    /// Hand the message to the broker. Does not wait for delivery to consumers.
    async fn send(&self, message: BridgeMessage) -> BridgeErrorResult<()>;

    fn destination(&self) -> &str;
}

/// Inbound side of a broker binding: one call per delivered record.
#[async_trait]
pub trait SubscribableChannel: Send {
    /// Next delivered record, or `None` once the binding is closed.
    /// Cancel-safe: a record is never lost if the future is dropped.
    async fn receive(&mut self) -> Option<BridgeMessage>;

    fn destination(&self) -> &str;
}
