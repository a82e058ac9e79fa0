use crate::{BroadcastBuffer, Metrics, ShutdownCoordinator, ShutdownGuard, SubscribableChannel};

use log::{debug, info};
use tokio::task::JoinHandle;

/// Forwards every record delivered on the inbound binding to the broadcast
/// buffer, unmodified.
pub struct InboundListener<C> {
    channel: C,
    buffer: BroadcastBuffer,
    metrics: Metrics,
    shutdown: ShutdownGuard,
}

impl<C> InboundListener<C>
where
    C: SubscribableChannel + 'static,
{
    pub fn new(
        channel: C,
        buffer: BroadcastBuffer,
        metrics: Metrics,
        shutdown: &ShutdownCoordinator,
    ) -> Self {
        Self {
            channel,
            buffer,
            metrics,
            shutdown: shutdown.subscribe_guard(),
        }
    }

    /// Run on its own task. The handle resolves to the number of records forwarded.
    pub fn spawn(self) -> JoinHandle<u64> {
        tokio::spawn(self.run())
    }

    /// Ends when the inbound binding closes or shutdown is signalled.
    pub async fn run(mut self) -> u64 {
        info!(
            "Inbound listener started on destination '{}'",
            self.channel.destination()
        );
        let mut forwarded: u64 = 0;

        loop {
            tokio::select! {
                biased;

                _ = self.shutdown.wait() => {
                    info!("Inbound listener stopping: shutdown signalled");
                    break;
                }

                received = self.channel.receive() => {
                    let Some(message) = received else {
                        info!("Inbound listener stopping: binding closed");
                        break;
                    };
                    self.metrics.inbound_received();
                    let receivers = self.buffer.publish(message);
                    debug!("Forwarded inbound message to {} subscribers", receivers);
                    forwarded += 1;
                }
            }
        }

        info!("Inbound listener forwarded {} messages", forwarded);
        forwarded
    }
}
