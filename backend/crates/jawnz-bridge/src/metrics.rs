use metrics::{counter, gauge};

/// Metrics collector for the publish/consume bridge
#[derive(Clone)]
pub struct Metrics {
    prefix: &'static str,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            prefix: "jawnz_bridge",
        }
    }

    /// Record a consume stream attaching
    pub fn subscriber_attached(&self) {
        counter!(format!("{}.subscribers.attached", self.prefix)).increment(1);
        gauge!(format!("{}.subscribers.active", self.prefix)).increment(1.0);
    }

    /// Record a consume stream detaching
    pub fn subscriber_detached(&self) {
        counter!(format!("{}.subscribers.detached", self.prefix)).increment(1);
        gauge!(format!("{}.subscribers.active", self.prefix)).decrement(1.0);
    }

    /// Record subscribers removed in bulk at close
    pub fn subscribers_cleared(&self, count: usize) {
        counter!(format!("{}.subscribers.detached", self.prefix)).increment(count as u64);
        gauge!(format!("{}.subscribers.active", self.prefix)).set(0.0);
    }

    pub fn message_published(&self, receiver_count: usize) {
        counter!(format!("{}.messages.published", self.prefix)).increment(1);
        gauge!(format!("{}.messages.last_fanout", self.prefix)).set(receiver_count as f64);
    }

    pub fn message_dropped(&self, reason: &str) {
        counter!(format!("{}.messages.dropped", self.prefix)).increment(1);
        counter!(format!("{}.messages.dropped.{}", self.prefix, reason)).increment(1);
    }

    /// Record messages skipped for one lagging subscriber
    pub fn subscriber_lagged(&self, skipped: u64) {
        counter!(format!("{}.subscribers.lagged", self.prefix)).increment(1);
        counter!(format!("{}.messages.skipped", self.prefix)).increment(skipped);
    }

    pub fn inbound_received(&self) {
        counter!(format!("{}.inbound.received", self.prefix)).increment(1);
    }

    pub fn outbound_sent(&self) {
        counter!(format!("{}.outbound.sent", self.prefix)).increment(1);
    }

    pub fn outbound_failed(&self, error_code: &str) {
        counter!(format!("{}.outbound.failed", self.prefix)).increment(1);
        counter!(format!("{}.outbound.failed.{}", self.prefix, error_code)).increment(1);
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
