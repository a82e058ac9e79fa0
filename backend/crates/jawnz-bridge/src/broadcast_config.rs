use jawnz_config::{BridgeConfig, DEFAULT_CHANNEL_CAPACITY};

/// Configuration for the broadcast buffer
#[derive(Debug, Clone)]
pub struct BroadcastConfig {
    /// How far one subscriber may fall behind before its oldest messages are skipped
    pub channel_capacity: usize,
}

impl Default for BroadcastConfig {
    fn default() -> Self {
        Self {
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

impl From<&BridgeConfig> for BroadcastConfig {
    fn from(config: &BridgeConfig) -> Self {
        Self {
            channel_capacity: config.channel_capacity,
        }
    }
}
