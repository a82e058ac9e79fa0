use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

// Per-subscriber lag allowance before the oldest messages are skipped
pub const MIN_CHANNEL_CAPACITY: usize = 1;
pub const MAX_CHANNEL_CAPACITY: usize = 100_000;
pub const DEFAULT_CHANNEL_CAPACITY: usize = 1024;

// SSE keep-alive comment interval (seconds)
pub const MIN_KEEP_ALIVE_SECS: u64 = 1;
pub const MAX_KEEP_ALIVE_SECS: u64 = 300;
pub const DEFAULT_KEEP_ALIVE_SECS: u64 = 15;

/// Broadcast buffer and consume stream settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    pub channel_capacity: usize,
    pub keep_alive_secs: u64,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
            keep_alive_secs: DEFAULT_KEEP_ALIVE_SECS,
        }
    }
}

impl BridgeConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.channel_capacity < MIN_CHANNEL_CAPACITY
            || self.channel_capacity > MAX_CHANNEL_CAPACITY
        {
            return Err(ConfigError::config(format!(
                "bridge.channel_capacity must be {}-{}, got {}",
                MIN_CHANNEL_CAPACITY, MAX_CHANNEL_CAPACITY, self.channel_capacity
            )));
        }

        if self.keep_alive_secs < MIN_KEEP_ALIVE_SECS || self.keep_alive_secs > MAX_KEEP_ALIVE_SECS
        {
            return Err(ConfigError::config(format!(
                "bridge.keep_alive_secs must be {}-{}, got {}",
                MIN_KEEP_ALIVE_SECS, MAX_KEEP_ALIVE_SECS, self.keep_alive_secs
            )));
        }

        Ok(())
    }
}
