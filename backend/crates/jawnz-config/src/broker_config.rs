use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

/// Topic used for both directions unless configured otherwise
pub const DEFAULT_DESTINATION: &str = "jawnzback-sse";

/// Broker bindings for the publish/consume bridge
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BrokerConfig {
    /// Destination the publish endpoint sends to
    pub output_destination: String,
    /// Destination the inbound listener is bound to
    pub input_destination: String,
}

impl Default for BrokerConfig {
    fn default() -> Self {
        Self {
            output_destination: String::from(DEFAULT_DESTINATION),
            input_destination: String::from(DEFAULT_DESTINATION),
        }
    }
}

impl BrokerConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        for (name, value) in [
            ("broker.output_destination", &self.output_destination),
            ("broker.input_destination", &self.input_destination),
        ] {
            if value.is_empty() || value.chars().any(char::is_whitespace) {
                return Err(ConfigError::broker(format!(
                    "{} must be non-empty without whitespace, got '{}'",
                    name, value
                )));
            }
        }

        Ok(())
    }
}
