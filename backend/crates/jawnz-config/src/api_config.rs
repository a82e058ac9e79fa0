use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

/// Prefix of the alert headers (`X-{application_name}-alert`)
pub const DEFAULT_APPLICATION_NAME: &str = "jawnzbackApp";

pub const MIN_PAGE_SIZE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const MAX_MAX_PAGE_SIZE: u32 = 2000;

/// Configuration for the REST API layer
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub application_name: String,
    /// Page size when the request gives none
    pub default_page_size: u32,
    /// Larger requested sizes are clamped to this
    pub max_page_size: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            application_name: DEFAULT_APPLICATION_NAME.to_string(),
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: MAX_MAX_PAGE_SIZE,
        }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.application_name.is_empty()
            || !self
                .application_name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(ConfigError::config(format!(
                "api.application_name must be a non-empty header token, got '{}'",
                self.application_name
            )));
        }

        if self.max_page_size < MIN_PAGE_SIZE || self.max_page_size > MAX_MAX_PAGE_SIZE {
            return Err(ConfigError::config(format!(
                "api.max_page_size must be {}-{}, got {}",
                MIN_PAGE_SIZE, MAX_MAX_PAGE_SIZE, self.max_page_size
            )));
        }

        if self.default_page_size < MIN_PAGE_SIZE || self.default_page_size > self.max_page_size {
            return Err(ConfigError::config(format!(
                "api.default_page_size must be {}-{}, got {}",
                MIN_PAGE_SIZE, self.max_page_size, self.default_page_size
            )));
        }

        Ok(())
    }
}
