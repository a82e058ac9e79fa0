mod api_config;
mod bridge_config;
mod broker_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod server_config;

#[cfg(test)]
mod tests;

pub use api_config::{
    ApiConfig, DEFAULT_APPLICATION_NAME, DEFAULT_PAGE_SIZE, MAX_MAX_PAGE_SIZE, MIN_PAGE_SIZE,
};
pub use bridge_config::{
    BridgeConfig, DEFAULT_CHANNEL_CAPACITY, DEFAULT_KEEP_ALIVE_SECS, MAX_CHANNEL_CAPACITY,
    MAX_KEEP_ALIVE_SECS, MIN_CHANNEL_CAPACITY, MIN_KEEP_ALIVE_SECS,
};
pub use broker_config::{BrokerConfig, DEFAULT_DESTINATION};
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8081;
const MIN_PORT: u16 = 1024;
const DEFAULT_DATABASE_FILENAME: &str = "jawnzback.db";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const CONFIG_DIR_ENV: &str = "JAWNZ_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".jawnz";
const CONFIG_FILENAME: &str = "config.toml";
