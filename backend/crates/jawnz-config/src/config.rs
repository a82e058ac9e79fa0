use crate::{
    ApiConfig, BridgeConfig, BrokerConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError,
    ConfigErrorResult, DEFAULT_CONFIG_DIR, DatabaseConfig, LoggingConfig, ServerConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub broker: BrokerConfig,
    pub bridge: BridgeConfig,
    pub api: ApiConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for JAWNZ_CONFIG_DIR env var, else use ./.jawnz/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply JAWNZ_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: JAWNZ_CONFIG_DIR env var > ./.jawnz/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.broker.validate()?;
        self.bridge.validate()?;
        self.api.validate()?;

        // Database path must stay inside the config dir
        let db_path = Path::new(&self.database.path);
        if self.database.path.is_empty() || db_path.is_absolute() || self.database.path.contains("..")
        {
            return Err(ConfigError::database(
                "database.path must be relative and cannot contain '..'",
            ));
        }

        if let Some(ref file) = self.logging.file
            && (file.is_empty() || file.contains('/') || file.contains('\\'))
        {
            return Err(ConfigError::logging(
                "logging.file must be a bare file name",
            ));
        }

        Ok(())
    }

    /// Get absolute path to database file.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.database.path))
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!("  database: {}", self.database.path);
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
        info!(
            "  broker: out={} in={}",
            self.broker.output_destination, self.broker.input_destination
        );
        info!(
            "  bridge: capacity={}, keep_alive={}s",
            self.bridge.channel_capacity, self.bridge.keep_alive_secs
        );
        info!(
            "  api: app={}, page_size={}/{}",
            self.api.application_name, self.api.default_page_size, self.api.max_page_size
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("JAWNZ_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("JAWNZ_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_string("JAWNZ_DATABASE_PATH", &mut self.database.path);

        // Logging
        Self::apply_env_parse("JAWNZ_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("JAWNZ_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("JAWNZ_LOG_FILE", &mut self.logging.file);

        // Broker
        Self::apply_env_string(
            "JAWNZ_BROKER_OUTPUT_DESTINATION",
            &mut self.broker.output_destination,
        );
        Self::apply_env_string(
            "JAWNZ_BROKER_INPUT_DESTINATION",
            &mut self.broker.input_destination,
        );

        // Bridge
        Self::apply_env_parse(
            "JAWNZ_BRIDGE_CHANNEL_CAPACITY",
            &mut self.bridge.channel_capacity,
        );
        Self::apply_env_parse(
            "JAWNZ_BRIDGE_KEEP_ALIVE_SECS",
            &mut self.bridge.keep_alive_secs,
        );

        // API
        Self::apply_env_string(
            "JAWNZ_API_APPLICATION_NAME",
            &mut self.api.application_name,
        );
        Self::apply_env_parse(
            "JAWNZ_API_DEFAULT_PAGE_SIZE",
            &mut self.api.default_page_size,
        );
        Self::apply_env_parse("JAWNZ_API_MAX_PAGE_SIZE", &mut self.api.max_page_size);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
