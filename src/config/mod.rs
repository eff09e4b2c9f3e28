//! Configuration module for Mauka Collections.
//!
//! Container tuning and logging settings are loaded from an optional file
//! (TOML, YAML, JSON) and overridden with environment variables. All values
//! are validated before use.

use std::path::{Path, PathBuf};

use crate::data_structures::cyclic_deque::CyclicDequeConfig;
use crate::data_structures::open_hash_table::{
    OpenHashTableConfig, MAX_INITIAL_SIZE, MAX_LOAD_FACTOR, MIN_LOAD_FACTOR,
};
use crate::data_structures::priority_queue::PriorityQueueConfig;
use crate::error::config::ConfigError;
use config::{Config, ConfigError as ExternalConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Default environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "MAUKA";

/// A trait for types that can be validated.
pub trait Validate {
    /// Validates that the configuration is correct.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the configuration is valid
    /// * `Err(ConfigError)` if the configuration is invalid
    fn validate(&self) -> ConfigResult<()>;
}

/// Top-level configuration: one section per tunable container plus logging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CollectionsConfig {
    /// Cyclic deque configuration
    pub cyclic_deque: CyclicDequeConfig,

    /// Priority queue configuration
    pub priority_queue: PriorityQueueConfig,

    /// Open hash table configuration
    pub open_hash_table: OpenHashTableConfig,

    /// Log configuration
    pub log: LogConfig,
}

impl Validate for CollectionsConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.cyclic_deque.validate()?;
        self.priority_queue.validate()?;
        self.open_hash_table.validate()?;
        self.log.validate()?;
        Ok(())
    }
}

impl Validate for CyclicDequeConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.initial_capacity == 0 {
            return Err(ConfigError::ValidationError(
                "cyclic_deque.initial_capacity must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl Validate for PriorityQueueConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.initial_capacity == 0 {
            return Err(ConfigError::ValidationError(
                "priority_queue.initial_capacity must be greater than 0".to_string(),
            ));
        }
        if self.growth_increment == 0 {
            return Err(ConfigError::ValidationError(
                "priority_queue.growth_increment must be greater than 0".to_string(),
            ));
        }
        if !(2..=16).contains(&self.shrink_divisor) {
            return Err(ConfigError::ValueOutOfRange {
                key: "priority_queue.shrink_divisor".to_string(),
                message: format!("{} is not between 2 and 16", self.shrink_divisor),
            });
        }
        Ok(())
    }
}

impl Validate for OpenHashTableConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.initial_size == 0 {
            return Err(ConfigError::ValidationError(
                "open_hash_table.initial_size must be greater than 0".to_string(),
            ));
        }
        if self.initial_size > MAX_INITIAL_SIZE {
            return Err(ConfigError::ValueOutOfRange {
                key: "open_hash_table.initial_size".to_string(),
                message: format!("{} exceeds {MAX_INITIAL_SIZE}", self.initial_size),
            });
        }
        if !(MIN_LOAD_FACTOR..=MAX_LOAD_FACTOR).contains(&self.max_load_factor) {
            return Err(ConfigError::ValueOutOfRange {
                key: "open_hash_table.max_load_factor".to_string(),
                message: format!(
                    "{} is not between {MIN_LOAD_FACTOR} and {MAX_LOAD_FACTOR}",
                    self.max_load_factor
                ),
            });
        }
        Ok(())
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Whether to log in JSON format
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl Validate for LogConfig {
    fn validate(&self) -> ConfigResult<()> {
        match self.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            _ => Err(ConfigError::ValidationError(format!(
                "Invalid log level: {}",
                self.level
            ))),
        }
    }
}

/// Configuration loader for Mauka Collections.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    env_prefix: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// # Arguments
    ///
    /// * `config_path` - Optional path to the configuration file
    /// * `env_prefix` - Prefix for environment variables that override configuration values
    pub fn new<P: AsRef<Path>>(config_path: Option<P>, env_prefix: &str) -> Self {
        Self {
            config_path: config_path.map(|p| p.as_ref().to_path_buf()),
            env_prefix: env_prefix.to_string(),
        }
    }

    /// Loads the configuration from defaults, the file and environment
    /// variables, in that order of precedence.
    ///
    /// # Returns
    ///
    /// * `Ok(CollectionsConfig)` if the configuration was loaded successfully
    /// * `Err(ConfigError)` if there was an error loading the configuration
    pub fn load(&self) -> ConfigResult<CollectionsConfig> {
        let mut builder = Config::builder();

        // Add default configuration values
        builder = builder.add_source(
            Config::try_from(&CollectionsConfig::default())
                .map_err(|e| ConfigError::ParseError(e.to_string()))?,
        );

        if let Some(path) = &self.config_path {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.clone()));
            }

            let format = match path.extension().and_then(|ext| ext.to_str()) {
                Some("toml") => FileFormat::Toml,
                Some("json") => FileFormat::Json,
                Some("yaml" | "yml") => FileFormat::Yaml,
                _ => {
                    return Err(ConfigError::ParseError(format!(
                        "Unsupported file extension for: {path:?}"
                    )))
                }
            };
            builder = builder.add_source(File::from(path.as_path()).format(format));
        }

        // Add environment variables with prefix
        builder = builder.add_source(
            Environment::with_prefix(&self.env_prefix)
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(|e| match e {
            ExternalConfigError::NotFound(path) => ConfigError::FileNotFound(PathBuf::from(path)),
            ExternalConfigError::FileParse { uri, cause } => ConfigError::ParseError(format!(
                "Error parsing {}: {cause}",
                uri.unwrap_or_else(|| "config file".to_string())
            )),
            ExternalConfigError::Message(msg) => ConfigError::ParseError(msg),
            other => ConfigError::ParseError(other.to_string()),
        })?;

        let collections_config: CollectionsConfig = config
            .try_deserialize()
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        collections_config.validate()?;
        tracing::debug!(config = ?collections_config, "Configuration loaded");

        Ok(collections_config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new(None::<PathBuf>, ENV_PREFIX)
    }
}
