//! Configuration loader
//!
//! Handles loading configuration from various sources including
//! TOML files, environment variables, and default values.

use std::env;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use figment::value::Value;
use zbx_domain::error::{Error, Result};

use super::types::{AppConfig, LoggingConfig, ZabbixConfig};
use crate::constants::{
    CONFIG_ENV_PREFIX, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME, ZABBIX_CONFIG_SECTION,
};
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};

/// Environment keys whose values are parsed rather than taken as strings
const PARSED_ENV_KEYS: &[&str] = &["check_ssl", "timeout_secs"];

/// Configuration loader service
#[derive(Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,

    /// Programmatic overrides as `(dotted.key, value)` pairs
    overrides: Vec<(String, Value)>,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
            overrides: Vec::new(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Override a single key, e.g. `("zabbix.host", "http://example.com")`
    ///
    /// Overrides win over every other source.
    pub fn with_override<K: Into<String>, V: Into<Value>>(mut self, key: K, value: V) -> Self {
        self.overrides.push((key.into(), value.into()));
        self
    }

    /// Load configuration from all sources
    ///
    /// Configuration sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (if exists)
    /// 3. Environment variables with prefix (e.g., `ZABBIX_HOST` → `zabbix.host`)
    /// 4. Programmatic overrides
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path));
                log_config_loaded(config_path, true);
            } else {
                log_config_loaded(config_path, false);
            }
        } else if let Some(default_path) = Self::find_default_config_path() {
            figment = figment.merge(Toml::file(&default_path));
            log_config_loaded(&default_path, true);
        }

        figment = self.merge_env(figment);

        for (key, value) in &self.overrides {
            figment = figment.merge(Serialized::default(key, value.clone()));
        }

        let app_config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_app_config(&app_config)?;

        Ok(app_config)
    }

    /// Merge `<PREFIX>_*` variables onto the zabbix section
    ///
    /// Values are kept verbatim so secrets such as `007` or `1.10` are not
    /// reinterpreted as numbers; only the keys in [`PARSED_ENV_KEYS`] go
    /// through figment's value parser.
    fn merge_env(&self, mut figment: Figment) -> Figment {
        let env = Env::prefixed(&format!("{}_", self.env_prefix))
            .map(|key| format!("{ZABBIX_CONFIG_SECTION}.{key}").into());

        for (key, raw) in env.iter() {
            let field = key
                .as_str()
                .strip_prefix(ZABBIX_CONFIG_SECTION)
                .and_then(|rest| rest.strip_prefix('.'))
                .unwrap_or_default();
            let value = if PARSED_ENV_KEYS.contains(&field) {
                raw.parse::<Value>().unwrap_or_else(|never| match never {})
            } else {
                Value::from(raw.as_str())
            };
            figment = figment.merge(Serialized::default(key.as_str(), value));
        }

        figment
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Find the first existing default configuration file
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = [
            Some(current_dir.join(DEFAULT_CONFIG_FILENAME)),
            Some(
                current_dir
                    .join(DEFAULT_CONFIG_DIR)
                    .join(DEFAULT_CONFIG_FILENAME),
            ),
            Some(current_dir.join("config").join(DEFAULT_CONFIG_FILENAME)),
            dirs::config_dir().map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
        ];

        candidates.into_iter().flatten().find(|path| path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate application configuration
fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_zabbix_config(&config.zabbix)?;
    validate_logging_config(&config.logging)?;
    Ok(())
}

fn validate_zabbix_config(config: &ZabbixConfig) -> Result<()> {
    if config.host.trim().is_empty() {
        return Err(Error::configuration("Zabbix host cannot be empty"));
    }
    if config.api_file.trim().is_empty() {
        return Err(Error::configuration("Zabbix API file cannot be empty"));
    }
    if config.timeout_secs == 0 {
        return Err(Error::configuration("Zabbix request timeout cannot be 0"));
    }
    config
        .auth_mode()
        .config_context("Invalid Zabbix credentials")?;
    Ok(())
}

fn validate_logging_config(config: &LoggingConfig) -> Result<()> {
    parse_log_level(&config.level).map(|_| ())
}

/// Configuration builder for programmatic configuration
pub struct ConfigBuilder {
    config: AppConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder with defaults
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
        }
    }

    /// Set Zabbix client configuration
    pub fn with_zabbix(mut self, zabbix: ZabbixConfig) -> Self {
        self.config.zabbix = zabbix;
        self
    }

    /// Set logging configuration
    pub fn with_logging(mut self, logging: LoggingConfig) -> Self {
        self.config.logging = logging;
        self
    }

    /// Build the configuration
    pub fn build(self) -> AppConfig {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
