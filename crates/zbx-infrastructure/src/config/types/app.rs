//! Main application configuration

use serde::{Deserialize, Serialize};

use super::{LoggingConfig, ZabbixConfig};

/// Root configuration
///
/// Maps onto the `[zabbix]` and `[logging]` tables of the TOML file.
/// `ZABBIX_*` environment variables land in the `zabbix` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Zabbix client configuration
    pub zabbix: ZabbixConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}
