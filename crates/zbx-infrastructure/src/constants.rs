//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Defaults that shape the client configuration are defined in
//! `zbx_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "zbx.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "zbx";

/// Environment variable prefix for client configuration
pub const CONFIG_ENV_PREFIX: &str = "ZABBIX";

/// Configuration section the environment variables are mapped onto
pub const ZABBIX_CONFIG_SECTION: &str = "zabbix";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable holding a tracing filter directive
pub const LOG_FILTER_ENV: &str = "ZBX_LOG";

/// File stem used for rolling log files when none can be derived
pub const DEFAULT_LOG_FILE_STEM: &str = "zbx";

// ============================================================================
// HTTP CLIENT CONSTANTS
// ============================================================================

/// Content type expected by the Zabbix JSON-RPC endpoint
pub const CONTENT_TYPE_JSON_RPC: &str = "application/json-rpc";

/// Authorization scheme prefix for HTTP Basic credentials
pub const BASIC_AUTH_PREFIX: &str = "Basic ";
