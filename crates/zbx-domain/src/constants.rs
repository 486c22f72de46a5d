//! Domain-level constants
//!
//! Values that define the observable behavior of the client bootstrap.
//! Infrastructure-only constants live in `zbx_infrastructure::constants`.

// ============================================================================
// REGISTRATION
// ============================================================================

/// Fixed name under which the Zabbix client is registered
pub const ZABBIX_SERVICE_NAME: &str = "zabbix";

// ============================================================================
// CONFIGURATION DEFAULTS
// ============================================================================

/// Default API host
pub const DEFAULT_ZABBIX_HOST: &str = "localhost";

/// Default JSON-RPC entry point appended to the host
pub const DEFAULT_ZABBIX_API_FILE: &str = "api_jsonrpc.php";

/// Default login username
pub const DEFAULT_ZABBIX_USERNAME: &str = "admin";

/// Default login password
pub const DEFAULT_ZABBIX_PASSWORD: &str = "zabbix";

/// SSL certificates are verified unless explicitly disabled
pub const DEFAULT_ZABBIX_CHECK_SSL: bool = true;

/// Default per-request timeout in seconds
pub const DEFAULT_ZABBIX_TIMEOUT_SECS: u64 = 30;

/// Scheme assumed for hosts configured without one
pub const DEFAULT_URL_SCHEME: &str = "http://";
