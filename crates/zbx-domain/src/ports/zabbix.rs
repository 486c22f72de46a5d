//! Zabbix client port
//!
//! Components that only need to know where and how the client talks to the
//! Zabbix server depend on this trait rather than on the HTTP client type.

use crate::value_objects::AuthMode;

/// Zabbix API client port
///
/// ## Thread Safety
///
/// Implementations are shared through `Arc` across tasks and must be
/// `Send + Sync`.
///
/// # Example
///
/// ```
/// use zbx_domain::ports::ZabbixApi;
///
/// fn describe(api: &dyn ZabbixApi) -> String {
///     format!("{} via {}", api.endpoint(), api.provider_name())
/// }
/// ```
pub trait ZabbixApi: Send + Sync {
    /// Full JSON-RPC endpoint URL
    fn endpoint(&self) -> &str;

    /// Authentication mode selected at construction
    fn auth_mode(&self) -> &AuthMode;

    /// Whether server certificates are verified
    fn verifies_ssl(&self) -> bool;

    /// Name of the implementation for diagnostics
    fn provider_name(&self) -> &str;
}
