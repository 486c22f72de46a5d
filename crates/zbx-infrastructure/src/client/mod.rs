//! Zabbix client construction
//!
//! Builds the HTTP transport and the client handle from a [`ZabbixConfig`].
//! The JSON-RPC conversation itself is left to consumers of the handle.
//!
//! [`ZabbixConfig`]: crate::config::ZabbixConfig

pub mod endpoint;
pub mod http;
pub mod zabbix;

pub use endpoint::build_endpoint;
pub use http::build_http_client;
pub use zabbix::ZabbixClient;
