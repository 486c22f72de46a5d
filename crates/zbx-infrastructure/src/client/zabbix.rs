//! Zabbix API client handle
//!
//! Holds everything a consumer needs to talk to the Zabbix JSON-RPC endpoint:
//! the resolved URL, the selected authentication mode and a configured
//! reqwest client.

use reqwest::{Client, Url};
use zbx_domain::error::Result;
use zbx_domain::ports::ZabbixApi;
use zbx_domain::{AuthMode, HttpBasicAuth};

use super::endpoint::build_endpoint;
use super::http::build_http_client;
use crate::config::ZabbixConfig;

/// Zabbix API client
///
/// Construct once with [`ZabbixClient::new`] and share through `Arc`;
/// `reqwest::Client` pools connections internally.
///
/// ## Example
///
/// ```
/// use zbx_infrastructure::client::ZabbixClient;
/// use zbx_infrastructure::config::ZabbixConfig;
///
/// let config = ZabbixConfig::new("http://example.com").with_auth_token("abc123");
/// let client = ZabbixClient::new(config).unwrap();
/// assert_eq!(client.endpoint().as_str(), "http://example.com/api_jsonrpc.php");
/// assert!(client.uses_token_auth());
/// ```
pub struct ZabbixClient {
    config: ZabbixConfig,
    endpoint: Url,
    auth: AuthMode,
    http_auth: Option<HttpBasicAuth>,
    http: Client,
}

impl ZabbixClient {
    /// Build a client from configuration
    ///
    /// Fails on a malformed host, missing credentials without a token, an
    /// unreadable SSL context, or when the HTTP client cannot be built.
    /// Reachability and credential validity are only known at first use.
    pub fn new(config: ZabbixConfig) -> Result<Self> {
        let endpoint = build_endpoint(&config.host, &config.api_file)?;
        let auth = config.auth_mode()?;
        let http_auth = config.http_basic_auth();
        let http = build_http_client(&config)?;

        Ok(Self {
            config,
            endpoint,
            auth,
            http_auth,
            http,
        })
    }

    /// JSON-RPC endpoint URL
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Authentication mode
    pub fn auth_mode(&self) -> &AuthMode {
        &self.auth
    }

    /// Check if the client authenticates with a pre-issued token
    pub fn uses_token_auth(&self) -> bool {
        self.auth.is_token()
    }

    /// HTTP Basic credentials attached to every request
    pub fn http_basic_auth(&self) -> Option<&HttpBasicAuth> {
        self.http_auth.as_ref()
    }

    /// Underlying HTTP client
    pub fn http(&self) -> &Client {
        &self.http
    }

    /// Configuration the client was built from
    pub fn config(&self) -> &ZabbixConfig {
        &self.config
    }
}

impl ZabbixApi for ZabbixClient {
    fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    fn auth_mode(&self) -> &AuthMode {
        &self.auth
    }

    fn verifies_ssl(&self) -> bool {
        self.config.check_ssl
    }

    fn provider_name(&self) -> &str {
        "reqwest"
    }
}

impl std::fmt::Debug for ZabbixClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZabbixClient")
            .field("endpoint", &self.endpoint.as_str())
            .field("auth", &self.auth)
            .field("http_auth", &self.http_auth)
            .field("check_ssl", &self.config.check_ssl)
            .finish_non_exhaustive()
    }
}
