//! Zabbix client configuration types

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use zbx_domain::constants::{
    DEFAULT_ZABBIX_API_FILE, DEFAULT_ZABBIX_CHECK_SSL, DEFAULT_ZABBIX_HOST,
    DEFAULT_ZABBIX_PASSWORD, DEFAULT_ZABBIX_TIMEOUT_SECS, DEFAULT_ZABBIX_USERNAME,
};
use zbx_domain::error::Result;
use zbx_domain::{AuthMode, HttpBasicAuth};

use super::de;

/// Zabbix client configuration
///
/// Every field maps to a `ZABBIX_*` environment variable of the same name
/// (`http_username` ↔ `ZABBIX_HTTP_USERNAME`). Empty optional values are
/// treated as absent.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZabbixConfig {
    /// Base URL of the Zabbix frontend; `http://` is assumed without a scheme
    #[serde(deserialize_with = "de::string_like")]
    pub host: String,

    /// JSON-RPC entry point appended to `host`
    #[serde(deserialize_with = "de::string_like")]
    pub api_file: String,

    /// Login username, ignored when `auth_token` is set
    #[serde(deserialize_with = "de::string_like")]
    pub username: String,

    /// Login password, ignored when `auth_token` is set
    #[serde(deserialize_with = "de::string_like")]
    pub password: String,

    /// HTTP Basic auth username
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "de::optional_string_like"
    )]
    pub http_username: Option<String>,

    /// HTTP Basic auth password
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "de::optional_string_like"
    )]
    pub http_password: Option<String>,

    /// Pre-issued API token, bypasses the username/password login
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "de::optional_string_like"
    )]
    pub auth_token: Option<String>,

    /// Path to a PEM bundle of additional trusted root certificates
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "de::optional_string_like"
    )]
    pub ssl_context: Option<String>,

    /// Verify the server certificate
    #[serde(deserialize_with = "de::bool_like")]
    pub check_ssl: bool,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ZabbixConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_ZABBIX_HOST.to_string(),
            api_file: DEFAULT_ZABBIX_API_FILE.to_string(),
            username: DEFAULT_ZABBIX_USERNAME.to_string(),
            password: DEFAULT_ZABBIX_PASSWORD.to_string(),
            http_username: None,
            http_password: None,
            auth_token: None,
            ssl_context: None,
            check_ssl: DEFAULT_ZABBIX_CHECK_SSL,
            timeout_secs: DEFAULT_ZABBIX_TIMEOUT_SECS,
        }
    }
}

impl ZabbixConfig {
    /// Configuration for `host` with every other value at its default
    pub fn new<S: Into<String>>(host: S) -> Self {
        Self {
            host: host.into(),
            ..Self::default()
        }
    }

    /// Set the JSON-RPC entry point
    pub fn with_api_file<S: Into<String>>(mut self, api_file: S) -> Self {
        self.api_file = api_file.into();
        self
    }

    /// Set the login credentials
    pub fn with_credentials<U: Into<String>, P: Into<String>>(
        mut self,
        username: U,
        password: P,
    ) -> Self {
        self.username = username.into();
        self.password = password.into();
        self
    }

    /// Set a pre-issued API token
    pub fn with_auth_token<S: Into<String>>(mut self, token: S) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    /// Set HTTP Basic credentials
    pub fn with_http_auth<U: Into<String>, P: Into<String>>(
        mut self,
        username: U,
        password: P,
    ) -> Self {
        self.http_username = Some(username.into());
        self.http_password = Some(password.into());
        self
    }

    /// Set the SSL context (PEM bundle path)
    pub fn with_ssl_context<S: Into<String>>(mut self, ssl_context: S) -> Self {
        self.ssl_context = Some(ssl_context.into());
        self
    }

    /// Enable or disable certificate verification
    pub fn with_check_ssl(mut self, check_ssl: bool) -> Self {
        self.check_ssl = check_ssl;
        self
    }

    /// Authentication mode implied by the token and credentials
    pub fn auth_mode(&self) -> Result<AuthMode> {
        AuthMode::from_parts(self.auth_token.as_deref(), &self.username, &self.password)
    }

    /// HTTP Basic credentials, if a username is configured
    pub fn http_basic_auth(&self) -> Option<HttpBasicAuth> {
        HttpBasicAuth::from_parts(self.http_username.as_deref(), self.http_password.as_deref())
    }

    /// SSL context as a filesystem path
    pub fn ssl_context_path(&self) -> Option<&Path> {
        self.ssl_context
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(Path::new)
    }
}

impl fmt::Debug for ZabbixConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |v: &Option<String>| v.as_ref().map(|_| "***");
        f.debug_struct("ZabbixConfig")
            .field("host", &self.host)
            .field("api_file", &self.api_file)
            .field("username", &self.username)
            .field("password", &"***")
            .field("http_username", &self.http_username)
            .field("http_password", &redact(&self.http_password))
            .field("auth_token", &redact(&self.auth_token))
            .field("ssl_context", &self.ssl_context)
            .field("check_ssl", &self.check_ssl)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
