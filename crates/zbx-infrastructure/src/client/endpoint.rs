//! Endpoint URL resolution

use reqwest::Url;
use zbx_domain::constants::DEFAULT_URL_SCHEME;
use zbx_domain::error::{Error, Result};

use crate::error_ext::ErrorContext;

/// Join `host` and `api_file` into the JSON-RPC endpoint URL
///
/// A trailing slash on the host and a leading slash on the file are
/// collapsed into one. Hosts without a scheme get `http://`.
///
/// ```
/// use zbx_infrastructure::client::build_endpoint;
///
/// let url = build_endpoint("http://example.com/", "api_jsonrpc.php").unwrap();
/// assert_eq!(url.as_str(), "http://example.com/api_jsonrpc.php");
/// ```
pub fn build_endpoint(host: &str, api_file: &str) -> Result<Url> {
    let host = host.trim();
    if host.is_empty() {
        return Err(Error::configuration("Zabbix host cannot be empty"));
    }

    let base = if host.contains("://") {
        host.to_string()
    } else {
        format!("{DEFAULT_URL_SCHEME}{host}")
    };
    let raw = format!(
        "{}/{}",
        base.trim_end_matches('/'),
        api_file.trim().trim_start_matches('/')
    );

    Url::parse(&raw).config_context(format!("Invalid Zabbix endpoint URL '{raw}'"))
}
