//! HTTP transport for the Zabbix client

use std::fs;
use std::path::Path;
use std::time::Duration;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Certificate, Client};
use tracing::debug;
use zbx_domain::HttpBasicAuth;
use zbx_domain::error::{Error, Result};

use crate::config::ZabbixConfig;
use crate::constants::{BASIC_AUTH_PREFIX, CONTENT_TYPE_JSON_RPC};
use crate::error_ext::ErrorContext;

/// Build the reqwest client for a Zabbix configuration
///
/// Applies the JSON-RPC content type, optional Basic credentials, the
/// certificate verification flag and any extra root certificates from the
/// SSL context.
pub fn build_http_client(config: &ZabbixConfig) -> Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_JSON_RPC));
    if let Some(basic) = config.http_basic_auth() {
        headers.insert(AUTHORIZATION, basic_auth_header(&basic)?);
    }

    let mut builder = Client::builder()
        .default_headers(headers)
        .user_agent(format!("zbx/{}", env!("CARGO_PKG_VERSION")))
        .timeout(Duration::from_secs(config.timeout_secs))
        .danger_accept_invalid_certs(!config.check_ssl);

    if let Some(path) = config.ssl_context_path() {
        for cert in load_root_certificates(path)? {
            builder = builder.add_root_certificate(cert);
        }
    }

    builder
        .build()
        .network_context("Failed to build Zabbix HTTP client")
}

/// `Authorization` header value for Basic credentials
pub fn basic_auth_header(basic: &HttpBasicAuth) -> Result<HeaderValue> {
    let encoded = STANDARD.encode(basic.credential_pair());
    let mut value = HeaderValue::from_str(&format!("{BASIC_AUTH_PREFIX}{encoded}"))
        .config_context("Invalid HTTP Basic credentials")?;
    value.set_sensitive(true);
    Ok(value)
}

/// Read every certificate from a PEM bundle
fn load_root_certificates(path: &Path) -> Result<Vec<Certificate>> {
    let pem = fs::read(path)
        .io_context(format!("Failed to read SSL context {}", path.display()))?;
    let certs = Certificate::from_pem_bundle(&pem)
        .config_context(format!("Invalid PEM bundle in {}", path.display()))?;
    if certs.is_empty() {
        return Err(Error::configuration(format!(
            "SSL context {} contains no certificates",
            path.display()
        )));
    }
    debug!(
        count = certs.len(),
        "Loaded root certificates from {}",
        path.display()
    );
    Ok(certs)
}
