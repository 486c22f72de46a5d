//! Recognized environment variables
//!
//! Single table of every `ZABBIX_*` variable the loader understands, the
//! configuration key it feeds and its default. The config template and the
//! `zbx env` command are both rendered from it.

use std::fmt::Write as _;

use zbx_domain::constants::{
    DEFAULT_ZABBIX_API_FILE, DEFAULT_ZABBIX_HOST, DEFAULT_ZABBIX_PASSWORD,
    DEFAULT_ZABBIX_USERNAME,
};

/// One recognized environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvOption {
    /// Variable name, e.g. `ZABBIX_HOST`
    pub name: &'static str,
    /// Key inside the `[zabbix]` section
    pub key: &'static str,
    /// Default value, `None` when the option is unset by default
    pub default: Option<&'static str>,
    /// Human readable meaning
    pub description: &'static str,
    /// Holds a secret that must not be echoed
    pub secret: bool,
}

/// All recognized environment variables
pub const ENV_OPTIONS: &[EnvOption] = &[
    EnvOption {
        name: "ZABBIX_HOST",
        key: "host",
        default: Some(DEFAULT_ZABBIX_HOST),
        description: "Base URL of the API endpoint",
        secret: false,
    },
    EnvOption {
        name: "ZABBIX_API_FILE",
        key: "api_file",
        default: Some(DEFAULT_ZABBIX_API_FILE),
        description: "Path segment appended to host",
        secret: false,
    },
    EnvOption {
        name: "ZABBIX_USERNAME",
        key: "username",
        default: Some(DEFAULT_ZABBIX_USERNAME),
        description: "Login username",
        secret: false,
    },
    EnvOption {
        name: "ZABBIX_PASSWORD",
        key: "password",
        default: Some(DEFAULT_ZABBIX_PASSWORD),
        description: "Login password",
        secret: true,
    },
    EnvOption {
        name: "ZABBIX_HTTP_USERNAME",
        key: "http_username",
        default: None,
        description: "HTTP Basic auth username",
        secret: false,
    },
    EnvOption {
        name: "ZABBIX_HTTP_PASSWORD",
        key: "http_password",
        default: None,
        description: "HTTP Basic auth password",
        secret: true,
    },
    EnvOption {
        name: "ZABBIX_AUTH_TOKEN",
        key: "auth_token",
        default: None,
        description: "Pre-issued token, bypasses login",
        secret: true,
    },
    EnvOption {
        name: "ZABBIX_SSL_CONTEXT",
        key: "ssl_context",
        default: None,
        description: "PEM bundle of additional trusted root certificates",
        secret: false,
    },
    EnvOption {
        name: "ZABBIX_CHECK_SSL",
        key: "check_ssl",
        default: Some("true"),
        description: "Whether to verify SSL certificate",
        secret: false,
    },
    EnvOption {
        name: "ZABBIX_TIMEOUT_SECS",
        key: "timeout_secs",
        default: Some("30"),
        description: "Per-request HTTP timeout in seconds",
        secret: false,
    },
];

/// Look up an option by variable name (case-insensitive)
pub fn find_env_option(name: &str) -> Option<&'static EnvOption> {
    ENV_OPTIONS
        .iter()
        .find(|opt| opt.name.eq_ignore_ascii_case(name))
}

/// Render the option table as aligned plain text
pub fn render_env_table() -> String {
    let name_width = ENV_OPTIONS
        .iter()
        .map(|o| o.name.len())
        .max()
        .unwrap_or_default()
        .max("Variable".len());
    let default_width = ENV_OPTIONS
        .iter()
        .map(|o| o.default.unwrap_or("(none)").len())
        .max()
        .unwrap_or_default()
        .max("Default".len());

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<name_width$}  {:<default_width$}  Meaning",
        "Variable", "Default"
    );
    for opt in ENV_OPTIONS {
        let _ = writeln!(
            out,
            "{:<name_width$}  {:<default_width$}  {}",
            opt.name,
            opt.default.unwrap_or("(none)"),
            opt.description
        );
    }
    out
}
