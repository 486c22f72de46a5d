//! Publishable configuration template
//!
//! Renders `zbx.toml` with every recognized key at its default so a consuming
//! application can copy it into its configuration directory and edit it.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;
use zbx_domain::error::{Error, Result};

use super::env::{ENV_OPTIONS, find_env_option};
use super::types::{LoggingConfig, ZabbixConfig};
use crate::constants::{CONFIG_ENV_PREFIX, DEFAULT_CONFIG_FILENAME, ZABBIX_CONFIG_SECTION};
use crate::error_ext::ErrorContext;

const TEMPLATE_HEADER: &str = "\
# ZBX configuration
#
# Values below are the built-in defaults. Each [zabbix] key can be
# overridden by the environment variable named in its trailing comment.
# Precedence: defaults < this file < environment < programmatic overrides.

";

/// Render the configuration template
pub fn render_config_template() -> Result<String> {
    let zabbix = toml::to_string_pretty(&ZabbixConfig::default())
        .config_context("Failed to serialize Zabbix defaults")?;
    let logging = toml::to_string_pretty(&LoggingConfig::default())
        .config_context("Failed to serialize logging defaults")?;

    let mut out = String::from(TEMPLATE_HEADER);
    let _ = writeln!(out, "[{ZABBIX_CONFIG_SECTION}]");
    for line in zabbix.lines() {
        out.push_str(&annotate(line));
        out.push('\n');
    }
    for opt in ENV_OPTIONS.iter().filter(|o| o.default.is_none()) {
        let _ = writeln!(out, "# {} = \"\"  # {}", opt.key, opt.name);
    }

    out.push_str("\n[logging]\n");
    out.push_str(&logging);
    let _ = writeln!(
        out,
        "# file_output = \"logs/zbx.log\"  # daily rotation, alongside stdout"
    );
    Ok(out)
}

/// Append the environment variable name to a `key = value` line
fn annotate(line: &str) -> String {
    let key = line.split('=').next().unwrap_or_default().trim();
    match find_env_option(&format!("{CONFIG_ENV_PREFIX}_{key}")) {
        Some(opt) if !key.is_empty() => format!("{line}  # {}", opt.name),
        _ => line.to_string(),
    }
}

/// Write the template into `dir`, returning the written path
///
/// Refuses to overwrite an existing file unless `force` is set.
pub fn publish_config_template(dir: &Path, force: bool) -> Result<PathBuf> {
    let path = dir.join(DEFAULT_CONFIG_FILENAME);
    if path.exists() && !force {
        return Err(Error::io(format!(
            "{} already exists; pass --force to overwrite",
            path.display()
        )));
    }

    fs::create_dir_all(dir)
        .io_context(format!("Failed to create config directory {}", dir.display()))?;
    let contents = render_config_template()?;
    fs::write(&path, contents)
        .io_context(format!("Failed to write config template {}", path.display()))?;

    info!("Configuration template published to {}", path.display());
    Ok(path)
}
