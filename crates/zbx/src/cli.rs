//! Command line interface

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use zbx_domain::error::Result;
use zbx_infrastructure::ErrorContext;
use zbx_infrastructure::config::env::render_env_table;
use zbx_infrastructure::config::{ConfigLoader, publish_config_template};
use zbx_infrastructure::di::init_app;
use zbx_infrastructure::logging::init_logging;

/// Command line interface for ZBX
#[derive(Parser, Debug)]
#[command(name = "zbx")]
#[command(about = "ZBX - Zabbix API client configuration and bootstrap")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write the configuration template into a directory
    Publish {
        /// Target directory
        #[arg(short, long, default_value = "config")]
        dir: PathBuf,

        /// Overwrite an existing zbx.toml
        #[arg(long)]
        force: bool,
    },

    /// List the recognized environment variables and their defaults
    Env,

    /// Load configuration, build the client and print its settings
    Show {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Install the tracing subscriber before loading
        #[arg(long)]
        verbose: bool,
    },
}

/// Execute a parsed command, writing human-readable output to `out`
pub fn run<W: Write>(cli: Cli, out: &mut W) -> Result<()> {
    match cli.command {
        Command::Publish { dir, force } => {
            let path = publish_config_template(&dir, force)?;
            writeln!(out, "Published {}", path.display()).io_context("Failed to write output")
        }
        Command::Env => out
            .write_all(render_env_table().as_bytes())
            .io_context("Failed to write output"),
        Command::Show { config, verbose } => show(config, verbose, out),
    }
}

fn show<W: Write>(config_path: Option<PathBuf>, verbose: bool, out: &mut W) -> Result<()> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = config_path {
        loader = loader.with_config_path(path);
    }
    let config = loader.load()?;
    if verbose {
        init_logging(&config.logging)?;
    }

    let context = init_app(config)?;
    let client = context.zabbix()?;
    let registrar = context.registrar();

    let basic = client
        .http_basic_auth()
        .map_or_else(|| "none".to_string(), |b| b.username.clone());
    let ssl_context = client.config().ssl_context.as_deref().unwrap_or("none");

    writeln!(out, "service:     {}", registrar.name())
        .and_then(|()| writeln!(out, "endpoint:    {}", client.endpoint()))
        .and_then(|()| writeln!(out, "auth:        {}", client.auth_mode().kind()))
        .and_then(|()| writeln!(out, "http basic:  {basic}"))
        .and_then(|()| writeln!(out, "check ssl:   {}", client.config().check_ssl))
        .and_then(|()| writeln!(out, "ssl context: {ssl_context}"))
        .and_then(|()| writeln!(out, "timeout:     {}s", client.config().timeout_secs))
        .io_context("Failed to write output")
}
