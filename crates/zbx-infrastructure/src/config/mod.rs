//! Configuration
//!
//! Typed configuration for the Zabbix client and logging, loaded through a
//! layered figment pipeline.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`types`] | `AppConfig`, `ZabbixConfig`, `LoggingConfig` |
//! | [`loader`] | Layered loader and programmatic builder |
//! | [`env`] | Table of recognized environment variables |
//! | [`template`] | Publishable configuration template |

pub mod env;
pub mod loader;
pub mod template;
pub mod types;

pub use env::{ENV_OPTIONS, EnvOption};
pub use loader::{ConfigBuilder, ConfigLoader};
pub use template::{publish_config_template, render_config_template};
pub use types::{AppConfig, LoggingConfig, ZabbixConfig};
