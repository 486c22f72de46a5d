//! # Infrastructure Layer
//!
//! Everything needed to turn configuration into a ready-to-use Zabbix client.
//!
//! ## Module Categories
//!
//! ### Configuration
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Layered figment loader, option table and config template |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Client & DI
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | reqwest-backed Zabbix client construction |
//! | [`di`] | Registrar and application context (composition root) |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |

pub mod client;
pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod logging;

// Re-export commonly used types
pub use client::ZabbixClient;
pub use config::{AppConfig, ConfigLoader, LoggingConfig, ZabbixConfig};
pub use di::{AppContext, ClientRegistrar, ZabbixClientHandle, init_app};
pub use error_ext::ErrorContext;
