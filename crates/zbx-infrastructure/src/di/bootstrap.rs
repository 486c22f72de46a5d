//! Application bootstrap - composition root
//!
//! ## Usage
//!
//! ```rust,no_run
//! use zbx_infrastructure::config::ConfigLoader;
//! use zbx_infrastructure::di::init_app;
//!
//! # fn main() -> zbx_domain::Result<()> {
//! let context = init_app(ConfigLoader::new().load()?)?;
//!
//! // Hand the same client to every consumer
//! let client = context.zabbix()?;
//! println!("Zabbix endpoint: {}", client.endpoint());
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use tracing::info;
use zbx_domain::error::Result;

use super::handles::{ZabbixApiHandle, ZabbixClientHandle};
use super::registrar::ClientRegistrar;
use crate::config::AppConfig;

/// Application context with the registered Zabbix client
///
/// Cheap to clone; clones share the same registrar and client.
#[derive(Clone)]
pub struct AppContext {
    /// Application configuration
    pub config: Arc<AppConfig>,

    registrar: Arc<ClientRegistrar>,
}

impl AppContext {
    /// Get the Zabbix client
    pub fn zabbix(&self) -> Result<ZabbixClientHandle> {
        self.registrar.resolve()
    }

    /// Get the Zabbix client behind its port trait
    pub fn zabbix_api(&self) -> Result<ZabbixApiHandle> {
        self.registrar.resolve_api()
    }

    /// Get the registrar for injection into other components
    pub fn registrar(&self) -> Arc<ClientRegistrar> {
        Arc::clone(&self.registrar)
    }
}

/// Initialize the application context
///
/// Registers the Zabbix client from `config.zabbix`; any construction error
/// aborts startup.
pub fn init_app(config: AppConfig) -> Result<AppContext> {
    info!("Initializing ZBX application context");

    let registrar = Arc::new(ClientRegistrar::new());
    registrar.register(config.zabbix.clone())?;

    Ok(AppContext {
        config: Arc::new(config),
        registrar,
    })
}
