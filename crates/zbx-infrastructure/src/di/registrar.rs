//! Client registrar
//!
//! Builds the Zabbix client from configuration and keeps the single instance
//! under its registration name. Registration happens once during bootstrap;
//! lookups may come from any task afterwards.

use std::sync::Arc;

use once_cell::sync::OnceCell;
use tracing::warn;
use zbx_domain::constants::ZABBIX_SERVICE_NAME;
use zbx_domain::error::{Error, Result};

use super::handles::{ZabbixApiHandle, ZabbixClientHandle};
use crate::client::ZabbixClient;
use crate::config::ZabbixConfig;
use crate::logging::log_client_registered;

/// Write-once holder of the Zabbix client
pub struct ClientRegistrar {
    name: &'static str,
    slot: OnceCell<ZabbixClientHandle>,
}

impl ClientRegistrar {
    /// Create an empty registrar under the default name
    pub fn new() -> Self {
        Self {
            name: ZABBIX_SERVICE_NAME,
            slot: OnceCell::new(),
        }
    }

    /// Registration name
    pub fn name(&self) -> &str {
        self.name
    }

    /// Construct the client and register it
    ///
    /// Construction errors propagate unchanged. When a client is already
    /// registered it is returned as-is and `config` is ignored.
    pub fn register(&self, config: ZabbixConfig) -> Result<ZabbixClientHandle> {
        if let Some(existing) = self.slot.get() {
            warn!(
                service = self.name,
                "Zabbix client already registered; ignoring new configuration"
            );
            return Ok(Arc::clone(existing));
        }

        let handle = self
            .slot
            .get_or_try_init(|| ZabbixClient::new(config).map(Arc::new))?;
        log_client_registered(
            self.name,
            handle.endpoint().as_str(),
            handle.auth_mode().kind(),
            handle.config().check_ssl,
        );
        Ok(Arc::clone(handle))
    }

    /// Return the registered client
    ///
    /// Fails with [`Error::NotRegistered`] before [`register`](Self::register)
    /// has succeeded.
    pub fn resolve(&self) -> Result<ZabbixClientHandle> {
        self.slot
            .get()
            .map(Arc::clone)
            .ok_or_else(|| Error::not_registered(self.name))
    }

    /// Return the registered client behind its port trait
    pub fn resolve_api(&self) -> Result<ZabbixApiHandle> {
        let client: ZabbixApiHandle = self.resolve()?;
        Ok(client)
    }

    /// Check if a client has been registered
    pub fn is_registered(&self) -> bool {
        self.slot.get().is_some()
    }
}

impl Default for ClientRegistrar {
    fn default() -> Self {
        Self::new()
    }
}
