//! Shared handle types

use std::sync::Arc;

use zbx_domain::ports::ZabbixApi;

use crate::client::ZabbixClient;

/// Shared handle to the concrete Zabbix client
pub type ZabbixClientHandle = Arc<ZabbixClient>;

/// Shared handle to the Zabbix client behind its port trait
pub type ZabbixApiHandle = Arc<dyn ZabbixApi>;
