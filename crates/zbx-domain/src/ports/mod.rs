//! Port traits
//!
//! Abstractions the application depends on. Concrete implementations are
//! provided by `zbx-infrastructure` and injected at startup.

pub mod zabbix;

pub use zabbix::ZabbixApi;
