//! Dependency Injection - Registrar and Composition Root
//!
//! The Zabbix client is constructed once during bootstrap and handed out as an
//! `Arc` to every component that asks for it.
//!
//! ```text
//! AppConfig → init_app() → ClientRegistrar (write-once) → ZabbixClientHandle
//!                                   ↑
//!                          AppContext::zabbix()
//! ```
//!
//! ## Key Principles
//!
//! - **Explicit injection**: consumers receive the handle or the context, there
//!   is no global registry
//! - **Single construction**: the registrar builds the client at most once
//! - **Fail fast**: resolving before registration is an error, never a
//!   half-built client

pub mod bootstrap;
pub mod handles;
pub mod registrar;

pub use bootstrap::{AppContext, init_app};
pub use handles::{ZabbixApiHandle, ZabbixClientHandle};
pub use registrar::ClientRegistrar;
