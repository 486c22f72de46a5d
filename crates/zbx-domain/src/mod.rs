//! # ZBX Domain Layer
//!
//! Core types shared by every ZBX crate: the error type, the value objects
//! derived from the Zabbix client configuration, and the port trait consumers
//! depend on instead of the concrete HTTP client.
//!
//! ## Module Categories
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Domain error type and `Result` alias |
//! | [`constants`] | Registration name and configuration defaults |
//! | [`value_objects`] | Authentication modes |
//! | [`ports`] | `ZabbixApi` port trait |

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use value_objects::{AuthKind, AuthMode, HttpBasicAuth};
