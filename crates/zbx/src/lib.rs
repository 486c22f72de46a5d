//! # ZBX
//!
//! Configuration and bootstrap for a shared Zabbix API client.
//!
//! Loads the Zabbix settings from defaults, an optional `zbx.toml` and
//! `ZABBIX_*` environment variables, builds one client and hands it to every
//! component that needs it.
//!
//! ## Example
//!
//! ```no_run
//! use zbx::infrastructure::{ConfigLoader, init_app};
//!
//! # fn main() -> zbx::Result<()> {
//! let context = init_app(ConfigLoader::new().load()?)?;
//! let client = context.zabbix()?;
//! println!("Talking to {}", client.endpoint());
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Error type, authentication value objects, `ZabbixApi` port
//! - `infrastructure` - Configuration, logging, client construction, bootstrap
//! - `cli` - The `zbx` command line

pub mod cli;

/// Domain layer - error type, value objects and ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use zbx_domain::*;
}

/// Infrastructure layer - configuration, client and bootstrap
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use zbx_infrastructure::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::*;

// Re-export the bootstrap entry point at the crate root
pub use infrastructure::{AppContext, ZabbixClient, init_app};
