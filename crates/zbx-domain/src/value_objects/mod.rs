//! Value objects
//!
//! Immutable values derived from the client configuration.

pub mod auth;

pub use auth::{AuthKind, AuthMode, HttpBasicAuth};
