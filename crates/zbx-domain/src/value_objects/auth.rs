//! Authentication value objects
//!
//! The Zabbix API accepts either a pre-issued API token or a username and
//! password pair exchanged for a session. A separate, optional HTTP Basic
//! credential pair may guard the web server in front of the API.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const REDACTED: &str = "***";

/// How the client authenticates against the Zabbix API
#[derive(Clone, PartialEq, Eq)]
pub enum AuthMode {
    /// Pre-issued API token, no login round-trip
    Token {
        /// The API token
        token: String,
    },
    /// Username and password login
    Credentials {
        /// Login username
        username: String,
        /// Login password
        password: String,
    },
}

impl AuthMode {
    /// Select the authentication mode from configuration values
    ///
    /// A non-empty token always wins and makes the credentials irrelevant.
    /// Without a token, both username and password must be non-empty.
    pub fn from_parts(token: Option<&str>, username: &str, password: &str) -> Result<Self> {
        if let Some(token) = token.filter(|t| !t.is_empty()) {
            return Ok(Self::Token {
                token: token.to_string(),
            });
        }

        if username.is_empty() || password.is_empty() {
            return Err(Error::authentication(
                "Username and password are required when no auth token is configured",
            ));
        }

        Ok(Self::Credentials {
            username: username.to_string(),
            password: password.to_string(),
        })
    }

    /// Discriminant without the secret material
    pub fn kind(&self) -> AuthKind {
        match self {
            Self::Token { .. } => AuthKind::Token,
            Self::Credentials { .. } => AuthKind::Credentials,
        }
    }

    /// Check if this is token based authentication
    pub fn is_token(&self) -> bool {
        matches!(self, Self::Token { .. })
    }
}

impl fmt::Debug for AuthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Token { .. } => f.debug_struct("Token").field("token", &REDACTED).finish(),
            Self::Credentials { username, .. } => f
                .debug_struct("Credentials")
                .field("username", username)
                .field("password", &REDACTED)
                .finish(),
        }
    }
}

/// Authentication mode discriminant, safe to print and serialize
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthKind {
    /// API token
    Token,
    /// Username and password
    Credentials,
}

impl fmt::Display for AuthKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Token => write!(f, "token"),
            Self::Credentials => write!(f, "credentials"),
        }
    }
}

/// HTTP Basic credentials sent with every request
///
/// Independent of the API login; used when the API sits behind a web server
/// that demands its own authentication.
#[derive(Clone, PartialEq, Eq)]
pub struct HttpBasicAuth {
    /// Basic auth username
    pub username: String,
    /// Basic auth password, may be absent
    pub password: Option<String>,
}

impl HttpBasicAuth {
    /// Build basic credentials when a non-empty username is configured
    pub fn from_parts(username: Option<&str>, password: Option<&str>) -> Option<Self> {
        let username = username.filter(|u| !u.is_empty())?;
        Some(Self {
            username: username.to_string(),
            password: password.filter(|p| !p.is_empty()).map(str::to_string),
        })
    }

    /// `username:password` pair as sent in the Basic scheme
    pub fn credential_pair(&self) -> String {
        format!(
            "{}:{}",
            self.username,
            self.password.as_deref().unwrap_or_default()
        )
    }
}

impl fmt::Debug for HttpBasicAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpBasicAuth")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| REDACTED))
            .finish()
    }
}
