//! Auth configuration types

use serde::{Deserialize, Serialize};

/// Authentication configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AuthConfig {
    /// No authentication required
    #[default]
    None,

    /// HTTP Basic authentication
    Basic {
        /// Username
        username: String,
        /// Password
        password: String,
    },

    /// Bearer token authentication
    Bearer {
        /// The bearer token
        token: String,
    },

    /// Legacy AMS scheme: Base64-encoded `username:password` sent under the
    /// `Bearer` label. Wire-compatible with the upstream service; not
    /// standard Basic auth despite the Base64 credential encoding.
    LegacyBearer {
        /// Username
        username: String,
        /// Password
        password: String,
    },
}

impl AuthConfig {
    /// Create a Basic auth config
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Basic {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Create a Bearer token config
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::Bearer {
            token: token.into(),
        }
    }

    /// Create a legacy AMS bearer config
    pub fn legacy_bearer(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::LegacyBearer {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Whether this config carries credentials
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}
