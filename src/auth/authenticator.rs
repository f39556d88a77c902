//! Authenticator implementation
//!
//! Applies the configured scheme to outbound requests. All supported schemes
//! are static header constructions; there is no token refresh or caching.

use super::types::AuthConfig;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use reqwest::RequestBuilder;

/// Applies authentication to HTTP requests
#[derive(Debug, Clone)]
pub struct Authenticator {
    config: AuthConfig,
}

impl Authenticator {
    /// Create a new authenticator with the given config
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    /// Apply authentication to a request builder
    pub fn apply(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.config {
            AuthConfig::None => req,
            AuthConfig::Basic { username, password } => req.basic_auth(username, Some(password)),
            AuthConfig::Bearer { token } => req.bearer_auth(token),
            AuthConfig::LegacyBearer { username, password } => {
                req.bearer_auth(encode_credentials(username, password))
            }
        }
    }

    /// The `Authorization` header value this config produces, if any
    ///
    /// `Basic` is rendered here exactly as `reqwest::RequestBuilder::basic_auth`
    /// renders it, so tests can assert on the wire shape for every scheme.
    pub fn header_value(&self) -> Option<String> {
        match &self.config {
            AuthConfig::None => None,
            AuthConfig::Basic { username, password } => Some(format!(
                "Basic {}",
                encode_credentials(username, password)
            )),
            AuthConfig::Bearer { token } => Some(format!("Bearer {token}")),
            AuthConfig::LegacyBearer { username, password } => Some(format!(
                "Bearer {}",
                encode_credentials(username, password)
            )),
        }
    }
}

/// Base64-encode colon-joined credentials
fn encode_credentials(username: &str, password: &str) -> String {
    BASE64.encode(format!("{username}:{password}"))
}
