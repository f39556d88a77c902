//! Runtime settings
//!
//! Settings are loaded from a YAML file. Credential fields may reference
//! environment variables as `${VAR}` so secrets stay out of the file; the
//! reference is resolved at load time and a missing variable is a
//! configuration error, not an empty credential.

use crate::auth::AuthConfig;
use crate::error::{Error, Result};
use crate::http::ClientConfig;
use crate::sync::DEFAULT_PAGE_SIZE;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_timeout_secs() -> u64 {
    15 * 60
}

fn default_state_path() -> PathBuf {
    PathBuf::from("ams-sync-state.json")
}

/// Complete runtime settings for the sync binary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Base URL of the API host
    pub base_url: String,

    /// Authentication configuration
    #[serde(default)]
    pub auth: AuthConfig,

    /// Page size requested via `$top`
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Per-request transport timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Path of the bookmark state file
    #[serde(default = "default_state_path")]
    pub state_path: PathBuf,

    /// Optional user agent override
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Settings {
    /// Load settings from a YAML file, resolving `${VAR}` credential
    /// references against the environment
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            Error::config(format!(
                "Failed to read settings file {}: {e}",
                path.as_ref().display()
            ))
        })?;
        Self::from_str(&contents)
    }

    /// Parse settings from a YAML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(contents: &str) -> Result<Self> {
        let mut settings: Settings = serde_yaml::from_str(contents)?;
        settings.resolve_env()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Build the HTTP client config these settings describe
    pub fn client_config(&self) -> ClientConfig {
        let mut builder = ClientConfig::builder()
            .base_url(self.base_url.clone())
            .timeout(Duration::from_secs(self.timeout_secs));
        if let Some(agent) = &self.user_agent {
            builder = builder.user_agent(agent.clone());
        }
        builder.build()
    }

    /// Resolve `${VAR}` references in credential fields
    fn resolve_env(&mut self) -> Result<()> {
        self.auth = match std::mem::take(&mut self.auth) {
            AuthConfig::Basic { username, password } => AuthConfig::Basic {
                username: expand_env(&username)?,
                password: expand_env(&password)?,
            },
            AuthConfig::LegacyBearer { username, password } => AuthConfig::LegacyBearer {
                username: expand_env(&username)?,
                password: expand_env(&password)?,
            },
            AuthConfig::Bearer { token } => AuthConfig::Bearer {
                token: expand_env(&token)?,
            },
            AuthConfig::None => AuthConfig::None,
        };
        Ok(())
    }

    /// Validate settings values
    fn validate(&self) -> Result<()> {
        url::Url::parse(&self.base_url)?;
        if self.page_size == 0 {
            return Err(Error::invalid_value("page_size", "must be positive"));
        }
        if self.timeout_secs == 0 {
            return Err(Error::invalid_value("timeout_secs", "must be positive"));
        }
        Ok(())
    }
}

/// Expand a `${VAR}` environment reference; plain values pass through
fn expand_env(value: &str) -> Result<String> {
    let Some(name) = value.strip_prefix("${").and_then(|v| v.strip_suffix('}')) else {
        return Ok(value.to_string());
    };
    std::env::var(name).map_err(|_| Error::missing_field(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const MINIMAL: &str = "base_url: https://api.ams.example.org\n";

    #[test]
    fn test_minimal_settings_defaults() {
        let settings = Settings::from_str(MINIMAL).unwrap();
        assert_eq!(settings.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(settings.timeout_secs, 900);
        assert_eq!(settings.state_path, PathBuf::from("ams-sync-state.json"));
        assert!(settings.auth.is_none());
    }

    #[test]
    fn test_full_settings() {
        let yaml = r"
base_url: https://api.ams.example.org
auth:
  type: legacy_bearer
  username: alice
  password: s3cret
page_size: 25
timeout_secs: 60
state_path: /var/lib/ams/state.json
user_agent: ams-sync-test
";
        let settings = Settings::from_str(yaml).unwrap();
        assert_eq!(settings.page_size, 25);
        assert_eq!(settings.timeout_secs, 60);
        assert_eq!(settings.user_agent.as_deref(), Some("ams-sync-test"));

        let config = settings.client_config();
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.user_agent, "ams-sync-test");
    }

    #[test]
    fn test_env_reference_resolution() {
        std::env::set_var("AMS_SYNC_TEST_PASSWORD", "from-env");
        let yaml = r"
base_url: https://api.ams.example.org
auth:
  type: basic
  username: alice
  password: ${AMS_SYNC_TEST_PASSWORD}
";
        let settings = Settings::from_str(yaml).unwrap();
        match settings.auth {
            AuthConfig::Basic { password, .. } => assert_eq!(password, "from-env"),
            other => panic!("unexpected auth: {other:?}"),
        }
        std::env::remove_var("AMS_SYNC_TEST_PASSWORD");
    }

    #[test]
    fn test_missing_env_reference_is_config_error() {
        let yaml = r"
base_url: https://api.ams.example.org
auth:
  type: basic
  username: alice
  password: ${AMS_SYNC_TEST_UNSET_VARIABLE}
";
        let err = Settings::from_str(yaml).unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::Config);
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let err = Settings::from_str("base_url: not a url\n").unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::Config);
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let yaml = "base_url: https://api.ams.example.org\npage_size: 0\n";
        let err = Settings::from_str(yaml).unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::Config);
    }
}
