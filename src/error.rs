//! Error types for the sync client
//!
//! A failed sync run surfaces exactly one error to the caller, and the
//! caller's remediation differs by failure class: transport problems point at
//! network or host configuration, a rejected request points at credentials or
//! the server, and an undecodable payload points at contract drift. The
//! [`Error::kind`] classification keeps those three apart without string
//! matching.

use thiserror::Error;

/// The main error type for the sync client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    // ============================================================================
    // Decode Errors
    // ============================================================================
    #[error("Failed to decode response: {message}")]
    Decode { message: String },

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // State Errors
    // ============================================================================
    #[error("State error: {message}")]
    State { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

/// Broad failure classification, used by hosts to route remediation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Network-level failure: connection refused, DNS, timeout
    Transport,
    /// The remote rejected the request with a non-success status
    Remote,
    /// The response payload could not be decoded
    Decode,
    /// Local configuration problem
    Config,
    /// Bookmark store problem
    State,
    /// Anything else
    Other,
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Create an invalid config value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create a state error
    pub fn state(message: impl Into<String>) -> Self {
        Self::State {
            message: message.into(),
        }
    }

    /// Classify this error into one of the broad failure kinds
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Http(_) => ErrorKind::Transport,
            Error::HttpStatus { .. } => ErrorKind::Remote,
            Error::Decode { .. } | Error::JsonParse(_) => ErrorKind::Decode,
            Error::Config { .. }
            | Error::MissingConfigField { .. }
            | Error::InvalidConfigValue { .. }
            | Error::YamlParse(_)
            | Error::InvalidUrl(_) => ErrorKind::Config,
            Error::State { .. } | Error::Io(_) => ErrorKind::State,
            Error::Other(_) | Error::Anyhow(_) => ErrorKind::Other,
        }
    }

    /// Status code carried by a remote rejection, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias for the sync client
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("test message");
        assert_eq!(err.to_string(), "Configuration error: test message");

        let err = Error::missing_field("username");
        assert_eq!(err.to_string(), "Missing required config field: username");

        let err = Error::http_status(404, "Not found");
        assert_eq!(err.to_string(), "HTTP 404: Not found");
    }

    #[test]
    fn test_kind_classification() {
        assert_eq!(Error::http_status(500, "").kind(), ErrorKind::Remote);
        assert_eq!(Error::http_status(401, "").kind(), ErrorKind::Remote);
        assert_eq!(Error::decode("bad payload").kind(), ErrorKind::Decode);
        assert_eq!(Error::config("bad").kind(), ErrorKind::Config);
        assert_eq!(Error::missing_field("password").kind(), ErrorKind::Config);
        assert_eq!(Error::state("no file").kind(), ErrorKind::State);
        assert_eq!(Error::Other("misc".to_string()).kind(), ErrorKind::Other);
    }

    #[test]
    fn test_status_accessor() {
        assert_eq!(Error::http_status(503, "unavailable").status(), Some(503));
        assert_eq!(Error::decode("nope").status(), None);
    }

    #[test]
    fn test_json_parse_classifies_as_decode() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        assert_eq!(Error::from(parse_err).kind(), ErrorKind::Decode);
    }
}
