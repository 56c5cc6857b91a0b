//! Domain error types
//!
//! This module defines the error hierarchy for dashkit. All errors are
//! domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main dashkit error type
///
/// This is the primary error type used throughout the crate. It wraps the
/// service-level [`GrafanaError`] and provides context for local failures.
#[derive(Debug, Error)]
pub enum DashkitError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Errors reported by the Grafana service or its transport
    #[error("Grafana error: {0}")]
    Grafana(#[from] GrafanaError),

    /// Serialization/deserialization errors
    ///
    /// A malformed JSON response body lands here, distinct from the uniform
    /// service error, so callers can tell a bad payload from a rejected
    /// request.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

/// Uniform error for one HTTP exchange with the Grafana service
///
/// Carries either the HTTP status code and server-supplied message, or a
/// local description when the request never reached the service. The
/// [`status`](GrafanaError::status) accessor reports 0 for the latter.
#[derive(Debug, Error)]
pub enum GrafanaError {
    /// The request could not be dispatched (connectivity, DNS, TLS)
    #[error("unable to perform the http request: {0}")]
    Transport(String),

    /// The service answered with a non-200 status
    ///
    /// `message` is the server's `{"message": ...}` envelope value, decoded
    /// best-effort; it is empty when the body carried no such envelope.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },
}

impl GrafanaError {
    /// HTTP status code of the failure, or 0 for transport-level failures
    pub fn status(&self) -> u16 {
        match self {
            GrafanaError::Transport(_) => 0,
            GrafanaError::Http { status, .. } => *status,
        }
    }

    /// Human-readable failure description
    ///
    /// The server-supplied message for HTTP failures, the local description
    /// otherwise.
    pub fn description(&self) -> &str {
        match self {
            GrafanaError::Transport(msg) => msg,
            GrafanaError::Http { message, .. } => message,
        }
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for DashkitError {
    fn from(err: std::io::Error) -> Self {
        DashkitError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for DashkitError {
    fn from(err: serde_json::Error) -> Self {
        DashkitError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for DashkitError {
    fn from(err: toml::de::Error) -> Self {
        DashkitError::Configuration(format!("TOML parse error: {err}"))
    }
}
