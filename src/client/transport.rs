//! HTTP transport
//!
//! One request/response exchange with the Grafana service. The transport
//! owns the `reqwest::Client` — connection pool plus cookie store — so the
//! session cookie obtained at login rides along on every later request.
//!
//! Failure classification:
//! - the request could not be dispatched at all →
//!   [`GrafanaError::Transport`] (status 0)
//! - the service answered anything but 200 → [`GrafanaError::Http`] with
//!   the status and the server's `{"message"}` envelope, decoded
//!   best-effort
//!
//! On success the body is read to completion before returning, so the
//! connection is released back to the pool on every exit path — including
//! a later decode failure in the caller.

use bytes::Bytes;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::GrafanaConfig;
use crate::domain::errors::{DashkitError, GrafanaError};

/// The json error envelope the service attaches to failed requests
#[derive(Debug, Deserialize)]
struct GrafanaMessage {
    #[serde(default)]
    message: String,
}

/// HTTP client context shared by all operations of one session
#[derive(Debug)]
pub(crate) struct Transport {
    http: Client,
}

impl Transport {
    /// Builds the client context from configuration
    ///
    /// The cookie store starts empty; certificate validation is disabled
    /// only when the config explicitly opts in.
    ///
    /// # Errors
    ///
    /// Returns `DashkitError::Configuration` if the underlying client
    /// cannot be constructed.
    pub fn new(config: &GrafanaConfig) -> Result<Self, DashkitError> {
        let mut builder = Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(config.timeout_seconds));

        if config.tls_accept_invalid_certs {
            tracing::warn!("TLS certificate validation disabled by configuration");
            builder = builder.danger_accept_invalid_certs(true);
        }

        let http = builder.build().map_err(|e| {
            DashkitError::Configuration(format!("Failed to build HTTP client: {e}"))
        })?;

        Ok(Self { http })
    }

    /// Performs one JSON exchange and returns the raw success payload
    ///
    /// # Errors
    ///
    /// Returns the uniform [`GrafanaError`]: `Transport` when the request
    /// never reached the service, `Http` for any non-200 answer.
    pub async fn request<B>(
        &self,
        method: Method,
        url: &str,
        body: Option<&B>,
    ) -> Result<Bytes, GrafanaError>
    where
        B: Serialize + ?Sized,
    {
        tracing::debug!(method = %method, url = %url, "Dispatching request");

        let mut request = self
            .http
            .request(method, url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| GrafanaError::Transport(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            let message = decode_message(&response.bytes().await.unwrap_or_default());
            tracing::warn!(status = status.as_u16(), message = %message, url = %url, "Request rejected by service");
            return Err(GrafanaError::Http {
                status: status.as_u16(),
                message,
            });
        }

        response
            .bytes()
            .await
            .map_err(|e| GrafanaError::Transport(e.to_string()))
    }
}

/// Best-effort extraction of the `{"message"}` envelope from an error body
fn decode_message(body: &[u8]) -> String {
    serde_json::from_slice::<GrafanaMessage>(body)
        .map(|m| m.message)
        .unwrap_or_default()
}
