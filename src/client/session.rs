//! Authenticated Grafana session
//!
//! A [`Session`] owns one HTTP client context (cookie store, TLS policy,
//! timeout) bound to a base URL and credentials. Dashboards are plain data
//! passed in and out of its operations by value; the cookie store is the
//! only session-scoped mutable state, filled in by [`Session::login`] and
//! attached transparently to every later request.

use reqwest::Method;
use secrecy::ExposeSecret;
use serde::Serialize;

use super::transport::Transport;
use crate::config::{GrafanaConfig, SecretString};
use crate::domain::{Dashboard, DashboardResult, Result};

/// Credentials posted to the login endpoint
#[derive(Serialize)]
struct UserInfo<'a> {
    user: &'a str,
    email: &'a str,
    password: &'a str,
}

/// Upload envelope for create/update requests
///
/// `overwrite` asks the service to replace an existing dashboard with the
/// same slug instead of rejecting the request as a conflict.
#[derive(Serialize)]
struct DashboardUpload<'a> {
    dashboard: &'a Dashboard,
    overwrite: bool,
}

/// One authenticated session against a Grafana-compatible service
///
/// A session is either unauthenticated (initial) or authenticated (after a
/// successful [`login`](Session::login)); an expired server-side session
/// surfaces as an HTTP error on the next operation, not as a distinct
/// local state. Operations never retry.
///
/// # Examples
///
/// ```no_run
/// use dashkit::client::Session;
/// use dashkit::config::GrafanaConfig;
///
/// # async fn example() -> dashkit::domain::Result<()> {
/// let session = Session::new(GrafanaConfig::default())?;
/// session.login().await?;
///
/// let dashboard = session
///     .create_dashboard("cpu overview")
///     .add_row("load", r#"SELECT mean("load") FROM "cpu""#);
/// session.update_dashboard(&dashboard, true).await?;
/// # Ok(())
/// # }
/// ```
pub struct Session {
    transport: Transport,
    base_url: String,
    username: String,
    password: SecretString,
}

impl Session {
    /// Creates a session with a fresh, empty cookie store
    ///
    /// The request timeout and TLS policy come from the configuration;
    /// certificate validation stays on unless the config explicitly opts
    /// out.
    ///
    /// # Errors
    ///
    /// Returns `DashkitError::Configuration` if the HTTP client context
    /// cannot be constructed.
    pub fn new(config: GrafanaConfig) -> Result<Self> {
        let transport = Transport::new(&config)?;
        Ok(Session {
            transport,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            username: config.username,
            password: config.password,
        })
    }

    /// Base URL this session is bound to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Authenticates against the service
    ///
    /// POSTs the credentials to `/login`; on success the session cookie
    /// lands in the cookie store and is attached to all later requests.
    /// Does not retry.
    ///
    /// # Errors
    ///
    /// Returns the uniform service error on rejection or transport
    /// failure.
    pub async fn login(&self) -> Result<()> {
        let url = format!("{}/login", self.base_url);
        let credentials = UserInfo {
            user: &self.username,
            email: "",
            password: self.password.expose_secret().as_ref(),
        };

        self.transport
            .request(Method::POST, &url, Some(&credentials))
            .await?;

        tracing::info!(user = %self.username, url = %self.base_url, "Logged in");
        Ok(())
    }

    /// Ends the session
    ///
    /// Placeholder: the contract is not yet defined. A real implementation
    /// would clear the cookie store; until then this is a no-op and the
    /// server-side session simply expires.
    pub fn logout(&self) {}

    /// Creates a default dashboard locally; no network call
    pub fn create_dashboard(&self, title: &str) -> Dashboard {
        Dashboard::new(title)
    }

    /// Returns a copy of `dashboard` with one more row/panel; no network call
    pub fn add_row_panel(&self, dashboard: &Dashboard, panel_title: &str, query: &str) -> Dashboard {
        dashboard.add_row(panel_title, query)
    }

    /// Returns a copy of `dashboard` with its templating replaced; no network call
    pub fn add_templating<S: AsRef<str>>(
        &self,
        dashboard: &Dashboard,
        tag_names: &[S],
        measurement: &str,
        datasource: &str,
    ) -> Dashboard {
        dashboard.with_templating(tag_names, measurement, datasource)
    }

    /// Creates or updates a dashboard on the service
    ///
    /// With `overwrite` set, the service replaces any existing dashboard
    /// with the same slug; without it, a same-title dashboard makes the
    /// service answer a conflict, surfaced as the uniform error.
    ///
    /// # Errors
    ///
    /// Returns the uniform service error on rejection or transport
    /// failure.
    pub async fn update_dashboard(&self, dashboard: &Dashboard, overwrite: bool) -> Result<()> {
        let url = format!("{}/api/dashboards/db", self.base_url);
        let upload = DashboardUpload {
            dashboard,
            overwrite,
        };

        self.transport
            .request(Method::POST, &url, Some(&upload))
            .await?;

        tracing::info!(title = %dashboard.title, overwrite, "Dashboard uploaded");
        Ok(())
    }

    /// Fetches a dashboard and its service-assigned metadata by name
    ///
    /// # Errors
    ///
    /// Returns the uniform service error if the exchange fails; a
    /// malformed response body propagates as a serialization error
    /// instead.
    pub async fn get_dashboard(&self, name: &str) -> Result<DashboardResult> {
        let url = format!("{}/api/dashboards/db/{}", self.base_url, name);
        let body = self.transport.request(Method::GET, &url, None::<&()>).await?;

        let result: DashboardResult = serde_json::from_slice(&body)?;
        tracing::debug!(name, slug = %result.meta.slug, "Dashboard fetched");
        Ok(result)
    }

    /// Deletes a dashboard by name
    ///
    /// The delete endpoint is keyed by the service-assigned slug, not the
    /// human-chosen name, so the dashboard is fetched first to resolve it.
    /// If that lookup fails, no DELETE is issued and the lookup's error is
    /// returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns the lookup's error, or the uniform service error for the
    /// DELETE itself.
    pub async fn delete_dashboard(&self, name: &str) -> Result<()> {
        let slug = self.get_dashboard(name).await?.meta.slug;

        let url = format!("{}/api/dashboards/db/{}", self.base_url, slug);
        self.transport
            .request(Method::DELETE, &url, None::<&()>)
            .await?;

        tracing::info!(name, slug = %slug, "Dashboard deleted");
        Ok(())
    }

    /// Provisions a datasource; placeholder integration point
    ///
    /// TODO: implement against the `/api/datasources` endpoint once the
    /// datasource document model is settled.
    pub fn create_data_source(&self) {}

    /// Removes a datasource; placeholder integration point
    pub fn delete_data_source(&self) {}
}
