//! Configuration schema types
//!
//! This module defines the configuration structure for dashkit.

use crate::config::{secret_string, SecretString};
use serde::Deserialize;
use url::Url;

/// Main dashkit configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Deserialize)]
pub struct DashkitConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Grafana service connection and credentials
    pub grafana: GrafanaConfig,

    /// Dashboard published by the `publish` command (optional for
    /// fetch/delete-only use)
    #[serde(default)]
    pub dashboard: Option<DashboardSpec>,
}

impl DashkitConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.grafana.validate()?;
        if let Some(ref dashboard) = self.dashboard {
            dashboard.validate()?;
        }
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

/// Grafana service configuration
#[derive(Debug, Clone, Deserialize)]
pub struct GrafanaConfig {
    /// Base URL of the Grafana service, e.g. `http://localhost:3000`
    pub base_url: String,

    /// Username for the login endpoint
    pub username: String,

    /// Password for the login endpoint
    /// Stored securely in memory and automatically zeroized on drop
    #[serde(default = "default_password")]
    pub password: SecretString,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// Accept invalid TLS certificates (self-signed deployments)
    ///
    /// Off by default; enabling this disables certificate validation for
    /// every request of the session, so it must be an explicit choice.
    #[serde(default)]
    pub tls_accept_invalid_certs: bool,
}

impl Default for GrafanaConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            username: "admin".to_string(),
            password: default_password(),
            timeout_seconds: default_timeout_seconds(),
            tls_accept_invalid_certs: false,
        }
    }
}

impl GrafanaConfig {
    fn validate(&self) -> Result<(), String> {
        let url = Url::parse(&self.base_url)
            .map_err(|e| format!("Invalid grafana.base_url '{}': {}", self.base_url, e))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(format!(
                "Invalid grafana.base_url scheme '{}': must be http or https",
                url.scheme()
            ));
        }
        if self.username.is_empty() {
            return Err("grafana.username must not be empty".to_string());
        }
        if self.timeout_seconds == 0 {
            return Err("grafana.timeout_seconds must be greater than 0".to_string());
        }
        Ok(())
    }
}

/// Declarative description of the dashboard the CLI publishes
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardSpec {
    /// Dashboard title
    pub title: String,

    /// Measurement the template variables draw their tag values from
    pub measurement: String,

    /// Datasource name the template variables query
    pub datasource: String,

    /// Tags to expose as template variables
    #[serde(default)]
    pub template_tags: Vec<String>,

    /// One row with one graph panel is created per entry
    pub panels: Vec<PanelSpec>,
}

impl DashboardSpec {
    fn validate(&self) -> Result<(), String> {
        if self.title.is_empty() {
            return Err("dashboard.title must not be empty".to_string());
        }
        if self.panels.is_empty() {
            return Err("dashboard.panels must contain at least one panel".to_string());
        }
        for (i, panel) in self.panels.iter().enumerate() {
            if panel.query.is_empty() {
                return Err(format!("dashboard.panels[{i}].query must not be empty"));
            }
        }
        Ok(())
    }
}

/// One panel of the published dashboard
#[derive(Debug, Clone, Deserialize)]
pub struct PanelSpec {
    /// Panel title
    pub title: String,

    /// Raw query the panel graphs
    pub query: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_password() -> SecretString {
    secret_string(String::new())
}

fn default_timeout_seconds() -> u64 {
    5
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> DashkitConfig {
        DashkitConfig {
            application: ApplicationConfig::default(),
            grafana: GrafanaConfig::default(),
            dashboard: Some(DashboardSpec {
                title: "demo".to_string(),
                measurement: "cpu.load".to_string(),
                datasource: "influx".to_string(),
                template_tags: vec!["host".to_string()],
                panels: vec![PanelSpec {
                    title: "p1".to_string(),
                    query: "SELECT 1".to_string(),
                }],
            }),
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_default_timeout_is_five_seconds() {
        assert_eq!(GrafanaConfig::default().timeout_seconds, 5);
    }

    #[test]
    fn test_tls_validation_on_by_default() {
        assert!(!GrafanaConfig::default().tls_accept_invalid_certs);
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        let mut config = valid_config();
        config.application.log_level = "verbose".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.contains("Invalid log_level"));
    }

    #[test]
    fn test_non_http_base_url_rejected() {
        let mut config = valid_config();
        config.grafana.base_url = "ftp://example.com".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.contains("must be http or https"));
    }

    #[test]
    fn test_unparseable_base_url_rejected() {
        let mut config = valid_config();
        config.grafana.base_url = "not a url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = valid_config();
        config.grafana.timeout_seconds = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_panels_rejected() {
        let mut config = valid_config();
        config.dashboard.as_mut().unwrap().panels.clear();
        let err = config.validate().unwrap_err();
        assert!(err.contains("at least one panel"));
    }

    #[test]
    fn test_missing_dashboard_section_allowed() {
        let mut config = valid_config();
        config.dashboard = None;
        assert!(config.validate().is_ok());
    }
}
