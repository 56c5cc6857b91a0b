//! Configuration management for dashkit.
//!
//! This module provides TOML-based configuration loading, parsing, and
//! validation.
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [grafana]
//! base_url = "http://localhost:3000"
//! username = "admin"
//! password = "${GRAFANA_PASSWORD}"
//! timeout_seconds = 5
//! # Only for self-signed development deployments:
//! # tls_accept_invalid_certs = true
//!
//! [dashboard]
//! title = "cpu overview"
//! measurement = "cpu.load"
//! datasource = "influx"
//! template_tags = ["host"]
//!
//! [[dashboard.panels]]
//! title = "load (15m)"
//! query = 'SELECT mean("last15min") FROM "cpu.load" WHERE $timeFilter GROUP BY time(1m) fill(null)'
//! ```
//!
//! Use `${VAR_NAME}` syntax for environment variable substitution;
//! configuration is validated on load.

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::load_config;
pub use schema::{ApplicationConfig, DashboardSpec, DashkitConfig, GrafanaConfig, PanelSpec};
pub use secret::{secret_string, SecretString, SecretValue};
