// dashkit - Grafana dashboard client
// Copyright (c) 2025 Dashkit Contributors
// Licensed under the MIT License

//! # dashkit - Grafana dashboard client
//!
//! dashkit is a client library (and small CLI) for a Grafana-compatible
//! dashboard-visualization service. It authenticates a cookie-based user
//! session, builds dashboard documents — rows, graph panels, raw query
//! targets, templating variables — with sensible defaults, and performs
//! create/read/update/delete operations against the service's JSON HTTP
//! API.
//!
//! ## Architecture
//!
//! dashkit follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`client`] - Authenticated session, HTTP transport and facade
//! - [`domain`] - Dashboard document model and error types
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use dashkit::client::Session;
//! use dashkit::config::load_config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("dashkit.toml")?;
//!
//!     let session = Session::new(config.grafana)?;
//!     session.login().await?;
//!
//!     let dashboard = session
//!         .create_dashboard("cpu overview")
//!         .add_row("load (15m)", r#"SELECT mean("last15min") FROM "cpu.load""#)
//!         .with_templating(&["host"], "cpu.load", "influx");
//!
//!     // Replace any existing dashboard with the same slug
//!     session.update_dashboard(&dashboard, true).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Document model
//!
//! Dashboards are plain values: constructors fill in the service's
//! defaulting rules ([`domain::Dashboard::new`] and friends), mutators
//! return modified copies, and the session never tracks a document —
//! updates are whole-document overwrites keyed by the service-assigned
//! slug.
//!
//! ## Error Handling
//!
//! Operations return [`domain::Result`]. Service failures carry the
//! uniform [`domain::GrafanaError`] — the HTTP status and server-supplied
//! message, or a status of 0 when the request never left the host:
//!
//! ```rust,no_run
//! use dashkit::domain::DashkitError;
//!
//! # async fn example(session: dashkit::client::Session) {
//! match session.get_dashboard("cpu-overview").await {
//!     Ok(result) => println!("slug: {}", result.meta.slug),
//!     Err(DashkitError::Grafana(e)) => eprintln!("HTTP {}: {}", e.status(), e.description()),
//!     Err(e) => eprintln!("{e}"),
//! }
//! # }
//! ```

pub mod cli;
pub mod client;
pub mod config;
pub mod domain;
pub mod logging;
