//! Command implementations
//!
//! Each command builds a [`Session`](crate::client::Session) from the
//! loaded configuration, logs in, and performs one dashboard operation.

pub mod delete;
pub mod fetch;
pub mod publish;
pub mod validate;

use crate::client::Session;
use crate::config::{load_config, DashkitConfig};

/// Loads the configuration and opens a logged-in session
///
/// Shared preamble of every network-touching command.
pub(crate) async fn connect(config_path: &str) -> anyhow::Result<(DashkitConfig, Session)> {
    let config = load_config(config_path)?;
    let session = Session::new(config.grafana.clone())?;
    session.login().await?;
    Ok((config, session))
}
