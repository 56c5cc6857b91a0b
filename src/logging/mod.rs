//! Logging and observability
//!
//! Structured console logging with configurable log levels via `tracing`.
//! `RUST_LOG` takes precedence over the configured level when set.
//!
//! # Example
//!
//! ```no_run
//! use dashkit::logging::init_logging;
//!
//! init_logging("info").expect("Failed to initialize logging");
//!
//! tracing::info!("Client started");
//! tracing::error!(error = "something went wrong", "Error occurred");
//! ```

use crate::domain::{DashkitError, Result};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Initialize the logging system
///
/// Sets up a console subscriber filtered to the given level for this
/// crate, unless `RUST_LOG` overrides it.
///
/// # Errors
///
/// Returns an error if the level string is not one of trace, debug, info,
/// warn, error, or if a global subscriber is already installed.
pub fn init_logging(log_level_str: &str) -> Result<()> {
    let log_level = parse_log_level(log_level_str)?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("dashkit={}", log_level)));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .try_init()
        .map_err(|e| DashkitError::Configuration(format!("Failed to initialize logging: {e}")))?;

    Ok(())
}

/// Parse log level from string
fn parse_log_level(level_str: &str) -> Result<Level> {
    match level_str.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        other => Err(DashkitError::Configuration(format!(
            "Invalid log level '{other}'. Must be one of: trace, debug, info, warn, error"
        ))),
    }
}
