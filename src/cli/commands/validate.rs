//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the dashkit configuration file.

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // load_config validates on load
        let config = match load_config(config_path) {
            Ok(c) => {
                println!("✅ Configuration is valid");
                c
            }
            Err(e) => {
                println!("❌ Invalid configuration");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Grafana: {}", config.grafana.base_url);
        println!("  Username: {}", config.grafana.username);
        println!("  Timeout: {}s", config.grafana.timeout_seconds);
        println!(
            "  TLS verification: {}",
            if config.grafana.tls_accept_invalid_certs {
                "DISABLED (accepting invalid certificates)"
            } else {
                "enabled"
            }
        );
        if let Some(ref dashboard) = config.dashboard {
            println!(
                "  Dashboard: '{}' with {} panel(s), {} template tag(s)",
                dashboard.title,
                dashboard.panels.len(),
                dashboard.template_tags.len()
            );
        } else {
            println!("  Dashboard: none configured (publish unavailable)");
        }

        Ok(0)
    }
}
