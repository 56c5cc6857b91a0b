//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for dashkit using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// dashkit - Grafana dashboard client
#[derive(Parser, Debug)]
#[command(name = "dashkit")]
#[command(version, about, long_about = None)]
#[command(author = "Dashkit Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "dashkit.toml", env = "DASHKIT_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "DASHKIT_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the configured dashboard and upload it to the service
    Publish(commands::publish::PublishArgs),

    /// Fetch a dashboard by name and print it as JSON
    Fetch(commands::fetch::FetchArgs),

    /// Delete a dashboard by name
    Delete(commands::delete::DeleteArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),
}
