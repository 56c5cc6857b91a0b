//! Publish command implementation
//!
//! Builds the dashboard declared in the `[dashboard]` configuration
//! section — one row with one graph panel per `[[dashboard.panels]]`
//! entry, template variables from `template_tags` — and uploads it.

use anyhow::bail;
use clap::Args;

/// Arguments for the publish command
#[derive(Args, Debug)]
pub struct PublishArgs {
    /// Fail with a conflict instead of replacing an existing dashboard
    /// with the same slug
    #[arg(long)]
    pub no_overwrite: bool,
}

impl PublishArgs {
    /// Execute the publish command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let (config, session) = super::connect(config_path).await?;

        let Some(spec) = config.dashboard else {
            bail!("no [dashboard] section in {config_path}; nothing to publish");
        };

        let mut dashboard = session.create_dashboard(&spec.title);
        for panel in &spec.panels {
            dashboard = session.add_row_panel(&dashboard, &panel.title, &panel.query);
        }
        if !spec.template_tags.is_empty() {
            dashboard = session.add_templating(
                &dashboard,
                &spec.template_tags,
                &spec.measurement,
                &spec.datasource,
            );
        }

        session
            .update_dashboard(&dashboard, !self.no_overwrite)
            .await?;

        println!(
            "✅ Published dashboard '{}' ({} panel(s))",
            spec.title,
            spec.panels.len()
        );
        Ok(0)
    }
}
