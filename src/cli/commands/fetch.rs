//! Fetch command implementation

use clap::Args;

/// Arguments for the fetch command
#[derive(Args, Debug)]
pub struct FetchArgs {
    /// Name of the dashboard to fetch
    pub name: String,
}

impl FetchArgs {
    /// Execute the fetch command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let (_, session) = super::connect(config_path).await?;

        let result = session.get_dashboard(&self.name).await?;
        println!("{}", serde_json::to_string_pretty(&result)?);
        Ok(0)
    }
}
