//! Delete command implementation

use clap::Args;

/// Arguments for the delete command
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Name of the dashboard to delete
    pub name: String,
}

impl DeleteArgs {
    /// Execute the delete command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let (_, session) = super::connect(config_path).await?;

        session.delete_dashboard(&self.name).await?;
        println!("✅ Deleted dashboard '{}'", self.name);
        Ok(0)
    }
}
