//! Collaborator-facing client facade
//!
//! Downstream job schedulers talk to dashkit through this thin wrapper
//! rather than the [`Session`] directly. Its operations are keyed by
//! caller-defined [`Job`]/[`View`] identifiers that live outside the
//! dashboard document model; how they map onto the session contract is not
//! yet defined, so the bodies below are inert stubs kept only as
//! integration points.

use super::session::Session;
use crate::config::GrafanaConfig;
use crate::domain::Result;

/// A caller-defined job identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub name: String,
}

/// A caller-defined view identifier within a job
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub name: String,
}

/// Facade over a [`Session`] for job-keyed dashboard management
pub struct Client {
    pub session: Session,
}

impl Client {
    /// Creates a facade with its own session
    ///
    /// # Errors
    ///
    /// Returns `DashkitError::Configuration` if the session cannot be
    /// constructed.
    pub fn new(config: GrafanaConfig) -> Result<Self> {
        Ok(Client {
            session: Session::new(config)?,
        })
    }

    /// Publishes the dashboard for a job's view and returns its panel URL
    ///
    /// Integration point; mapping onto the session contract is not yet
    /// defined.
    pub async fn update_dashboard(&self, _job: &Job, _view: &View) -> Result<String> {
        Ok(String::new())
    }

    /// Removes a view's panel from the job's dashboard
    ///
    /// Integration point; mapping onto the session contract is not yet
    /// defined.
    pub async fn delete_panel(&self, _job: &Job, _view: &View) -> Result<()> {
        Ok(())
    }

    /// Removes a job's dashboard
    ///
    /// Integration point; mapping onto the session contract is not yet
    /// defined.
    pub async fn delete_dashboard(&self, _job: &Job) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_facade_stubs_return_defaults() {
        let client = Client::new(GrafanaConfig::default()).unwrap();
        let job = Job {
            name: "nightly-etl".to_string(),
        };
        let view = View {
            name: "throughput".to_string(),
        };

        assert_eq!(client.update_dashboard(&job, &view).await.unwrap(), "");
        assert!(client.delete_panel(&job, &view).await.is_ok());
        assert!(client.delete_dashboard(&job).await.is_ok());
    }

    #[test]
    fn test_facade_owns_a_session() {
        let client = Client::new(GrafanaConfig::default()).unwrap();
        assert_eq!(client.session.base_url(), "http://localhost:3000");
    }
}
