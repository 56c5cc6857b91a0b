//! Domain models and types for dashkit.
//!
//! This module contains the dashboard document model, the error taxonomy
//! and the crate-wide [`Result`] alias. Everything here is plain data:
//! constructing, copying and mutating documents never touches the network.
//!
//! # Overview
//!
//! - **Document model** ([`Dashboard`], [`Row`], [`Panel`], [`Target`],
//!   [`Templating`]) — value objects with exact wire-format serde keys
//! - **Error types** ([`DashkitError`], [`GrafanaError`])
//! - **Result type alias** ([`Result`])
//!
//! # Value semantics
//!
//! Mutators return modified copies rather than changing the receiver, so
//! two dashboards never alias each other's rows:
//!
//! ```
//! use dashkit::domain::Dashboard;
//!
//! let base = Dashboard::new("demo");
//! let grown = base.add_row("cpu", "SELECT 1");
//! assert!(base.rows.is_empty());
//! assert_eq!(grown.rows.len(), 1);
//! ```

pub mod dashboard;
pub mod errors;
pub mod result;
pub mod templating;

// Re-export commonly used types for convenience
pub use dashboard::{
    Dashboard, DashboardResult, Legend, Meta, Panel, QueryPart, Row, Target, Time, Timepicker,
    Tooltip, Xaxis, Yaxis,
};
pub use errors::{DashkitError, GrafanaError};
pub use result::Result;
pub use templating::{Template, TemplateCurrent, TemplateOption, Templating};
