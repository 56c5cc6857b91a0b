//! Grafana service client
//!
//! This module provides the authenticated [`Session`] and its HTTP
//! transport, plus the collaborator-facing [`Client`] facade.
//!
//! The session model is deliberately small: one cookie-backed HTTP client
//! context per session, every operation a single synchronous exchange, no
//! retries, and dashboards passed by value — the session tracks no
//! documents.

mod transport;

pub mod facade;
pub mod session;

pub use facade::{Client, Job, View};
pub use session::Session;
