//! Infrastructure layer for external integrations.
//!
//! Provides the concrete [`crate::domain::repositories::DocumentStore`]
//! implementation used by the server and the admin CLI.

pub mod persistence;
