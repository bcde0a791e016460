//! Data access contract for the domain layer.
//!
//! The document store is an external collaborator. This module defines the
//! four operations every screen relies on, plus a reachability probe.
//! Implementations live in `crate::infrastructure::persistence`; a mock is
//! generated via `mockall` for unit tests.

pub mod document_store;

pub use document_store::DocumentStore;

#[cfg(test)]
pub use document_store::MockDocumentStore;
