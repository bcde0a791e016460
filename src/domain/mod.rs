//! Domain layer containing entities, the store contract, and report logic.
//!
//! # Architecture
//!
//! - [`entities`] - Records held in the document store
//! - [`document`] - Raw documents, collections, and decoding helpers
//! - [`repositories`] - The [`repositories::DocumentStore`] contract
//! - [`reporting`] - Pure aggregation functions behind every report
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - The store contract is implemented by the infrastructure layer
//! - Aggregation never performs I/O; services fetch first, then aggregate

pub mod document;
pub mod entities;
pub mod reporting;
pub mod repositories;
