//! Document store implementations.
//!
//! - [`MemoryDocumentStore`] - In-memory collections, optionally persisted to a JSON file

pub mod memory_store;

pub use memory_store::MemoryDocumentStore;
