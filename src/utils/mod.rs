//! Utility functions shared across layers.
//!
//! - [`id_generator`] - Random document identifiers

pub mod id_generator;
