//! # School Admin
//!
//! Administrative backend for a school-management app, built with Axum over
//! a generic document store.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities, the document store contract,
//!   and pure aggregation functions
//! - **Application Layer** ([`application`]) - CRUD and report services
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory store with
//!   JSON file persistence
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - CRUD over users, students, subjects, and fees
//! - Dashboard, overview, subject, activity, fee, and enrollment reports,
//!   recomputed from the store on every request
//! - Admin CLI for reports and user creation
//!
//! ## Quick Start
//!
//! ```bash
//! export STORE_PATH="./data/school.json"  # Optional
//! cargo run
//! curl http://localhost:3000/api/reports/overview
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        FeeService, ReportService, ReportSettings, StudentService, SubjectService, UserService,
    };
    pub use crate::domain::document::{Collection, Document, Fields};
    pub use crate::domain::entities::{Fee, Role, Student, Subject, User};
    pub use crate::domain::repositories::DocumentStore;
    pub use crate::error::{AppError, StoreError};
    pub use crate::infrastructure::persistence::MemoryDocumentStore;
    pub use crate::state::AppState;
}
