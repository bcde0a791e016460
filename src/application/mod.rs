//! Application layer services implementing business logic.
//!
//! Services consume the [`crate::domain::repositories::DocumentStore`]
//! contract and provide a clean API for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::user_service::UserService`] - User CRUD
//! - [`services::student_service::StudentService`] - Student CRUD
//! - [`services::subject_service::SubjectService`] - Subject CRUD
//! - [`services::fee_service::FeeService`] - Fee CRUD
//! - [`services::report_service::ReportService`] - Aggregate reports

pub mod services;
