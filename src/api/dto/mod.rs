//! Data Transfer Objects for API requests and responses.
//!
//! Request DTOs are validated with `validator` before reaching a service.
//! Response items use snake_case field names regardless of how the store
//! names them.

pub mod fees;
pub mod health;
pub mod reports;
pub mod students;
pub mod subjects;
pub mod users;
