//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod fees;
pub mod health;
pub mod reports;
pub mod students;
pub mod subjects;
pub mod users;

pub use fees::{create_fee_handler, delete_fee_handler, fee_list_handler, update_fee_handler};
pub use health::health_handler;
pub use reports::{
    activity_report_handler, dashboard_report_handler, fee_report_handler,
    overview_report_handler, student_report_handler, subject_report_handler,
};
pub use students::{
    create_student_handler, delete_student_handler, student_list_handler, update_student_handler,
};
pub use subjects::{
    create_subject_handler, delete_subject_handler, subject_list_handler, update_subject_handler,
};
pub use users::{create_user_handler, delete_user_handler, update_user_handler, user_list_handler};
