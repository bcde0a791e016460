//! Business logic services for the application layer.

mod crud;
pub mod fee_service;
pub mod report_service;
pub mod student_service;
pub mod subject_service;
pub mod user_service;

pub use fee_service::FeeService;
pub use report_service::{
    ActivityReport, DashboardReport, FeeSummary, OverviewReport, ReportService, ReportSettings,
    StudentSummary, SubjectStatistics,
};
pub use student_service::StudentService;
pub use subject_service::SubjectService;
pub use user_service::UserService;
