//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{
    FeeService, ReportService, ReportSettings, StudentService, SubjectService, UserService,
};
use crate::domain::repositories::DocumentStore;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService<dyn DocumentStore>>,
    pub student_service: Arc<StudentService<dyn DocumentStore>>,
    pub subject_service: Arc<SubjectService<dyn DocumentStore>>,
    pub fee_service: Arc<FeeService<dyn DocumentStore>>,
    pub report_service: Arc<ReportService<dyn DocumentStore>>,
    pub store: Arc<dyn DocumentStore>,
}

impl AppState {
    /// Wires every service to the same document store.
    pub fn new(store: Arc<dyn DocumentStore>, settings: ReportSettings) -> Self {
        Self {
            user_service: Arc::new(UserService::new(store.clone())),
            student_service: Arc::new(StudentService::new(store.clone())),
            subject_service: Arc::new(SubjectService::new(store.clone())),
            fee_service: Arc::new(FeeService::new(store.clone())),
            report_service: Arc::new(ReportService::new(store.clone(), settings)),
            store,
        }
    }
}
