//! Aggregate reports over the school's collections.
//!
//! Every report fetches the collections it needs concurrently, then runs the
//! pure functions of [`crate::domain::reporting`] over the snapshot. Nothing
//! is cached; each call recomputes from scratch.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::domain::document::{Collection, decode_all};
use crate::domain::entities::{Fee, Role, Student, Subject, User};
use crate::domain::reporting::{
    GroupCounts, active_within_window, average_per_group, count_by_field, count_by_field_or,
    dated_within_window, most_active_group, percentage_without_attribute, sum_by,
};
use crate::domain::repositories::DocumentStore;
use crate::error::{AppError, StoreError};

/// Tunables shared by all reports.
#[derive(Debug, Clone)]
pub struct ReportSettings {
    /// Days before "now" that count as recent activity.
    pub window_days: u32,
    /// Grouping key for records whose grouping field is absent.
    pub unspecified_label: String,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            window_days: 30,
            unspecified_label: "unspecified".to_string(),
        }
    }
}

/// Head counts for the admin dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardReport {
    pub total_users: usize,
    pub total_students: usize,
    pub total_teachers: usize,
    pub total_guardians: usize,
    pub total_admins: usize,
}

/// School-wide totals with role and grade breakdowns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverviewReport {
    pub total_users: usize,
    pub total_subjects: usize,
    pub total_fees: usize,
    pub users_by_role: GroupCounts,
    pub subjects_by_grade: GroupCounts,
}

/// Subject distribution across grades and teachers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectStatistics {
    /// Grade the statistics were restricted to, if any.
    pub grade: Option<String>,
    pub total_subjects: usize,
    pub subjects_by_grade: GroupCounts,
    pub subjects_by_teacher: GroupCounts,
    pub average_subjects_per_grade: f64,
    pub most_active_grade: Option<String>,
    pub subjects_without_teacher: usize,
    pub percentage_without_teacher: f64,
}

/// Recent user activity alongside collection sizes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityReport {
    pub total_users: usize,
    pub active_users: usize,
    pub window_days: u32,
    pub total_subjects: usize,
    pub total_fees: usize,
}

/// Fee breakdowns and amounts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeeSummary {
    pub total_fees: usize,
    pub active_fees: usize,
    pub fees_by_type: GroupCounts,
    pub fees_by_status: GroupCounts,
    pub fees_by_grade: GroupCounts,
    pub total_active_amount: f64,
    pub average_amount: f64,
}

/// Enrollment breakdowns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentSummary {
    pub total_students: usize,
    pub active_students: usize,
    pub inactive_students: usize,
    pub students_by_grade: GroupCounts,
    pub students_by_class: GroupCounts,
    pub recently_enrolled: usize,
    pub window_days: u32,
}

/// Service computing aggregate reports.
pub struct ReportService<S: DocumentStore + ?Sized> {
    store: Arc<S>,
    settings: ReportSettings,
}

impl<S: DocumentStore + ?Sized> ReportService<S> {
    /// Creates a new report service.
    pub fn new(store: Arc<S>, settings: ReportSettings) -> Self {
        Self { store, settings }
    }

    pub fn settings(&self) -> &ReportSettings {
        &self.settings
    }

    fn users_by_role(&self, users: &[User]) -> GroupCounts {
        count_by_field_or(
            users,
            |u| u.role.map(|r| r.as_str()),
            &self.settings.unspecified_label,
        )
    }

    async fn fetch<T: DeserializeOwned>(&self, collection: Collection) -> Result<Vec<T>, StoreError> {
        let documents = self.store.list_all(collection).await?;
        Ok(decode_all(collection, &documents))
    }

    /// Counts users per role for the dashboard.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store cannot be read.
    pub async fn dashboard(&self) -> Result<DashboardReport, AppError> {
        let users: Vec<User> = self.fetch(Collection::Users).await?;
        let by_role = self.users_by_role(&users);
        let count = |role: Role| by_role.get(role.as_str()).copied().unwrap_or(0);

        Ok(DashboardReport {
            total_users: users.len(),
            total_students: count(Role::Student),
            total_teachers: count(Role::Teacher),
            total_guardians: count(Role::Guardian),
            total_admins: count(Role::Admin),
        })
    }

    /// Builds the overview report from users, subjects, and fees.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if any collection cannot be read.
    pub async fn overview(&self) -> Result<OverviewReport, AppError> {
        let (users, subjects, fees) = tokio::try_join!(
            self.fetch::<User>(Collection::Users),
            self.fetch::<Subject>(Collection::Subjects),
            self.fetch::<Fee>(Collection::Fees),
        )?;

        let label = self.settings.unspecified_label.as_str();

        Ok(OverviewReport {
            total_users: users.len(),
            total_subjects: subjects.len(),
            total_fees: fees.len(),
            users_by_role: self.users_by_role(&users),
            subjects_by_grade: count_by_field_or(&subjects, |s| Some(s.grade.as_str()), label),
        })
    }

    /// Computes subject statistics, optionally for a single grade.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store cannot be read.
    pub async fn subject_statistics(
        &self,
        grade: Option<&str>,
    ) -> Result<SubjectStatistics, AppError> {
        let mut subjects: Vec<Subject> = self.fetch(Collection::Subjects).await?;
        if let Some(grade) = grade {
            subjects.retain(|s| s.grade == grade);
        }

        let label = self.settings.unspecified_label.as_str();
        let total = subjects.len();
        let by_grade = count_by_field_or(&subjects, |s| Some(s.grade.as_str()), label);
        let by_teacher = count_by_field_or(&subjects, |s| s.teacher_name.as_deref(), label);

        Ok(SubjectStatistics {
            grade: grade.map(str::to_owned),
            total_subjects: total,
            average_subjects_per_grade: average_per_group(&by_grade, total),
            most_active_grade: most_active_group(&by_grade).map(str::to_owned),
            subjects_without_teacher: subjects.iter().filter(|s| !s.has_teacher()).count(),
            percentage_without_teacher: percentage_without_attribute(
                &subjects,
                Subject::has_teacher,
                total,
            ),
            subjects_by_grade: by_grade,
            subjects_by_teacher: by_teacher,
        })
    }

    /// Counts users active within the configured window before `now`.
    ///
    /// Users with no recorded `lastActive` are not counted as active.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if any collection cannot be read.
    pub async fn activity(&self, now: DateTime<Utc>) -> Result<ActivityReport, AppError> {
        let (users, subjects, fees) = tokio::try_join!(
            self.fetch::<User>(Collection::Users),
            self.fetch::<Subject>(Collection::Subjects),
            self.fetch::<Fee>(Collection::Fees),
        )?;

        let window_days = self.settings.window_days;

        // Users stamped after `now` are not counted as active.
        Ok(ActivityReport {
            total_users: users.len(),
            active_users: active_within_window(&users, |u| u.last_active, now, window_days),
            window_days,
            total_subjects: subjects.len(),
            total_fees: fees.len(),
        })
    }

    /// Summarizes fees by type, status, and grade.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store cannot be read.
    pub async fn fee_summary(&self) -> Result<FeeSummary, AppError> {
        let fees: Vec<Fee> = self.fetch(Collection::Fees).await?;
        let label = self.settings.unspecified_label.as_str();

        let active: Vec<&Fee> = fees.iter().filter(|f| f.is_active()).collect();
        let total_amount = sum_by(&fees, |f| f.amount);
        let average_amount = if fees.is_empty() {
            0.0
        } else {
            total_amount / fees.len() as f64
        };

        Ok(FeeSummary {
            total_fees: fees.len(),
            active_fees: active.len(),
            fees_by_type: count_by_field_or(&fees, |f| f.fee_type.map(|t| t.as_str()), label),
            fees_by_status: count_by_field(&fees, |f| f.status.as_str()),
            fees_by_grade: count_by_field_or(&fees, |f| Some(f.grade.as_str()), label),
            total_active_amount: sum_by(&active, |f| f.amount),
            average_amount,
        })
    }

    /// Summarizes enrollment, counting students enrolled within the window
    /// before `now` as recent.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store cannot be read.
    pub async fn student_summary(&self, now: DateTime<Utc>) -> Result<StudentSummary, AppError> {
        let students: Vec<Student> = self.fetch(Collection::Students).await?;
        let label = self.settings.unspecified_label.as_str();
        let window_days = self.settings.window_days;

        let active = students.iter().filter(|s| s.is_active()).count();

        Ok(StudentSummary {
            total_students: students.len(),
            active_students: active,
            inactive_students: students.len() - active,
            students_by_grade: count_by_field_or(&students, |s| Some(s.grade.as_str()), label),
            students_by_class: count_by_field_or(
                &students,
                |s| Some(s.class_section.as_str()),
                label,
            ),
            recently_enrolled: dated_within_window(
                &students,
                |s| s.enrollment_date,
                now.date_naive(),
                window_days,
            ),
            window_days,
        })
    }
}
