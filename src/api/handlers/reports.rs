//! Handlers for report endpoints.
//!
//! Every report is recomputed from the store on each request and wrapped in
//! a [`ReportResponse`] stamped with the time it was generated.

use axum::{
    Json,
    extract::{Query, State},
};
use chrono::Utc;

use crate::api::dto::reports::{ReportResponse, SubjectReportQuery};
use crate::application::services::{
    ActivityReport, DashboardReport, FeeSummary, OverviewReport, StudentSummary,
    SubjectStatistics,
};
use crate::error::AppError;
use crate::state::AppState;

/// `GET /api/reports/dashboard`
pub async fn dashboard_report_handler(
    State(state): State<AppState>,
) -> Result<Json<ReportResponse<DashboardReport>>, AppError> {
    let report = state.report_service.dashboard().await?;
    Ok(Json(ReportResponse::new(Utc::now(), report)))
}

/// `GET /api/reports/overview`
pub async fn overview_report_handler(
    State(state): State<AppState>,
) -> Result<Json<ReportResponse<OverviewReport>>, AppError> {
    let report = state.report_service.overview().await?;
    Ok(Json(ReportResponse::new(Utc::now(), report)))
}

/// Subject statistics, optionally for one grade.
///
/// # Endpoint
///
/// `GET /api/reports/subjects?grade=grade%202`
pub async fn subject_report_handler(
    State(state): State<AppState>,
    Query(query): Query<SubjectReportQuery>,
) -> Result<Json<ReportResponse<SubjectStatistics>>, AppError> {
    let grade = query.grade.as_deref().filter(|g| !g.is_empty());
    let report = state.report_service.subject_statistics(grade).await?;
    Ok(Json(ReportResponse::new(Utc::now(), report)))
}

/// `GET /api/reports/activity`
pub async fn activity_report_handler(
    State(state): State<AppState>,
) -> Result<Json<ReportResponse<ActivityReport>>, AppError> {
    let now = Utc::now();
    let report = state.report_service.activity(now).await?;
    Ok(Json(ReportResponse::new(now, report)))
}

/// `GET /api/reports/fees`
pub async fn fee_report_handler(
    State(state): State<AppState>,
) -> Result<Json<ReportResponse<FeeSummary>>, AppError> {
    let report = state.report_service.fee_summary().await?;
    Ok(Json(ReportResponse::new(Utc::now(), report)))
}

/// `GET /api/reports/students`
pub async fn student_report_handler(
    State(state): State<AppState>,
) -> Result<Json<ReportResponse<StudentSummary>>, AppError> {
    let now = Utc::now();
    let report = state.report_service.student_summary(now).await?;
    Ok(Json(ReportResponse::new(now, report)))
}
