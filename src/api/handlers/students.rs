//! Handlers for student management endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::students::{
    CreateStudentRequest, StudentItem, StudentListResponse, UpdateStudentRequest,
};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all students ordered by grade, class, and name.
///
/// # Endpoint
///
/// `GET /api/students`
pub async fn student_list_handler(
    State(state): State<AppState>,
) -> Result<Json<StudentListResponse>, AppError> {
    let students = state.student_service.list_students().await?;

    Ok(Json(StudentListResponse {
        items: students.into_iter().map(StudentItem::from).collect(),
    }))
}

/// Enrolls a new student.
///
/// # Endpoint
///
/// `POST /api/students`
///
/// # Errors
///
/// Returns 400 if name, grade, or class section is empty.
pub async fn create_student_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateStudentRequest>,
) -> Result<(StatusCode, Json<StudentItem>), AppError> {
    payload.validate()?;

    let student = state.student_service.create_student(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(student.into())))
}

/// Partially updates a student.
///
/// # Endpoint
///
/// `PATCH /api/students/{id}`
///
/// # Errors
///
/// Returns 400 if validation fails or no field is given.
/// Returns 404 if the student does not exist.
pub async fn update_student_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateStudentRequest>,
) -> Result<StatusCode, AppError> {
    payload.validate()?;

    state
        .student_service
        .update_student(&id, payload.into())
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Deletes a student.
///
/// # Endpoint
///
/// `DELETE /api/students/{id}`
pub async fn delete_student_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.student_service.delete_student(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
