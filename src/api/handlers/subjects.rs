//! Handlers for subject management endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::subjects::{
    CreateSubjectRequest, SubjectItem, SubjectListResponse, UpdateSubjectRequest,
};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all subjects ordered by grade and name.
///
/// # Endpoint
///
/// `GET /api/subjects`
pub async fn subject_list_handler(
    State(state): State<AppState>,
) -> Result<Json<SubjectListResponse>, AppError> {
    let subjects = state.subject_service.list_subjects().await?;

    Ok(Json(SubjectListResponse {
        items: subjects.into_iter().map(SubjectItem::from).collect(),
    }))
}

/// Creates a subject, optionally assigned to a teacher.
///
/// # Endpoint
///
/// `POST /api/subjects`
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Physics",
///   "grade": "grade 9",
///   "teacher_id": "k3J9...",   // optional
///   "teacher_name": "Omar Aziz" // optional
/// }
/// ```
///
/// # Errors
///
/// Returns 400 if name or grade is empty.
pub async fn create_subject_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateSubjectRequest>,
) -> Result<(StatusCode, Json<SubjectItem>), AppError> {
    payload.validate()?;

    let subject = state.subject_service.create_subject(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(subject.into())))
}

/// Partially updates a subject. `teacher_id: null` unassigns the teacher.
///
/// # Endpoint
///
/// `PATCH /api/subjects/{id}`
///
/// # Errors
///
/// Returns 400 if validation fails or no field is given.
/// Returns 404 if the subject does not exist.
pub async fn update_subject_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateSubjectRequest>,
) -> Result<StatusCode, AppError> {
    payload.validate()?;

    state
        .subject_service
        .update_subject(&id, payload.into())
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Deletes a subject.
///
/// # Endpoint
///
/// `DELETE /api/subjects/{id}`
pub async fn delete_subject_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.subject_service.delete_subject(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
