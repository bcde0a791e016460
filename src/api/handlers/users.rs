//! Handlers for user management endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::users::{CreateUserRequest, UpdateUserRequest, UserItem, UserListResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all users ordered by name.
///
/// # Endpoint
///
/// `GET /api/users`
pub async fn user_list_handler(
    State(state): State<AppState>,
) -> Result<Json<UserListResponse>, AppError> {
    let users = state.user_service.list_users().await?;

    Ok(Json(UserListResponse {
        items: users.into_iter().map(UserItem::from).collect(),
    }))
}

/// Creates a new user.
///
/// # Endpoint
///
/// `POST /api/users`
///
/// # Request Body
///
/// ```json
/// { "name": "Amal Haddad", "email": "amal@school.test", "role": "teacher" }
/// ```
///
/// # Errors
///
/// Returns 400 if the name is empty or the email is malformed.
pub async fn create_user_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserItem>), AppError> {
    payload.validate()?;

    let user = state.user_service.create_user(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// Partially updates a user.
///
/// # Endpoint
///
/// `PATCH /api/users/{id}`
///
/// # Errors
///
/// Returns 400 if validation fails or no field is given.
/// Returns 404 if the user does not exist.
pub async fn update_user_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateUserRequest>,
) -> Result<StatusCode, AppError> {
    payload.validate()?;

    state.user_service.update_user(&id, payload.into()).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Deletes a user. Deleting an unknown id succeeds.
///
/// # Endpoint
///
/// `DELETE /api/users/{id}`
pub async fn delete_user_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.user_service.delete_user(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
