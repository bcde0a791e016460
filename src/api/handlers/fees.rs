//! Handlers for fee management endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::fees::{CreateFeeRequest, FeeItem, FeeListResponse, UpdateFeeRequest};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all fees ordered by title.
///
/// # Endpoint
///
/// `GET /api/fees`
pub async fn fee_list_handler(
    State(state): State<AppState>,
) -> Result<Json<FeeListResponse>, AppError> {
    let fees = state.fee_service.list_fees().await?;

    Ok(Json(FeeListResponse {
        items: fees.into_iter().map(FeeItem::from).collect(),
    }))
}

/// Creates a fee.
///
/// # Endpoint
///
/// `POST /api/fees`
///
/// # Request Body
///
/// ```json
/// {
///   "title": "Tuition",
///   "amount": 1500.0,
///   "description": "First term",
///   "type": "yearly",          // monthly | yearly | one-time
///   "grade": "grade 4",
///   "due_date": "2026-09-01T00:00:00Z"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 if the title or description is empty or the amount is not positive.
pub async fn create_fee_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateFeeRequest>,
) -> Result<(StatusCode, Json<FeeItem>), AppError> {
    payload.validate()?;

    let fee = state.fee_service.create_fee(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(fee.into())))
}

/// Partially updates a fee. `due_date: null` clears the due date.
///
/// # Endpoint
///
/// `PATCH /api/fees/{id}`
///
/// # Errors
///
/// Returns 400 if validation fails or no field is given.
/// Returns 404 if the fee does not exist.
pub async fn update_fee_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateFeeRequest>,
) -> Result<StatusCode, AppError> {
    payload.validate()?;

    state.fee_service.update_fee(&id, payload.into()).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Deletes a fee.
///
/// # Endpoint
///
/// `DELETE /api/fees/{id}`
pub async fn delete_fee_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.fee_service.delete_fee(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
