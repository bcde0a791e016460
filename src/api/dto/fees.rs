//! DTOs for fee management.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Fee, FeeType, NewFee, Status, UpdateFee};

/// Request body for `POST /api/fees`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateFeeRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[validate(range(exclusive_min = 0.0))]
    pub amount: f64,

    #[validate(length(min = 1, max = 2000))]
    pub description: String,

    pub due_date: Option<DateTime<Utc>>,

    #[serde(default)]
    pub grade: String,

    #[serde(rename = "type", default)]
    pub fee_type: FeeType,

    #[serde(default)]
    pub status: Status,
}

impl From<CreateFeeRequest> for NewFee {
    fn from(req: CreateFeeRequest) -> Self {
        NewFee {
            title: req.title,
            amount: req.amount,
            description: req.description,
            due_date: req.due_date,
            grade: req.grade,
            fee_type: req.fee_type,
            status: req.status,
        }
    }
}

/// Request body for `PATCH /api/fees/{id}`.
///
/// Absent fields are left unchanged. `due_date: null` clears the due date.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateFeeRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,

    #[validate(range(exclusive_min = 0.0))]
    pub amount: Option<f64>,

    #[validate(length(min = 1, max = 2000))]
    pub description: Option<String>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub due_date: Option<Option<DateTime<Utc>>>,

    pub grade: Option<String>,

    #[serde(rename = "type")]
    pub fee_type: Option<FeeType>,

    pub status: Option<Status>,
}

impl From<UpdateFeeRequest> for UpdateFee {
    fn from(req: UpdateFeeRequest) -> Self {
        UpdateFee {
            title: req.title,
            amount: req.amount,
            description: req.description,
            due_date: req.due_date,
            grade: req.grade,
            fee_type: req.fee_type,
            status: req.status,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FeeItem {
    pub id: String,
    pub title: String,
    pub amount: f64,
    pub description: String,
    pub due_date: Option<DateTime<Utc>>,
    pub grade: String,
    #[serde(rename = "type")]
    pub fee_type: Option<FeeType>,
    pub status: Status,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<Fee> for FeeItem {
    fn from(f: Fee) -> Self {
        FeeItem {
            id: f.id,
            title: f.title,
            amount: f.amount,
            description: f.description,
            due_date: f.due_date,
            grade: f.grade,
            fee_type: f.fee_type,
            status: f.status,
            created_at: f.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FeeListResponse {
    pub items: Vec<FeeItem>,
}
