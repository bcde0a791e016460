//! School fees charged per grade.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnError, serde_as};

use super::Status;

/// How often a fee is charged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FeeType {
    #[default]
    Monthly,
    Yearly,
    OneTime,
}

impl FeeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeeType::Monthly => "monthly",
            FeeType::Yearly => "yearly",
            FeeType::OneTime => "one-time",
        }
    }
}

/// A fee document from the `fees` collection.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fee {
    pub id: String,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub title: String,
    /// Non-numeric amounts decode to zero.
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub description: String,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub grade: String,
    #[serde_as(as = "DefaultOnError")]
    #[serde(rename = "type", default)]
    pub fee_type: Option<FeeType>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub status: Status,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Fee {
    pub fn is_active(&self) -> bool {
        self.status == Status::Active
    }
}

/// Input data for creating a fee.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFee {
    pub title: String,
    pub amount: f64,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    pub grade: String,
    #[serde(rename = "type")]
    pub fee_type: FeeType,
    pub status: Status,
}

/// Partial update of a fee. `due_date: Some(None)` clears the due date.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFee {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub due_date: Option<Option<DateTime<Utc>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub fee_type: Option<FeeType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}
