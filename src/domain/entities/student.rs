//! Enrolled students and their guardian contacts.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnError, serde_as};

use super::Status;

/// A student document from the `students` collection.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: String,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub grade: String,
    #[serde_as(as = "DefaultOnError")]
    #[serde(rename = "class", default)]
    pub class_section: String,
    #[serde(rename = "parentName", default)]
    pub guardian_name: String,
    #[serde(rename = "parentPhone", default)]
    pub guardian_phone: String,
    #[serde(rename = "parentEmail", default)]
    pub guardian_email: String,
    #[serde(default)]
    pub address: String,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub enrollment_date: Option<NaiveDate>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub status: Status,
}

impl Student {
    pub fn is_active(&self) -> bool {
        self.status == Status::Active
    }
}

/// Input data for enrolling a student.
///
/// `enrollment_date` defaults to the current date when left empty.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStudent {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub grade: String,
    #[serde(rename = "class")]
    pub class_section: String,
    #[serde(rename = "parentName")]
    pub guardian_name: String,
    #[serde(rename = "parentPhone")]
    pub guardian_phone: String,
    #[serde(rename = "parentEmail")]
    pub guardian_email: String,
    pub address: String,
    pub date_of_birth: Option<NaiveDate>,
    pub enrollment_date: Option<NaiveDate>,
    pub status: Status,
}

/// Partial update of a student record.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStudent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    #[serde(rename = "class", skip_serializing_if = "Option::is_none")]
    pub class_section: Option<String>,
    #[serde(rename = "parentName", skip_serializing_if = "Option::is_none")]
    pub guardian_name: Option<String>,
    #[serde(rename = "parentPhone", skip_serializing_if = "Option::is_none")]
    pub guardian_phone: Option<String>,
    #[serde(rename = "parentEmail", skip_serializing_if = "Option::is_none")]
    pub guardian_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrollment_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}
