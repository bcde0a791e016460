//! DTOs for subject management.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{NewSubject, Subject, UpdateSubject};

/// Request body for `POST /api/subjects`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateSubjectRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[validate(length(min = 1, max = 50))]
    pub grade: String,

    /// Teacher to assign. Not checked against the users collection.
    pub teacher_id: Option<String>,

    pub teacher_name: Option<String>,
}

impl From<CreateSubjectRequest> for NewSubject {
    fn from(req: CreateSubjectRequest) -> Self {
        NewSubject {
            name: req.name,
            description: req.description,
            grade: req.grade,
            teacher_id: req.teacher_id,
            teacher_name: req.teacher_name,
        }
    }
}

/// Request body for `PATCH /api/subjects/{id}`.
///
/// # Teacher semantics
///
/// - **Absent** → assignment unchanged
/// - **`null`** → teacher unassigned
/// - **Value** → teacher reassigned
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateSubjectRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,

    pub description: Option<String>,

    #[validate(length(min = 1, max = 50))]
    pub grade: Option<String>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub teacher_id: Option<Option<String>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub teacher_name: Option<Option<String>>,
}

impl From<UpdateSubjectRequest> for UpdateSubject {
    fn from(req: UpdateSubjectRequest) -> Self {
        UpdateSubject {
            name: req.name,
            description: req.description,
            grade: req.grade,
            teacher_id: req.teacher_id,
            teacher_name: req.teacher_name,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SubjectItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub grade: String,
    pub teacher_id: Option<String>,
    pub teacher_name: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<Subject> for SubjectItem {
    fn from(s: Subject) -> Self {
        SubjectItem {
            id: s.id,
            name: s.name,
            description: s.description,
            grade: s.grade,
            teacher_id: s.teacher_id,
            teacher_name: s.teacher_name,
            created_at: s.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SubjectListResponse {
    pub items: Vec<SubjectItem>,
}
