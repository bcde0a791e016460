//! Subjects taught per grade.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnError, serde_as};

/// A subject document from the `subjects` collection.
///
/// `teacher_id` is not checked against the `users` collection.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    pub id: String,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub grade: String,
    #[serde(default)]
    pub teacher_id: Option<String>,
    #[serde(default)]
    pub teacher_name: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Subject {
    /// Whether a teacher identifier is recorded. Empty identifiers count as absent.
    pub fn has_teacher(&self) -> bool {
        self.teacher_id.as_deref().is_some_and(|id| !id.is_empty())
    }
}

/// Input data for creating a subject.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSubject {
    pub name: String,
    pub description: String,
    pub grade: String,
    pub teacher_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teacher_name: Option<String>,
}

/// Partial update of a subject. For the teacher fields, `Some(None)`
/// unassigns the teacher.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSubject {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub teacher_id: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub teacher_name: Option<Option<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::document::Document;
    use serde_json::json;

    fn decode(value: serde_json::Value) -> Subject {
        Document::new("sub", value.as_object().cloned().unwrap())
            .decode()
            .unwrap()
    }

    #[test]
    fn test_has_teacher() {
        let assigned = decode(json!({ "name": "Physics", "grade": "grade 9", "teacherId": "t1" }));
        let null_teacher = decode(json!({ "name": "Art", "grade": "grade 2", "teacherId": null }));
        let empty_teacher = decode(json!({ "name": "Music", "grade": "grade 2", "teacherId": "" }));
        let missing = decode(json!({ "name": "Drama", "grade": "grade 5" }));

        assert!(assigned.has_teacher());
        assert!(!null_teacher.has_teacher());
        assert!(!empty_teacher.has_teacher());
        assert!(!missing.has_teacher());
    }

    #[test]
    fn test_new_subject_writes_null_teacher() {
        let new = NewSubject {
            name: "Chemistry".to_string(),
            description: String::new(),
            grade: "grade 10".to_string(),
            teacher_id: None,
            teacher_name: None,
        };

        let fields = crate::domain::document::to_fields(&new).unwrap();

        assert!(fields["teacherId"].is_null());
        assert!(!fields.contains_key("teacherName"));
    }
}
