//! Subject management service.

use std::sync::Arc;

use chrono::Utc;
use serde_json::json;

use super::crud;
use crate::domain::document::{Collection, to_fields};
use crate::domain::entities::{NewSubject, Subject, UpdateSubject};
use crate::domain::repositories::DocumentStore;
use crate::error::AppError;

/// Service for the `subjects` collection.
///
/// Teacher assignments are stored as given; the teacher id is not looked
/// up in `users`.
pub struct SubjectService<S: DocumentStore + ?Sized> {
    store: Arc<S>,
}

impl<S: DocumentStore + ?Sized> SubjectService<S> {
    /// Creates a new subject service.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Lists subjects ordered by grade, then name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store cannot be read.
    pub async fn list_subjects(&self) -> Result<Vec<Subject>, AppError> {
        let mut subjects: Vec<Subject> =
            crud::list(self.store.as_ref(), Collection::Subjects).await?;
        subjects.sort_by(|a, b| (&a.grade, &a.name).cmp(&(&b.grade, &b.name)));
        Ok(subjects)
    }

    /// Creates a subject stamped with the current time.
    ///
    /// An empty teacher id is stored as `null`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store rejects the write.
    pub async fn create_subject(&self, mut new_subject: NewSubject) -> Result<Subject, AppError> {
        new_subject.teacher_id = new_subject.teacher_id.filter(|id| !id.is_empty());

        let mut fields = to_fields(&new_subject)?;
        fields.insert("createdAt".to_string(), json!(Utc::now()));

        crud::create(self.store.as_ref(), Collection::Subjects, fields).await
    }

    /// Applies a partial update to a subject.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the update is empty.
    /// Returns [`AppError::NotFound`] if the subject does not exist.
    pub async fn update_subject(&self, id: &str, mut update: UpdateSubject) -> Result<(), AppError> {
        if let Some(teacher_id) = update.teacher_id.as_mut() {
            *teacher_id = teacher_id.take().filter(|id| !id.is_empty());
        }

        crud::update(self.store.as_ref(), Collection::Subjects, id, &update).await
    }

    /// Deletes a subject.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store rejects the delete.
    pub async fn delete_subject(&self, id: &str) -> Result<(), AppError> {
        crud::delete(self.store.as_ref(), Collection::Subjects, id).await
    }
}
