//! Student enrollment service.

use std::sync::Arc;

use chrono::Utc;

use super::crud;
use crate::domain::document::{Collection, to_fields};
use crate::domain::entities::{NewStudent, Student, UpdateStudent};
use crate::domain::repositories::DocumentStore;
use crate::error::AppError;

/// Service for the `students` collection.
pub struct StudentService<S: DocumentStore + ?Sized> {
    store: Arc<S>,
}

impl<S: DocumentStore + ?Sized> StudentService<S> {
    /// Creates a new student service.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Lists students ordered by grade, then class section, then name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store cannot be read.
    pub async fn list_students(&self) -> Result<Vec<Student>, AppError> {
        let mut students: Vec<Student> =
            crud::list(self.store.as_ref(), Collection::Students).await?;
        students.sort_by(|a, b| {
            (&a.grade, &a.class_section, &a.name).cmp(&(&b.grade, &b.class_section, &b.name))
        });
        Ok(students)
    }

    /// Enrolls a student. A missing enrollment date becomes today's date.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store rejects the write.
    pub async fn create_student(&self, mut new_student: NewStudent) -> Result<Student, AppError> {
        new_student
            .enrollment_date
            .get_or_insert_with(|| Utc::now().date_naive());

        let fields = to_fields(&new_student)?;
        crud::create(self.store.as_ref(), Collection::Students, fields).await
    }

    /// Applies a partial update to a student.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the update is empty.
    /// Returns [`AppError::NotFound`] if the student does not exist.
    pub async fn update_student(&self, id: &str, update: UpdateStudent) -> Result<(), AppError> {
        crud::update(self.store.as_ref(), Collection::Students, id, &update).await
    }

    /// Deletes a student record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store rejects the delete.
    pub async fn delete_student(&self, id: &str) -> Result<(), AppError> {
        crud::delete(self.store.as_ref(), Collection::Students, id).await
    }
}
