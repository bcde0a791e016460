//! User management service.

use std::sync::Arc;

use chrono::Utc;
use serde_json::json;

use super::crud;
use crate::domain::document::{Collection, to_fields};
use crate::domain::entities::{NewUser, UpdateUser, User};
use crate::domain::repositories::DocumentStore;
use crate::error::AppError;

/// Service for the `users` collection.
pub struct UserService<S: DocumentStore + ?Sized> {
    store: Arc<S>,
}

impl<S: DocumentStore + ?Sized> UserService<S> {
    /// Creates a new user service.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Lists all users ordered by name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store cannot be read.
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        let mut users: Vec<User> = crud::list(self.store.as_ref(), Collection::Users).await?;
        users.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(users)
    }

    /// Creates a user stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store rejects the write.
    pub async fn create_user(&self, new_user: NewUser) -> Result<User, AppError> {
        let mut fields = to_fields(&new_user)?;
        fields.insert("createdAt".to_string(), json!(Utc::now()));

        crud::create(self.store.as_ref(), Collection::Users, fields).await
    }

    /// Applies a partial update to a user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the update is empty.
    /// Returns [`AppError::NotFound`] if the user does not exist.
    pub async fn update_user(&self, id: &str, update: UpdateUser) -> Result<(), AppError> {
        crud::update(self.store.as_ref(), Collection::Users, id, &update).await
    }

    /// Deletes a user. Deleting an unknown id succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store rejects the delete.
    pub async fn delete_user(&self, id: &str) -> Result<(), AppError> {
        crud::delete(self.store.as_ref(), Collection::Users, id).await
    }
}
