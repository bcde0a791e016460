//! Fee management service.

use std::sync::Arc;

use chrono::Utc;
use serde_json::json;

use super::crud;
use crate::domain::document::{Collection, to_fields};
use crate::domain::entities::{Fee, NewFee, UpdateFee};
use crate::domain::repositories::DocumentStore;
use crate::error::AppError;

/// Service for the `fees` collection.
pub struct FeeService<S: DocumentStore + ?Sized> {
    store: Arc<S>,
}

impl<S: DocumentStore + ?Sized> FeeService<S> {
    /// Creates a new fee service.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Lists fees ordered by title.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store cannot be read.
    pub async fn list_fees(&self) -> Result<Vec<Fee>, AppError> {
        let mut fees: Vec<Fee> = crud::list(self.store.as_ref(), Collection::Fees).await?;
        fees.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(fees)
    }

    /// Creates a fee stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the amount is not a positive number.
    /// Returns [`AppError::Internal`] if the store rejects the write.
    pub async fn create_fee(&self, new_fee: NewFee) -> Result<Fee, AppError> {
        validate_amount(new_fee.amount)?;

        let mut fields = to_fields(&new_fee)?;
        fields.insert("createdAt".to_string(), json!(Utc::now()));

        crud::create(self.store.as_ref(), Collection::Fees, fields).await
    }

    /// Applies a partial update to a fee.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the update is empty or the amount is invalid.
    /// Returns [`AppError::NotFound`] if the fee does not exist.
    pub async fn update_fee(&self, id: &str, update: UpdateFee) -> Result<(), AppError> {
        if let Some(amount) = update.amount {
            validate_amount(amount)?;
        }

        crud::update(self.store.as_ref(), Collection::Fees, id, &update).await
    }

    /// Deletes a fee.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store rejects the delete.
    pub async fn delete_fee(&self, id: &str) -> Result<(), AppError> {
        crud::delete(self.store.as_ref(), Collection::Fees, id).await
    }
}

fn validate_amount(amount: f64) -> Result<(), AppError> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(AppError::bad_request(
            "Fee amount must be a positive number",
            json!({ "amount": amount.to_string() }),
        ));
    }
    Ok(())
}
