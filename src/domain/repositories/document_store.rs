//! Contract with the document store.

use async_trait::async_trait;

use crate::domain::document::{Collection, Document, Fields};
use crate::error::StoreError;

/// Collection-level access to the document store.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryDocumentStore`] - in-memory store with optional JSON file persistence
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Returns every document of a collection. No pagination, no filtering.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] or [`StoreError::PermissionDenied`]
    /// when the store cannot be read.
    async fn list_all(&self, collection: Collection) -> Result<Vec<Document>, StoreError>;

    /// Stores `fields` as a new document and returns its generated identifier.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] or [`StoreError::PermissionDenied`]
    /// when the write fails.
    async fn create(&self, collection: Collection, fields: Fields) -> Result<String, StoreError>;

    /// Merges `fields` into an existing document. Fields absent from the
    /// map keep their stored values.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the document does not exist.
    async fn update(&self, collection: Collection, id: &str, fields: Fields)
    -> Result<(), StoreError>;

    /// Removes a document. Deleting a missing document succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] when the store cannot be written.
    async fn delete(&self, collection: Collection, id: &str) -> Result<(), StoreError>;

    /// Checks that the store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] when it is not.
    async fn ping(&self) -> Result<(), StoreError>;
}
