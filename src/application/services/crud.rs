//! Store calls shared by the entity services.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::domain::document::{Collection, Document, Fields, decode_all, to_fields};
use crate::domain::repositories::DocumentStore;
use crate::error::AppError;

pub(super) async fn list<S, T>(store: &S, collection: Collection) -> Result<Vec<T>, AppError>
where
    S: DocumentStore + ?Sized,
    T: DeserializeOwned,
{
    let documents = store.list_all(collection).await?;
    Ok(decode_all(collection, &documents))
}

/// Creates a document and decodes it back as the stored entity.
pub(super) async fn create<S, T>(
    store: &S,
    collection: Collection,
    fields: Fields,
) -> Result<T, AppError>
where
    S: DocumentStore + ?Sized,
    T: DeserializeOwned,
{
    let id = store.create(collection, fields.clone()).await?;
    tracing::info!(collection = %collection, id = %id, "Record created");
    Ok(Document::new(id, fields).decode()?)
}

pub(super) async fn update<S, P>(
    store: &S,
    collection: Collection,
    id: &str,
    patch: &P,
) -> Result<(), AppError>
where
    S: DocumentStore + ?Sized,
    P: Serialize,
{
    let fields = to_fields(patch)?;
    if fields.is_empty() {
        return Err(AppError::bad_request(
            "Nothing to update",
            json!({ "collection": collection.as_str(), "id": id }),
        ));
    }

    store.update(collection, id, fields).await?;
    tracing::info!(collection = %collection, id = %id, "Record updated");
    Ok(())
}

pub(super) async fn delete<S>(store: &S, collection: Collection, id: &str) -> Result<(), AppError>
where
    S: DocumentStore + ?Sized,
{
    store.delete(collection, id).await?;
    tracing::info!(collection = %collection, id = %id, "Record deleted");
    Ok(())
}
