//! Raw documents as exchanged with the document store.

use std::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::StoreError;

/// Field map of a stored document, without its identifier.
pub type Fields = Map<String, Value>;

/// Named collection in the document store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Collection {
    Users,
    Students,
    Subjects,
    Fees,
}

impl Collection {
    pub const ALL: [Collection; 4] = [
        Collection::Users,
        Collection::Students,
        Collection::Subjects,
        Collection::Fees,
    ];

    /// Collection name as used by the store.
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Users => "users",
            Collection::Students => "students",
            Collection::Subjects => "subjects",
            Collection::Fees => "fees",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == name)
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored document: generated identifier plus its fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub fields: Fields,
}

impl Document {
    pub fn new(id: impl Into<String>, fields: Fields) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }

    /// Decodes the document into a typed entity.
    ///
    /// The identifier is exposed to the entity as an `id` field, overriding
    /// any `id` stored among the fields.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Serialization`] if the fields do not match `T`.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, StoreError> {
        let mut fields = self.fields.clone();
        fields.insert("id".to_string(), Value::String(self.id.clone()));
        Ok(serde_json::from_value(Value::Object(fields))?)
    }
}

/// Serializes a value into a document field map.
///
/// # Errors
///
/// Returns [`StoreError::Serialization`] if the value does not serialize to
/// a JSON object.
pub fn to_fields<T: Serialize>(value: &T) -> Result<Fields, StoreError> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        other => Err(StoreError::Serialization(format!(
            "expected an object, got {other}"
        ))),
    }
}

/// Decodes every document of a collection, skipping those that don't fit `T`.
pub fn decode_all<T: DeserializeOwned>(collection: Collection, documents: &[Document]) -> Vec<T> {
    documents
        .iter()
        .filter_map(|doc| match doc.decode() {
            Ok(entity) => Some(entity),
            Err(e) => {
                tracing::warn!(
                    collection = %collection,
                    id = %doc.id,
                    error = %e,
                    "Skipping undecodable document"
                );
                None
            }
        })
        .collect()
}
