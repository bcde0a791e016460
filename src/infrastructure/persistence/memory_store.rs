//! In-memory document store with optional JSON file persistence.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::domain::document::{Collection, Document, Fields};
use crate::domain::repositories::DocumentStore;
use crate::error::StoreError;
use crate::utils::id_generator::generate_document_id;

type Documents = BTreeMap<String, Fields>;
type Collections = HashMap<Collection, Documents>;

/// Document store keeping every collection in memory.
///
/// When opened on a file, the file is read at startup and rewritten after
/// every successful mutation. The file holds one array per collection:
///
/// ```json
/// { "users": [ { "id": "a1", "name": "Amal", "role": "teacher" } ], "fees": [] }
/// ```
///
/// Documents without an `id` get a generated one on load. A mutation whose
/// file write fails is rolled back in memory and reported as
/// [`StoreError::PermissionDenied`] when the OS refuses access, and as
/// [`StoreError::Unavailable`] otherwise.
pub struct MemoryDocumentStore {
    collections: RwLock<Collections>,
    path: Option<PathBuf>,
}

impl MemoryDocumentStore {
    /// Creates an empty, non-persistent store.
    pub fn new() -> Self {
        debug!("Using in-memory document store without persistence");
        Self {
            collections: RwLock::new(Collections::new()),
            path: None,
        }
    }

    /// Creates a non-persistent store seeded from a snapshot value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Serialization`] if the snapshot is malformed.
    pub fn from_snapshot(snapshot: Value) -> Result<Self, StoreError> {
        Ok(Self {
            collections: RwLock::new(parse_snapshot(snapshot)?),
            path: None,
        })
    }

    /// Opens a store backed by a JSON file, creating it on first write if it
    /// does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::PermissionDenied`] if the file may not be read,
    /// [`StoreError::Unavailable`] if it cannot be read for another reason,
    /// and [`StoreError::Serialization`] if its contents are malformed.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();

        let collections = match tokio::fs::read_to_string(&path).await {
            Ok(contents) => parse_snapshot(serde_json::from_str(&contents)?)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!(path = %path.display(), "Store file not found, starting empty");
                Collections::new()
            }
            Err(e) => return Err(io_error("read", &path, e)),
        };

        let total: usize = collections.values().map(BTreeMap::len).sum();
        info!(path = %path.display(), documents = total, "Document store loaded");

        Ok(Self {
            collections: RwLock::new(collections),
            path: Some(path),
        })
    }

    /// Returns the full store contents in the file format.
    pub async fn snapshot(&self) -> Value {
        render_snapshot(&*self.collections.read().await)
    }

    async fn persist(&self, collections: &Collections) -> Result<(), StoreError> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        let contents = serde_json::to_string_pretty(&render_snapshot(collections))?;
        let tmp = path.with_extension("json.tmp");

        tokio::fs::write(&tmp, contents)
            .await
            .map_err(|e| io_error("write", &tmp, e))?;
        tokio::fs::rename(&tmp, path)
            .await
            .map_err(|e| io_error("replace", path, e))
    }
}

fn io_error(action: &str, path: &Path, e: std::io::Error) -> StoreError {
    let message = format!("cannot {action} {}: {e}", path.display());
    match e.kind() {
        std::io::ErrorKind::PermissionDenied => StoreError::PermissionDenied(message),
        _ => StoreError::Unavailable(message),
    }
}

impl Default for MemoryDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_snapshot(snapshot: Value) -> Result<Collections, StoreError> {
    let Value::Object(root) = snapshot else {
        return Err(StoreError::Serialization(
            "store snapshot must be a JSON object".to_string(),
        ));
    };

    let mut collections = Collections::new();
    for (name, documents) in root {
        let Some(collection) = Collection::from_name(&name) else {
            warn!(collection = %name, "Ignoring unknown collection in snapshot");
            continue;
        };

        let Value::Array(documents) = documents else {
            return Err(StoreError::Serialization(format!(
                "collection '{name}' must be an array"
            )));
        };

        let entry = collections.entry(collection).or_default();
        for document in documents {
            let Value::Object(mut fields) = document else {
                return Err(StoreError::Serialization(format!(
                    "documents in '{name}' must be objects"
                )));
            };
            let id = match fields.remove("id") {
                Some(Value::String(id)) if !id.is_empty() => id,
                _ => generate_document_id(),
            };
            if entry.insert(id.clone(), fields).is_some() {
                warn!(
                    collection = %name,
                    id = %id,
                    "Duplicate document id in snapshot, keeping the last one"
                );
            }
        }
    }

    Ok(collections)
}

fn render_snapshot(collections: &Collections) -> Value {
    let mut root = Map::new();
    for collection in Collection::ALL {
        let documents = collections
            .get(&collection)
            .map(|docs| {
                docs.iter()
                    .map(|(id, fields)| {
                        let mut doc = Map::with_capacity(fields.len() + 1);
                        doc.insert("id".to_string(), Value::String(id.clone()));
                        doc.extend(fields.clone());
                        Value::Object(doc)
                    })
                    .collect()
            })
            .unwrap_or_default();
        root.insert(collection.as_str().to_string(), Value::Array(documents));
    }
    Value::Object(root)
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn list_all(&self, collection: Collection) -> Result<Vec<Document>, StoreError> {
        let collections = self.collections.read().await;

        Ok(collections
            .get(&collection)
            .map(|docs| {
                docs.iter()
                    .map(|(id, fields)| Document::new(id.clone(), fields.clone()))
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn create(&self, collection: Collection, mut fields: Fields) -> Result<String, StoreError> {
        fields.remove("id");
        let id = generate_document_id();

        let mut collections = self.collections.write().await;
        collections
            .entry(collection)
            .or_default()
            .insert(id.clone(), fields);

        if let Err(e) = self.persist(&collections).await {
            if let Some(docs) = collections.get_mut(&collection) {
                docs.remove(&id);
            }
            return Err(e);
        }

        debug!(collection = %collection, id = %id, "Document created");
        Ok(id)
    }

    async fn update(
        &self,
        collection: Collection,
        id: &str,
        mut fields: Fields,
    ) -> Result<(), StoreError> {
        fields.remove("id");

        let mut collections = self.collections.write().await;
        let Some(existing) = collections.get_mut(&collection).and_then(|d| d.get_mut(id)) else {
            return Err(StoreError::NotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            });
        };

        let previous = existing.clone();
        existing.extend(fields);

        if let Err(e) = self.persist(&collections).await {
            if let Some(doc) = collections.get_mut(&collection).and_then(|d| d.get_mut(id)) {
                *doc = previous;
            }
            return Err(e);
        }

        debug!(collection = %collection, id = %id, "Document updated");
        Ok(())
    }

    async fn delete(&self, collection: Collection, id: &str) -> Result<(), StoreError> {
        let mut collections = self.collections.write().await;
        let Some(removed) = collections.get_mut(&collection).and_then(|d| d.remove(id)) else {
            return Ok(());
        };

        if let Err(e) = self.persist(&collections).await {
            collections
                .entry(collection)
                .or_default()
                .insert(id.to_string(), removed);
            return Err(e);
        }

        debug!(collection = %collection, id = %id, "Document deleted");
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        // The file may not exist yet; its directory must.
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        match tokio::fs::metadata(dir).await {
            Ok(meta) if meta.is_dir() => Ok(()),
            Ok(_) => Err(StoreError::Unavailable(format!(
                "{} is not a directory",
                dir.display()
            ))),
            Err(e) => Err(io_error("access", dir, e)),
        }
    }
}
