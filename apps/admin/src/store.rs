//! Collection-oriented document storage.
//!
//! Records are JSON objects grouped by collection name. The store assigns the
//! id on create and never changes it afterwards.

use async_trait::async_trait;
use ieam_core::Document;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::warn;

pub type Fields = Map<String, Value>;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The underlying database rejected the operation.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A stored body or a record could not be converted to/from JSON.
    #[error("invalid document body: {0}")]
    Body(#[from] serde_json::Error),

    /// `update`/`delete` addressed an id that is not in the collection.
    #[error("document {id} not found in {collection}")]
    NotFound { collection: String, id: String },

    /// The record did not serialize to a JSON object.
    #[error("documents must be JSON objects")]
    NotAnObject,
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn list(&self, collection: &str) -> Result<Vec<Document<Fields>>, StoreError>;

    async fn create(&self, collection: &str, fields: Fields)
        -> Result<Document<Fields>, StoreError>;

    async fn update(
        &self,
        collection: &str,
        id: &str,
        fields: Fields,
    ) -> Result<Document<Fields>, StoreError>;

    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError>;
}

pub fn to_fields<T: Serialize>(record: &T) -> Result<Fields, StoreError> {
    match serde_json::to_value(record)? {
        Value::Object(mut fields) => {
            fields.remove("id");
            Ok(fields)
        }
        _ => Err(StoreError::NotAnObject),
    }
}

pub fn from_document<T: DeserializeOwned>(doc: Document<Fields>) -> Result<Document<T>, StoreError> {
    let fields = serde_json::from_value(Value::Object(doc.fields))?;
    Ok(Document::new(doc.id, fields))
}

/// Typed helpers over any [`DocumentStore`].
///
/// Documents whose body does not fit `T` are skipped with a warning; only a
/// failing store fails the whole list.
pub async fn list_typed<T: DeserializeOwned>(
    store: &dyn DocumentStore,
    collection: &str,
) -> Result<Vec<Document<T>>, StoreError> {
    let docs = store.list(collection).await?;
    Ok(docs
        .into_iter()
        .filter_map(|doc| {
            let id = doc.id.clone();
            from_document(doc)
                .map_err(|error| warn!(collection, %id, %error, "Skipping unreadable document"))
                .ok()
        })
        .collect())
}

pub async fn create_typed<T: Serialize + DeserializeOwned + Sync>(
    store: &dyn DocumentStore,
    collection: &str,
    record: &T,
) -> Result<Document<T>, StoreError> {
    let doc = store.create(collection, to_fields(record)?).await?;
    from_document(doc)
}

pub async fn update_typed<T: Serialize + DeserializeOwned + Sync>(
    store: &dyn DocumentStore,
    collection: &str,
    id: &str,
    record: &T,
) -> Result<Document<T>, StoreError> {
    let doc = store.update(collection, id, to_fields(record)?).await?;
    from_document(doc)
}
