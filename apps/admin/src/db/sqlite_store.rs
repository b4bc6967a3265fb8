use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use ieam_core::Document;
use serde_json::Value;
use sqlx::SqlitePool;
use tracing::debug;
use ulid::Ulid;

use crate::db::models::DocumentRow;
use crate::db::queries;
use crate::store::{DocumentStore, Fields, StoreError};

/// [`DocumentStore`] backed by the sqlite `documents` table. Ids are lowercase ULIDs.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn decode(row: DocumentRow) -> Result<Document<Fields>, StoreError> {
    match serde_json::from_str::<Value>(&row.body)? {
        Value::Object(fields) => Ok(Document::new(row.id, fields)),
        _ => Err(StoreError::NotAnObject),
    }
}

#[async_trait]
impl DocumentStore for SqliteStore {
    async fn list(&self, collection: &str) -> Result<Vec<Document<Fields>>, StoreError> {
        let rows = queries::list_documents(&self.pool, collection).await?;
        debug!(collection, count = rows.len(), "Listed documents");
        rows.into_iter().map(decode).collect()
    }

    async fn create(
        &self,
        collection: &str,
        fields: Fields,
    ) -> Result<Document<Fields>, StoreError> {
        let id = Ulid::new().to_string().to_lowercase();
        let body = serde_json::to_string(&fields)?;
        queries::insert_document(&self.pool, collection, &id, &body, &now()).await?;
        debug!(collection, %id, "Created document");
        Ok(Document::new(id, fields))
    }

    async fn update(
        &self,
        collection: &str,
        id: &str,
        fields: Fields,
    ) -> Result<Document<Fields>, StoreError> {
        let body = serde_json::to_string(&fields)?;
        if !queries::update_document(&self.pool, collection, id, &body, &now()).await? {
            return Err(StoreError::NotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            });
        }
        debug!(collection, id, "Updated document");
        Ok(Document::new(id, fields))
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        if !queries::delete_document(&self.pool, collection, id).await? {
            return Err(StoreError::NotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            });
        }
        debug!(collection, id, "Deleted document");
        Ok(())
    }
}
