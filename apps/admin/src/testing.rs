//! In-memory fakes for the hosted collaborators.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Mutex;

use async_trait::async_trait;
use ieam_core::Document;

use crate::auth::{AuthError, AuthProvider, AuthUser};
use crate::store::{DocumentStore, Fields, StoreError};
use crate::upload::{ImageUploader, UploadError};

/// Shared call log so tests can assert on ordering across fakes.
pub type CallLog = std::sync::Arc<Mutex<Vec<String>>>;

pub fn call_log() -> CallLog {
    CallLog::default()
}

fn record(log: &CallLog, entry: String) {
    if let Ok(mut calls) = log.lock() {
        calls.push(entry);
    }
}

pub fn calls(log: &CallLog) -> Vec<String> {
    log.lock().map(|calls| calls.clone()).unwrap_or_default()
}

#[derive(Default)]
pub struct MemoryStore {
    collections: Mutex<BTreeMap<String, Vec<Document<Fields>>>>,
    next_id: Mutex<u32>,
    pub log: CallLog,
    pub fail_writes: bool,
    pub fail_lists: bool,
}

impl MemoryStore {
    pub fn with_log(log: CallLog) -> Self {
        Self {
            log,
            ..Self::default()
        }
    }

    pub fn failing_writes(log: CallLog) -> Self {
        Self {
            fail_writes: true,
            ..Self::with_log(log)
        }
    }

    pub fn failing_lists() -> Self {
        Self {
            fail_lists: true,
            ..Self::default()
        }
    }

    pub fn seed(&self, collection: &str, id: &str, fields: Fields) {
        if let Ok(mut collections) = self.collections.lock() {
            collections
                .entry(collection.to_string())
                .or_default()
                .push(Document::new(id, fields));
        }
    }

    pub fn documents(&self, collection: &str) -> Vec<Document<Fields>> {
        self.collections
            .lock()
            .ok()
            .and_then(|collections| collections.get(collection).cloned())
            .unwrap_or_default()
    }

    fn write_error() -> StoreError {
        StoreError::Database(sqlx::Error::PoolClosed)
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn list(&self, collection: &str) -> Result<Vec<Document<Fields>>, StoreError> {
        record(&self.log, format!("list {collection}"));
        if self.fail_lists {
            return Err(Self::write_error());
        }
        Ok(self.documents(collection))
    }

    async fn create(&self, collection: &str, fields: Fields) -> Result<Document<Fields>, StoreError> {
        record(&self.log, format!("create {collection}"));
        if self.fail_writes {
            return Err(Self::write_error());
        }
        let id = {
            let mut next = self.next_id.lock().map_err(|_| Self::write_error())?;
            *next += 1;
            format!("id{next}")
        };
        self.seed(collection, &id, fields.clone());
        Ok(Document::new(id, fields))
    }

    async fn update(
        &self,
        collection: &str,
        id: &str,
        fields: Fields,
    ) -> Result<Document<Fields>, StoreError> {
        record(&self.log, format!("update {collection} {id}"));
        if self.fail_writes {
            return Err(Self::write_error());
        }
        let mut collections = self.collections.lock().map_err(|_| Self::write_error())?;
        let doc = collections
            .get_mut(collection)
            .and_then(|docs| docs.iter_mut().find(|doc| doc.id == id))
            .ok_or_else(|| StoreError::NotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            })?;
        doc.fields = fields.clone();
        Ok(Document::new(id, fields))
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        record(&self.log, format!("delete {collection} {id}"));
        if self.fail_writes {
            return Err(Self::write_error());
        }
        let mut collections = self.collections.lock().map_err(|_| Self::write_error())?;
        if let Some(docs) = collections.get_mut(collection) {
            docs.retain(|doc| doc.id != id);
        }
        Ok(())
    }
}

pub struct FakeUploader {
    pub url: Option<String>,
    pub log: CallLog,
}

impl FakeUploader {
    pub fn returning(url: &str, log: CallLog) -> Self {
        Self {
            url: Some(url.to_string()),
            log,
        }
    }

    pub fn failing(log: CallLog) -> Self {
        Self { url: None, log }
    }
}

#[async_trait]
impl ImageUploader for FakeUploader {
    async fn upload(&self, file: &Path) -> Result<String, UploadError> {
        record(&self.log, format!("upload {}", file.display()));
        self.url
            .clone()
            .ok_or_else(|| UploadError::Rejected("Invalid API v1 key.".to_string()))
    }
}

pub struct FakeAuth {
    pub uid: String,
    pub log: CallLog,
}

impl FakeAuth {
    pub fn new(uid: &str, log: CallLog) -> Self {
        Self {
            uid: uid.to_string(),
            log,
        }
    }
}

#[async_trait]
impl AuthProvider for FakeAuth {
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthUser, AuthError> {
        record(&self.log, format!("sign_in {email}"));
        if password == "wrong" {
            return Err(AuthError::from_provider("INVALID_PASSWORD", "INVALID_PASSWORD"));
        }
        Ok(AuthUser {
            uid: self.uid.clone(),
            email: email.to_string(),
            display_name: None,
            id_token: "token".to_string(),
        })
    }

    async fn sign_up(&self, name: &str, email: &str, _password: &str) -> Result<AuthUser, AuthError> {
        record(&self.log, format!("sign_up {email}"));
        Ok(AuthUser {
            uid: self.uid.clone(),
            email: email.to_string(),
            display_name: Some(name.to_string()),
            id_token: "token".to_string(),
        })
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        record(&self.log, "sign_out".to_string());
        Ok(())
    }
}
