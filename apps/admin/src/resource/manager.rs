use std::path::PathBuf;

use async_trait::async_trait;
use chrono::Utc;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use ieam_core::{Document, FormError};
use thiserror::Error;
use tracing::{debug, error, info, warn};

use super::Resource;
use crate::store::{create_typed, list_typed, update_typed, DocumentStore, StoreError};
use crate::upload::{ImageUploader, UploadError};

#[derive(Debug, Error)]
pub enum ManagerError {
    /// A save or delete is still outstanding.
    #[error("Aguarde a operação em andamento.")]
    Busy,

    #[error("Nenhum formulário aberto.")]
    NoDraft,

    /// Client-side checks failed; nothing was sent.
    #[error(transparent)]
    Validation(#[from] FormError),

    #[error("Erro ao fazer upload da imagem.")]
    Upload(#[source] UploadError),

    #[error("{message}")]
    Save {
        message: &'static str,
        #[source]
        source: StoreError,
    },

    #[error("{message}")]
    Delete {
        message: &'static str,
        #[source]
        source: StoreError,
    },
}

impl ManagerError {
    /// The sentence shown in the alert popup.
    pub fn alert_message(&self) -> String {
        self.to_string()
    }
}

/// Answers a yes/no question before a destructive operation.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F: FnMut(&str) -> bool> Confirm for F {
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Issued by [`ResourceManager::begin_load`]; only the newest ticket is honored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
}

/// The record being edited in the modal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft<R> {
    pub editing_id: Option<String>,
    pub record: R,
    pub image_file: Option<PathBuf>,
    pub gallery_files: Vec<PathBuf>,
}

impl<R: Resource> Draft<R> {
    pub const fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilter {
    /// Index into `Resource::CATEGORIES`.
    pub category: Option<usize>,
    pub query: String,
}

#[derive(Debug)]
pub struct ResourceManager<R: Resource> {
    records: Vec<Document<R>>,
    draft: Option<Draft<R>>,
    busy: bool,
    generation: u64,
    mounted: bool,
    pub filter: ListFilter,
}

impl<R: Resource> Default for ResourceManager<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Resource> ResourceManager<R> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            draft: None,
            busy: false,
            generation: 0,
            mounted: true,
            filter: ListFilter::default(),
        }
    }

    pub fn records(&self) -> &[Document<R>] {
        &self.records
    }

    pub fn find(&self, id: &str) -> Option<&Document<R>> {
        self.records.iter().find(|doc| doc.id == id)
    }

    pub const fn draft(&self) -> Option<&Draft<R>> {
        self.draft.as_ref()
    }

    pub fn draft_mut(&mut self) -> Option<&mut Draft<R>> {
        self.draft.as_mut()
    }

    pub const fn is_open(&self) -> bool {
        self.draft.is_some()
    }

    pub const fn is_busy(&self) -> bool {
        self.busy
    }

    pub const fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn mount(&mut self) {
        self.mounted = true;
    }

    /// Drops the modal and invalidates every outstanding load.
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.generation += 1;
        self.draft = None;
    }

    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        LoadTicket {
            generation: self.generation,
        }
    }

    /// Applies a load result unless a newer load was issued or the manager
    /// was unmounted since. Returns whether the result was applied.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<Document<R>>, StoreError>,
    ) -> bool {
        if !self.mounted || ticket.generation != self.generation {
            debug!(collection = R::COLLECTION, "Discarding stale load");
            return false;
        }
        match result {
            Ok(records) => {
                debug!(collection = R::COLLECTION, count = records.len(), "Loaded");
                self.records = records;
            }
            Err(e) => {
                error!(collection = R::COLLECTION, "Failed to load: {e}");
                self.records.clear();
            }
        }
        true
    }

    pub async fn load(&mut self, store: &dyn DocumentStore) {
        let ticket = self.begin_load();
        let result = list_typed(store, R::COLLECTION).await;
        self.finish_load(ticket, result);
    }

    pub fn open_create(&mut self) {
        self.draft = Some(Draft::default());
    }

    pub fn open_edit(&mut self, id: &str) -> bool {
        let Some(doc) = self.find(id) else {
            warn!(collection = R::COLLECTION, id, "Edit requested for unknown record");
            return false;
        };
        self.draft = Some(Draft {
            editing_id: Some(doc.id.clone()),
            record: doc.fields.clone(),
            ..Draft::default()
        });
        true
    }

    pub fn close(&mut self) {
        self.draft = None;
    }

    /// Attaches a local file to be uploaded into the image field on submit.
    pub fn select_image(&mut self, file: impl Into<PathBuf>) -> bool {
        match self.draft.as_mut() {
            Some(draft) if R::image_key().is_some() => {
                draft.image_file = Some(file.into());
                true
            }
            _ => false,
        }
    }

    pub fn add_gallery_image(&mut self, file: impl Into<PathBuf>) -> bool {
        match self.draft.as_mut() {
            Some(draft) if R::gallery_key().is_some() => {
                draft.gallery_files.push(file.into());
                true
            }
            _ => false,
        }
    }

    /// Validates, uploads any attached images, then creates or updates.
    /// On success the list is reloaded and the modal closes; on failure the
    /// modal stays open with the draft intact.
    pub async fn submit(
        &mut self,
        store: &dyn DocumentStore,
        uploader: &dyn ImageUploader,
    ) -> Result<Document<R>, ManagerError> {
        if self.busy {
            return Err(ManagerError::Busy);
        }
        let draft = self.draft.as_mut().ok_or(ManagerError::NoDraft)?;
        draft.record.validate(draft.image_file.is_some())?;

        self.busy = true;
        let result = save_draft(draft, store, uploader).await;
        self.busy = false;

        let saved = result?;
        info!(collection = R::COLLECTION, id = %saved.id, "Saved");
        self.draft = None;
        self.load(store).await;
        Ok(saved)
    }

    /// Deletes after the confirmer agrees. `Ok(false)` means it was cancelled.
    pub async fn remove(
        &mut self,
        id: &str,
        confirm: &mut (dyn Confirm + Send),
        store: &dyn DocumentStore,
    ) -> Result<bool, ManagerError> {
        if self.busy {
            return Err(ManagerError::Busy);
        }
        if !confirm.confirm(R::DELETE_PROMPT) {
            return Ok(false);
        }

        self.busy = true;
        let result = store.delete(R::COLLECTION, id).await;
        self.busy = false;

        result.map_err(|source| {
            error!(collection = R::COLLECTION, id, "Delete failed: {source}");
            ManagerError::Delete {
                message: R::DELETE_ERROR,
                source,
            }
        })?;
        info!(collection = R::COLLECTION, id, "Deleted");
        self.load(store).await;
        Ok(true)
    }

    /// Writes a single change to an existing record without opening the modal.
    pub async fn apply(
        &mut self,
        id: &str,
        change: impl FnOnce(&mut R) + Send,
        store: &dyn DocumentStore,
    ) -> Result<(), ManagerError> {
        if self.busy {
            return Err(ManagerError::Busy);
        }
        let Some(doc) = self.find(id) else {
            return Err(ManagerError::NoDraft);
        };
        let mut record = doc.fields.clone();
        change(&mut record);

        self.busy = true;
        let result = update_typed(store, R::COLLECTION, id, &record).await;
        self.busy = false;

        result.map_err(|source| ManagerError::Save {
            message: R::SAVE_ERROR,
            source,
        })?;
        self.load(store).await;
        Ok(())
    }

    /// Records passing the category filter, ranked by fuzzy score when a
    /// query is set and in store order otherwise.
    pub fn filtered(&self) -> Vec<&Document<R>> {
        let query = self.filter.query.trim();
        let matcher = SkimMatcherV2::default();

        let mut scored: Vec<(i64, usize, &Document<R>)> = self
            .records
            .iter()
            .enumerate()
            .filter(|(_, doc)| {
                self.filter
                    .category
                    .map_or(true, |category| doc.category() == Some(category))
            })
            .filter_map(|(position, doc)| {
                if query.is_empty() {
                    Some((0, position, doc))
                } else {
                    matcher
                        .fuzzy_match(&doc.search_text(), query)
                        .map(|score| (score, position, doc))
                }
            })
            .collect();

        if !query.is_empty() {
            scored.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
        }
        scored.into_iter().map(|(_, _, doc)| doc).collect()
    }

    /// Steps the category filter through "all" and every category.
    pub fn cycle_category(&mut self) {
        let count = R::CATEGORIES.len();
        self.filter.category = match self.filter.category {
            _ if count == 0 => None,
            None => Some(0),
            Some(index) if index + 1 < count => Some(index + 1),
            Some(_) => None,
        };
    }
}

async fn save_draft<R: Resource>(
    draft: &mut Draft<R>,
    store: &dyn DocumentStore,
    uploader: &dyn ImageUploader,
) -> Result<Document<R>, ManagerError> {
    if let (Some(file), Some(key)) = (draft.image_file.clone(), R::image_key()) {
        let url = uploader.upload(&file).await.map_err(ManagerError::Upload)?;
        draft.record.set(key, &url);
        draft.image_file = None;
    }
    if let Some(key) = R::gallery_key() {
        while let Some(file) = draft.gallery_files.first().cloned() {
            let url = uploader.upload(&file).await.map_err(ManagerError::Upload)?;
            let mut urls = draft.record.get(key);
            if !urls.is_empty() {
                urls.push_str(", ");
            }
            urls.push_str(&url);
            draft.record.set(key, &urls);
            draft.gallery_files.remove(0);
        }
    }

    let mut record = draft.record.clone();
    record.prepare(Utc::now());

    let result = match &draft.editing_id {
        Some(id) => update_typed(store, R::COLLECTION, id, &record).await,
        None => create_typed(store, R::COLLECTION, &record).await,
    };
    result.map_err(|source| {
        error!(collection = R::COLLECTION, "Save failed: {source}");
        ManagerError::Save {
            message: R::SAVE_ERROR,
            source,
        }
    })
}

/// Object-safe view of a manager so the app can hold all of them behind one type.
#[async_trait]
pub trait AdminPanel: Send {
    fn title(&self) -> &'static str;
    fn columns(&self) -> &'static [&'static str];
    fn categories(&self) -> &'static [&'static str];
    fn filter(&self) -> &ListFilter;
    fn filter_mut(&mut self) -> &mut ListFilter;
    fn cycle_category(&mut self);
    /// `(id, cells)` for every visible record.
    fn rows(&self) -> Vec<(String, Vec<String>)>;
    fn len(&self) -> usize;
    fn is_busy(&self) -> bool;
    fn delete_prompt(&self) -> &'static str;

    fn draft_fields(&self) -> Option<Vec<(super::FieldSpec, String)>>;
    fn draft_image(&self) -> Option<PathBuf>;
    fn draft_is_editing(&self) -> bool;
    /// Writes one draft field. Admin-only fields are refused unless `as_admin`.
    fn set_draft_field(&mut self, key: &str, value: &str, as_admin: bool) -> bool;
    fn select_image(&mut self, file: PathBuf) -> bool;
    fn add_gallery_image(&mut self, file: PathBuf) -> bool;
    fn open_create(&mut self);
    fn open_edit(&mut self, id: &str) -> bool;
    fn close(&mut self);
    fn mount(&mut self);
    fn unmount(&mut self);

    async fn load(&mut self, store: &dyn DocumentStore);
    async fn submit(
        &mut self,
        store: &dyn DocumentStore,
        uploader: &dyn ImageUploader,
    ) -> Result<(), ManagerError>;
    async fn remove_confirmed(&mut self, id: &str, store: &dyn DocumentStore)
        -> Result<(), ManagerError>;
}

#[async_trait]
impl<R: Resource> AdminPanel for ResourceManager<R> {
    fn title(&self) -> &'static str {
        R::PLURAL
    }

    fn columns(&self) -> &'static [&'static str] {
        R::COLUMNS
    }

    fn categories(&self) -> &'static [&'static str] {
        R::CATEGORIES
    }

    fn filter(&self) -> &ListFilter {
        &self.filter
    }

    fn filter_mut(&mut self) -> &mut ListFilter {
        &mut self.filter
    }

    fn cycle_category(&mut self) {
        Self::cycle_category(self);
    }

    fn rows(&self) -> Vec<(String, Vec<String>)> {
        self.filtered()
            .into_iter()
            .map(|doc| (doc.id.clone(), doc.row()))
            .collect()
    }

    fn len(&self) -> usize {
        self.records.len()
    }

    fn is_busy(&self) -> bool {
        self.busy
    }

    fn delete_prompt(&self) -> &'static str {
        R::DELETE_PROMPT
    }

    fn draft_fields(&self) -> Option<Vec<(super::FieldSpec, String)>> {
        self.draft.as_ref().map(|draft| {
            R::FIELDS
                .iter()
                .map(|field| (*field, draft.record.get(field.key)))
                .collect()
        })
    }

    fn draft_image(&self) -> Option<PathBuf> {
        self.draft.as_ref().and_then(|draft| draft.image_file.clone())
    }

    fn draft_is_editing(&self) -> bool {
        self.draft.as_ref().is_some_and(Draft::is_editing)
    }

    fn set_draft_field(&mut self, key: &str, value: &str, as_admin: bool) -> bool {
        let admin_only = R::FIELDS
            .iter()
            .any(|field| field.key == key && field.admin_only);
        if admin_only && !as_admin {
            warn!(collection = R::COLLECTION, key, "Refused admin-only field change");
            return false;
        }
        let Some(draft) = self.draft.as_mut() else {
            return false;
        };
        draft.record.set(key, value);
        true
    }

    fn select_image(&mut self, file: PathBuf) -> bool {
        Self::select_image(self, file)
    }

    fn add_gallery_image(&mut self, file: PathBuf) -> bool {
        Self::add_gallery_image(self, file)
    }

    fn open_create(&mut self) {
        Self::open_create(self);
    }

    fn open_edit(&mut self, id: &str) -> bool {
        Self::open_edit(self, id)
    }

    fn close(&mut self) {
        Self::close(self);
    }

    fn mount(&mut self) {
        Self::mount(self);
    }

    fn unmount(&mut self) {
        Self::unmount(self);
    }

    async fn load(&mut self, store: &dyn DocumentStore) {
        Self::load(self, store).await;
    }

    async fn submit(
        &mut self,
        store: &dyn DocumentStore,
        uploader: &dyn ImageUploader,
    ) -> Result<(), ManagerError> {
        Self::submit(self, store, uploader).await.map(|_| ())
    }

    async fn remove_confirmed(
        &mut self,
        id: &str,
        store: &dyn DocumentStore,
    ) -> Result<(), ManagerError> {
        Self::remove(self, id, &mut |_: &str| true, store)
            .await
            .map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::to_fields;
    use crate::testing::{call_log, calls, FakeUploader, MemoryStore};
    use ieam_core::{BlogPost, Event, Member, MemberRole};

    fn event(title: &str) -> Event {
        Event {
            title: title.to_string(),
            date: "2024-08-10".to_string(),
            time: "19:00".to_string(),
            description: "Culto especial".to_string(),
            ..Event::default()
        }
    }

    #[tokio::test]
    async fn test_create_uploads_image_before_create() -> Result<(), Box<dyn std::error::Error>> {
        let log = call_log();
        let store = MemoryStore::with_log(log.clone());
        let uploader = FakeUploader::returning("https://i.ibb.co/abc/flyer.png", log.clone());
        let mut manager = ResourceManager::<Event>::new();

        manager.open_create();
        if let Some(draft) = manager.draft_mut() {
            draft.record = event("Culto de Celebração!");
        }
        assert!(manager.select_image("flyer.png"));
        let saved = manager.submit(&store, &uploader).await?;

        assert_eq!(
            calls(&log),
            vec!["upload flyer.png", "create events", "list events"]
        );
        assert_eq!(saved.image, "https://i.ibb.co/abc/flyer.png");
        assert_eq!(saved.slug.as_deref(), Some("culto-de-celebracao"));
        assert_eq!(manager.records().len(), 1);
        assert_eq!(manager.records()[0].image, "https://i.ibb.co/abc/flyer.png");
        assert!(!manager.is_open());
        Ok(())
    }

    #[tokio::test]
    async fn test_cancelled_remove_calls_nothing() -> Result<(), Box<dyn std::error::Error>> {
        let log = call_log();
        let store = MemoryStore::with_log(log.clone());
        store.seed("events", "e1", to_fields(&event("Vigília"))?);
        let mut manager = ResourceManager::<Event>::new();
        manager.load(&store).await;

        let mut asked = Vec::new();
        let mut decline = |prompt: &str| {
            asked.push(prompt.to_string());
            false
        };
        let removed = manager.remove("e1", &mut decline, &store).await?;

        assert!(!removed);
        assert_eq!(asked, vec!["Tem certeza que deseja excluir este evento?"]);
        assert_eq!(calls(&log), vec!["list events"]);
        assert_eq!(manager.records().len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_confirmed_remove_deletes_and_reloads() -> Result<(), Box<dyn std::error::Error>> {
        let log = call_log();
        let store = MemoryStore::with_log(log.clone());
        store.seed("events", "e1", to_fields(&event("Vigília"))?);
        let mut manager = ResourceManager::<Event>::new();
        manager.load(&store).await;

        let removed = manager.remove("e1", &mut |_: &str| true, &store).await?;

        assert!(removed);
        assert_eq!(
            calls(&log),
            vec!["list events", "delete events e1", "list events"]
        );
        assert!(manager.records().is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_validation_failure_makes_no_calls() -> Result<(), Box<dyn std::error::Error>> {
        let log = call_log();
        let store = MemoryStore::with_log(log.clone());
        let uploader = FakeUploader::returning("https://x", log.clone());
        let mut manager = ResourceManager::<Event>::new();

        manager.open_create();
        manager.select_image("flyer.png");
        let err = manager
            .submit(&store, &uploader)
            .await
            .err()
            .ok_or("expected an error")?;

        assert_eq!(err.alert_message(), "Preencha todos os campos obrigatórios.");
        assert!(calls(&log).is_empty());
        assert!(manager.is_open());
        Ok(())
    }

    #[tokio::test]
    async fn test_save_failure_keeps_the_modal_open() -> Result<(), Box<dyn std::error::Error>> {
        let log = call_log();
        let store = MemoryStore::failing_writes(log.clone());
        let uploader = FakeUploader::returning("https://i.ibb.co/p.png", log.clone());
        let mut manager = ResourceManager::<Event>::new();

        manager.open_create();
        if let Some(draft) = manager.draft_mut() {
            draft.record = event("Vigília");
        }
        manager.select_image("p.png");
        let err = manager
            .submit(&store, &uploader)
            .await
            .err()
            .ok_or("expected an error")?;

        assert_eq!(err.alert_message(), "Erro ao salvar evento.");
        let draft = manager.draft().ok_or("modal closed")?;
        assert_eq!(draft.record.title, "Vigília");
        assert_eq!(draft.record.image, "https://i.ibb.co/p.png");
        assert!(!manager.is_busy());
        Ok(())
    }

    #[tokio::test]
    async fn test_upload_failure_skips_the_write() -> Result<(), Box<dyn std::error::Error>> {
        let log = call_log();
        let store = MemoryStore::with_log(log.clone());
        let uploader = FakeUploader::failing(log.clone());
        let mut manager = ResourceManager::<Event>::new();

        manager.open_create();
        if let Some(draft) = manager.draft_mut() {
            draft.record = event("Vigília");
        }
        manager.select_image("p.png");
        let err = manager
            .submit(&store, &uploader)
            .await
            .err()
            .ok_or("expected an error")?;

        assert_eq!(err.alert_message(), "Erro ao fazer upload da imagem.");
        assert_eq!(calls(&log), vec!["upload p.png"]);
        assert!(manager.is_open());
        Ok(())
    }

    #[tokio::test]
    async fn test_edit_updates_in_place() -> Result<(), Box<dyn std::error::Error>> {
        let log = call_log();
        let store = MemoryStore::with_log(log.clone());
        let uploader = FakeUploader::failing(log.clone());
        store.seed("events", "e1", to_fields(&event("Vigília"))?);
        let mut manager = ResourceManager::<Event>::new();
        manager.load(&store).await;

        assert!(manager.open_edit("e1"));
        if let Some(draft) = manager.draft_mut() {
            draft.record.time = "22:00".to_string();
        }
        let saved = manager.submit(&store, &uploader).await?;

        assert_eq!(saved.id, "e1");
        assert_eq!(manager.records()[0].time, "22:00");
        assert_eq!(
            calls(&log),
            vec!["list events", "update events e1", "list events"]
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_stale_loads_are_discarded() -> Result<(), Box<dyn std::error::Error>> {
        let mut manager = ResourceManager::<Event>::new();
        let first = manager.begin_load();
        let second = manager.begin_load();

        assert!(manager.finish_load(second, Ok(vec![Document::new("new", event("B"))])));
        assert!(!manager.finish_load(first, Ok(vec![Document::new("old", event("A"))])));
        assert_eq!(manager.records()[0].id, "new");
        Ok(())
    }

    #[tokio::test]
    async fn test_loads_after_unmount_are_ignored() -> Result<(), Box<dyn std::error::Error>> {
        let mut manager = ResourceManager::<Event>::new();
        let ticket = manager.begin_load();
        manager.unmount();

        assert!(!manager.finish_load(ticket, Ok(vec![Document::new("e1", event("A"))])));
        assert!(manager.records().is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_failed_load_empties_the_list() -> Result<(), Box<dyn std::error::Error>> {
        let store = MemoryStore::failing_lists();
        let mut manager = ResourceManager::<Event>::new();
        let ticket = manager.begin_load();
        manager.finish_load(ticket, Ok(vec![Document::new("e1", event("A"))]));

        manager.load(&store).await;
        assert!(manager.records().is_empty());
        Ok(())
    }

    #[test]
    fn test_admin_flag_needs_an_admin_session() {
        let mut manager = ResourceManager::<Member>::new();
        manager.open_create();

        assert!(!manager.set_draft_field("isAdmin", "Sim", false));
        assert!(!manager.draft().is_some_and(|draft| draft.record.is_admin));
        assert!(manager.set_draft_field("name", "Ana", false));

        assert!(manager.set_draft_field("isAdmin", "Sim", true));
        assert!(manager.draft().is_some_and(|draft| draft.record.is_admin));
    }

    #[tokio::test]
    async fn test_load_keeps_readable_members() -> Result<(), Box<dyn std::error::Error>> {
        let store = MemoryStore::default();
        store.seed(
            "members",
            "m1",
            to_fields(&Member {
                name: "Ana".to_string(),
                role: MemberRole::Diacono,
                ..Member::default()
            })?,
        );
        let mut broken = to_fields(&Member::default())?;
        broken.insert("role".to_string(), "Líder".into());
        store.seed("members", "m2", broken);

        let mut manager = ResourceManager::<Member>::new();
        manager.load(&store).await;

        assert_eq!(manager.records().len(), 1);
        assert_eq!(manager.records()[0].id, "m1");
        Ok(())
    }

    #[tokio::test]
    async fn test_busy_manager_rejects_submit() -> Result<(), Box<dyn std::error::Error>> {
        let log = call_log();
        let store = MemoryStore::with_log(log.clone());
        let uploader = FakeUploader::failing(log.clone());
        let mut manager = ResourceManager::<Event>::new();
        manager.open_create();
        manager.busy = true;

        let result = manager.submit(&store, &uploader).await;
        assert!(matches!(result, Err(ManagerError::Busy)));
        assert!(calls(&log).is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_gallery_uploads_append_to_images() -> Result<(), Box<dyn std::error::Error>> {
        let log = call_log();
        let store = MemoryStore::with_log(log.clone());
        let uploader = FakeUploader::returning("https://i.ibb.co/g.png", log.clone());
        let mut manager = ResourceManager::<BlogPost>::new();

        manager.open_create();
        if let Some(draft) = manager.draft_mut() {
            draft.record.title = "Batismo".to_string();
            draft.record.content = "Texto".to_string();
            draft.record.author = "Pr. João".to_string();
            draft.record.cover_image = "https://i.ibb.co/c.png".to_string();
            draft.record.images = vec!["https://i.ibb.co/a.png".to_string()];
        }
        assert!(manager.add_gallery_image("g.png"));
        let saved = manager.submit(&store, &uploader).await?;

        assert_eq!(
            saved.images,
            vec!["https://i.ibb.co/a.png", "https://i.ibb.co/g.png"]
        );
        assert_eq!(saved.slug, "batismo");
        Ok(())
    }

    #[tokio::test]
    async fn test_filter_by_role_and_fuzzy_query() -> Result<(), Box<dyn std::error::Error>> {
        let store = MemoryStore::default();
        for (id, name, role) in [
            ("m1", "Ana Souza", MemberRole::Diacono),
            ("m2", "Bruno Lima", MemberRole::Membro),
            ("m3", "Ana Lima", MemberRole::Membro),
        ] {
            let member = Member {
                name: name.to_string(),
                role,
                ..Member::default()
            };
            store.seed("members", id, to_fields(&member)?);
        }
        let mut manager = ResourceManager::<Member>::new();
        manager.load(&store).await;

        manager.filter.category = Some(MemberRole::Membro.index());
        let ids: Vec<_> = manager.filtered().iter().map(|doc| doc.id.clone()).collect();
        assert_eq!(ids, vec!["m2", "m3"]);

        manager.filter.query = "ana".to_string();
        let ids: Vec<_> = manager.filtered().iter().map(|doc| doc.id.clone()).collect();
        assert_eq!(ids, vec!["m3"]);

        manager.filter.category = None;
        manager.filter.query = "zzz".to_string();
        assert!(manager.filtered().is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_apply_toggles_prayer_status() -> Result<(), Box<dyn std::error::Error>> {
        use ieam_core::{PrayerRequest, PrayerStatus};

        let store = MemoryStore::default();
        let request = PrayerRequest {
            name: "Maria".to_string(),
            request: "Saúde da família".to_string(),
            ..PrayerRequest::default()
        };
        store.seed("prayer_requests", "p1", to_fields(&request)?);
        let mut manager = ResourceManager::<PrayerRequest>::new();
        manager.load(&store).await;

        manager
            .apply("p1", |r| r.status = r.status.toggled(), &store)
            .await?;
        assert_eq!(manager.records()[0].status, PrayerStatus::Orado);
        Ok(())
    }

    #[test]
    fn cycle_category_wraps_back_to_all() {
        let mut manager = ResourceManager::<BlogPost>::new();
        manager.cycle_category();
        assert_eq!(manager.filter.category, Some(0));
        manager.cycle_category();
        assert_eq!(manager.filter.category, Some(1));
        manager.cycle_category();
        assert_eq!(manager.filter.category, None);

        let mut events = ResourceManager::<Event>::new();
        events.cycle_category();
        assert_eq!(events.filter.category, None);
    }
}
