use std::fmt;

use color_eyre::Result;

use crate::auth::FirebaseAuth;
use crate::config::AppConfig;
use crate::db::{create_database_pool, SqliteStore};
use crate::store::DocumentStore;
use crate::upload::ImgbbUploader;

use super::state::Collection;

/// The hosted collaborators and local store the app talks to.
pub struct AppActions {
    pub config: AppConfig,
    pub store: Option<SqliteStore>,
    pub auth: FirebaseAuth,
    pub uploader: ImgbbUploader,
}

impl fmt::Debug for AppActions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppActions")
            .field("database_url", &self.config.database_url)
            .field("store_ready", &self.store.is_some())
            .finish_non_exhaustive()
    }
}

impl AppActions {
    pub fn new(config: AppConfig) -> Self {
        let auth = FirebaseAuth::new(&config.auth_base_url, config.firebase_api_key.clone());
        let uploader = ImgbbUploader::new(&config.upload_url, config.imgbb_api_key.clone());
        Self {
            config,
            store: None,
            auth,
            uploader,
        }
    }

    pub async fn initialize(&mut self) -> Result<()> {
        let pool = create_database_pool(&self.config).await?;
        self.store = Some(SqliteStore::new(pool));
        Ok(())
    }

    pub fn store(&self) -> Result<&SqliteStore> {
        self.store
            .as_ref()
            .ok_or_else(|| color_eyre::eyre::eyre!("Database not initialized"))
    }

    pub fn document_store(&self) -> Result<&dyn DocumentStore> {
        Ok(self.store()?)
    }
}

/// Work queued by input handlers and run by the event loop after the next draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    SignIn,
    SignUp,
    SignOut,
    Refresh,
    Load(Collection),
    Submit(Collection),
    Delete { collection: Collection, id: String },
    TogglePrayer(String),
    SaveProfile,
    Export,
}

impl PendingAction {
    /// Shown next to the spinner while the action runs.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::SignIn => "Entrando...",
            Self::SignUp => "Criando conta...",
            Self::SignOut => "Saindo...",
            Self::Refresh | Self::Load(_) => "Carregando...",
            Self::Submit(_) | Self::SaveProfile | Self::TogglePrayer(_) => "Salvando...",
            Self::Delete { .. } => "Excluindo...",
            Self::Export => "Exportando site...",
        }
    }
}
