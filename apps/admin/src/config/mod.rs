use color_eyre::eyre::eyre;
use dotenv::dotenv;
use std::env;
use std::path::{Path, PathBuf};

pub const DEFAULT_DATABASE_NAME: &str = "ieam.db";
pub const DEFAULT_LOG_FILE: &str = "ieam-admin.log";
pub const DEFAULT_SITE_EXPORT: &str = "site.json";
pub const DEFAULT_AUTH_BASE_URL: &str = "https://identitytoolkit.googleapis.com/v1";
pub const DEFAULT_UPLOAD_URL: &str = "https://api.imgbb.com/1/upload";
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@ieam.com.br";

/// Runtime settings, read from the environment (and `.env`) once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub database_url: String,
    pub database_path: PathBuf,
    pub imgbb_api_key: Option<String>,
    pub firebase_api_key: Option<String>,
    pub auth_base_url: String,
    pub upload_url: String,
    pub admin_email: String,
    pub site_export: PathBuf,
    pub prayer_endpoint: Option<String>,
    pub log_file: PathBuf,
    pub debug: bool,
}

impl AppConfig {
    pub fn from_env() -> color_eyre::eyre::Result<Self> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes `std::env`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> color_eyre::eyre::Result<Self> {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let base_dir = env::current_dir()?;
        let db_name = var("DATABASE_NAME").unwrap_or_else(|| DEFAULT_DATABASE_NAME.to_string());
        let database_path = base_dir.join(db_name);
        let database_url = sqlite_url(&database_path)?;

        Ok(Self {
            database_url,
            database_path,
            imgbb_api_key: var("IMGBB_API_KEY"),
            firebase_api_key: var("FIREBASE_API_KEY"),
            auth_base_url: var("AUTH_BASE_URL")
                .unwrap_or_else(|| DEFAULT_AUTH_BASE_URL.to_string()),
            upload_url: var("UPLOAD_URL").unwrap_or_else(|| DEFAULT_UPLOAD_URL.to_string()),
            admin_email: var("ADMIN_EMAIL").unwrap_or_else(|| DEFAULT_ADMIN_EMAIL.to_string()),
            site_export: var("SITE_EXPORT")
                .map_or_else(|| PathBuf::from(DEFAULT_SITE_EXPORT), PathBuf::from),
            prayer_endpoint: var("PRAYER_ENDPOINT"),
            log_file: var("LOG_FILE").map_or_else(|| PathBuf::from(DEFAULT_LOG_FILE), PathBuf::from),
            debug: var("DEBUG").is_some_and(|value| value != "0"),
        })
    }
}

/// Formats a sqlx sqlite URL: three slashes for absolute paths, two for relative ones.
pub fn sqlite_url(path: &Path) -> color_eyre::eyre::Result<String> {
    let path_str = path
        .to_str()
        .ok_or_else(|| eyre!("Invalid database path"))?;
    let clean_path = path_str.trim_start_matches('/');

    if path.is_absolute() {
        Ok(format!("sqlite:///{clean_path}"))
    } else {
        Ok(format!("sqlite://{clean_path}"))
    }
}
