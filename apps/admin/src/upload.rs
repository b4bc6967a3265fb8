use std::path::Path;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum UploadError {
    /// No `IMGBB_API_KEY` was configured.
    #[error("IMGBB_API_KEY is not configured")]
    MissingApiKey,

    /// The selected file could not be read.
    #[error("could not read {path}: {source}")]
    File {
        path: String,
        source: std::io::Error,
    },

    /// The request never produced a readable response.
    #[error("upload request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered `{success: false}`.
    #[error("upload rejected: {0}")]
    Rejected(String),
}

/// Sends one local image to a hosting service and returns its public URL.
#[async_trait]
pub trait ImageUploader: Send + Sync {
    async fn upload(&self, file: &Path) -> Result<String, UploadError>;
}

#[derive(Debug, Deserialize)]
struct ImgbbResponse {
    #[serde(default)]
    success: bool,
    data: Option<ImgbbData>,
    error: Option<ImgbbError>,
}

#[derive(Debug, Deserialize)]
struct ImgbbData {
    url: String,
}

#[derive(Debug, Deserialize)]
struct ImgbbError {
    message: String,
}

/// Reads the URL out of an ImgBB JSON reply.
fn parse_response(body: &str) -> Result<String, UploadError> {
    let response: ImgbbResponse = serde_json::from_str(body)
        .map_err(|e| UploadError::Rejected(format!("unexpected response: {e}")))?;

    match response {
        ImgbbResponse {
            success: true,
            data: Some(data),
            ..
        } => Ok(data.url),
        ImgbbResponse {
            error: Some(error), ..
        } => Err(UploadError::Rejected(error.message)),
        _ => Err(UploadError::Rejected("upload failed".to_string())),
    }
}

pub struct ImgbbUploader {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl ImgbbUploader {
    pub fn new(endpoint: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            api_key,
        }
    }
}

#[async_trait]
impl ImageUploader for ImgbbUploader {
    async fn upload(&self, file: &Path) -> Result<String, UploadError> {
        let api_key = self.api_key.as_deref().ok_or(UploadError::MissingApiKey)?;

        let bytes = tokio::fs::read(file).await.map_err(|source| UploadError::File {
            path: file.display().to_string(),
            source,
        })?;
        let file_name = file
            .file_name()
            .map_or_else(|| "image".to_string(), |name| name.to_string_lossy().to_string());

        let form = Form::new().part("image", Part::bytes(bytes).file_name(file_name));
        let body = self
            .client
            .post(&self.endpoint)
            .query(&[("key", api_key)])
            .multipart(form)
            .send()
            .await?
            .text()
            .await?;

        match parse_response(&body) {
            Ok(url) => {
                info!(%url, "Image uploaded");
                Ok(url)
            }
            Err(e) => {
                warn!("Image upload failed: {e}");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_returns_data_url() {
        let url = parse_response(r#"{"success":true,"data":{"url":"https://i.ibb.co/x/a.png"}}"#);
        assert_eq!(url.ok().as_deref(), Some("https://i.ibb.co/x/a.png"));
    }

    #[test]
    fn failure_carries_endpoint_message() {
        let err = parse_response(r#"{"success":false,"error":{"message":"Invalid API v1 key."}}"#);
        assert!(matches!(err, Err(UploadError::Rejected(msg)) if msg == "Invalid API v1 key."));
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(matches!(
            parse_response("<html>"),
            Err(UploadError::Rejected(_))
        ));
    }

    #[tokio::test]
    async fn missing_key_fails_before_reading_the_file() {
        let uploader = ImgbbUploader::new("http://127.0.0.1:9/upload", None);
        let result = uploader.upload(Path::new("/does/not/exist.png")).await;
        assert!(matches!(result, Err(UploadError::MissingApiKey)));
    }

    #[tokio::test]
    async fn unreadable_file_is_reported() {
        let uploader = ImgbbUploader::new("http://127.0.0.1:9/upload", Some("k".to_string()));
        let result = uploader.upload(Path::new("/does/not/exist.png")).await;
        assert!(matches!(result, Err(UploadError::File { .. })));
    }
}
