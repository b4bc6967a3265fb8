//! Writes the public `site.json` read by the web app.

use std::path::Path;

use chrono::{SecondsFormat, Utc};
use color_eyre::Result;
use ieam_core::SiteExport;
use tracing::info;

use crate::store::{list_typed, DocumentStore, StoreError};

/// Collects the public collections. Members and prayer requests stay private.
pub async fn build_site_export(
    store: &dyn DocumentStore,
    prayer_endpoint: Option<String>,
) -> Result<SiteExport, StoreError> {
    Ok(SiteExport {
        generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        events: list_typed(store, "events").await?,
        congregations: list_typed(store, "congregations").await?,
        posts: list_typed(store, "posts").await?,
        prayer_endpoint,
    })
}

pub fn write_site_export(path: &Path, export: &SiteExport) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(export)?;
    std::fs::write(path, json)?;
    info!(
        path = %path.display(),
        events = export.events.len(),
        posts = export.posts.len(),
        "Site export written"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::to_fields;
    use crate::testing::MemoryStore;
    use ieam_core::{BlogPost, Event, Member};

    #[tokio::test]
    async fn test_export_skips_private_collections() -> Result<(), Box<dyn std::error::Error>> {
        let store = MemoryStore::default();
        store.seed("events", "e1", to_fields(&Event::default())?);
        store.seed("posts", "p1", to_fields(&BlogPost::default())?);
        store.seed("members", "m1", to_fields(&Member::default())?);

        let export = build_site_export(&store, Some("https://example.org/prayer".to_string())).await?;
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("public").join("site.json");
        write_site_export(&path, &export)?;

        let written: SiteExport = serde_json::from_str(&std::fs::read_to_string(&path)?)?;
        assert_eq!(written.events.len(), 1);
        assert_eq!(written.posts.len(), 1);
        assert_eq!(written.prayer_endpoint.as_deref(), Some("https://example.org/prayer"));

        let raw = std::fs::read_to_string(&path)?;
        assert!(!raw.contains("members"));
        Ok(())
    }
}
