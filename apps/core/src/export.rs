use serde::{Deserialize, Serialize};

use crate::domain::{BlogPost, Congregation, Document, Event};

/// Public snapshot written by the admin app and read by the public site.
/// Members and prayer requests never leave the admin side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteExport {
    pub generated_at: String,
    pub events: Vec<Document<Event>>,
    pub congregations: Vec<Document<Congregation>>,
    pub posts: Vec<Document<BlogPost>>,
    /// Where the public prayer form posts its requests, if anywhere.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prayer_endpoint: Option<String>,
}

impl SiteExport {
    pub fn event_by_slug(&self, slug: &str) -> Option<&Document<Event>> {
        self.events.iter().find(|event| event.slug() == slug)
    }

    pub fn post_by_slug(&self, slug: &str) -> Option<&Document<BlogPost>> {
        self.posts.iter().find(|post| post.slug == slug)
    }

    /// Posts newest first.
    pub fn posts_by_date(&self) -> Vec<&Document<BlogPost>> {
        let mut posts: Vec<_> = self.posts.iter().collect();
        posts.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        posts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_export() -> Result<(), serde_json::Error> {
        let export: SiteExport = serde_json::from_str(
            r#"{"events":[{"id":"e1","title":"Santa Ceia","date":"2024-06-02"}],
                "posts":[{"id":"p1","title":"A","slug":"a","publishedAt":"2024-01-01T00:00:00Z"},
                         {"id":"p2","title":"B","slug":"b","publishedAt":"2024-03-01T00:00:00Z"}]}"#,
        )?;

        assert!(export.congregations.is_empty());
        assert_eq!(export.event_by_slug("santa-ceia").map(|e| e.id.as_str()), Some("e1"));
        assert_eq!(export.post_by_slug("b").map(|p| p.id.as_str()), Some("p2"));
        assert_eq!(export.posts_by_date()[0].id, "p2");
        assert_eq!(export.prayer_endpoint, None);
        Ok(())
    }
}
