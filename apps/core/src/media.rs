/// Maps a YouTube or Vimeo page URL to its embeddable player URL.
/// Anything else is returned untouched.
pub fn embed_url(url: &str) -> String {
    let url = url.trim();

    if url.contains("youtu.be") {
        if let Some(id) = last_segment(url) {
            return format!("https://www.youtube.com/embed/{id}");
        }
    } else if url.contains("youtube.com") {
        if let Some(id) = query_param(url, "v") {
            return format!("https://www.youtube.com/embed/{id}");
        }
    } else if url.contains("vimeo.com") {
        if let Some(id) = last_segment(url) {
            return format!("https://player.vimeo.com/video/{id}");
        }
    }

    url.to_string()
}

/// Generated avatar used when a member has no photo.
pub fn avatar_url(name: &str) -> String {
    let name = if name.trim().is_empty() { "User" } else { name.trim() };
    format!(
        "https://ui-avatars.com/api/?name={}&background=D4AF74&color=232323",
        urlencoding::encode(name)
    )
}

fn without_query(url: &str) -> &str {
    url.split(['?', '#']).next().unwrap_or(url)
}

fn last_segment(url: &str) -> Option<&str> {
    without_query(url)
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty() && !segment.contains('.'))
}

fn query_param<'a>(url: &'a str, key: &str) -> Option<&'a str> {
    let (_, query) = url.split_once('?')?;
    let query = query.split('#').next().unwrap_or(query);
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(name, _)| *name == key)
        .map(|(_, value)| value)
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn youtube_watch_and_short_links() {
        assert_eq!(
            embed_url("https://www.youtube.com/watch?v=abc123&t=42"),
            "https://www.youtube.com/embed/abc123"
        );
        assert_eq!(
            embed_url("https://youtu.be/abc123?si=x"),
            "https://www.youtube.com/embed/abc123"
        );
    }

    #[test]
    fn vimeo_link() {
        assert_eq!(
            embed_url("https://vimeo.com/76979871"),
            "https://player.vimeo.com/video/76979871"
        );
    }

    #[test]
    fn other_urls_pass_through() {
        assert_eq!(embed_url("https://example.com/v.mp4"), "https://example.com/v.mp4");
        assert_eq!(
            embed_url("https://www.youtube.com/channel"),
            "https://www.youtube.com/channel"
        );
    }

    #[test]
    fn avatar_encodes_name() {
        assert_eq!(
            avatar_url("João Silva"),
            "https://ui-avatars.com/api/?name=Jo%C3%A3o%20Silva&background=D4AF74&color=232323"
        );
        assert!(avatar_url("  ").contains("name=User"));
    }
}
