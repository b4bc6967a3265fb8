use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Turns a display title into a URL-safe identifier.
///
/// The output only holds `[a-z0-9]` separated by single hyphens. Titles made of
/// punctuation alone produce an empty string.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for ch in title.to_lowercase().nfd().filter(|c| !is_combining_mark(*c)) {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch);
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

/// Like [`slugify`], but returns `fallback` when the title has nothing to keep.
pub fn slugify_or(title: &str, fallback: impl FnOnce() -> String) -> String {
    let slug = slugify(title);
    if slug.is_empty() {
        fallback()
    } else {
        slug
    }
}
