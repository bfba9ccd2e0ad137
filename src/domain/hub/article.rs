//! Medium article display model and the text rules used to build it.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;

/// Maximum number of articles shown.
pub const ARTICLE_LIMIT: usize = 5;

/// Preview length in characters before the ellipsis is appended.
pub const PREVIEW_CHARS: usize = 150;

const WORDS_PER_MINUTE: f64 = 200.0;

static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").expect("tag pattern is valid"));

static IMG_SRC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)<img[^>]+src=["']([^"']+)["']"#).expect("img pattern is valid")
});

/// An article as shown on the hub. Derived per fetch, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleSummary {
    pub id: String,
    pub title: String,
    pub link: String,
    pub published_at: Option<Timestamp>,
    pub preview_text: String,
    pub thumbnail_url: Option<String>,
    pub reading_minutes: u32,
}

impl ArticleSummary {
    /// Builds a summary from raw feed fields.
    ///
    /// The preview and reading time come from the tag-stripped description;
    /// the thumbnail is the first `<img>` in the full content.
    pub fn from_feed(
        id: impl Into<String>,
        title: impl Into<String>,
        link: impl Into<String>,
        pub_date: &str,
        description_html: &str,
        content_html: &str,
    ) -> Self {
        let text = strip_tags(description_html);
        Self {
            id: id.into(),
            title: title.into(),
            link: link.into(),
            published_at: Timestamp::parse_feed_date(pub_date),
            preview_text: truncate_preview(&text),
            thumbnail_url: first_image_src(content_html),
            reading_minutes: reading_minutes(&text),
        }
    }

    /// Publication date for display, empty when the feed date was unparseable.
    pub fn published_label(&self) -> String {
        self.published_at
            .map(|ts| ts.short_date())
            .unwrap_or_default()
    }
}

/// Removes everything between `<` and `>`. Entities are left as-is.
pub fn strip_tags(html: &str) -> String {
    TAG.replace_all(html, "").into_owned()
}

/// `src` of the first `<img>` tag, if any.
pub fn first_image_src(html: &str) -> Option<String> {
    IMG_SRC
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Cuts text to [`PREVIEW_CHARS`] characters plus `…`; shorter text is unchanged.
pub fn truncate_preview(text: &str) -> String {
    match text.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}…", &text[..cut]),
        None => text.to_string(),
    }
}

/// `max(1, round(words / 200))`.
pub fn reading_minutes(text: &str) -> u32 {
    let words = text.split_whitespace().count() as f64;
    ((words / WORDS_PER_MINUTE).round() as u32).max(1)
}
