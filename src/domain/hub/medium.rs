//! Medium username extraction.
//!
//! Accepts whatever the user pasted into the Medium field: a profile URL
//! (`https://medium.com/@name`), a custom subdomain (`name.medium.com`), a
//! URL without scheme, or text containing `@name`.

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

static AT_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@([^/]+)").expect("handle pattern is valid"));

/// Extracts the Medium username from a handle, or `""` if there is none.
///
/// 1. `https://` is prefixed when the input does not start with `http`.
/// 2. Unparseable input yields `""`.
/// 3. On hosts ending in `medium.com` the first `@segment` of the path wins;
///    otherwise the first host label is used unless it is `medium` itself.
/// 4. On other hosts the raw input is scanned for `@name`.
pub fn extract_medium_username(handle: &str) -> String {
    if handle.is_empty() {
        return String::new();
    }

    let candidate = if handle.starts_with("http") {
        handle.to_string()
    } else {
        format!("https://{}", handle)
    };

    let Ok(url) = Url::parse(&candidate) else {
        return String::new();
    };
    let host = url.host_str().unwrap_or("");

    if host.ends_with("medium.com") {
        if let Some(name) = capture_at_name(url.path()) {
            return name;
        }
        let label = host.split('.').next().unwrap_or("");
        return if label == "medium" {
            String::new()
        } else {
            label.to_string()
        };
    }

    capture_at_name(handle).unwrap_or_default()
}

fn capture_at_name(text: &str) -> Option<String> {
    AT_NAME
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Feed URL for a Medium username.
pub fn medium_feed_url(feed_base: &str, username: &str) -> String {
    format!("{}/@{}", feed_base.trim_end_matches('/'), username)
}
