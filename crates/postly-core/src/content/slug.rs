//! URL slug generation.

use chrono::{DateTime, Utc};

/// Hard cap on slug length, suffix included.
pub const MAX_SLUG_LEN: usize = 100;

/// Slugs shorter than this are replaced by a time-based fallback.
pub const MIN_SLUG_LEN: usize = 3;

/// Turn a title into a lowercase, URL-safe candidate slug.
///
/// Characters other than ASCII letters, digits, whitespace and `-` are
/// dropped; whitespace and hyphen runs become a single `-`; the result never
/// starts or ends with `-` and is at most [`MAX_SLUG_LEN`] long. An empty
/// string is a valid result and means the caller needs a fallback.
///
/// ```
/// use postly_core::content::slugify;
///
/// assert_eq!(slugify("Hello World!"), "hello-world");
/// assert_eq!(slugify("  Rust -- Ownership  "), "rust-ownership");
/// assert_eq!(slugify("!!!"), "");
/// ```
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len().min(MAX_SLUG_LEN));
    let mut pending_hyphen = false;

    for c in title.trim().chars().flat_map(char::to_lowercase) {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
            if slug.len() >= MAX_SLUG_LEN {
                break;
            }
        } else if c.is_whitespace() || c == '-' {
            pending_hyphen = true;
        }
    }

    // Only ASCII was pushed, so byte truncation is char-safe.
    slug.truncate(MAX_SLUG_LEN);
    let trimmed = slug.trim_end_matches('-').len();
    slug.truncate(trimmed);
    slug
}

/// Pick the slug a new post starts probing from.
///
/// An explicit slug wins over the title; either goes through [`slugify`].
/// Results shorter than [`MIN_SLUG_LEN`] become `post-<unix millis>`.
pub fn slug_seed(explicit: Option<&str>, title: &str, now: DateTime<Utc>) -> String {
    let candidate = match explicit.map(str::trim).filter(|s| !s.is_empty()) {
        Some(slug) => slugify(slug),
        None => slugify(title),
    };

    if candidate.len() < MIN_SLUG_LEN {
        format!("post-{}", now.timestamp_millis())
    } else {
        candidate
    }
}

/// Combine a base slug with a collision counter.
///
/// `n == 0` means no suffix. The base is shortened so the whole slug fits in
/// [`MAX_SLUG_LEN`]; the suffix is never cut.
pub fn with_suffix(base: &str, n: u32) -> String {
    if n == 0 {
        return base.chars().take(MAX_SLUG_LEN).collect();
    }

    let suffix = format!("-{n}");
    let room = MAX_SLUG_LEN.saturating_sub(suffix.len());
    let head: String = base.chars().take(room).collect();
    format!("{}{}", head.trim_end_matches('-'), suffix)
}
