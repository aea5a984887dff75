//! Tag stripping and derived text metrics.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

pub const WORDS_PER_MINUTE: usize = 200;

/// Remove every `<...>` sequence, leaving the text between tags untouched.
pub fn strip_tags(html: &str) -> String {
    TAG.replace_all(html, "").into_owned()
}

/// Word, character and reading-time figures for a piece of rendered content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContentStats {
    pub words: usize,
    pub characters: usize,
    pub reading_time_minutes: usize,
}

/// Measure rendered content. Reading time is at least one minute, even for
/// an empty post.
pub fn content_stats(html: &str) -> ContentStats {
    let text = strip_tags(html);
    let words = text.split_whitespace().count();

    ContentStats {
        words,
        characters: text.chars().count(),
        reading_time_minutes: words.div_ceil(WORDS_PER_MINUTE).max(1),
    }
}

/// Build a teaser from the first `max_chars` characters of tag-stripped
/// content. An ellipsis is always appended.
pub fn excerpt_from(content: &str, max_chars: usize) -> String {
    let text = strip_tags(content);
    let head: String = text.chars().take(max_chars).collect();
    format!("{}...", head.trim())
}
