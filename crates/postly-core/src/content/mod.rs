//! Pure text processing used by the publishing pipeline: slug generation,
//! simple-editor Markdown conversion and content statistics.

mod markdown;
mod slug;
mod stats;

pub use markdown::markdown_to_html;
pub use slug::{MAX_SLUG_LEN, MIN_SLUG_LEN, slug_seed, slugify, with_suffix};
pub use stats::{ContentStats, WORDS_PER_MINUTE, content_stats, excerpt_from, strip_tags};
