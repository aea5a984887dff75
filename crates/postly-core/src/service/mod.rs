//! Application services built on top of the ports.

mod accounts;
mod publisher;
mod reader;
mod slug_resolver;

#[cfg(test)]
pub(crate) mod testing;

use std::sync::Arc;

use crate::ports::PostRepository;

pub use accounts::{AccountService, MIN_PASSWORD_LEN};
pub use publisher::{EditorMode, PostDraft, PublishOutcome};
pub use reader::{Dashboard, DashboardStats, PostView, gate};
pub use slug_resolver::{DEFAULT_MAX_SLUG_ATTEMPTS, SlugProbe, UniqueSlugResolver};

/// Default size above which a submission needs explicit confirmation.
pub const DEFAULT_LARGE_CONTENT_THRESHOLD: usize = 1_000_000;

/// Default excerpt length, before the ellipsis.
pub const DEFAULT_EXCERPT_CHARS: usize = 200;

/// Tunables for the publishing pipeline.
#[derive(Debug, Clone)]
pub struct PublishSettings {
    pub max_slug_attempts: u32,
    pub large_content_threshold: usize,
    pub excerpt_chars: usize,
}

impl Default for PublishSettings {
    fn default() -> Self {
        Self {
            max_slug_attempts: DEFAULT_MAX_SLUG_ATTEMPTS,
            large_content_threshold: DEFAULT_LARGE_CONTENT_THRESHOLD,
            excerpt_chars: DEFAULT_EXCERPT_CHARS,
        }
    }
}

/// Post operations: the upsert pipeline, deletion and the read side.
pub struct PostService {
    posts: Arc<dyn PostRepository>,
    settings: PublishSettings,
}

impl PostService {
    pub fn new(posts: Arc<dyn PostRepository>, settings: PublishSettings) -> Self {
        Self { posts, settings }
    }

    pub fn settings(&self) -> &PublishSettings {
        &self.settings
    }
}
