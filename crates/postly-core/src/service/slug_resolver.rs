//! Sequential probing for a free slug.
//!
//! The probe is a plain check-then-act loop with no lock or transaction, so
//! two concurrent creations can both see a slug as free. The storage unique
//! index is the final arbiter: callers that get
//! [`RepoError::UniqueViolation`](crate::RepoError::UniqueViolation) on write
//! resume the same [`SlugProbe`] at the next suffix.

use uuid::Uuid;

use crate::content::with_suffix;
use crate::error::PublishError;
use crate::ports::PostRepository;

/// Default cap on probe attempts for one submission.
pub const DEFAULT_MAX_SLUG_ATTEMPTS: u32 = 50;

/// Resumable position in the `base`, `base-1`, `base-2`, ... sequence.
#[derive(Debug, Clone)]
pub struct SlugProbe {
    base: String,
    next_suffix: u32,
    attempts: u32,
    max_attempts: u32,
}

impl SlugProbe {
    pub fn new(base: impl Into<String>, max_attempts: u32) -> Self {
        Self {
            base: base.into(),
            next_suffix: 0,
            attempts: 0,
            max_attempts,
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    fn next_candidate(&mut self) -> Option<String> {
        if self.attempts >= self.max_attempts {
            return None;
        }
        let candidate = with_suffix(&self.base, self.next_suffix);
        self.next_suffix += 1;
        self.attempts += 1;
        Some(candidate)
    }

    fn exhausted(&self) -> PublishError {
        PublishError::SlugExhausted {
            base: self.base.clone(),
            attempts: self.attempts,
        }
    }
}

/// Finds a slug no other post currently holds.
pub struct UniqueSlugResolver<'a> {
    posts: &'a dyn PostRepository,
    max_attempts: u32,
}

impl<'a> UniqueSlugResolver<'a> {
    pub fn new(posts: &'a dyn PostRepository, max_attempts: u32) -> Self {
        Self {
            posts,
            max_attempts,
        }
    }

    /// Start a probe at `candidate` with this resolver's attempt budget.
    pub fn probe(&self, candidate: impl Into<String>) -> SlugProbe {
        SlugProbe::new(candidate, self.max_attempts)
    }

    /// Return `candidate` if it is free, otherwise the first free suffixed
    /// variant.
    pub async fn resolve(&self, candidate: &str) -> Result<String, PublishError> {
        let mut probe = self.probe(candidate);
        self.next_free(&mut probe, None).await
    }

    /// Advance `probe` until a slug is free. A slug held by `exclude` counts
    /// as free so a post can keep its own slug on update.
    pub async fn next_free(
        &self,
        probe: &mut SlugProbe,
        exclude: Option<Uuid>,
    ) -> Result<String, PublishError> {
        while let Some(candidate) = probe.next_candidate() {
            match self.posts.find_by_slug(&candidate).await? {
                Some(holder) if Some(holder.id) != exclude => {
                    tracing::debug!(slug = %candidate, "Slug taken, trying next suffix");
                }
                _ => return Ok(candidate),
            }
        }

        tracing::warn!(
            base = %probe.base(),
            attempts = probe.attempts(),
            "Slug probe exhausted"
        );
        Err(probe.exhausted())
    }
}
