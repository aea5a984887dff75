//! Post upsert pipeline: validate, confirm, convert, resolve slug, write.

use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use crate::content::{excerpt_from, markdown_to_html, slug_seed};
use crate::domain::{CurrentUser, Post};
use crate::error::{PublishError, RepoError};
use crate::ports::Confirmation;

use super::PostService;
use super::slug_resolver::{SlugProbe, UniqueSlugResolver};

/// Which editor produced the submitted content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditorMode {
    /// Rich editor output, already HTML.
    #[default]
    Rich,
    /// Plain-text editor using the Markdown subset.
    Simple,
}

/// Form fields of a create or edit submission.
#[derive(Debug, Clone, Default)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub slug: Option<String>,
    pub is_premium: bool,
    pub published: bool,
    pub editor: EditorMode,
}

/// A stored post plus the confirmation shown to the author.
#[derive(Debug, Clone)]
pub struct PublishOutcome {
    pub post: Post,
    pub message: &'static str,
}

/// Validated, converted fields ready to be written.
struct Prepared {
    title: String,
    content: String,
    excerpt: String,
}

#[derive(Clone, Copy)]
enum WriteOp {
    Insert,
    Update,
}

impl PostService {
    /// Create a post owned by `author`.
    pub async fn create(
        &self,
        author: &CurrentUser,
        draft: PostDraft,
        confirmation: &dyn Confirmation,
    ) -> Result<PublishOutcome, PublishError> {
        let prepared = self.prepare(&draft, confirmation).await?;

        let mut post = Post::new(author, prepared.title, prepared.content);
        post.excerpt = Some(prepared.excerpt);
        post.is_premium = draft.is_premium;
        post.published = draft.published;

        let seed = slug_seed(draft.slug.as_deref(), &post.title, Utc::now());
        let saved = self.write_unique(WriteOp::Insert, post, seed, None).await?;

        tracing::info!(
            post_id = %saved.id,
            slug = %saved.slug,
            published = saved.published,
            "Post created"
        );

        let message = if saved.published {
            "Post Published!"
        } else {
            "Draft Saved!"
        };
        Ok(PublishOutcome {
            post: saved,
            message,
        })
    }

    /// Edit a post owned by `author`.
    ///
    /// A submission without a slug keeps the stored one. Either way the slug
    /// is re-checked for uniqueness (ignoring the post itself), so a
    /// hand-edited slug cannot collide with another post.
    pub async fn update(
        &self,
        author: &CurrentUser,
        id: Uuid,
        draft: PostDraft,
        confirmation: &dyn Confirmation,
    ) -> Result<PublishOutcome, PublishError> {
        let existing = self
            .posts
            .find_by_id(id)
            .await?
            .filter(|p| p.is_owned_by(author.id))
            .ok_or(PublishError::NotFound(id))?;
        let was_published = existing.published;

        let prepared = self.prepare(&draft, confirmation).await?;

        let mut post = existing;
        post.title = prepared.title;
        post.content = prepared.content;
        post.excerpt = Some(prepared.excerpt);
        post.is_premium = draft.is_premium;
        post.published = draft.published;
        post.updated_at = Utc::now();

        let seed = match draft.slug.as_deref().map(str::trim) {
            Some(slug) if !slug.is_empty() => slug_seed(Some(slug), &post.title, post.updated_at),
            _ => post.slug.clone(),
        };
        let saved = match self.write_unique(WriteOp::Update, post, seed, Some(id)).await {
            Err(PublishError::Storage(RepoError::NotFound)) => return Err(PublishError::NotFound(id)),
            other => other?,
        };

        tracing::info!(post_id = %saved.id, slug = %saved.slug, "Post updated");

        let message = match (was_published, saved.published) {
            (false, true) => "Post Published!",
            (true, false) => "Post Unpublished!",
            _ => "Post Updated!",
        };
        Ok(PublishOutcome {
            post: saved,
            message,
        })
    }

    /// Delete a post owned by `author`.
    pub async fn delete(&self, author: &CurrentUser, id: Uuid) -> Result<(), PublishError> {
        match self.posts.delete(id, author.id).await {
            Ok(()) => {
                tracing::info!(post_id = %id, "Post deleted");
                Ok(())
            }
            Err(RepoError::NotFound) => Err(PublishError::NotFound(id)),
            Err(e) => Err(e.into()),
        }
    }

    async fn prepare(
        &self,
        draft: &PostDraft,
        confirmation: &dyn Confirmation,
    ) -> Result<Prepared, PublishError> {
        let title = draft.title.trim();
        if title.is_empty() {
            return Err(PublishError::Validation(
                "Please enter a title for your post".to_string(),
            ));
        }

        let content = draft.content.trim();
        if content.is_empty() {
            return Err(PublishError::Validation(
                "Please add some content to your post".to_string(),
            ));
        }

        let chars = draft.content.chars().count();
        if chars > self.settings.large_content_threshold {
            tracing::warn!(chars, "Large content submitted, asking for confirmation");
            if !confirmation.confirm_large_content(chars).await {
                return Err(PublishError::ConfirmationDeclined { chars });
            }
        }

        let content = match draft.editor {
            EditorMode::Simple => markdown_to_html(content),
            EditorMode::Rich => content.to_string(),
        };

        let excerpt = match draft.excerpt.as_deref().map(str::trim) {
            Some(excerpt) if !excerpt.is_empty() => excerpt.to_string(),
            _ => excerpt_from(&draft.content, self.settings.excerpt_chars),
        };

        Ok(Prepared {
            title: title.to_string(),
            content,
            excerpt,
        })
    }

    /// Probe for a free slug and write, moving to the next suffix whenever
    /// the store reports that another writer got there first.
    async fn write_unique(
        &self,
        op: WriteOp,
        mut post: Post,
        seed: String,
        exclude: Option<Uuid>,
    ) -> Result<Post, PublishError> {
        let resolver = UniqueSlugResolver::new(self.posts.as_ref(), self.settings.max_slug_attempts);
        let mut probe: SlugProbe = resolver.probe(seed);

        loop {
            post.slug = resolver.next_free(&mut probe, exclude).await?;

            let result = match op {
                WriteOp::Insert => self.posts.insert(post.clone()).await,
                WriteOp::Update => self.posts.update(post.clone()).await,
            };

            match result {
                Ok(saved) => return Ok(saved),
                Err(RepoError::UniqueViolation(detail)) => {
                    tracing::warn!(
                        slug = %post.slug,
                        %detail,
                        "Slug claimed concurrently, retrying with next suffix"
                    );
                }
                Err(e) => return Err(e.into()),
            }
        }
    }
}
