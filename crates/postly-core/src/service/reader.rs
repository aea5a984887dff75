//! Read side: public listings, premium gating and the author dashboard.

use serde::Serialize;

use crate::domain::{CurrentUser, Post, User};
use crate::error::RepoError;

use super::PostService;

/// What a reader gets for a published post.
#[derive(Debug, Clone)]
pub enum PostView {
    Full(Post),
    /// Premium post seen by a reader without premium access. The post's
    /// `content` is withheld (empty); `preview` holds the teaser.
    Gated { post: Post, preview: String },
}

/// Counters shown at the top of the author dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub total: usize,
    pub published: usize,
    pub premium: usize,
    pub drafts: usize,
}

impl DashboardStats {
    pub fn from_posts(posts: &[Post]) -> Self {
        let published = posts.iter().filter(|p| p.published).count();
        Self {
            total: posts.len(),
            published,
            premium: posts.iter().filter(|p| p.is_premium).count(),
            drafts: posts.len() - published,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    pub stats: DashboardStats,
    pub posts: Vec<Post>,
}

/// Apply the premium gate for `reader` (anonymous when `None`).
pub fn gate(post: Post, reader: Option<&User>) -> PostView {
    let has_access = !post.is_premium || reader.is_some_and(|u| u.is_premium);
    if has_access {
        return PostView::Full(post);
    }

    let preview = post.gated_preview();
    let mut post = post;
    post.content.clear();
    PostView::Gated { post, preview }
}

impl PostService {
    /// Published posts, newest first. Blank searches list everything.
    pub async fn list_published(&self, search: Option<&str>) -> Result<Vec<Post>, RepoError> {
        let search = search.map(str::trim).filter(|q| !q.is_empty());
        let posts = self.posts.list_published(search).await?;
        tracing::debug!(count = posts.len(), search = ?search, "Listed published posts");
        Ok(posts)
    }

    /// A published post by slug, gated for `reader`. Drafts are not found.
    pub async fn read_by_slug(
        &self,
        slug: &str,
        reader: Option<&User>,
    ) -> Result<Option<PostView>, RepoError> {
        let post = self
            .posts
            .find_by_slug(slug)
            .await?
            .filter(|p| p.published);
        Ok(post.map(|p| gate(p, reader)))
    }

    pub async fn dashboard(&self, author: &CurrentUser) -> Result<Dashboard, RepoError> {
        let posts = self.posts.find_by_author(author.id).await?;
        Ok(Dashboard {
            stats: DashboardStats::from_posts(&posts),
            posts,
        })
    }
}
