//! In-memory post store - used when no database is configured.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use postly_core::RepoError;
use postly_core::domain::Post;
use postly_core::ports::{BaseRepository, PostRepository};

/// Post repository over a `HashMap` behind an async `RwLock`.
///
/// Enforces the same slug unique index as the `posts` table, so the publish
/// pipeline behaves identically against it.
/// Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    store: RwLock<HashMap<Uuid, Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }

    fn slug_taken(store: &HashMap<Uuid, Post>, post: &Post) -> bool {
        store
            .values()
            .any(|other| other.slug == post.slug && other.id != post.id)
    }

    fn newest_first(mut posts: Vec<Post>) -> Vec<Post> {
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        posts
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Post, Uuid> for InMemoryPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        Ok(self.store.read().await.get(&id).cloned())
    }

    async fn insert(&self, post: Post) -> Result<Post, RepoError> {
        // Check and insert under one write lock.
        let mut store = self.store.write().await;

        if store.contains_key(&post.id) {
            return Err(RepoError::UniqueViolation("posts_pkey".to_string()));
        }
        if Self::slug_taken(&store, &post) {
            return Err(RepoError::UniqueViolation("posts_slug_key".to_string()));
        }

        store.insert(post.id, post.clone());
        Ok(post)
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.values().find(|p| p.slug == slug).cloned())
    }

    async fn update(&self, post: Post) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;

        let owned = store
            .get(&post.id)
            .is_some_and(|existing| existing.author_id == post.author_id);
        if !owned {
            return Err(RepoError::NotFound);
        }
        if Self::slug_taken(&store, &post) {
            return Err(RepoError::UniqueViolation("posts_slug_key".to_string()));
        }

        let slot = store.get_mut(&post.id).ok_or(RepoError::NotFound)?;
        // Ownership and creation metadata are not editable.
        slot.title = post.title;
        slot.content = post.content;
        slot.excerpt = post.excerpt;
        slot.slug = post.slug;
        slot.is_premium = post.is_premium;
        slot.published = post.published;
        slot.updated_at = post.updated_at;
        Ok(slot.clone())
    }

    async fn delete(&self, id: Uuid, author_id: Uuid) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        match store.get(&id) {
            Some(post) if post.author_id == author_id => {
                store.remove(&id);
                Ok(())
            }
            _ => Err(RepoError::NotFound),
        }
    }

    async fn find_by_author(&self, author_id: Uuid) -> Result<Vec<Post>, RepoError> {
        let store = self.store.read().await;
        let posts = store
            .values()
            .filter(|p| p.author_id == author_id)
            .cloned()
            .collect();
        Ok(Self::newest_first(posts))
    }

    async fn list_published(&self, search: Option<&str>) -> Result<Vec<Post>, RepoError> {
        let needle = search.map(str::to_lowercase);
        let is_match = |post: &Post| match &needle {
            None => true,
            Some(q) => {
                post.title.to_lowercase().contains(q)
                    || post.content.to_lowercase().contains(q)
                    || post
                        .excerpt
                        .as_deref()
                        .is_some_and(|e| e.to_lowercase().contains(q))
            }
        };

        let store = self.store.read().await;
        let posts = store
            .values()
            .filter(|p| p.published && is_match(*p))
            .cloned()
            .collect();
        Ok(Self::newest_first(posts))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{Duration, Utc};
    use postly_core::domain::CurrentUser;
    use postly_core::ports::Preconfirmed;
    use postly_core::service::PostDraft;
    use postly_core::{PostService, PublishSettings};

    use super::*;

    fn author() -> CurrentUser {
        CurrentUser {
            id: Uuid::new_v4(),
            email: "author@example.com".to_string(),
            name: None,
        }
    }

    fn post(author: &CurrentUser, slug: &str, published: bool) -> Post {
        let mut post = Post::new(author, format!("About {slug}"), "<p>Body</p>".into());
        post.slug = slug.to_string();
        post.published = published;
        post
    }

    #[tokio::test]
    async fn test_slug_unique_index() {
        let repo = InMemoryPostRepository::new();
        let me = author();
        repo.insert(post(&me, "taken", false)).await.unwrap();

        let err = repo.insert(post(&me, "taken", false)).await.unwrap_err();
        assert!(matches!(err, RepoError::UniqueViolation(_)));
    }

    #[tokio::test]
    async fn test_update_and_delete_require_owner() {
        let repo = InMemoryPostRepository::new();
        let owner = author();
        let saved = repo.insert(post(&owner, "mine", false)).await.unwrap();

        let mut foreign = saved.clone();
        foreign.author_id = Uuid::new_v4();
        foreign.title = "Hijacked".to_string();
        assert!(matches!(
            repo.update(foreign).await.unwrap_err(),
            RepoError::NotFound
        ));
        assert!(matches!(
            repo.delete(saved.id, Uuid::new_v4()).await.unwrap_err(),
            RepoError::NotFound
        ));

        repo.delete(saved.id, owner.id).await.unwrap();
        assert!(repo.find_by_id(saved.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_published_search_and_order() {
        let repo = InMemoryPostRepository::new();
        let me = author();

        let mut older = post(&me, "rust-tips", true);
        older.created_at = Utc::now() - Duration::hours(1);
        repo.insert(older).await.unwrap();
        repo.insert(post(&me, "go-tips", true)).await.unwrap();
        repo.insert(post(&me, "rust-draft", false)).await.unwrap();

        let all = repo.list_published(None).await.unwrap();
        let slugs: Vec<_> = all.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["go-tips", "rust-tips"]);

        let rust = repo.list_published(Some("RUST")).await.unwrap();
        assert_eq!(rust.len(), 1);
        assert_eq!(rust[0].slug, "rust-tips");
    }

    #[tokio::test]
    async fn test_publishing_twice_with_same_title() {
        let repo = Arc::new(InMemoryPostRepository::new());
        let service = PostService::new(repo, PublishSettings::default());
        let me = author();
        let draft = PostDraft {
            title: "Hello World!".to_string(),
            content: "Some text".to_string(),
            ..PostDraft::default()
        };

        let first = service
            .create(&me, draft.clone(), &Preconfirmed(true))
            .await
            .unwrap();
        let second = service
            .create(&me, draft, &Preconfirmed(true))
            .await
            .unwrap();

        assert_eq!(first.post.slug, "hello-world");
        assert_eq!(second.post.slug, "hello-world-1");
    }
}
