use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Post, User};
use crate::error::RepoError;

/// Generic repository trait shared by every entity store.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Insert a new entity. Unique index violations come back as
    /// [`RepoError::UniqueViolation`].
    async fn insert(&self, entity: T) -> Result<T, RepoError>;
}

/// User profile repository.
#[async_trait]
pub trait UserRepository: BaseRepository<User, Uuid> {
    /// Find a user by their email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;
}

/// Post repository.
///
/// Writes are scoped to the owner: `update` and `delete` only touch rows
/// whose `author_id` matches, and report [`RepoError::NotFound`] otherwise.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, Uuid> {
    /// Exact slug lookup, regardless of publish state.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, RepoError>;

    /// Replace the editable fields of `post`, matching on `id` and `author_id`.
    async fn update(&self, post: Post) -> Result<Post, RepoError>;

    async fn delete(&self, id: Uuid, author_id: Uuid) -> Result<(), RepoError>;

    /// All posts by one author, newest first.
    async fn find_by_author(&self, author_id: Uuid) -> Result<Vec<Post>, RepoError>;

    /// Published posts, newest first, optionally filtered by a
    /// case-insensitive substring match on title, content or excerpt.
    async fn list_published(&self, search: Option<&str>) -> Result<Vec<Post>, RepoError>;
}
