//! In-crate test doubles for the repository ports.

use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{CurrentUser, Post, User};
use crate::error::RepoError;
use crate::ports::{AuthError, BaseRepository, PasswordService, PostRepository, UserRepository};

pub fn author() -> CurrentUser {
    CurrentUser {
        id: Uuid::new_v4(),
        email: "writer@example.com".to_string(),
        name: Some("Writer".to_string()),
    }
}

pub fn sample_post(slug: &str) -> Post {
    let mut post = Post::new(&author(), format!("Post {slug}"), "<p>body</p>".into());
    post.slug = slug.to_string();
    post
}

/// Vec-backed post store with a slug unique index.
///
/// Slugs listed in `raced` are reported as unique violations on the first
/// write that uses them, as if another request had inserted them between the
/// probe and the write.
#[derive(Default)]
pub struct FakePostRepository {
    pub posts: Mutex<Vec<Post>>,
    pub raced: Mutex<HashSet<String>>,
    pub writes: Mutex<u32>,
}

impl FakePostRepository {
    pub fn with_posts(posts: Vec<Post>) -> Self {
        Self {
            posts: Mutex::new(posts),
            ..Self::default()
        }
    }

    pub fn race_on(self, slug: &str) -> Self {
        self.raced.lock().unwrap().insert(slug.to_string());
        self
    }

    pub fn write_count(&self) -> u32 {
        *self.writes.lock().unwrap()
    }

    fn check_unique(&self, post: &Post) -> Result<(), RepoError> {
        *self.writes.lock().unwrap() += 1;
        if self.raced.lock().unwrap().remove(&post.slug) {
            return Err(RepoError::UniqueViolation("posts_slug_key".into()));
        }
        let posts = self.posts.lock().unwrap();
        if posts.iter().any(|p| p.slug == post.slug && p.id != post.id) {
            return Err(RepoError::UniqueViolation("posts_slug_key".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl BaseRepository<Post, Uuid> for FakePostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        Ok(self.posts.lock().unwrap().iter().find(|p| p.id == id).cloned())
    }

    async fn insert(&self, post: Post) -> Result<Post, RepoError> {
        self.check_unique(&post)?;
        self.posts.lock().unwrap().push(post.clone());
        Ok(post)
    }
}

#[async_trait]
impl PostRepository for FakePostRepository {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, RepoError> {
        Ok(self
            .posts
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.slug == slug)
            .cloned())
    }

    async fn update(&self, post: Post) -> Result<Post, RepoError> {
        self.check_unique(&post)?;
        let mut posts = self.posts.lock().unwrap();
        let slot = posts
            .iter_mut()
            .find(|p| p.id == post.id && p.author_id == post.author_id)
            .ok_or(RepoError::NotFound)?;
        *slot = post.clone();
        Ok(post)
    }

    async fn delete(&self, id: Uuid, author_id: Uuid) -> Result<(), RepoError> {
        let mut posts = self.posts.lock().unwrap();
        let before = posts.len();
        posts.retain(|p| !(p.id == id && p.author_id == author_id));
        if posts.len() == before {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }

    async fn find_by_author(&self, author_id: Uuid) -> Result<Vec<Post>, RepoError> {
        let mut own: Vec<Post> = self
            .posts
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.author_id == author_id)
            .cloned()
            .collect();
        own.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(own)
    }

    async fn list_published(&self, search: Option<&str>) -> Result<Vec<Post>, RepoError> {
        let needle = search.map(str::to_lowercase);
        let mut listed: Vec<Post> = self
            .posts
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.published)
            .filter(|p| match &needle {
                Some(n) => {
                    p.title.to_lowercase().contains(n)
                        || p.content.to_lowercase().contains(n)
                        || p.excerpt
                            .as_deref()
                            .is_some_and(|e| e.to_lowercase().contains(n))
                }
                None => true,
            })
            .cloned()
            .collect();
        listed.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(listed)
    }
}

#[derive(Default)]
pub struct FakeUserRepository {
    pub users: Mutex<Vec<User>>,
}

#[async_trait]
impl BaseRepository<User, Uuid> for FakeUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn insert(&self, user: User) -> Result<User, RepoError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Err(RepoError::UniqueViolation("profiles_email_key".into()));
        }
        users.push(user.clone());
        Ok(user)
    }
}

#[async_trait]
impl UserRepository for FakeUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }
}

/// Reversible "hash" so tests can assert on stored values.
pub struct PlainPasswords;

impl PasswordService for PlainPasswords {
    fn hash(&self, password: &str) -> Result<String, AuthError> {
        Ok(format!("plain:{password}"))
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        Ok(hash == format!("plain:{password}"))
    }
}
