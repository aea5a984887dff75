use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::CurrentUser;

/// Number of characters shown to readers who hit the premium gate when the
/// post has no excerpt.
const GATED_PREVIEW_CHARS: usize = 300;

/// Post entity - a blog post, either a draft or live.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub slug: String,
    pub is_premium: bool,
    pub published: bool,
    pub author_id: Uuid,
    pub author_email: String,
    pub author_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post owned by `author`. The slug is left empty until the
    /// publisher resolves one.
    pub fn new(author: &CurrentUser, title: String, content: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            content,
            excerpt: None,
            slug: String::new(),
            is_premium: false,
            published: false,
            author_id: author.id,
            author_email: author.email.clone(),
            author_name: author.name.clone(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.author_id == user_id
    }

    /// Byline shown on post pages: the author's name, else the local part of
    /// their email, else "Anonymous".
    pub fn display_author(&self) -> String {
        if let Some(name) = self.author_name.as_deref().filter(|n| !n.trim().is_empty()) {
            return name.to_string();
        }
        match self.author_email.split('@').next() {
            Some(local) if !local.is_empty() => local.to_string(),
            _ => "Anonymous".to_string(),
        }
    }

    /// Teaser text for readers without premium access.
    pub fn gated_preview(&self) -> String {
        match self.excerpt.as_deref().filter(|e| !e.is_empty()) {
            Some(excerpt) => excerpt.to_string(),
            None => {
                let head: String = self.content.chars().take(GATED_PREVIEW_CHARS).collect();
                format!("{head}...")
            }
        }
    }
}
