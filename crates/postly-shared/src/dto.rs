//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

/// Request to register a new profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub full_name: Option<String>,
}

/// Request to login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response containing a profile's public information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub full_name: Option<String>,
    pub is_premium: bool,
    pub created_at: String,
}

/// Response containing authentication tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
}

/// Create or update a post from the editor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostRequest {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub is_premium: bool,
    #[serde(default)]
    pub published: bool,
    /// Content is plain markdown-ish text rather than editor HTML.
    #[serde(default)]
    pub simple_editor: bool,
    /// The author accepts saving content above the size threshold.
    #[serde(default)]
    pub confirm_large_content: bool,
}

/// A post as its author sees it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: String,
    pub title: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub slug: String,
    pub is_premium: bool,
    pub published: bool,
    pub author: String,
    pub created_at: String,
    pub updated_at: String,
}

/// A card in the public listing. Carries no content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostSummary {
    pub id: String,
    pub title: String,
    pub excerpt: Option<String>,
    pub slug: String,
    pub is_premium: bool,
    pub author: String,
    pub created_at: String,
}

/// A post page. When `gated` is set, `post.content` is empty and
/// `preview` holds the teaser shown behind the upgrade prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostPageResponse {
    pub post: PostResponse,
    pub gated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentStatsRequest {
    pub content: String,
    #[serde(default)]
    pub simple_editor: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentStatsResponse {
    pub words: usize,
    pub characters: usize,
    pub reading_time_minutes: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStatsResponse {
    pub total: usize,
    pub published: usize,
    pub premium: usize,
    pub drafts: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub stats: DashboardStatsResponse,
    pub posts: Vec<PostResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeResponse {
    pub theme: String,
}

/// Where to send the reader to finish a premium upgrade.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutResponse {
    pub url: String,
}
