//! Domain to DTO conversions.

use postly_core::domain::{Post, User};
use postly_core::service::DashboardStats;
use postly_shared::dto::{DashboardStatsResponse, PostResponse, PostSummary, UserResponse};

pub fn post_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id.to_string(),
        author: post.display_author(),
        title: post.title,
        content: post.content,
        excerpt: post.excerpt,
        slug: post.slug,
        is_premium: post.is_premium,
        published: post.published,
        created_at: post.created_at.to_rfc3339(),
        updated_at: post.updated_at.to_rfc3339(),
    }
}

pub fn post_summary(post: Post) -> PostSummary {
    PostSummary {
        id: post.id.to_string(),
        author: post.display_author(),
        title: post.title,
        excerpt: post.excerpt,
        slug: post.slug,
        is_premium: post.is_premium,
        created_at: post.created_at.to_rfc3339(),
    }
}

pub fn user_response(user: User) -> UserResponse {
    UserResponse {
        id: user.id.to_string(),
        email: user.email,
        full_name: user.full_name,
        is_premium: user.is_premium,
        created_at: user.created_at.to_rfc3339(),
    }
}

pub fn dashboard_stats(stats: DashboardStats) -> DashboardStatsResponse {
    DashboardStatsResponse {
        total: stats.total,
        published: stats.published,
        premium: stats.premium,
        drafts: stats.drafts,
    }
}
