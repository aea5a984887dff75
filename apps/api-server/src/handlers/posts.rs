//! Public post handlers: listing, search, post pages and live stats.

use actix_web::{HttpResponse, web};
use serde::Deserialize;

use postly_core::content::{content_stats, markdown_to_html};
use postly_core::service::PostView;
use postly_shared::dto::{ContentStatsRequest, ContentStatsResponse, PostPageResponse};

use super::views::{post_response, post_summary};
use crate::middleware::auth::OptionalIdentity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: Option<String>,
}

/// GET /api/posts?q=
pub async fn list(
    state: web::Data<AppState>,
    query: web::Query<SearchQuery>,
) -> AppResult<HttpResponse> {
    let posts = state.posts.list_published(query.q.as_deref()).await?;

    let cards: Vec<_> = posts.into_iter().map(post_summary).collect();
    Ok(HttpResponse::Ok().json(cards))
}

/// GET /api/posts/{slug}
///
/// Premium posts are gated unless the caller holds a premium profile.
pub async fn show(
    state: web::Data<AppState>,
    path: web::Path<String>,
    reader: OptionalIdentity,
) -> AppResult<HttpResponse> {
    let slug = path.into_inner();

    let profile = match &reader.0 {
        Some(identity) => state.accounts.find_profile(identity.user_id).await?,
        None => None,
    };

    let view = state
        .posts
        .read_by_slug(&slug, profile.as_ref())
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Post '{}' not found", slug)))?;

    let page = match view {
        PostView::Full(post) => PostPageResponse {
            post: post_response(post),
            gated: false,
            preview: None,
        },
        PostView::Gated { post, preview } => PostPageResponse {
            post: post_response(post),
            gated: true,
            preview: Some(preview),
        },
    };

    Ok(HttpResponse::Ok().json(page))
}

/// POST /api/posts/stats - editor footer counters.
pub async fn stats(body: web::Json<ContentStatsRequest>) -> HttpResponse {
    let req = body.into_inner();
    let html = if req.simple_editor {
        markdown_to_html(&req.content)
    } else {
        req.content
    };

    let stats = content_stats(&html);
    HttpResponse::Ok().json(ContentStatsResponse {
        words: stats.words,
        characters: stats.characters,
        reading_time_minutes: stats.reading_time_minutes,
    })
}
