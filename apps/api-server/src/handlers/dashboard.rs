//! Author dashboard handlers: own posts and the create/update/delete pipeline.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use postly_core::ports::Preconfirmed;
use postly_core::service::{EditorMode, PostDraft, PublishOutcome};
use postly_shared::ApiResponse;
use postly_shared::dto::{DashboardResponse, PostRequest, PostResponse};

use super::views::{dashboard_stats, post_response};
use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// Split a request into the draft and the author's answer to the
/// large-content warning.
fn into_draft(req: PostRequest) -> (PostDraft, Preconfirmed) {
    let editor = if req.simple_editor {
        EditorMode::Simple
    } else {
        EditorMode::Rich
    };

    let draft = PostDraft {
        title: req.title,
        content: req.content,
        excerpt: req.excerpt,
        slug: req.slug,
        is_premium: req.is_premium,
        published: req.published,
        editor,
    };
    (draft, Preconfirmed(req.confirm_large_content))
}

fn outcome_body(outcome: PublishOutcome) -> ApiResponse<PostResponse> {
    ApiResponse::ok_with_message(post_response(outcome.post), outcome.message)
}

/// GET /api/dashboard
pub async fn index(state: web::Data<AppState>, identity: Identity) -> AppResult<HttpResponse> {
    let dashboard = state.posts.dashboard(&identity.current_user()).await?;

    Ok(HttpResponse::Ok().json(DashboardResponse {
        stats: dashboard_stats(dashboard.stats),
        posts: dashboard.posts.into_iter().map(post_response).collect(),
    }))
}

/// POST /api/dashboard/posts
pub async fn create(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<PostRequest>,
) -> AppResult<HttpResponse> {
    let (draft, confirmation) = into_draft(body.into_inner());

    let outcome = state
        .posts
        .create(&identity.current_user(), draft, &confirmation)
        .await?;

    Ok(HttpResponse::Created().json(outcome_body(outcome)))
}

/// PUT /api/dashboard/posts/{id}
pub async fn update(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
    body: web::Json<PostRequest>,
) -> AppResult<HttpResponse> {
    let (draft, confirmation) = into_draft(body.into_inner());

    let outcome = state
        .posts
        .update(&identity.current_user(), path.into_inner(), draft, &confirmation)
        .await?;

    Ok(HttpResponse::Ok().json(outcome_body(outcome)))
}

/// DELETE /api/dashboard/posts/{id}
pub async fn delete(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    state
        .posts
        .delete(&identity.current_user(), path.into_inner())
        .await?;

    Ok(HttpResponse::NoContent().finish())
}
