//! Premium upgrade: hands the reader off to the payment provider.

use actix_web::{HttpResponse, web};
use serde::Serialize;
use uuid::Uuid;

use postly_shared::dto::CheckoutResponse;

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

#[derive(Serialize)]
struct CheckoutSessionRequest<'a> {
    user_id: Uuid,
    email: &'a str,
}

/// POST /api/premium/checkout
pub async fn checkout(state: web::Data<AppState>, identity: Identity) -> AppResult<HttpResponse> {
    let Some(endpoint) = state.checkout_url.as_deref() else {
        return Err(AppError::Unavailable(
            "Premium checkout is not configured".to_string(),
        ));
    };

    let profile = state.accounts.profile(identity.user_id).await?;
    if profile.is_premium {
        return Err(AppError::Conflict("Already a premium member".to_string()));
    }

    let session: CheckoutResponse = state
        .http
        .post(endpoint)
        .json(&CheckoutSessionRequest {
            user_id: profile.id,
            email: &profile.email,
        })
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(|e| AppError::BadGateway(e.to_string()))?
        .json()
        .await
        .map_err(|e| AppError::BadGateway(e.to_string()))?;

    tracing::info!(user_id = %profile.id, "Checkout session created");
    Ok(HttpResponse::Ok().json(session))
}
