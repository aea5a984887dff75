//! Reader preferences kept in cookies.

use std::convert::Infallible;
use std::future::{Ready, ready};

use actix_web::cookie::{Cookie, time::Duration};
use actix_web::{FromRequest, HttpRequest, HttpResponse, dev::Payload};

use postly_core::domain::Theme;
use postly_shared::dto::ThemeResponse;

pub const THEME_COOKIE: &str = "theme";

/// The reader's saved theme. Missing or unreadable cookies mean light.
pub struct ThemePreference(pub Theme);

impl FromRequest for ThemePreference {
    type Error = Infallible;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let theme = req
            .cookie(THEME_COOKIE)
            .and_then(|c| c.value().parse().ok())
            .unwrap_or_default();

        ready(Ok(ThemePreference(theme)))
    }
}

/// GET /api/preferences/theme
pub async fn theme(ThemePreference(theme): ThemePreference) -> HttpResponse {
    HttpResponse::Ok().json(ThemeResponse {
        theme: theme.to_string(),
    })
}

/// POST /api/preferences/theme/toggle
pub async fn toggle_theme(ThemePreference(current): ThemePreference) -> HttpResponse {
    let theme = current.toggle();

    let cookie = Cookie::build(THEME_COOKIE, theme.as_str())
        .path("/")
        .max_age(Duration::days(365))
        .finish();

    HttpResponse::Ok().cookie(cookie).json(ThemeResponse {
        theme: theme.to_string(),
    })
}
