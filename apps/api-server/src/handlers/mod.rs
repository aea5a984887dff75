//! HTTP handlers and route configuration.

mod auth;
mod dashboard;
mod health;
mod posts;
mod preferences;
mod premium;
mod views;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            // Auth routes
            .service(
                web::scope("/auth")
                    .route("/register", web::post().to(auth::register))
                    .route("/login", web::post().to(auth::login))
                    .route("/me", web::get().to(auth::me)),
            )
            // Reader routes
            .service(
                web::scope("/posts")
                    .route("", web::get().to(posts::list))
                    .route("/stats", web::post().to(posts::stats))
                    .route("/{slug}", web::get().to(posts::show)),
            )
            // Author routes
            .service(
                web::scope("/dashboard")
                    .route("", web::get().to(dashboard::index))
                    .route("/posts", web::post().to(dashboard::create))
                    .route("/posts/{id}", web::put().to(dashboard::update))
                    .route("/posts/{id}", web::delete().to(dashboard::delete)),
            )
            .route("/premium/checkout", web::post().to(premium::checkout))
            .service(
                web::scope("/preferences")
                    .route("/theme", web::get().to(preferences::theme))
                    .route("/theme/toggle", web::post().to(preferences::toggle_theme)),
            ),
    );
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::{StatusCode, header};
    use actix_web::{App, test, web};
    use serde_json::{Value, json};
    use uuid::Uuid;

    use postly_core::PublishSettings;
    use postly_core::ports::TokenService;
    use postly_infra::{
        Argon2PasswordService, InMemoryPostRepository, InMemoryUserRepository, JwtConfig,
        JwtTokenService,
    };

    use super::configure_routes;
    use crate::state::AppState;

    fn parts(settings: PublishSettings) -> (web::Data<AppState>, web::Data<Arc<dyn TokenService>>) {
        let state = AppState::from_parts(
            Arc::new(InMemoryPostRepository::new()),
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(Argon2PasswordService::new()),
            settings,
            None,
        );
        let tokens: Arc<dyn TokenService> = Arc::new(JwtTokenService::new(JwtConfig {
            secret: "test-secret".to_string(),
            expiration_hours: 1,
            issuer: "postly-test".to_string(),
        }));
        (web::Data::new(state), web::Data::new(tokens))
    }

    fn bearer(tokens: &dyn TokenService, email: &str) -> (header::HeaderName, String) {
        let token = tokens
            .generate_token(Uuid::new_v4(), email, None)
            .unwrap();
        (header::AUTHORIZATION, format!("Bearer {token}"))
    }

    #[actix_web::test]
    async fn test_health_check() {
        let (state, tokens) = parts(PublishSettings::default());
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(tokens)
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "ok");
        assert_eq!(body["storage"], "memory");
    }

    #[actix_web::test]
    async fn test_register_login_me() {
        let (state, tokens) = parts(PublishSettings::default());
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(tokens)
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(json!({
                "email": "writer@example.com",
                "password": "long enough",
                "full_name": "Writer"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({ "email": "writer@example.com", "password": "long enough" }))
            .to_request();
        let login: Value = test::call_and_read_body_json(&app, req).await;
        let token = login["access_token"].as_str().unwrap().to_string();

        let req = test::TestRequest::get()
            .uri("/api/auth/me")
            .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
            .to_request();
        let me: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(me["email"], "writer@example.com");
        assert_eq!(me["is_premium"], false);

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({ "email": "writer@example.com", "password": "wrong password" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_same_title_gets_suffixed_slug() {
        let (state, tokens) = parts(PublishSettings::default());
        let auth = bearer(&***tokens, "author@example.com");
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(tokens)
                .configure(configure_routes),
        )
        .await;

        let mut slugs = Vec::new();
        for _ in 0..2 {
            let req = test::TestRequest::post()
                .uri("/api/dashboard/posts")
                .insert_header(auth.clone())
                .set_json(json!({
                    "title": "Hello World!",
                    "content": "<p>First post</p>",
                    "published": true
                }))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::CREATED);

            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["message"], "Post Published!");
            slugs.push(body["data"]["slug"].as_str().unwrap().to_string());
        }

        assert_eq!(slugs, vec!["hello-world", "hello-world-1"]);

        let req = test::TestRequest::get().uri("/api/posts?q=first").to_request();
        let listed: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(listed.as_array().unwrap().len(), 2);
    }

    #[actix_web::test]
    async fn test_large_content_requires_confirmation() {
        let settings = PublishSettings {
            large_content_threshold: 10,
            ..PublishSettings::default()
        };
        let (state, tokens) = parts(settings);
        let auth = bearer(&***tokens, "author@example.com");
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(tokens)
                .configure(configure_routes),
        )
        .await;

        let post = json!({
            "title": "Long read",
            "content": "<p>Well over ten characters</p>"
        });

        let req = test::TestRequest::post()
            .uri("/api/dashboard/posts")
            .insert_header(auth.clone())
            .set_json(&post)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::PRECONDITION_REQUIRED);

        let mut confirmed = post.clone();
        confirmed["confirm_large_content"] = json!(true);
        let req = test::TestRequest::post()
            .uri("/api/dashboard/posts")
            .insert_header(auth.clone())
            .set_json(&confirmed)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let req = test::TestRequest::get()
            .uri("/api/dashboard")
            .insert_header(auth)
            .to_request();
        let dashboard: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(dashboard["stats"]["total"], 1);
        assert_eq!(dashboard["stats"]["drafts"], 1);
    }

    #[actix_web::test]
    async fn test_premium_post_is_gated_for_anonymous_readers() {
        let (state, tokens) = parts(PublishSettings::default());
        let auth = bearer(&***tokens, "author@example.com");
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(tokens)
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/dashboard/posts")
            .insert_header(auth)
            .set_json(json!({
                "title": "Members only",
                "content": "<p>Secret sauce</p>",
                "excerpt": "A teaser",
                "is_premium": true,
                "published": true
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let req = test::TestRequest::get()
            .uri("/api/posts/members-only")
            .to_request();
        let page: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(page["gated"], true);
        assert_eq!(page["post"]["content"], "");
        assert!(page["preview"].as_str().is_some());

        let req = test::TestRequest::get().uri("/api/posts/missing").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_dashboard_requires_auth() {
        let (state, tokens) = parts(PublishSettings::default());
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(tokens)
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/dashboard").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let req = test::TestRequest::delete()
            .uri(&format!("/api/dashboard/posts/{}", Uuid::new_v4()))
            .insert_header((header::AUTHORIZATION, "Bearer not-a-token"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_author_edits_unpublishes_and_deletes_post() {
        let (state, tokens) = parts(PublishSettings::default());
        let owner = bearer(&***tokens, "author@example.com");
        let stranger = bearer(&***tokens, "stranger@example.com");
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(tokens)
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/dashboard/posts")
            .insert_header(owner.clone())
            .set_json(json!({
                "title": "Hello World",
                "content": "<p>Body</p>",
                "slug": "my-custom-link",
                "published": true
            }))
            .to_request();
        let created: Value = test::call_and_read_body_json(&app, req).await;
        let id = created["data"]["id"].as_str().unwrap().to_string();
        let uri = format!("/api/dashboard/posts/{id}");
        assert_eq!(created["data"]["slug"], "my-custom-link");

        let req = test::TestRequest::put()
            .uri(&uri)
            .insert_header(owner.clone())
            .set_json(json!({
                "title": "Hello World, revised",
                "content": "<p>Edited body</p>",
                "published": true
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let updated: Value = test::read_body_json(resp).await;
        assert_eq!(updated["message"], "Post Updated!");
        assert_eq!(updated["data"]["slug"], "my-custom-link");
        assert_eq!(updated["data"]["title"], "Hello World, revised");

        let req = test::TestRequest::put()
            .uri(&uri)
            .insert_header(stranger.clone())
            .set_json(json!({ "title": "Mine now", "content": "<p>Body</p>" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::put()
            .uri(&uri)
            .insert_header(owner.clone())
            .set_json(json!({
                "title": "Hello World, revised",
                "content": "<p>Edited body</p>",
                "published": false
            }))
            .to_request();
        let unpublished: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(unpublished["message"], "Post Unpublished!");
        assert_eq!(unpublished["data"]["slug"], "my-custom-link");

        let req = test::TestRequest::get()
            .uri("/api/posts/my-custom-link")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::delete()
            .uri(&uri)
            .insert_header(stranger)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::delete()
            .uri(&uri)
            .insert_header(owner.clone())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let req = test::TestRequest::get()
            .uri("/api/dashboard")
            .insert_header(owner)
            .to_request();
        let dashboard: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(dashboard["stats"]["total"], 0);
    }

    #[actix_web::test]
    async fn test_content_stats_and_theme_toggle() {
        let (state, tokens) = parts(PublishSettings::default());
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(tokens)
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/posts/stats")
            .set_json(json!({ "content": "**bold** move", "simple_editor": true }))
            .to_request();
        let stats: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(stats["words"], 2);
        assert_eq!(stats["reading_time_minutes"], 1);

        let req = test::TestRequest::post()
            .uri("/api/preferences/theme/toggle")
            .to_request();
        let resp = test::call_service(&app, req).await;
        let cookie = resp
            .response()
            .cookies()
            .find(|c| c.name() == "theme")
            .unwrap();
        assert_eq!(cookie.value(), "dark");

        let req = test::TestRequest::get()
            .uri("/api/preferences/theme")
            .cookie(actix_web::cookie::Cookie::new("theme", "dark"))
            .to_request();
        let theme: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(theme["theme"], "dark");
    }

    #[actix_web::test]
    async fn test_checkout_unconfigured() {
        let (state, tokens) = parts(PublishSettings::default());
        let auth = bearer(&***tokens, "reader@example.com");
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(tokens)
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/premium/checkout")
            .insert_header(auth)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
