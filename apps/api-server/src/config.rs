//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;

use postly_core::PublishSettings;
use postly_core::service::{
    DEFAULT_EXCERPT_CHARS, DEFAULT_LARGE_CONTENT_THRESHOLD, DEFAULT_MAX_SLUG_ATTEMPTS,
};
use postly_infra::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
    pub publish: PublishSettings,
    /// Payment provider endpoint that creates checkout sessions.
    pub checkout_url: Option<String>,
}

/// Parse `key`, falling back to `default` when unset or malformed.
fn env_or<T: FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, "Ignoring malformed setting");
            default
        }),
        Err(_) => default,
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database = env::var("DATABASE_URL").ok().map(|url| DatabaseConfig {
            url,
            max_connections: env_or("DB_MAX_CONNECTIONS", 100),
            min_connections: env_or("DB_MIN_CONNECTIONS", 10),
        });

        let publish = PublishSettings {
            max_slug_attempts: env_or("SLUG_MAX_ATTEMPTS", DEFAULT_MAX_SLUG_ATTEMPTS).max(1),
            large_content_threshold: env_or(
                "LARGE_CONTENT_THRESHOLD",
                DEFAULT_LARGE_CONTENT_THRESHOLD,
            ),
            excerpt_chars: DEFAULT_EXCERPT_CHARS,
        };

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env_or("PORT", 8080),
            database,
            publish,
            checkout_url: env::var("CHECKOUT_URL").ok().filter(|u| !u.trim().is_empty()),
        }
    }
}
