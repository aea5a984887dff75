//! Application state - shared across all handlers.

use std::sync::Arc;

use postly_core::ports::{PasswordService, PostRepository, UserRepository};
use postly_core::service::AccountService;
use postly_core::{PostService, PublishSettings};
use postly_infra::{DatabaseConfig, InMemoryPostRepository, InMemoryUserRepository};

#[cfg(feature = "postgres")]
use postly_infra::{DatabaseConnections, PostgresPostRepository, PostgresUserRepository};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<PostService>,
    pub accounts: Arc<AccountService>,
    pub http: reqwest::Client,
    pub checkout_url: Option<String>,
    /// "postgres" or "memory", reported by the health check.
    pub storage: &'static str,
}

type Repositories = (Arc<dyn PostRepository>, Arc<dyn UserRepository>, &'static str);

fn in_memory() -> Repositories {
    (
        Arc::new(InMemoryPostRepository::new()),
        Arc::new(InMemoryUserRepository::new()),
        "memory",
    )
}

#[cfg(feature = "postgres")]
async fn connect(db_config: Option<&DatabaseConfig>) -> Repositories {
    let Some(config) = db_config else {
        tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
        return in_memory();
    };

    match DatabaseConnections::init(config).await {
        Ok(connections) => (
            Arc::new(PostgresPostRepository::new(connections.main.clone())),
            Arc::new(PostgresUserRepository::new(connections.main)),
            "postgres",
        ),
        Err(e) => {
            tracing::error!(
                "Failed to connect to database: {}. Using in-memory fallback.",
                e
            );
            in_memory()
        }
    }
}

#[cfg(not(feature = "postgres"))]
async fn connect(_db_config: Option<&DatabaseConfig>) -> Repositories {
    tracing::info!("Running without postgres feature - using in-memory repositories");
    in_memory()
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig, passwords: Arc<dyn PasswordService>) -> Self {
        let (posts, users, storage) = connect(config.database.as_ref()).await;

        let mut state = Self::from_parts(
            posts,
            users,
            passwords,
            config.publish.clone(),
            config.checkout_url.clone(),
        );
        state.storage = storage;

        tracing::info!(storage, "Application state initialized");
        state
    }

    pub fn from_parts(
        posts: Arc<dyn PostRepository>,
        users: Arc<dyn UserRepository>,
        passwords: Arc<dyn PasswordService>,
        publish: PublishSettings,
        checkout_url: Option<String>,
    ) -> Self {
        Self {
            posts: Arc::new(PostService::new(posts, publish)),
            accounts: Arc::new(AccountService::new(users, passwords)),
            http: reqwest::Client::new(),
            checkout_url,
            storage: "memory",
        }
    }
}
