use chrono::Utc;
use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult, RuntimeErr};
use uuid::Uuid;

use postly_core::domain::{Post, User};
use postly_core::error::RepoError;
use postly_core::ports::{BaseRepository, PostRepository, UserRepository};

use crate::database::entity::{post, profile};
use crate::database::postgres_base::map_db_err;
use crate::database::postgres_repo::{PostgresPostRepository, PostgresUserRepository};

fn post_model(slug: &str, published: bool) -> post::Model {
    let now = Utc::now();
    post::Model {
        id: Uuid::new_v4(),
        title: "Test Post".to_owned(),
        content: "<p>Content</p>".to_owned(),
        excerpt: Some("Content...".to_owned()),
        slug: slug.to_owned(),
        is_premium: false,
        published,
        author_id: Uuid::new_v4(),
        author_email: "author@example.com".to_owned(),
        author_name: None,
        created_at: now.into(),
        updated_at: now.into(),
    }
}

#[tokio::test]
async fn test_find_post_by_id() {
    let model = post_model("test-post", true);
    let post_id = model.id;

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![model]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let result: Option<Post> = repo.find_by_id(post_id).await.unwrap();

    let post = result.unwrap();
    assert_eq!(post.title, "Test Post");
    assert_eq!(post.id, post_id);
    assert_eq!(post.slug, "test-post");
}

#[tokio::test]
async fn test_find_post_by_slug_missing() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![Vec::<post::Model>::new()])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    assert!(repo.find_by_slug("nope").await.unwrap().is_none());
}

#[tokio::test]
async fn test_insert_returns_stored_post() {
    let model = post_model("hello-world", false);
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![model.clone()]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let saved = repo.insert(Post::from(model)).await.unwrap();

    assert_eq!(saved.slug, "hello-world");
    assert!(!saved.published);
}

#[tokio::test]
async fn test_update_by_non_owner_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![Vec::<post::Model>::new()])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let err = repo
        .update(Post::from(post_model("someone-elses", true)))
        .await
        .unwrap_err();

    assert!(matches!(err, RepoError::NotFound));
}

#[tokio::test]
async fn test_delete_reports_missing_rows() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            },
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            },
        ])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let (id, author) = (Uuid::new_v4(), Uuid::new_v4());

    repo.delete(id, author).await.unwrap();
    assert!(matches!(
        repo.delete(id, author).await.unwrap_err(),
        RepoError::NotFound
    ));
}

#[tokio::test]
async fn test_list_published_maps_rows() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![
            post_model("newest", true),
            post_model("older", true),
        ]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let posts = repo.list_published(Some("post")).await.unwrap();

    let slugs: Vec<_> = posts.iter().map(|p| p.slug.as_str()).collect();
    assert_eq!(slugs, vec!["newest", "older"]);
}

#[tokio::test]
async fn test_find_profile_by_email() {
    let now = Utc::now();
    let model = profile::Model {
        id: Uuid::new_v4(),
        email: "reader@example.com".to_owned(),
        password_hash: "hash".to_owned(),
        full_name: Some("Reader".to_owned()),
        is_premium: true,
        created_at: now.into(),
        updated_at: now.into(),
    };

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![model]])
        .into_connection();

    let repo = PostgresUserRepository::new(db);
    let user: User = repo
        .find_by_email("reader@example.com")
        .await
        .unwrap()
        .unwrap();

    assert!(user.is_premium);
    assert_eq!(user.full_name.as_deref(), Some("Reader"));
}

#[test]
fn test_map_db_err() {
    assert!(matches!(
        map_db_err(DbErr::RecordNotUpdated),
        RepoError::NotFound
    ));
    assert!(matches!(
        map_db_err(DbErr::Conn(RuntimeErr::Internal("refused".into()))),
        RepoError::Connection(_)
    ));
    assert!(matches!(
        map_db_err(DbErr::Custom("boom".into())),
        RepoError::Query(_)
    ));
}
