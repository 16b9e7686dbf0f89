//! Postgres adapter tests.
//!
//! These need a reachable database and are ignored by default. Run with:
//! `COMMENTS_TEST_DATABASE_URL=postgres://... cargo test --test postgres_store -- --ignored`

use std::time::Duration;

use comments_api::{
    application::comment_service::CommentService,
    domain::{comment::CommentDraft, errors::DomainError},
    infrastructure::postgres_comment_store::PostgresCommentStore,
};

const SCHEMA: &str = include_str!("../sql/comments.sql");

async fn store() -> PostgresCommentStore {
    let url = std::env::var("COMMENTS_TEST_DATABASE_URL")
        .expect("COMMENTS_TEST_DATABASE_URL must point at a test database");
    let store = PostgresCommentStore::connect_lazy(&url, 2, Duration::from_secs(5))
        .expect("pool options should be valid");

    sqlx::raw_sql(SCHEMA)
        .execute(store.pool())
        .await
        .expect("schema should apply");
    store
}

#[tokio::test]
#[ignore = "requires COMMENTS_TEST_DATABASE_URL"]
async fn create_then_read_round_trips_fields() {
    let store = store().await;

    let created = store
        .post_comment(CommentDraft::new("slug", "body", "author"))
        .await
        .unwrap();
    assert!(!created.id.is_empty());

    let fetched = store.get_comment(&created.id).await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
#[ignore = "requires COMMENTS_TEST_DATABASE_URL"]
async fn update_returns_the_stored_row() {
    let store = store().await;
    let created = store
        .post_comment(CommentDraft::new("old-slug", "old-body", "old-author"))
        .await
        .unwrap();

    let updated = store
        .update_comment(
            &created.id,
            CommentDraft::new("new-slug", "new-body", "new-author"),
        )
        .await
        .unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.slug, "new-slug");

    let fetched = store.get_comment(&created.id).await.unwrap();
    assert_eq!(fetched, updated);
}

#[tokio::test]
#[ignore = "requires COMMENTS_TEST_DATABASE_URL"]
async fn delete_then_read_fails() {
    let store = store().await;
    let created = store
        .post_comment(CommentDraft::new("new-slug", "new-body", "new-author"))
        .await
        .unwrap();

    store.delete_comment(&created.id).await.unwrap();

    let err = store.get_comment(&created.id).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));
}

#[tokio::test]
#[ignore = "requires COMMENTS_TEST_DATABASE_URL"]
async fn unknown_ids_are_not_found() {
    let store = store().await;

    let err = store
        .update_comment("no-such-comment", CommentDraft::new("s", "b", "a"))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));

    let err = store.delete_comment("no-such-comment").await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));
}

#[tokio::test]
#[ignore = "requires COMMENTS_TEST_DATABASE_URL"]
async fn null_columns_read_back_as_empty_strings() {
    let store = store().await;

    let id = uuid::Uuid::new_v4().to_string();
    sqlx::query("INSERT INTO comments (id) VALUES ($1)")
        .bind(&id)
        .execute(store.pool())
        .await
        .unwrap();

    let fetched = store.get_comment(&id).await.unwrap();
    assert_eq!(fetched.slug, "");
    assert_eq!(fetched.body, "");
    assert_eq!(fetched.author, "");

    store.delete_comment(&id).await.unwrap();
}

#[tokio::test]
#[ignore = "requires COMMENTS_TEST_DATABASE_URL"]
async fn ping_succeeds_against_a_live_database() {
    let store = store().await;
    store.ping().await.unwrap();
    store.close().await;
}
