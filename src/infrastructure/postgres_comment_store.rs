use std::time::Duration;

use async_trait::async_trait;
use sqlx::{PgPool, postgres::PgPoolOptions};
use tracing::debug;
use uuid::Uuid;

use crate::{
    application::comment_service::CommentService,
    domain::{
        comment::{Comment, CommentDraft},
        errors::DomainError,
    },
};

#[derive(Clone)]
pub struct PostgresCommentStore {
    pool: PgPool,
}

/// Row shape of the `comments` relation. Text columns are nullable in
/// storage.
#[derive(Debug, sqlx::FromRow)]
struct CommentRow {
    id: String,
    slug: Option<String>,
    body: Option<String>,
    author: Option<String>,
}

impl From<CommentRow> for Comment {
    fn from(row: CommentRow) -> Self {
        Self {
            id: row.id,
            slug: row.slug.unwrap_or_default(),
            body: row.body.unwrap_or_default(),
            author: row.author.unwrap_or_default(),
        }
    }
}

impl PostgresCommentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens a pool against `database_url`. Connections are established
    /// lazily so a store that is down at startup surfaces on `/ready`
    /// instead of aborting the process.
    pub fn connect_lazy(
        database_url: &str,
        max_connections: u32,
        acquire_timeout: Duration,
    ) -> Result<Self, DomainError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(acquire_timeout)
            .connect_lazy(database_url)
            .map_err(|err| DomainError::storage("failed to configure connection pool", err))?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl CommentService for PostgresCommentStore {
    async fn post_comment(&self, draft: CommentDraft) -> Result<Comment, DomainError> {
        let comment = draft.into_comment(Uuid::new_v4().to_string());

        sqlx::query(
            r#"
            INSERT INTO comments (id, slug, body, author)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(&comment.id)
        .bind(&comment.slug)
        .bind(&comment.body)
        .bind(&comment.author)
        .execute(&self.pool)
        .await
        .map_err(|err| DomainError::storage("failed to insert comment", err))?;

        debug!(comment_id = %comment.id, "comment inserted");
        Ok(comment)
    }

    async fn get_comment(&self, id: &str) -> Result<Comment, DomainError> {
        let maybe_row = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT id, slug, body, author
            FROM comments
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| DomainError::storage("error fetching the comment by id", err))?;

        let Some(row) = maybe_row else {
            return Err(DomainError::not_found(format!("comment {id} not found")));
        };
        Ok(Comment::from(row))
    }

    async fn update_comment(
        &self,
        id: &str,
        draft: CommentDraft,
    ) -> Result<Comment, DomainError> {
        let maybe_row = sqlx::query_as::<_, CommentRow>(
            r#"
            UPDATE comments
            SET slug = $2, body = $3, author = $4
            WHERE id = $1
            RETURNING id, slug, body, author
            "#,
        )
        .bind(id)
        .bind(draft.slug)
        .bind(draft.body)
        .bind(draft.author)
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| DomainError::storage("failed to update comment", err))?;

        let Some(row) = maybe_row else {
            return Err(DomainError::not_found(format!("comment {id} not found")));
        };
        Ok(Comment::from(row))
    }

    async fn delete_comment(&self, id: &str) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|err| DomainError::storage("failed to delete comment from database", err))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(format!("comment {id} not found")));
        }
        Ok(())
    }

    async fn ping(&self) -> Result<(), DomainError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|err| DomainError::storage("database is not reachable", err))?;
        Ok(())
    }
}
