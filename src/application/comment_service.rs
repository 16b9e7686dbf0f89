use async_trait::async_trait;

use crate::domain::{
    comment::{Comment, CommentDraft},
    errors::DomainError,
};

/// Create/read/update/delete contract for comments.
///
/// The HTTP layer only ever talks to this trait, so any store can sit behind
/// it: the Postgres adapter in production, the in-memory store in tests.
#[async_trait]
pub trait CommentService: Send + Sync {
    /// Stores a new comment and returns it with a freshly generated id.
    async fn post_comment(&self, draft: CommentDraft) -> Result<Comment, DomainError>;

    async fn get_comment(&self, id: &str) -> Result<Comment, DomainError>;

    /// Replaces all caller-controlled fields of an existing comment and
    /// returns the comment as stored afterwards.
    async fn update_comment(&self, id: &str, draft: CommentDraft)
    -> Result<Comment, DomainError>;

    async fn delete_comment(&self, id: &str) -> Result<(), DomainError>;

    /// Readiness probe for the backing store.
    async fn ping(&self) -> Result<(), DomainError> {
        Ok(())
    }
}
