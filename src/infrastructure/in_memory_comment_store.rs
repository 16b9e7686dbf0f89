use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    application::comment_service::CommentService,
    domain::{
        comment::{Comment, CommentDraft},
        errors::DomainError,
    },
};

/// Process-local comment store. Same contract as the Postgres adapter,
/// without persistence across restarts.
#[derive(Default)]
pub struct InMemoryCommentStore {
    comments_by_id: RwLock<HashMap<String, Comment>>,
}

impl InMemoryCommentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.comments_by_id.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.comments_by_id.read().await.is_empty()
    }
}

#[async_trait]
impl CommentService for InMemoryCommentStore {
    async fn post_comment(&self, draft: CommentDraft) -> Result<Comment, DomainError> {
        let created = draft.into_comment(Uuid::new_v4().to_string());
        self.comments_by_id
            .write()
            .await
            .insert(created.id.clone(), created.clone());
        Ok(created)
    }

    async fn get_comment(&self, id: &str) -> Result<Comment, DomainError> {
        self.comments_by_id
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| DomainError::not_found(format!("comment {id} not found")))
    }

    async fn update_comment(
        &self,
        id: &str,
        draft: CommentDraft,
    ) -> Result<Comment, DomainError> {
        let mut comments_by_id = self.comments_by_id.write().await;
        let Some(comment) = comments_by_id.get_mut(id) else {
            return Err(DomainError::not_found(format!("comment {id} not found")));
        };

        comment.slug = draft.slug;
        comment.body = draft.body;
        comment.author = draft.author;
        Ok(comment.clone())
    }

    async fn delete_comment(&self, id: &str) -> Result<(), DomainError> {
        self.comments_by_id
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| DomainError::not_found(format!("comment {id} not found")))
    }
}
