use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::{
    comment::{Comment, CommentDraft},
    errors::DomainError,
};

pub const DELETED_MESSAGE: &str = "Succesfully deleted";

#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub slug: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub author: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub body: String,
}

impl CreateCommentRequest {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.slug.is_empty() {
            return Err(DomainError::validation("slug must not be empty"));
        }
        if self.author.is_empty() {
            return Err(DomainError::validation("author must not be empty"));
        }
        if self.body.is_empty() {
            return Err(DomainError::validation("body must not be empty"));
        }
        Ok(())
    }

    pub fn into_draft(self) -> CommentDraft {
        CommentDraft {
            slug: self.slug,
            body: self.body,
            author: self.author,
        }
    }
}

/// Full replacement payload. Fields are taken as given; an absent or `null`
/// field replaces the stored value with an empty string. Any `id` in the body is
/// ignored in favour of the path.
#[derive(Debug, Deserialize)]
pub struct UpdateCommentRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub slug: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub author: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub body: String,
}

impl UpdateCommentRequest {
    pub fn into_draft(self) -> CommentDraft {
        CommentDraft {
            slug: self.slug,
            body: self.body,
            author: self.author,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CommentResponse {
    pub id: String,
    pub slug: String,
    pub body: String,
    pub author: String,
}

impl From<Comment> for CommentResponse {
    fn from(value: Comment) -> Self {
        Self {
            id: value.id,
            slug: value.slug,
            body: value.body,
            author: value.author,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DeleteCommentResponse {
    #[serde(rename = "Message")]
    pub message: &'static str,
}

impl DeleteCommentResponse {
    pub fn deleted() -> Self {
        Self {
            message: DELETED_MESSAGE,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Reads a JSON string field, treating `null` the same as an absent field.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
