/// A stored comment.
///
/// `id` is assigned by the store when the comment is created and never taken
/// from caller input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: String,
    pub slug: String,
    pub body: String,
    pub author: String,
}

/// The caller-controlled fields of a comment, used for both creation and
/// full replacement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentDraft {
    pub slug: String,
    pub body: String,
    pub author: String,
}

impl CommentDraft {
    pub fn new(
        slug: impl Into<String>,
        body: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            slug: slug.into(),
            body: body.into(),
            author: author.into(),
        }
    }

    pub fn into_comment(self, id: impl Into<String>) -> Comment {
        Comment {
            id: id.into(),
            slug: self.slug,
            body: self.body,
            author: self.author,
        }
    }
}
