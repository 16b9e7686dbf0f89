use std::sync::Arc;

use crate::application::comment_service::CommentService;

#[derive(Clone)]
pub struct AppState {
    pub comment_service: Arc<dyn CommentService>,
}

impl AppState {
    pub fn new(comment_service: Arc<dyn CommentService>) -> Self {
        Self { comment_service }
    }
}
