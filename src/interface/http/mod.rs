pub mod comments_handler;
pub mod problem;
