pub mod in_memory_comment_store;
pub mod postgres_comment_store;
