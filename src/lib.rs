//! HTTP CRUD service for comments.
//!
//! Requests flow through three layers:
//! - [`interface::http`] decodes and validates requests and maps failures to
//!   status codes,
//! - [`application::comment_service::CommentService`] is the storage-agnostic
//!   contract the handlers call,
//! - [`infrastructure`] holds the implementations: Postgres via `sqlx`, and an
//!   in-memory store.

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interface;
pub mod state;

pub use app::build_router;
