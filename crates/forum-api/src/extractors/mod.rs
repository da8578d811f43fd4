//! Axum extractors for request handling
//!
//! Custom extractors for authentication, path parameters and JSON payloads.

mod auth;
mod path;
mod payload;

pub use auth::AuthUser;
pub use path::{CommentPath, ForumPath, ThreadPath};
pub use payload::JsonPayload;
