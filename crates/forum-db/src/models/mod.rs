//! Database models - SQLx-compatible structs for PostgreSQL tables

mod comment;
mod thread;

pub use comment::CommentModel;
pub use thread::ThreadModel;
