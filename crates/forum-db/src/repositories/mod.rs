//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in forum-core.

mod comment;
mod error;
mod thread;

pub use comment::PgCommentRepository;
pub use thread::PgThreadRepository;
