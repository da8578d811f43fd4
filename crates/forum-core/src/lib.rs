//! # forum-core
//!
//! Domain layer containing entities, payload validation, repository traits,
//! and id generation.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod payload;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    AddComment, AddThread, AddedComment, AddedThread, CommentAccess, CommentRecord,
    DetailsComment, ThreadDetail, ThreadRecord, DELETED_COMMENT_CONTENT,
};
pub use error::DomainError;
pub use payload::PayloadKind;
pub use traits::{CommentRepository, RepoResult, ThreadRepository};
pub use value_objects::{IdGenerator, RandomIdGenerator};

#[cfg(any(test, feature = "testing"))]
pub use traits::{MockCommentRepository, MockThreadRepository};
