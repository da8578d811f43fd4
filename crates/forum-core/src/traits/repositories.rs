//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{
    AddComment, AddThread, AddedComment, AddedThread, CommentAccess, CommentRecord, ThreadRecord,
};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Thread Repository
// ============================================================================

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait ThreadRepository: Send + Sync {
    /// Persist a new thread and return its generated id
    async fn add_thread(&self, thread: &AddThread) -> RepoResult<AddedThread>;

    /// Fail with `ThreadNotFound` unless the thread exists
    async fn verify_thread_exists(&self, thread_id: &str) -> RepoResult<()>;

    /// Load a thread, failing with `ThreadNotFound` if absent
    async fn get_thread_by_id(&self, thread_id: &str) -> RepoResult<ThreadRecord>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Persist a new comment on a thread
    async fn add_comment_to_thread(&self, comment: &AddComment) -> RepoResult<AddedComment>;

    /// Check that a live comment exists and belongs to `access.owner`
    ///
    /// Absent and soft-deleted comments yield `CommentNotFound`; a different
    /// owner yields `NotCommentOwner`.
    async fn verify_comment_access(&self, access: &CommentAccess) -> RepoResult<()>;

    /// Soft delete a comment. Unknown or already-deleted ids are not an error.
    async fn delete_comment(&self, comment_id: &str) -> RepoResult<()>;

    /// All comments of a thread, deleted ones included, oldest first
    async fn get_comments_by_thread_id(&self, thread_id: &str) -> RepoResult<Vec<CommentRecord>>;
}
