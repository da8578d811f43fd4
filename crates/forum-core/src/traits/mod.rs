//! Traits (ports) the domain layer depends on

mod repositories;

pub use repositories::{CommentRepository, RepoResult, ThreadRepository};

#[cfg(any(test, feature = "testing"))]
pub use repositories::{MockCommentRepository, MockThreadRepository};
