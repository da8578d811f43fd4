//! Add a comment to an existing thread

use forum_core::entities::{AddComment, AddedComment};
use forum_core::error::DomainError;
use serde_json::Value;
use tracing::{info, instrument};

use crate::context::ServiceContext;

/// Validates a comment payload, checks the thread, then persists the comment
pub struct AddCommentUseCase<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AddCommentUseCase<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Run with a `{threadId, content, owner}` payload
    ///
    /// The payload is validated before any repository call.
    #[instrument(skip(self, payload))]
    pub async fn execute(&self, payload: &Value) -> Result<AddedComment, DomainError> {
        let comment = AddComment::parse(payload)?;

        self.ctx
            .thread_repo()
            .verify_thread_exists(comment.thread_id())
            .await?;
        let added = self
            .ctx
            .comment_repo()
            .add_comment_to_thread(&comment)
            .await?;

        info!(
            comment_id = %added.id(),
            thread_id = %comment.thread_id(),
            "Comment added"
        );
        Ok(added)
    }
}
