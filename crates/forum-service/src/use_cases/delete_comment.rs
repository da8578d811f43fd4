//! Soft delete a comment owned by the caller

use forum_core::entities::CommentAccess;
use forum_core::error::DomainError;
use forum_core::payload::{Fields, PayloadKind};
use serde_json::Value;
use tracing::{info, instrument};

use crate::context::ServiceContext;

/// Checks the thread, then the comment's owner, then flags the comment deleted
pub struct DeleteCommentUseCase<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> DeleteCommentUseCase<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Run with a `{threadId, commentId, owner}` payload
    #[instrument(skip(self, payload))]
    pub async fn execute(&self, payload: &Value) -> Result<(), DomainError> {
        let fields = Fields::of(PayloadKind::DeleteComment, payload);
        fields.require_present(&["threadId", "commentId", "owner"])?;

        let thread_id = fields.string("threadId")?;
        let access = CommentAccess::new(fields.string("commentId")?, fields.string("owner")?);

        self.ctx.thread_repo().verify_thread_exists(&thread_id).await?;
        self.ctx.comment_repo().verify_comment_access(&access).await?;
        self.ctx
            .comment_repo()
            .delete_comment(&access.comment_id)
            .await?;

        info!(comment_id = %access.comment_id, thread_id = %thread_id, "Comment deleted");
        Ok(())
    }
}
