//! Assemble a thread with its comments

use forum_core::entities::{DetailsComment, ThreadDetail};
use forum_core::error::DomainError;
use forum_core::payload::{is_truthy, PayloadKind};
use serde_json::Value;
use tracing::{debug, instrument};

use crate::context::ServiceContext;

/// Loads a thread and its comments, redacting deleted ones
pub struct GetDetailsThreadUseCase<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> GetDetailsThreadUseCase<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Run with a raw thread id
    #[instrument(skip(self))]
    pub async fn execute(&self, thread_id: &Value) -> Result<ThreadDetail, DomainError> {
        let thread_id = validate_thread_id(thread_id)?;

        let thread = self.ctx.thread_repo().get_thread_by_id(thread_id).await?;
        let records = self
            .ctx
            .comment_repo()
            .get_comments_by_thread_id(thread_id)
            .await?;

        let comments = records
            .iter()
            .map(DetailsComment::from_record)
            .collect::<Result<Vec<_>, _>>()?;

        debug!(thread_id, comments = comments.len(), "Thread details assembled");
        Ok(ThreadDetail::assemble(thread, comments))
    }
}

fn validate_thread_id(raw: &Value) -> Result<&str, DomainError> {
    if !is_truthy(raw) {
        return Err(DomainError::MissingField {
            payload: PayloadKind::GetThread,
            field: "threadId",
        });
    }
    raw.as_str().ok_or(DomainError::InvalidType {
        payload: PayloadKind::GetThread,
        field: "threadId",
    })
}
