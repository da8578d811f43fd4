//! Create a thread

use forum_core::entities::{AddThread, AddedThread};
use forum_core::error::DomainError;
use serde_json::Value;
use tracing::{info, instrument};

use crate::context::ServiceContext;

/// Validates a thread payload and persists it
pub struct AddThreadUseCase<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AddThreadUseCase<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Run with a `{title, body, owner}` payload
    #[instrument(skip(self, payload))]
    pub async fn execute(&self, payload: &Value) -> Result<AddedThread, DomainError> {
        let thread = AddThread::parse(payload)?;
        let added = self.ctx.thread_repo().add_thread(&thread).await?;

        info!(thread_id = %added.id(), owner = %added.owner(), "Thread created");
        Ok(added)
    }
}
