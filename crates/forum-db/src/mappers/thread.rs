//! Thread model -> entity mapper

use forum_core::entities::{AddedThread, ThreadRecord};
use forum_core::error::DomainError;

use crate::models::ThreadModel;

/// Convert ThreadModel to the detail-view record
impl From<ThreadModel> for ThreadRecord {
    fn from(model: ThreadModel) -> Self {
        ThreadRecord {
            id: model.id,
            title: model.title,
            body: model.body,
            date: model.created_at,
            username: model.owner,
        }
    }
}

/// Convert an inserted row to AddedThread
impl TryFrom<ThreadModel> for AddedThread {
    type Error = DomainError;

    fn try_from(model: ThreadModel) -> Result<Self, Self::Error> {
        AddedThread::new(model.id, model.title, model.owner)
    }
}
