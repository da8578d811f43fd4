//! Comment model -> entity mapper

use forum_core::entities::{AddedComment, CommentRecord};
use forum_core::error::DomainError;

use crate::models::CommentModel;

/// Convert CommentModel to the detail-view record
impl From<CommentModel> for CommentRecord {
    fn from(model: CommentModel) -> Self {
        CommentRecord {
            id: model.id,
            username: model.owner,
            date: model.created_at,
            content: model.comment,
            is_delete: model.is_delete,
        }
    }
}

/// Convert an inserted row to AddedComment
impl TryFrom<CommentModel> for AddedComment {
    type Error = DomainError;

    fn try_from(model: CommentModel) -> Result<Self, Self::Error> {
        AddedComment::new(model.id, model.comment, model.owner)
    }
}
