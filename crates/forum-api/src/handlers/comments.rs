//! Comment handlers

use axum::extract::State;
use forum_core::AddedComment;
use forum_service::{AddCommentUseCase, DeleteCommentUseCase};
use serde::Serialize;
use serde_json::json;

use crate::extractors::{AuthUser, CommentPath, ForumPath, JsonPayload, ThreadPath};
use crate::response::{ApiResult, Created, Success};
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddedCommentData {
    pub added_comment: AddedComment,
}

/// Add a comment to a thread
///
/// POST /threads/{thread_id}/comments
pub async fn post_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    ForumPath(path): ForumPath<ThreadPath>,
    body: JsonPayload,
) -> ApiResult<Created<Success<AddedCommentData>>> {
    let payload = json!({
        "threadId": path.thread_id,
        "content": body.field("content"),
        "owner": auth.username,
    });

    let added_comment = AddCommentUseCase::new(state.service_context())
        .execute(&payload)
        .await?;
    Ok(Created(Success::with_data(AddedCommentData { added_comment })))
}

/// Soft-delete one of the caller's comments
///
/// DELETE /threads/{thread_id}/comments/{comment_id}
pub async fn delete_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    ForumPath(path): ForumPath<CommentPath>,
) -> ApiResult<Success<()>> {
    let payload = json!({
        "threadId": path.thread_id,
        "commentId": path.comment_id,
        "owner": auth.username,
    });

    DeleteCommentUseCase::new(state.service_context())
        .execute(&payload)
        .await?;
    Ok(Success::empty())
}
