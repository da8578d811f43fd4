//! Thread handlers
//!
//! Endpoints for creating and reading threads.

use axum::extract::State;
use forum_core::{AddedThread, ThreadDetail};
use forum_service::{AddThreadUseCase, GetDetailsThreadUseCase};
use serde::Serialize;
use serde_json::{json, Value};

use crate::extractors::{AuthUser, ForumPath, JsonPayload, ThreadPath};
use crate::response::{ApiResult, Created, Success};
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddedThreadData {
    pub added_thread: AddedThread,
}

#[derive(Debug, Serialize)]
pub struct ThreadData {
    pub thread: ThreadDetail,
}

/// Create thread
///
/// POST /threads
pub async fn post_thread(
    State(state): State<AppState>,
    auth: AuthUser,
    body: JsonPayload,
) -> ApiResult<Created<Success<AddedThreadData>>> {
    let payload = json!({
        "title": body.field("title"),
        "body": body.field("body"),
        "owner": auth.username,
    });

    let added_thread = AddThreadUseCase::new(state.service_context())
        .execute(&payload)
        .await?;
    Ok(Created(Success::with_data(AddedThreadData { added_thread })))
}

/// Get thread with its comments
///
/// GET /threads/{thread_id}
pub async fn get_thread(
    State(state): State<AppState>,
    ForumPath(path): ForumPath<ThreadPath>,
) -> ApiResult<Success<ThreadData>> {
    let thread = GetDetailsThreadUseCase::new(state.service_context())
        .execute(&Value::String(path.thread_id))
        .await?;
    Ok(Success::with_data(ThreadData { thread }))
}
