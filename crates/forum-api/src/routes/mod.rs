//! Route definitions

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::handlers::{comments, health, threads};
use crate::state::AppState;

/// Create the API router (health routes are mounted separately)
pub fn create_router() -> Router<AppState> {
    Router::new().merge(thread_routes()).merge(comment_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

fn thread_routes() -> Router<AppState> {
    Router::new()
        .route("/threads", post(threads::post_thread))
        .route("/threads/:thread_id", get(threads::get_thread))
}

fn comment_routes() -> Router<AppState> {
    Router::new()
        .route("/threads/:thread_id/comments", post(comments::post_comment))
        .route(
            "/threads/:thread_id/comments/:comment_id",
            delete(comments::delete_comment),
        )
}
