//! Comment database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for comments table
#[derive(Debug, Clone, FromRow)]
pub struct CommentModel {
    pub id: String,
    pub thread_id: String,
    pub owner: String,
    pub comment: String,
    pub created_at: DateTime<Utc>,
    pub is_delete: bool,
}
