//! Thread database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for threads table
#[derive(Debug, Clone, FromRow)]
pub struct ThreadModel {
    pub id: String,
    pub title: String,
    pub body: String,
    pub owner: String,
    pub created_at: DateTime<Utc>,
}
