//! PostgreSQL implementation of ThreadRepository

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use forum_core::entities::{AddThread, AddedThread, ThreadRecord};
use forum_core::traits::{RepoResult, ThreadRepository};
use forum_core::value_objects::IdGenerator;

use crate::models::ThreadModel;

use super::error::{map_db_error, thread_not_found};

/// PostgreSQL implementation of ThreadRepository
#[derive(Clone)]
pub struct PgThreadRepository {
    pool: PgPool,
    id_generator: Arc<dyn IdGenerator>,
}

impl PgThreadRepository {
    /// Create a new PgThreadRepository
    pub fn new(pool: PgPool, id_generator: Arc<dyn IdGenerator>) -> Self {
        Self { pool, id_generator }
    }
}

#[async_trait]
impl ThreadRepository for PgThreadRepository {
    #[instrument(skip(self, thread), fields(owner = %thread.owner()))]
    async fn add_thread(&self, thread: &AddThread) -> RepoResult<AddedThread> {
        let id = self.id_generator.prefixed("thread");

        let model = sqlx::query_as::<_, ThreadModel>(
            r#"
            INSERT INTO threads (id, title, body, owner)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, body, owner, created_at
            "#,
        )
        .bind(&id)
        .bind(thread.title())
        .bind(thread.body())
        .bind(thread.owner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        AddedThread::try_from(model)
    }

    #[instrument(skip(self))]
    async fn verify_thread_exists(&self, thread_id: &str) -> RepoResult<()> {
        let found = sqlx::query_scalar::<_, String>(
            r#"
            SELECT id FROM threads WHERE id = $1
            "#,
        )
        .bind(thread_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        found.map(|_| ()).ok_or_else(|| thread_not_found(thread_id))
    }

    #[instrument(skip(self))]
    async fn get_thread_by_id(&self, thread_id: &str) -> RepoResult<ThreadRecord> {
        let model = sqlx::query_as::<_, ThreadModel>(
            r#"
            SELECT id, title, body, owner, created_at
            FROM threads
            WHERE id = $1
            "#,
        )
        .bind(thread_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        model
            .map(ThreadRecord::from)
            .ok_or_else(|| thread_not_found(thread_id))
    }
}
