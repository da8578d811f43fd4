//! PostgreSQL implementation of CommentRepository

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use forum_core::entities::{AddComment, AddedComment, CommentAccess, CommentRecord};
use forum_core::error::DomainError;
use forum_core::traits::{CommentRepository, RepoResult};
use forum_core::value_objects::IdGenerator;

use crate::models::CommentModel;

use super::error::{comment_not_found, map_db_error, map_foreign_key_violation, thread_not_found};

/// PostgreSQL implementation of CommentRepository
#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
    id_generator: Arc<dyn IdGenerator>,
}

impl PgCommentRepository {
    /// Create a new PgCommentRepository
    pub fn new(pool: PgPool, id_generator: Arc<dyn IdGenerator>) -> Self {
        Self { pool, id_generator }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    #[instrument(skip(self, comment), fields(thread_id = %comment.thread_id(), owner = %comment.owner()))]
    async fn add_comment_to_thread(&self, comment: &AddComment) -> RepoResult<AddedComment> {
        let id = self.id_generator.prefixed("comment");

        let model = sqlx::query_as::<_, CommentModel>(
            r#"
            INSERT INTO comments (id, thread_id, owner, comment)
            VALUES ($1, $2, $3, $4)
            RETURNING id, thread_id, owner, comment, created_at, is_delete
            "#,
        )
        .bind(&id)
        .bind(comment.thread_id())
        .bind(comment.owner())
        .bind(comment.content())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_foreign_key_violation(e, || thread_not_found(comment.thread_id())))?;

        AddedComment::try_from(model)
    }

    #[instrument(skip(self))]
    async fn verify_comment_access(&self, access: &CommentAccess) -> RepoResult<()> {
        let owner = sqlx::query_scalar::<_, String>(
            r#"
            SELECT owner FROM comments
            WHERE id = $1 AND is_delete = FALSE
            "#,
        )
        .bind(&access.comment_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?
        .ok_or_else(|| comment_not_found(&access.comment_id))?;

        if owner != access.owner {
            return Err(DomainError::NotCommentOwner);
        }
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_comment(&self, comment_id: &str) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE comments SET is_delete = TRUE WHERE id = $1
            "#,
        )
        .bind(comment_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            debug!("No comment row matched");
        }
        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_comments_by_thread_id(&self, thread_id: &str) -> RepoResult<Vec<CommentRecord>> {
        let models = sqlx::query_as::<_, CommentModel>(
            r#"
            SELECT id, thread_id, owner, comment, created_at, is_delete
            FROM comments
            WHERE thread_id = $1
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(thread_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(models.into_iter().map(CommentRecord::from).collect())
    }
}
