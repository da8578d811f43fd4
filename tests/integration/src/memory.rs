//! In-memory repository implementations
//!
//! Both repositories share one [`ForumStore`] so that comments can only be
//! added to threads that exist, matching the foreign key in Postgres.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use forum_core::{
    AddComment, AddThread, AddedComment, AddedThread, CommentAccess, CommentRecord,
    CommentRepository, DomainError, IdGenerator, RandomIdGenerator, RepoResult, ThreadRecord,
    ThreadRepository,
};
use parking_lot::RwLock;

#[derive(Debug, Clone)]
struct StoredThread {
    id: String,
    title: String,
    body: String,
    owner: String,
    created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
struct StoredComment {
    id: String,
    thread_id: String,
    owner: String,
    content: String,
    created_at: DateTime<Utc>,
    is_delete: bool,
}

#[derive(Debug, Default)]
struct Tables {
    threads: Vec<StoredThread>,
    comments: Vec<StoredComment>,
    clock: i64,
}

impl Tables {
    // Strictly increasing timestamps keep insertion order observable
    fn tick(&mut self) -> DateTime<Utc> {
        self.clock += 1;
        DateTime::<Utc>::UNIX_EPOCH + Duration::days(19_000) + Duration::milliseconds(self.clock)
    }

    fn has_thread(&self, thread_id: &str) -> bool {
        self.threads.iter().any(|t| t.id == thread_id)
    }
}

/// Shared backing storage for the in-memory repositories
#[derive(Clone, Default)]
pub struct ForumStore {
    tables: Arc<RwLock<Tables>>,
    ids: Arc<RandomIdGenerator>,
}

impl ForumStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a thread with a fixed id, as a table helper would
    pub fn seed_thread(&self, id: &str, title: &str, body: &str, owner: &str) {
        let mut tables = self.tables.write();
        let created_at = tables.tick();
        tables.threads.push(StoredThread {
            id: id.to_string(),
            title: title.to_string(),
            body: body.to_string(),
            owner: owner.to_string(),
            created_at,
        });
    }

    /// Insert a comment with a fixed id
    pub fn seed_comment(&self, id: &str, thread_id: &str, owner: &str, content: &str) {
        let mut tables = self.tables.write();
        let created_at = tables.tick();
        tables.comments.push(StoredComment {
            id: id.to_string(),
            thread_id: thread_id.to_string(),
            owner: owner.to_string(),
            content: content.to_string(),
            created_at,
            is_delete: false,
        });
    }

    /// The stored soft-delete flag of a comment
    pub fn is_deleted(&self, comment_id: &str) -> Option<bool> {
        let tables = self.tables.read();
        tables
            .comments
            .iter()
            .find(|c| c.id == comment_id)
            .map(|c| c.is_delete)
    }

    #[must_use]
    pub fn thread_repository(&self) -> InMemoryThreadRepository {
        InMemoryThreadRepository(self.clone())
    }

    #[must_use]
    pub fn comment_repository(&self) -> InMemoryCommentRepository {
        InMemoryCommentRepository(self.clone())
    }
}

/// [`ThreadRepository`] over a [`ForumStore`]
pub struct InMemoryThreadRepository(ForumStore);

#[async_trait]
impl ThreadRepository for InMemoryThreadRepository {
    async fn add_thread(&self, thread: &AddThread) -> RepoResult<AddedThread> {
        let id = self.0.ids.prefixed("thread");
        let mut tables = self.0.tables.write();
        let created_at = tables.tick();
        tables.threads.push(StoredThread {
            id: id.clone(),
            title: thread.title().to_string(),
            body: thread.body().to_string(),
            owner: thread.owner().to_string(),
            created_at,
        });
        AddedThread::new(id, thread.title(), thread.owner())
    }

    async fn verify_thread_exists(&self, thread_id: &str) -> RepoResult<()> {
        if self.0.tables.read().has_thread(thread_id) {
            Ok(())
        } else {
            Err(DomainError::ThreadNotFound(thread_id.to_string()))
        }
    }

    async fn get_thread_by_id(&self, thread_id: &str) -> RepoResult<ThreadRecord> {
        self.0
            .tables
            .read()
            .threads
            .iter()
            .find(|t| t.id == thread_id)
            .map(|t| ThreadRecord {
                id: t.id.clone(),
                title: t.title.clone(),
                body: t.body.clone(),
                date: t.created_at,
                username: t.owner.clone(),
            })
            .ok_or_else(|| DomainError::ThreadNotFound(thread_id.to_string()))
    }
}

/// [`CommentRepository`] over a [`ForumStore`]
pub struct InMemoryCommentRepository(ForumStore);

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn add_comment_to_thread(&self, comment: &AddComment) -> RepoResult<AddedComment> {
        let id = self.0.ids.prefixed("comment");
        let mut tables = self.0.tables.write();
        if !tables.has_thread(comment.thread_id()) {
            return Err(DomainError::ThreadNotFound(comment.thread_id().to_string()));
        }
        let created_at = tables.tick();
        tables.comments.push(StoredComment {
            id: id.clone(),
            thread_id: comment.thread_id().to_string(),
            owner: comment.owner().to_string(),
            content: comment.content().to_string(),
            created_at,
            is_delete: false,
        });
        AddedComment::new(id, comment.content(), comment.owner())
    }

    async fn verify_comment_access(&self, access: &CommentAccess) -> RepoResult<()> {
        let tables = self.0.tables.read();
        let comment = tables
            .comments
            .iter()
            .find(|c| c.id == access.comment_id && !c.is_delete)
            .ok_or_else(|| DomainError::CommentNotFound(access.comment_id.clone()))?;

        if comment.owner == access.owner {
            Ok(())
        } else {
            Err(DomainError::NotCommentOwner)
        }
    }

    async fn delete_comment(&self, comment_id: &str) -> RepoResult<()> {
        let mut tables = self.0.tables.write();
        if let Some(comment) = tables.comments.iter_mut().find(|c| c.id == comment_id) {
            comment.is_delete = true;
        }
        Ok(())
    }

    async fn get_comments_by_thread_id(&self, thread_id: &str) -> RepoResult<Vec<CommentRecord>> {
        let tables = self.0.tables.read();
        let mut comments: Vec<&StoredComment> = tables
            .comments
            .iter()
            .filter(|c| c.thread_id == thread_id)
            .collect();
        comments.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));

        Ok(comments
            .into_iter()
            .map(|c| CommentRecord {
                id: c.id.clone(),
                username: c.owner.clone(),
                date: c.created_at,
                content: c.content.clone(),
                is_delete: c.is_delete,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_comments_all_land_in_order() {
        let store = ForumStore::new();
        store.seed_thread("thread-1", "title", "body", "dicoding");

        let tasks: Vec<_> = (0..32)
            .map(|i| {
                let repo = store.comment_repository();
                tokio::spawn(async move {
                    let comment = AddComment::parse(&json!({
                        "threadId": "thread-1",
                        "content": format!("comment {i}"),
                        "owner": "dicoding",
                    }))
                    .unwrap();
                    repo.add_comment_to_thread(&comment).await.unwrap();
                })
            })
            .collect();
        for task in tasks {
            task.await.unwrap();
        }

        let comments = store
            .comment_repository()
            .get_comments_by_thread_id("thread-1")
            .await
            .unwrap();
        assert_eq!(comments.len(), 32);
        assert!(comments.windows(2).all(|w| w[0].date < w[1].date));
    }

    #[tokio::test]
    async fn test_seeded_comment_is_visible_to_repository() {
        let store = ForumStore::new();
        store.seed_thread("thread-1", "title", "body", "dicoding");
        store.seed_comment("comment-1", "thread-1", "dicoding", "hi");

        let repo = store.comment_repository();
        repo.delete_comment("comment-1").await.unwrap();

        assert_eq!(store.is_deleted("comment-1"), Some(true));
        assert_eq!(store.is_deleted("comment-2"), None);
    }
}
