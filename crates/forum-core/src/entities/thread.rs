//! Thread entities - creation payload, persisted form, and detail view

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::error::DomainError;
use crate::payload::{require_non_empty, Fields, PayloadKind};

use super::comment::DetailsComment;

/// Validated request to create a thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddThread {
    title: String,
    body: String,
    owner: String,
}

impl AddThread {
    /// Parse and validate an untyped payload with `title`, `body` and `owner`
    pub fn parse(raw: &Value) -> Result<Self, DomainError> {
        let fields = Fields::of(PayloadKind::AddThread, raw);
        fields.require_present(&["title", "body", "owner"])?;

        Ok(Self {
            title: fields.string("title")?,
            body: fields.string("body")?,
            owner: fields.string("owner")?,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }
}

/// A thread as confirmed by the store after insertion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddedThread {
    id: String,
    title: String,
    owner: String,
}

impl AddedThread {
    /// Create an AddedThread, rejecting empty fields
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        owner: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let thread = Self {
            id: id.into(),
            title: title.into(),
            owner: owner.into(),
        };
        require_non_empty(
            PayloadKind::AddedThread,
            &[
                ("id", thread.id.as_str()),
                ("title", thread.title.as_str()),
                ("owner", thread.owner.as_str()),
            ],
        )?;
        Ok(thread)
    }

    /// Parse and validate an untyped payload with `id`, `title` and `owner`
    pub fn parse(raw: &Value) -> Result<Self, DomainError> {
        let fields = Fields::of(PayloadKind::AddedThread, raw);
        fields.require_present(&["id", "title", "owner"])?;

        Ok(Self {
            id: fields.string("id")?,
            title: fields.string("title")?,
            owner: fields.string("owner")?,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }
}

/// Thread row as returned by `ThreadRepository::get_thread_by_id`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadRecord {
    pub id: String,
    pub title: String,
    pub body: String,
    pub date: DateTime<Utc>,
    pub username: String,
}

/// Thread detail view: the thread plus its (redacted) comments
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThreadDetail {
    pub id: String,
    pub title: String,
    pub body: String,
    #[serde(serialize_with = "super::serialize_iso")]
    pub date: DateTime<Utc>,
    pub username: String,
    pub comments: Vec<DetailsComment>,
}

impl ThreadDetail {
    /// Combine a thread row with its comments, keeping the given order
    pub fn assemble(thread: ThreadRecord, comments: Vec<DetailsComment>) -> Self {
        Self {
            id: thread.id,
            title: thread.title,
            body: thread.body,
            date: thread.date,
            username: thread.username,
            comments,
        }
    }

    /// Number of comments in the view
    #[inline]
    pub fn comment_count(&self) -> usize {
        self.comments.len()
    }
}
