//! Comment entities - creation payload, persisted form, and redacted view

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::error::DomainError;
use crate::payload::{require_non_empty, Fields, PayloadKind};

use super::to_iso_string;

/// Content shown in place of a soft-deleted comment
pub const DELETED_COMMENT_CONTENT: &str = "**komentar telah dihapus**";

/// Validated request to add a comment to a thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddComment {
    thread_id: String,
    content: String,
    owner: String,
}

impl AddComment {
    /// Parse and validate an untyped payload with `threadId`, `content` and `owner`
    pub fn parse(raw: &Value) -> Result<Self, DomainError> {
        let fields = Fields::of(PayloadKind::AddComment, raw);
        fields.require_present(&["threadId", "content", "owner"])?;

        let content = fields.string("content")?;
        Ok(Self {
            thread_id: fields.string("threadId")?,
            content,
            owner: fields.string("owner")?,
        })
    }

    pub fn thread_id(&self) -> &str {
        &self.thread_id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }
}

/// A comment as confirmed by the store after insertion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddedComment {
    id: String,
    content: String,
    owner: String,
}

impl AddedComment {
    /// Create an AddedComment, rejecting empty fields
    pub fn new(
        id: impl Into<String>,
        content: impl Into<String>,
        owner: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let comment = Self {
            id: id.into(),
            content: content.into(),
            owner: owner.into(),
        };
        require_non_empty(
            PayloadKind::AddedComment,
            &[
                ("id", comment.id.as_str()),
                ("content", comment.content.as_str()),
                ("owner", comment.owner.as_str()),
            ],
        )?;
        Ok(comment)
    }

    /// Parse and validate an untyped payload with `id`, `content` and `owner`
    pub fn parse(raw: &Value) -> Result<Self, DomainError> {
        let fields = Fields::of(PayloadKind::AddedComment, raw);
        fields.require_present(&["id", "content", "owner"])?;

        Ok(Self {
            id: fields.string("id")?,
            content: fields.string("content")?,
            owner: fields.string("owner")?,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }
}

/// Ownership check input for `CommentRepository::verify_comment_access`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentAccess {
    pub comment_id: String,
    pub owner: String,
}

impl CommentAccess {
    pub fn new(comment_id: impl Into<String>, owner: impl Into<String>) -> Self {
        Self {
            comment_id: comment_id.into(),
            owner: owner.into(),
        }
    }
}

/// Comment row as returned by `CommentRepository::get_comments_by_thread_id`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentRecord {
    pub id: String,
    pub username: String,
    pub date: DateTime<Utc>,
    pub content: String,
    pub is_delete: bool,
}

/// A comment as shown in a thread's detail view
///
/// Soft-deleted comments keep their row, but their content is always
/// replaced by [`DELETED_COMMENT_CONTENT`] here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailsComment {
    id: String,
    username: String,
    date: String,
    content: String,
}

impl DetailsComment {
    /// Parse and validate an untyped comment with `id`, `username`, `date`,
    /// `content` and `is_delete`
    ///
    /// `is_delete` is not part of the presence check, but a missing flag
    /// still fails the type check.
    pub fn parse(raw: &Value) -> Result<Self, DomainError> {
        let fields = Fields::of(PayloadKind::DetailsComment, raw);
        fields.require_present(&["id", "username", "date", "content"])?;

        let id = fields.string("id")?;
        let username = fields.string("username")?;
        let content = fields.string("content")?;
        let is_delete = fields.boolean("is_delete")?;
        let date = fields.timestamp("date")?;

        Ok(Self::build(id, username, &date, content, is_delete))
    }

    /// Build the view of a stored comment
    pub fn from_record(record: &CommentRecord) -> Result<Self, DomainError> {
        require_non_empty(
            PayloadKind::DetailsComment,
            &[
                ("id", record.id.as_str()),
                ("username", record.username.as_str()),
                ("content", record.content.as_str()),
            ],
        )?;

        Ok(Self::build(
            record.id.clone(),
            record.username.clone(),
            &record.date,
            record.content.clone(),
            record.is_delete,
        ))
    }

    fn build(
        id: String,
        username: String,
        date: &DateTime<Utc>,
        content: String,
        is_delete: bool,
    ) -> Self {
        Self {
            id,
            username,
            date: to_iso_string(date),
            content: if is_delete {
                DELETED_COMMENT_CONTENT.to_string()
            } else {
                content
            },
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// ISO-8601 creation time
    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}
