//! Domain entities - validated value objects for threads and comments

mod comment;
mod thread;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serializer;

pub use comment::{
    AddComment, AddedComment, CommentAccess, CommentRecord, DetailsComment,
    DELETED_COMMENT_CONTENT,
};
pub use thread::{AddThread, AddedThread, ThreadDetail, ThreadRecord};

/// Render a timestamp as ISO-8601 with millisecond precision and a `Z` suffix
pub fn to_iso_string(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn serialize_iso<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&to_iso_string(date))
}
