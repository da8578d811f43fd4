//! Untyped payload access
//!
//! Entities are built from `serde_json::Value` payloads handed over by the
//! HTTP layer. Field presence follows truthiness: absent, `null`, `""`,
//! `false` and `0` all count as missing.

use std::fmt;

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::error::DomainError;

/// The kind of payload being validated, used to build error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PayloadKind {
    AddThread,
    AddedThread,
    AddComment,
    AddedComment,
    DetailsComment,
    GetThread,
    DeleteComment,
}

impl PayloadKind {
    /// Code reported when a required field is missing
    pub fn missing_code(self) -> &'static str {
        match self {
            Self::AddThread => "ADD_THREAD.NOT_CONTAIN_NEEDED_PROPERTY",
            Self::AddedThread => "ADDED_THREAD.NOT_CONTAIN_NEEDED_PROPERTY",
            Self::AddComment => "ADD_COMMENT.NOT_CONTAIN_NEEDED_PROPERTY",
            Self::AddedComment => "ADDED_COMMENT.NOT_CONTAIN_NEEDED_PROPERTY",
            Self::DetailsComment => "DETAILS_COMMENT.NOT_CONTAIN_NEEDED_PROPERTY",
            Self::GetThread => "GET_THREAD_USE_CASE.NOT_CONTAIN_NEEDED_PROPERTY",
            Self::DeleteComment => "DELETE_COMMENT_USE_CASE.NOT_CONTAIN_NEEDED_PROPERTY",
        }
    }

    /// Code reported when a field has the wrong type
    pub fn type_code(self) -> &'static str {
        match self {
            Self::AddThread => "ADD_THREAD.NOT_MEET_DATA_TYPE_SPECIFICATION",
            Self::AddedThread => "ADDED_THREAD.NOT_MEET_DATA_TYPE_SPECIFICATION",
            Self::AddComment => "ADD_COMMENT.NOT_MEET_DATA_TYPE_SPECIFICATION",
            Self::AddedComment => "ADDED_COMMENT.NOT_MEET_DATA_TYPE_SPECIFICATION",
            Self::DetailsComment => "DETAILS_COMMENT.NOT_MEET_DATA_TYPE_SPECIFICATION",
            Self::GetThread => "GET_THREAD_USE_CASE.PAYLOAD_NOT_MEET_DATA_TYPE_SPECIFICATION",
            Self::DeleteComment => "DELETE_COMMENT_USE_CASE.NOT_MEET_DATA_TYPE_SPECIFICATION",
        }
    }
}

impl fmt::Display for PayloadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::AddThread => "AddThread",
            Self::AddedThread => "AddedThread",
            Self::AddComment => "AddComment",
            Self::AddedComment => "AddedComment",
            Self::DetailsComment => "DetailsComment",
            Self::GetThread => "GetDetailsThread",
            Self::DeleteComment => "DeleteComment",
        };
        f.write_str(name)
    }
}

/// Check a JSON value the way a presence check treats it
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Field accessor over an untyped payload
#[derive(Debug, Clone, Copy)]
pub struct Fields<'a> {
    kind: PayloadKind,
    map: Option<&'a Map<String, Value>>,
}

impl<'a> Fields<'a> {
    /// Wrap a raw payload. Non-object payloads behave as if every field is absent.
    pub fn of(kind: PayloadKind, raw: &'a Value) -> Self {
        Self {
            kind,
            map: raw.as_object(),
        }
    }

    /// The raw value of a field, if present at all
    pub fn get(&self, name: &str) -> Option<&'a Value> {
        self.map.and_then(|m| m.get(name))
    }

    /// Fail with `MissingField` on the first listed field that is not truthy
    pub fn require_present(&self, names: &[&'static str]) -> Result<(), DomainError> {
        match names
            .iter()
            .find(|name| !self.get(name).is_some_and(is_truthy))
        {
            Some(field) => Err(DomainError::MissingField {
                payload: self.kind,
                field: *field,
            }),
            None => Ok(()),
        }
    }

    /// Read a string field, failing with `InvalidType` otherwise
    pub fn string(&self, name: &'static str) -> Result<String, DomainError> {
        match self.get(name) {
            Some(Value::String(s)) => Ok(s.clone()),
            _ => Err(self.invalid(name)),
        }
    }

    /// Read a boolean field, failing with `InvalidType` otherwise
    pub fn boolean(&self, name: &'static str) -> Result<bool, DomainError> {
        match self.get(name) {
            Some(Value::Bool(b)) => Ok(*b),
            _ => Err(self.invalid(name)),
        }
    }

    /// Read an RFC 3339 timestamp field, failing with `InvalidType` otherwise
    pub fn timestamp(&self, name: &'static str) -> Result<DateTime<Utc>, DomainError> {
        match self.get(name) {
            Some(Value::String(s)) => DateTime::parse_from_rfc3339(s)
                .map(|dt| dt.with_timezone(&Utc))
                .map_err(|_| self.invalid(name)),
            _ => Err(self.invalid(name)),
        }
    }

    fn invalid(&self, field: &'static str) -> DomainError {
        DomainError::InvalidType {
            payload: self.kind,
            field,
        }
    }
}

/// Fail with `MissingField` when a typed string is empty
pub(crate) fn require_non_empty(
    kind: PayloadKind,
    fields: &[(&'static str, &str)],
) -> Result<(), DomainError> {
    match fields.iter().find(|(_, value)| value.is_empty()) {
        Some((field, _)) => Err(DomainError::MissingField {
            payload: kind,
            field: *field,
        }),
        None => Ok(()),
    }
}
