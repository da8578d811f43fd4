//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::payload::PayloadKind;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("{payload}: missing required field `{field}`")]
    MissingField {
        payload: PayloadKind,
        field: &'static str,
    },

    #[error("{payload}: field `{field}` has the wrong type")]
    InvalidType {
        payload: PayloadKind,
        field: &'static str,
    },

    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Thread not found: {0}")]
    ThreadNotFound(String),

    #[error("Comment not found: {0}")]
    CommentNotFound(String),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Not comment owner")]
    NotCommentOwner,

    // =========================================================================
    // Wiring Errors
    // =========================================================================
    #[error("Repository not wired: {0}")]
    RepositoryUnimplemented(&'static str),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Validation
            Self::MissingField { payload, .. } => payload.missing_code(),
            Self::InvalidType { payload, .. } => payload.type_code(),

            // Not Found
            Self::ThreadNotFound(_) => "UNKNOWN_THREAD",
            Self::CommentNotFound(_) => "UNKNOWN_COMMENT",

            // Authorization
            Self::NotCommentOwner => "NOT_COMMENT_OWNER",

            // Wiring
            Self::RepositoryUnimplemented(_) => "REPOSITORY.METHOD_NOT_IMPLEMENTED",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ThreadNotFound(_) | Self::CommentNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::MissingField { .. } | Self::InvalidType { .. })
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::NotCommentOwner)
    }
}
