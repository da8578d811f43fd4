//! Domain error translation
//!
//! Maps domain failures onto the status and user-facing message returned
//! by the API. Errors without an entry are reported as server failures.

use axum::http::StatusCode;
use forum_core::{DomainError, PayloadKind};

/// Message used for every 5xx response
pub const SERVER_FAILURE_MESSAGE: &str = "terjadi kegagalan pada server kami";

/// A client-facing rendering of a domain error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translation {
    pub status: StatusCode,
    pub message: &'static str,
}

impl Translation {
    const fn new(status: StatusCode, message: &'static str) -> Self {
        Self { status, message }
    }
}

/// Look up the client-facing rendering of a domain error
pub fn translate(err: &DomainError) -> Option<Translation> {
    let translation = match err {
        DomainError::ThreadNotFound(_) => Translation::new(StatusCode::NOT_FOUND, "Thread tidak ada"),
        DomainError::CommentNotFound(_) => {
            Translation::new(StatusCode::NOT_FOUND, "Komentar tidak ada")
        }
        DomainError::NotCommentOwner => Translation::new(
            StatusCode::FORBIDDEN,
            "Komentar Gagal dihapus. Bukan komentar anda",
        ),
        DomainError::MissingField { payload, .. } => {
            Translation::new(StatusCode::BAD_REQUEST, missing_field_message(*payload)?)
        }
        DomainError::InvalidType { payload, .. } => {
            Translation::new(StatusCode::BAD_REQUEST, invalid_type_message(*payload)?)
        }
        DomainError::RepositoryUnimplemented(_)
        | DomainError::DatabaseError(_)
        | DomainError::InternalError(_) => return None,
    };

    Some(translation)
}

fn missing_field_message(payload: PayloadKind) -> Option<&'static str> {
    match payload {
        PayloadKind::AddThread => Some("Thread gagal dibuat. Informasi masih kurang lengkap"),
        PayloadKind::AddComment => {
            Some("Gagal menambahkan komentar. Properti yang di butuhkan kurang lengkap")
        }
        PayloadKind::GetThread => Some("Thread tidak valid"),
        PayloadKind::DeleteComment => {
            Some("Gagal menghapus komentar. Properti yang di butuhkan kurang lengkap")
        }
        // Entities built from stored rows; a failure here is a server fault
        PayloadKind::AddedThread | PayloadKind::AddedComment | PayloadKind::DetailsComment => None,
    }
}

fn invalid_type_message(payload: PayloadKind) -> Option<&'static str> {
    match payload {
        PayloadKind::AddThread => Some("Thread gagal dibuat. Bentuk informasi kurang sesuai"),
        PayloadKind::AddComment => Some("Gagal menambahkan komentar. Bentuk content tidak sesuai"),
        PayloadKind::GetThread => Some("Thread tidak valid"),
        _ => None,
    }
}
