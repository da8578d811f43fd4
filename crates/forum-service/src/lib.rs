//! # forum-service
//!
//! Application layer: use cases that validate payloads through domain
//! entities and orchestrate repository calls.

pub mod context;
pub mod use_cases;

pub use context::{ServiceContext, ServiceContextBuilder};
pub use use_cases::{
    AddCommentUseCase, AddThreadUseCase, DeleteCommentUseCase, GetDetailsThreadUseCase,
};
