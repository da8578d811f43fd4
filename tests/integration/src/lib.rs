//! Integration test utilities for the forum API
//!
//! The router is driven in-process with `tower::ServiceExt::oneshot`
//! against in-memory repositories, so no database is needed.

pub mod helpers;
pub mod memory;

pub use fixtures::*;
pub use helpers::*;
pub use memory::{ForumStore, InMemoryCommentRepository, InMemoryThreadRepository};
