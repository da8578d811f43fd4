//! Service context - dependency container for use cases
//!
//! Holds the repositories and the token service the use cases and handlers need.

use std::sync::Arc;

use forum_common::JwtService;
use forum_core::error::DomainError;
use forum_core::traits::{CommentRepository, ThreadRepository};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    thread_repo: Arc<dyn ThreadRepository>,
    comment_repo: Arc<dyn CommentRepository>,

    // Services
    jwt_service: Arc<JwtService>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        thread_repo: Arc<dyn ThreadRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        jwt_service: Arc<JwtService>,
    ) -> Self {
        Self {
            thread_repo,
            comment_repo,
            jwt_service,
        }
    }

    // === Repositories ===

    /// Get the thread repository
    pub fn thread_repo(&self) -> &dyn ThreadRepository {
        self.thread_repo.as_ref()
    }

    /// Get the comment repository
    pub fn comment_repo(&self) -> &dyn CommentRepository {
        self.comment_repo.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("jwt_service", &self.jwt_service)
            .finish()
    }
}

/// Builder for creating ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    thread_repo: Option<Arc<dyn ThreadRepository>>,
    comment_repo: Option<Arc<dyn CommentRepository>>,
    jwt_service: Option<Arc<JwtService>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn thread_repo(mut self, repo: Arc<dyn ThreadRepository>) -> Self {
        self.thread_repo = Some(repo);
        self
    }

    pub fn comment_repo(mut self, repo: Arc<dyn CommentRepository>) -> Self {
        self.comment_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `RepositoryUnimplemented` if a repository was never wired, and
    /// `InternalError` if the token service is missing
    pub fn build(self) -> Result<ServiceContext, DomainError> {
        Ok(ServiceContext::new(
            self.thread_repo
                .ok_or(DomainError::RepositoryUnimplemented("ThreadRepository"))?,
            self.comment_repo
                .ok_or(DomainError::RepositoryUnimplemented("CommentRepository"))?,
            self.jwt_service
                .ok_or_else(|| DomainError::InternalError("jwt_service is required".to_string()))?,
        ))
    }
}
