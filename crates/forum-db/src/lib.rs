//! # forum-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for the repository traits
//! defined in `forum-core`. It handles:
//!
//! - Connection pool management and schema migrations
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use forum_core::RandomIdGenerator;
//! use forum_db::{create_pool, run_migrations, DatabaseConfig, PgThreadRepository};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::default()).await?;
//!     run_migrations(&pool).await?;
//!     let thread_repo = PgThreadRepository::new(pool, Arc::new(RandomIdGenerator));
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, run_migrations, DatabaseConfig, EmbeddedMigrations, PgPool};
pub use repositories::{PgCommentRepository, PgThreadRepository};
