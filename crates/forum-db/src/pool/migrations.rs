//! Schema migrations compiled into the binary
//!
//! The SQL under `migrations/` is embedded at build time, so a deployed
//! binary can migrate its database without the source tree.

use std::borrow::Cow;
use std::future::Future;
use std::pin::Pin;

use sqlx::error::BoxDynError;
use sqlx::migrate::{MigrateError, Migration, MigrationSource, MigrationType, Migrator};
use sqlx::postgres::PgPool;
use tracing::info;

#[allow(clippy::unreadable_literal)]
const MIGRATIONS: &[(i64, &str, &str)] = &[
    (
        20240101000000,
        "create threads",
        include_str!("../../migrations/20240101000000_create_threads.sql"),
    ),
    (
        20240101000001,
        "create comments",
        include_str!("../../migrations/20240101000001_create_comments.sql"),
    ),
];

/// Migration source backed by the embedded SQL files
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedMigrations;

impl EmbeddedMigrations {
    /// The embedded migrations, oldest first
    pub fn migrations() -> Vec<Migration> {
        MIGRATIONS
            .iter()
            .map(|&(version, description, sql)| {
                Migration::new(
                    version,
                    Cow::Borrowed(description),
                    MigrationType::Simple,
                    Cow::Borrowed(sql),
                    false,
                )
            })
            .collect()
    }
}

impl<'s> MigrationSource<'s> for EmbeddedMigrations {
    fn resolve(
        self,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<Migration>, BoxDynError>> + Send + 's>> {
        Box::pin(async move { Ok(Self::migrations()) })
    }
}

/// Apply any pending embedded migrations
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    let migrator = Migrator::new(EmbeddedMigrations).await?;
    migrator.run(pool).await?;

    info!(count = migrator.iter().count(), "Migrations applied");
    Ok(())
}
