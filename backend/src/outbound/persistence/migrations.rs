//! Embedded schema migrations.
//!
//! Migrations are compiled into the binary so a fresh database file is
//! provisioned on startup without external tooling. The harness records
//! applied versions in its bookkeeping table, which makes
//! [`run_migrations`] idempotent: re-running against an up-to-date
//! database applies nothing and touches no rows.

use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;

use super::pool::DbPool;

/// All migrations shipped with this crate.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Failure applying embedded migrations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("schema migration failed: {message}")]
pub struct MigrationError {
    /// Underlying harness failure description.
    message: String,
}

impl MigrationError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Apply any pending migrations on the given connection.
pub fn run_migrations(conn: &mut SqliteConnection) -> Result<(), MigrationError> {
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| MigrationError::new(err.to_string()))?;
    if !applied.is_empty() {
        info!(count = applied.len(), "applied schema migrations");
    }
    Ok(())
}

/// Check out a connection and bring the schema up to date.
///
/// Runs on the blocking thread pool; intended for startup and test setup.
pub async fn prepare_database(pool: &DbPool) -> Result<(), MigrationError> {
    let pool = pool.clone();
    tokio::task::spawn_blocking(move || {
        let mut conn = pool
            .get()
            .map_err(|err| MigrationError::new(err.to_string()))?;
        run_migrations(&mut conn)
    })
    .await
    .map_err(|err| MigrationError::new(format!("migration task failed: {err}")))?
}
