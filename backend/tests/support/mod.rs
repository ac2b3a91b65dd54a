//! Shared helper utilities for backend integration tests.
//!
//! Integration tests compile as separate crates under `backend/tests/`, which
//! makes it awkward to share small helpers without copy/paste. This module is
//! the common home for database fixtures.

use std::time::Duration;

use tempfile::TempDir;

use userboard::outbound::persistence::{DbPool, PoolConfig, prepare_database};

/// A pooled SQLite database in a temporary directory.
///
/// The directory is removed when the value drops, taking the database file
/// with it.
pub struct TestDb {
    /// Pool over the temporary database file.
    pub pool: DbPool,
    _dir: TempDir,
}

/// Create a fresh database file with the schema applied.
pub async fn test_db() -> TestDb {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("users.db");
    let url = path.to_str().expect("utf-8 temp path").to_owned();

    let pool = DbPool::new(
        PoolConfig::new(url)
            .with_max_size(2)
            .with_busy_timeout(Duration::from_secs(1)),
    )
    .expect("build pool");
    prepare_database(&pool).await.expect("run migrations");

    TestDb { pool, _dir: dir }
}
