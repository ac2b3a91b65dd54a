//! Connection pool for Diesel SQLite connections.
//!
//! This module wraps diesel's `r2d2` support to provide a pooled handle on
//! the database file. SQLite connections are blocking, so the pool hands out
//! synchronous connections and the repository adapters move work onto the
//! blocking thread pool before checkout.
//!
//! # Design
//!
//! - Every acquired connection gets a busy timeout so concurrent writers
//!   queue on SQLite's file lock instead of failing immediately. That lock
//!   is the only cross-request serialization in the application.
//! - All errors are mapped to [`PoolError`] variants.

use std::time::Duration;

use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PooledConnection};
use diesel::sqlite::SqliteConnection;

/// Errors that can occur during pool operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PoolError {
    /// Failed to check out a connection from the pool.
    #[error("failed to get connection from pool: {message}")]
    Checkout {
        /// Underlying r2d2 failure description.
        message: String,
    },

    /// Failed to build the connection pool.
    #[error("failed to build connection pool: {message}")]
    Build {
        /// Underlying r2d2 failure description.
        message: String,
    },
}

impl PoolError {
    /// Create a checkout error with the given message.
    pub fn checkout(message: impl Into<String>) -> Self {
        Self::Checkout {
            message: message.into(),
        }
    }

    /// Create a build error with the given message.
    pub fn build(message: impl Into<String>) -> Self {
        Self::Build {
            message: message.into(),
        }
    }
}

/// Configuration for the database connection pool.
///
/// # Example
///
/// ```ignore
/// let config = PoolConfig::new("users.db")
///     .with_max_size(4)
///     .with_busy_timeout(Duration::from_secs(1));
/// ```
#[derive(Debug, Clone)]
pub struct PoolConfig {
    database_url: String,
    max_size: u32,
    connection_timeout: Duration,
    busy_timeout: Duration,
}

impl PoolConfig {
    /// Create a new configuration for the given database file path.
    ///
    /// Uses sensible defaults:
    /// - `max_size`: 10 connections
    /// - `connection_timeout`: 30 seconds
    /// - `busy_timeout`: 5 seconds
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_size: 10,
            connection_timeout: Duration::from_secs(30),
            busy_timeout: Duration::from_secs(5),
        }
    }

    /// Set the maximum number of connections in the pool.
    pub fn with_max_size(mut self, max_size: u32) -> Self {
        self.max_size = max_size;
        self
    }

    /// Set the pool checkout timeout.
    pub fn with_connection_timeout(mut self, timeout: Duration) -> Self {
        self.connection_timeout = timeout;
        self
    }

    /// Set how long a connection waits on SQLite's file lock before a
    /// busy error surfaces.
    pub fn with_busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }

    /// Get the database file path.
    pub fn database_url(&self) -> &str {
        &self.database_url
    }
}

/// Applies per-connection pragmas when the pool opens a connection.
#[derive(Debug)]
struct ConnectionPragmas {
    busy_timeout: Duration,
}

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for ConnectionPragmas {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        let millis = self.busy_timeout.as_millis();
        conn.batch_execute(&format!(
            "PRAGMA busy_timeout = {millis}; PRAGMA foreign_keys = ON;"
        ))
        .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Pooled connection handle used by the repository adapters.
pub(crate) type SqlitePooledConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

/// Connection pool over the SQLite database file.
///
/// # Example
///
/// ```ignore
/// let pool = DbPool::new(config)?;
/// let mut conn = pool.get()?;
/// // Use conn for Diesel operations...
/// ```
#[derive(Clone)]
pub struct DbPool {
    inner: Pool<ConnectionManager<SqliteConnection>>,
}

impl DbPool {
    /// Create a new connection pool with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Build`] if the pool cannot be constructed, e.g.
    /// when the database file path is not writable.
    pub fn new(config: PoolConfig) -> Result<Self, PoolError> {
        let manager = ConnectionManager::<SqliteConnection>::new(config.database_url());

        let pool = Pool::builder()
            .max_size(config.max_size)
            .connection_timeout(config.connection_timeout)
            .connection_customizer(Box::new(ConnectionPragmas {
                busy_timeout: config.busy_timeout,
            }))
            .build(manager)
            .map_err(|err| PoolError::build(err.to_string()))?;

        Ok(Self { inner: pool })
    }

    /// Get a connection from the pool.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Checkout`] if a connection cannot be obtained
    /// within the configured timeout.
    pub fn get(&self) -> Result<SqlitePooledConnection, PoolError> {
        self.inner
            .get()
            .map_err(|err| PoolError::checkout(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn pool_config_default_values() {
        let config = PoolConfig::new("users.db");

        assert_eq!(config.database_url(), "users.db");
        assert_eq!(config.max_size, 10);
        assert_eq!(config.connection_timeout, Duration::from_secs(30));
        assert_eq!(config.busy_timeout, Duration::from_secs(5));
    }

    #[rstest]
    fn pool_config_builder_pattern() {
        let config = PoolConfig::new("users.db")
            .with_max_size(4)
            .with_connection_timeout(Duration::from_secs(60))
            .with_busy_timeout(Duration::from_secs(1));

        assert_eq!(config.max_size, 4);
        assert_eq!(config.connection_timeout, Duration::from_secs(60));
        assert_eq!(config.busy_timeout, Duration::from_secs(1));
    }

    #[rstest]
    fn pool_error_display() {
        let checkout_err = PoolError::checkout("timed out");
        let build_err = PoolError::build("unable to open database file");

        assert!(checkout_err.to_string().contains("timed out"));
        assert!(build_err.to_string().contains("unable to open"));
    }
}
