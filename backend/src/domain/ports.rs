//! Domain ports defining the edges of the hexagon.
//!
//! Ports describe how the domain expects to interact with driven adapters.
//! The trait exposes strongly typed errors so adapters map their failures
//! into predictable categories instead of leaking backend details.

use async_trait::async_trait;

use crate::domain::{User, UserDraft, UserId, UserName};

/// Persistence errors raised by user repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserPersistenceError {
    /// Repository connection could not be established.
    #[error("user repository connection failed: {message}")]
    Connection {
        /// Adapter-supplied description of the connection failure.
        message: String,
    },
    /// Query or mutation failed during execution.
    #[error("user repository query failed: {message}")]
    Query {
        /// Adapter-supplied description of the failed operation.
        message: String,
    },
}

impl UserPersistenceError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Port for user persistence adapters.
///
/// Rows are owned exclusively by the adapter behind this trait; callers only
/// hold the returned [`User`] values for the duration of a request.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new record and return it with its database-assigned id.
    async fn insert(&self, draft: &UserDraft) -> Result<User, UserPersistenceError>;

    /// Fetch every user in insertion order.
    async fn list_all(&self) -> Result<Vec<User>, UserPersistenceError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Fetch the first user with an exactly matching name.
    async fn find_by_name(&self, name: &UserName) -> Result<Option<User>, UserPersistenceError>;

    /// Overwrite the stored fields of the row matching `user.id()`.
    ///
    /// Returns `false` when no such row exists.
    async fn update(&self, user: &User) -> Result<bool, UserPersistenceError>;

    /// Delete the row with the given id.
    ///
    /// Returns `false` when no such row exists.
    async fn delete(&self, id: UserId) -> Result<bool, UserPersistenceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_accept_str_for_string_fields() {
        let err = UserPersistenceError::connection("refused");
        assert_eq!(
            err.to_string(),
            "user repository connection failed: refused"
        );

        let err = UserPersistenceError::query("no such table");
        assert_eq!(
            err.to_string(),
            "user repository query failed: no such table"
        );
    }
}
