//! SQLite-backed `UserRepository` implementation using Diesel ORM.
//!
//! This adapter implements the domain's `UserRepository` port. It only
//! translates between Diesel rows and domain types; CRUD semantics such as
//! partial-update merging live in the domain service. SQLite connections
//! are blocking, so every operation checks out a pooled connection on the
//! blocking thread pool.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use tracing::debug;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{User, UserDraft, UserId, UserName};

use super::models::{NewUserRow, UserRow, UserRowChanges};
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Diesel-backed implementation of the `UserRepository` port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Run a closure against a pooled connection on the blocking pool.
    async fn with_conn<T, F>(&self, op: F) -> Result<T, UserPersistenceError>
    where
        T: Send + 'static,
        F: FnOnce(&mut SqliteConnection) -> Result<T, UserPersistenceError> + Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = pool.get().map_err(map_pool_error)?;
            op(&mut conn)
        })
        .await
        .map_err(|err| UserPersistenceError::query(format!("database task failed: {err}")))?
    }
}

/// Map pool errors to domain persistence errors.
fn map_pool_error(error: PoolError) -> UserPersistenceError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            UserPersistenceError::connection(message)
        }
    }
}

/// Map Diesel errors to domain persistence errors.
fn map_diesel_error(error: diesel::result::Error) -> UserPersistenceError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(error = %error, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            UserPersistenceError::connection("database connection error")
        }
        DieselError::DatabaseError(_, _) => UserPersistenceError::query("database error"),
        other => UserPersistenceError::query(other.to_string()),
    }
}

/// Convert a stored row, reporting invariant violations as query errors.
fn row_into_user(row: UserRow) -> Result<User, UserPersistenceError> {
    row.into_user()
        .map_err(|err| UserPersistenceError::query(format!("stored user row is invalid: {err}")))
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn insert(&self, draft: &UserDraft) -> Result<User, UserPersistenceError> {
        let name = draft.name().as_ref().to_owned();
        let email = draft.email().as_ref().to_owned();

        self.with_conn(move |conn| {
            let row = diesel::insert_into(users::table)
                .values(NewUserRow {
                    name: &name,
                    email: &email,
                })
                .returning(UserRow::as_returning())
                .get_result::<UserRow>(conn)
                .map_err(map_diesel_error)?;
            row_into_user(row)
        })
        .await
    }

    async fn list_all(&self) -> Result<Vec<User>, UserPersistenceError> {
        self.with_conn(|conn| {
            let rows = users::table
                .order(users::id.asc())
                .select(UserRow::as_select())
                .load::<UserRow>(conn)
                .map_err(map_diesel_error)?;
            rows.into_iter().map(row_into_user).collect()
        })
        .await
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        self.with_conn(move |conn| {
            let row = users::table
                .find(id.as_i32())
                .select(UserRow::as_select())
                .first::<UserRow>(conn)
                .optional()
                .map_err(map_diesel_error)?;
            row.map(row_into_user).transpose()
        })
        .await
    }

    async fn find_by_name(&self, name: &UserName) -> Result<Option<User>, UserPersistenceError> {
        let name = name.as_ref().to_owned();

        self.with_conn(move |conn| {
            let row = users::table
                .filter(users::name.eq(&name))
                .order(users::id.asc())
                .select(UserRow::as_select())
                .first::<UserRow>(conn)
                .optional()
                .map_err(map_diesel_error)?;
            row.map(row_into_user).transpose()
        })
        .await
    }

    async fn update(&self, user: &User) -> Result<bool, UserPersistenceError> {
        let id = user.id().as_i32();
        let name = user.name().as_ref().to_owned();
        let email = user.email().as_ref().to_owned();

        self.with_conn(move |conn| {
            let matched = diesel::update(users::table.find(id))
                .set(UserRowChanges {
                    name: &name,
                    email: &email,
                })
                .execute(conn)
                .map_err(map_diesel_error)?;
            Ok(matched > 0)
        })
        .await
    }

    async fn delete(&self, id: UserId) -> Result<bool, UserPersistenceError> {
        self.with_conn(move |conn| {
            let matched = diesel::delete(users::table.find(id.as_i32()))
                .execute(conn)
                .map_err(map_diesel_error)?;
            Ok(matched > 0)
        })
        .await
    }
}
