//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. They exist solely to satisfy Diesel's
//! type requirements for queries and mutations.

use diesel::prelude::*;

use crate::domain::{EmailAddress, User, UserId, UserName, UserValidationError};

use super::schema::users;

/// Queryable row for the `users` table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct UserRow {
    pub id: i32,
    pub name: String,
    pub email: String,
}

impl UserRow {
    /// Convert a stored row into the domain entity.
    ///
    /// Fails when a row violates the domain invariants (blank name or
    /// email); the adapter reports that as a query error rather than
    /// letting an invalid entity escape.
    pub(crate) fn into_user(self) -> Result<User, UserValidationError> {
        let id = UserId::new(self.id)?;
        let name = UserName::new(self.name)?;
        let email = EmailAddress::new(self.email)?;
        Ok(User::new(id, name, email))
    }
}

/// Insertable row for creating a user.
#[derive(Debug, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub name: &'a str,
    pub email: &'a str,
}

/// Changeset overwriting both mutable columns of a user row.
///
/// Partial-update merging happens in the domain service; by the time a write
/// reaches this layer both fields carry their final values.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = users)]
pub(crate) struct UserRowChanges<'a> {
    pub name: &'a str,
    pub email: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_conversion_builds_the_domain_entity() {
        let row = UserRow {
            id: 3,
            name: "alice".into(),
            email: "alice@x.com".into(),
        };

        let user = row.into_user().expect("valid row");
        assert_eq!(user.id().as_i32(), 3);
        assert_eq!(user.name().as_ref(), "alice");
        assert_eq!(user.email().as_ref(), "alice@x.com");
    }

    #[test]
    fn row_conversion_rejects_blank_fields() {
        let row = UserRow {
            id: 1,
            name: "  ".into(),
            email: "a@x.com".into(),
        };

        assert_eq!(row.into_user(), Err(UserValidationError::EmptyName));
    }
}
