//! User directory use-cases.
//!
//! [`UserDirectoryService`] fronts the [`UserRepository`] port and owns the
//! CRUD semantics the HTTP handlers rely on: drafts are validated before they
//! reach storage, updates are field-wise partial, and missing records surface
//! as a not-found domain error rather than an adapter failure.

use std::sync::Arc;

use tracing::info;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{DomainError, EmailAddress, User, UserId, UserName};

/// Validated input for creating a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
    name: UserName,
    email: EmailAddress,
}

impl UserDraft {
    /// Build a draft from validated components.
    pub fn new(name: UserName, email: EmailAddress) -> Self {
        Self { name, email }
    }

    /// Name for the new user.
    pub fn name(&self) -> &UserName {
        &self.name
    }

    /// Email for the new user.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }
}

/// Field-wise partial update for an existing user.
///
/// A `None` field means "keep the stored value". Both fields `None` is a
/// valid, empty update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserChanges {
    name: Option<UserName>,
    email: Option<EmailAddress>,
}

impl UserChanges {
    /// Build a change set from optional validated components.
    pub fn new(name: Option<UserName>, email: Option<EmailAddress>) -> Self {
        Self { name, email }
    }

    /// True when no field would change.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }

    fn apply(self, user: User) -> User {
        let Self { name, email } = self;
        let user = match name {
            Some(name) => user.with_name(name),
            None => user,
        };
        match email {
            Some(email) => user.with_email(email),
            None => user,
        }
    }
}

/// CRUD use-cases over the user repository port.
///
/// Handlers receive this service through the shared HTTP state instead of a
/// process-wide database handle, so tests can swap the repository for an
/// in-memory double.
#[derive(Clone)]
pub struct UserDirectoryService {
    repository: Arc<dyn UserRepository>,
}

fn map_persistence_error(error: UserPersistenceError) -> DomainError {
    match error {
        UserPersistenceError::Connection { message } => DomainError::service_unavailable(message),
        UserPersistenceError::Query { message } => DomainError::internal(message),
    }
}

fn missing_user(id: UserId) -> DomainError {
    DomainError::not_found(format!("no user with id {id}"))
}

impl UserDirectoryService {
    /// Create a service backed by the given repository.
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// All users in insertion order.
    pub async fn list(&self) -> Result<Vec<User>, DomainError> {
        self.repository
            .list_all()
            .await
            .map_err(map_persistence_error)
    }

    /// Insert a new user and return it with its assigned id.
    pub async fn add(&self, draft: UserDraft) -> Result<User, DomainError> {
        let user = self
            .repository
            .insert(&draft)
            .await
            .map_err(map_persistence_error)?;
        info!(user_id = %user.id(), "user created");
        Ok(user)
    }

    /// Fetch a single user, failing with not-found when absent.
    pub async fn get(&self, id: UserId) -> Result<User, DomainError> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(map_persistence_error)?
            .ok_or_else(|| missing_user(id))
    }

    /// Apply a field-wise partial update and return the stored result.
    ///
    /// Fields absent from `changes` keep their current values. Two racing
    /// updates resolve as last-write-wins; there is no conflict detection.
    pub async fn update(&self, id: UserId, changes: UserChanges) -> Result<User, DomainError> {
        let current = self.get(id).await?;
        let updated = changes.apply(current);

        let matched = self
            .repository
            .update(&updated)
            .await
            .map_err(map_persistence_error)?;
        if !matched {
            // The row vanished between fetch and write.
            return Err(missing_user(id));
        }
        info!(user_id = %id, "user updated");
        Ok(updated)
    }

    /// Delete a user, failing with not-found when absent.
    pub async fn remove(&self, id: UserId) -> Result<(), DomainError> {
        let matched = self
            .repository
            .delete(id)
            .await
            .map_err(map_persistence_error)?;
        if !matched {
            return Err(missing_user(id));
        }
        info!(user_id = %id, "user deleted");
        Ok(())
    }

    /// First user with an exactly matching name, if any.
    pub async fn find_by_name(&self, name: &UserName) -> Result<Option<User>, DomainError> {
        self.repository
            .find_by_name(name)
            .await
            .map_err(map_persistence_error)
    }
}

#[cfg(test)]
mod tests {
    //! Service semantics against an in-memory repository double.

    use std::sync::Mutex;

    use async_trait::async_trait;
    use rstest::rstest;

    use super::*;
    use crate::domain::ErrorCode;

    #[derive(Default)]
    struct StubState {
        users: Vec<User>,
        next_id: i32,
        fail_with: Option<UserPersistenceError>,
    }

    #[derive(Default)]
    struct StubUserRepository {
        state: Mutex<StubState>,
    }

    impl StubUserRepository {
        fn failing(error: UserPersistenceError) -> Self {
            Self {
                state: Mutex::new(StubState {
                    fail_with: Some(error),
                    ..StubState::default()
                }),
            }
        }

        fn check_failure(state: &StubState) -> Result<(), UserPersistenceError> {
            match &state.fail_with {
                Some(error) => Err(error.clone()),
                None => Ok(()),
            }
        }
    }

    #[async_trait]
    impl UserRepository for StubUserRepository {
        async fn insert(&self, draft: &UserDraft) -> Result<User, UserPersistenceError> {
            let mut state = self.state.lock().expect("state lock");
            Self::check_failure(&state)?;
            state.next_id += 1;
            let user = User::new(
                UserId::new(state.next_id).expect("stub ids are positive"),
                draft.name().clone(),
                draft.email().clone(),
            );
            state.users.push(user.clone());
            Ok(user)
        }

        async fn list_all(&self) -> Result<Vec<User>, UserPersistenceError> {
            let state = self.state.lock().expect("state lock");
            Self::check_failure(&state)?;
            Ok(state.users.clone())
        }

        async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
            let state = self.state.lock().expect("state lock");
            Self::check_failure(&state)?;
            Ok(state.users.iter().find(|u| u.id() == id).cloned())
        }

        async fn find_by_name(
            &self,
            name: &UserName,
        ) -> Result<Option<User>, UserPersistenceError> {
            let state = self.state.lock().expect("state lock");
            Self::check_failure(&state)?;
            Ok(state.users.iter().find(|u| u.name() == name).cloned())
        }

        async fn update(&self, user: &User) -> Result<bool, UserPersistenceError> {
            let mut state = self.state.lock().expect("state lock");
            Self::check_failure(&state)?;
            match state.users.iter_mut().find(|u| u.id() == user.id()) {
                Some(stored) => {
                    *stored = user.clone();
                    Ok(true)
                }
                None => Ok(false),
            }
        }

        async fn delete(&self, id: UserId) -> Result<bool, UserPersistenceError> {
            let mut state = self.state.lock().expect("state lock");
            Self::check_failure(&state)?;
            let before = state.users.len();
            state.users.retain(|u| u.id() != id);
            Ok(state.users.len() != before)
        }
    }

    fn service() -> UserDirectoryService {
        UserDirectoryService::new(Arc::new(StubUserRepository::default()))
    }

    fn draft(name: &str, email: &str) -> UserDraft {
        UserDraft::new(
            UserName::new(name).expect("name"),
            EmailAddress::new(email).expect("email"),
        )
    }

    #[tokio::test]
    async fn add_then_list_contains_the_user() {
        let service = service();
        service.add(draft("alice", "alice@x.com")).await.expect("add");

        let users = service.list().await.expect("list");
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].name().as_ref(), "alice");
    }

    #[tokio::test]
    async fn update_with_name_only_preserves_email() {
        let service = service();
        let user = service.add(draft("alice", "alice@x.com")).await.expect("add");

        let changes = UserChanges::new(Some(UserName::new("alice2").expect("name")), None);
        let updated = service.update(user.id(), changes).await.expect("update");

        assert_eq!(updated.name().as_ref(), "alice2");
        assert_eq!(updated.email().as_ref(), "alice@x.com");
    }

    #[tokio::test]
    async fn empty_update_leaves_the_record_unchanged() {
        let service = service();
        let user = service.add(draft("bob", "bob@x.com")).await.expect("add");

        let updated = service
            .update(user.id(), UserChanges::default())
            .await
            .expect("update");
        assert_eq!(updated, user);
    }

    #[tokio::test]
    async fn remove_then_find_by_name_returns_none() {
        let service = service();
        let user = service.add(draft("jesse", "jesse@x.com")).await.expect("add");

        service.remove(user.id()).await.expect("remove");

        let found = service
            .find_by_name(&UserName::new("jesse").expect("name"))
            .await
            .expect("find");
        assert!(found.is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn operations_on_missing_id_report_not_found() {
        let service = service();
        let id = UserId::new(99).expect("id");

        let get_err = service.get(id).await.expect_err("get should fail");
        assert_eq!(get_err.code(), ErrorCode::NotFound);

        let update_err = service
            .update(id, UserChanges::default())
            .await
            .expect_err("update should fail");
        assert_eq!(update_err.code(), ErrorCode::NotFound);

        let remove_err = service.remove(id).await.expect_err("remove should fail");
        assert_eq!(remove_err.code(), ErrorCode::NotFound);
    }

    #[rstest]
    #[case(
        UserPersistenceError::connection("database unavailable"),
        ErrorCode::ServiceUnavailable
    )]
    #[case(
        UserPersistenceError::query("database query failed"),
        ErrorCode::InternalError
    )]
    #[tokio::test]
    async fn persistence_failures_map_to_domain_codes(
        #[case] failure: UserPersistenceError,
        #[case] expected: ErrorCode,
    ) {
        let service = UserDirectoryService::new(Arc::new(StubUserRepository::failing(failure)));
        let error = service.list().await.expect_err("list should fail");
        assert_eq!(error.code(), expected);
    }
}
