//! Test helpers for inbound HTTP components.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{User, UserDirectoryService, UserDraft, UserId, UserName};
use crate::inbound::http::state::HttpState;

/// In-memory `UserRepository` double with autoincrement ids.
#[derive(Default)]
pub(crate) struct InMemoryUserRepository {
    state: Mutex<(Vec<User>, i32)>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, draft: &UserDraft) -> Result<User, UserPersistenceError> {
        let mut state = self.state.lock().expect("state lock");
        state.1 += 1;
        let user = User::new(
            UserId::new(state.1).expect("ids are positive"),
            draft.name().clone(),
            draft.email().clone(),
        );
        state.0.push(user.clone());
        Ok(user)
    }

    async fn list_all(&self) -> Result<Vec<User>, UserPersistenceError> {
        Ok(self.state.lock().expect("state lock").0.clone())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        let state = self.state.lock().expect("state lock");
        Ok(state.0.iter().find(|u| u.id() == id).cloned())
    }

    async fn find_by_name(&self, name: &UserName) -> Result<Option<User>, UserPersistenceError> {
        let state = self.state.lock().expect("state lock");
        Ok(state.0.iter().find(|u| u.name() == name).cloned())
    }

    async fn update(&self, user: &User) -> Result<bool, UserPersistenceError> {
        let mut state = self.state.lock().expect("state lock");
        match state.0.iter_mut().find(|u| u.id() == user.id()) {
            Some(stored) => {
                *stored = user.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: UserId) -> Result<bool, UserPersistenceError> {
        let mut state = self.state.lock().expect("state lock");
        let before = state.0.len();
        state.0.retain(|u| u.id() != id);
        Ok(state.0.len() != before)
    }
}

/// HTTP state backed by an empty in-memory repository.
pub(crate) fn in_memory_state() -> HttpState {
    HttpState::new(UserDirectoryService::new(Arc::new(
        InMemoryUserRepository::default(),
    )))
}
