//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data`, so every
//! dependency is injected explicitly rather than reached through a
//! process-wide singleton. Tests swap the repository behind the directory
//! service for an in-memory double.

use crate::domain::UserDirectoryService;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// User directory use-cases backing the five routes.
    pub users: UserDirectoryService,
}

impl HttpState {
    /// Construct state around the directory service.
    pub fn new(users: UserDirectoryService) -> Self {
        Self { users }
    }
}
