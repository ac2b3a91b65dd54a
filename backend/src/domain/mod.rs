//! Domain primitives and use-cases.
//!
//! Purpose: define strongly typed domain entities and the directory service
//! used by the HTTP and persistence layers. Keep types immutable and document
//! invariants in each type's Rustdoc.
//!
//! Public surface:
//! - [`User`], [`UserId`], [`UserName`], [`EmailAddress`] — the entity and
//!   its validated fields.
//! - [`UserDraft`], [`UserChanges`], [`UserDirectoryService`] — CRUD
//!   use-cases over the repository port.
//! - [`DomainError`], [`ErrorCode`] — transport-agnostic failures.

pub mod directory;
pub mod error;
pub mod ports;
pub mod user;

pub use self::directory::{UserChanges, UserDirectoryService, UserDraft};
pub use self::error::{DomainError, ErrorCode};
pub use self::user::{EmailAddress, User, UserId, UserName, UserValidationError};
