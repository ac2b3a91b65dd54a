//! SQLite persistence adapters using Diesel ORM.
//!
//! This module provides the concrete implementation of the domain's user
//! repository port, backed by a SQLite database file via Diesel.
//!
//! # Architecture
//!
//! - **Thin adapters**: the repository implementation only translates
//!   between Diesel rows and domain types. No business logic resides here.
//! - **Internal models**: Diesel row structs (`models.rs`) and schema
//!   definitions (`schema.rs`) are implementation details, never exposed to
//!   the domain layer.
//! - **Blocking at the edge**: SQLite has no async driver, so adapters hop
//!   onto the blocking thread pool around each pooled connection.
//! - **Strongly typed errors**: all database errors are mapped to domain
//!   persistence error types.
//!
//! # Example
//!
//! ```ignore
//! use userboard::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("users.db"))?;
//! prepare_database(&pool).await?;
//! let repo = DieselUserRepository::new(pool);
//! ```

mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MIGRATIONS, MigrationError, prepare_database, run_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
