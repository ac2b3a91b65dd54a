//! Server-rendered user directory: CRUD pages over a SQLite-backed store.

pub mod domain;
pub mod inbound;
pub mod outbound;
pub mod server;
