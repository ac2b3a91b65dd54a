//! Diesel table definitions for the SQLite schema.
//!
//! These definitions must match the embedded migrations exactly. They are
//! used by Diesel for compile-time query validation and type-safe SQL
//! generation.

diesel::table! {
    /// User accounts table.
    ///
    /// The `id` column is an autoincrement primary key, so ascending id
    /// order is insertion order.
    users (id) {
        /// Primary key assigned by SQLite on insert.
        id -> Integer,
        /// Human-readable name; non-empty by application invariant.
        name -> Text,
        /// Contact email; non-empty by application invariant, otherwise
        /// unconstrained.
        email -> Text,
    }
}
