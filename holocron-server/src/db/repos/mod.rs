//! Repository implementations for database access
//!
//! Each repository borrows the shared pool and follows these patterns:
//! - Lists are ordered by primary key
//! - Uniqueness is enforced by the database, not by check-then-insert
//! - Writes are single autocommit statements, never read-then-write transactions

pub mod favorites;
pub mod named;
pub mod users;

pub use favorites::{Favorite, FavoriteRepo};
pub use named::{Catalog, NamedRecord, NamedRepo};
pub use users::{UserRepo, UserRow, UserWithFavorites};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("unsupported database scheme: {0}")]
    UnsupportedBackend(String),
}

impl DbError {
    pub(crate) fn not_found(resource: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }
}

/// True when the error is a unique constraint violation
pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(e) if e.is_unique_violation())
}

/// True when the error is a foreign key violation
pub(crate) fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(e) if e.is_foreign_key_violation())
}
