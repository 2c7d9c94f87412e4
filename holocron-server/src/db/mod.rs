//! Database layer - connection pool, schema bootstrap and repositories
//!
//! # Design Principles
//!
//! - One `AnyPool` serves both PostgreSQL and SQLite
//! - Rely on DB constraints, handle conflicts - no check-then-insert
//! - Single-statement writes; SQLite cannot upgrade a deferred read lock

pub mod pool;
pub mod repos;
pub mod schema;

pub use pool::{connect, create_pool, Backend, DEFAULT_MAX_CONNECTIONS, FALLBACK_DATABASE_URL};
pub use repos::*;
pub use sqlx::AnyPool;
